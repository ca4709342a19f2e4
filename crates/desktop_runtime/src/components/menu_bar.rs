use super::*;

const MENU_TITLES: [&str; 6] = ["File", "Edit", "View", "Go", "Window", "Help"];
const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct MenuBarClockSnapshot {
    /// 0 = Sunday.
    weekday: u32,
    /// 1-based.
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl MenuBarClockSnapshot {
    pub(super) fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                weekday: date.get_day(),
                month: date.get_month() + 1,
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                weekday: 4,
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
            }
        }
    }
}

pub(super) fn format_menu_bar_date(snapshot: MenuBarClockSnapshot) -> String {
    let weekday = WEEKDAYS.get(snapshot.weekday as usize).copied().unwrap_or("");
    let month = MONTHS
        .get(snapshot.month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("");
    format!("{weekday} {month} {}", snapshot.day)
}

pub(super) fn format_menu_bar_time(snapshot: MenuBarClockSnapshot) -> String {
    let mut hour = snapshot.hour % 12;
    if hour == 0 {
        hour = 12;
    }
    let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
    format!("{hour}:{:02} {suffix}", snapshot.minute)
}

#[component]
pub(super) fn MenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let clock_now = create_rw_signal(MenuBarClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(MenuBarClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let active_application =
        move || runtime.state.with(|desktop| desktop.active_application().to_string());

    view! {
        <nav class="menu-bar" aria-label="Menu bar">
            <div class="menu-bar-left">
                <span class="menu-bar-logo" aria-hidden="true">"☠"</span>
                <span class="menu-bar-active-app">{active_application}</span>
                {MENU_TITLES
                    .iter()
                    .map(|title| view! { <span class="menu-bar-title">{*title}</span> })
                    .collect_view()}
            </div>
            <div class="menu-bar-right">
                <span class="menu-bar-date">
                    {move || format_menu_bar_date(clock_now.get())}
                </span>
                <time class="menu-bar-time">
                    {move || format_menu_bar_time(clock_now.get())}
                </time>
            </div>
        </nav>
    }
}
