//! Terminal desktop app: a banner, a one-line prompt, and the `exit` keyword.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod input;

use desktop_app_contract::{window_primary_input_dom_id, AppMountContext, AppServices};
use leptos::ev::KeyboardEvent;
use leptos::*;

pub use input::{parse_command, TerminalCommand, TerminalInput, MAX_INPUT_CHARS};

/// Window type identifier the terminal is registered under.
pub const APP_ID: &str = "system.terminal";

const BANNER: &str = r"
 ██████╗ ██╗  ██╗██████╗ ██╗   ██╗██████╗ ██████╗ ███████╗███╗   ██╗
██╔═████╗╚██╗██╔╝██╔══██╗██║   ██║██╔══██╗██╔══██╗██╔════╝████╗  ██║
██║██╔██║ ╚███╔╝ ██████╔╝██║   ██║██████╔╝██║  ██║█████╗  ██╔██╗ ██║
████╔╝██║ ██╔██╗ ██╔══██╗██║   ██║██╔══██╗██║  ██║██╔══╝  ██║╚██╗██║
╚██████╔╝██╔╝ ██╗██████╔╝╚██████╔╝██║  ██║██████╔╝███████╗██║ ╚████║
 ╚═════╝ ╚═╝  ╚═╝╚═════╝  ╚═════╝ ╚═╝  ╚═╝╚═════╝ ╚══════╝╚═╝  ╚═══╝
";

/// Evaluates the buffered line and clears it. `exit` closes the hosting window.
fn submit_line(buffer: RwSignal<TerminalInput>, services: AppServices) {
    let command = buffer.try_update(TerminalInput::submit).flatten();
    if let Some(TerminalCommand::Exit) = command {
        services.window.close();
    }
}

#[component]
/// Terminal app window contents.
///
/// The visible prompt mirrors a visually hidden input that owns keyboard focus.
pub fn TerminalApp(
    /// DOM id for the hidden input so the runtime can focus it when the window opens.
    input_id: String,
    /// Runtime services used to close the hosting window on `exit`.
    services: AppServices,
) -> impl IntoView {
    let buffer = create_rw_signal(TerminalInput::default());

    // No `maxlength`: the DOM counts UTF-16 units, the buffer counts chars.
    let on_input = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        let accepted = buffer
            .try_update(|buffer| buffer.set(value))
            .unwrap_or(false);
        if !accepted {
            let field = event_target::<web_sys::HtmlInputElement>(&ev);
            field.set_value(buffer.with_untracked(|buffer| buffer.as_str().to_string()).as_str());
        }
    };

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();
        submit_line(buffer, services);
    };

    view! {
        <label class="app-shell terminal-screen">
            <pre class="terminal-banner" aria-hidden="true">{BANNER}</pre>
            <div class="terminal-prompt-line">
                <span class="terminal-cwd">"~"</span>
                <span class="terminal-sigil">"$"</span>
                <span class="terminal-echo">{move || buffer.with(|buffer| buffer.as_str().to_string())}</span>
                <span class="terminal-cursor" aria-hidden="true">"▋"</span>
            </div>
            <input
                id=input_id
                class="visually-hidden"
                type="text"
                aria-label="Terminal input"
                autocomplete="off"
                spellcheck="false"
                prop:value=move || buffer.with(|buffer| buffer.as_str().to_string())
                on:input=on_input
                on:keydown=on_keydown
            />
        </label>
    }
}

/// Mounts the terminal into a window body.
pub fn mount(context: AppMountContext) -> View {
    view! {
        <TerminalApp
            input_id=window_primary_input_dom_id(&context.app_id)
            services=context.services
        />
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use desktop_app_contract::AppCommand;
    use pretty_assertions::assert_eq;

    use super::*;

    fn recording_services() -> (AppServices, Rc<RefCell<Vec<AppCommand>>>) {
        let sent = Rc::new(RefCell::new(Vec::new()));
        let services = AppServices::new(Callback::new({
            let sent = Rc::clone(&sent);
            move |command| sent.borrow_mut().push(command)
        }));
        (services, sent)
    }

    #[test]
    fn exit_line_closes_the_window_and_clears_the_prompt() {
        let _ = create_runtime();
        let (services, sent) = recording_services();
        let buffer = create_rw_signal(TerminalInput::default());
        buffer.update(|buffer| {
            buffer.set("  ExIt  ".to_string());
        });

        submit_line(buffer, services);
        assert_eq!(*sent.borrow(), vec![AppCommand::CloseWindow]);
        assert_eq!(buffer.with_untracked(|buffer| buffer.as_str().to_string()), "");
    }

    #[test]
    fn other_lines_only_clear_the_prompt() {
        let _ = create_runtime();
        let (services, sent) = recording_services();
        let buffer = create_rw_signal(TerminalInput::default());
        buffer.update(|buffer| {
            buffer.set("exits".to_string());
        });

        submit_line(buffer, services);
        assert!(sent.borrow().is_empty());
        assert_eq!(buffer.with_untracked(|buffer| buffer.as_str().to_string()), "");
    }
}
