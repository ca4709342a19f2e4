use desktop_app_contract::ApplicationId;
use desktop_runtime::{load_desktop_config, DesktopConfig, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use serde_json::json;

const RESUME_MARKDOWN: &str = include_str!("../content/resume.md");

/// Bundled desktop config with the resume text handed to the document viewer.
pub fn site_desktop_config() -> DesktopConfig {
    load_desktop_config().with_launch_params(
        ApplicationId::trusted(desktop_app_document_viewer::APP_ID),
        json!({ "content": RESUME_MARKDOWN }),
    )
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="0xburden" />
        <Meta name="description" content="A desktop-style personal website in the browser." />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider config=site_desktop_config()>
            <DesktopShell />
        </DesktopProvider>
    }
}
