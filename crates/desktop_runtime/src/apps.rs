//! Window type to app module registry.

use desktop_app_contract::{AppModule, ApplicationId};

/// Returns the app mounted in the body of `app_id`'s window.
pub fn app_module(app_id: &ApplicationId) -> Option<AppModule> {
    match app_id.as_str() {
        desktop_app_terminal::APP_ID => Some(AppModule::new(desktop_app_terminal::mount)),
        desktop_app_document_viewer::APP_ID => {
            Some(AppModule::new(desktop_app_document_viewer::mount))
        }
        _ => None,
    }
}
