use web_sys::window;

use crate::utils::constants::ROUTE_LOGIN;

pub fn current_path() -> String {
    window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Hard navigation: the browser reloads into the target page. In-flight
/// requests are not aborted; their resolutions land in a page that is gone.
pub fn redirect(path: &str) {
    if let Some(win) = window() {
        if win.location().set_href(path).is_err() {
            log::error!("❌ Failed to navigate to {}", path);
        }
    }
}

pub fn redirect_to_login() {
    redirect(ROUTE_LOGIN);
}
