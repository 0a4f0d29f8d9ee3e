use yew::prelude::*;

use crate::services::{auth_service, ApiClient, SessionService};
use crate::utils::constants::ROUTE_LOGIN;
use crate::utils::navigation;

/// Logout flow: notify the backend, then tear down cookies and storage and
/// leave for the login page. On failure the session stays as it was.
#[hook]
pub fn use_logout() -> Callback<()> {
    Callback::from(move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            let session = SessionService::new();
            let client = ApiClient::new(session.clone());

            match auth_service::logout(&client).await {
                Ok(Some(())) => {
                    log::info!("👋 Logout");
                    session.clear();
                    navigation::redirect(ROUTE_LOGIN);
                }
                // 401: the gateway already cleared the session and left.
                Ok(None) => {}
                Err(e) => log::error!("❌ Error logging out: {}", e),
            }
        });
    })
}
