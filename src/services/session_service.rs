// ============================================================================
// SESSION SERVICE - CREDENTIAL STORE
// ============================================================================
// Cookie jar for the credential trio, localStorage for the display name
// ============================================================================

use crate::config::CONFIG;
use crate::models::{Role, Session};
use crate::utils::constants::{COOKIE_TOKEN, COOKIE_USER_ID, COOKIE_USER_ROLE, STORAGE_KEY_USER_NAME};
use crate::utils::{cookies, storage};

/// Credential store backed by the cookie jar, plus localStorage for the
/// display name. The handle itself is stateless: every read goes back to
/// the cookies, so all holders see the same session.
#[derive(Clone, Default, PartialEq)]
pub struct SessionService;

impl SessionService {
    pub fn new() -> Self {
        Self
    }

    pub fn read(&self) -> Session {
        Session {
            token: cookies::get_cookie(COOKIE_TOKEN),
            user_id: cookies::get_cookie(COOKIE_USER_ID),
            role: cookies::get_cookie(COOKIE_USER_ROLE).map(|raw| Role::parse(&raw)),
        }
    }

    /// Writes the whole credential trio at once. There is no single-field
    /// update path: callers re-supply all three so the jar never holds a
    /// partial session.
    pub fn set(&self, token: &str, user_id: &str, role: &str) {
        let days = CONFIG.session_expiry_days;
        let written = cookies::set_cookie(COOKIE_TOKEN, token, days)
            .and_then(|_| cookies::set_cookie(COOKIE_USER_ID, user_id, days))
            .and_then(|_| cookies::set_cookie(COOKIE_USER_ROLE, role, days));

        match written {
            Ok(()) => log::info!("🔐 Session stored for user {}", user_id),
            Err(e) => log::error!("❌ Failed to persist session cookies: {}", e),
        }
    }

    pub fn set_display_name(&self, name: &str) {
        if let Err(e) = storage::set_item(STORAGE_KEY_USER_NAME, name) {
            log::warn!("⚠️ Could not store display name: {}", e);
        }
    }

    pub fn display_name(&self) -> Option<String> {
        storage::get_item(STORAGE_KEY_USER_NAME)
    }

    /// Tears the session down: the three cookies and any cached display
    /// state all go together.
    pub fn clear(&self) {
        let _ = cookies::remove_cookie(COOKIE_TOKEN);
        let _ = cookies::remove_cookie(COOKIE_USER_ID);
        let _ = cookies::remove_cookie(COOKIE_USER_ROLE);
        let _ = storage::clear();
        log::info!("🗑️ Session cleared");
    }
}
