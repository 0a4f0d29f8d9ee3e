use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest};
use crate::services::{ApiClient, ApiError, ApiResult};

/// Everything a successful login hands back: token and role come from the
/// response headers, user id and display name from the body.
#[derive(Clone, Debug, PartialEq)]
pub struct LoginSuccess {
    pub token: String,
    pub user_id: String,
    pub role: String,
    pub user_name: String,
}

/// The backend prefixes the Authorization response header with `Bearer `;
/// the cookie stores the bare token.
pub fn clean_token(header: &str) -> &str {
    header.strip_prefix("Bearer ").unwrap_or(header)
}

/// Login is the one call made without stored credentials, so it goes out
/// directly rather than through the authenticated gateway.
pub async fn login(request: &LoginRequest) -> Result<LoginSuccess, ApiError> {
    let url = format!("{}/auth/login/", CONFIG.backend_url());
    let response = Request::post(&url).json(request)?.send().await?;

    if !response.ok() {
        return Err(ApiError::RequestFailed {
            status: response.status(),
            message: "Login failed".to_string(),
        });
    }

    let token = response
        .headers()
        .get("Authorization")
        .map(|header| clean_token(&header).to_string())
        .unwrap_or_default();
    let role = response.headers().get("User-Role").unwrap_or_default();
    let body: LoginResponse = response.json().await?;

    log::info!("✅ Login successful for {}", request.username);

    Ok(LoginSuccess {
        token,
        user_id: body.user_id.to_string(),
        role,
        user_name: body.user_name,
    })
}

pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    let url = format!("{}/auth/register/", CONFIG.backend_url());
    let response = Request::post(&url).json(request)?.send().await?;

    if !response.ok() {
        return Err(ApiError::RequestFailed {
            status: response.status(),
            message: "Registration failed".to_string(),
        });
    }

    log::info!("✅ Registration successful for {}", request.username);
    Ok(())
}

/// Logout goes through the gateway so the usual credential headers are
/// attached. The cookie teardown is the caller's job once this returns.
pub async fn logout(client: &ApiClient) -> ApiResult<()> {
    client.post_empty("/auth/logout/", "Logout failed").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_bearer_prefix() {
        assert_eq!(clean_token("Bearer abc123"), "abc123");
    }

    #[test]
    fn leaves_bare_token_untouched() {
        assert_eq!(clean_token("abc123"), "abc123");
    }

    #[test]
    fn prefix_is_case_and_space_sensitive() {
        // Only the exact `Bearer ` prefix is recognized, matching the
        // backend's header format.
        assert_eq!(clean_token("bearer abc123"), "bearer abc123");
        assert_eq!(clean_token("Bearerabc123"), "Bearerabc123");
    }
}
