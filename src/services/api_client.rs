// ============================================================================
// API CLIENT - HTTP GATEWAY (Stateless)
// ============================================================================
// Attaches credentials, classifies failures, owns the 401 teardown path.
// No retries, no timeouts, no queueing.
// ============================================================================

use gloo_net::http::{Method, Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::CONFIG;
use crate::models::Session;
use crate::services::SessionService;
use crate::utils::navigation;

/// Errors surfaced to callers of the gateway.
///
/// A 401 never shows up here: the gateway consumes it (session teardown
/// plus hard navigation to login) and the call resolves to `Ok(None)`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response other than 401. Carries the status and an
    /// operation-specific message.
    #[error("{message}. Status: {status}")]
    RequestFailed { status: u16, message: String },
    /// Transport failure or an unparseable body.
    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),
    /// Local pre-request check failed; the backend was never contacted.
    #[error("{0}")]
    Validation(String),
}

/// `Ok(None)` means the request hit a 401 and the session is already being
/// torn down; callers must tolerate the absent result and do nothing.
pub type ApiResult<T> = Result<Option<T>, ApiError>;

/// Builds authenticated request headers from the current session. Absent
/// credentials are simply omitted.
pub fn auth_headers(session: &Session) -> Vec<(&'static str, String)> {
    let mut headers = vec![("Content-Type", "application/json".to_string())];
    if let Some(token) = &session.token {
        headers.push(("Authorization", token.clone()));
    }
    if let Some(user_id) = &session.user_id {
        headers.push(("User-Id", user_id.clone()));
    }
    if let Some(role) = &session.role {
        headers.push(("User-Role", role.as_str().to_string()));
    }
    headers
}

/// HTTP gateway: attaches credentials, classifies failures and owns the
/// 401 teardown path. Stateless apart from the injected credential store;
/// no retries, no timeouts, no queueing.
#[derive(Clone)]
pub struct ApiClient {
    session: SessionService,
    base_url: String,
}

impl ApiClient {
    pub fn new(session: SessionService) -> Self {
        Self {
            session,
            base_url: CONFIG.backend_url().to_string(),
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, operation: &str) -> ApiResult<T> {
        let request = self.builder(Method::GET, path).build()?;
        self.dispatch(request, operation).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        operation: &str,
    ) -> ApiResult<T> {
        let request = self.builder(Method::POST, path).json(body)?;
        self.dispatch(request, operation).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        operation: &str,
    ) -> ApiResult<T> {
        let request = self.builder(Method::PUT, path).json(body)?;
        self.dispatch(request, operation).await
    }

    /// POST with no body and no payload in the response (logout).
    pub async fn post_empty(&self, path: &str, operation: &str) -> ApiResult<()> {
        let request = self.builder(Method::POST, path).build()?;
        let response = request.send().await?;
        Ok(self.check(response, operation)?.map(|_| ()))
    }

    pub async fn delete(&self, path: &str, operation: &str) -> ApiResult<()> {
        let request = self.builder(Method::DELETE, path).build()?;
        let response = request.send().await?;
        Ok(self.check(response, operation)?.map(|_| ()))
    }

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = RequestBuilder::new(&url).method(method);
        for (name, value) in auth_headers(&self.session.read()) {
            builder = builder.header(name, &value);
        }
        builder
    }

    async fn dispatch<T: DeserializeOwned>(&self, request: Request, operation: &str) -> ApiResult<T> {
        let response = request.send().await?;
        match self.check(response, operation)? {
            Some(response) => Ok(Some(response.json::<T>().await?)),
            None => Ok(None),
        }
    }

    /// Shared status handling. 401 evicts the session and redirects; any
    /// other non-2xx becomes a `RequestFailed` naming the operation.
    fn check(&self, response: Response, operation: &str) -> Result<Option<Response>, ApiError> {
        if response.status() == 401 {
            log::warn!("⚠️ 401 received ({}), tearing session down", operation);
            self.session.clear();
            navigation::redirect_to_login();
            return Ok(None);
        }
        if !response.ok() {
            return Err(ApiError::RequestFailed {
                status: response.status(),
                message: operation.to_string(),
            });
        }
        Ok(Some(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn full_session_sends_all_four_headers() {
        let session = Session {
            token: Some("abc123".to_string()),
            user_id: Some("42".to_string()),
            role: Some(Role::Admin),
        };

        let headers = auth_headers(&session);
        assert_eq!(
            headers,
            vec![
                ("Content-Type", "application/json".to_string()),
                ("Authorization", "abc123".to_string()),
                ("User-Id", "42".to_string()),
                ("User-Role", "Admin".to_string()),
            ]
        );
    }

    #[test]
    fn token_is_sent_raw_without_bearer_prefix() {
        let session = Session {
            token: Some("abc123".to_string()),
            user_id: Some("42".to_string()),
            role: Some(Role::Admin),
        };

        let headers = auth_headers(&session);
        let authorization = headers.iter().find(|(name, _)| *name == "Authorization");
        assert_eq!(authorization.map(|(_, v)| v.as_str()), Some("abc123"));
    }

    #[test]
    fn absent_credentials_are_omitted() {
        let headers = auth_headers(&Session::default());
        assert_eq!(headers, vec![("Content-Type", "application/json".to_string())]);
    }

    #[test]
    fn unknown_role_round_trips_in_header() {
        let session = Session {
            token: Some("abc123".to_string()),
            user_id: Some("42".to_string()),
            role: Some(Role::parse("Auditor")),
        };

        let headers = auth_headers(&session);
        assert!(headers.contains(&("User-Role", "Auditor".to_string())));
    }

    #[test]
    fn request_failed_message_names_the_operation() {
        let err = ApiError::RequestFailed {
            status: 500,
            message: "Failed to update the product".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to update the product. Status: 500");
    }
}
