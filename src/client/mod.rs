mod transport;

pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport};

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::error::ConciergeError;
use crate::models::AuthTokens;
use crate::session::AuthSession;
use crate::Result;

/// Invoked when authentication cannot be recovered. The browser app performs
/// a hard navigation to `/login` here so no authenticated view stays on
/// screen with dead credentials; embedders decide what that means for them.
pub trait LoginRedirect: Send + Sync {
    fn redirect_to_login(&self);
}

/// Redirect handler for contexts with nowhere to navigate
#[derive(Debug, Default)]
pub struct NoRedirect;

impl LoginRedirect for NoRedirect {
    fn redirect_to_login(&self) {}
}

/// Progress of a single request through the one-shot refresh cycle.
///
/// `Retried` is terminal for authorization purposes: a request that already
/// went around once is never refreshed again, which is what rules out the
/// refresh loop when the retried call also comes back 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RetryState {
    Initial,
    Retried,
}

/// The authenticated request pipeline.
///
/// Every outbound call picks up the current access token as a bearer header
/// (no token means the request simply goes out unauthenticated). A 401
/// response triggers at most one refresh-and-retry cycle; any unrecoverable
/// authorization failure tears the session down completely - never fail-open
/// with a stale token - and the original error still reaches the caller.
/// Non-authorization errors pass through uninterpreted.
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    session: Arc<AuthSession>,
    redirect: Arc<dyn LoginRedirect>,
}

impl ApiClient {
    pub fn new(
        transport: Arc<dyn Transport>,
        session: Arc<AuthSession>,
        redirect: Arc<dyn LoginRedirect>,
    ) -> Self {
        Self {
            transport,
            session,
            redirect,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(ApiRequest::new(Method::GET, path)).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<T> {
        self.request(ApiRequest::new(Method::GET, path).with_query(query))
            .await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T> {
        let body = serde_json::to_value(body)?;
        self.request(ApiRequest::new(Method::POST, path).with_body(body))
            .await
    }

    /// POST with no payload - the action endpoints (`.../cancel` and the
    /// like) take everything from the path
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(ApiRequest::new(Method::POST, path)).await
    }

    pub async fn put<T: DeserializeOwned>(&self, path: &str, body: &impl Serialize) -> Result<T> {
        let body = serde_json::to_value(body)?;
        self.request(ApiRequest::new(Method::PUT, path).with_body(body))
            .await
    }

    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(ApiRequest::new(Method::PUT, path)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(ApiRequest::new(Method::DELETE, path)).await
    }

    async fn request<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let value = self.execute(request).await?;
        Ok(serde_json::from_value(value)?)
    }

    #[tracing::instrument(
        skip(self, request),
        fields(request_id = %request.id, method = %request.method, path = %request.path)
    )]
    async fn execute(&self, mut request: ApiRequest) -> Result<Value> {
        request.bearer = self.session.access_token();
        let mut state = RetryState::Initial;

        loop {
            let response = self.transport.execute(&request).await?;

            if response.status == StatusCode::UNAUTHORIZED {
                match state {
                    RetryState::Initial => {
                        let refresh_token = match self.session.refresh_token() {
                            Some(token) => token,
                            None => return self.fail_closed(),
                        };
                        let tokens = match self.refresh(&refresh_token).await {
                            Ok(tokens) => tokens,
                            Err(_) => return self.fail_closed(),
                        };
                        request.bearer = Some(tokens.access_token.clone());
                        self.session
                            .replace_tokens(tokens.access_token, tokens.refresh_token)?;
                        state = RetryState::Retried;
                        continue;
                    }
                    RetryState::Retried => return self.fail_closed(),
                }
            }

            if !response.status.is_success() {
                return Err(Self::error_for(&response));
            }
            return Ok(response.body);
        }
    }

    /// Trades the refresh token for a new pair. Deliberately bypasses the
    /// retry handling above: the refresh call itself must never be refreshed.
    async fn refresh(&self, refresh_token: &str) -> Result<AuthTokens> {
        let request = ApiRequest::new(Method::POST, "/auth/refresh-token")
            .with_body(json!({ "refreshToken": refresh_token }));
        let response = self.transport.execute(&request).await?;
        if !response.status.is_success() {
            return Err(ConciergeError::Unauthorized);
        }
        Ok(serde_json::from_value(response.body)?)
    }

    /// Unrecoverable authorization failure: erase the session, push the app
    /// to the login entry point, and hand the original 401 to the caller
    fn fail_closed<T>(&self) -> Result<T> {
        if let Err(e) = self.session.logout() {
            warn!(err = ?e, "failed to erase session during auth teardown");
        }
        self.redirect.redirect_to_login();
        Err(ConciergeError::Unauthorized)
    }

    fn error_for(response: &ApiResponse) -> ConciergeError {
        let status = response.status;
        if status == StatusCode::NOT_FOUND {
            ConciergeError::NotFound
        } else if status == StatusCode::FORBIDDEN {
            ConciergeError::Forbidden
        } else if status.is_server_error() {
            ConciergeError::ServerError(response.message())
        } else {
            // Validation failures, booking conflicts and the rest belong to
            // the caller; the pipeline does not interpret them
            ConciergeError::BadRequest(response.message())
        }
    }
}
