//! Preference save client.
//!
//! Client-side (hydrate): `GlooTransport` posts with `gloo-net`.
//! Everywhere else the transport is injected, so tests drive the full
//! request/response path with fakes.
//!
//! ERROR HANDLING
//! ==============
//! Saves are fire-and-forget. `save_and_report` never propagates: network
//! failures, non-OK statuses and `success: false` bodies are logged and
//! shown through the optional notifier, and the already-applied UI state
//! stays as it is.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use futures::future::LocalBoxFuture;

use super::types::{SavePreference, SaveResponse};
use crate::config::PageConfig;
use crate::notify::Notifier;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("network error: {0}")]
    Network(String),
    #[error("save request failed: {0}")]
    Status(u16),
    #[error("invalid response: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("{0}")]
    Rejected(String),
}

/// Outgoing HTTP request, independent of the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Raw HTTP reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// Sends a JSON POST and hands back the raw reply.
pub trait PreferenceTransport {
    fn post(&self, request: HttpRequest) -> LocalBoxFuture<'_, Result<HttpReply, SaveError>>;
}

/// Supplies the anti-forgery token sent with every save.
pub trait CredentialSource {
    fn csrf_token(&self) -> Option<String>;
}

pub const SAVED_MESSAGE: &str = "Theme preference saved";
const REJECTED_FALLBACK: &str = "save rejected by server";

fn failure_message(err: &SaveError) -> String {
    format!("Could not save theme preference: {err}")
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct PreferenceClient<T, C> {
    transport: T,
    credentials: C,
    endpoint: String,
    csrf_header: String,
}

impl<T: PreferenceTransport, C: CredentialSource> PreferenceClient<T, C> {
    #[must_use]
    pub fn new(transport: T, credentials: C, config: &PageConfig) -> Self {
        Self {
            transport,
            credentials,
            endpoint: config.save_endpoint.clone(),
            csrf_header: config.csrf_header.clone(),
        }
    }

    /// Build the POST for one save.
    ///
    /// # Errors
    ///
    /// Returns `Encode` if the body cannot be serialized.
    pub fn build_request(&self, save: &SavePreference) -> Result<HttpRequest, SaveError> {
        let body = serde_json::to_string(save).map_err(SaveError::Encode)?;
        let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
        match self.credentials.csrf_token() {
            Some(token) => headers.push((self.csrf_header.clone(), token)),
            None => log::debug!("preference save without csrf token"),
        }
        Ok(HttpRequest { url: self.endpoint.clone(), headers, body })
    }

    /// Send one save and interpret the reply.
    ///
    /// # Errors
    ///
    /// Returns the first failure along the way: encoding, transport, HTTP
    /// status, body decoding, or a `success: false` reply.
    pub async fn save(&self, save: &SavePreference) -> Result<(), SaveError> {
        let request = self.build_request(save)?;
        let reply = self.transport.post(request).await?;
        interpret_reply(&reply)
    }
}

/// Map a raw reply onto the `{"success": ..}` contract.
///
/// # Errors
///
/// Returns `Status` for non-2xx replies, `Decode` for unparseable bodies and
/// `Rejected` when the backend reports `success: false`.
pub fn interpret_reply(reply: &HttpReply) -> Result<(), SaveError> {
    if !(200..300).contains(&reply.status) {
        return Err(SaveError::Status(reply.status));
    }
    let body: SaveResponse = serde_json::from_str(&reply.body).map_err(SaveError::Decode)?;
    if body.success {
        Ok(())
    } else {
        Err(SaveError::Rejected(body.error.unwrap_or_else(|| REJECTED_FALLBACK.to_owned())))
    }
}

/// Send `save` and surface the result. Never fails, never retries.
pub async fn save_and_report<T, C>(client: &PreferenceClient<T, C>, save: &SavePreference, notifier: Option<&dyn Notifier>)
where
    T: PreferenceTransport,
    C: CredentialSource,
{
    match client.save(save).await {
        Ok(()) => {
            log::debug!("saved {}={:?}", save.setting, save.value);
            if let Some(notifier) = notifier {
                notifier.success(SAVED_MESSAGE);
            }
        }
        Err(err) => {
            log::warn!("theme preference {} not saved: {err}", save.setting);
            if let Some(notifier) = notifier {
                notifier.error(&failure_message(&err));
            }
        }
    }
}

// =============================================================================
// BROWSER TRANSPORT
// =============================================================================

/// `gloo-net` transport for the browser.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "hydrate")]
impl PreferenceTransport for GlooTransport {
    fn post(&self, request: HttpRequest) -> LocalBoxFuture<'_, Result<HttpReply, SaveError>> {
        use futures::FutureExt;

        async move {
            let mut builder = gloo_net::http::Request::post(&request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let resp = builder
                .body(request.body)
                .map_err(|e| SaveError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| SaveError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| SaveError::Network(e.to_string()))?;
            Ok(HttpReply { status, body })
        }
        .boxed_local()
    }
}
