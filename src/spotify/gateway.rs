use reqwest::{Client, Method, StatusCode};
use serde_json::Value;

use crate::{config, error::Error, management::TokenStore};

/// Single choke point for authenticated Web API requests.
///
/// Every domain operation goes through [`call`](Gateway::call), which reads
/// the credential from the token store, attaches it as a bearer token, and
/// maps the response. The gateway never initiates an auth flow and never
/// refreshes on its own; expiry is surfaced to the caller, which decides
/// whether to refresh or send the user back through login.
///
/// The store is taken by value. Store handles are cheap clones sharing one
/// backing slot or file, so a gateway and an auth flow built from clones of
/// the same store observe each other's writes.
#[derive(Debug, Clone)]
pub struct Gateway<S> {
    http: Client,
    store: S,
    api_url: String,
}

impl<S: TokenStore> Gateway<S> {
    /// Builds a gateway against the Web API base URL from `SPOTIFY_API_URL`.
    pub fn new(store: S) -> Self {
        Gateway::with_api_url(store, config::spotify_api_url())
    }

    /// Builds a gateway against an explicit API base URL.
    pub fn with_api_url(store: S, api_url: impl Into<String>) -> Self {
        Gateway {
            http: Client::new(),
            store,
            api_url: api_url.into(),
        }
    }

    /// Base URL of the Web API, without a trailing slash.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Performs one authenticated request and returns the parsed JSON body.
    ///
    /// # Request Semantics
    ///
    /// 1. Loads the credential from the store. Absent or expired means
    ///    [`Error::NotAuthenticated`] without any network traffic.
    /// 2. Sends exactly one request with `Authorization: Bearer <token>`,
    ///    serializing `body` as JSON when present.
    /// 3. Maps the response:
    ///    - 401: clears the store, returns [`Error::AuthenticationExpired`].
    ///      The credential is gone; the next call fails fast.
    ///    - other non-success: [`Error::RequestFailed`] with the status code
    ///    - success: body parsed as JSON
    ///
    /// No retries, no implicit refresh.
    ///
    /// # Example
    ///
    /// ```
    /// let me = gateway
    ///     .call(Method::GET, &format!("{}/me", gateway.api_url()), None)
    ///     .await?;
    /// println!("Logged in as {}", me["id"]);
    /// ```
    pub async fn call(
        &self,
        method: Method,
        url: &str,
        body: Option<Value>,
    ) -> Result<Value, Error> {
        let credential = match self.store.load_valid().await? {
            Some(credential) => credential,
            None => return Err(Error::NotAuthenticated),
        };

        let mut request = self
            .http
            .request(method, url)
            .bearer_auth(&credential.access_token);

        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            // The rejected credential must not survive to the next call.
            self.store.clear().await.ok();
            return Err(Error::AuthenticationExpired);
        }

        if !status.is_success() {
            return Err(Error::RequestFailed {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}
