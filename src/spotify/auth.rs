use std::time::Duration;

use tokio::{
    sync::{mpsc, oneshot},
    time::timeout,
};
use url::Url;

use crate::{
    api::ProxyState,
    config, error,
    error::Error,
    management::{FileTokenStore, TokenStore},
    server,
    spotify::ExchangeClient,
    success, warning,
};

/// Position in the login lifecycle.
///
/// ```text
/// LoggedOut -> Redirecting -> ExchangingCode -> LoggedIn
///      ^                            |               |
///      +--------- failure ----------+    logout / rejected token
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    LoggedOut,
    Redirecting,
    ExchangingCode,
    LoggedIn,
}

/// Drives the authorization-code login flow.
///
/// The flow owns a token store handle and an [`ExchangeClient`]. It builds
/// the consent URL, consumes the authorization code exactly once, persists
/// the resulting credential, and fires a one-time completion signal that the
/// caller can await. The signal fires only on a fully persisted credential,
/// never before and never on failure.
///
/// The controller never talks to the Web API itself; once `LoggedIn`, all
/// requests go through the gateway until the credential expires or is
/// rejected, at which point the flow must be run again.
pub struct AuthFlow<S> {
    store: S,
    exchange: ExchangeClient,
    client_id: String,
    auth_url: String,
    redirect_uri: String,
    scope: String,
    state: AuthState,
    completion: Option<oneshot::Sender<()>>,
}

impl<S: TokenStore> AuthFlow<S> {
    pub fn new(
        store: S,
        exchange: ExchangeClient,
        client_id: impl Into<String>,
        auth_url: impl Into<String>,
        redirect_uri: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        AuthFlow {
            store,
            exchange,
            client_id: client_id.into(),
            auth_url: auth_url.into(),
            redirect_uri: redirect_uri.into(),
            scope: scope.into(),
            state: AuthState::LoggedOut,
            completion: None,
        }
    }

    /// Builds a flow from the `SPOTIFY_*` and `TOKEN_PROXY_*` environment
    /// variables.
    pub fn from_env(store: S) -> Self {
        AuthFlow::new(
            store,
            ExchangeClient::from_env(),
            config::spotify_client_id(),
            config::spotify_auth_url(),
            config::spotify_redirect_uri(),
            config::spotify_scope(),
        )
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    /// Picks up a previous session from the token store.
    ///
    /// Returns `true` and transitions to `LoggedIn` when a valid credential
    /// is stored. An expired leftover is cleared so the slot starts clean.
    pub async fn resume(&mut self) -> Result<bool, Error> {
        match self.store.load().await? {
            Some(credential) if credential.is_valid() => {
                self.state = AuthState::LoggedIn;
                Ok(true)
            }
            Some(_) => {
                self.store.clear().await?;
                self.state = AuthState::LoggedOut;
                Ok(false)
            }
            None => {
                self.state = AuthState::LoggedOut;
                Ok(false)
            }
        }
    }

    /// Builds the provider consent URL and transitions to `Redirecting`.
    ///
    /// The caller is responsible for actually sending the user there,
    /// usually by opening a browser. `show_dialog=true` forces the consent
    /// screen even for a previously approved client, so switching accounts
    /// stays possible.
    pub fn authorize(&mut self) -> Result<String, Error> {
        let mut url = Url::parse(&self.auth_url)?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("response_type", "code")
            .append_pair("redirect_uri", &self.redirect_uri)
            .append_pair("scope", &self.scope)
            .append_pair("show_dialog", "true");

        self.state = AuthState::Redirecting;

        Ok(url.into())
    }

    /// Registers for the one-time completion signal.
    ///
    /// The returned receiver resolves after the next successful
    /// [`complete`](AuthFlow::complete), once the credential is persisted.
    /// A second call supersedes the first; the earlier receiver then
    /// resolves with an error instead of the signal.
    pub fn subscribe(&mut self) -> oneshot::Receiver<()> {
        let (tx, rx) = oneshot::channel();
        self.completion = Some(tx);
        rx
    }

    /// Consumes the authorization code delivered by the redirect.
    ///
    /// Exchanges the code, persists the credential, transitions to
    /// `LoggedIn`, and fires the completion signal. Any failure transitions
    /// back to `LoggedOut` without firing the signal; the code is spent
    /// either way and cannot be retried.
    pub async fn complete(&mut self, code: &str) -> Result<(), Error> {
        self.state = AuthState::ExchangingCode;

        let credential = match self.exchange.exchange_code(code, &self.redirect_uri).await {
            Ok(credential) => credential,
            Err(e) => {
                self.state = AuthState::LoggedOut;
                return Err(e);
            }
        };

        if let Err(e) = self.store.save(&credential).await {
            self.state = AuthState::LoggedOut;
            return Err(e);
        }

        self.state = AuthState::LoggedIn;

        if let Some(signal) = self.completion.take() {
            signal.send(()).ok();
        }

        Ok(())
    }

    /// Acknowledges that the gateway rejected and cleared the credential.
    pub fn invalidated(&mut self) {
        self.state = AuthState::LoggedOut;
    }

    /// Clears the stored credential and transitions to `LoggedOut`.
    pub async fn logout(&mut self) -> Result<(), Error> {
        self.store.clear().await?;
        self.state = AuthState::LoggedOut;
        Ok(())
    }
}

/// Runs the interactive login flow end to end.
///
/// 1. Resumes a stored session; `force` discards it instead
/// 2. Starts the local server handling the OAuth redirect and the token
///    proxy endpoints
/// 3. Opens the consent URL in the default browser
/// 4. Waits up to 60 seconds for the redirect to deliver a code
/// 5. Exchanges the code and persists the credential
///
/// Browser launch failures degrade to printing the URL for manual
/// navigation. Exchange failures and timeouts terminate the program with an
/// error message.
pub async fn login(force: bool) {
    let store = FileTokenStore::new();
    let mut flow = AuthFlow::from_env(store);

    if !force {
        match flow.resume().await {
            Ok(true) => {
                success!("Already logged in. Use --force to run the flow again.");
                return;
            }
            Ok(false) => {}
            Err(e) => error!("Failed to read token cache: {}", e),
        }
    } else if let Err(e) = flow.logout().await {
        error!("Failed to clear token cache: {}", e);
    }

    // channel carrying the authorization code from the callback handler
    let (code_tx, mut code_rx) = mpsc::channel::<String>(1);

    let proxy_state = ProxyState::from_env();
    tokio::spawn(async move {
        server::start_api_server(code_tx, proxy_state).await;
    });

    let done = flow.subscribe();

    let auth_url = match flow.authorize() {
        Ok(url) => url,
        Err(e) => error!("Failed to build authorization URL: {}", e),
    };

    // Open the authorization URL in the default browser
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for the redirect to deliver the one-time code
    let code = match timeout(Duration::from_secs(60), code_rx.recv()).await {
        Ok(Some(code)) => code,
        Ok(None) | Err(_) => error!("Authentication failed or timed out."),
    };

    if let Err(e) = flow.complete(&code).await {
        error!("Authentication failed: {}", e);
    }

    done.await.ok();

    success!("Authentication successful!");
}

/// Discards the stored credential.
pub async fn logout() {
    let store = FileTokenStore::new();
    let mut flow = AuthFlow::from_env(store);

    if let Err(e) = flow.logout().await {
        error!("Failed to clear token cache: {}", e);
    }

    success!("Logged out.");
}
