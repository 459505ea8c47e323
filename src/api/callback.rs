use std::collections::HashMap;

use axum::{Extension, extract::Query, http::Uri, response::Html};
use tokio::sync::mpsc;

use crate::utils;

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    uri: Uri,
    Extension(code_tx): Extension<mpsc::Sender<String>>,
) -> Html<String> {
    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>".to_string());
    };

    if code_tx.send(code.clone()).await.is_err() {
        return Html("<h4>No login in progress.</h4>".to_string());
    }

    // Drop the one-time code from the address bar so a reload cannot replay it.
    let clean_url = utils::strip_authorization_code(&uri.to_string());

    Html(format!(
        "<h2>Authentication successful.</h2><p>You can close this browser window.</p>\
         <script>history.replaceState({{}}, document.title, \"{clean_url}\");</script>"
    ))
}
