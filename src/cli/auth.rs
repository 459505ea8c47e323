use crate::spotify;

pub async fn auth(force: bool) {
    spotify::auth::login(force).await;
}

pub async fn logout() {
    spotify::auth::logout().await;
}
