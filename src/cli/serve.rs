use crate::{api::ProxyState, config, info, server};

pub async fn serve() {
    let proxy_state = ProxyState::from_env();

    info!("Token proxy listening on {}", config::server_addr());
    server::start_proxy_server(proxy_state).await;
}
