//! End-to-end tests against a live server on a random local port

use std::{
    net::{IpAddr, Ipv4Addr},
    sync::Arc,
};

use improv_core::{server, MemStore, ServerConfig, ServerHandle};

#[cfg(test)]
mod api;
#[cfg(test)]
mod lifecycle;

/// Start a server for `store` on 127.0.0.1 with an OS-assigned port
pub async fn spawn_server(store: MemStore) -> ServerHandle {
    let config = ServerConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        ..ServerConfig::default()
    };

    server::start(&config, Arc::new(store))
        .await
        .expect("server should start")
}

/// Base URL for a running server
pub fn base_url(handle: &ServerHandle) -> String {
    format!("http://{}", handle.local_addr())
}
