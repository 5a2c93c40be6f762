// src/server.rs
use std::net::{SocketAddr, TcpListener};
use std::thread::{self, JoinHandle};

use tracing::{error, info};

use crate::routes::create_router;

pub async fn serve(listener: tokio::net::TcpListener) -> std::io::Result<()> {
    axum::serve(listener, create_router()).await
}

/// Binds `addr` on the calling thread, then serves it from a dedicated thread
/// with its own runtime. Returns once the socket accepts connections.
pub fn spawn_background(addr: SocketAddr) -> std::io::Result<(SocketAddr, JoinHandle<()>)> {
    let listener = TcpListener::bind(addr)?;
    listener.set_nonblocking(true)?;
    let local_addr = listener.local_addr()?;

    let handle = thread::Builder::new()
        .name("responder".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
                Ok(rt) => rt,
                Err(e) => {
                    error!("failed to start server runtime: {}", e);
                    return;
                }
            };
            runtime.block_on(async move {
                let listener = match tokio::net::TcpListener::from_std(listener) {
                    Ok(l) => l,
                    Err(e) => {
                        error!("failed to register listener: {}", e);
                        return;
                    }
                };
                info!("responder listening on http://{}", local_addr);
                if let Err(e) = serve(listener).await {
                    error!("responder stopped: {}", e);
                }
            });
        })?;

    Ok((local_addr, handle))
}
