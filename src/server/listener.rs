use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::router::Router;
use crate::store::FileStore;

/// Binds the configured address and serves until the process shuts down.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    let router = Router::new(FileStore::new(&cfg.files.directory));
    serve(listener, router).await
}

/// Accept loop: one spawned task per accepted connection.
///
/// A connection that fails (malformed request, I/O error) is logged and
/// dropped; the loop keeps accepting. Split from [`run`] so tests can bind
/// an ephemeral port themselves.
pub async fn serve(listener: TcpListener, router: Router) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let router = router.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, router);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
