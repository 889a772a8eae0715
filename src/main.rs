use catalog::configuration::get_configuration;
use catalog::create_app;
use catalog::db::Database;
use catalog::errors::Error;
use catalog::notifications::{self, LogNotifier};
use std::net::IpAddr;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn bind_address(host: &str, port: u16) -> Result<SocketAddr, Error> {
    let host = IpAddr::from_str(host)?;
    Ok(SocketAddr::from((host, port)))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let configuration = get_configuration()?;
    let addr = bind_address(
        &configuration.application.host,
        configuration.application.port,
    )?;
    let db = Arc::new(Database::try_from(&configuration.database).await?);

    let (queue, worker) = notifications::channel(
        configuration.notifications.queue_capacity,
        db.clone(),
        Arc::new(LogNotifier),
    );
    tokio::spawn(worker.run());

    let (app, _) = create_app(db, queue)?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
