use std::net::SocketAddr;
use std::process::ExitCode;

use waitroom::api::types::ApiContext;
use waitroom::{api, config, db, seed};

#[tokio::main]
async fn main() -> ExitCode {
    waitroom::init_tracing();
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let db_path = config::database_path();
    let conn = match db::open_database(&db_path) {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!("Cannot open database at {}: {e}", db_path.display());
            return ExitCode::FAILURE;
        }
    };

    if std::env::args().any(|arg| arg == "--seed") {
        let today = chrono::Local::now().date_naive();
        if let Err(e) = seed::seed_sample_data(&conn, today) {
            tracing::error!("Seeding failed: {e}");
            return ExitCode::FAILURE;
        }
    }

    let ctx = ApiContext::new(conn);
    let addr = SocketAddr::from(([0, 0, 0, 0], config::port()));
    let mut server = match api::start_server(ctx, addr).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Check-in portal at http://{}", server.addr);

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    server.shutdown();
    ExitCode::SUCCESS
}
