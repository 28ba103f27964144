//! Students API
//!
//! A REST server for creating, listing, updating and deleting students held
//! in memory. Listens on `$PORT` (default 5000).

use roster_services::{api, config::Config, server, state::StudentStore};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::init_tracing();

    let config = Config::students_from_env();
    info!("Configuration loaded: {:?}", config);

    let app = api::students::router(StudentStore::shared());
    server::serve(app, &config, "student-api").await
}
