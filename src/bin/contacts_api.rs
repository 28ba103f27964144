//! Contacts API
//!
//! A REST server for adding and searching contacts held in memory.
//! Always listens on port 3000.

use roster_services::{api, config::Config, server, state::ContactStore};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::init_tracing();

    let config = Config::contacts_from_env();
    info!("Configuration loaded: {:?}", config);

    let app = api::contacts::router(ContactStore::shared());
    server::serve(app, &config, "contacts-api").await
}
