use std::sync::Arc;

use stylist_booking::{
    configuration::{Configuration, LedgerScope},
    configuration_handler::ConfigurationHandler,
    http::create_app,
    local_ledger::{GlobalLedger, StylistLedger},
    local_stylists::LocalStylists,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let configuration = ConfigurationHandler::parse_arguments();

    let mut stylists = LocalStylists::from_names(configuration.stylist_names());
    if stylists.is_empty() {
        info!("No stylists configured, inserting examples");
        stylists.insert_example_stylists();
    }

    let address = format!("0.0.0.0:{}", configuration.port());
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(%address, scope = ?configuration.ledger_scope(), "Booking service listening");

    let app = match configuration.ledger_scope() {
        LedgerScope::Global => create_app(GlobalLedger::default(), Arc::new(stylists)),
        LedgerScope::PerStylist => create_app(StylistLedger::default(), Arc::new(stylists)),
    };

    axum::serve(listener, app).await
}
