use crate::configuration::{Configuration, LedgerScope};
use clap::Parser;
use tracing::{debug, warn};

#[derive(Debug, Clone, Parser)]
#[command(name = "stylist_booking", about = "Appointment booking for stylists")]
pub struct ConfigurationHandler {
    /// Port the HTTP server listens on
    #[arg(long, env = "PORT", default_value = "3000")]
    port: String,

    /// Partitioning of the booking ledger
    #[arg(long, env = "LEDGER_SCOPE", value_enum, default_value_t = LedgerScope::PerStylist)]
    ledger_scope: LedgerScope,

    /// Stylist to register, repeatable. Example stylists are used if none are given
    #[arg(long = "stylist", env = "STYLISTS", value_delimiter = ',')]
    stylists: Vec<String>,
}

impl ConfigurationHandler {
    /// Reads `.env` (if present) before parsing so its values act as env fallbacks.
    pub fn parse_arguments() -> Self {
        if let Err(err) = load_env_file(dotenvy::dotenv()) {
            warn!(?err, "Ignoring unreadable .env file");
        }
        Self::parse()
    }
}

/// `Ok(false)` when there was no file to load. A file that exists but cannot
/// be parsed is an error.
fn load_env_file<T>(loaded: Result<T, dotenvy::Error>) -> Result<bool, dotenvy::Error> {
    match loaded {
        Ok(_) => {
            debug!("Loaded environment from .env file");
            Ok(true)
        }
        Err(err) if err.not_found() => Ok(false),
        Err(err) => Err(err),
    }
}

impl Configuration for ConfigurationHandler {
    fn port(&self) -> String {
        self.port.clone()
    }

    fn ledger_scope(&self) -> LedgerScope {
        self.ledger_scope
    }

    fn stylist_names(&self) -> Vec<String> {
        self.stylists
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect()
    }
}
