pub mod appointment_command;
pub mod configuration;
pub mod configuration_handler;
pub mod directory;
pub mod error;
pub mod http;
pub mod ledger;
pub mod local_ledger;
pub mod local_stylists;
#[cfg(test)]
mod testutils;
pub mod types;
