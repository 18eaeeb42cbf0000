use clap::ValueEnum;

/// How booked slots are partitioned inside the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LedgerScope {
    Global,
    PerStylist,
}

pub trait Configuration: Clone + Send + Sync + 'static {
    fn port(&self) -> String;
    fn ledger_scope(&self) -> LedgerScope;
    fn stylist_names(&self) -> Vec<String>;
}
