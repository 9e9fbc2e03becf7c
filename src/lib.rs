use clap::ValueEnum;

pub mod config;
pub mod discover;
pub mod error;
pub mod record;
pub mod reports;
pub mod schema;

pub use config::{ErrorPolicy, ReportConfig};
pub use error::{ReportError, Result};

/// Field layout used for generic `block_*.json` results.
///
/// The block benchmark output grew over time; each variant is kept selectable so
/// older result directories still print the way they were recorded.
#[derive(Clone, Copy, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum BlockProfile {
    /// Fetch, transpile, assembly and proof sub-phase timings (all required).
    Full,
    /// Transaction count, instruction count and headline timings only.
    Reduced,
    /// Full timings plus block number and EVM/transpiled instruction counts.
    #[default]
    Extended,
}

/// Downstream proving system whose results live in `<backend>-prover-bench/`.
#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq, Hash)]
pub enum Backend {
    Ethrex,
    Rsp,
    Zeth,
}

impl Backend {
    pub const ALL: [Backend; 3] = [Backend::Ethrex, Backend::Rsp, Backend::Zeth];

    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Ethrex => "ethrex",
            Backend::Rsp => "rsp",
            Backend::Zeth => "zeth",
        }
    }
}
