//! Static field specifications for every report layout.

use crate::{Backend, BlockProfile};

/// Value printed when none of a field's keys holds a usable value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fallback {
    /// Absence is an error.
    Required,
    /// Numeric zero.
    Zero,
    /// The string `N/A`.
    NotAvailable,
    /// The literal `None`, for values that are legitimately unset (e.g. an execute-only run).
    NoneLiteral,
}

impl Fallback {
    pub fn render(&self) -> Option<&'static str> {
        match self {
            Fallback::Required => None,
            Fallback::Zero => Some("0"),
            Fallback::NotAvailable => Some("N/A"),
            Fallback::NoneLiteral => Some("None"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    /// Candidate keys, first match wins. The first entry is the canonical key.
    pub keys: &'static [&'static str],
    pub fallback: Fallback,
}

impl Field {
    pub const fn required(label: &'static str, keys: &'static [&'static str]) -> Self {
        Self {
            label,
            keys,
            fallback: Fallback::Required,
        }
    }

    pub const fn optional(
        label: &'static str,
        keys: &'static [&'static str],
        fallback: Fallback,
    ) -> Self {
        Self {
            label,
            keys,
            fallback,
        }
    }

    pub fn is_required(&self) -> bool {
        self.fallback == Fallback::Required
    }

    pub fn key(&self) -> &'static str {
        self.keys[0]
    }
}

pub type FieldSpec = &'static [Field];

macro_rules! req {
    ($key:literal) => {
        Field::required($key, &[$key])
    };
    ($label:literal, $key:literal) => {
        Field::required($label, &[$key])
    };
}

macro_rules! opt {
    ($key:literal, $fallback:ident) => {
        Field::optional($key, &[$key], Fallback::$fallback)
    };
}

pub const BLOCK_FULL: FieldSpec = &[
    req!("block_fetch_time_ms"),
    req!("tx_fetch_time_ms"),
    req!("transaction_count"),
    req!("total_instructions"),
    req!("transpile_time_ms"),
    req!("assembly_time_ms"),
    req!("proof_time_ms"),
    req!("  proof_build_time_ms", "proof_build_time_ms"),
    req!("  proof_keygen_time_ms", "proof_keygen_time_ms"),
    req!("  proof_setup_time_ms", "proof_setup_time_ms"),
    req!("  proof_prove_time_ms", "proof_prove_time_ms"),
    req!("  proof_read_time_ms", "proof_read_time_ms"),
    req!("total_time_ms"),
];

pub const BLOCK_REDUCED: FieldSpec = &[
    req!("transaction_count"),
    req!("total_instructions"),
    req!("proof_time_ms"),
    req!("assembly_time_ms"),
    req!("total_time_ms"),
];

pub const BLOCK_EXTENDED: FieldSpec = &[
    opt!("block_number", NotAvailable),
    req!("block_fetch_time_ms"),
    req!("tx_fetch_time_ms"),
    req!("transaction_count"),
    // Older runs only recorded `total_instructions`.
    Field::optional(
        "total_evm_instructions",
        &["total_evm_instructions", "total_instructions"],
        Fallback::Zero,
    ),
    opt!("estimated_transpiled_instructions", Zero),
    req!("transpile_time_ms"),
    req!("assembly_time_ms"),
    req!("proof_time_ms"),
    req!("  proof_build_time_ms", "proof_build_time_ms"),
    req!("  proof_keygen_time_ms", "proof_keygen_time_ms"),
    req!("  proof_setup_time_ms", "proof_setup_time_ms"),
    req!("  proof_prove_time_ms", "proof_prove_time_ms"),
    req!("  proof_read_time_ms", "proof_read_time_ms"),
    req!("total_time_ms"),
];

pub const ETHREX: FieldSpec = &[
    opt!("block_number", NotAvailable),
    opt!("backend", NotAvailable),
    opt!("fetch_time_ms", Zero),
    opt!("witness_time_ms", Zero),
    opt!("execution_time_ms", Zero),
    opt!("proof_time_ms", Zero),
    opt!("total_time_ms", Zero),
    opt!("total_cycles", Zero),
    opt!("total_syscalls", Zero),
];

pub const RSP: FieldSpec = &[
    opt!("backend", NotAvailable),
    opt!("load_time_ms", Zero),
    opt!("preparation_time_ms", Zero),
    opt!("execution_time_ms", Zero),
    opt!("proof_time_ms", NoneLiteral),
    opt!("total_time_ms", Zero),
    opt!("total_cycles", Zero),
    opt!("total_syscalls", Zero),
];

pub const ZETH: FieldSpec = &[
    opt!("block_number", NotAvailable),
    opt!("backend", NotAvailable),
    opt!("load_time_ms", Zero),
    opt!("validation_time_ms", Zero),
    opt!("proof_time_ms", Zero),
    opt!("total_time_ms", Zero),
    opt!("total_cycles", Zero),
];

pub fn block_spec(profile: BlockProfile) -> FieldSpec {
    match profile {
        BlockProfile::Full => BLOCK_FULL,
        BlockProfile::Reduced => BLOCK_REDUCED,
        BlockProfile::Extended => BLOCK_EXTENDED,
    }
}

pub fn backend_spec(backend: Backend) -> FieldSpec {
    match backend {
        Backend::Ethrex => ETHREX,
        Backend::Rsp => RSP,
        Backend::Zeth => ZETH,
    }
}
