use super::{run_sections, Section, SectionOutcome};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::schema::backend_spec;
use crate::Backend;
use std::io::Write;

/// Section for one backend. Results live in `<backend>-prover-bench/`.
pub fn section(backend: Backend) -> Section {
    let (name, pattern, header) = match backend {
        Backend::Ethrex => (
            "ethrex",
            "ethrex-prover-bench/*_ethrex.json",
            "=== ETHREX BENCHMARK RESULTS ===",
        ),
        Backend::Rsp => (
            "RSP",
            "rsp-prover-bench/rsp_bench_*.json",
            "=== RSP BENCHMARK RESULTS ===",
        ),
        Backend::Zeth => (
            "Zeth",
            "zeth-prover-bench/zeth_bench_*.json",
            "=== ZETH BENCHMARK RESULTS ===",
        ),
    };
    Section {
        name,
        pattern,
        header: Some(header),
        spec: backend_spec(backend),
    }
}

/// Sections for `backends`, deduplicated, in the fixed ethrex, rsp, zeth order.
pub fn sections(backends: &[Backend]) -> Vec<Section> {
    Backend::ALL
        .into_iter()
        .filter(|b| backends.is_empty() || backends.contains(b))
        .map(section)
        .collect()
}

pub fn run<W: Write>(
    cfg: &ReportConfig,
    backends: &[Backend],
    out: &mut W,
) -> Result<Vec<SectionOutcome>> {
    let sections = sections(backends);
    tracing::info!(
        backends = ?sections.iter().map(|s| s.name).collect::<Vec<_>>(),
        dir = %cfg.base_dir.display(),
        "prover report"
    );
    run_sections(cfg, &sections, out)
}
