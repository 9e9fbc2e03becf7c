use super::{run_sections, Section, SectionOutcome};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::schema::block_spec;
use crate::BlockProfile;
use std::io::Write;

pub const PATTERN: &str = "block_*.json";

/// Generic block benchmark section. It has no header; records print directly.
pub fn section(profile: BlockProfile) -> Section {
    Section {
        name: "block",
        pattern: PATTERN,
        header: None,
        spec: block_spec(profile),
    }
}

pub fn run<W: Write>(
    cfg: &ReportConfig,
    profile: BlockProfile,
    out: &mut W,
) -> Result<SectionOutcome> {
    tracing::info!(profile = ?profile, dir = %cfg.base_dir.display(), "block report");
    let mut outcomes = run_sections(cfg, &[section(profile)], out)?;
    Ok(outcomes.pop().unwrap_or_default())
}
