//! Section formatting shared by every report.
//!
//! A section is one discovery pattern plus one field specification. Each matched
//! file prints as `File: <path>`, one `label: value` line per field, then `===`.
//! A section with no matches prints a single notice naming the pattern instead.

pub mod block;
pub mod provers;

use crate::config::{ErrorPolicy, ReportConfig};
use crate::discover::{discover, FilePattern};
use crate::error::{ReportError, Result};
use crate::record::{extract_field, load_record, Record};
use crate::schema::FieldSpec;
use std::io::Write;
use std::path::Path;

pub const SEPARATOR: &str = "===";

#[derive(Clone, Copy, Debug)]
pub struct Section {
    /// Name used in the "no files found" notice.
    pub name: &'static str,
    pub pattern: &'static str,
    pub header: Option<&'static str>,
    pub spec: FieldSpec,
}

impl Section {
    pub fn file_pattern(&self) -> FilePattern {
        FilePattern::new(self.pattern)
    }

    pub fn absence_notice(&self) -> String {
        format!(
            "No {} benchmark files found (expected: {})",
            self.name, self.pattern
        )
    }
}

/// Per-section tally, returned so callers can tell an empty section from a full one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionOutcome {
    pub name: &'static str,
    pub matched: usize,
    pub reported: usize,
    pub skipped: usize,
}

/// Build the printable lines for one record.
///
/// Every field is resolved before anything is returned, so a record with a missing
/// required field never produces partial output.
pub fn format_record(path: &Path, record: &Record, spec: FieldSpec) -> Result<Vec<String>> {
    let mut lines = Vec::with_capacity(spec.len() + 1);
    lines.push(format!("File: {}", path.display()));
    for field in spec {
        let value = extract_field(record, field, path)?;
        lines.push(format!("{}: {}", field.label, value.render()));
    }
    Ok(lines)
}

fn report_file(cfg: &ReportConfig, rel: &Path, spec: FieldSpec) -> Result<Vec<String>> {
    let record = load_record(&cfg.resolve(rel)).map_err(|err| relabel(err, rel))?;
    format_record(rel, &record, spec)
}

/// Errors name the file the way the report prints it, not the resolved location.
fn relabel(err: ReportError, rel: &Path) -> ReportError {
    let path = rel.to_path_buf();
    match err {
        ReportError::Io { source, .. } => ReportError::Io { path, source },
        ReportError::Parse { source, .. } => ReportError::Parse { path, source },
        ReportError::NotAnObject { .. } => ReportError::NotAnObject { path },
        other => other,
    }
}

/// Print one section. `leading_blank` puts an empty line before the header.
pub fn format_section<W: Write>(
    cfg: &ReportConfig,
    section: &Section,
    leading_blank: bool,
    out: &mut W,
) -> Result<SectionOutcome> {
    let files = discover(cfg, &section.file_pattern());
    let mut outcome = SectionOutcome {
        name: section.name,
        matched: files.len(),
        ..Default::default()
    };

    if files.is_empty() {
        writeln!(out, "{}", section.absence_notice())?;
        return Ok(outcome);
    }

    if let Some(header) = section.header {
        if leading_blank {
            writeln!(out)?;
        }
        writeln!(out, "{header}")?;
    }

    for rel in &files {
        match report_file(cfg, rel, section.spec) {
            Ok(lines) => {
                for line in &lines {
                    writeln!(out, "{line}")?;
                }
                writeln!(out, "{SEPARATOR}")?;
                outcome.reported += 1;
            }
            Err(err) if cfg.policy == ErrorPolicy::Skip => {
                tracing::warn!(
                    section = section.name,
                    file = ?err.path(),
                    parse_error = err.is_parse(),
                    error = %err,
                    "skipping result file"
                );
                outcome.skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }

    tracing::debug!(
        section = section.name,
        reported = outcome.reported,
        skipped = outcome.skipped,
        "section done"
    );
    Ok(outcome)
}

/// Print `sections` in order, each independently.
///
/// A failing section does not stop later ones. Once every section has been
/// attempted, the first failure is returned. Output errors end the run at once.
pub fn run_sections<W: Write>(
    cfg: &ReportConfig,
    sections: &[Section],
    out: &mut W,
) -> Result<Vec<SectionOutcome>> {
    let mut outcomes = Vec::with_capacity(sections.len());
    let mut first_err = None;

    for (idx, section) in sections.iter().enumerate() {
        match format_section(cfg, section, idx > 0, out) {
            Ok(outcome) => outcomes.push(outcome),
            Err(err @ ReportError::Output(_)) => return Err(err),
            Err(err) => {
                // The caller reports the returned error; only log the ones it won't see.
                if first_err.is_some() {
                    tracing::error!(section = section.name, error = %err, "section aborted");
                } else {
                    tracing::debug!(section = section.name, file = ?err.path(), "section aborted");
                }
                first_err.get_or_insert(err);
            }
        }
    }

    out.flush()?;
    match first_err {
        Some(err) => Err(err),
        None => Ok(outcomes),
    }
}
