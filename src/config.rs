use std::path::{Path, PathBuf};

/// What to do when a single result file cannot be reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop the current section and fail the run.
    #[default]
    Abort,
    /// Log a warning, drop the file and keep going.
    Skip,
}

impl ErrorPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorPolicy::Abort => "abort",
            ErrorPolicy::Skip => "skip",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ReportConfig {
    /// Directory that section patterns are resolved against.
    pub base_dir: PathBuf,
    pub policy: ErrorPolicy,
}

impl ReportConfig {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            policy: ErrorPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Absolute-or-cwd-relative location of a path printed relative to `base_dir`.
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.base_dir.join(relative)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reads_working_directory_and_aborts() {
        let cfg = ReportConfig::default();
        assert_eq!(cfg.base_dir, PathBuf::from("."));
        assert_eq!(cfg.policy, ErrorPolicy::Abort);
    }

    #[test]
    fn resolve_joins_base_dir() {
        let cfg = ReportConfig::new("/data/run-7").with_policy(ErrorPolicy::Skip);
        assert_eq!(
            cfg.resolve(Path::new("rsp-prover-bench/rsp_bench_1.json")),
            PathBuf::from("/data/run-7/rsp-prover-bench/rsp_bench_1.json")
        );
        assert_eq!(cfg.policy.as_str(), "skip");
    }
}
