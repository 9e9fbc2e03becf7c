//! Result-file discovery.
//!
//! Patterns are `[dir/]name`, where `name` may contain `*` (any run of characters)
//! and `?` (one character). Only the immediate contents of `dir` are searched, and
//! hidden files are never matched, which is how a shell glob behaves.

use crate::config::ReportConfig;
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePattern {
    raw: String,
    dir: PathBuf,
    name: String,
}

impl FilePattern {
    pub fn new(raw: &str) -> Self {
        let (dir, name) = match raw.rsplit_once('/') {
            Some((dir, name)) => (PathBuf::from(dir), name.to_string()),
            None => (PathBuf::new(), raw.to_string()),
        };
        Self {
            raw: raw.to_string(),
            dir,
            name,
        }
    }

    /// The pattern exactly as written, e.g. `rsp-prover-bench/rsp_bench_*.json`.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Directory part, relative to the base directory (empty for top-level patterns).
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn matches_name(&self, file_name: &str) -> bool {
        if file_name.starts_with('.') && !self.name.starts_with('.') {
            return false;
        }
        wildcard_match(self.name.as_bytes(), file_name.as_bytes())
    }
}

impl fmt::Display for FilePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Iterative `*`/`?` matcher with single-star backtracking.
fn wildcard_match(pattern: &[u8], text: &[u8]) -> bool {
    let (mut p, mut t) = (0usize, 0usize);
    let mut star: Option<(usize, usize)> = None;

    while t < text.len() {
        if p < pattern.len() && (pattern[p] == b'?' || pattern[p] == text[t]) {
            p += 1;
            t += 1;
        } else if p < pattern.len() && pattern[p] == b'*' {
            star = Some((p, t));
            p += 1;
        } else if let Some((sp, st)) = star {
            p = sp + 1;
            t = st + 1;
            star = Some((sp, st + 1));
        } else {
            return false;
        }
    }

    pattern[p..].iter().all(|&c| c == b'*')
}

/// Find the files matching `pattern` under `cfg.base_dir`.
///
/// Returned paths are relative to the base directory so they print the same way
/// regardless of where the base directory lives. A missing directory is treated as
/// an empty match, never an error. Results are ordered by file name.
pub fn discover(cfg: &ReportConfig, pattern: &FilePattern) -> Vec<PathBuf> {
    let search_dir = cfg.resolve(pattern.dir());
    let mut out = Vec::new();

    for entry in WalkDir::new(&search_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(
                    dir = %search_dir.display(),
                    error = %err,
                    "skipping unreadable entry"
                );
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if pattern.matches_name(name) {
            out.push(pattern.dir().join(name));
        }
    }

    tracing::debug!(pattern = %pattern, matched = out.len(), "discovered result files");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn splits_directory_from_name() {
        let p = FilePattern::new("zeth-prover-bench/zeth_bench_*.json");
        assert_eq!(p.dir(), Path::new("zeth-prover-bench"));
        assert_eq!(p.as_str(), "zeth-prover-bench/zeth_bench_*.json");

        let top = FilePattern::new("block_*.json");
        assert_eq!(top.dir(), Path::new(""));
    }

    #[test]
    fn wildcard_semantics() {
        let p = FilePattern::new("*_ethrex.json");
        assert!(p.matches_name("20000000_ethrex.json"));
        assert!(p.matches_name("_ethrex.json"));
        assert!(!p.matches_name("20000000_ethrex.json.bak"));
        assert!(!p.matches_name(".hidden_ethrex.json"));

        let q = FilePattern::new("block_?.json");
        assert!(q.matches_name("block_1.json"));
        assert!(!q.matches_name("block_12.json"));

        let r = FilePattern::new("rsp_bench_*.json");
        assert!(r.matches_name("rsp_bench_a_b.json"));
        assert!(!r.matches_name("zeth_bench_1.json"));
    }

    #[test]
    fn discovers_only_matching_files_sorted() {
        let dir = tempdir().unwrap();
        for name in ["block_2.json", "block_1.json", "notes.txt", "blockx.json"] {
            fs::write(dir.path().join(name), "{}").unwrap();
        }
        fs::create_dir(dir.path().join("block_dir.json")).unwrap();

        let cfg = ReportConfig::new(dir.path());
        let found = discover(&cfg, &FilePattern::new("block_*.json"));
        assert_eq!(
            found,
            vec![PathBuf::from("block_1.json"), PathBuf::from("block_2.json")]
        );
    }

    #[test]
    fn nested_pattern_returns_relative_paths() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("rsp-prover-bench");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("rsp_bench_5.json"), "{}").unwrap();

        let cfg = ReportConfig::new(dir.path());
        let found = discover(&cfg, &FilePattern::new("rsp-prover-bench/rsp_bench_*.json"));
        assert_eq!(found, vec![PathBuf::from("rsp-prover-bench/rsp_bench_5.json")]);
    }

    #[test]
    fn missing_directory_is_empty() {
        let dir = tempdir().unwrap();
        let cfg = ReportConfig::new(dir.path());
        let pattern = FilePattern::new("zeth-prover-bench/zeth_bench_*.json");
        assert!(discover(&cfg, &pattern).is_empty());
    }
}
