use crate::error::{ReportError, Result};
use crate::schema::Field;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// One parsed benchmark result object.
pub type Record = Map<String, Value>;

/// Read and parse a result file. The whole file is read before parsing and the
/// handle is closed before this returns, on both paths.
pub fn load_record(path: &Path) -> Result<Record> {
    let bytes = fs::read(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_record(path, &bytes)
}

pub fn parse_record(path: &Path, bytes: &[u8]) -> Result<Record> {
    let value: Value = serde_json::from_slice(bytes).map_err(|source| ReportError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ReportError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

/// Resolved value of one field.
#[derive(Clone, Debug, PartialEq)]
pub enum Extracted<'a> {
    Present(&'a Value),
    Default(&'static str),
}

impl Extracted<'_> {
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Extracted::Present(v) => render_value(v),
            Extracted::Default(s) => Cow::Borrowed(s),
        }
    }
}

/// Look `field` up in `record`, trying each candidate key in order.
///
/// For optional fields a `null` value counts as absent. A required key that is
/// present with `null` is returned as-is; only a missing key is an error.
pub fn extract_field<'a>(record: &'a Record, field: &Field, path: &Path) -> Result<Extracted<'a>> {
    if let Some(value) = field
        .keys
        .iter()
        .filter_map(|k| record.get(*k))
        .find(|v| !v.is_null())
    {
        return Ok(Extracted::Present(value));
    }

    if !field.is_required() {
        return Ok(Extracted::Default(field.fallback.render().unwrap_or("None")));
    }
    match record.get(field.key()) {
        Some(value) => Ok(Extracted::Present(value)),
        None => Err(ReportError::MissingField {
            key: field.key().to_string(),
            path: path.to_path_buf(),
        }),
    }
}

/// Text for a JSON value: numbers as written, strings unquoted, `null` as `None`,
/// containers as compact JSON.
pub fn render_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed("None"),
        Value::Bool(true) => Cow::Borrowed("true"),
        Value::Bool(false) => Cow::Borrowed("false"),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Array(_) | Value::Object(_) => Cow::Owned(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Fallback;
    use serde_json::json;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn record(v: Value) -> Record {
        match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn load_valid_object() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("block_1.json");
        fs::write(&path, r#"{"transaction_count": 10, "backend": "SP1"}"#).unwrap();

        let rec = load_record(&path).unwrap();
        assert_eq!(rec["transaction_count"], json!(10));
        assert_eq!(rec["backend"], json!("SP1"));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = load_record(&dir.path().join("gone.json")).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }

    #[test]
    fn invalid_json_and_non_object_are_parse_errors() {
        let p = PathBuf::from("block_9.json");
        let err = parse_record(&p, b"{not json").unwrap_err();
        assert!(matches!(err, ReportError::Parse { .. }));
        assert!(err.is_parse());

        let err = parse_record(&p, b"[1, 2, 3]").unwrap_err();
        assert!(matches!(err, ReportError::NotAnObject { .. }));
        assert!(err.is_parse());
        assert_eq!(err.path(), Some(p.as_path()));
    }

    #[test]
    fn required_field_missing_names_key_and_file() {
        let rec = record(json!({ "proof_time_ms": 5 }));
        let field = Field::required("total_time_ms", &["total_time_ms"]);
        let err = extract_field(&rec, &field, Path::new("block_3.json")).unwrap_err();
        match err {
            ReportError::MissingField { key, path } => {
                assert_eq!(key, "total_time_ms");
                assert_eq!(path, PathBuf::from("block_3.json"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn required_null_renders_none() {
        let rec = record(json!({ "total_time_ms": null }));
        let field = Field::required("total_time_ms", &["total_time_ms"]);
        let got = extract_field(&rec, &field, Path::new("x.json")).unwrap();
        assert_eq!(got.render(), "None");
    }

    #[test]
    fn optional_defaults() {
        let rec = record(json!({ "proof_time_ms": null }));
        let p = Path::new("rsp_bench_1.json");

        let proof = Field::optional("proof_time_ms", &["proof_time_ms"], Fallback::NoneLiteral);
        assert_eq!(extract_field(&rec, &proof, p).unwrap(), Extracted::Default("None"));

        let backend = Field::optional("backend", &["backend"], Fallback::NotAvailable);
        assert_eq!(extract_field(&rec, &backend, p).unwrap().render(), "N/A");

        let cycles = Field::optional("total_cycles", &["total_cycles"], Fallback::Zero);
        assert_eq!(extract_field(&rec, &cycles, p).unwrap().render(), "0");
    }

    #[test]
    fn candidate_keys_first_match_wins() {
        let field = Field::optional(
            "total_evm_instructions",
            &["total_evm_instructions", "total_instructions"],
            Fallback::Zero,
        );
        let p = Path::new("block_1.json");

        let legacy = record(json!({ "total_instructions": 4200 }));
        assert_eq!(extract_field(&legacy, &field, p).unwrap().render(), "4200");

        let both = record(json!({ "total_evm_instructions": 7, "total_instructions": 4200 }));
        assert_eq!(extract_field(&both, &field, p).unwrap().render(), "7");

        let neither = record(json!({}));
        assert_eq!(extract_field(&neither, &field, p).unwrap().render(), "0");
    }

    #[test]
    fn big_integers_print_as_written() {
        let p = Path::new("ethrex-prover-bench/1_ethrex.json");
        let rec = parse_record(p, br#"{"total_cycles": 100000000000000000000000}"#).unwrap();
        let field = Field::optional("total_cycles", &["total_cycles"], Fallback::Zero);
        assert_eq!(
            extract_field(&rec, &field, p).unwrap().render(),
            "100000000000000000000000"
        );
    }

    #[test]
    fn value_rendering() {
        assert_eq!(render_value(&json!(300)), "300");
        assert_eq!(render_value(&json!(-2)), "-2");
        assert_eq!(render_value(&json!(1.5)), "1.5");
        assert_eq!(render_value(&json!(5.0)), "5.0");
        assert_eq!(render_value(&json!("Exec")), "Exec");
        assert_eq!(render_value(&json!(true)), "true");
        assert_eq!(render_value(&json!([1, 2])), "[1,2]");
    }
}
