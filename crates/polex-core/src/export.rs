//! JSON export of extracted records.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::info;

use crate::error::OutputError;
use crate::models::policy::PolicyRecord;

/// Write a record to `path` as pretty-printed JSON.
///
/// This is the one loud failure path: unlike parsing, a failed save is
/// reported to the caller. Non-ASCII text is written literally, not escaped.
pub fn export_json(record: &PolicyRecord, path: &Path) -> Result<(), OutputError> {
    let json =
        serde_json::to_string_pretty(record).map_err(|e| OutputError::Write(e.to_string()))?;

    fs::write(path, json).map_err(|e| match e.kind() {
        ErrorKind::PermissionDenied => OutputError::PermissionDenied(path.to_path_buf()),
        _ => OutputError::Write(e.to_string()),
    })?;

    info!("record saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_exports_all_keys_pretty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.json");

        let record = PolicyRecord {
            policy_number: Some("ABC-123".to_string()),
            ..PolicyRecord::default()
        };
        export_json(&record, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains('\n'), "output should be pretty-printed");

        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["policy_number"], "ABC-123");
        assert!(value["premium"].is_null());
        assert_eq!(value["coverage_details"], serde_json::json!([]));
        assert_eq!(value.as_object().unwrap().len(), 15);
    }

    #[test]
    fn test_non_ascii_preserved_literally() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.json");

        let record = PolicyRecord {
            policyholder: Some("Jürgen Müller".to_string()),
            ..PolicyRecord::default()
        };
        export_json(&record, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Jürgen Müller"));
        assert!(!content.contains("\\u"));
    }

    #[test]
    fn test_unwritable_path_is_loud() {
        let record = PolicyRecord::default();
        let result = export_json(&record, Path::new("no/such/dir/record.json"));
        assert!(matches!(result, Err(OutputError::Write(_))));
    }
}
