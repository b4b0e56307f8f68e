//! Dataset files.
//!
//! Two on-disk layouts are understood:
//!
//! | Format  | Layout                                            | Duplicates |
//! |---------|---------------------------------------------------|------------|
//! | `json`  | object of string → string, or array of strings    | object: collapse, array: kept |
//! | `lines` | one key per line, `\n` or `\r\n`, blank lines skipped | kept   |
//!
//! A missing, unreadable or malformed file is a
//! [`HashScopeError::DatasetUnavailable`]; it is never read as an empty
//! dataset.
//!
//! # Examples
//!
//! ```no_run
//! use hashscope::dataset::{load, DatasetFormat};
//!
//! let dataset = load("datasets/dataset_5k.json", DatasetFormat::Auto)?;
//! println!("{} keys", dataset.len());
//! # Ok::<(), hashscope::HashScopeError>(())
//! ```

use super::{Dataset, Entry};
use crate::error::{HashScopeError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

/// On-disk dataset layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetFormat {
    /// Pick by file extension: `.json` is JSON, anything else is lines.
    #[default]
    Auto,
    /// JSON object or array.
    Json,
    /// Newline-delimited keys.
    Lines,
}

impl DatasetFormat {
    /// Resolve `Auto` against a path's extension.
    #[must_use]
    pub fn resolve(self, path: &Path) -> Self {
        match self {
            Self::Auto => {
                let is_json = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
                if is_json {
                    Self::Json
                } else {
                    Self::Lines
                }
            }
            other => other,
        }
    }
}

impl fmt::Display for DatasetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Json => "json",
            Self::Lines => "lines",
        })
    }
}

impl FromStr for DatasetFormat {
    type Err = HashScopeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "json" => Ok(Self::Json),
            "lines" | "txt" | "text" => Ok(Self::Lines),
            other => Err(HashScopeError::invalid_parameter(
                "input",
                format!("unknown dataset format '{other}'; expected auto, json or lines"),
            )),
        }
    }
}

/// Load a dataset from `path`.
///
/// # Errors
///
/// Returns [`HashScopeError::DatasetUnavailable`] if the file cannot be
/// opened or read, or does not match the requested format.
pub fn load(path: impl AsRef<Path>, format: DatasetFormat) -> Result<Dataset> {
    let path = path.as_ref();
    let source_name = path.display().to_string();
    let format = format.resolve(path);

    let file = File::open(path).map_err(|e| HashScopeError::dataset_unavailable(&source_name, e))?;
    let mut reader = BufReader::new(file);

    let dataset = match format {
        DatasetFormat::Json => parse_json(reader, &source_name)?,
        _ => {
            let mut bytes = Vec::new();
            reader
                .read_to_end(&mut bytes)
                .map_err(|e| HashScopeError::dataset_unavailable(&source_name, e))?;
            parse_lines(&bytes)
        }
    };

    tracing::debug!(
        source = %source_name,
        %format,
        entries = dataset.len(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Parse a JSON dataset.
///
/// An object becomes a mapping (file order, last duplicate value wins); an
/// array of strings becomes a key list.
///
/// # Errors
///
/// Returns [`HashScopeError::DatasetUnavailable`] for malformed JSON, a top
/// level that is neither object nor array, or any non-string value.
pub fn parse_json(reader: impl Read, source_name: &str) -> Result<Dataset> {
    let value: Value = serde_json::from_reader(reader)
        .map_err(|e| HashScopeError::dataset_unavailable(source_name, e))?;

    match value {
        Value::Object(map) => {
            let mut entries = Vec::with_capacity(map.len());
            for (key, value) in map {
                match value {
                    Value::String(value) => entries.push(Entry::new(key, value)),
                    other => {
                        return Err(HashScopeError::dataset_unavailable(
                            source_name,
                            format!("value for key {key:?} is not a string: {other}"),
                        ))
                    }
                }
            }
            Ok(Dataset::from(entries))
        }
        Value::Array(items) => {
            let mut entries = Vec::with_capacity(items.len());
            for (index, item) in items.into_iter().enumerate() {
                match item {
                    Value::String(key) => entries.push(Entry::key_only(key)),
                    other => {
                        return Err(HashScopeError::dataset_unavailable(
                            source_name,
                            format!("item {index} is not a string: {other}"),
                        ))
                    }
                }
            }
            Ok(Dataset::from(entries))
        }
        other => Err(HashScopeError::dataset_unavailable(
            source_name,
            format!("expected a JSON object or array, found {}", json_kind(&other)),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse newline-delimited keys.
///
/// Keys are kept as raw bytes; a trailing `\r` is stripped and blank lines
/// are skipped.
#[must_use]
pub fn parse_lines(bytes: &[u8]) -> Dataset {
    Dataset::from_keys(
        bytes
            .split(|&b| b == b'\n')
            .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
            .filter(|line| !line.is_empty())
            .map(<[u8]>::to_vec),
    )
}

impl Dataset {
    /// Write the dataset as JSON.
    ///
    /// When every entry has a value the output is an object (key → value);
    /// otherwise it is an array of keys.
    ///
    /// # Errors
    ///
    /// Returns [`HashScopeError::DatasetUnavailable`] if a key is not valid
    /// UTF-8 or the file cannot be written.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        let unavailable = |reason: String| HashScopeError::dataset_unavailable(&source_name, reason);

        let mut keys = Vec::with_capacity(self.len());
        for (index, entry) in self.iter().enumerate() {
            let key = entry
                .key_str()
                .ok_or_else(|| unavailable(format!("key at index {index} is not valid UTF-8")))?;
            keys.push(key);
        }

        let value = if self.iter().all(|e| e.value().is_some()) {
            let map: serde_json::Map<String, Value> = keys
                .iter()
                .zip(self.iter())
                .map(|(key, entry)| {
                    (
                        (*key).to_owned(),
                        Value::String(entry.value().unwrap_or_default().to_owned()),
                    )
                })
                .collect();
            Value::Object(map)
        } else {
            Value::Array(keys.iter().map(|k| Value::String((*k).to_owned())).collect())
        };

        let file = File::create(path).map_err(|e| unavailable(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &value).map_err(|e| unavailable(e.to_string()))?;
        writer.flush().map_err(|e| unavailable(e.to_string()))?;

        tracing::debug!(path = %source_name, entries = self.len(), "wrote dataset");
        Ok(())
    }

    /// Write one key per line. Values are not persisted.
    ///
    /// # Errors
    ///
    /// Returns [`HashScopeError::DatasetUnavailable`] if the file cannot be
    /// written.
    pub fn write_lines(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        let unavailable = |e: std::io::Error| HashScopeError::dataset_unavailable(&source_name, e);

        let file = File::create(path).map_err(unavailable)?;
        let mut writer = BufWriter::new(file);
        for key in self.keys() {
            writer.write_all(key).map_err(unavailable)?;
            writer.write_all(b"\n").map_err(unavailable)?;
        }
        writer.flush().map_err(unavailable)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_resolve_auto() {
        assert_eq!(DatasetFormat::Auto.resolve(Path::new("a/b.json")), DatasetFormat::Json);
        assert_eq!(DatasetFormat::Auto.resolve(Path::new("a/b.JSON")), DatasetFormat::Json);
        assert_eq!(DatasetFormat::Auto.resolve(Path::new("keys.txt")), DatasetFormat::Lines);
        assert_eq!(DatasetFormat::Auto.resolve(Path::new("keys")), DatasetFormat::Lines);
        assert_eq!(DatasetFormat::Json.resolve(Path::new("keys.txt")), DatasetFormat::Json);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<DatasetFormat>().unwrap(), DatasetFormat::Json);
        assert_eq!("lines".parse::<DatasetFormat>().unwrap(), DatasetFormat::Lines);
        let err = "yaml".parse::<DatasetFormat>().unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(!err.is_dataset_unavailable());
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn test_parse_json_object_keeps_order() {
        let json = br#"{"orange":"3","apple":"1","banana":"2"}"#;
        let ds = parse_json(&json[..], "inline").unwrap();
        let keys: Vec<_> = ds.iter().map(|e| e.key_str().unwrap()).collect();
        assert_eq!(keys, vec!["orange", "apple", "banana"]);
        assert_eq!(ds.entries()[1].value(), Some("1"));
    }

    #[test]
    fn test_parse_json_duplicate_keys_collapse() {
        let json = br#"{"a":"1","b":"2","a":"3"}"#;
        let ds = parse_json(&json[..], "inline").unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.entries()[0].value(), Some("3"));
    }

    #[test]
    fn test_parse_json_array_keeps_duplicates() {
        let ds = parse_json(&br#"["a","b","a"]"#[..], "inline").unwrap();
        assert_eq!(ds.len(), 3);
        assert!(ds.iter().all(|e| e.value().is_none()));
    }

    #[test]
    fn test_parse_json_rejects_non_string_value() {
        let err = parse_json(&br#"{"a": 1}"#[..], "inline").unwrap_err();
        assert!(err.is_dataset_unavailable());
        assert!(err.to_string().contains("not a string"));
    }

    #[test]
    fn test_parse_json_rejects_scalar() {
        let err = parse_json(&b"42"[..], "inline").unwrap_err();
        assert!(err.to_string().contains("a number"));
    }

    #[test]
    fn test_parse_json_rejects_malformed() {
        let err = parse_json(&b"{\"a\":"[..], "inline").unwrap_err();
        assert!(err.is_dataset_unavailable());
    }

    #[test]
    fn test_parse_lines() {
        let ds = parse_lines(b"apple\r\nbanana\n\napple\n");
        let keys: Vec<_> = ds.keys().collect();
        assert_eq!(keys, vec![&b"apple"[..], &b"banana"[..], &b"apple"[..]]);
    }

    #[test]
    fn test_parse_lines_keeps_raw_bytes() {
        let ds = parse_lines(b"ok\n\xff\xfe\n");
        assert_eq!(ds.len(), 2);
        assert!(ds.entries()[1].key_str().is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let path = PathBuf::from("definitely/not/here.json");
        let err = load(&path, DatasetFormat::Auto).unwrap_err();
        assert!(err.is_dataset_unavailable());
        assert!(err.to_string().contains("here.json"));
    }

    #[test]
    fn test_json_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fruit.json");
        let ds = Dataset::from_pairs([("apple", "1"), ("banana", "2"), ("orange", "3")]);
        ds.write_json(&path).unwrap();
        assert_eq!(load(&path, DatasetFormat::Auto).unwrap(), ds);
    }

    #[test]
    fn test_key_list_writes_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keys.json");
        Dataset::from_keys(["a", "b", "a"]).write_json(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, r#"["a","b","a"]"#);
    }

    #[test]
    fn test_write_json_rejects_non_utf8_key() {
        let dir = tempfile::tempdir().unwrap();
        let ds = Dataset::from_keys([vec![0xffu8]]);
        let err = ds.write_json(dir.path().join("bad.json")).unwrap_err();
        assert!(err.is_dataset_unavailable());
    }

    #[test]
    fn test_lines_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keys.txt");
        let ds = Dataset::from_keys(["x", "y", "x"]);
        ds.write_lines(&path).unwrap();
        assert_eq!(load(&path, DatasetFormat::Auto).unwrap(), ds);
    }
}
