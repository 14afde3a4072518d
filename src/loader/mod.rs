//! Document loading
//!
//! Reads configuration files, detects their format from the file extension
//! and decodes them into [`Mapping`]s for the diff builder.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::diff::{Mapping, Value};
use crate::error::{GendiffError, Result};
use crate::traits::FileSystem;

/// Source document format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    /// Detect the format from the path suffix (`.json`, `.yaml`, `.yml`)
    ///
    /// Only the extension is considered; the content is never sniffed.
    pub fn detect(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(SourceFormat::Json),
            Some("yaml") | Some("yml") => Ok(SourceFormat::Yaml),
            _ => Err(GendiffError::UnsupportedExtension(path.to_path_buf())),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Json => write!(f, "json"),
            SourceFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Raw document content paired with its detected format
#[derive(Debug, Clone, PartialEq)]
pub struct FileData {
    pub content: String,
    pub format: SourceFormat,
}

impl FileData {
    pub fn new(content: impl Into<String>, format: SourceFormat) -> Self {
        Self {
            content: content.into(),
            format,
        }
    }

    /// Decode the content into a mapping
    ///
    /// The document root must be a mapping. An empty or null YAML document is
    /// treated as an empty mapping. YAML merge keys (`<<`) are resolved, and
    /// non-finite floats are rejected as decode errors.
    pub fn parse(&self) -> Result<Mapping> {
        if self.format == SourceFormat::Yaml && self.content.trim().is_empty() {
            return Ok(Mapping::new());
        }

        let decoded = match self.format {
            SourceFormat::Json => {
                let value: serde_json::Value =
                    serde_json::from_str(&self.content).map_err(|e| self.decode_error(e))?;
                Value::from(value)
            }
            SourceFormat::Yaml => {
                let mut value: serde_yaml::Value =
                    serde_yaml::from_str(&self.content).map_err(|e| self.decode_error(e))?;
                value.apply_merge().map_err(|e| self.decode_error(e))?;
                Value::try_from(value).map_err(|e| self.decode_error(e))?
            }
        };

        match decoded {
            Value::Mapping(map) => Ok(map),
            Value::Null if self.format == SourceFormat::Yaml => Ok(Mapping::new()),
            _ => Err(GendiffError::NotAMapping {
                format: self.format,
            }),
        }
    }

    fn decode_error(&self, err: impl fmt::Display) -> GendiffError {
        GendiffError::Decode {
            format: self.format,
            message: err.to_string(),
        }
    }
}

/// Reads documents through a [`FileSystem`]
pub struct Loader {
    fs: Arc<dyn FileSystem>,
}

impl Loader {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Read a file and tag it with its detected format
    ///
    /// The extension is checked before touching the file system.
    pub fn read(&self, path: &Path) -> Result<FileData> {
        let format = SourceFormat::detect(path)?;
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| GendiffError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(path = %path.display(), %format, bytes = content.len(), "loaded document");
        Ok(FileData::new(content, format))
    }

    /// Read and decode a file into a mapping
    pub fn load(&self, path: &Path) -> Result<Mapping> {
        self.read(path)?.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockFileSystem;
    use serde_json::json;

    fn mapping(value: serde_json::Value) -> Mapping {
        match Value::from(value) {
            Value::Mapping(map) => map,
            other => panic!("expected mapping, got {:?}", other),
        }
    }

    #[test]
    fn test_detect_supported_extensions() {
        assert_eq!(SourceFormat::detect(Path::new("a.json")).unwrap(), SourceFormat::Json);
        assert_eq!(SourceFormat::detect(Path::new("dir/a.yaml")).unwrap(), SourceFormat::Yaml);
        assert_eq!(SourceFormat::detect(Path::new("/abs/a.b.yml")).unwrap(), SourceFormat::Yaml);
    }

    #[test]
    fn test_detect_rejects_other_extensions() {
        for path in ["a.txt", "a.toml", "json", "a.JSON", "a.json.bak", "noext"] {
            assert!(matches!(
                SourceFormat::detect(Path::new(path)),
                Err(GendiffError::UnsupportedExtension(_))
            ));
        }
    }

    #[test]
    fn test_parse_json() {
        let data = FileData::new(r#"{"host": "hexlet.io", "timeout": 50, "follow": false}"#, SourceFormat::Json);
        assert_eq!(
            data.parse().unwrap(),
            mapping(json!({"host": "hexlet.io", "timeout": 50, "follow": false}))
        );
    }

    #[test]
    fn test_parse_yaml_matches_json() {
        let yaml = FileData::new(
            "host: hexlet.io\ntimeout: 50\nproxy: null\nnested:\n  list: [1, 2]\n  flag: true\n",
            SourceFormat::Yaml,
        );
        assert_eq!(
            yaml.parse().unwrap(),
            mapping(json!({
                "host": "hexlet.io",
                "timeout": 50,
                "proxy": null,
                "nested": {"list": [1, 2], "flag": true}
            }))
        );
    }

    #[test]
    fn test_parse_invalid_content() {
        let json = FileData::new("{not json", SourceFormat::Json);
        assert!(matches!(
            json.parse(),
            Err(GendiffError::Decode { format: SourceFormat::Json, .. })
        ));

        let yaml = FileData::new("key: [unclosed", SourceFormat::Yaml);
        assert!(matches!(
            yaml.parse(),
            Err(GendiffError::Decode { format: SourceFormat::Yaml, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_non_mapping_root() {
        for (content, format) in [
            ("[1, 2]", SourceFormat::Json),
            ("42", SourceFormat::Json),
            ("null", SourceFormat::Json),
            ("- a\n- b\n", SourceFormat::Yaml),
        ] {
            assert!(matches!(
                FileData::new(content, format).parse(),
                Err(GendiffError::NotAMapping { .. })
            ));
        }
    }

    #[test]
    fn test_parse_empty_yaml_is_empty_mapping() {
        assert!(FileData::new("", SourceFormat::Yaml).parse().unwrap().is_empty());
        assert!(FileData::new("~\n", SourceFormat::Yaml).parse().unwrap().is_empty());
    }

    #[test]
    fn test_parse_yaml_non_finite_float_is_decode_error() {
        for content in ["a: .inf\n", "a: -.inf\n", "a: .nan\n", "a:\n  b: [1, .NaN]\n"] {
            let err = FileData::new(content, SourceFormat::Yaml).parse().unwrap_err();
            assert!(
                matches!(err, GendiffError::Decode { format: SourceFormat::Yaml, .. }),
                "{:?} gave {:?}",
                content,
                err
            );
        }
    }

    #[test]
    fn test_parse_yaml_resolves_merge_keys() {
        let yaml = FileData::new(
            "base: &b\n  x: 1\n  y: 1\nchild:\n  <<: *b\n  y: 2\n",
            SourceFormat::Yaml,
        );
        assert_eq!(
            yaml.parse().unwrap(),
            mapping(json!({
                "base": {"x": 1, "y": 1},
                "child": {"x": 1, "y": 2}
            }))
        );
    }

    #[test]
    fn test_loader_reads_through_filesystem() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_file("/cfg/a.yml", "key: value\n");
        let loader = Loader::new(fs);

        let data = loader.read(Path::new("/cfg/a.yml")).unwrap();
        assert_eq!(data, FileData::new("key: value\n", SourceFormat::Yaml));
        assert_eq!(
            loader.load(Path::new("/cfg/a.yml")).unwrap(),
            mapping(json!({"key": "value"}))
        );
    }

    #[test]
    fn test_loader_missing_file_is_io_error() {
        let loader = Loader::new(Arc::new(MockFileSystem::new()));
        let err = loader.read(Path::new("/cfg/missing.json")).unwrap_err();
        assert!(matches!(err, GendiffError::Io { .. }));
        assert!(err.to_string().contains("/cfg/missing.json"));
    }

    #[test]
    fn test_loader_checks_extension_first() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_file("/cfg/a.txt", "{}");
        let loader = Loader::new(fs);
        assert!(matches!(
            loader.read(Path::new("/cfg/a.txt")),
            Err(GendiffError::UnsupportedExtension(_))
        ));
    }
}
