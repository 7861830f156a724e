//! Document loading.
//!
//! This module reads documents from files or stdin and normalizes them into
//! the canonical JSON text the file store holds, remembering the on-disk
//! dialect so saves can convert back.

use crate::store::FileFormat;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Loads a document from the filesystem.
///
/// The dialect is detected from the file extension (`.yaml`/`.yml` → YAML,
/// everything else JSON), with a `.gz` suffix handled transparently. YAML
/// input is converted to pretty-printed JSON text; JSON input is validated
/// by parsing and kept as-is.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid in its
/// detected dialect, or (for YAML) cannot be represented as JSON.
///
/// # Examples
///
/// ```no_run
/// use nodelens::file::loader::load_document;
/// use nodelens::store::FileFormat;
///
/// let (contents, format) = load_document("data.json").unwrap();
/// assert_eq!(format, FileFormat::Json);
/// let _parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
/// ```
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<(String, FileFormat)> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref).context("Failed to read file")?
    };

    let format = detect_format(path_ref);
    let contents = normalize(&content, format)?;
    Ok((contents, format))
}

/// Loads a document from standard input.
///
/// Gzip input is detected by magic bytes. The content is tried as JSON
/// first, then as YAML; the resulting format tag follows whichever parse
/// succeeded.
///
/// # Errors
///
/// Returns an error if reading fails or the input is neither valid JSON
/// nor valid YAML.
pub fn load_document_from_stdin() -> Result<(String, FileFormat)> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    // gzip magic bytes
    let content = if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in stdin")?
    };

    if serde_json::from_str::<serde_json::Value>(&content).is_ok() {
        return Ok((content, FileFormat::Json));
    }

    let contents = normalize(&content, FileFormat::Yaml)
        .context("stdin is neither valid JSON nor valid YAML")?;
    Ok((contents, FileFormat::Yaml))
}

/// Determines the dialect from the filename, handling a `.gz` suffix.
///
/// Examples:
/// - `data.yaml` → YAML
/// - `data.yml.gz` → YAML
/// - `data.json.gz` → JSON
fn detect_format<P: AsRef<Path>>(path: P) -> FileFormat {
    let path_str = path.as_ref().to_string_lossy();
    let base = path_str.strip_suffix(".gz").unwrap_or(&path_str);

    if base.ends_with(".yaml") || base.ends_with(".yml") {
        FileFormat::Yaml
    } else {
        FileFormat::Json
    }
}

/// Converts raw file content into canonical JSON text.
fn normalize(content: &str, format: FileFormat) -> Result<String> {
    match format {
        FileFormat::Json => {
            serde_json::from_str::<serde_json::Value>(content).context("Failed to parse JSON")?;
            Ok(content.to_string())
        }
        FileFormat::Yaml => {
            let value: serde_json::Value =
                serde_yaml::from_str(content).context("Failed to parse YAML")?;
            serde_json::to_string_pretty(&value).context("Failed to convert YAML document")
        }
    }
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped stdin")?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format() {
        assert_eq!(detect_format("data.json"), FileFormat::Json);
        assert_eq!(detect_format("data.yaml"), FileFormat::Yaml);
        assert_eq!(detect_format("data.yml"), FileFormat::Yaml);
        assert_eq!(detect_format("path/to/data.yaml.gz"), FileFormat::Yaml);
        assert_eq!(detect_format("data.json.gz"), FileFormat::Json);
        assert_eq!(detect_format("no_extension"), FileFormat::Json);
    }

    #[test]
    fn test_normalize_json_keeps_text() {
        let text = r#"{"a":   1}"#;
        assert_eq!(normalize(text, FileFormat::Json).unwrap(), text);
    }

    #[test]
    fn test_normalize_rejects_bad_json() {
        assert!(normalize("{nope", FileFormat::Json).is_err());
    }

    #[test]
    fn test_normalize_yaml_converts_to_json() {
        let yaml = "name: Ada\nage: 36\n";
        let contents = normalize(yaml, FileFormat::Yaml).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, serde_json::json!({"name": "Ada", "age": 36}));
    }

    #[test]
    fn test_read_gzipped_file() {
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;
        use tempfile::NamedTempFile;

        let json_content = r#"{"test": "value"}"#;
        let temp_file = NamedTempFile::new().unwrap();
        let gz_path = temp_file.path().with_extension("json.gz");

        let file = fs::File::create(&gz_path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(json_content.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let decompressed = read_gzipped_file(&gz_path).unwrap();
        assert_eq!(decompressed, json_content);
    }

    #[test]
    fn test_load_gzipped_document() {
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;
        use tempfile::NamedTempFile;

        let json_content = r#"{"name": "Ada", "age": 36}"#;
        let temp_file = NamedTempFile::new().unwrap();
        let gz_path = temp_file.path().with_extension("json.gz");

        let file = fs::File::create(&gz_path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(json_content.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let (contents, format) = load_document(&gz_path).unwrap();
        assert_eq!(format, FileFormat::Json);
        assert_eq!(contents, json_content);
    }

    #[test]
    fn test_load_corrupted_gz_fails() {
        use tempfile::NamedTempFile;

        let temp_file = NamedTempFile::new().unwrap();
        let gz_path = temp_file.path().with_extension("json.gz");
        fs::write(&gz_path, b"not gzip data").unwrap();

        let result = load_document(&gz_path);
        assert!(result.is_err());
    }
}
