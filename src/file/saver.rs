//! Document saving.
//!
//! This module writes the file store's canonical JSON text back to disk in
//! the document's dialect, with atomic write operations and optional backup
//! creation.

use crate::config::Config;
use crate::store::FileFormat;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Saves document text to a file.
///
/// Converts the canonical JSON text to the document's dialect, optionally
/// creates a `.bak` copy of the existing file, and writes atomically
/// (temp file then rename) so the target is never left partially written.
/// Targets ending in `.gz` are gzip-compressed.
///
/// # Errors
///
/// Returns an error if the contents are not valid JSON, backup creation
/// fails, or any write step fails.
///
/// # Examples
///
/// ```no_run
/// use nodelens::config::Config;
/// use nodelens::file::saver::save_document;
/// use nodelens::store::FileFormat;
///
/// let config = Config::default();
/// save_document("output.json", "{\n  \"a\": 1\n}", FileFormat::Json, &config).unwrap();
/// ```
pub fn save_document<P: AsRef<Path>>(
    path: P,
    contents: &str,
    format: FileFormat,
    config: &Config,
) -> Result<()> {
    let path = path.as_ref();

    let should_compress = path.to_string_lossy().ends_with(".gz");

    if config.create_backup && path.exists() {
        create_backup(path)?;
    }

    let mut output = render(contents, format)?;
    if !output.ends_with('\n') {
        output.push('\n');
    }

    write_file_atomic(path, output.as_bytes(), should_compress)?;

    Ok(())
}

/// Renders canonical JSON text in the target dialect.
///
/// The contents are parsed first; invalid JSON here is a bug upstream and
/// must not reach the disk.
fn render(contents: &str, format: FileFormat) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(contents)
        .context("Document text is not valid JSON - refusing to save")?;

    match format {
        FileFormat::Json => Ok(contents.to_string()),
        FileFormat::Yaml => serde_yaml::to_string(&value).context("Failed to render YAML"),
    }
}

/// Creates a backup of a file by copying it with a .bak extension.
fn create_backup<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let mut backup_path = path.to_path_buf();
    let original_name = backup_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid file name"))?;
    backup_path.set_file_name(format!("{}.bak", original_name));
    fs::copy(path, backup_path).context("Failed to create backup")?;
    Ok(())
}

/// Writes data to a file atomically, optionally compressing with gzip.
fn write_file_atomic<P: AsRef<Path>>(path: P, data: &[u8], compress: bool) -> Result<()> {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let path = path.as_ref();
    let temp_path = path.with_extension("tmp");

    if compress {
        let file = fs::File::create(&temp_path).context("Failed to create temp file")?;
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder
            .write_all(data)
            .context("Failed to write compressed data")?;
        encoder.finish().context("Failed to finish compression")?;
    } else {
        fs::write(&temp_path, data).context("Failed to write temp file")?;
    }

    fs::rename(&temp_path, path).context("Failed to rename temp file")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_render_json_passes_text_through() {
        let text = "{\n  \"a\": 1\n}";
        assert_eq!(render(text, FileFormat::Json).unwrap(), text);
    }

    #[test]
    fn test_render_rejects_invalid_json() {
        assert!(render("nope", FileFormat::Json).is_err());
    }

    #[test]
    fn test_render_yaml() {
        let rendered = render(r#"{"name": "Ada", "ok": true}"#, FileFormat::Yaml).unwrap();
        let back: serde_json::Value = serde_yaml::from_str(&rendered).unwrap();
        assert_eq!(back, serde_json::json!({"name": "Ada", "ok": true}));
    }

    #[test]
    fn test_save_and_reload_json() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().with_extension("json");
        let config = Config::default();

        save_document(&path, r#"{"a": 1}"#, FileFormat::Json, &config).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\"a\": 1}\n");
    }

    #[test]
    fn test_save_gzipped() {
        use flate2::read::GzDecoder;
        use std::io::Read;

        let temp_file = NamedTempFile::new().unwrap();
        let gz_path = temp_file.path().with_extension("json.gz");
        let config = Config::default();

        save_document(&gz_path, r#"{"z": 9}"#, FileFormat::Json, &config).unwrap();

        let file = fs::File::open(&gz_path).unwrap();
        let mut decoder = GzDecoder::new(file);
        let mut decompressed = String::new();
        decoder.read_to_string(&mut decompressed).unwrap();
        assert_eq!(decompressed, "{\"z\": 9}\n");
    }

    #[test]
    fn test_backup_created_when_configured() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().with_extension("json");
        fs::write(&path, r#"{"version": 1}"#).unwrap();

        let config = Config {
            create_backup: true,
            ..Default::default()
        };
        save_document(&path, r#"{"version": 2}"#, FileFormat::Json, &config).unwrap();

        let backup_path = path.with_file_name(format!(
            "{}.bak",
            path.file_name().unwrap().to_str().unwrap()
        ));
        assert!(backup_path.exists());
        assert_eq!(
            fs::read_to_string(&backup_path).unwrap(),
            r#"{"version": 1}"#
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"version\": 2}\n");
    }

    #[test]
    fn test_yaml_round_trip_through_loader() {
        use crate::file::loader::load_document;

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().with_extension("yaml");
        let config = Config::default();

        save_document(
            &path,
            r#"{"name": "Ada", "langs": ["en", "fr"]}"#,
            FileFormat::Yaml,
            &config,
        )
        .unwrap();

        let (contents, format) = load_document(&path).unwrap();
        assert_eq!(format, FileFormat::Yaml);
        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!({"name": "Ada", "langs": ["en", "fr"]})
        );
    }
}
