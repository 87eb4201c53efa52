use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use yomu_core::dictionary::LoadError;

use crate::dictionary::Jmdict;

pub struct JmdictLoader;

impl JmdictLoader {
    /// Load dictionary from file path
    pub fn load_from_file(path: &Path) -> Result<Jmdict, LoadError> {
        tracing::info!("Loading JMdict from file: {}", path.display());
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::FileNotFound(path.display().to_string()),
            _ => LoadError::IoError(e),
        })?;

        let dict = Jmdict::from_reader(BufReader::new(file))?;
        if dict.entry_count() == 0 {
            return Err(LoadError::InvalidFormat(format!(
                "{} contains no dictionary words",
                path.display()
            )));
        }

        tracing::info!("Loaded {} dictionary entries from file", dict.entry_count());
        Ok(dict)
    }

    /// Load the primary snapshot, then merge each extra one on top
    ///
    /// The primary snapshot must load. Extra snapshots that fail are logged and skipped.
    pub fn load_with_extras(primary: &Path, extras: &[String]) -> Result<Jmdict, LoadError> {
        let mut dict = Self::load_from_file(primary)?;

        for path in extras {
            match Self::load_from_file(Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging additional dictionary from: {}", path);
                    dict = dict.merge(additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load dictionary from {}: {}", path, e);
                }
            }
        }

        Ok(dict)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use super::*;

    fn write_snapshot(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("yomu-loader-{}-{name}", std::process::id()));
        let mut file = File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let err = JmdictLoader::load_from_file(Path::new("/nonexistent/jmdict.json")).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound(_)));
    }

    #[test]
    fn empty_snapshot_is_rejected() {
        let path = write_snapshot("empty.json", r#"{ "words": [] }"#);
        let err = JmdictLoader::load_from_file(&path).unwrap_err();
        assert!(matches!(err, LoadError::InvalidFormat(_)));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn extras_merge_and_bad_extras_are_skipped() {
        let primary = write_snapshot(
            "primary.json",
            r#"{ "words": [{ "id": "1", "kana": [{ "text": "ねこ" }] }] }"#,
        );
        let extra = write_snapshot(
            "extra.json",
            r#"{ "words": [{ "id": "2", "kana": [{ "text": "いぬ" }] }] }"#,
        );
        let extras = vec![
            extra.display().to_string(),
            "/nonexistent/extra.json".to_string(),
        ];

        let dict = JmdictLoader::load_with_extras(&primary, &extras).unwrap();
        assert_eq!(dict.entry_count(), 2);

        std::fs::remove_file(primary).ok();
        std::fs::remove_file(extra).ok();
    }
}
