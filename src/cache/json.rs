//! JSON file backed score cache

use super::{CACHE_VERSION, CacheError, OpeningScores, ScoreCache, ScoreCacheRecord};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Score cache stored as a single JSON document
///
/// Saving rewrites the whole record to a temporary file and renames it over the
/// previous one.
#[derive(Debug, Clone)]
pub struct JsonFileCache {
    path: PathBuf,
}

impl JsonFileCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole record; a missing file is an empty record
    ///
    /// # Errors
    /// Returns `CacheError` if the file cannot be read, is not valid JSON, or has an
    /// unknown version.
    pub fn read_record(&self) -> Result<ScoreCacheRecord, CacheError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(ScoreCacheRecord::default());
            }
            Err(e) => return Err(e.into()),
        };

        let record: ScoreCacheRecord = serde_json::from_str(&content)?;
        if record.version != CACHE_VERSION {
            return Err(CacheError::UnsupportedVersion(record.version));
        }
        Ok(record)
    }

    fn write_record(&self, record: &ScoreCacheRecord) -> Result<(), CacheError> {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, serde_json::to_string_pretty(record)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl ScoreCache for JsonFileCache {
    fn load(&self, key: &str) -> Result<Option<OpeningScores>, CacheError> {
        Ok(self.read_record()?.scores.remove(key))
    }

    fn save(&mut self, key: &str, scores: &OpeningScores) -> Result<(), CacheError> {
        let mut record = self.read_record()?;
        record.scores.insert(key.to_owned(), scores.clone());
        self.write_record(&record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn temp_path(name: &str) -> PathBuf {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!(
            "wordle_expect_{name}_{}_{n}.json",
            std::process::id()
        ))
    }

    fn scores(entries: &[(&str, f64)]) -> OpeningScores {
        entries.iter().map(|&(w, s)| (w.to_owned(), s)).collect()
    }

    #[test]
    fn missing_file_is_empty() {
        let cache = JsonFileCache::new(temp_path("missing"));
        assert_eq!(cache.load("5").unwrap(), None);
    }

    #[test]
    fn save_then_load_keeps_other_lengths() {
        let path = temp_path("roundtrip");
        let mut cache = JsonFileCache::new(&path);

        let five = scores(&[("CRANE", 12.5), ("SLATE", 11.0)]);
        let six = scores(&[("SLATED", 9.0)]);
        cache.save("5", &five).unwrap();
        cache.save("6", &six).unwrap();

        let reopened = JsonFileCache::new(&path);
        assert_eq!(reopened.load("5").unwrap(), Some(five));
        assert_eq!(reopened.load("6").unwrap(), Some(six));
        assert!(!path.with_extension("json.tmp").exists());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn unknown_version_is_rejected() {
        let path = temp_path("version");
        fs::write(&path, r#"{"version": 99, "scores": {}}"#).unwrap();

        let err = JsonFileCache::new(&path).load("5").unwrap_err();
        assert!(matches!(err, CacheError::UnsupportedVersion(99)));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let path = temp_path("malformed");
        fs::write(&path, "not json").unwrap();

        let err = JsonFileCache::new(&path).load("5").unwrap_err();
        assert!(matches!(err, CacheError::Parse(_)));

        fs::remove_file(&path).unwrap();
    }
}
