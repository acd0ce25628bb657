use crate::error::CacheError;
use serde::{Serialize, de::DeserializeOwned};
use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

/// Store for expensive derived artifacts (interaction index, degree table).
///
/// An existing entry is trusted as-is; callers that know the source data
/// changed must [`invalidate`](ArtifactCache::invalidate) it.
pub trait ArtifactCache {
    fn get_or_compute<T, F>(&self, key: &str, build: F) -> Result<T, CacheError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Result<T, CacheError>;

    fn invalidate(&self, key: &str) -> Result<(), CacheError>;
}

/// One JSON file per key under a directory.
#[derive(Debug, Clone)]
pub struct JsonFileCache {
    dir: PathBuf,
}

impl JsonFileCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.path_for(key).exists()
    }

    fn load<T: DeserializeOwned>(&self, key: &str, path: &Path) -> Result<T, CacheError> {
        let file = File::open(path).map_err(|source| io_error(key, source))?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| CacheError::Json {
            key: key.to_string(),
            source,
        })
    }

    fn store<T: Serialize>(&self, key: &str, path: &Path, value: &T) -> Result<(), CacheError> {
        fs::create_dir_all(&self.dir).map_err(|source| io_error(key, source))?;

        // Write to temp file first, then atomic rename
        let temp_path = path.with_extension("json.tmp");
        let file = File::create(&temp_path).map_err(|source| io_error(key, source))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, value).map_err(|source| CacheError::Json {
            key: key.to_string(),
            source,
        })?;
        writer.flush().map_err(|source| io_error(key, source))?;
        fs::rename(&temp_path, path).map_err(|source| io_error(key, source))
    }
}

impl ArtifactCache for JsonFileCache {
    fn get_or_compute<T, F>(&self, key: &str, build: F) -> Result<T, CacheError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Result<T, CacheError>,
    {
        let path = self.path_for(key);
        if path.exists() {
            tracing::info!(key, path = %path.display(), "reading cached artifact");
            return self.load(key, &path);
        }

        tracing::info!(key, "cache miss, computing artifact");
        let value = build()?;
        self.store(key, &path, &value)?;
        tracing::info!(key, path = %path.display(), "saved artifact");
        Ok(value)
    }

    fn invalidate(&self, key: &str) -> Result<(), CacheError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!(key, "invalidated cached artifact");
                Ok(())
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(io_error(key, source)),
        }
    }
}

fn io_error(key: &str, source: std::io::Error) -> CacheError {
    CacheError::Io {
        key: key.to_string(),
        source,
    }
}
