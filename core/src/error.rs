use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("book id '{csv_book_id}' is missing from the book id map")]
    UnknownBookId { csv_book_id: String },
    #[error("book '{book_id}' is not connected in the book graph")]
    UnknownBook { book_id: String },
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("pop from an empty priority queue")]
pub struct EmptyQueueError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("line {line}: missing column '{column}'")]
    MissingColumn { line: u64, column: &'static str },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache I/O failed for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cache entry '{key}' is not valid JSON: {source}")]
    Json {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to build '{key}': {message}")]
    Build { key: String, message: String },
}

impl CacheError {
    pub fn build(key: &str, error: impl std::fmt::Display) -> Self {
        Self::Build {
            key: key.to_string(),
            message: error.to_string(),
        }
    }
}
