use std::fmt;

#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    Encode(serde_json::Error),
    UnknownPhilosopher(String),
    InvalidIndex(usize),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Sqlite(e) => write!(f, "SQLite error: {e}"),
            StoreError::Encode(e) => write!(f, "failed to encode key sequence: {e}"),
            StoreError::UnknownPhilosopher(id) => {
                write!(f, "no philosopher with id '{id}' in the dataset")
            }
            StoreError::InvalidIndex(i) => write!(f, "history index out of range: {i}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Sqlite(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Encode(e)
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
