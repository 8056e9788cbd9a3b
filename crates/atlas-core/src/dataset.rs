use std::collections::HashMap;
use std::fmt;

use crate::philosopher::Philosopher;

#[derive(Debug)]
pub enum DatasetError {
    Json(serde_json::Error),
    DuplicateId(String),
    InvertedLifespan(String),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Json(e) => write!(f, "dataset is not valid JSON: {e}"),
            DatasetError::DuplicateId(id) => write!(f, "duplicate philosopher id: {id}"),
            DatasetError::InvertedLifespan(id) => {
                write!(f, "birth year after death year for: {id}")
            }
        }
    }
}

impl std::error::Error for DatasetError {}

impl From<serde_json::Error> for DatasetError {
    fn from(e: serde_json::Error) -> Self {
        DatasetError::Json(e)
    }
}

/// The immutable, ordered philosopher directory with an id lookup index.
///
/// Supplied once at startup and never mutated; facet derivation and
/// filtering treat it as replace-whole. Validation happens here so every
/// downstream consumer can rely on unique ids and `birth_year <= death_year`.
pub struct Dataset {
    philosophers: Vec<Philosopher>,
    id_index: HashMap<String, usize>,
}

impl Dataset {
    pub fn new(philosophers: Vec<Philosopher>) -> Result<Self, DatasetError> {
        let mut id_index = HashMap::with_capacity(philosophers.len());
        for (idx, p) in philosophers.iter().enumerate() {
            if p.birth_year > p.death_year {
                return Err(DatasetError::InvertedLifespan(p.id.clone()));
            }
            if id_index.insert(p.id.clone(), idx).is_some() {
                return Err(DatasetError::DuplicateId(p.id.clone()));
            }
        }
        Ok(Self {
            philosophers,
            id_index,
        })
    }

    pub fn parse_json(json: &str) -> Result<Self, DatasetError> {
        let philosophers: Vec<Philosopher> = serde_json::from_str(json)?;
        Self::new(philosophers)
    }

    pub fn len(&self) -> usize {
        self.philosophers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.philosophers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Philosopher> {
        self.philosophers.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Philosopher> {
        self.philosophers.get(index)
    }

    pub fn by_id(&self, id: &str) -> Option<&Philosopher> {
        self.id_index.get(id).map(|&i| &self.philosophers[i])
    }
}
