use serde::{Deserialize, Serialize};

/// A single written work attributed to a philosopher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Work {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One record of the static atlas dataset. Immutable at runtime.
///
/// Years are signed; negative values are BCE. `influences` and
/// `influenced` hold display names, not ids; they are not required to
/// reference records in the dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Philosopher {
    pub id: String,
    pub name: String,
    pub name_en: String,
    pub birth_year: i32,
    pub death_year: i32,
    pub birth_city: String,
    pub period: String,
    pub school: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(default)]
    pub works: Vec<Work>,
    #[serde(default)]
    pub key_ideas: Vec<String>,
    #[serde(default)]
    pub influences: Vec<String>,
    #[serde(default)]
    pub influenced: Vec<String>,
}
