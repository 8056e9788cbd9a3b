use std::collections::BTreeSet;

use crate::dataset::Dataset;

/// Distinct filterable values derived from the dataset, plus the global
/// lifespan bounds. Pure function of the dataset; recompute only when
/// the dataset itself is replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Facets {
    /// Sorted unique periods.
    pub periods: Vec<String>,
    /// Sorted unique schools.
    pub schools: Vec<String>,
    /// Sorted unique birth cities.
    pub cities: Vec<String>,
    /// Minimum birth year over the dataset.
    pub min_year: i32,
    /// Maximum death year over the dataset.
    pub max_year: i32,
}

impl Facets {
    pub fn derive(dataset: &Dataset) -> Self {
        let mut periods = BTreeSet::new();
        let mut schools = BTreeSet::new();
        let mut cities = BTreeSet::new();

        for p in dataset.iter() {
            periods.insert(p.period.clone());
            schools.insert(p.school.clone());
            cities.insert(p.birth_city.clone());
        }

        // An empty dataset has no meaningful span; collapse to [0, 0].
        let min_year = dataset.iter().map(|p| p.birth_year).min().unwrap_or(0);
        let max_year = dataset.iter().map(|p| p.death_year).max().unwrap_or(0);

        Self {
            periods: periods.into_iter().collect(),
            schools: schools.into_iter().collect(),
            cities: cities.into_iter().collect(),
            min_year,
            max_year,
        }
    }
}
