/// One categorical filter: either the `all` sentinel or a single facet value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn only(value: impl Into<String>) -> Self {
        Selection::Only(value.into())
    }

    pub fn admits(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(v) => v == value,
        }
    }
}

/// The three categorical filter selections. Default admits everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub period: Selection,
    pub school: Selection,
    pub city: Selection,
}

/// Inclusive year range. The engine assumes `start <= end`; callers clamp
/// and normalize (see [`TimeRange::clamped`]) before filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeRange {
    pub start: i32,
    pub end: i32,
}

impl TimeRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Clamp both endpoints into `[min, max]` and restore ordering.
    pub fn clamped(self, min: i32, max: i32) -> Self {
        let start = self.start.clamp(min, max);
        let end = self.end.clamp(min, max);
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Overlap test, not containment: a lifespan touching any part of the
    /// range qualifies.
    pub fn overlaps(&self, birth_year: i32, death_year: i32) -> bool {
        birth_year <= self.end && death_year >= self.start
    }
}
