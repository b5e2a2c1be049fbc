//! Display vs. Debug formatting

use std::fmt;

/// A movie with a human-readable and a programmer-readable representation
#[derive(Clone, PartialEq, Eq)]
pub struct Movie {
    pub name: String,
    pub release_year: u16,
}

impl Movie {
    pub fn new(name: impl Into<String>, release_year: u16) -> Self {
        Self {
            name: name.into(),
            release_year,
        }
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Movie: name={}, release_year={}",
            self.name, self.release_year
        )
    }
}

impl fmt::Debug for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Movie(name=\"{}\",release_year={})",
            self.name, self.release_year
        )
    }
}
