use std::ops::{Deref, DerefMut};

use crate::codes::NocGenre;
use crate::params::SearchParams;
use crate::values::ValueSet;

/// Search conditions for the restricted catalog.
///
/// Every general dimension is reachable through `Deref`, but the general
/// `biggenre`/`genre` families are never encoded for this catalog; the
/// sub-site genres below take their place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct R18SearchParams {
    base: SearchParams,
    noc_genres: ValueSet<NocGenre>,
    not_noc_genres: ValueSet<NocGenre>,
}

impl R18SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Carries over conditions already collected for the general catalog.
    pub fn from_general(base: SearchParams) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    pub fn noc_genres(&self) -> &ValueSet<NocGenre> {
        &self.noc_genres
    }

    pub fn add_noc_genres<I>(&mut self, genres: I)
    where
        I: IntoIterator<Item = NocGenre>,
    {
        self.noc_genres.add(genres);
    }

    pub fn clear_noc_genres(&mut self) {
        self.noc_genres.clear();
    }

    pub fn not_noc_genres(&self) -> &ValueSet<NocGenre> {
        &self.not_noc_genres
    }

    pub fn add_not_noc_genres<I>(&mut self, genres: I)
    where
        I: IntoIterator<Item = NocGenre>,
    {
        self.not_noc_genres.add(genres);
    }

    pub fn clear_not_noc_genres(&mut self) {
        self.not_noc_genres.clear();
    }
}

impl Deref for R18SearchParams {
    type Target = SearchParams;

    fn deref(&self) -> &SearchParams {
        &self.base
    }
}

impl DerefMut for R18SearchParams {
    fn deref_mut(&mut self) -> &mut SearchParams {
        &mut self.base
    }
}

impl AsRef<SearchParams> for R18SearchParams {
    fn as_ref(&self) -> &SearchParams {
        &self.base
    }
}
