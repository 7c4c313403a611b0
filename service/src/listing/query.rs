//! Criteria and page of a [`Listing`].
//!
//! [`Listing`]: super::Listing

use common::pagination::{self, Arguments, Number, Size};

use super::{Filter, ValidationError};

/// Search term and filters narrowing a list down.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Criteria<F> {
    /// Free-text search term, if any.
    search: Option<String>,

    /// Named filters.
    filter: F,
}

impl<F: Filter> Criteria<F> {
    /// Returns the search term of these [`Criteria`], if any.
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Returns the [`Filter`] of these [`Criteria`].
    #[must_use]
    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Sets the search term, clearing it if the provided `value` is blank.
    pub fn set_search_term(&mut self, value: &str) {
        let value = value.trim();
        self.search = (!value.is_empty()).then(|| value.to_owned());
    }

    /// Sets the named filter, clearing it if the provided `value` is blank.
    ///
    /// # Errors
    ///
    /// With [`ValidationError`] if the filter is unknown or the `value`
    /// is malformed. These [`Criteria`] are left untouched in such case.
    pub fn set_filter(
        &mut self,
        name: &str,
        value: &str,
    ) -> Result<(), ValidationError> {
        if !F::NAMES.contains(&name) {
            return Err(ValidationError::UnknownFilter(name.to_owned()));
        }
        let value = value.trim();
        self.filter.set(name, (!value.is_empty()).then_some(value))
    }
}

/// Committed [`Criteria`] along with the requested page.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QueryState<F> {
    /// Committed [`Criteria`].
    criteria: Criteria<F>,

    /// Requested page [`Number`].
    page: Number,

    /// Page [`Size`].
    size: Size,
}

impl<F: Filter> QueryState<F> {
    /// Creates a new [`QueryState`] requesting the first page of the provided
    /// [`Size`] with empty [`Criteria`].
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            criteria: Criteria::default(),
            page: Number::FIRST,
            size,
        }
    }

    /// Returns the committed [`Criteria`].
    #[must_use]
    pub fn criteria(&self) -> &Criteria<F> {
        &self.criteria
    }

    /// Returns the requested page [`Number`].
    #[must_use]
    pub fn page(&self) -> Number {
        self.page
    }

    /// Returns the page [`Size`].
    #[must_use]
    pub fn page_size(&self) -> Size {
        self.size
    }

    /// Sets the search term and goes back to the first page.
    pub fn set_search_term(&mut self, value: &str) {
        self.criteria.set_search_term(value);
        self.page = Number::FIRST;
    }

    /// Sets the named filter and goes back to the first page.
    ///
    /// # Errors
    ///
    /// See [`Criteria::set_filter()`].
    pub fn set_filter(
        &mut self,
        name: &str,
        value: &str,
    ) -> Result<(), ValidationError> {
        self.criteria.set_filter(name, value)?;
        self.page = Number::FIRST;
        Ok(())
    }

    /// Requests the page `n`, keeping the [`Criteria`].
    ///
    /// # Errors
    ///
    /// With [`ValidationError::PageOutOfRange`] if `n` is not within
    /// `1..=total_pages`.
    pub fn set_page(
        &mut self,
        n: usize,
        total_pages: Number,
    ) -> Result<(), ValidationError> {
        match Number::new(n) {
            Some(page) if page <= total_pages => {
                self.page = page;
                Ok(())
            }
            _ => Err(ValidationError::PageOutOfRange {
                requested: n,
                total: total_pages.get(),
            }),
        }
    }

    /// Clears the [`Criteria`] and goes back to the first page.
    pub fn reset(&mut self) {
        self.criteria = Criteria::default();
        self.page = Number::FIRST;
    }

    /// Replaces the [`Criteria`] at once and goes back to the first page.
    pub(super) fn commit(&mut self, criteria: Criteria<F>) {
        self.criteria = criteria;
        self.page = Number::FIRST;
    }

    /// Records the page actually being displayed.
    pub(super) fn confirm_page(&mut self, page: Number) {
        self.page = page;
    }

    /// Returns [`pagination::Selector`] of the current state.
    #[must_use]
    pub fn selector(&self) -> pagination::Selector<F> {
        pagination::Selector {
            arguments: Arguments {
                page: self.page,
                size: self.size,
            },
            search: self.criteria.search.clone(),
            filter: self.criteria.filter.clone(),
        }
    }
}
