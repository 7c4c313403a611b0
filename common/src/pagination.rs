//! Abstractions for page-number pagination.

use std::{fmt, num::NonZeroUsize};

use derive_more::{Display, Error};

/// Number of a page in a paginated list, starting from `1`.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Number(NonZeroUsize);

impl Number {
    /// The first page.
    pub const FIRST: Self = Self(NonZeroUsize::MIN);

    /// Creates a new [`Number`] if the provided `n` is not `0`.
    #[must_use]
    pub const fn new(n: usize) -> Option<Self> {
        match NonZeroUsize::new(n) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Returns the raw value of this [`Number`].
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Returns the [`Number`] following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the [`Number`] preceding this one, if any.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        Self::new(self.get() - 1)
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Maximum number of items on a single page.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub struct Size(NonZeroUsize);

impl Size {
    /// Creates a new [`Size`] if the provided `n` is not `0`.
    #[must_use]
    pub const fn new(n: usize) -> Option<Self> {
        match NonZeroUsize::new(n) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Returns the raw value of this [`Size`].
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

/// Pagination arguments.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Arguments {
    /// Requested page [`Number`].
    pub page: Number,

    /// [`Size`] of the requested page.
    pub size: Size,
}

impl Arguments {
    /// Creates new [`Arguments`] requesting the first page of the provided
    /// [`Size`].
    #[must_use]
    pub const fn first(size: Size) -> Self {
        Self {
            page: Number::FIRST,
            size,
        }
    }

    /// Returns the number of items preceding the requested page.
    #[must_use]
    pub const fn offset(&self) -> usize {
        (self.page.get() - 1).saturating_mul(self.size.get())
    }
}

/// Pagination selector.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Selector<F> {
    /// Pagination [`Arguments`].
    pub arguments: Arguments,

    /// Free-text search term, if any.
    pub search: Option<String>,

    /// Additional filter being applied to the result.
    pub filter: F,
}

/// A single page of items, as reported by a paginated source.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<I, M = ()> {
    /// Items on this [`Page`], in the order reported by the source.
    pub items: Vec<I>,

    /// [`Number`] of this [`Page`].
    pub current: Number,

    /// Total number of pages available.
    pub total_pages: Number,

    /// Total number of items across all pages.
    pub total_count: usize,

    /// Additional metadata reported along with this [`Page`].
    pub meta: M,
}

impl<I, M> Page<I, M> {
    /// Creates a new empty [`Page`] with the provided metadata.
    #[must_use]
    pub fn empty(meta: M) -> Self {
        Self {
            items: Vec::new(),
            current: Number::FIRST,
            total_pages: Number::FIRST,
            total_count: 0,
            meta,
        }
    }

    /// Checks this [`Page`] against the [`Size`] it was requested with.
    ///
    /// # Errors
    ///
    /// If this [`Page`] holds more items than allowed, holds any items or
    /// pages while reporting no items in total, or points beyond the total
    /// pages.
    pub fn check(&self, size: Size) -> Result<(), Invalid> {
        if self.items.len() > size.get() {
            return Err(Invalid::Overflow {
                items: self.items.len(),
                size: size.get(),
            });
        }
        if self.total_count == 0 && !self.items.is_empty() {
            return Err(Invalid::Phantom(self.items.len()));
        }
        if self.total_count == 0 && self.total_pages != Number::FIRST {
            return Err(Invalid::PhantomPages(self.total_pages.get()));
        }
        if self.current > self.total_pages {
            return Err(Invalid::OutOfRange {
                current: self.current.get(),
                total: self.total_pages.get(),
            });
        }
        Ok(())
    }

    /// Returns [`PageInfo`] of this [`Page`], assuming it was requested with
    /// the provided [`Size`].
    #[must_use]
    pub fn info(&self, size: Size) -> PageInfo {
        let offset = Arguments {
            page: self.current,
            size,
        }
        .offset();
        let (first_shown, last_shown) = if self.total_count == 0 {
            (0, 0)
        } else {
            (
                offset.saturating_add(1).min(self.total_count),
                offset.saturating_add(size.get()).min(self.total_count),
            )
        };

        PageInfo {
            current: self.current,
            total_pages: self.total_pages,
            total_count: self.total_count,
            first_shown,
            last_shown,
        }
    }

    /// Removes the first item matching the provided predicate, preserving the
    /// order of the remaining items.
    ///
    /// Pagination totals are left untouched.
    pub fn remove_by(
        &mut self,
        predicate: impl FnMut(&I) -> bool,
    ) -> Option<I> {
        let pos = self.items.iter().position(predicate)?;
        Some(self.items.remove(pos))
    }
}

/// Violation of [`Page`] invariants.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum Invalid {
    /// [`Page`] holds more items than its [`Size`] allows.
    #[display("page holds {items} items, but at most {size} are allowed")]
    Overflow {
        /// Number of items on the page.
        items: usize,

        /// Requested page size.
        size: usize,
    },

    /// [`Page`] holds items while reporting no items in total.
    #[display("page holds {_0} items, but total count is `0`")]
    Phantom(#[error(not(source))] usize),

    /// [`Page`] reports more than one page while no items in total.
    #[display("{_0} total pages reported, but total count is `0`")]
    PhantomPages(#[error(not(source))] usize),

    /// [`Page`] points beyond the total pages.
    #[display("page {current} is beyond {total} total pages")]
    OutOfRange {
        /// Reported current page.
        current: usize,

        /// Reported total pages.
        total: usize,
    },
}

/// Information about a [`Page`] used to render navigation controls.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PageInfo {
    /// [`Number`] of the current page.
    pub current: Number,

    /// Total number of pages.
    pub total_pages: Number,

    /// Total number of items.
    pub total_count: usize,

    /// 1-based position of the first item shown, or `0` if none.
    pub first_shown: usize,

    /// 1-based position of the last item shown, or `0` if none.
    pub last_shown: usize,
}

impl PageInfo {
    /// Indicates whether a previous page exists.
    #[must_use]
    pub fn has_previous_page(&self) -> bool {
        self.current > Number::FIRST
    }

    /// Indicates whether a next page exists.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.current < self.total_pages
    }

    /// Returns every page [`Number`] from the first to the last one.
    ///
    /// No windowing is applied, so a control is expected per page.
    pub fn numbers(&self) -> impl Iterator<Item = Number> {
        (1..=self.total_pages.get()).filter_map(Number::new)
    }
}

impl fmt::Display for PageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            first_shown,
            last_shown,
            total_count,
            ..
        } = self;
        write!(f, "Showing {first_shown} to {last_shown} of {total_count}")
    }
}

/// Defines pagination types.
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_pagination {
    ($node:ty, $filter:ty) => {
        $crate::define_pagination!($node, $filter, ());
    };
    ($node:ty, $filter:ty, $meta:ty) => {
        #[doc = "A [`Page`] of nodes."]
        pub type Page = $crate::pagination::Page<$node, $meta>;

        #[doc = "An information about a [`Page`]."]
        pub type PageInfo = $crate::pagination::PageInfo;

        #[doc = "Arguments for selecting a [`Page`]."]
        pub type Arguments = $crate::pagination::Arguments;

        #[doc = "[`Page`] selector."]
        pub type Selector = $crate::pagination::Selector<$filter>;
    };
}
