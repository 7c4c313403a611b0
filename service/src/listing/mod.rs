//! Paginated, filterable and searchable lists of entities.
//!
//! A [`Listing`] never performs I/O itself. Every operation changing what
//! should be displayed returns a [`Fetch`], which the caller runs against a
//! [`Query`] and hands back to [`Listing::settle()`]. Any number of
//! [`Fetch`]es may be in flight at once: only the most recently issued one
//! is allowed to land, whatever the order their responses arrive in.

mod coordinator;
mod query;
mod resource;

use common::pagination::{self, Number, PageInfo, Size};
use derive_more::{Display, Error};
use tracerr::Traced;

use crate::{
    infra::api,
    query::{self as queries, Query},
    ui::{self, Confirmer, Notification, Notifier},
    Command,
};

pub use self::{
    coordinator::{Coordinator, Ticket},
    query::{Criteria, QueryState},
    resource::{Deletable, Filter, Inventory, Resource, Users},
};

/// [`pagination::Page`] of a [`Resource`].
pub type Page<R> =
    pagination::Page<<R as Resource>::Item, <R as Resource>::Meta>;

/// [`pagination::Selector`] of a [`Resource`].
pub type Selector<R> = pagination::Selector<<R as Resource>::Filter>;

/// Invalid input of a [`Listing`] operation.
#[derive(Clone, Debug, Display, Error, Eq, PartialEq)]
pub enum ValidationError {
    /// Requested page doesn't exist.
    #[display("page {requested} is out of range 1..={total}")]
    PageOutOfRange {
        /// Requested page number.
        requested: usize,

        /// Total number of pages.
        total: usize,
    },

    /// Filter with the given name is not supported.
    #[display("unknown filter `{_0}`")]
    UnknownFilter(#[error(not(source))] String),

    /// Filter value cannot be parsed.
    #[display("invalid `{name}` filter value: `{value}`")]
    InvalidFilterValue {
        /// Name of the filter.
        name: String,

        /// Rejected value.
        value: String,
    },

    /// Free-text search is not supported.
    #[display("search is not supported")]
    NotSearchable,
}

impl ValidationError {
    /// Creates a new [`ValidationError::InvalidFilterValue`].
    #[must_use]
    pub fn invalid_value(
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidFilterValue {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// What a [`Listing`] is busy with.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Phase {
    /// Draft [`Criteria`] match the committed ones.
    #[display("idle")]
    Idle,

    /// Draft [`Criteria`] differ from the committed ones.
    #[display("dirty")]
    Dirty,

    /// Committed [`Criteria`] are being fetched.
    #[display("applying")]
    Applying,
}

/// Fetch of a [`Page`] issued by a [`Listing`].
#[derive(Debug)]
#[must_use = "`Fetch` does nothing unless run and settled"]
pub struct Fetch<R: Resource> {
    /// [`Ticket`] of this [`Fetch`].
    ticket: Ticket,

    /// [`Selector`] of the requested [`Page`].
    selector: Selector<R>,
}

impl<R: Resource> Fetch<R> {
    /// Returns [`Ticket`] of this [`Fetch`].
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Returns [`Selector`] of the requested [`Page`].
    pub fn selector(&self) -> &Selector<R> {
        &self.selector
    }

    /// Runs this [`Fetch`] against the provided [`Query`] handler.
    pub async fn run<S>(self, service: &S) -> Settled<R>
    where
        S: Query<queries::List<R>, Ok = Page<R>, Err = Traced<api::Error>>
            + ?Sized,
    {
        let result = service
            .execute(queries::List::<R>::by(self.selector.clone()))
            .await;
        self.resolve(result)
    }

    /// Resolves this [`Fetch`] with the provided `result`, checking the
    /// received [`Page`] for consistency.
    pub fn resolve(
        self,
        result: Result<Page<R>, Traced<api::Error>>,
    ) -> Settled<R> {
        let size = self.selector.arguments.size;
        Settled {
            ticket: self.ticket,
            result: result.and_then(|page| {
                page.check(size)
                    .map_err(tracerr::from_and_wrap!(=> api::Error))?;
                Ok(page)
            }),
        }
    }
}

/// Outcome of a [`Fetch`], to be handed back to [`Listing::settle()`].
#[derive(Debug)]
#[must_use = "`Settled` must be handed back to its `Listing`"]
pub struct Settled<R: Resource> {
    /// [`Ticket`] of the settled [`Fetch`].
    ticket: Ticket,

    /// Received [`Page`] or the reason of not receiving it.
    result: Result<Page<R>, Traced<api::Error>>,
}

impl<R: Resource> Settled<R> {
    /// Returns [`Ticket`] of the settled [`Fetch`].
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }
}

/// Effect of [`Listing::settle()`].
#[derive(Debug)]
#[must_use]
pub enum Settlement {
    /// Received [`Page`] is displayed now.
    Applied,

    /// [`Fetch`] was superseded, so its outcome was ignored.
    Discarded,

    /// [`Fetch`] failed, so the previous [`Page`] stays displayed.
    Failed(Traced<api::Error>),
}

/// Effect of [`Listing::delete()`].
#[derive(Debug)]
#[must_use]
pub enum Deletion<R: Resource> {
    /// User declined the deletion, so nothing was sent.
    Declined,

    /// Entity was deleted and removed from the displayed [`Page`].
    Removed,

    /// Entity was deleted, but wasn't displayed, so the current [`Page`]
    /// should be fetched again.
    Refetch(Fetch<R>),

    /// Deletion failed, so nothing has changed.
    Failed(Traced<api::Error>),
}

/// Paginated list of [`Resource`] entities along with the [`Criteria`] being
/// edited for it.
#[derive(Debug)]
pub struct Listing<R: Resource> {
    /// Committed [`Criteria`] and the requested page.
    query: QueryState<R::Filter>,

    /// [`Criteria`] being edited, not committed yet.
    draft: Criteria<R::Filter>,

    /// Last successfully received [`Page`].
    result: Option<Page<R>>,

    /// [`Coordinator`] of in-flight [`Fetch`]es.
    coordinator: Coordinator,

    /// [`Ticket`] of the [`Fetch`] issued by [`Listing::apply()`], while it
    /// hasn't settled.
    applying: Option<Ticket>,
}

impl<R: Resource> Listing<R> {
    /// Creates a new empty [`Listing`] of pages of the provided [`Size`].
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            query: QueryState::new(size),
            draft: Criteria::default(),
            result: None,
            coordinator: Coordinator::default(),
            applying: None,
        }
    }

    /// Creates a new [`Listing`] along with the [`Fetch`] of its first page.
    pub fn mount(size: Size) -> (Self, Fetch<R>) {
        let mut listing = Self::new(size);
        let fetch = listing.issue();
        (listing, fetch)
    }

    /// Returns the committed [`QueryState`].
    #[must_use]
    pub fn query(&self) -> &QueryState<R::Filter> {
        &self.query
    }

    /// Returns the draft [`Criteria`].
    #[must_use]
    pub fn draft(&self) -> &Criteria<R::Filter> {
        &self.draft
    }

    /// Returns the displayed [`Page`], if any has been received yet.
    #[must_use]
    pub fn result(&self) -> Option<&Page<R>> {
        self.result.as_ref()
    }

    /// Returns the displayed entities.
    #[must_use]
    pub fn items(&self) -> &[R::Item] {
        self.result
            .as_ref()
            .map(|page| page.items.as_slice())
            .unwrap_or_default()
    }

    /// Returns [`PageInfo`] of the displayed [`Page`].
    #[must_use]
    pub fn page_info(&self) -> PageInfo {
        let size = self.query.page_size();
        match &self.result {
            Some(page) => page.info(size),
            None => Page::<R>::empty(R::Meta::default()).info(size),
        }
    }

    /// Returns the total number of pages, as last reported.
    #[must_use]
    pub fn total_pages(&self) -> Number {
        self.result
            .as_ref()
            .map_or(Number::FIRST, |page| page.total_pages)
    }

    /// Indicates whether the latest [`Fetch`] hasn't settled yet.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.coordinator.is_loading()
    }

    /// Returns the current [`Phase`] of this [`Listing`].
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.applying.is_some() {
            Phase::Applying
        } else if &self.draft == self.query.criteria() {
            Phase::Idle
        } else {
            Phase::Dirty
        }
    }

    /// Sets the draft search term, clearing it if the `value` is blank.
    ///
    /// # Errors
    ///
    /// With [`ValidationError::NotSearchable`] if the [`Resource`] doesn't
    /// support search.
    pub fn set_search_term(
        &mut self,
        value: &str,
    ) -> Result<(), ValidationError> {
        if !R::SEARCHABLE {
            return Err(ValidationError::NotSearchable);
        }
        self.draft.set_search_term(value);
        Ok(())
    }

    /// Sets the named draft filter, clearing it if the `value` is blank.
    ///
    /// # Errors
    ///
    /// See [`Criteria::set_filter()`].
    pub fn set_filter(
        &mut self,
        name: &str,
        value: &str,
    ) -> Result<(), ValidationError> {
        self.draft.set_filter(name, value)
    }

    /// Clears the draft [`Criteria`].
    ///
    /// Nothing is fetched until [`Listing::apply()`] is called.
    pub fn reset(&mut self) {
        self.draft = Criteria::default();
    }

    /// Commits the draft [`Criteria`] and fetches the first page with them.
    pub fn apply(&mut self) -> Fetch<R> {
        self.query.commit(self.draft.clone());
        let fetch = self.issue();
        self.applying = Some(fetch.ticket);
        fetch
    }

    /// Fetches the page `n` with the committed [`Criteria`].
    ///
    /// # Errors
    ///
    /// With [`ValidationError::PageOutOfRange`] if `n` is not within the
    /// last reported total pages. Nothing is fetched in such case.
    pub fn set_page(&mut self, n: usize) -> Result<Fetch<R>, ValidationError> {
        self.query.set_page(n, self.total_pages())?;
        Ok(self.issue())
    }

    /// Fetches the page following the requested one, if any.
    ///
    /// The requested page may be ahead of the displayed one while its
    /// [`Fetch`] is in flight.
    pub fn next_page(&mut self) -> Option<Fetch<R>> {
        let next = self.query.page().next();
        if next > self.total_pages() {
            return None;
        }
        self.set_page(next.get()).ok()
    }

    /// Fetches the page preceding the requested one, if any.
    pub fn previous_page(&mut self) -> Option<Fetch<R>> {
        let previous = self.query.page().previous()?;
        self.set_page(previous.get()).ok()
    }

    /// Fetches the requested page again.
    pub fn refresh(&mut self) -> Fetch<R> {
        self.issue()
    }

    /// Issues a new [`Fetch`] of the current [`QueryState`].
    fn issue(&mut self) -> Fetch<R> {
        let ticket = self.coordinator.issue();
        let selector = self.query.selector();
        tracing::debug!(
            %ticket,
            page = %selector.arguments.page,
            search = ?selector.search,
            "fetching {}",
            R::PLURAL,
        );
        Fetch { ticket, selector }
    }

    /// Applies the outcome of a [`Fetch`], unless it was superseded.
    ///
    /// A failure of the latest [`Fetch`] is reported via the provided
    /// [`Notifier`] exactly once, keeping the previous [`Page`] displayed.
    /// Superseded outcomes are dropped silently.
    pub async fn settle<U>(&mut self, ui: &U, settled: Settled<R>) -> Settlement
    where
        U: Notifier + ?Sized,
    {
        let Settled { ticket, result } = settled;

        if self.applying == Some(ticket) {
            self.applying = None;
        }
        if !self.coordinator.settle(ticket) {
            tracing::debug!(%ticket, "discarding stale {}", R::PLURAL);
            return Settlement::Discarded;
        }

        match result {
            Ok(page) => {
                self.query.confirm_page(page.current);
                self.result = Some(page);
                Settlement::Applied
            }
            Err(e) => {
                tracing::error!(%ticket, "failed to load {}: {e}", R::PLURAL);
                self.query.confirm_page(
                    self.result
                        .as_ref()
                        .map_or(Number::FIRST, |page| page.current),
                );
                ui::notify(
                    ui,
                    Notification::error(format!(
                        "Failed to load {}",
                        R::PLURAL,
                    )),
                )
                .await;
                Settlement::Failed(e)
            }
        }
    }
}

impl<R: Deletable> Listing<R> {
    /// Deletes the entity with the provided ID, once confirmed.
    ///
    /// On success the entity is removed from the displayed [`Page`] right
    /// away, without fetching it again, so the pagination totals stay as
    /// last reported until the next [`Fetch`].
    pub async fn delete<S, U>(
        &mut self,
        service: &S,
        ui: &U,
        id: R::Id,
    ) -> Deletion<R>
    where
        S: Command<R::Delete, Ok = (), Err = Traced<api::Error>> + ?Sized,
        U: Notifier + Confirmer + ?Sized,
    {
        if !ui::confirm(ui, R::confirmation()).await {
            return Deletion::Declined;
        }

        if let Err(e) = service.execute(R::delete(id)).await {
            tracing::error!(%id, "failed to delete {}: {e}", R::NOUN);
            let message = e.as_ref().message().map_or_else(
                || format!("Failed to delete {}", R::NOUN),
                ToOwned::to_owned,
            );
            ui::notify(ui, Notification::error(message)).await;
            return Deletion::Failed(e);
        }

        ui::notify(
            ui,
            Notification::success(format!("{} deleted successfully", R::TITLE)),
        )
        .await;

        let removed = self
            .result
            .as_mut()
            .and_then(|page| page.remove_by(|item| R::id(item) == id));
        match removed {
            Some(_) => Deletion::Removed,
            None => Deletion::Refetch(self.refresh()),
        }
    }
}
