//! Ordering of concurrently issued page fetches.

use derive_more::Display;

/// Sequence number identifying an issued fetch.
///
/// [`Ticket`]s issued later compare greater.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[display("#{_0}")]
pub struct Ticket(u64);

/// Coordinator letting only the most recently issued fetch win.
///
/// Any number of fetches may be in flight at once, but only the response of
/// the latest one is allowed to change the displayed state. Responses of
/// superseded fetches are reported as stale, whenever they arrive.
#[derive(Clone, Copy, Debug, Default)]
pub struct Coordinator {
    /// Last issued sequence number, `0` if none.
    latest: u64,

    /// Indicator whether the latest fetch has not settled yet.
    pending: bool,
}

impl Coordinator {
    /// Issues a new [`Ticket`], superseding all the previous ones.
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        self.pending = true;
        Ticket(self.latest)
    }

    /// Indicates whether the provided [`Ticket`] is the latest issued one.
    #[must_use]
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    /// Settles the fetch of the provided [`Ticket`].
    ///
    /// Returns `false` if the [`Ticket`] is stale, leaving this
    /// [`Coordinator`] untouched.
    #[must_use]
    pub fn settle(&mut self, ticket: Ticket) -> bool {
        let latest = self.is_latest(ticket);
        if latest {
            self.pending = false;
        }
        latest
    }

    /// Indicates whether the latest fetch has not settled yet.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending
    }
}
