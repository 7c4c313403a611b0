//! Remote [`Api`]-related implementations.

#[cfg(feature = "http")]
pub mod http;

use std::fmt;

use common::pagination;
use derive_more::{Display, Error as StdError, From};

#[cfg(feature = "http")]
pub use self::http::Http;

/// Remote API operation.
pub use common::Handler as Api;

/// [`Api`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// [`Http`] transport error.
    #[cfg(feature = "http")]
    #[display("`Http` error: {_0}")]
    Http(http::Error),

    /// Request was rejected by the remote side.
    #[display("Request rejected: {_0}")]
    Rejected(Rejection),

    /// Received page violates pagination invariants.
    #[display("Invalid page received: {_0}")]
    InvalidPage(pagination::Invalid),
}

impl Error {
    /// Checks whether the requested entity doesn't exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Rejected(r) if r.status == Rejection::NOT_FOUND)
    }

    /// Returns the human-readable message provided by the remote side, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        if let Self::Rejected(r) = self {
            r.message.as_deref()
        } else {
            None
        }
    }
}

/// Non-successful response of the remote side.
#[derive(Clone, Debug, Eq, PartialEq, StdError)]
pub struct Rejection {
    /// HTTP status code of the response.
    pub status: u16,

    /// Message provided in the response body, if any.
    pub message: Option<String>,
}

impl Rejection {
    /// Status code of a missing entity.
    pub const NOT_FOUND: u16 = 404;
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status `{}`", self.status)?;
        if let Some(msg) = &self.message {
            write!(f, ": {msg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod spec {
    use super::{Error, Rejection};

    #[test]
    fn not_found() {
        let e = Error::from(Rejection {
            status: 404,
            message: None,
        });
        assert!(e.is_not_found());
        assert_eq!(e.message(), None);

        let e = Error::from(Rejection {
            status: 409,
            message: Some("Username already exists".into()),
        });
        assert!(!e.is_not_found());
        assert_eq!(e.message(), Some("Username already exists"));
        assert_eq!(
            e.to_string(),
            "Request rejected: status `409`: Username already exists",
        );
    }
}
