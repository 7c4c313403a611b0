//! Interactive browsing of a [`Listing`].

use std::{future::Future, str::FromStr};

use common::pagination::Size;
use derive_more::{Display, Error};
use futures::{stream::FuturesUnordered, StreamExt as _};
use service::{
    domain::user,
    infra::api,
    listing::{self, Deletion, Fetch, Inventory, Listing, Resource, Users},
    query, Query,
};
use tracerr::Traced;

use crate::{view, Service, Terminal};

/// Usage of a browsing session.
const HELP: &str = "\
Commands:
  n, next              go to the next page
  p, prev              go to the previous page
  g, page <n>          go to the page <n>
  s, search [term]     set the search term, clearing it if omitted
  f, filter <name> [v] set the filter <name>, clearing it if omitted
  a, apply             apply the search term and filters
  r, reset             clear the search term and filters
  refresh              load the current page again
  d, delete <id>       delete the entity with the provided <id>
  h, help              show this help
  q, quit              leave";

/// [`Resource`] browsable in a [`Terminal`].
pub trait Browse: Resource + Sized {
    /// Renders the provided [`Listing`].
    fn render(listing: &Listing<Self>) -> String;

    /// Deletes the entity with the provided raw `id` from the provided
    /// [`Listing`], returning the [`Fetch`] to run afterwards, if any.
    fn delete(
        listing: &mut Listing<Self>,
        service: &Service,
        terminal: &Terminal,
        id: &str,
    ) -> impl Future<Output = Option<Fetch<Self>>>;
}

impl Browse for Users {
    fn render(listing: &Listing<Self>) -> String {
        view::users(listing)
    }

    async fn delete(
        listing: &mut Listing<Self>,
        service: &Service,
        terminal: &Terminal,
        id: &str,
    ) -> Option<Fetch<Self>> {
        let id = match id.parse::<user::Id>() {
            Ok(id) => id,
            Err(e) => {
                println!("Invalid user ID `{id}`: {e}");
                return None;
            }
        };

        match listing.delete(service, terminal, id).await {
            Deletion::Refetch(fetch) => Some(fetch),
            Deletion::Declined | Deletion::Removed | Deletion::Failed(_) => {
                None
            }
        }
    }
}

impl Browse for Inventory {
    fn render(listing: &Listing<Self>) -> String {
        view::inventory(listing)
    }

    async fn delete(
        _: &mut Listing<Self>,
        _: &Service,
        _: &Terminal,
        _: &str,
    ) -> Option<Fetch<Self>> {
        println!("Vehicles cannot be deleted from the inventory");
        None
    }
}

/// Input of a browsing session.
#[derive(Clone, Debug, Eq, PartialEq)]
enum Input {
    /// Go to the next page.
    Next,

    /// Go to the previous page.
    Previous,

    /// Go to the page with the provided number.
    Page(usize),

    /// Set the draft search term.
    Search(String),

    /// Set the named draft filter.
    Filter {
        /// Name of the filter.
        name: String,

        /// Value of the filter, blank to clear it.
        value: String,
    },

    /// Apply the draft criteria.
    Apply,

    /// Clear the draft criteria.
    Reset,

    /// Load the current page again.
    Refresh,

    /// Delete the entity with the provided ID.
    Delete(String),

    /// Show usage.
    Help,

    /// Leave the session.
    Quit,
}

/// Unrecognized [`Input`].
#[derive(Clone, Debug, Display, Error, Eq, PartialEq)]
#[display("unknown command `{_0}`, type `help` for usage")]
struct UnknownInput(#[error(not(source))] String);

impl FromStr for Input {
    type Err = UnknownInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (cmd, rest) = s.split_once(' ').unwrap_or((s, ""));
        let rest = rest.trim();

        Ok(match (cmd, rest) {
            ("n" | "next", "") => Self::Next,
            ("p" | "prev", "") => Self::Previous,
            ("g" | "page", n) => Self::Page(
                n.parse().map_err(|_| UnknownInput(s.to_owned()))?,
            ),
            ("s" | "search", term) => Self::Search(term.to_owned()),
            ("f" | "filter", filter) if !filter.is_empty() => {
                let (name, value) =
                    filter.split_once(' ').unwrap_or((filter, ""));
                Self::Filter {
                    name: name.to_owned(),
                    value: value.trim().to_owned(),
                }
            }
            ("a" | "apply", "") => Self::Apply,
            ("r" | "reset", "") => Self::Reset,
            ("refresh", "") => Self::Refresh,
            ("d" | "delete", id) if !id.is_empty() => {
                Self::Delete(id.to_owned())
            }
            ("h" | "help", "") => Self::Help,
            ("q" | "quit", "") => Self::Quit,
            _ => return Err(UnknownInput(s.to_owned())),
        })
    }
}

/// Browses the [`Listing`] of `R` with pages of the provided [`Size`] until
/// the user quits or the input is exhausted.
///
/// Fetches run concurrently with reading the input, so the user may keep
/// navigating while a page is loading.
pub async fn browse<R>(service: &Service, terminal: &Terminal, size: Size)
where
    R: Browse,
    Service: Query<
        query::List<R>,
        Ok = listing::Page<R>,
        Err = Traced<api::Error>,
    >,
{
    let (mut listing, fetch) = Listing::<R>::mount(size);
    let mut pending = FuturesUnordered::new();
    pending.push(fetch.run(service));
    println!("{}", R::render(&listing));

    loop {
        tokio::select! {
            Some(settled) = pending.next() => {
                if let listing::Settlement::Discarded =
                    listing.settle(terminal, settled).await
                {
                    continue;
                }
            }
            line = terminal.read_line() => {
                let Some(line) = line else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }

                let input = match line.parse::<Input>() {
                    Ok(Input::Quit) => break,
                    Ok(input) => input,
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                };
                if let Some(fetch) =
                    handle(&mut listing, service, terminal, input).await
                {
                    pending.push(fetch.run(service));
                }
            }
        }
        println!("{}", R::render(&listing));
    }
    tracing::debug!("leaving {} session", R::PLURAL);
}

/// Applies the provided [`Input`] to the [`Listing`], returning the
/// [`Fetch`] to run, if any.
async fn handle<R: Browse>(
    listing: &mut Listing<R>,
    service: &Service,
    terminal: &Terminal,
    input: Input,
) -> Option<Fetch<R>> {
    let rejected = |e: listing::ValidationError| println!("{e}");

    match input {
        Input::Next => listing.next_page(),
        Input::Previous => listing.previous_page(),
        Input::Page(n) => listing.set_page(n).map_err(rejected).ok(),
        Input::Search(term) => {
            listing.set_search_term(&term).unwrap_or_else(rejected);
            None
        }
        Input::Filter { name, value } => {
            listing.set_filter(&name, &value).unwrap_or_else(rejected);
            None
        }
        Input::Apply => Some(listing.apply()),
        Input::Reset => {
            listing.reset();
            None
        }
        Input::Refresh => Some(listing.refresh()),
        Input::Delete(id) => R::delete(listing, service, terminal, &id).await,
        Input::Help => {
            println!(
                "{HELP}\nFilters: {}",
                <R::Filter as listing::Filter>::NAMES.join(", "),
            );
            None
        }
        Input::Quit => None,
    }
}

#[cfg(test)]
mod spec {
    use super::Input;

    #[test]
    fn parses_navigation() {
        assert_eq!("n".parse(), Ok(Input::Next));
        assert_eq!(" prev ".parse(), Ok(Input::Previous));
        assert_eq!("g 3".parse(), Ok(Input::Page(3)));
        assert_eq!("page 0".parse(), Ok(Input::Page(0)));
        assert!("g three".parse::<Input>().is_err());
        assert!("n 2".parse::<Input>().is_err());
    }

    #[test]
    fn parses_criteria() {
        assert_eq!(
            "s jane doe".parse(),
            Ok(Input::Search("jane doe".into())),
        );
        assert_eq!("search".parse(), Ok(Input::Search(String::new())));
        assert_eq!(
            "f priceRange 20001-30000".parse(),
            Ok(Input::Filter {
                name: "priceRange".into(),
                value: "20001-30000".into(),
            }),
        );
        assert_eq!(
            "filter role".parse(),
            Ok(Input::Filter {
                name: "role".into(),
                value: String::new(),
            }),
        );
        assert!("f".parse::<Input>().is_err());
    }

    #[test]
    fn parses_actions() {
        assert_eq!("a".parse(), Ok(Input::Apply));
        assert_eq!("reset".parse(), Ok(Input::Reset));
        assert_eq!("refresh".parse(), Ok(Input::Refresh));
        assert_eq!("d 12".parse(), Ok(Input::Delete("12".into())));
        assert!("delete".parse::<Input>().is_err());
        assert_eq!("q".parse(), Ok(Input::Quit));
        assert!("fly".parse::<Input>().is_err());
    }
}
