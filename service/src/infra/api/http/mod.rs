//! HTTP [`Api`] implementation.

mod impls;

use std::time::Duration;

use common::pagination::{Number, Page};
use derive_more::{Display, Error as StdError, From};
use reqwest::{Client, Method, RequestBuilder, Response};
use secrecy::{ExposeSecret as _, SecretString};
use serde::{de::DeserializeOwned, Deserialize};
use tracerr::Traced;

use crate::infra::api::{self, Rejection};
#[cfg(doc)]
use crate::infra::Api;

pub use url::Url;

/// [`Http`] client configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base [`Url`] every API path is resolved against.
    pub base_url: Url,

    /// Bearer token to authorize requests with, if any.
    pub token: Option<SecretString>,

    /// Timeout of a single request.
    pub timeout: Duration,
}

/// HTTP [`Api`] client.
#[derive(Clone, Debug)]
pub struct Http {
    /// Underlying [`Client`].
    client: Client,

    /// Base [`Url`] every API path is resolved against.
    base_url: Url,

    /// Bearer token to authorize requests with, if any.
    token: Option<SecretString>,
}

impl Http {
    /// Creates a new [`Http`] client with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If failed to create a new [`Client`].
    pub fn new(conf: Config) -> Result<Self, Traced<api::Error>> {
        let Config {
            mut base_url,
            token,
            timeout,
        } = conf;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;
        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Returns the base [`Url`] of this [`Http`] client.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Starts a request to the provided API `path`.
    fn request(
        &self,
        method: Method,
        path: &str,
    ) -> Result<RequestBuilder, Traced<api::Error>> {
        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;
        let req = self.client.request(method, url);
        Ok(match &self.token {
            Some(token) => req.bearer_auth(token.expose_secret()),
            None => req,
        })
    }

    /// Sends the provided request, turning non-successful responses into
    /// [`Rejection`]s.
    async fn send(
        &self,
        req: RequestBuilder,
    ) -> Result<Response, Traced<api::Error>> {
        let resp = req
            .send()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let message = resp
            .bytes()
            .await
            .ok()
            .and_then(|body| rejection_message(&body));
        tracing::debug!(%status, ?message, "request rejected");
        Err(tracerr::new!(api::Error::from(Rejection {
            status: status.as_u16(),
            message,
        })))
    }

    /// Sends the provided request, discarding the response body.
    async fn perform(
        &self,
        req: RequestBuilder,
    ) -> Result<(), Traced<api::Error>> {
        drop(self.send(req).await.map_err(tracerr::wrap!())?);
        Ok(())
    }

    /// Sends the provided request, decoding the response body as JSON.
    async fn fetch<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> Result<T, Traced<api::Error>> {
        self.send(req)
            .await
            .map_err(tracerr::wrap!())?
            .json()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)
    }
}

/// [`Http`] transport error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Failed to perform a request or to decode its response.
    #[display("Request failed: {_0}")]
    Request(reqwest::Error),

    /// Failed to resolve an API path.
    #[display("Invalid URL: {_0}")]
    Url(url::ParseError),
}

/// Body of a rejected response.
#[derive(Deserialize)]
struct ErrorBody {
    /// Human-readable reason of the rejection.
    message: Option<String>,
}

/// Extracts a human-readable message out of a rejected response `body`.
fn rejection_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()?
        .message
        .filter(|m| !m.trim().is_empty())
}

/// Assembles a [`Page`] out of the raw pagination values of a response.
///
/// Missing or zero page numbers are treated as `1`.
fn page<I, M>(
    items: Option<Vec<I>>,
    current: Option<usize>,
    total_pages: Option<usize>,
    total_count: Option<usize>,
    meta: M,
) -> Page<I, M> {
    let number = |n: Option<usize>| {
        n.and_then(Number::new).unwrap_or(Number::FIRST)
    };
    Page {
        items: items.unwrap_or_default(),
        current: number(current),
        total_pages: number(total_pages),
        total_count: total_count.unwrap_or_default(),
        meta,
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use super::{page, rejection_message, Config, Http, Url};

    #[test]
    fn base_url_gets_trailing_slash() {
        let http = Http::new(Config {
            base_url: Url::parse("http://localhost:8080/api").unwrap(),
            token: None,
            timeout: Duration::from_secs(5),
        })
        .unwrap();

        assert_eq!(http.base_url().as_str(), "http://localhost:8080/api/");
        assert_eq!(
            http.base_url().join("admin/users").unwrap().as_str(),
            "http://localhost:8080/api/admin/users",
        );
    }

    #[test]
    fn extracts_rejection_message() {
        assert_eq!(
            rejection_message(br#"{"message": "Username already exists"}"#)
                .as_deref(),
            Some("Username already exists"),
        );
        assert_eq!(rejection_message(br#"{"message": "  "}"#), None);
        assert_eq!(rejection_message(br#"{"error": "boom"}"#), None);
        assert_eq!(rejection_message(b"<html>502</html>"), None);
    }

    #[test]
    fn defaults_missing_pagination() {
        let p = page::<u8, ()>(None, None, Some(0), None, ());

        assert!(p.items.is_empty());
        assert_eq!(p.current.get(), 1);
        assert_eq!(p.total_pages.get(), 1);
        assert_eq!(p.total_count, 0);
    }
}
