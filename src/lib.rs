//! A typed, asynchronous client for [BrawlAPI], a community-run service
//! exposing Brawl Stars reference data: events, brawlers, maps, game modes,
//! icons and club logs.
//!
//! All endpoints are reached through a [`Client`]:
//!
//! ```no_run
//! use brawl_api::Client;
//!
//! # async fn run() -> brawl_api::Result<()> {
//! let client = Client::new();
//!
//! let brawler = client.v1().brawlers().get(16000000.into()).await?;
//! println!("{}", brawler.name);
//! # Ok(())
//! # }
//! ```
//!
//! [BrawlAPI]: https://brawlapi.com

pub mod http;
pub mod v1;

use std::borrow::Cow;

use thiserror::Error;

/// The base url all requests are made against.
pub const BASE_URL: &str = "https://api.brawlapi.com/v1";

/// The `User-Agent` string sent when the consumer does not provide one.
pub const DEFAULT_USER_AGENT: &str = concat!("brawl-api/", env!("CARGO_PKG_VERSION"));

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The server answered with a status code outside of the success range.
    ///
    /// The body of the response is never read in this case.
    #[error("bad status code: {status} {reason}")]
    BadStatusCode {
        /// The numeric status code of the response.
        status: u16,
        /// The canonical reason phrase of the status code.
        reason: String,
    },
    /// The transport failed before a response arrived.
    #[error(transparent)]
    Http(#[from] http::Error),
    /// Decoding a response body failed.
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

/// A client for the API hosted at [`BASE_URL`].
///
/// The `Client` carries no mutable state; it can be cloned cheaply and calls
/// made through it are fully independent of each other.
#[derive(Clone, Debug)]
pub struct Client {
    http: http::Client,
    base_url: Cow<'static, str>,
    user_agent: Cow<'static, str>,
}

impl Client {
    /// Creates a new `Client` identifying itself as [`DEFAULT_USER_AGENT`].
    pub fn new() -> Self {
        Self::with_user_agent(DEFAULT_USER_AGENT)
    }

    /// Creates a new `Client` identifying itself with the given `user_agent`.
    ///
    /// The string is sent verbatim as the `User-Agent` header of every
    /// request made by this client.
    pub fn with_user_agent<T>(user_agent: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        Self {
            http: http::Client::new(),
            base_url: Cow::Borrowed(BASE_URL),
            user_agent: user_agent.into(),
        }
    }

    /// Returns a client for the `v1` endpoints.
    pub fn v1(&self) -> v1::Client<'_> {
        v1::Client::new(self)
    }

    /// Returns the configured `User-Agent` string.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    #[cfg(test)]
    pub(crate) fn with_base_url<T>(mut self, base_url: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        self.base_url = base_url.into();
        self
    }

    /// Returns a [`RequestBuilder`] pre-seeded with the base url and the
    /// headers sent with every request.
    ///
    /// [`RequestBuilder`]: http::RequestBuilder
    pub(crate) fn request(&self) -> http::RequestBuilder {
        http::RequestBuilder::new(self.base_url.to_string(), &self.user_agent)
    }

    /// Sends the request, resolving to the response if the server answered
    /// with a success status code.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadStatusCode`] for any response with a status code
    /// outside of the 2xx range. The response body is not read in that case.
    pub(crate) async fn send(&self, request: http::Request) -> Result<http::Response> {
        log::debug!("GET {}", request.uri());

        let resp = self.http.send(request).await?;

        if resp.is_success() {
            Ok(resp)
        } else {
            let status = resp.status();

            Err(Error::BadStatusCode {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_owned(),
            })
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
