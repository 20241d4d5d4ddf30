//! The transport layer used by the client.
//!
//! All requests are plain GET requests; the API never expects a body. The
//! platform backends only differ in how the request is driven, the exposed
//! [`Request`] and [`Response`] types are the same everywhere.

use crate::Result;

use http::header::{ACCEPT, USER_AGENT};
use http::StatusCode;
use serde::de::DeserializeOwned;

use thiserror::Error;

/// An error of the underlying transport.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error {
    #[cfg(any(target_family = "unix", target_family = "windows"))]
    #[from]
    error: hyper::Error,
    #[cfg(target_family = "wasm")]
    #[from]
    error: reqwasm::Error,
}

#[derive(Clone, Debug, Default)]
pub struct Client {
    #[cfg(any(target_family = "unix", target_family = "windows"))]
    inner: unix::InnerClient,
    #[cfg(target_family = "wasm")]
    inner: wasm::InnerClient,
}

impl Client {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn send(&self, request: Request) -> Result<Response> {
        self.inner.send(request).await
    }
}

/// A GET request against the API.
#[derive(Clone, Debug)]
pub struct Request {
    uri: String,
    headers: Vec<(&'static str, String)>,
}

impl Request {
    /// Returns the full uri of the request.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the headers sent with the request.
    pub fn headers(&self) -> &[(&'static str, String)] {
        &self.headers
    }
}

#[derive(Clone, Debug)]
pub struct RequestBuilder {
    inner: Request,
}

impl RequestBuilder {
    /// Creates a new `RequestBuilder` rooted at `uri`, carrying the two
    /// headers sent with every request.
    pub fn new(uri: String, user_agent: &str) -> Self {
        let inner = Request {
            uri,
            headers: vec![
                (USER_AGENT.as_str(), user_agent.to_owned()),
                (ACCEPT.as_str(), String::from("application/json")),
            ],
        };

        Self { inner }
    }

    /// Appends `uri` to the uri of the request.
    pub fn uri(mut self, uri: &str) -> Self {
        self.inner.uri.push_str(uri);
        self
    }

    pub fn build(self) -> Request {
        self.inner
    }
}

#[derive(Debug)]
pub struct Response {
    #[cfg(any(target_family = "unix", target_family = "windows"))]
    inner: unix::InnerResponse,
    #[cfg(target_family = "wasm")]
    inner: wasm::InnerResponse,
}

impl Response {
    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    /// Returns `true` if the response contains a 2xx status code.
    pub fn is_success(&self) -> bool {
        self.status().is_success()
    }

    /// Decodes the response body as json.
    pub async fn json<T>(self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.inner.json().await
    }
}

#[cfg(any(target_family = "unix", target_family = "windows"))]
mod unix {
    use super::{Error, Request, Response};
    use crate::Result;

    use http::StatusCode;
    use hyper::{body, client::HttpConnector, Body, Method};
    use hyper_tls::HttpsConnector;
    use serde::de::DeserializeOwned;

    #[derive(Clone, Debug)]
    pub struct InnerClient {
        inner: hyper::Client<HttpsConnector<HttpConnector>>,
    }

    impl InnerClient {
        pub async fn send(&self, request: Request) -> Result<Response> {
            let req = request.into();

            let resp = self.inner.request(req).await.map_err(Error::from)?;

            Ok(Response {
                inner: InnerResponse(resp),
            })
        }
    }

    impl Default for InnerClient {
        fn default() -> Self {
            Self {
                inner: hyper::Client::builder().build(HttpsConnector::new()),
            }
        }
    }

    #[derive(Debug)]
    pub struct InnerResponse(hyper::Response<Body>);

    impl InnerResponse {
        pub fn status(&self) -> StatusCode {
            self.0.status()
        }

        pub async fn json<T>(self) -> Result<T>
        where
            T: DeserializeOwned,
        {
            let bytes = body::to_bytes(self.0.into_body())
                .await
                .map_err(Error::from)?;

            Ok(serde_json::from_slice(&bytes)?)
        }
    }

    impl From<Request> for hyper::Request<Body> {
        fn from(request: Request) -> Self {
            let mut builder = hyper::Request::builder()
                .uri(request.uri)
                .method(Method::GET);

            for (key, value) in request.headers {
                builder = builder.header(key, value);
            }

            builder.body(Body::empty()).unwrap()
        }
    }
}

#[cfg(target_family = "wasm")]
mod wasm {
    use super::{Error, Request, Response};
    use crate::Result;

    use http::StatusCode;
    use serde::de::DeserializeOwned;

    #[derive(Copy, Clone, Debug, Default)]
    pub struct InnerClient;

    impl InnerClient {
        pub async fn send(&self, request: Request) -> Result<Response> {
            let mut req = reqwasm::http::Request::get(&request.uri);

            for (key, value) in request.headers() {
                req = req.header(key, value);
            }

            let resp = req.send().await.map_err(Error::from)?;

            Ok(Response {
                inner: InnerResponse(resp),
            })
        }
    }

    #[derive(Debug)]
    pub struct InnerResponse(reqwasm::http::Response);

    impl InnerResponse {
        pub fn status(&self) -> StatusCode {
            StatusCode::from_u16(self.0.status()).unwrap()
        }

        pub async fn json<T>(self) -> Result<T>
        where
            T: DeserializeOwned,
        {
            Ok(self.0.json().await.map_err(Error::from)?)
        }
    }
}
