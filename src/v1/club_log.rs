use crate::{Client, Result};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The tracked history of a club.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClubLog {
    pub history: Vec<ClubLogEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClubLogEntry {
    #[serde(rename = "type")]
    pub kind: ClubLogEntryKind,
    /// Unix timestamp of the change.
    pub timestamp: u64,
    /// The change itself. The shape depends on the entry kind.
    pub data: Value,
}

/// The kind of change a [`ClubLogEntry`] records.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClubLogEntryKind {
    /// A player joined or left the club.
    Members,
    /// The role of a member changed.
    Roles,
    /// The club settings changed.
    Settings,
}

pub struct ClubLogClient<'a> {
    client: &'a Client,
}

impl<'a> ClubLogClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Returns the log of the club with the given `tag`.
    ///
    /// The tag is percent-encoded into the request path as given; a leading
    /// `#` is not stripped. Logs only exist for clubs that have tracking
    /// enabled on [Brawlify]; for other clubs the API responds with a `403`
    /// status code or stale data.
    ///
    /// Credit [Brawlify] when displaying data from this endpoint.
    ///
    /// [Brawlify]: https://brawlify.com
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get(&self, tag: &str) -> Result<ClubLog> {
        let req = self
            .client
            .request()
            .uri(&format!("/clublog/{}", urlencoding::encode(tag)))
            .build();

        self.client.send(req).await?.json().await
    }
}
