use super::maps::Map;
use super::TrophyRange;
use crate::{Client, Result};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The event rotation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Events {
    pub active: Vec<ScheduledEvent>,
    pub upcoming: Vec<ScheduledEvent>,
}

/// A map scheduled in an event slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledEvent {
    pub slot: EventSlot,
    /// Whether the event is a prediction instead of announced rotation data.
    pub predicted: bool,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub reward: u64,
    pub map: Map,
    /// The active event modifier, if any.
    pub modifier: Option<Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSlot {
    pub id: u64,
    pub name: String,
    pub emoji: String,
    pub hash: String,
    pub list_alone: bool,
    pub hideable: bool,
    pub hide_for_slot: Option<u64>,
    pub background: Option<String>,
}

pub struct EventsClient<'a> {
    client: &'a Client,
}

impl<'a> EventsClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Returns the active and upcoming event rotation. When `range` is given,
    /// the statistics of the maps in the rotation only cover battles in that
    /// trophy range.
    ///
    /// Credit [Brawlify] when displaying data from this endpoint.
    ///
    /// [Brawlify]: https://brawlify.com
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self, range: Option<TrophyRange>) -> Result<Events> {
        let req = match range {
            Some(range) => self
                .client
                .request()
                .uri(&format!("/events/{}", range))
                .build(),
            None => self.client.request().uri("/events").build(),
        };

        self.client.send(req).await?.json().await
    }
}
