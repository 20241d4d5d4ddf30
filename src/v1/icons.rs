use super::id::BrawlerId;
use crate::{Client, Result};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// All player and club icons, keyed by their stringified id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Icons {
    pub player: HashMap<String, PlayerIcon>,
    pub club: HashMap<String, ClubIcon>,
}

/// An icon a player can equip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerIcon {
    pub id: u64,
    pub name: Option<String>,
    pub name2: Option<String>,
    pub image_url: String,
    pub image_url2: String,
    /// The brawler the icon belongs to, if any.
    pub brawler: Option<BrawlerId>,
    pub required_brawl_rank: Option<u64>,
    pub sort_order: u64,
    pub is_reward: bool,
    pub is_available_for_offers: bool,
}

/// An icon a club can equip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubIcon {
    pub id: u64,
    pub image_url: String,
}

pub struct IconsClient<'a> {
    client: &'a Client,
}

impl<'a> IconsClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Returns all player and club icons.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self) -> Result<Icons> {
        let req = self.client.request().uri("/icons").build();

        self.client.send(req).await?.json().await
    }
}
