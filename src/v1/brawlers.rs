use super::id::BrawlerId;
use crate::{Client, Result};

use serde::{Deserialize, Serialize};

/// The list of all brawlers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Brawlers {
    pub list: Vec<Brawler>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brawler {
    pub id: BrawlerId,
    pub avatar_id: u64,
    pub name: String,
    pub hash: String,
    pub path: String,
    pub released: bool,
    pub version: u64,
    pub link: String,
    pub image_url: String,
    pub image_url2: String,
    pub image_url3: String,
    pub class: BrawlerClass,
    pub rarity: Rarity,
    /// The trophy count the brawler unlocks at. `None` for brawlers that are
    /// not unlocked on the trophy road.
    pub unlock: Option<u64>,
    pub description: String,
    pub description_html: String,
    pub star_powers: Vec<StarPower>,
    pub gadgets: Vec<Gadget>,
    #[serde(default)]
    pub videos: Vec<BrawlerVideo>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrawlerClass {
    pub id: u64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rarity {
    pub id: u64,
    pub name: String,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarPower {
    pub id: u64,
    pub name: String,
    pub path: String,
    pub version: u64,
    pub description: String,
    pub description_html: String,
    pub image_url: String,
    pub released: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gadget {
    pub id: u64,
    pub name: String,
    pub path: String,
    pub version: u64,
    pub description: String,
    pub description_html: String,
    pub image_url: String,
    pub released: bool,
}

/// A promotional video of a brawler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrawlerVideo {
    #[serde(rename = "type")]
    pub kind: u64,
    pub name: String,
    pub description: String,
    pub duration: String,
    pub video_url: String,
    pub preview_url: String,
    pub upload_date: String,
}

pub struct BrawlersClient<'a> {
    client: &'a Client,
}

impl<'a> BrawlersClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Returns a list of all brawlers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self) -> Result<Brawlers> {
        let req = self.client.request().uri("/brawlers").build();

        self.client.send(req).await?.json().await
    }

    /// Returns the [`Brawler`] with the given `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get(&self, id: BrawlerId) -> Result<Brawler> {
        let req = self
            .client
            .request()
            .uri(&format!("/brawlers/{}", id))
            .build();

        self.client.send(req).await?.json().await
    }
}
