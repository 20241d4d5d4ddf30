use super::id::GameModeId;
use crate::{Client, Result};

use serde::{Deserialize, Serialize};

/// The list of all game modes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameModes {
    pub list: Vec<GameMode>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMode {
    pub id: GameModeId,
    /// The in-game id of the mode assigned by Supercell.
    pub sc_id: u64,
    pub name: String,
    pub hash: String,
    pub sc_hash: String,
    pub disabled: bool,
    pub color: String,
    pub bg_color: String,
    pub version: u64,
    pub title: String,
    pub tutorial: String,
    pub description: String,
    pub short_description: String,
    pub sort1: u64,
    pub sort2: u64,
    pub link: String,
    pub image_url: String,
    pub image_url2: String,
    /// Unix timestamp of the last rotation the mode was active in.
    pub last_active: Option<u64>,
    /// The in-game localization key of the mode.
    #[serde(rename = "TID")]
    pub tid: Option<String>,
}

pub struct GameModesClient<'a> {
    client: &'a Client,
}

impl<'a> GameModesClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Returns a list of all game modes.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self) -> Result<GameModes> {
        let req = self.client.request().uri("/gamemodes").build();

        self.client.send(req).await?.json().await
    }

    /// Returns the [`GameMode`] with the given `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get(&self, id: GameModeId) -> Result<GameMode> {
        let req = self
            .client
            .request()
            .uri(&format!("/gamemodes/{}", id))
            .build();

        self.client.send(req).await?.json().await
    }
}
