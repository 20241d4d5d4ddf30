use super::id::{BrawlerId, GameModeId, MapId};
use super::TrophyRange;
use crate::{Client, Result};

use serde::{Deserialize, Serialize};

/// The list of all maps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Maps {
    pub list: Vec<Map>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Map {
    pub id: MapId,
    pub new: bool,
    pub disabled: bool,
    pub name: String,
    pub hash: String,
    pub version: u64,
    pub link: String,
    pub image_url: String,
    /// The community creator the map is credited to, if any.
    pub credit: Option<String>,
    pub environment: Environment,
    pub game_mode: MapGameMode,
    /// Unix timestamp of the last rotation the map was active in.
    pub last_active: Option<u64>,
    pub data_updated: Option<u64>,
    /// Missing for maps without recorded battles.
    #[serde(default)]
    pub stats: Option<Vec<MapStats>>,
    #[serde(default)]
    pub team_stats: Option<Vec<TeamStats>>,
}

/// The environment (tileset) a map is played in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    pub id: u64,
    pub name: String,
    pub hash: String,
    pub path: String,
    pub version: u64,
    pub image_url: String,
}

/// The game mode a map belongs to. A trimmed down version of [`GameMode`]
/// embedded in every map.
///
/// [`GameMode`]: super::game_modes::GameMode
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapGameMode {
    pub id: GameModeId,
    pub name: String,
    pub hash: String,
    pub version: u64,
    pub color: String,
    pub link: String,
    pub image_url: String,
}

/// Statistics of a single brawler on a map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapStats {
    pub brawler: BrawlerId,
    pub win_rate: f64,
    pub use_rate: f64,
    /// Only present for showdown maps.
    #[serde(default)]
    pub star_rate: Option<f64>,
}

/// Statistics of a team composition on a map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub name: String,
    pub hash: String,
    pub brawler1: BrawlerId,
    pub brawler2: BrawlerId,
    /// Missing for duo game modes.
    #[serde(default)]
    pub brawler3: Option<BrawlerId>,
    pub data: TeamStatsData,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatsData {
    pub win_rate: f64,
    pub use_rate: f64,
    pub wins: u64,
    pub losses: u64,
    pub draws: u64,
    pub total: u64,
}

pub struct MapsClient<'a> {
    client: &'a Client,
}

impl<'a> MapsClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Returns a list of all maps.
    ///
    /// Credit [Brawlify] when displaying data from this endpoint.
    ///
    /// [Brawlify]: https://brawlify.com
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self) -> Result<Maps> {
        let req = self.client.request().uri("/maps").build();

        self.client.send(req).await?.json().await
    }

    /// Returns the [`Map`] with the given `id`. When `range` is given, the
    /// statistics of the map only cover battles in that trophy range.
    ///
    /// Credit [Brawlify] when displaying data from this endpoint.
    ///
    /// [Brawlify]: https://brawlify.com
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get(&self, id: MapId, range: Option<TrophyRange>) -> Result<Map> {
        let uri = match range {
            Some(range) => format!("/maps/{}/{}", id, range),
            None => format!("/maps/{}", id),
        };

        let req = self.client.request().uri(&uri).build();

        self.client.send(req).await?.json().await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::v1::id::{BrawlerId, MapId};
    use crate::v1::TrophyRange;
    use crate::{Client, DEFAULT_USER_AGENT};

    fn shooting_star() -> serde_json::Value {
        json!({
            "id": 15000026,
            "new": false,
            "disabled": false,
            "name": "Shooting Star",
            "hash": "Shooting-Star",
            "version": 1,
            "link": "https://brawlify.com/maps/detail/Shooting-Star",
            "imageUrl": "https://cdn.brawlify.com/map/15000026.png",
            "credit": null,
            "environment": {
                "id": 1,
                "name": "Grass Field",
                "hash": "Grass-Field",
                "path": "Grass_Field",
                "version": 1,
                "imageUrl": "https://cdn.brawlify.com/env/1.png"
            },
            "gameMode": {
                "id": 3,
                "name": "Bounty",
                "hash": "Bounty",
                "version": 1,
                "color": "#01cfff",
                "link": "https://brawlify.com/gamemodes/detail/Bounty",
                "imageUrl": "https://cdn.brawlify.com/gamemodes/header/bounty.png"
            },
            "lastActive": 1658924344,
            "dataUpdated": 1658924344,
            "stats": [
                { "brawler": 16000000, "winRate": 52.3, "useRate": 2.2 },
                { "brawler": 16000007, "winRate": 49.1, "useRate": 1.4, "starRate": 4.7 }
            ],
            "teamStats": [
                {
                    "name": "Piper & Brock & Bea",
                    "hash": "Piper+Brock+Bea",
                    "brawler1": 16000015,
                    "brawler2": 16000003,
                    "brawler3": 16000030,
                    "data": {
                        "winRate": 61.2,
                        "useRate": 0.4,
                        "wins": 100,
                        "losses": 60,
                        "draws": 2,
                        "total": 162
                    }
                }
            ]
        })
    }

    #[tokio::test]
    async fn test_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/maps"))
            .and(header("User-Agent", DEFAULT_USER_AGENT))
            .and(header("Accept", "application/json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "list": [shooting_star()] })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new().with_base_url(server.uri());
        let maps = client.v1().maps().list().await.unwrap();

        assert_eq!(maps.list.len(), 1);

        let map = &maps.list[0];
        assert_eq!(map.id, 15000026);
        assert_eq!(map.name, "Shooting Star");
        assert_eq!(map.credit, None);
        assert_eq!(map.environment.name, "Grass Field");
        assert_eq!(map.game_mode.id, 3);

        let stats = map.stats.as_ref().unwrap();
        assert_eq!(stats[0].brawler, 16000000);
        assert_eq!(stats[0].star_rate, None);
        assert_eq!(stats[1].star_rate, Some(4.7));

        let teams = map.team_stats.as_ref().unwrap();
        assert_eq!(teams[0].brawler3, Some(BrawlerId(16000030)));
        assert_eq!(teams[0].data.total, 162);
    }

    #[tokio::test]
    async fn test_get() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/maps/15000026"))
            .and(header("User-Agent", DEFAULT_USER_AGENT))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(shooting_star()))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new().with_base_url(server.uri());
        let map = client.v1().maps().get(15000026.into(), None).await.unwrap();

        assert_eq!(map.id, 15000026);
    }

    #[tokio::test]
    async fn test_get_with_range() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/maps/15000026/0-299"))
            .and(header("User-Agent", DEFAULT_USER_AGENT))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(shooting_star()))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new().with_base_url(server.uri());
        let map = client
            .v1()
            .maps()
            .get(MapId(15000026), Some(TrophyRange::Low))
            .await
            .unwrap();

        assert_eq!(map.id, 15000026);
    }

    // A zero id is a regular id. The range must not be dropped for it.
    #[tokio::test]
    async fn test_get_zero_id_keeps_range() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/maps/0/600+"))
            .and(header("User-Agent", DEFAULT_USER_AGENT))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(shooting_star()))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new().with_base_url(server.uri());
        client
            .v1()
            .maps()
            .get(MapId(0), Some(TrophyRange::High))
            .await
            .unwrap();
    }
}
