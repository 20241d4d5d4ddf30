use self::{
    brawlers::BrawlersClient, club_log::ClubLogClient, events::EventsClient,
    game_modes::GameModesClient, icons::IconsClient, maps::MapsClient,
};

pub mod brawlers;
pub mod club_log;
pub mod events;
pub mod game_modes;
pub mod icons;
pub mod id;
pub mod maps;

use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug)]
pub struct Client<'a> {
    inner: &'a crate::Client,
}

impl<'a> Client<'a> {
    pub(crate) fn new(client: &'a crate::Client) -> Self {
        Self { inner: client }
    }

    pub fn events(&self) -> EventsClient {
        EventsClient::new(self.inner)
    }

    pub fn brawlers(&self) -> BrawlersClient {
        BrawlersClient::new(self.inner)
    }

    pub fn maps(&self) -> MapsClient {
        MapsClient::new(self.inner)
    }

    pub fn game_modes(&self) -> GameModesClient {
        GameModesClient::new(self.inner)
    }

    pub fn icons(&self) -> IconsClient {
        IconsClient::new(self.inner)
    }

    pub fn club_log(&self) -> ClubLogClient {
        ClubLogClient::new(self.inner)
    }
}

/// One of the three trophy brackets the API groups statistics into.
///
/// The range is only ever part of a request path, never of a payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TrophyRange {
    /// 0 to 299 trophies.
    Low,
    /// 300 to 599 trophies.
    Mid,
    /// 600 or more trophies.
    High,
}

impl TrophyRange {
    /// Returns the path segment for this range.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "0-299",
            Self::Mid => "300-599",
            Self::High => "600+",
        }
    }
}

impl Display for TrophyRange {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
