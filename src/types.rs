use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tabled::Tabled;
use thiserror::Error;

const ID_LEN: usize = 24;

/// Identifier of a stored document: 24 lowercase hexadecimal characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Id(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Id {0} is not valid")]
pub struct InvalidId(pub String);

impl Id {
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let hex: String = (0..ID_LEN)
            .map(|_| char::from_digit(rng.random_range(0..16), 16).unwrap_or('0'))
            .collect();
        Id(hex)
    }

    pub fn parse(raw: &str) -> Result<Self, InvalidId> {
        let trimmed = raw.trim();
        let well_formed = trimmed.len() == ID_LEN && trimmed.chars().all(|c| c.is_ascii_hexdigit());

        if !well_formed {
            return Err(InvalidId(raw.to_string()));
        }
        Ok(Id(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Id {
    type Err = InvalidId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Id::parse(s)
    }
}

impl TryFrom<String> for Id {
    type Error = InvalidId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Id::parse(&value)
    }
}

impl From<Id> for String {
    fn from(id: Id) -> Self {
        id.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Pop,
    Dance,
    #[serde(rename = "Hip-hop")]
    HipHop,
    #[serde(rename = "R&B")]
    RnB,
    Latin,
    Rock,
    Metal,
    Country,
    #[serde(rename = "Folk/Acoustic")]
    FolkAcoustic,
    Classical,
    Jazz,
    Blues,
    #[serde(rename = "Easy Listening")]
    EasyListening,
    #[serde(rename = "New Age")]
    NewAge,
    #[serde(rename = "World/Traditional Folk")]
    WorldTraditionalFolk,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Genre not supported")]
pub struct UnsupportedGenre(pub String);

impl Genre {
    pub const ALL: [Genre; 15] = [
        Genre::Pop,
        Genre::Dance,
        Genre::HipHop,
        Genre::RnB,
        Genre::Latin,
        Genre::Rock,
        Genre::Metal,
        Genre::Country,
        Genre::FolkAcoustic,
        Genre::Classical,
        Genre::Jazz,
        Genre::Blues,
        Genre::EasyListening,
        Genre::NewAge,
        Genre::WorldTraditionalFolk,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Genre::Pop => "Pop",
            Genre::Dance => "Dance",
            Genre::HipHop => "Hip-hop",
            Genre::RnB => "R&B",
            Genre::Latin => "Latin",
            Genre::Rock => "Rock",
            Genre::Metal => "Metal",
            Genre::Country => "Country",
            Genre::FolkAcoustic => "Folk/Acoustic",
            Genre::Classical => "Classical",
            Genre::Jazz => "Jazz",
            Genre::Blues => "Blues",
            Genre::EasyListening => "Easy Listening",
            Genre::NewAge => "New Age",
            Genre::WorldTraditionalFolk => "World/Traditional Folk",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Genre {
    type Err = UnsupportedGenre;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .iter()
            .find(|g| g.label().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| UnsupportedGenre(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub username: String,
    pub email: String,
    pub profile_pic: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Music {
    pub id: Id,
    pub name: String,
    /// The first author is the original creator and the only one allowed to edit.
    pub authors: Vec<Id>,
    pub album: Option<Id>,
    pub file: String,
    pub cover: Option<String>,
    pub genre: Option<Genre>,
    #[serde(default)]
    pub monthly_listeners: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: Id,
    pub author: Id,
    pub name: String,
    pub musics: Vec<Id>,
    pub cover: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: Id,
    pub created_by: Id,
    pub name: String,
    pub musics: Vec<Id>,
    pub cover: Option<String>,
    pub private: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorSummary {
    pub id: Id,
    pub username: String,
    pub profile_pic: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulatedMusic {
    pub id: Id,
    pub name: String,
    pub authors: Vec<AuthorSummary>,
    pub album: Option<Id>,
    pub file: String,
    pub cover: Option<String>,
    pub genre: Option<Genre>,
    pub monthly_listeners: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub profile_pic: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewMusic {
    pub name: String,
    /// Co-authors besides the acting user, as raw ids.
    pub authors: Vec<String>,
    pub album: Option<String>,
    pub file: Option<String>,
    pub cover: Option<String>,
    pub genre: Option<Genre>,
}

#[derive(Debug, Clone, Default)]
pub struct MusicUpdate {
    pub name: Option<String>,
    pub genre: Option<Genre>,
    pub cover: Option<String>,
    pub toggle_authors: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewAlbum {
    pub name: String,
    pub musics: Vec<String>,
    pub cover: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AlbumUpdate {
    pub name: Option<String>,
    pub cover: Option<String>,
    pub toggle_musics: Vec<String>,
    pub order: Vec<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct PlaylistUpdate {
    pub name: Option<String>,
    pub cover: Option<String>,
    pub private: Option<bool>,
    pub toggle_musics: Vec<String>,
    pub order: Vec<usize>,
}

#[derive(Tabled)]
pub struct UserTableRow {
    pub id: String,
    pub username: String,
    pub email: String,
}

#[derive(Tabled)]
pub struct MusicTableRow {
    pub position: usize,
    pub id: String,
    pub name: String,
    pub genre: String,
}

#[derive(Tabled)]
pub struct CollectionTableRow {
    pub kind: String,
    pub id: String,
    pub name: String,
    pub tracks: usize,
}
