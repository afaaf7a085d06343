use serde::{Deserialize, Serialize};

use crate::types::{Album, Id, Music, Playlist, User};

/// Every document the catalog knows about.
///
/// Lookups are linear scans; a library is a single user's local collection and
/// stays small enough that an index would only add bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Library {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub musics: Vec<Music>,
    #[serde(default)]
    pub albums: Vec<Album>,
    #[serde(default)]
    pub playlists: Vec<Playlist>,
}

impl Library {
    pub fn user(&self, id: &Id) -> Option<&User> {
        self.users.iter().find(|u| u.id == *id)
    }

    pub fn user_mut(&mut self, id: &Id) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == *id)
    }

    pub fn music(&self, id: &Id) -> Option<&Music> {
        self.musics.iter().find(|m| m.id == *id)
    }

    pub fn music_mut(&mut self, id: &Id) -> Option<&mut Music> {
        self.musics.iter_mut().find(|m| m.id == *id)
    }

    pub fn album(&self, id: &Id) -> Option<&Album> {
        self.albums.iter().find(|a| a.id == *id)
    }

    pub fn album_mut(&mut self, id: &Id) -> Option<&mut Album> {
        self.albums.iter_mut().find(|a| a.id == *id)
    }

    pub fn playlist(&self, id: &Id) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == *id)
    }

    pub fn playlist_mut(&mut self, id: &Id) -> Option<&mut Playlist> {
        self.playlists.iter_mut().find(|p| p.id == *id)
    }

    pub fn user_exists(&self, id: &Id) -> bool {
        self.user(id).is_some()
    }

    pub fn music_exists(&self, id: &Id) -> bool {
        self.music(id).is_some()
    }

    pub fn username_taken(&self, username: &str, except: Option<&Id>) -> bool {
        self.users
            .iter()
            .any(|u| u.username == username && Some(&u.id) != except)
    }

    /// Emails are stored lowercased, so this is an exact comparison.
    pub fn email_taken(&self, email: &str, except: Option<&Id>) -> bool {
        self.users
            .iter()
            .any(|u| u.email == email && Some(&u.id) != except)
    }

    pub fn count_tracks(&self) -> usize {
        self.musics.len()
    }
}
