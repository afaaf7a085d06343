//! # CLI Module
//!
//! User-facing commands of the soundshelf binary. Each command opens the
//! library document, runs one catalog operation on it, persists the result
//! when something changed and prints the outcome.
//!
//! ## Command Categories
//!
//! - [`add_user`], [`show_user`], [`list_users`], [`edit_user`], [`remove_user`],
//!   [`user_content`] - account documents
//! - [`add_music`], [`show_music`], [`edit_music`], [`remove_music`] - tracks
//! - [`add_album`], [`show_album`], [`edit_album`], [`remove_album`] - albums
//! - [`add_playlist`], [`show_playlist`], [`edit_playlist`], [`remove_playlist`] -
//!   playlists
//! - [`info`] - library statistics
//!
//! ## Acting user
//!
//! There are no sessions. Commands that modify an owned document need the
//! acting user's id via `--as`; the catalog checks ownership against it.
//!
//! ## Collection edits
//!
//! ```bash
//! soundshelf --as <user> album edit <album> --toggle <music> --toggle <music>
//! soundshelf --as <user> playlist edit <playlist> --order 2 --order 0
//! ```
//!
//! Every `--toggle` flips membership of one id; `--order` lists positions of
//! the track list (after toggles) in their new sequence. Positions left out
//! keep their relative order at the end.

mod album;
mod info;
mod music;
mod playlist;
mod user;

use std::path::PathBuf;

pub use album::{add_album, edit_album, remove_album, show_album};
pub use info::info;
pub use music::{add_music, edit_music, remove_music, show_music};
pub use playlist::{add_playlist, edit_playlist, remove_playlist, show_playlist};
pub use user::{add_user, edit_user, list_users, remove_user, show_user, user_content};

use crate::{error, management::LibraryManager, types::Id};

/// Where the library lives and who is acting, resolved once per invocation.
#[derive(Debug, Clone)]
pub struct Session {
    pub library_path: PathBuf,
    pub actor: Option<Id>,
}

impl Session {
    pub fn new(library_path: PathBuf, actor: Option<Id>) -> Self {
        Self {
            library_path,
            actor,
        }
    }

    pub(crate) async fn open(&self) -> LibraryManager {
        match LibraryManager::load_or_default(self.library_path.clone()).await {
            Ok(manager) => manager,
            Err(e) => error!(
                "Cannot load library from {}. Err: {}",
                self.library_path.display(),
                e
            ),
        }
    }

    pub(crate) async fn save(&self, manager: &LibraryManager) {
        if let Err(e) = manager.persist().await {
            error!(
                "Cannot write library to {}. Err: {}",
                manager.path().display(),
                e
            );
        }
    }

    pub(crate) fn require_actor(&self) -> Id {
        match &self.actor {
            Some(actor) => actor.clone(),
            None => error!("This command needs an acting user. Pass --as <user-id>."),
        }
    }
}
