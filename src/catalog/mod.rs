//! # Catalog
//!
//! Create, read, update and delete operations for users, musics, albums and
//! playlists, working on an explicitly passed [`Library`].
//!
//! Operations that change a document owned by somebody take the acting user's
//! id and refuse to touch documents that user does not own. Incoming id lists
//! go through [`resolve_ids`] before anything else happens, so the
//! reconciliation step only ever sees well-formed ids of existing documents.
//!
//! ## Collection edits
//!
//! Track lists and author lists are edited by toggling: every submitted id
//! flips its membership (see [`crate::reconcile::reconcile_membership`]).
//! Album and playlist edits may also carry an `order`, a list of positions
//! applied with [`crate::reconcile::apply_order`] to the list as it stands
//! after the toggles.

mod album;
mod error;
mod music;
mod playlist;
mod user;

pub use album::{create_album, delete_album, read_album, update_album};
pub use error::{CatalogError, CatalogResult};
pub use music::{
    album_of, create_music, delete_music, populate_music, read_music, update_music,
};
pub use playlist::{create_playlist, delete_playlist, read_playlist, update_playlist};
pub use user::{
    create_user, delete_user, read_user, update_user, user_albums, user_musics, user_playlists,
};

use crate::{
    management::Library,
    reconcile::{apply_order, dedup_preserving_order, reconcile_membership},
    types::Id,
};

/// Parses and existence-checks a client supplied id list.
///
/// Duplicates are dropped keeping the first occurrence. A malformed id is a
/// bad request; an id for which `exists` returns false yields
/// `"<what> not found"`.
pub fn resolve_ids<F>(raw: &[String], exists: F, what: &str) -> CatalogResult<Vec<Id>>
where
    F: Fn(&Id) -> bool,
{
    let mut ids = Vec::with_capacity(raw.len());
    for candidate in dedup_preserving_order(raw) {
        let id = Id::parse(&candidate)?;
        if !exists(&id) {
            return Err(CatalogError::not_found(format!("{what} not found")));
        }
        ids.push(id);
    }

    // ids differing only in letter case collapse after parsing
    Ok(dedup_preserving_order(&ids))
}

pub(crate) fn require_user(library: &Library, actor: &Id) -> CatalogResult<()> {
    if library.user_exists(actor) {
        Ok(())
    } else {
        Err(CatalogError::not_found("User not found"))
    }
}

/// Applies track toggles and then the optional reorder to `current`.
pub(crate) fn edit_track_list(
    library: &Library,
    current: &[Id],
    toggles: &[String],
    order: &[usize],
) -> CatalogResult<Vec<Id>> {
    let mut tracks = current.to_vec();

    if !toggles.is_empty() {
        let incoming = resolve_ids(toggles, |id| library.music_exists(id), "Music")?;
        tracks = reconcile_membership(&tracks, &incoming, None)?;
    }

    if !order.is_empty() {
        tracks = apply_order(&tracks, order)?;
    }

    Ok(tracks)
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
