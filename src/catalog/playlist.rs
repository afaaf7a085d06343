use chrono::Utc;

use super::{CatalogError, CatalogResult, edit_track_list, non_blank, require_user};
use crate::{
    management::Library,
    types::{Id, Playlist, PlaylistUpdate},
};

fn require_creator(playlist: &Playlist, actor: &Id) -> CatalogResult<()> {
    if playlist.created_by == *actor {
        Ok(())
    } else {
        Err(CatalogError::unauthorized(
            "You are not the creator of the playlist",
        ))
    }
}

/// Creates an empty, public playlist owned by `actor`.
pub fn create_playlist(library: &mut Library, actor: &Id, name: &str) -> CatalogResult<Playlist> {
    require_user(library, actor)?;

    let name = non_blank(Some(name.to_string()))
        .ok_or_else(|| CatalogError::bad_request("A name for the playlist is required."))?;

    let now = Utc::now();
    let playlist = Playlist {
        id: Id::generate(),
        created_by: actor.clone(),
        name,
        musics: Vec::new(),
        cover: None,
        private: false,
        created_at: now,
        updated_at: now,
    };

    library.playlists.push(playlist.clone());
    Ok(playlist)
}

/// Reads a playlist. Private playlists are only visible to their creator.
pub fn read_playlist(library: &Library, viewer: Option<&Id>, id: &Id) -> CatalogResult<Playlist> {
    let playlist = library
        .playlist(id)
        .ok_or_else(|| CatalogError::not_found("Playlist not found"))?;

    if playlist.private && viewer != Some(&playlist.created_by) {
        return Err(CatalogError::unauthorized(
            "The requested playlist is private",
        ));
    }

    Ok(playlist.clone())
}

/// Edits a playlist owned by `actor`.
///
/// Name, cover and visibility are replaced when given. `toggle_musics` flips
/// membership of each listed track and `order` is applied to the list as it
/// stands after the toggles. Unlike albums, a playlist may become empty.
///
/// # Errors
///
/// - `NotFound` when the playlist or a toggled music does not exist
/// - `Unauthorized` when `actor` did not create the playlist
/// - `Reconcile` when an `order` is sent for an empty track list
pub fn update_playlist(
    library: &mut Library,
    actor: &Id,
    id: &Id,
    update: PlaylistUpdate,
) -> CatalogResult<Playlist> {
    let playlist = library
        .playlist(id)
        .ok_or_else(|| CatalogError::not_found("Playlist not found"))?;
    require_creator(playlist, actor)?;

    let musics = edit_track_list(
        library,
        &playlist.musics,
        &update.toggle_musics,
        &update.order,
    )?;

    let playlist = library
        .playlist_mut(id)
        .ok_or_else(|| CatalogError::not_found("Playlist not found"))?;

    if let Some(name) = non_blank(update.name) {
        playlist.name = name;
    }
    if let Some(cover) = non_blank(update.cover) {
        playlist.cover = Some(cover);
    }
    if let Some(private) = update.private {
        playlist.private = private;
    }
    playlist.musics = musics;
    playlist.updated_at = Utc::now();

    Ok(playlist.clone())
}

/// Deletes a playlist owned by `actor`.
pub fn delete_playlist(library: &mut Library, actor: &Id, id: &Id) -> CatalogResult<()> {
    let playlist = library
        .playlist(id)
        .ok_or_else(|| CatalogError::not_found("Playlist not found"))?;
    require_creator(playlist, actor)?;

    library.playlists.retain(|p| p.id != *id);
    Ok(())
}
