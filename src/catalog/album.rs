use chrono::Utc;

use super::{CatalogError, CatalogResult, edit_track_list, non_blank, require_user, resolve_ids};
use crate::{
    management::Library,
    types::{Album, AlbumUpdate, Id, NewAlbum},
};

fn require_author(album: &Album, actor: &Id) -> CatalogResult<()> {
    if album.author == *actor {
        Ok(())
    } else {
        Err(CatalogError::unauthorized(
            "You are not the creator of the album",
        ))
    }
}

/// A music belongs to at most one album.
fn check_unclaimed(library: &Library, album_id: &Id, tracks: &[Id]) -> CatalogResult<()> {
    let claimed = tracks.iter().filter_map(|id| library.music(id)).any(|music| {
        music
            .album
            .as_ref()
            .is_some_and(|owner| owner != album_id)
    });

    if claimed {
        Err(CatalogError::bad_request(
            "A music can only belong to one album",
        ))
    } else {
        Ok(())
    }
}

/// Points `Music.album` at `album_id` for every track in `after` and clears it
/// for tracks that left the album.
fn link_tracks(library: &mut Library, album_id: &Id, before: &[Id], after: &[Id]) {
    for music in library.musics.iter_mut() {
        if after.contains(&music.id) {
            music.album = Some(album_id.clone());
        } else if before.contains(&music.id) && music.album.as_ref() == Some(album_id) {
            music.album = None;
        }
    }
}

/// Creates an album owned by `actor`.
///
/// Track ids are deduplicated and must refer to existing musics that are not
/// already part of another album. Each listed music is linked to the new
/// album.
///
/// # Arguments
///
/// * `library` - The library the album is added to
/// * `actor` - The acting user, recorded as the album's author
/// * `new_album` - Name, cover and initial track ids
///
/// # Returns
///
/// The stored [`Album`].
///
/// # Errors
///
/// - `NotFound` when the actor or one of the musics does not exist
/// - `BadRequest` when the name, cover or track list is missing, an id is
///   malformed, or a track already belongs to another album
pub fn create_album(library: &mut Library, actor: &Id, new_album: NewAlbum) -> CatalogResult<Album> {
    require_user(library, actor)?;

    let name = non_blank(Some(new_album.name))
        .ok_or_else(|| CatalogError::bad_request("The album's name is required"))?;
    let cover = non_blank(new_album.cover)
        .ok_or_else(|| CatalogError::bad_request("A cover file is required"))?;
    if new_album.musics.is_empty() {
        return Err(CatalogError::bad_request(
            "An array with the musics from the album is required",
        ));
    }

    let musics = resolve_ids(&new_album.musics, |id| library.music_exists(id), "Music")?;

    let id = Id::generate();
    check_unclaimed(library, &id, &musics)?;

    let now = Utc::now();
    let album = Album {
        id,
        author: actor.clone(),
        name,
        musics,
        cover,
        created_at: now,
        updated_at: now,
    };

    link_tracks(library, &album.id, &[], &album.musics);
    library.albums.push(album.clone());
    Ok(album)
}

/// Looks up an album by id.
pub fn read_album(library: &Library, id: &Id) -> CatalogResult<Album> {
    library
        .album(id)
        .cloned()
        .ok_or_else(|| CatalogError::not_found("Album not found"))
}

/// Edits an album owned by `actor`.
///
/// `toggle_musics` flips membership of each listed track, then `order` is
/// applied to the resulting list. An edit that would leave the album without
/// any track is refused. Tracks that join the album are linked to it and
/// tracks that leave are unlinked.
///
/// # Errors
///
/// - `NotFound` when the album or a toggled music does not exist
/// - `Unauthorized` when `actor` is not the album's author
/// - `BadRequest` when the edit empties the album or claims a track of
///   another album
pub fn update_album(
    library: &mut Library,
    actor: &Id,
    id: &Id,
    update: AlbumUpdate,
) -> CatalogResult<Album> {
    let album = library
        .album(id)
        .ok_or_else(|| CatalogError::not_found("Album not found"))?;
    require_author(album, actor)?;

    let touches_tracks = !update.toggle_musics.is_empty() || !update.order.is_empty();
    let musics = edit_track_list(library, &album.musics, &update.toggle_musics, &update.order)?;
    if touches_tracks && musics.is_empty() {
        return Err(CatalogError::bad_request(
            "An album must have at least one music related to it",
        ));
    }
    check_unclaimed(library, id, &musics)?;
    let previous = album.musics.clone();
    link_tracks(library, id, &previous, &musics);

    let album = library
        .album_mut(id)
        .ok_or_else(|| CatalogError::not_found("Album not found"))?;

    if let Some(name) = non_blank(update.name) {
        album.name = name;
    }
    if let Some(cover) = non_blank(update.cover) {
        album.cover = cover;
    }
    album.musics = musics;
    album.updated_at = Utc::now();

    Ok(album.clone())
}

/// Deletes an album owned by `actor`. Its tracks stay in the library and lose
/// their album link.
pub fn delete_album(library: &mut Library, actor: &Id, id: &Id) -> CatalogResult<()> {
    let album = library
        .album(id)
        .ok_or_else(|| CatalogError::not_found("Album not found"))?;
    require_author(album, actor)?;

    library.albums.retain(|a| a.id != *id);
    for music in library.musics.iter_mut() {
        if music.album.as_ref() == Some(id) {
            music.album = None;
        }
    }

    Ok(())
}
