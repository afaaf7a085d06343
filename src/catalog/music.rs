use chrono::Utc;

use super::{CatalogError, CatalogResult, non_blank, require_user, resolve_ids};
use crate::{
    management::Library,
    reconcile::{ReconcileError, reconcile_membership},
    types::{Album, AuthorSummary, Id, Music, MusicUpdate, NewMusic, PopulatedMusic},
};

fn require_creator(music: &Music, actor: &Id) -> CatalogResult<()> {
    if music.authors.first() == Some(actor) {
        Ok(())
    } else {
        Err(CatalogError::unauthorized(
            "You are not the original creator of the music",
        ))
    }
}

/// Creates a music with the acting user as its first author.
///
/// Extra authors are deduplicated and must exist. A music that is not part of
/// an album needs its own cover. When an album is given, the acting user must
/// own it and the new music is appended to its track list.
pub fn create_music(library: &mut Library, actor: &Id, new_music: NewMusic) -> CatalogResult<Music> {
    require_user(library, actor)?;

    let name = non_blank(Some(new_music.name))
        .ok_or_else(|| CatalogError::bad_request("A name for the music is required"))?;
    let file = non_blank(new_music.file)
        .ok_or_else(|| CatalogError::bad_request("The music file is required"))?;
    let cover = non_blank(new_music.cover);

    let album = match non_blank(new_music.album) {
        Some(raw) => {
            let album_id = Id::parse(&raw)?;
            let album = library
                .album(&album_id)
                .ok_or_else(|| CatalogError::not_found("Album not found"))?;
            if album.author != *actor {
                return Err(CatalogError::unauthorized(
                    "You are not the creator of the album",
                ));
            }
            Some(album_id)
        }
        None => None,
    };

    if album.is_none() && cover.is_none() {
        return Err(CatalogError::bad_request(
            "If the music does not refer to an album, a cover is required",
        ));
    }

    let mut raw_authors = Vec::with_capacity(new_music.authors.len() + 1);
    raw_authors.push(actor.to_string());
    raw_authors.extend(new_music.authors);
    let authors = resolve_ids(&raw_authors, |id| library.user_exists(id), "Author")?;

    let now = Utc::now();
    let music = Music {
        id: Id::generate(),
        name,
        authors,
        album: album.clone(),
        file,
        cover,
        genre: new_music.genre,
        monthly_listeners: 0,
        created_at: now,
        updated_at: now,
    };

    if let Some(album_id) = &album {
        if let Some(album) = library.album_mut(album_id) {
            album.musics.push(music.id.clone());
            album.updated_at = now;
        }
    }

    library.musics.push(music.clone());
    Ok(music)
}

/// Looks up a music by id, with author ids left unresolved.
pub fn read_music(library: &Library, id: &Id) -> CatalogResult<Music> {
    library
        .music(id)
        .cloned()
        .ok_or_else(|| CatalogError::not_found("Music not found"))
}

/// Reads a music with its authors expanded. Email addresses are not exposed
/// and authors whose account is gone are skipped.
pub fn populate_music(library: &Library, id: &Id) -> CatalogResult<PopulatedMusic> {
    let music = read_music(library, id)?;

    let authors = music
        .authors
        .iter()
        .filter_map(|author| library.user(author))
        .map(|user| AuthorSummary {
            id: user.id.clone(),
            username: user.username.clone(),
            profile_pic: user.profile_pic.clone(),
        })
        .collect();

    Ok(PopulatedMusic {
        id: music.id,
        name: music.name,
        authors,
        album: music.album,
        file: music.file,
        cover: music.cover,
        genre: music.genre,
        monthly_listeners: music.monthly_listeners,
        created_at: music.created_at,
        updated_at: music.updated_at,
    })
}

/// Edits a music. Only the original creator may do this, and the creator can
/// never toggle themself out of the author list.
pub fn update_music(
    library: &mut Library,
    actor: &Id,
    id: &Id,
    update: MusicUpdate,
) -> CatalogResult<Music> {
    let music = library
        .music(id)
        .ok_or_else(|| CatalogError::not_found("Music not found"))?;
    require_creator(music, actor)?;

    let authors = if update.toggle_authors.is_empty() {
        None
    } else {
        let incoming = resolve_ids(&update.toggle_authors, |id| library.user_exists(id), "Author")?;
        let authors = reconcile_membership(&music.authors, &incoming, Some(actor)).map_err(
            |err| match err {
                ReconcileError::InvalidOperation(_) => {
                    CatalogError::bad_request("You cannot remove yourself from the authors")
                }
                other => CatalogError::from(other),
            },
        )?;
        Some(authors)
    };

    let music = library
        .music_mut(id)
        .ok_or_else(|| CatalogError::not_found("Music not found"))?;

    if let Some(name) = non_blank(update.name) {
        music.name = name;
    }
    if let Some(genre) = update.genre {
        music.genre = Some(genre);
    }
    if let Some(cover) = non_blank(update.cover) {
        music.cover = Some(cover);
    }
    if let Some(authors) = authors {
        music.authors = authors;
    }
    music.updated_at = Utc::now();

    Ok(music.clone())
}

/// Deletes a music and pulls its id out of every album and playlist.
pub fn delete_music(library: &mut Library, actor: &Id, id: &Id) -> CatalogResult<()> {
    let music = library
        .music(id)
        .ok_or_else(|| CatalogError::not_found("Music not found"))?;
    require_creator(music, actor)?;

    library.musics.retain(|m| m.id != *id);
    for album in library.albums.iter_mut() {
        album.musics.retain(|m| m != id);
    }
    for playlist in library.playlists.iter_mut() {
        playlist.musics.retain(|m| m != id);
    }

    Ok(())
}

/// Returns the album whose track list contains `music_id`, if any.
pub fn album_of(library: &Library, music_id: &Id) -> Option<Album> {
    library
        .albums
        .iter()
        .find(|album| album.musics.contains(music_id))
        .cloned()
}
