use serde::Serialize;
use tabled::Table;

use crate::{
    management::Library,
    types::{Album, CollectionTableRow, Id, MusicTableRow, Playlist, User, UserTableRow},
    warning,
};

pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => warning!("Cannot render document. Err: {}", e),
    }
}

/// Builds one row per track id, in list order. Ids that no longer resolve are
/// shown with a placeholder name so positions stay aligned with `--order`.
pub fn music_rows(library: &Library, tracks: &[Id]) -> Vec<MusicTableRow> {
    tracks
        .iter()
        .enumerate()
        .map(|(position, id)| match library.music(id) {
            Some(music) => MusicTableRow {
                position,
                id: id.to_string(),
                name: music.name.clone(),
                genre: music.genre.map(|g| g.to_string()).unwrap_or_default(),
            },
            None => MusicTableRow {
                position,
                id: id.to_string(),
                name: "<missing>".to_string(),
                genre: String::new(),
            },
        })
        .collect()
}

pub fn print_tracks(library: &Library, tracks: &[Id]) {
    if tracks.is_empty() {
        return;
    }
    println!("{}", Table::new(music_rows(library, tracks)));
}

pub fn user_rows(users: &[User]) -> Vec<UserTableRow> {
    let mut rows: Vec<UserTableRow> = users
        .iter()
        .map(|u| UserTableRow {
            id: u.id.to_string(),
            username: u.username.clone(),
            email: u.email.clone(),
        })
        .collect();
    rows.sort_by(|a, b| a.username.to_lowercase().cmp(&b.username.to_lowercase()));
    rows
}

pub fn collection_rows(albums: &[Album], playlists: &[Playlist]) -> Vec<CollectionTableRow> {
    let albums = albums.iter().map(|a| CollectionTableRow {
        kind: "album".to_string(),
        id: a.id.to_string(),
        name: a.name.clone(),
        tracks: a.musics.len(),
    });
    let playlists = playlists.iter().map(|p| CollectionTableRow {
        kind: "playlist".to_string(),
        id: p.id.to_string(),
        name: p.name.clone(),
        tracks: p.musics.len(),
    });
    albums.chain(playlists).collect()
}
