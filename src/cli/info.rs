use std::collections::BTreeMap;

use crate::{info, warning};

use super::Session;

/// Prints where the library lives and how much it holds.
///
/// Also reports tracks per genre and dangling references: album or playlist
/// entries pointing at musics that no longer exist.
///
/// # Output Example
///
/// ```text
/// [o] Library: /home/me/.local/share/soundshelf/library.json
/// [o] Users: 3, musics: 41, albums: 4, playlists: 7
/// [o] Rock: 12
/// [o] Jazz: 5
/// ```
pub async fn info(session: &Session) {
    let manager = session.open().await;
    let library = manager.library();

    info!("Library: {}", manager.path().display());
    info!(
        "Users: {}, musics: {}, albums: {}, playlists: {}",
        library.users.len(),
        library.count_tracks(),
        library.albums.len(),
        library.playlists.len()
    );

    let mut by_genre: BTreeMap<String, usize> = BTreeMap::new();
    for music in &library.musics {
        let label = music
            .genre
            .map(|g| g.to_string())
            .unwrap_or_else(|| "Unspecified".to_string());
        *by_genre.entry(label).or_default() += 1;
    }
    for (genre, count) in by_genre {
        info!("{}: {}", genre, count);
    }

    let dangling = library
        .albums
        .iter()
        .flat_map(|a| a.musics.iter())
        .chain(library.playlists.iter().flat_map(|p| p.musics.iter()))
        .filter(|id| !library.music_exists(id))
        .count();
    if dangling > 0 {
        warning!("{} collection entries point at missing musics", dangling);
    }
}
