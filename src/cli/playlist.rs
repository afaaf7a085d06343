use super::Session;
use crate::{
    catalog, error, success,
    types::{Id, PlaylistUpdate},
    utils,
};

pub async fn add_playlist(session: &Session, name: String) {
    let actor = session.require_actor();
    let mut manager = session.open().await;

    match catalog::create_playlist(manager.library_mut(), &actor, &name) {
        Ok(playlist) => {
            session.save(&manager).await;
            success!("Playlist {} created with id {}", playlist.name, playlist.id);
        }
        Err(e) => error!("Cannot create playlist. Err: {}", e),
    }
}

pub async fn show_playlist(session: &Session, id: Id) {
    let manager = session.open().await;
    match catalog::read_playlist(manager.library(), session.actor.as_ref(), &id) {
        Ok(playlist) => {
            utils::print_json(&playlist);
            utils::print_tracks(manager.library(), &playlist.musics);
        }
        Err(e) => error!("{}", e),
    }
}

pub async fn edit_playlist(session: &Session, id: Id, update: PlaylistUpdate) {
    let actor = session.require_actor();
    let mut manager = session.open().await;

    match catalog::update_playlist(manager.library_mut(), &actor, &id, update) {
        Ok(playlist) => {
            session.save(&manager).await;
            success!(
                "Playlist {} updated, {} tracks",
                playlist.id,
                playlist.musics.len()
            );
            utils::print_tracks(manager.library(), &playlist.musics);
        }
        Err(e) => error!("Cannot update playlist. Err: {}", e),
    }
}

pub async fn remove_playlist(session: &Session, id: Id) {
    let actor = session.require_actor();
    let mut manager = session.open().await;

    match catalog::delete_playlist(manager.library_mut(), &actor, &id) {
        Ok(()) => {
            session.save(&manager).await;
            success!("Playlist {} deleted", id);
        }
        Err(e) => error!("Cannot delete playlist. Err: {}", e),
    }
}
