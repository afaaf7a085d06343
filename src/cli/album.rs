use super::Session;
use crate::{
    catalog, error, success,
    types::{AlbumUpdate, Id, NewAlbum},
    utils,
};

pub async fn add_album(session: &Session, new_album: NewAlbum) {
    let actor = session.require_actor();
    let mut manager = session.open().await;

    match catalog::create_album(manager.library_mut(), &actor, new_album) {
        Ok(album) => {
            session.save(&manager).await;
            success!("Album {} created with id {}", album.name, album.id);
            utils::print_tracks(manager.library(), &album.musics);
        }
        Err(e) => error!("Cannot create album. Err: {}", e),
    }
}

pub async fn show_album(session: &Session, id: Id) {
    let manager = session.open().await;
    match catalog::read_album(manager.library(), &id) {
        Ok(album) => {
            utils::print_json(&album);
            utils::print_tracks(manager.library(), &album.musics);
        }
        Err(e) => error!("{}", e),
    }
}

pub async fn edit_album(session: &Session, id: Id, update: AlbumUpdate) {
    let actor = session.require_actor();
    let mut manager = session.open().await;

    match catalog::update_album(manager.library_mut(), &actor, &id, update) {
        Ok(album) => {
            session.save(&manager).await;
            success!("Album {} updated, {} tracks", album.id, album.musics.len());
            utils::print_tracks(manager.library(), &album.musics);
        }
        Err(e) => error!("Cannot update album. Err: {}", e),
    }
}

pub async fn remove_album(session: &Session, id: Id) {
    let actor = session.require_actor();
    let mut manager = session.open().await;

    match catalog::delete_album(manager.library_mut(), &actor, &id) {
        Ok(()) => {
            session.save(&manager).await;
            success!("Album {} deleted", id);
        }
        Err(e) => error!("Cannot delete album. Err: {}", e),
    }
}
