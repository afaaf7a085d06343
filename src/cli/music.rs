use super::Session;
use crate::{
    catalog, error, info, success,
    types::{Id, MusicUpdate, NewMusic},
    utils,
};

pub async fn add_music(session: &Session, new_music: NewMusic) {
    let actor = session.require_actor();
    let mut manager = session.open().await;

    match catalog::create_music(manager.library_mut(), &actor, new_music) {
        Ok(music) => {
            session.save(&manager).await;
            success!("Music {} created with id {}", music.name, music.id);
            utils::print_json(&music);
        }
        Err(e) => error!("Cannot create music. Err: {}", e),
    }
}

/// Prints a music with its authors resolved, and the album it belongs to.
pub async fn show_music(session: &Session, id: Id) {
    let manager = session.open().await;
    let library = manager.library();

    match catalog::populate_music(library, &id) {
        Ok(music) => {
            utils::print_json(&music);
            if let Some(album) = catalog::album_of(library, &id) {
                info!("Part of album {} ({})", album.name, album.id);
            }
        }
        Err(e) => error!("{}", e),
    }
}

pub async fn edit_music(session: &Session, id: Id, update: MusicUpdate) {
    let actor = session.require_actor();
    let mut manager = session.open().await;

    match catalog::update_music(manager.library_mut(), &actor, &id, update) {
        Ok(music) => {
            session.save(&manager).await;
            success!("Music {} updated", music.id);
            utils::print_json(&music);
        }
        Err(e) => error!("Cannot update music. Err: {}", e),
    }
}

pub async fn remove_music(session: &Session, id: Id) {
    let actor = session.require_actor();
    let mut manager = session.open().await;

    match catalog::delete_music(manager.library_mut(), &actor, &id) {
        Ok(()) => {
            session.save(&manager).await;
            success!("Music {} deleted", id);
        }
        Err(e) => error!("Cannot delete music. Err: {}", e),
    }
}
