use tabled::Table;

use super::Session;
use crate::{
    catalog, config, error, info, success,
    types::{Id, NewUser, UserUpdate},
    utils, warning,
};

pub async fn add_user(session: &Session, username: String, email: String) {
    let mut manager = session.open().await;
    let default_pic = config::default_profile_pic();

    match catalog::create_user(
        manager.library_mut(),
        NewUser { username, email },
        &default_pic,
    ) {
        Ok(user) => {
            session.save(&manager).await;
            success!("User {} created with id {}", user.username, user.id);
            utils::print_json(&user);
        }
        Err(e) => error!("Cannot create user. Err: {}", e),
    }
}

pub async fn show_user(session: &Session, id: Id) {
    let manager = session.open().await;
    match catalog::read_user(manager.library(), &id) {
        Ok(user) => utils::print_json(&user),
        Err(e) => error!("{}", e),
    }
}

pub async fn list_users(session: &Session) {
    let manager = session.open().await;
    let users = &manager.library().users;
    if users.is_empty() {
        warning!("No users in {}", manager.path().display());
        return;
    }
    println!("{}", Table::new(utils::user_rows(users)));
}

pub async fn edit_user(session: &Session, update: UserUpdate) {
    let actor = session.require_actor();
    let mut manager = session.open().await;

    match catalog::update_user(manager.library_mut(), &actor, update) {
        Ok(user) => {
            session.save(&manager).await;
            success!("User {} updated", user.id);
            utils::print_json(&user);
        }
        Err(e) => error!("Cannot update user. Err: {}", e),
    }
}

pub async fn remove_user(session: &Session) {
    let actor = session.require_actor();
    let mut manager = session.open().await;

    match catalog::delete_user(manager.library_mut(), &actor) {
        Ok(()) => {
            session.save(&manager).await;
            success!("User {} deleted", actor);
        }
        Err(e) => error!("Cannot delete user. Err: {}", e),
    }
}

/// Lists the musics, albums and playlists belonging to a user.
pub async fn user_content(session: &Session, id: Id) {
    let manager = session.open().await;
    let library = manager.library();

    if let Err(e) = catalog::read_user(library, &id) {
        error!("{}", e);
    }

    let musics = catalog::user_musics(library, &id);
    let albums = catalog::user_albums(library, &id);
    let playlists = catalog::user_playlists(library, &id);

    info!(
        "{} musics, {} albums, {} playlists",
        musics.len(),
        albums.len(),
        playlists.len()
    );

    let music_ids: Vec<Id> = musics.iter().map(|m| m.id.clone()).collect();
    utils::print_tracks(library, &music_ids);

    let collections = utils::collection_rows(&albums, &playlists);
    if !collections.is_empty() {
        println!("{}", Table::new(collections));
    }
}
