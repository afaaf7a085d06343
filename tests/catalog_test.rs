use soundshelf::{
    catalog::{self, CatalogError},
    config::DEFAULT_PROFILE_PIC,
    management::Library,
    reconcile::ReconcileError,
    types::{AlbumUpdate, Genre, Id, MusicUpdate, NewAlbum, NewMusic, NewUser, PlaylistUpdate},
};

// Helper function to create a user with a unique name and email
fn add_user(library: &mut Library, username: &str) -> Id {
    catalog::create_user(
        library,
        NewUser {
            username: username.to_string(),
            email: format!("{}@example.com", username),
        },
        DEFAULT_PROFILE_PIC,
    )
    .unwrap()
    .id
}

// Helper function to create a standalone music owned by `actor`
fn add_music(library: &mut Library, actor: &Id, name: &str) -> Id {
    catalog::create_music(
        library,
        actor,
        NewMusic {
            name: name.to_string(),
            file: Some(format!("/musics/{}.mp3", name)),
            cover: Some("/images/1/cover.png".to_string()),
            genre: Some(Genre::Rock),
            ..Default::default()
        },
    )
    .unwrap()
    .id
}

fn ids(list: &[&Id]) -> Vec<String> {
    list.iter().map(|id| id.to_string()).collect()
}

struct Fixture {
    library: Library,
    owner: Id,
    other: Id,
    tracks: Vec<Id>,
}

fn fixture() -> Fixture {
    let mut library = Library::default();
    let owner = add_user(&mut library, "owner_one");
    let other = add_user(&mut library, "other_two");
    let tracks = (0..4)
        .map(|i| add_music(&mut library, &owner, &format!("track{}", i)))
        .collect();
    Fixture {
        library,
        owner,
        other,
        tracks,
    }
}

#[test]
fn test_create_user_validation() {
    let mut library = Library::default();

    let short = catalog::create_user(
        &mut library,
        NewUser {
            username: "abc".to_string(),
            email: "abc@example.com".to_string(),
        },
        DEFAULT_PROFILE_PIC,
    );
    assert!(matches!(short, Err(CatalogError::BadRequest(_))));

    let symbols = catalog::create_user(
        &mut library,
        NewUser {
            username: "bad-name!".to_string(),
            email: "bad@example.com".to_string(),
        },
        DEFAULT_PROFILE_PIC,
    );
    assert!(matches!(symbols, Err(CatalogError::BadRequest(_))));

    let email = catalog::create_user(
        &mut library,
        NewUser {
            username: "valid_name".to_string(),
            email: "not-an-email".to_string(),
        },
        DEFAULT_PROFILE_PIC,
    );
    assert_eq!(
        email,
        Err(CatalogError::BadRequest(
            "The email address is not valid".to_string()
        ))
    );

    assert!(library.users.is_empty());
}

#[test]
fn test_create_user_conflicts() {
    let mut library = Library::default();
    let id = add_user(&mut library, "first_user");
    assert_eq!(
        catalog::read_user(&library, &id).unwrap().profile_pic,
        DEFAULT_PROFILE_PIC
    );

    let same_name = catalog::create_user(
        &mut library,
        NewUser {
            username: "first_user".to_string(),
            email: "other@example.com".to_string(),
        },
        DEFAULT_PROFILE_PIC,
    );
    assert!(matches!(same_name, Err(CatalogError::Conflict(_))));

    let same_email = catalog::create_user(
        &mut library,
        NewUser {
            username: "second_user".to_string(),
            email: "FIRST_USER@example.com".to_string(),
        },
        DEFAULT_PROFILE_PIC,
    );
    assert!(matches!(same_email, Err(CatalogError::Conflict(_))));
}

#[test]
fn test_email_address_shapes() {
    let mut library = Library::default();
    let attempts = [
        ("a..b@example.com", false),
        (".a@example.com", false),
        ("a.@example.com", false),
        ("first.last@example.com", true),
        ("\"john doe\"@example.com", true),
        ("x@[1.2.3.4]", true),
        ("x@example.c", false),
        ("x@localhost", false),
    ];

    for (i, (email, accepted)) in attempts.iter().enumerate() {
        let result = catalog::create_user(
            &mut library,
            NewUser {
                username: format!("mail_user_{}", i),
                email: email.to_string(),
            },
            DEFAULT_PROFILE_PIC,
        );
        assert_eq!(result.is_ok(), *accepted, "{}", email);
    }
}

#[test]
fn test_email_is_stored_lowercase() {
    let mut library = Library::default();
    let id = catalog::create_user(
        &mut library,
        NewUser {
            username: "mixed_case".to_string(),
            email: "Mixed.Case@Example.COM".to_string(),
        },
        DEFAULT_PROFILE_PIC,
    )
    .unwrap()
    .id;
    assert_eq!(
        catalog::read_user(&library, &id).unwrap().email,
        "mixed.case@example.com"
    );

    let other = add_user(&mut library, "second_one");
    let taken = catalog::update_user(
        &mut library,
        &other,
        soundshelf::types::UserUpdate {
            email: Some("MIXED.case@example.com".to_string()),
            ..Default::default()
        },
    );
    assert!(matches!(taken, Err(CatalogError::Conflict(_))));
}

#[test]
fn test_update_user_keeps_own_name() {
    let mut f = fixture();
    let updated = catalog::update_user(
        &mut f.library,
        &f.owner,
        soundshelf::types::UserUpdate {
            username: Some("owner_one".to_string()),
            profile_pic: Some("/images/2/me.png".to_string()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(updated.profile_pic, "/images/2/me.png");

    let taken = catalog::update_user(
        &mut f.library,
        &f.owner,
        soundshelf::types::UserUpdate {
            username: Some("other_two".to_string()),
            ..Default::default()
        },
    );
    assert!(matches!(taken, Err(CatalogError::Conflict(_))));
}

#[test]
fn test_create_music_requirements() {
    let mut f = fixture();

    let no_file = catalog::create_music(
        &mut f.library,
        &f.owner,
        NewMusic {
            name: "song".to_string(),
            cover: Some("/images/c.png".to_string()),
            ..Default::default()
        },
    );
    assert!(matches!(no_file, Err(CatalogError::BadRequest(_))));

    let no_cover = catalog::create_music(
        &mut f.library,
        &f.owner,
        NewMusic {
            name: "song".to_string(),
            file: Some("/musics/song.mp3".to_string()),
            ..Default::default()
        },
    );
    assert!(matches!(no_cover, Err(CatalogError::BadRequest(_))));

    let bad_author = catalog::create_music(
        &mut f.library,
        &f.owner,
        NewMusic {
            name: "song".to_string(),
            file: Some("/musics/song.mp3".to_string()),
            cover: Some("/images/c.png".to_string()),
            authors: vec!["zzz".to_string()],
            ..Default::default()
        },
    );
    assert_eq!(
        bad_author,
        Err(CatalogError::BadRequest("Id zzz is not valid".to_string()))
    );
}

#[test]
fn test_create_music_puts_actor_first() {
    let mut f = fixture();
    let music = catalog::create_music(
        &mut f.library,
        &f.owner,
        NewMusic {
            name: "duet".to_string(),
            file: Some("/musics/duet.mp3".to_string()),
            cover: Some("/images/duet.png".to_string()),
            authors: ids(&[&f.other, &f.owner, &f.other]),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(music.authors, vec![f.owner.clone(), f.other.clone()]);

    let populated = catalog::populate_music(&f.library, &music.id).unwrap();
    let names: Vec<&str> = populated.authors.iter().map(|a| a.username.as_str()).collect();
    assert_eq!(names, vec!["owner_one", "other_two"]);
}

#[test]
fn test_update_music_toggles_authors() {
    let mut f = fixture();
    let track = f.tracks[0].clone();

    let added = catalog::update_music(
        &mut f.library,
        &f.owner,
        &track,
        MusicUpdate {
            toggle_authors: ids(&[&f.other]),
            genre: Some(Genre::Jazz),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(added.authors, vec![f.owner.clone(), f.other.clone()]);
    assert_eq!(added.genre, Some(Genre::Jazz));

    let removed = catalog::update_music(
        &mut f.library,
        &f.owner,
        &track,
        MusicUpdate {
            toggle_authors: ids(&[&f.other]),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(removed.authors, vec![f.owner.clone()]);
}

#[test]
fn test_update_music_creator_cannot_remove_self() {
    let mut f = fixture();
    let track = f.tracks[0].clone();

    let result = catalog::update_music(
        &mut f.library,
        &f.owner,
        &track,
        MusicUpdate {
            toggle_authors: ids(&[&f.other, &f.owner]),
            ..Default::default()
        },
    );
    assert_eq!(
        result,
        Err(CatalogError::BadRequest(
            "You cannot remove yourself from the authors".to_string()
        ))
    );
    assert_eq!(
        catalog::read_music(&f.library, &track).unwrap().authors,
        vec![f.owner.clone()]
    );
}

#[test]
fn test_update_music_only_creator() {
    let mut f = fixture();
    let track = f.tracks[0].clone();
    let result = catalog::update_music(
        &mut f.library,
        &f.other,
        &track,
        MusicUpdate {
            name: Some("stolen".to_string()),
            ..Default::default()
        },
    );
    assert!(matches!(result, Err(CatalogError::Unauthorized(_))));
}

#[test]
fn test_album_toggle_and_order() {
    let mut f = fixture();
    let album = catalog::create_album(
        &mut f.library,
        &f.owner,
        NewAlbum {
            name: "First".to_string(),
            musics: ids(&[&f.tracks[0], &f.tracks[1], &f.tracks[0]]),
            cover: Some("/images/album.png".to_string()),
        },
    )
    .unwrap();
    assert_eq!(album.musics, vec![f.tracks[0].clone(), f.tracks[1].clone()]);

    // toggle off track0, toggle on track2 and track3, then put the last one first
    let updated = catalog::update_album(
        &mut f.library,
        &f.owner,
        &album.id,
        AlbumUpdate {
            toggle_musics: ids(&[&f.tracks[0], &f.tracks[2], &f.tracks[3]]),
            order: vec![2, 9],
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(
        updated.musics,
        vec![f.tracks[3].clone(), f.tracks[1].clone(), f.tracks[2].clone()]
    );
    assert_eq!(
        catalog::album_of(&f.library, &f.tracks[3]).map(|a| a.id),
        Some(album.id.clone())
    );
}

#[test]
fn test_album_links_follow_toggles() {
    let mut f = fixture();
    let album = catalog::create_album(
        &mut f.library,
        &f.owner,
        NewAlbum {
            name: "Linked".to_string(),
            musics: ids(&[&f.tracks[0]]),
            cover: Some("/images/linked.png".to_string()),
        },
    )
    .unwrap();
    assert_eq!(
        catalog::read_music(&f.library, &f.tracks[0]).unwrap().album,
        Some(album.id.clone())
    );

    catalog::update_album(
        &mut f.library,
        &f.owner,
        &album.id,
        AlbumUpdate {
            toggle_musics: ids(&[&f.tracks[1], &f.tracks[0]]),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(catalog::read_music(&f.library, &f.tracks[0]).unwrap().album, None);
    assert_eq!(
        catalog::read_music(&f.library, &f.tracks[1]).unwrap().album,
        Some(album.id.clone())
    );
    assert_eq!(catalog::album_of(&f.library, &f.tracks[0]), None);
    assert_eq!(
        catalog::album_of(&f.library, &f.tracks[1]).map(|a| a.id),
        Some(album.id.clone())
    );

    let second = catalog::create_album(
        &mut f.library,
        &f.owner,
        NewAlbum {
            name: "Greedy".to_string(),
            musics: ids(&[&f.tracks[2], &f.tracks[1]]),
            cover: Some("/images/greedy.png".to_string()),
        },
    );
    assert!(matches!(second, Err(CatalogError::BadRequest(_))));
    assert_eq!(catalog::read_music(&f.library, &f.tracks[2]).unwrap().album, None);
    assert_eq!(f.library.albums.len(), 1);
}

#[test]
fn test_album_cannot_become_empty() {
    let mut f = fixture();
    let album = catalog::create_album(
        &mut f.library,
        &f.owner,
        NewAlbum {
            name: "Single".to_string(),
            musics: ids(&[&f.tracks[0]]),
            cover: Some("/images/single.png".to_string()),
        },
    )
    .unwrap();

    let result = catalog::update_album(
        &mut f.library,
        &f.owner,
        &album.id,
        AlbumUpdate {
            toggle_musics: ids(&[&f.tracks[0]]),
            ..Default::default()
        },
    );
    assert!(matches!(result, Err(CatalogError::BadRequest(_))));
    assert_eq!(
        catalog::read_album(&f.library, &album.id).unwrap().musics,
        vec![f.tracks[0].clone()]
    );
}

#[test]
fn test_album_requires_owner_and_existing_tracks() {
    let mut f = fixture();
    let album = catalog::create_album(
        &mut f.library,
        &f.owner,
        NewAlbum {
            name: "Owned".to_string(),
            musics: ids(&[&f.tracks[0]]),
            cover: Some("/images/owned.png".to_string()),
        },
    )
    .unwrap();

    let foreign = catalog::update_album(
        &mut f.library,
        &f.other,
        &album.id,
        AlbumUpdate {
            name: Some("Mine now".to_string()),
            ..Default::default()
        },
    );
    assert!(matches!(foreign, Err(CatalogError::Unauthorized(_))));

    let missing = catalog::update_album(
        &mut f.library,
        &f.owner,
        &album.id,
        AlbumUpdate {
            toggle_musics: vec![Id::generate().to_string()],
            ..Default::default()
        },
    );
    assert_eq!(
        missing,
        Err(CatalogError::NotFound("Music not found".to_string()))
    );

    let no_cover = catalog::create_album(
        &mut f.library,
        &f.owner,
        NewAlbum {
            name: "Bare".to_string(),
            musics: ids(&[&f.tracks[1]]),
            cover: None,
        },
    );
    assert!(matches!(no_cover, Err(CatalogError::BadRequest(_))));
}

#[test]
fn test_music_created_into_album() {
    let mut f = fixture();
    let album = catalog::create_album(
        &mut f.library,
        &f.owner,
        NewAlbum {
            name: "Growing".to_string(),
            musics: ids(&[&f.tracks[0]]),
            cover: Some("/images/growing.png".to_string()),
        },
    )
    .unwrap();

    let music = catalog::create_music(
        &mut f.library,
        &f.owner,
        NewMusic {
            name: "bonus".to_string(),
            file: Some("/musics/bonus.mp3".to_string()),
            album: Some(album.id.to_string()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(music.album, Some(album.id.clone()));
    assert_eq!(
        catalog::read_album(&f.library, &album.id).unwrap().musics,
        vec![f.tracks[0].clone(), music.id.clone()]
    );

    let foreign = catalog::create_music(
        &mut f.library,
        &f.other,
        NewMusic {
            name: "intruder".to_string(),
            file: Some("/musics/intruder.mp3".to_string()),
            album: Some(album.id.to_string()),
            ..Default::default()
        },
    );
    assert!(matches!(foreign, Err(CatalogError::Unauthorized(_))));

    assert!(matches!(
        catalog::delete_album(&mut f.library, &f.other, &album.id),
        Err(CatalogError::Unauthorized(_))
    ));
    catalog::delete_album(&mut f.library, &f.owner, &album.id).unwrap();
    assert!(matches!(
        catalog::read_album(&f.library, &album.id),
        Err(CatalogError::NotFound(_))
    ));
    assert_eq!(catalog::album_of(&f.library, &music.id), None);
    assert_eq!(catalog::read_music(&f.library, &music.id).unwrap().album, None);
}

#[test]
fn test_playlist_lifecycle() {
    let mut f = fixture();
    let playlist = catalog::create_playlist(&mut f.library, &f.other, "Road trip").unwrap();
    assert!(playlist.musics.is_empty());
    assert!(!playlist.private);

    let updated = catalog::update_playlist(
        &mut f.library,
        &f.other,
        &playlist.id,
        PlaylistUpdate {
            toggle_musics: ids(&[&f.tracks[0], &f.tracks[1], &f.tracks[2]]),
            order: vec![1, 1, 0],
            private: Some(true),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(
        updated.musics,
        vec![f.tracks[1].clone(), f.tracks[0].clone(), f.tracks[2].clone()]
    );

    let hidden = catalog::read_playlist(&f.library, Some(&f.owner), &playlist.id);
    assert!(matches!(hidden, Err(CatalogError::Unauthorized(_))));
    assert!(catalog::read_playlist(&f.library, None, &playlist.id).is_err());
    assert!(catalog::read_playlist(&f.library, Some(&f.other), &playlist.id).is_ok());

    let not_owner = catalog::delete_playlist(&mut f.library, &f.owner, &playlist.id);
    assert!(matches!(not_owner, Err(CatalogError::Unauthorized(_))));
    catalog::delete_playlist(&mut f.library, &f.other, &playlist.id).unwrap();
    assert!(f.library.playlists.is_empty());
}

#[test]
fn test_playlist_order_indexes_list_after_toggles() {
    let mut f = fixture();
    let playlist = catalog::create_playlist(&mut f.library, &f.owner, "Shuffle").unwrap();
    catalog::update_playlist(
        &mut f.library,
        &f.owner,
        &playlist.id,
        PlaylistUpdate {
            toggle_musics: ids(&[&f.tracks[0], &f.tracks[1], &f.tracks[2]]),
            ..Default::default()
        },
    )
    .unwrap();

    // [t0, t1, t2] -> toggle t1 off and t3 on -> [t0, t2, t3] -> [t3, t0, t2]
    let updated = catalog::update_playlist(
        &mut f.library,
        &f.owner,
        &playlist.id,
        PlaylistUpdate {
            toggle_musics: ids(&[&f.tracks[1], &f.tracks[3]]),
            order: vec![2, 0],
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(
        updated.musics,
        vec![f.tracks[3].clone(), f.tracks[0].clone(), f.tracks[2].clone()]
    );
}

#[test]
fn test_playlist_order_on_empty_list() {
    let mut f = fixture();
    let playlist = catalog::create_playlist(&mut f.library, &f.owner, "Empty").unwrap();

    let result = catalog::update_playlist(
        &mut f.library,
        &f.owner,
        &playlist.id,
        PlaylistUpdate {
            order: vec![0],
            ..Default::default()
        },
    );
    assert!(matches!(
        result,
        Err(CatalogError::Reconcile(ReconcileError::InvalidArgument(_)))
    ));

    let blank = catalog::create_playlist(&mut f.library, &f.owner, "   ");
    assert!(matches!(blank, Err(CatalogError::BadRequest(_))));
}

#[test]
fn test_delete_music_pulls_from_collections() {
    let mut f = fixture();
    let album = catalog::create_album(
        &mut f.library,
        &f.owner,
        NewAlbum {
            name: "Pair".to_string(),
            musics: ids(&[&f.tracks[0], &f.tracks[1]]),
            cover: Some("/images/pair.png".to_string()),
        },
    )
    .unwrap();
    let playlist = catalog::create_playlist(&mut f.library, &f.other, "Mix").unwrap();
    catalog::update_playlist(
        &mut f.library,
        &f.other,
        &playlist.id,
        PlaylistUpdate {
            toggle_musics: ids(&[&f.tracks[1], &f.tracks[2]]),
            ..Default::default()
        },
    )
    .unwrap();

    let not_creator = catalog::delete_music(&mut f.library, &f.other, &f.tracks[1]);
    assert!(matches!(not_creator, Err(CatalogError::Unauthorized(_))));

    catalog::delete_music(&mut f.library, &f.owner, &f.tracks[1]).unwrap();

    assert!(catalog::read_music(&f.library, &f.tracks[1]).is_err());
    assert_eq!(
        catalog::read_album(&f.library, &album.id).unwrap().musics,
        vec![f.tracks[0].clone()]
    );
    assert_eq!(
        catalog::read_playlist(&f.library, Some(&f.other), &playlist.id)
            .unwrap()
            .musics,
        vec![f.tracks[2].clone()]
    );
}

#[test]
fn test_user_content_queries() {
    let mut f = fixture();
    catalog::update_music(
        &mut f.library,
        &f.owner,
        &f.tracks[3],
        MusicUpdate {
            toggle_authors: ids(&[&f.other]),
            ..Default::default()
        },
    )
    .unwrap();
    catalog::create_playlist(&mut f.library, &f.other, "Mine").unwrap();

    assert_eq!(catalog::user_musics(&f.library, &f.owner).len(), 4);
    assert_eq!(catalog::user_musics(&f.library, &f.other).len(), 1);
    assert_eq!(catalog::user_playlists(&f.library, &f.other).len(), 1);
    assert!(catalog::user_albums(&f.library, &f.other).is_empty());

    catalog::delete_user(&mut f.library, &f.other).unwrap();
    assert!(matches!(
        catalog::read_user(&f.library, &f.other),
        Err(CatalogError::NotFound(_))
    ));
    assert!(matches!(
        catalog::delete_user(&mut f.library, &f.other),
        Err(CatalogError::NotFound(_))
    ));
}

#[test]
fn test_resolve_ids() {
    let f = fixture();
    let upper = f.tracks[0].to_string().to_uppercase();
    let resolved = catalog::resolve_ids(
        &[f.tracks[0].to_string(), upper, f.tracks[1].to_string()],
        |id| f.library.music_exists(id),
        "Music",
    )
    .unwrap();
    assert_eq!(resolved, vec![f.tracks[0].clone(), f.tracks[1].clone()]);
}
