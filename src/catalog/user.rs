use std::sync::LazyLock;

use chrono::Utc;
use regex::Regex;

use super::{CatalogError, CatalogResult, non_blank};
use crate::{
    management::Library,
    types::{Album, Id, Music, NewUser, Playlist, User, UserUpdate},
};

const USERNAME_MIN: usize = 5;
const USERNAME_MAX: usize = 24;

static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]*$").expect("Invalid username regex"));

/// Dotted local part or a quoted one, then a dotted domain with an alphabetic
/// TLD or a bracketed IPv4 literal.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("Invalid email regex")
});

fn validate_username(username: &str) -> CatalogResult<()> {
    let len = username.chars().count();
    if len == 0 {
        return Err(CatalogError::bad_request("An username is required"));
    }
    if len < USERNAME_MIN {
        return Err(CatalogError::bad_request(
            "Username must be at least 5 characters long",
        ));
    }
    if len > USERNAME_MAX {
        return Err(CatalogError::bad_request(
            "Username must have 24 characters or less",
        ));
    }
    if !USERNAME_REGEX.is_match(username) {
        return Err(CatalogError::bad_request(
            "Username can only contain underscores and alphanumerical characters",
        ));
    }
    Ok(())
}

fn validate_email(email: &str) -> CatalogResult<()> {
    if email.is_empty() {
        return Err(CatalogError::bad_request("An email address is required"));
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(CatalogError::bad_request("The email address is not valid"));
    }
    Ok(())
}

/// Registers a new user.
///
/// The username and email are trimmed before validation and the email is
/// stored lowercased. New accounts start with `default_profile_pic`.
///
/// # Arguments
///
/// * `library` - The library the user is added to
/// * `new_user` - Requested username and email address
/// * `default_profile_pic` - Picture path assigned to the new account
///
/// # Returns
///
/// The stored [`User`].
///
/// # Errors
///
/// - `BadRequest` when the username or email fails validation
/// - `Conflict` when another user already has the username or email
pub fn create_user(
    library: &mut Library,
    new_user: NewUser,
    default_profile_pic: &str,
) -> CatalogResult<User> {
    let username = new_user.username.trim().to_string();
    let email = new_user.email.trim().to_lowercase();

    validate_username(&username)?;
    validate_email(&email)?;

    if library.username_taken(&username, None) {
        return Err(CatalogError::conflict(
            "A user already exists with this username",
        ));
    }
    if library.email_taken(&email, None) {
        return Err(CatalogError::conflict(
            "A user already exists with this email address",
        ));
    }

    let now = Utc::now();
    let user = User {
        id: Id::generate(),
        username,
        email,
        profile_pic: default_profile_pic.to_string(),
        created_at: now,
        updated_at: now,
    };

    library.users.push(user.clone());
    Ok(user)
}

/// Looks up a user by id, failing with `NotFound` when it does not exist.
pub fn read_user(library: &Library, id: &Id) -> CatalogResult<User> {
    library
        .user(id)
        .cloned()
        .ok_or_else(|| CatalogError::not_found("User not found"))
}

/// Changes the acting user's own profile. Blank fields are left untouched.
pub fn update_user(library: &mut Library, actor: &Id, update: UserUpdate) -> CatalogResult<User> {
    let username = non_blank(update.username);
    let email = non_blank(update.email).map(|e| e.to_lowercase());
    let profile_pic = non_blank(update.profile_pic);

    if !library.user_exists(actor) {
        return Err(CatalogError::not_found("User not found"));
    }

    if let Some(username) = &username {
        validate_username(username)?;
        if library.username_taken(username, Some(actor)) {
            return Err(CatalogError::conflict(
                "A user already exists with this username",
            ));
        }
    }
    if let Some(email) = &email {
        validate_email(email)?;
        if library.email_taken(email, Some(actor)) {
            return Err(CatalogError::conflict(
                "A user already exists with this email address",
            ));
        }
    }

    let user = library
        .user_mut(actor)
        .ok_or_else(|| CatalogError::not_found("User not found"))?;

    if let Some(username) = username {
        user.username = username;
    }
    if let Some(email) = email {
        user.email = email;
    }
    if let Some(profile_pic) = profile_pic {
        user.profile_pic = profile_pic;
    }
    user.updated_at = Utc::now();

    Ok(user.clone())
}

/// Deletes the acting user's account.
///
/// Musics, albums and playlists the user created are left in place.
///
/// # Errors
///
/// Returns `NotFound` if `actor` has no account.
pub fn delete_user(library: &mut Library, actor: &Id) -> CatalogResult<()> {
    let before = library.users.len();
    library.users.retain(|u| u.id != *actor);
    if library.users.len() == before {
        return Err(CatalogError::not_found("User not found"));
    }
    Ok(())
}

pub fn user_playlists(library: &Library, id: &Id) -> Vec<Playlist> {
    library
        .playlists
        .iter()
        .filter(|p| p.created_by == *id)
        .cloned()
        .collect()
}

/// Musics the user appears on as any author, not only as the creator.
pub fn user_musics(library: &Library, id: &Id) -> Vec<Music> {
    library
        .musics
        .iter()
        .filter(|m| m.authors.contains(id))
        .cloned()
        .collect()
}

pub fn user_albums(library: &Library, id: &Id) -> Vec<Album> {
    library
        .albums
        .iter()
        .filter(|a| a.author == *id)
        .cloned()
        .collect()
}
