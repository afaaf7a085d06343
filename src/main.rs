use std::path::PathBuf;

use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use soundshelf::{
    cli::{self, Session},
    config, error,
    types::{AlbumUpdate, Genre, Id, MusicUpdate, NewAlbum, NewMusic, PlaylistUpdate, UserUpdate},
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Library document to operate on (defaults to the data directory)
    #[clap(long, global = true)]
    library: Option<PathBuf>,

    /// Id of the user performing the command
    #[clap(long = "as", global = true, value_name = "USER_ID")]
    actor: Option<Id>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Handle users
    #[command(subcommand)]
    User(UserSubcommand),

    /// Handle musics
    #[command(subcommand)]
    Music(MusicSubcommand),

    /// Handle albums
    #[command(subcommand)]
    Album(AlbumSubcommand),

    /// Handle playlists
    #[command(subcommand)]
    Playlist(PlaylistSubcommand),

    /// Library statistics
    Info,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Subcommand, Debug, Clone)]
pub enum UserSubcommand {
    /// Create a user
    Add {
        #[clap(long)]
        username: String,
        #[clap(long)]
        email: String,
    },
    /// Show a user
    Show { id: Id },
    /// List all users
    List,
    /// Edit the acting user
    Edit {
        #[clap(long)]
        username: Option<String>,
        #[clap(long)]
        email: Option<String>,
        #[clap(long)]
        profile_pic: Option<String>,
    },
    /// Delete the acting user
    Rm,
    /// List musics, albums and playlists of a user
    Content { id: Id },
}

#[derive(Subcommand, Debug, Clone)]
pub enum MusicSubcommand {
    /// Create a music authored by the acting user
    Add {
        #[clap(long)]
        name: String,
        /// Path of the audio file
        #[clap(long)]
        file: String,
        #[clap(long)]
        cover: Option<String>,
        #[clap(long)]
        album: Option<String>,
        #[clap(long)]
        genre: Option<Genre>,
        /// Co-author id; can be repeated
        #[clap(long = "author")]
        authors: Vec<String>,
    },
    /// Show a music with its authors
    Show { id: Id },
    /// Edit a music
    Edit {
        id: Id,
        #[clap(long)]
        name: Option<String>,
        #[clap(long)]
        genre: Option<Genre>,
        #[clap(long)]
        cover: Option<String>,
        /// Author id whose membership flips; can be repeated
        #[clap(long = "toggle-author")]
        toggle_authors: Vec<String>,
    },
    /// Delete a music
    Rm { id: Id },
}

#[derive(Subcommand, Debug, Clone)]
pub enum AlbumSubcommand {
    /// Create an album owned by the acting user
    Add {
        #[clap(long)]
        name: String,
        #[clap(long)]
        cover: String,
        /// Music id; can be repeated
        #[clap(long = "music", required = true)]
        musics: Vec<String>,
    },
    /// Show an album and its tracks
    Show { id: Id },
    /// Edit an album
    Edit {
        id: Id,
        #[clap(long)]
        name: Option<String>,
        #[clap(long)]
        cover: Option<String>,
        /// Music id whose membership flips; can be repeated
        #[clap(long = "toggle")]
        toggle_musics: Vec<String>,
        /// New sequence of track positions, e.g. --order 2,0
        #[clap(long, value_delimiter = ',')]
        order: Vec<usize>,
    },
    /// Delete an album
    Rm { id: Id },
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlaylistSubcommand {
    /// Create an empty playlist owned by the acting user
    Add {
        #[clap(long)]
        name: String,
    },
    /// Show a playlist and its tracks
    Show { id: Id },
    /// Edit a playlist
    Edit {
        id: Id,
        #[clap(long)]
        name: Option<String>,
        #[clap(long)]
        cover: Option<String>,
        #[clap(long, action = ArgAction::Set)]
        private: Option<bool>,
        /// Music id whose membership flips; can be repeated
        #[clap(long = "toggle")]
        toggle_musics: Vec<String>,
        /// New sequence of track positions, e.g. --order 2,0
        #[clap(long, value_delimiter = ',')]
        order: Vec<usize>,
    },
    /// Delete a playlist
    Rm { id: Id },
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();
    let session = Session::new(
        cli.library.unwrap_or_else(config::library_path),
        cli.actor,
    );

    match cli.command {
        Command::User(cmd) => match cmd {
            UserSubcommand::Add { username, email } => {
                cli::add_user(&session, username, email).await
            }
            UserSubcommand::Show { id } => cli::show_user(&session, id).await,
            UserSubcommand::List => cli::list_users(&session).await,
            UserSubcommand::Edit {
                username,
                email,
                profile_pic,
            } => {
                cli::edit_user(
                    &session,
                    UserUpdate {
                        username,
                        email,
                        profile_pic,
                    },
                )
                .await
            }
            UserSubcommand::Rm => cli::remove_user(&session).await,
            UserSubcommand::Content { id } => cli::user_content(&session, id).await,
        },

        Command::Music(cmd) => match cmd {
            MusicSubcommand::Add {
                name,
                file,
                cover,
                album,
                genre,
                authors,
            } => {
                cli::add_music(
                    &session,
                    NewMusic {
                        name,
                        authors,
                        album,
                        file: Some(file),
                        cover,
                        genre,
                    },
                )
                .await
            }
            MusicSubcommand::Show { id } => cli::show_music(&session, id).await,
            MusicSubcommand::Edit {
                id,
                name,
                genre,
                cover,
                toggle_authors,
            } => {
                cli::edit_music(
                    &session,
                    id,
                    MusicUpdate {
                        name,
                        genre,
                        cover,
                        toggle_authors,
                    },
                )
                .await
            }
            MusicSubcommand::Rm { id } => cli::remove_music(&session, id).await,
        },

        Command::Album(cmd) => match cmd {
            AlbumSubcommand::Add {
                name,
                cover,
                musics,
            } => {
                cli::add_album(
                    &session,
                    NewAlbum {
                        name,
                        musics,
                        cover: Some(cover),
                    },
                )
                .await
            }
            AlbumSubcommand::Show { id } => cli::show_album(&session, id).await,
            AlbumSubcommand::Edit {
                id,
                name,
                cover,
                toggle_musics,
                order,
            } => {
                cli::edit_album(
                    &session,
                    id,
                    AlbumUpdate {
                        name,
                        cover,
                        toggle_musics,
                        order,
                    },
                )
                .await
            }
            AlbumSubcommand::Rm { id } => cli::remove_album(&session, id).await,
        },

        Command::Playlist(cmd) => match cmd {
            PlaylistSubcommand::Add { name } => cli::add_playlist(&session, name).await,
            PlaylistSubcommand::Show { id } => cli::show_playlist(&session, id).await,
            PlaylistSubcommand::Edit {
                id,
                name,
                cover,
                private,
                toggle_musics,
                order,
            } => {
                cli::edit_playlist(
                    &session,
                    id,
                    PlaylistUpdate {
                        name,
                        cover,
                        private,
                        toggle_musics,
                        order,
                    },
                )
                .await
            }
            PlaylistSubcommand::Rm { id } => cli::remove_playlist(&session, id).await,
        },

        Command::Info => cli::info(&session).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
