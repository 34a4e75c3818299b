//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod config;
pub mod show;
pub mod view;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use feedpost_core::comment::CommentStore;
use feedpost_core::config::Config;
use feedpost_core::post::Post;
use feedpost_core::view::PostView;
use feedpost_storage::{JsonCommentStore, ThreadDir};
use std::path::{Path, PathBuf};

/// feedpost - view a feed post and its comment thread
#[derive(Debug, Parser)]
#[command(name = "feedpost")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "FEEDPOST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open a post in the interactive view
    View(view::ViewArgs),

    /// Print a post with its comments
    Show(show::ShowArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_path = resolve_config_path(cli.config.as_deref());

    match cli.command {
        Commands::View(args) => view::execute(args, &load_config(&config_path)?),
        Commands::Show(args) => show::execute(args, &load_config(&config_path)?),
        Commands::Config(cmd) => config::execute(cmd, &config_path),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Project config if present, else the platform config directory
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    let local = PathBuf::from(".feedpost/config.toml");
    if local.exists() {
        return local;
    }

    directories::ProjectDirs::from("com", "feedpost", "feedpost")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or(local)
}

fn load_config(path: &Path) -> Result<Config> {
    Config::load_or_default(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))
}

fn load_post(path: &Path) -> Result<Post> {
    let post = Post::from_file(path)?;
    tracing::info!("Loaded post {} from {:?}", post.id, path);
    Ok(post)
}

/// Where a view's comments live
pub enum ThreadSource {
    /// Only in memory, gone on exit
    Memory,
    /// A specific thread file
    File(PathBuf),
    /// The configured (or default) threads directory
    Persisted,
}

impl ThreadSource {
    pub fn from_args(comments: Option<PathBuf>, persist: bool) -> Self {
        match (comments, persist) {
            (Some(path), _) => ThreadSource::File(path),
            (None, true) => ThreadSource::Persisted,
            (None, false) => ThreadSource::Memory,
        }
    }

    /// Open the file-backed store, if this source has one
    pub fn open(&self, post: &Post, config: &Config) -> Result<Option<JsonCommentStore>> {
        let store = match self {
            ThreadSource::Memory => return Ok(None),
            ThreadSource::File(path) => JsonCommentStore::open(path, post.id)?,
            ThreadSource::Persisted => {
                let dir = match &config.storage.comments_dir {
                    Some(dir) => ThreadDir::new(dir)?,
                    None => ThreadDir::default_location()?,
                };
                dir.open(post.id)?
            }
        };
        Ok(Some(store))
    }
}

/// Build a view over a file-backed store
fn file_view(post: Post, store: JsonCommentStore, config: &Config) -> Result<PostView<JsonCommentStore>> {
    let path = store.path().to_path_buf();
    PostView::with_store(post, store, config.view.clone())
        .with_context(|| format!("Failed to open thread {}", path.display()))
}

/// Describe a store for summary lines
fn store_label<S: CommentStore>(view: &PostView<S>) -> String {
    format!("{} comentários", view.comments().len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_text() {
        let cmd = Cli::command();
        assert!(cmd.get_about().is_some());
    }

    #[test]
    fn test_explicit_config_path_wins() {
        let path = resolve_config_path(Some(Path::new("custom.toml")));
        assert_eq!(path, PathBuf::from("custom.toml"));
    }

    #[test]
    fn test_thread_source_from_args() {
        assert!(matches!(ThreadSource::from_args(None, false), ThreadSource::Memory));
        assert!(matches!(ThreadSource::from_args(None, true), ThreadSource::Persisted));
        assert!(matches!(
            ThreadSource::from_args(Some(PathBuf::from("t.json")), true),
            ThreadSource::File(_)
        ));
    }
}
