//! View command
//!
//! Open a post in the interactive terminal view.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use feedpost_core::comment::CommentStore;
use feedpost_core::config::{Config, UiConfig};
use feedpost_core::view::PostView;
use feedpost_ui::App;

use super::{file_view, load_post, store_label, ThreadSource};

/// Arguments for the view command
#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Post JSON file
    pub post: PathBuf,

    /// Thread file to read and write comments
    #[arg(long)]
    pub comments: Option<PathBuf>,

    /// Keep comments in the threads directory between runs
    #[arg(long)]
    pub persist: bool,
}

/// Execute the view command
pub fn execute(args: ViewArgs, config: &Config) -> Result<()> {
    use colored::Colorize;

    let post = load_post(&args.post)?;
    let source = ThreadSource::from_args(args.comments, args.persist);

    match source.open(&post, config)? {
        Some(store) => {
            let path = store.path().to_path_buf();
            let view = file_view(post, store, config)?;
            let summary = run_tui(view, &config.ui)?;
            println!("{} salvo em {}", summary, path.display().to_string().cyan());
        }
        None => {
            let view = PostView::in_memory(post, config.view.clone());
            let summary = run_tui(view, &config.ui)?;
            println!("{} (descartados ao sair)", summary.dimmed());
        }
    }

    Ok(())
}

fn run_tui<S: CommentStore>(view: PostView<S>, ui: &UiConfig) -> Result<String> {
    let mut app = App::new(view, ui)?;
    app.run()?;
    let summary = store_label(app.view());
    drop(app);
    Ok(summary)
}
