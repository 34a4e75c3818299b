//! Show command
//!
//! Print a post, its header and its comment thread without the TUI.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use std::fmt::Write as _;
use std::path::PathBuf;

use feedpost_core::comment::CommentStore;
use feedpost_core::config::Config;
use feedpost_core::view::{BodyLine, PostRender, PostView};

use super::{file_view, load_post, store_label, ThreadSource};

/// Arguments for the show command
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Post JSON file
    pub post: PathBuf,

    /// Thread file to read comments from
    #[arg(long)]
    pub comments: Option<PathBuf>,

    /// Print the render model as JSON
    #[arg(long)]
    pub json: bool,

    /// Clock for relative times (RFC 3339), defaults to now
    #[arg(long, value_parser = parse_now)]
    pub now: Option<DateTime<Utc>>,
}

/// Execute the show command
pub fn execute(args: ShowArgs, config: &Config) -> Result<()> {
    let post = load_post(&args.post)?;
    let now = args.now.unwrap_or_else(Utc::now);
    let source = ThreadSource::from_args(args.comments, false);

    // An empty thread file is shown with the seed but left untouched
    let render = match source.open(&post, config)? {
        Some(store) if !store.is_empty() => {
            let view = file_view(post, store, config)?;
            tracing::info!("Showing {}", store_label(&view));
            view.render(&now)
        }
        _ => PostView::in_memory(post, config.view.clone()).render(&now),
    };

    if args.json {
        let json = serde_json::to_string_pretty(&render).context("Failed to serialize post")?;
        println!("{}", json);
    } else {
        print!("{}", format_text(&render));
    }

    Ok(())
}

fn parse_now(value: &str) -> std::result::Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 timestamp '{}': {}", value, e))
}

/// Plain-text rendering of a post
fn format_text(render: &PostRender) -> String {
    let mut out = String::new();
    let header = &render.header;

    let _ = writeln!(
        out,
        "{} {}  {}",
        header.author_name.bold(),
        format!("({})", header.author_role).dimmed(),
        header.time.text.cyan()
    );
    let _ = writeln!(out, "{}", header.time.title.dimmed());
    let _ = writeln!(out, "{}", format!("avatar: {}", header.avatar_url).dimmed());
    out.push('\n');

    for line in &render.body {
        match line {
            BodyLine::Text { text } => {
                let _ = writeln!(out, "{}", text);
            }
            BodyLine::Anchor { text, href } => {
                let _ = writeln!(out, "{} {}", text.green().underline(), format!("<{}>", href).dimmed());
            }
        }
    }
    out.push('\n');

    let _ = writeln!(
        out,
        "{}",
        format!("{} ({})", render.form.label, render.comments.len()).bold()
    );
    for comment in &render.comments {
        let _ = writeln!(
            out,
            "  {} {} {}",
            "•".green(),
            comment.author.as_deref().unwrap_or("Anônimo").bold(),
            comment.created.dimmed()
        );
        for text_line in comment.content.lines() {
            let _ = writeln!(out, "    {}", text_line);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedpost_core::post::{Author, ContentLine, Post};
    use feedpost_core::types::PostId;

    fn test_render() -> PostRender {
        let post = Post {
            id: PostId(1),
            author: Author {
                name: "Diego Fernandes".to_string(),
                role: "CTO @Rocketseat".to_string(),
                avatar_url: "https://github.com/diego3g.png".to_string(),
            },
            published_at: DateTime::parse_from_rfc3339("2024-01-10T15:30:00-03:00").unwrap(),
            content: vec![
                ContentLine::Paragraph("Fala galera".to_string()),
                ContentLine::Link("jane.design/doctorcare".to_string()),
            ],
        };
        let now = parse_now("2024-01-13T15:30:00-03:00").unwrap();
        PostView::new(post).render(&now)
    }

    #[test]
    fn test_parse_now() {
        assert!(parse_now("2024-01-13T15:30:00-03:00").is_ok());
        assert!(parse_now("yesterday").is_err());
    }

    #[test]
    fn test_format_text() {
        colored::control::set_override(false);
        let text = format_text(&test_render());

        assert!(text.contains("Diego Fernandes (CTO @Rocketseat)  há 3 dias"));
        assert!(text.contains("10 de janeiro às 15:30h"));
        assert!(text.contains("Fala galera"));
        assert!(text.contains("jane.design/doctorcare <#>"));
        assert!(text.contains("Deixe seu feedback (1)"));
        assert!(text.contains("Post muito bacana, heim?!"));
    }
}
