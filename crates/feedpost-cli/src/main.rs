//! feedpost - view a feed post and its comment thread
//!
//! ## Quick Start
//!
//! ```bash
//! # Open the interactive view
//! feedpost view post.json
//!
//! # Keep the thread between runs
//! feedpost view post.json --comments thread.json
//!
//! # Print the post
//! feedpost show post.json
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
