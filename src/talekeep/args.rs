use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "talekeep")]
#[command(about = "Local reading-progress and preference tracker for story libraries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the data directory (also: TALEKEEP_HOME)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Path to the story catalog (defaults to the configured catalog-file)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalog stories with local reading state
    #[command(alias = "ls")]
    List {
        /// Search term (title, description, genre, tags, author)
        #[arg(short, long)]
        search: Option<String>,

        /// Only bookmarked stories
        #[arg(long)]
        bookmarked: bool,

        /// Only completed stories
        #[arg(long)]
        completed: bool,
    },

    /// Record a progress sample for a story (percent, clamped to 0-100)
    #[command(alias = "p")]
    Progress {
        /// Story id (catalog slug)
        story: String,

        /// Percent of the story read
        percent: f64,
    },

    /// Mark a story as completed
    Complete {
        /// Story id (catalog slug)
        story: String,
    },

    /// Toggle a story's bookmark
    #[command(alias = "b")]
    Bookmark {
        /// Story id (catalog slug)
        story: String,
    },

    /// Show one story's reading record
    #[command(alias = "v")]
    View {
        /// Story id (catalog slug)
        story: String,
    },

    /// Stamp the start of a reading session
    Start {
        /// Story id (catalog slug)
        story: String,
    },

    /// Log a finished reading session's elapsed time
    Session {
        /// Story id (catalog slug)
        story: String,

        /// Elapsed seconds of visible reading time
        seconds: u64,
    },

    /// Show aggregate reading statistics
    Stats,

    /// Show or set the theme (light | dark)
    Theme {
        /// New theme; omit to print the current one
        theme: Option<String>,
    },

    /// Adjust font settings: bigger | smaller | reset | serif | default
    Font {
        /// What to do
        action: String,

        /// Adjust the in-story reader size instead of the site chrome
        #[arg(long)]
        reader: bool,

        /// Step in pixels for bigger/smaller
        #[arg(long, default_value_t = 2)]
        step: i32,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., completion-threshold)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the data directory
    Init,
}
