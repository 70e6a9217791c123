use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Dataset JSON file (default: the embedded catalog).
    #[arg(long, global = true)]
    pub dataset: Option<String>,

    /// Books rendered per "show more" step.
    #[arg(long, global = true)]
    pub page_size: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the preview list, optionally filtered, as an HTML snapshot.
    Render(RenderArgs),
    /// Open the detail overlay for one rendered preview.
    Show(ShowArgs),
    /// Print the author and genre dropdown options.
    Options,
    /// Replay a YAML gesture script and write the final HTML snapshot.
    Replay(ReplayArgs),
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Case-insensitive title substring.
    #[arg(long)]
    pub title: Option<String>,

    /// Author id, or `any`.
    #[arg(long)]
    pub author: Option<String>,

    /// Genre id, or `any`.
    #[arg(long)]
    pub genre: Option<String>,

    /// Number of "show more" clicks after the first page.
    #[arg(long, default_value_t = 0)]
    pub more: usize,

    /// Theme to submit through the settings form (`day` or `night`).
    #[arg(long)]
    pub theme: Option<String>,

    /// Output HTML file (default: stdout).
    #[arg(long)]
    pub out: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Preview identifier (book id).
    #[arg(long)]
    pub id: String,

    /// Number of "show more" clicks before clicking the preview.
    #[arg(long, default_value_t = 0)]
    pub more: usize,

    /// Write the HTML snapshot here instead of printing the detail text.
    #[arg(long)]
    pub out: Option<String>,
}

#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// Input path to the gesture script (YAML).
    #[arg(long)]
    pub script: String,

    /// Output HTML file (default: stdout).
    #[arg(long)]
    pub out: Option<String>,
}
