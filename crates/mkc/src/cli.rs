//! Clap derive structures for the `mkc` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// mkc -- browse the Mario Kart Central registry
#[derive(Debug, Parser)]
#[command(
    name = "mkc",
    version,
    about = "Browse the Mario Kart Central player and team registry",
    long_about = "Look up players and teams on the Mario Kart Central registry.\n\n\
        Listings return shallow entries; pass --load to fetch every entry in full.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "MKC_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Registry site root (overrides config)
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (overrides config)
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// Permit a plain-HTTP base URL
    #[arg(long, global = true)]
    pub allow_http: bool,
}

impl GlobalOpts {
    pub fn format(&self) -> OutputFormat {
        self.output.clone().unwrap_or(OutputFormat::Table)
    }

    /// Fill `--output` from the configured default when the flag is absent.
    pub fn default_output(&mut self, configured: &str) {
        if self.output.is_none() {
            self.output = OutputFormat::from_str(configured, true).ok();
        }
    }
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one id per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show one player in full
    #[command(alias = "p")]
    Player(PlayerArgs),

    /// Show one team in full, rosters included
    #[command(alias = "t")]
    Team(TeamArgs),

    /// List players in a category
    #[command(alias = "ps")]
    Players(PlayersArgs),

    /// List teams in a category
    #[command(alias = "ts")]
    Teams(TeamsArgs),

    /// Inspect CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ENTITIES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct PlayerArgs {
    /// Registry player id
    pub id: u64,

    /// Also fetch every team the player is rostered on
    #[arg(long)]
    pub teams: bool,
}

#[derive(Debug, Args)]
pub struct TeamArgs {
    /// Registry team id
    pub id: u64,

    /// Only show the roster for this mode (150cc, 200cc, mktour_vs)
    #[arg(long, short = 'm')]
    pub mode: Option<String>,

    /// Fetch every rostered player in full
    #[arg(long)]
    pub resolve: bool,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  LISTINGS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct PlayersArgs {
    /// A category (all, 150cc, 200cc, mktour_vs, shadow) or a search term
    pub query: Option<String>,

    /// Category to list
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Two-letter country code or country name (ZZ = all)
    #[arg(long)]
    pub country: Option<String>,

    /// Sort order token (NA, ND, FA, FD, SFA, ..., RA, RD)
    #[arg(long)]
    pub order: Option<String>,

    /// Name search
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Fetch every listed player in full
    #[arg(long)]
    pub load: bool,
}

#[derive(Debug, Args)]
pub struct TeamsArgs {
    /// A category (active, 150cc, 200cc, mktour_vs, historical) or a search term
    pub query: Option<String>,

    /// Category to list
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Main language (all, English, French, German, Portuguese, Spanish, other)
    #[arg(long)]
    pub language: Option<String>,

    /// Sort order token (NA, ND, RA, RD, SA, SD)
    #[arg(long)]
    pub order: Option<String>,

    /// Name or tag search
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Fetch every listed team in full
    #[arg(long)]
    pub load: bool,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG & COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,

    /// Display current resolved configuration
    Show,

    /// Set a value and write the config file
    Set {
        /// base_url, timeout_secs, user_agent, allow_http or output
        key: String,

        value: String,
    },
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
