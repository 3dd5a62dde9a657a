use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "sfi",
    version,
    about = "Sustainable Formulation Index: score cosmetic formulations and suggest improvements"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a formulation file or every formulation under a directory
    Score(ScoreCommand),
    /// Print detected attributes without scoring
    Detect(DetectCommand),
    /// Print the detection rules and category weights
    Rules(RulesCommand),
}

impl Commands {
    /// Directory whose `sfi.toml` applies to this command.
    pub fn config_root(&self) -> Option<PathBuf> {
        let path = match self {
            Commands::Score(cmd) => &cmd.path,
            Commands::Detect(cmd) => &cmd.path,
            Commands::Rules(_) => return None,
        };
        if path.is_dir() {
            Some(path.clone())
        } else {
            path.parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .or_else(|| Some(PathBuf::from(".")))
        }
    }
}

#[derive(Args)]
pub struct ScoreCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Reviewer override, e.g. --set waterless=true (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_override_arg)]
    pub overrides: Vec<(String, bool)>,
    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Exit with code 2 when any formulation scores below this total
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub fail_under: Option<u32>,
}

#[derive(Args)]
pub struct DetectCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct RulesCommand {
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

fn parse_override_arg(raw: &str) -> Result<(String, bool), String> {
    crate::review::parse_override(raw).map_err(|e| e.to_string())
}
