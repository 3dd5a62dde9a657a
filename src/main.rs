mod assess;
mod cli;
mod config;
mod detect;
mod error;
mod load;
mod report;
mod review;
mod score;
mod telemetry;
mod types;

use crate::error::SfiError;
use crate::types::config::{ReportFormatSetting, SfiConfig};
use clap::Parser;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BELOW_THRESHOLD: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(
    requested: Option<cli::ReportFormat>,
    config: Option<&SfiConfig>,
) -> report::OutputFormat {
    match requested {
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        None => match config.and_then(|cfg| cfg.report_format()) {
            Some(ReportFormatSetting::Json) => report::OutputFormat::Json,
            Some(ReportFormatSetting::Md) | None => report::OutputFormat::Md,
        },
    }
}

fn run_score(cmd: cli::ScoreCommand, config: Option<&SfiConfig>) -> Result<i32, SfiError> {
    let files = load::discover(&cmd.path, cmd.output.as_deref())?;
    let batch = load::load_all(&files, cmd.path.is_dir())?;
    if batch.loaded.is_empty() {
        return Err(SfiError::NoEvidence(cmd.path.display().to_string()));
    }

    let mut overrides = config.map(|cfg| cfg.overrides()).unwrap_or_default();
    overrides.extend(cmd.overrides.iter().cloned());
    let reviewer = config.and_then(|cfg| cfg.reviewer());

    let assessments: Vec<_> = batch
        .loaded
        .iter()
        .map(|loaded| assess::assess(loaded, &overrides, reviewer))
        .collect();

    let format = output_format(cmd.format, config);
    let rendered = report::render(
        &assessments,
        format,
        config.and_then(|cfg| cfg.project_name()),
    )?;
    match &cmd.output {
        Some(path) => {
            report::export(path, &rendered)?;
            println!("report written to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    let fail_under = cmd.fail_under.or(config.and_then(|cfg| cfg.fail_under()));
    let below_threshold = fail_under
        .map(|threshold| {
            assessments
                .iter()
                .any(|assessment| assessment.breakdown.total < threshold)
        })
        .unwrap_or(false);
    let has_ignored = assessments
        .iter()
        .any(|assessment| !assessment.ignored_overrides.is_empty());

    if below_threshold {
        Ok(exit_code::BELOW_THRESHOLD)
    } else if has_ignored || batch.skipped > 0 {
        Ok(exit_code::WARNINGS)
    } else {
        Ok(exit_code::SUCCESS)
    }
}

fn run_detect(cmd: cli::DetectCommand, config: Option<&SfiConfig>) -> Result<i32, SfiError> {
    let format = output_format(cmd.format, config);
    let files = load::discover(&cmd.path, None)?;
    let batch = load::load_all(&files, cmd.path.is_dir())?;
    if batch.loaded.is_empty() {
        return Err(SfiError::NoEvidence(cmd.path.display().to_string()));
    }

    let mut sections = Vec::new();
    for loaded in &batch.loaded {
        let detection = detect::detect(&loaded.evidence);
        sections.push(report::render_detection(
            &loaded.path.display().to_string(),
            &detection,
            format,
        )?);
    }
    println!("{}", sections.join("\n"));

    if batch.skipped > 0 {
        Ok(exit_code::WARNINGS)
    } else {
        Ok(exit_code::SUCCESS)
    }
}

fn run() -> Result<i32, SfiError> {
    let cli = cli::Cli::parse();

    let config = match cli.command.config_root() {
        Some(root) if root.is_dir() => config::load_config(&root)?,
        _ => None,
    };
    telemetry::init(&telemetry::level_for(
        cli.verbose,
        cli.quiet,
        config.as_ref().and_then(|cfg| cfg.log_level()),
    ));

    match cli.command {
        cli::Commands::Score(cmd) => run_score(cmd, config.as_ref()),
        cli::Commands::Detect(cmd) => run_detect(cmd, config.as_ref()),
        cli::Commands::Rules(cmd) => {
            let format = output_format(Some(cmd.format), None);
            println!("{}", report::render_rules(format)?);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
