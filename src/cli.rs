use crate::console::Console;
use crate::questionnaire::{run_questionnaire, QuestionnaireOutcome, QuestionnaireRun, SavePolicy};
use chrono::{DateTime, Local};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rann_saka::config::AppConfig;
use rann_saka::error::AppError;
use rann_saka::evaluation::{Catalog, EvaluationMode};
use rann_saka::report::{FileReportSink, ReportFormat};
use rann_saka::telemetry;
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "rann-saka",
    about = "Estimate the likelihood of unfounded criticism or accusations from a yes/no questionnaire",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the questionnaire for one mode, skipping the menu
    Evaluate(EvaluateArgs),
    /// List the indicators of a catalog without asking anything
    Catalog(CatalogArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum ModeArg {
    General,
    Cybersecurity,
}

impl From<ModeArg> for EvaluationMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::General => EvaluationMode::General,
            ModeArg::Cybersecurity => EvaluationMode::Cybersecurity,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// Questionnaire to run
    #[arg(long, value_enum)]
    mode: ModeArg,
    #[command(flatten)]
    engine: EngineArgs,
    /// Save the report without asking
    #[arg(long, conflicts_with = "no_save")]
    save: bool,
    /// Discard the results without asking
    #[arg(long)]
    no_save: bool,
}

#[derive(Args, Debug, Default)]
struct EngineArgs {
    /// Disable the random jitter applied to weights before scoring
    #[arg(long)]
    no_randomize: bool,
    /// Seed for the weight jitter, for reproducible scores
    #[arg(long)]
    seed: Option<u64>,
    /// Directory that receives saved reports
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Encoding of saved reports
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
    /// CSV catalog (category,label,description,tier,weight) replacing the built-in questions
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// Catalog to list
    #[arg(long, value_enum)]
    mode: ModeArg,
    /// CSV catalog to validate and list instead of the built-in one
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Emit JSON instead of a text listing
    #[arg(long)]
    json: bool,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    // captured once; every report written by this process carries it
    let started_at = Local::now();

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "configuration loaded");

    match cli.command {
        None => run_menu(config, EngineArgs::default(), started_at),
        Some(Command::Evaluate(args)) => run_evaluate(config, args, started_at),
        Some(Command::Catalog(args)) => list_catalog(args),
    }
}

fn run_menu(
    config: AppConfig,
    engine: EngineArgs,
    started_at: DateTime<Local>,
) -> Result<(), AppError> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    console.print_banner()?;
    let Some(mode) = console.choose_mode()? else {
        return Ok(());
    };

    evaluate(
        &mut console,
        config,
        mode,
        engine,
        SavePolicy::Ask,
        started_at,
    )
}

fn run_evaluate(
    config: AppConfig,
    args: EvaluateArgs,
    started_at: DateTime<Local>,
) -> Result<(), AppError> {
    let EvaluateArgs {
        mode,
        engine,
        save,
        no_save,
    } = args;

    let policy = match (save, no_save) {
        (true, _) => SavePolicy::Always,
        (_, true) => SavePolicy::Never,
        _ => SavePolicy::Ask,
    };

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    evaluate(&mut console, config, mode.into(), engine, policy, started_at)
}

fn evaluate<R: io::BufRead, W: io::Write>(
    console: &mut Console<R, W>,
    config: AppConfig,
    mode: EvaluationMode,
    engine: EngineArgs,
    save: SavePolicy,
    started_at: DateTime<Local>,
) -> Result<(), AppError> {
    let EngineArgs {
        no_randomize,
        seed,
        output_dir,
        format,
        catalog,
    } = engine;

    let mut settings = config.engine.settings();
    if no_randomize {
        settings.randomize = false;
    }

    let catalog = load_catalog(mode, catalog)?;
    let sink = FileReportSink::new(
        output_dir.unwrap_or(config.report.output_dir),
        format.map(ReportFormat::from).unwrap_or(config.report.format),
    );

    let outcome = run_questionnaire(
        console,
        &sink,
        QuestionnaireRun {
            catalog,
            settings,
            seed: seed.or(config.engine.seed),
            save,
            started_at,
        },
    )?;

    if outcome == QuestionnaireOutcome::Aborted {
        info!(%mode, "session abandoned before scoring");
    }
    Ok(())
}

fn load_catalog(mode: EvaluationMode, path: Option<PathBuf>) -> Result<Catalog, AppError> {
    match path {
        Some(path) => {
            let catalog = Catalog::from_path(mode, &path)?;
            info!(path = %path.display(), indicators = catalog.indicator_count(), "custom catalog loaded");
            Ok(catalog)
        }
        None => Ok(Catalog::standard(mode)),
    }
}

#[derive(Debug, Serialize)]
struct CatalogEntry<'a> {
    category: &'a str,
    key: bool,
    label: &'a str,
    description: &'a str,
    tier: u8,
    weight: f64,
}

fn list_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let CatalogArgs {
        mode,
        catalog,
        json,
    } = args;
    let catalog = load_catalog(mode.into(), catalog)?;

    if json {
        let entries: Vec<CatalogEntry<'_>> = catalog
            .categories()
            .iter()
            .flat_map(|category| {
                category
                    .indicators()
                    .iter()
                    .enumerate()
                    .map(move |(position, indicator)| CatalogEntry {
                        category: category.name(),
                        key: position == 0,
                        label: indicator.label(),
                        description: indicator.description(),
                        tier: indicator.tier().level(),
                        weight: indicator.base_weight(),
                    })
            })
            .collect();
        let body = serde_json::to_string_pretty(&entries)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        println!("{body}");
        return Ok(());
    }

    println!(
        "{} ({} indicators)",
        catalog.mode().label(),
        catalog.indicator_count()
    );
    for category in catalog.categories() {
        println!("\nCategory: {}", category.name());
        for (position, indicator) in category.indicators().iter().enumerate() {
            let marker = if position == 0 { "*" } else { "-" };
            println!(
                "{marker} [tier {}] {:.2} {}",
                indicator.tier().level(),
                indicator.base_weight(),
                indicator.label()
            );
        }
    }
    println!("\n* key indicator");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_flags_parse() {
        let cli = Cli::try_parse_from([
            "rann-saka",
            "evaluate",
            "--mode",
            "cybersecurity",
            "--no-randomize",
            "--seed",
            "7",
            "--format",
            "json",
            "--no-save",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Evaluate(args)) => {
                assert_eq!(args.mode, ModeArg::Cybersecurity);
                assert!(args.engine.no_randomize);
                assert_eq!(args.engine.seed, Some(7));
                assert_eq!(args.engine.format, Some(FormatArg::Json));
                assert!(args.no_save);
                assert!(!args.save);
            }
            other => panic!("expected evaluate command, got {other:?}"),
        }
    }

    #[test]
    fn save_and_no_save_conflict() {
        let result = Cli::try_parse_from([
            "rann-saka",
            "evaluate",
            "--mode",
            "general",
            "--save",
            "--no-save",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn no_subcommand_runs_the_menu() {
        let cli = Cli::try_parse_from(["rann-saka"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
