// ETS report CLI
//
// Purpose: Render the questionnaire, evaluations and center details from the command line
// Usage: cargo run --features cli --bin ets_report -- evaluate 1 4 --format html

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ets_infoplus::report::NO_SELECTION_MESSAGE;
use ets_infoplus::{
    center_card, checklist, city_directory, evaluate, HtmlFormatter, JsonFormatter,
    MarkdownFormatter, ReportConfig, ReportError, ReportFormat,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(
    name = "ets_report",
    version,
    about = "ETS InfoPlus: symptom checklist, condition suggestions and medical centers",
    after_help = "Suggestions are orientation only. Consult a medical professional for a diagnosis."
)]
struct Cli {
    /// Output format (markdown, html or json); overrides ETS_REPORT_FORMAT
    #[arg(long, short, global = true)]
    format: Option<ReportFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
enum Command {
    /// Suggest conditions for the selected symptom ids
    Evaluate {
        /// Symptom ids from the checklist
        ids: Vec<u32>,
    },

    /// Show the medical center with this id
    Center {
        id: u32,
    },

    /// List the symptom checklist
    Checklist,

    /// List the city directory
    Cities,
}

impl Cli {
    /// Command-line format wins over the configured one
    fn resolve_format(&self, config: &ReportConfig) -> ReportFormat {
        self.format.unwrap_or(config.format)
    }
}

fn render(command: &Command, format: ReportFormat) -> Result<String> {
    let output = match command {
        Command::Evaluate { ids } => match evaluate(ids) {
            Ok(report) => match format {
                ReportFormat::Markdown => MarkdownFormatter::format_evaluation(&report),
                ReportFormat::Html => HtmlFormatter::format_evaluation(&report),
                ReportFormat::Json => JsonFormatter::format(&report)?,
            },
            // Not a failure: the widget shows an alert and waits for input
            Err(ReportError::NoSymptomsSelected) => match format {
                ReportFormat::Markdown => MarkdownFormatter::format_alert(NO_SELECTION_MESSAGE),
                ReportFormat::Html => HtmlFormatter::format_alert(NO_SELECTION_MESSAGE),
                ReportFormat::Json => JsonFormatter::format_alert(NO_SELECTION_MESSAGE)?,
            },
            Err(e) => return Err(e.into()),
        },
        Command::Center { id } => {
            let card = center_card(*id)?;
            match format {
                ReportFormat::Markdown => MarkdownFormatter::format_center(&card),
                ReportFormat::Html => HtmlFormatter::format_center(&card),
                ReportFormat::Json => JsonFormatter::format(&card)?,
            }
        }
        Command::Checklist => {
            let checklist = checklist();
            match format {
                ReportFormat::Markdown => MarkdownFormatter::format_checklist(&checklist),
                ReportFormat::Html => HtmlFormatter::format_checklist(&checklist),
                ReportFormat::Json => JsonFormatter::format(&checklist)?,
            }
        }
        Command::Cities => {
            let directory = city_directory();
            match format {
                ReportFormat::Markdown => MarkdownFormatter::format_city_directory(&directory),
                ReportFormat::Html => HtmlFormatter::format_city_directory(&directory),
                ReportFormat::Json => JsonFormatter::format(&directory)?,
            }
        }
    };

    Ok(output)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ReportConfig::from_env().context("invalid environment configuration")?;

    // Initialize tracing (logs to stderr so stdout stays clean for the report)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let format = cli.resolve_format(&config);
    tracing::debug!("Rendering as {}", format);

    let output = render(&cli.command, format)?;
    println!("{}", output.trim_end());

    Ok(())
}
