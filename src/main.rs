use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use quiz_browser::data::format;
use quiz_browser::{question_source, Browser, LoadStatus, QuestionsController, Settings, SourceKind};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML settings file (defaults to ./quiz-browser.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Where the questions come from
    #[arg(short, long, value_enum, global = true)]
    source: Option<SourceKind>,

    /// Base URL of the question backend
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Only show questions whose text contains this
    #[arg(short, long, global = true)]
    filter: Option<String>,

    /// JSON or pipe-separated question file for the file source
    #[arg(short, long, global = true)]
    questions: Option<PathBuf>,

    /// Route to open
    #[arg(long, global = true)]
    path: Option<String>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse the questions in the terminal
    Browse,
    /// Load the questions and print them
    Dump {
        #[arg(long, value_enum, default_value_t = DumpFormat::Json)]
        format: DumpFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DumpFormat {
    Json,
    Csv,
}

impl Args {
    fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = Settings::load(self.config.as_deref())?;
        if let Some(source) = self.source {
            settings.source = source;
        }
        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(filter) = &self.filter {
            settings.filter = Some(filter.clone());
        }
        if let Some(questions) = &self.questions {
            settings.questions_path = Some(questions.clone());
            if self.source.is_none() {
                settings.source = SourceKind::File;
            }
        }
        if let Some(path) = &self.path {
            settings.start_path = path.clone();
        }
        Ok(settings)
    }
}

fn init_logging(log_file: Option<&PathBuf>, filter: &str) -> anyhow::Result<()> {
    // The terminal belongs to the UI, so logs only go to a file.
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

async fn dump(settings: &Settings, output: DumpFormat) -> anyhow::Result<()> {
    let mut controller = QuestionsController::new(question_source(settings)?, settings.question_filter());
    controller.settle().await;

    if let LoadStatus::Failed(message) = controller.status() {
        bail!("failed to load questions: {message}");
    }

    let questions = controller.questions_list();
    match output {
        DumpFormat::Json => println!("{}", format::to_json(questions)?),
        DumpFormat::Csv => print!("{}", format::to_csv(questions)?),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = args.settings()?;
    init_logging(args.log_file.as_ref(), &settings.log_filter)?;

    match args.command.unwrap_or(Command::Browse) {
        Command::Browse => Browser::from_settings(&settings)?.run().await?,
        Command::Dump { format } => dump(&settings, format).await?,
    }

    Ok(())
}
