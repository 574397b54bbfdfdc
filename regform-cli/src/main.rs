mod paths;
mod surface;

use std::fs::File;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::style::Stylize;
use log::{debug, error, info};
use regform_lib::driver::{FormHandle, spawn_form};
use regform_lib::{ConfigError, DriverError, FieldId, FormConfig, FormOrchestrator, SubmitOutcome};
use simplelog::{Config, LevelFilter, WriteLogger};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use surface::TerminalPresenter;

/// Line that quits the prompt loop.
const QUIT: &str = ":q";

/// Slack added after the reset delay before prompting again.
const RESET_SLACK: Duration = Duration::from_millis(50);

/// CLI error type.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Driver(#[from] DriverError),
    #[error("form task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

fn load_config() -> Result<FormConfig, ConfigError> {
    match paths::config_file() {
        Some(path) => {
            info!("Loading config from {}", path.display());
            FormConfig::from_file_or_default(path)
        }
        None => Ok(FormConfig::default()),
    }
}

fn prompt(field: FieldId) -> io::Result<()> {
    let mut out = io::stdout();
    write!(out, "{}: ", field.label().bold())?;
    out.flush()
}

/// Ask for each field in `fields`, validating each answer as it is entered.
///
/// Returns `false` if the user quit.
async fn collect(
    handle: &FormHandle,
    lines: &mut Lines<BufReader<Stdin>>,
    fields: &[FieldId],
) -> Result<bool, CliError> {
    for &field in fields {
        prompt(field)?;
        let Some(line) = lines.next_line().await? else {
            return Ok(false);
        };
        if line.trim() == QUIT {
            return Ok(false);
        }
        handle.input(field, line).await?;
        // Replies once the verdict has been printed
        let verdict = handle.blur(field).await?;
        debug!("{} verdict: {:?}", field, verdict);
    }
    Ok(true)
}

async fn run(config: FormConfig) -> Result<(), CliError> {
    let form = FormOrchestrator::new(&config, TerminalPresenter::new(io::stdout()))?;
    let reset_delay = form.reset_delay();
    let (handle, task) = spawn_form(form);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", "Registration".bold());
    println!("{}", format!("Enter {} to quit.", QUIT).dim());

    let mut pending = FieldId::ALL.to_vec();
    while collect(&handle, &mut lines, &pending).await? {
        match handle.submit().await? {
            SubmitOutcome::Completed(result) if result.all_valid() => {
                tokio::time::sleep(reset_delay + RESET_SLACK).await;
                pending = FieldId::ALL.to_vec();
            }
            SubmitOutcome::Completed(result) => {
                println!("{}", "Please fix the fields above.".yellow());
                pending = result.invalid_fields().collect();
            }
            SubmitOutcome::Ignored => {
                tokio::time::sleep(RESET_SLACK).await;
            }
        }
    }

    drop(handle);
    task.await?;
    info!("Registration form closed");
    Ok(())
}

#[tokio::main]
async fn main() {
    let log_path = paths::log_file();
    match File::create(&log_path) {
        Ok(log_file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
                eprintln!("Failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("Failed to create log file {}: {}", log_path.display(), e),
    }

    let result = match load_config() {
        Ok(config) => run(config).await,
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
