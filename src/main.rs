use std::{io, path::PathBuf, process::ExitCode};

use charvel::{
    art::welcome_message,
    repl::{CONTINUATION_PROMPT, LoopControl, PROMPT, finish_session, process_command},
    storage::{config::StorageConfig, table::Table},
    types::{DEFAULT_DB_PATH, MAX_PAGES, PAGE_SIZE, error::DatabaseError},
};
use clap::Parser;
use env_logger::{Builder, Env};
use log::error;
use rustyline::{DefaultEditor, error::ReadlineError};

#[derive(Parser, Debug)]
#[command(name = "charvel", version, about = "Single-table fixed-width record store")]
struct Cli {
    /// Backing file for the table
    #[arg(default_value = DEFAULT_DB_PATH)]
    path: PathBuf,

    /// Page size in bytes
    #[arg(long, default_value_t = PAGE_SIZE)]
    page_size: usize,

    /// Maximum number of pages the table may occupy
    #[arg(long, default_value_t = MAX_PAGES)]
    max_pages: usize,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Database(#[from] DatabaseError),
    #[error("Command read failure: {0}")]
    Readline(#[from] ReadlineError),
}

fn init_logger() {
    // RUST_LOG overrides the default, e.g. RUST_LOG=debug charvel
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();
}

fn read_multiline_command(rl: &mut DefaultEditor) -> Result<String, ReadlineError> {
    let mut input = String::new();
    let mut prompt = PROMPT;

    loop {
        let line = rl.readline(prompt)?;
        let trimmed_line = line.trim_end();

        // Trailing backslash continues the command on the next line
        if let Some(continued) = trimmed_line.strip_suffix('\\') {
            input.push_str(continued);
            input.push(' ');
            prompt = CONTINUATION_PROMPT;
        } else {
            input.push_str(trimmed_line);
            break;
        }
    }

    Ok(input)
}

fn shell_loop(rl: &mut DefaultEditor, table: &mut Table) -> Result<(), CliError> {
    let mut stdout = io::stdout();
    loop {
        match read_multiline_command(rl) {
            Ok(input) => {
                let command = input.trim();
                if command.is_empty() {
                    continue;
                }
                rl.add_history_entry(command)?;
                if process_command(command, table, &mut stdout)? == LoopControl::Exit {
                    return Ok(());
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(err) => return Err(err.into()),
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = StorageConfig::default()
        .with_page_size(cli.page_size)
        .with_max_pages(cli.max_pages);
    let mut table = Table::open_with_config(&cli.path, config)?;

    println!("{}", welcome_message("CHARVEL DB"));

    let outcome = match DefaultEditor::new() {
        Ok(mut rl) => shell_loop(&mut rl, &mut table),
        Err(err) => Err(err.into()),
    };
    finish_session(table, outcome)
}

fn main() -> ExitCode {
    init_logger();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
