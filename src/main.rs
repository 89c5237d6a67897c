// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

//! `lumen` — REPL and one-shot file runner for the Lumen scripting language.
//!
//! With no subcommand, starts an interactive REPL: fixed prompt, read a
//! line, parse + evaluate it against a persistent top-level environment,
//! print either the parser error banner or the evaluated value's
//! `Inspect()` rendering. `lumen run <path>` does the same thing once
//! against a file's contents, then exits.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use lumen::{new_environment, run_file, run_source, Outcome};
use lumen_errors::render_errors;

const PROMPT: &str = ">> ";

#[derive(Parser)]
#[command(name = "lumen", about = "A small dynamically-typed scripting language", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the interactive REPL (the default with no subcommand).
    Repl,
    /// Parse and evaluate a single source file, then exit.
    Run {
        /// Path to a Lumen source file.
        path: std::path::PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => run_repl(),
        Command::Run { path } => run_one_shot(&path),
    }
}

fn run_repl() -> ExitCode {
    let env = new_environment();
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("{} could not start line editor: {err}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                print_outcome(run_source(&line, &env));
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{} {err}", "error:".red().bold());
                break;
            }
        }
    }

    ExitCode::SUCCESS
}

fn run_one_shot(path: &std::path::Path) -> ExitCode {
    let env = new_environment();
    match run_file(path, &env) {
        Ok(outcome) => {
            print_outcome(outcome);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} could not read {}: {err}", "error:".red().bold(), path.display());
            ExitCode::FAILURE
        }
    }
}

/// Prints the parser's error banner, or the evaluated value's `Inspect()`
/// rendering.
fn print_outcome(outcome: Outcome) {
    match outcome {
        Outcome::ParseErrors(errors) => {
            println!("{}", "-- parse failed --".yellow().bold());
            println!("{}", render_errors(&errors));
        }
        Outcome::Value(value) => println!("{}", value.inspect()),
    }
}
