//! Galleon CLI entry point.

use std::env;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use galleon_events::{HookSet, HookTable};
use galleon_foundation::Response;
use galleon_interpreter::Session;
use galleon_runtime::{content, Repl};
use galleon_world::World;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    world_file: Option<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    for arg in args.into_iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            other if other.starts_with('-') => {
                return Err(format!("unknown option: {other}").into());
            }
            path => {
                if config.world_file.is_some() {
                    return Err("only one world file may be given".into());
                }
                config.world_file = Some(PathBuf::from(path));
            }
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("galleon {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Hooks are code, not data: a world loaded from a file runs without
    // them, while the built-in demo ship ships with its own hook set.
    let session = match &config.world_file {
        Some(path) => {
            let world_content = content::load_world(path)?;
            let (world, _issues) = World::from_content(world_content);
            let (hooks, _issues) = HookTable::build(HookSet::new());
            Session::new(world, hooks)
        }
        None => content::demo_session(),
    };

    if config.batch_mode {
        return run_batch(session);
    }

    Repl::new(session)?.run()?;
    Ok(())
}

/// Feeds stdin lines through the session, one response line per command.
/// Used by tooling and scripted play-throughs.
fn run_batch(mut session: Session) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match session.handle_line(&line) {
            Response::Text(text) => {
                if !text.is_empty() {
                    println!("{text}");
                }
            }
            Response::Error(text) => println!("{text}"),
            Response::Navigate(view) => println!("[{view}]"),
        }
    }
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mGalleon\x1b[0m - Text adventure engine

\x1b[1mUSAGE:\x1b[0m
    galleon [OPTIONS] [WORLD_FILE]

\x1b[1mARGUMENTS:\x1b[0m
    [WORLD_FILE]    JSON world content to load instead of the demo ship

\x1b[1mOPTIONS:\x1b[0m
    -h, --help       Print help information
    -V, --version    Print version information
    -b, --batch      Read commands from stdin and print responses (no editor)

\x1b[1mEXAMPLES:\x1b[0m
    galleon                      Play the demo ship
    galleon voyage.json          Play a world loaded from a file
    galleon -b < script.txt      Run a scripted play-through

Inside the game, type 'help' for the command list. The dimmed text after
the cursor is the suggestion engine's completion; accept it with the
Right arrow."
    );
}
