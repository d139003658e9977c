use std::path::PathBuf;
use std::process::ExitCode;

use clap::arg;
use clap::command;
use clap::ArgMatches;
use clap::Command;
use log::error;

use tower_chess::board::{Board, BoardSize};
use tower_chess::game::{Session, SessionConfig, DEFAULT_HISTORY_DIR};
use tower_chess::ui::terminal::{preload, run_terminal_interface};

fn cli() -> Command {
    command!()
        .propagate_version(true)
        .arg(arg!(
            -d --debug "Turn debugging information on"
        ))
        .subcommand(
            Command::new("play")
                .about("Play a match in the terminal")
                .arg(arg!(--width <WIDTH> "Board width, skips the first prompt"))
                .arg(
                    arg!(--height <HEIGHT> "Board height, skips the second prompt")
                        .requires("width"),
                )
                .arg(
                    arg!(--"history-dir" <DIR> "Directory for game history files")
                        .default_value(DEFAULT_HISTORY_DIR),
                )
                .arg(arg!(--"no-history" "Do not write a history file")),
        )
        .subcommand(
            Command::new("board")
                .about("Print the starting position and exit")
                .arg(
                    arg!(--width <WIDTH> "Board width")
                        .default_value("8")
                        .value_parser(clap::value_parser!(u8)),
                )
                .arg(
                    arg!(--height <HEIGHT> "Board height")
                        .default_value("8")
                        .value_parser(clap::value_parser!(u8)),
                ),
        )
}

fn main() -> ExitCode {
    let matches = cli().get_matches();

    let level = if matches.get_flag("debug") { "debug" } else { "warn" };
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(level));

    match matches.subcommand() {
        Some(("play", arg_matches)) => play(Some(arg_matches)),
        Some(("board", arg_matches)) => print_board(arg_matches),
        None => play(None),
        _ => unreachable!("Exhausted list of subcommands"),
    }
}

fn play(arg_matches: Option<&ArgMatches>) -> ExitCode {
    let mut config = SessionConfig::default();
    let mut answers = Vec::new();

    if let Some(arg_matches) = arg_matches {
        if arg_matches.get_flag("no-history") {
            config.history_dir = None;
        } else if let Some(dir) = arg_matches.get_one::<String>("history-dir") {
            config.history_dir = Some(PathBuf::from(dir));
        }
        // clap refuses --height without --width.
        if let Some(width) = arg_matches.get_one::<String>("width") {
            answers.push(width.clone());
            if let Some(height) = arg_matches.get_one::<String>("height") {
                answers.push(height.clone());
            }
        }
    }

    let (session, frame) = preload(Session::new(config), &answers);
    match run_terminal_interface(session, frame) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Terminal I/O failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_board(arg_matches: &ArgMatches) -> ExitCode {
    let width = *arg_matches.get_one::<u8>("width").unwrap_or(&8);
    let height = *arg_matches.get_one::<u8>("height").unwrap_or(&8);

    match BoardSize::new(width, height) {
        Ok(size) => {
            print!("{}", Board::initial(size).render_to_string());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
