use crate::game::Session;
use log::debug;
use std::io::{self, BufRead, Write};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Feeds `answers` to the session as if they had been typed, e.g. board
/// dimensions given on the command line.
pub fn preload(session: Session, answers: &[String]) -> (Session, String) {
    let mut frame = session.frame();
    let mut session = session;
    for answer in answers {
        let (next, next_frame) = session.handle_input(answer.trim());
        session = next;
        frame = next_frame;
    }
    (session, frame)
}

/// Runs the line-oriented loop until the player exits or input ends.
pub fn run_terminal_interface(session: Session, first_frame: String) -> io::Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout();
    let mut session = session;

    write!(out, "{}{}", CLEAR_SCREEN, first_frame)?;
    out.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        debug!("Input: {}", line.trim());

        let (next, frame) = session.handle_input(line.trim());
        session = next;

        write!(out, "{}{}", CLEAR_SCREEN, frame)?;
        out.flush()?;

        if session.is_terminated() {
            break;
        }
    }
    writeln!(out)?;
    Ok(())
}
