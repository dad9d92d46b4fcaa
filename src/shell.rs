//! Interactive text shell for playing a puzzle over stdin/stdout.
//!
//! The shell is the UI binding around a [`Game`]: it reads one command per
//! line, applies it, and prints the refreshed board. The command set is
//! deliberately small:
//!
//! - `click <row> <col>` - select, deselect or move, exactly like a tap
//! - `moves <row> <col>` - list the legal hops from a cell
//! - `show` - print the live board with selection and target markers
//! - `preview` - print the static starting position
//! - `count` - print the move counter
//! - `reset` - restart the puzzle
//! - `sound on|off` - toggle the move sound
//! - `help` - list commands
//! - `quit` - leave
//!
//! A committed move rings the terminal bell when sound is on; that is the
//! whole audio integration, and a surface that swallows it loses nothing.

use std::io::{self, BufRead, Write};

use crate::game::{ClickOutcome, Game};
use crate::layout::Layout;
use crate::render::{GridRenderer, Render, render_preview};

/// The list of known shell commands.
const KNOWN_COMMANDS: &[&str] = &[
    "click", "count", "help", "moves", "preview", "quit", "reset", "show", "sound",
];

/// Interactive shell state.
pub struct Shell {
    game: Game,
    renderer: GridRenderer,
    sound: bool,
}

impl Shell {
    pub fn new(layout: Layout) -> Self {
        Self {
            game: Game::new(layout),
            renderer: GridRenderer::new(),
            sound: true,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop, reading from stdin and writing to stdout.
    ///
    /// The loop ends on `quit`, end of input, or a failed write (a missing
    /// output surface aborts silently rather than panicking).
    pub fn run(&mut self) {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        if self.print_board(&mut stdout).is_err() {
            return;
        }

        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(_) => break,
            };

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (ok, message) = self.execute(&command, args);
            let prefix = if ok { "" } else { "? " };
            if !message.is_empty() && writeln!(stdout, "{prefix}{message}").is_err() {
                return;
            }
            if ok && matches!(command.as_str(), "click" | "reset") {
                if self.print_board(&mut stdout).is_err() {
                    return;
                }
            }
            if stdout.flush().is_err() {
                return;
            }

            if command == "quit" {
                break;
            }
        }
    }

    fn print_board(&mut self, out: &mut impl Write) -> io::Result<()> {
        self.renderer.render_full(&self.game);
        write!(out, "{}", self.renderer.frame())?;
        writeln!(out, "moves: {}", self.game.move_count())?;
        if let Some(message) = self.game.message() {
            writeln!(out, "{message}")?;
        }
        Ok(())
    }

    fn parse_pos(args: &[&str]) -> Option<(usize, usize)> {
        if args.len() < 2 {
            return None;
        }
        let r = args[0].parse().ok()?;
        let c = args[1].parse().ok()?;
        Some((r, c))
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "click" => {
                let (r, c) = match Self::parse_pos(args) {
                    Some(pos) => pos,
                    None => return (false, "usage: click <row> <col>".to_string()),
                };
                let outcome = self.game.click(r, c);
                let reply = match outcome {
                    ClickOutcome::Ignored => String::new(),
                    ClickOutcome::Selected((r, c)) => format!("selected ({r}, {c})"),
                    ClickOutcome::Deselected => "deselected".to_string(),
                    ClickOutcome::Moved { from, to, .. } => {
                        // Terminal bell on a committed move, when enabled.
                        let bell = if self.sound { "\u{7}" } else { "" };
                        format!(
                            "{bell}moved ({}, {}) -> ({}, {})",
                            from.0, from.1, to.0, to.1
                        )
                    }
                };
                (true, reply)
            }

            "moves" => {
                let (r, c) = match Self::parse_pos(args) {
                    Some(pos) => pos,
                    None => return (false, "usage: moves <row> <col>".to_string()),
                };
                let dests = crate::moves::legal_destinations(self.game.board(), (r, c));
                if dests.is_empty() {
                    (true, "no legal moves".to_string())
                } else {
                    let list: Vec<String> = dests
                        .iter()
                        .map(|(r, c)| format!("({r}, {c})"))
                        .collect();
                    (true, list.join(" "))
                }
            }

            "show" => {
                self.renderer.render_full(&self.game);
                (true, self.renderer.frame().trim_end().to_string())
            }

            "preview" => (true, render_preview(self.game.layout()).trim_end().to_string()),

            "count" => (true, self.game.move_count().to_string()),

            "reset" => {
                self.game.reset();
                (true, "reset".to_string())
            }

            "sound" => match args.first() {
                Some(&"on") => {
                    self.sound = true;
                    (true, "sound on".to_string())
                }
                Some(&"off") => {
                    self.sound = false;
                    (true, "sound off".to_string())
                }
                _ => (false, "usage: sound on|off".to_string()),
            },

            "help" => (true, KNOWN_COMMANDS.join(" ")),

            "quit" => (true, String::new()),

            _ => (false, format!("unknown command: {command}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell() -> Shell {
        Shell::new(Layout::default())
    }

    #[test]
    fn test_click_selects_and_moves() {
        let mut sh = shell();
        let (ok, reply) = sh.execute("click", &["3", "0"]);
        assert!(ok);
        assert_eq!(reply, "selected (3, 0)");

        let (ok, reply) = sh.execute("click", &["1", "1"]);
        assert!(ok);
        // Sound is on by default, so the reply carries the bell.
        assert_eq!(reply, "\u{7}moved (3, 0) -> (1, 1)");
        assert_eq!(sh.game().move_count(), 1);
    }

    #[test]
    fn test_move_without_sound_has_no_bell() {
        let mut sh = shell();
        sh.execute("sound", &["off"]);
        sh.execute("click", &["3", "0"]);
        let (ok, reply) = sh.execute("click", &["1", "1"]);
        assert!(ok);
        assert_eq!(reply, "moved (3, 0) -> (1, 1)");
    }

    #[test]
    fn test_click_ignored_stays_quiet() {
        let mut sh = shell();
        let (ok, reply) = sh.execute("click", &["0", "0"]);
        assert!(ok);
        assert!(reply.is_empty());
        assert_eq!(sh.game().move_count(), 0);
    }

    #[test]
    fn test_click_usage() {
        let mut sh = shell();
        let (ok, _) = sh.execute("click", &["3"]);
        assert!(!ok);
        let (ok, _) = sh.execute("click", &["x", "y"]);
        assert!(!ok);
    }

    #[test]
    fn test_moves_command() {
        let mut sh = shell();
        let (ok, reply) = sh.execute("moves", &["3", "0"]);
        assert!(ok);
        assert_eq!(reply, "(1, 1)");

        let (ok, reply) = sh.execute("moves", &["0", "1"]);
        assert!(ok);
        assert_eq!(reply, "no legal moves");
    }

    #[test]
    fn test_reset_command() {
        let mut sh = shell();
        sh.execute("click", &["3", "0"]);
        sh.execute("click", &["1", "1"]);
        let (ok, _) = sh.execute("reset", &[]);
        assert!(ok);
        assert_eq!(sh.game().move_count(), 0);
        assert_eq!(sh.game().selected(), None);
    }

    #[test]
    fn test_sound_toggle() {
        let mut sh = shell();
        let (ok, reply) = sh.execute("sound", &["off"]);
        assert!(ok);
        assert_eq!(reply, "sound off");
        let (ok, _) = sh.execute("sound", &["loud"]);
        assert!(!ok);
    }

    #[test]
    fn test_unknown_command() {
        let mut sh = shell();
        let (ok, reply) = sh.execute("frobnicate", &[]);
        assert!(!ok);
        assert!(reply.contains("unknown command"));
    }

    #[test]
    fn test_count_command() {
        let mut sh = shell();
        sh.execute("click", &["3", "0"]);
        sh.execute("click", &["1", "1"]);
        let (ok, reply) = sh.execute("count", &[]);
        assert!(ok);
        assert_eq!(reply, "1");
    }
}
