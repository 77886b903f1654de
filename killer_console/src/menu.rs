use std::fmt;
use std::io;

use console::{Style, Term};
use killer_game::assignment::Assignment;
use killer_game::roster;

use crate::tui;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuCommand {
    Quit,
    RevealAll,
    // 0-based index into the sorted roster.
    Select(usize),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputError {
    NotANumber,
    OutOfRange { num_players: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotANumber => {
                write!(f, "Please enter a player number, 'all-debug' or 'quit'.")
            }
            InputError::OutOfRange { num_players } => {
                write!(f, "Invalid player number: expected a number between 1 and {num_players}.")
            }
        }
    }
}

// Input is trimmed and lowercased before dispatch, so "Quit" and "QUIT" work
// too. Anything that is not a keyword must be a 1-based roster index.
pub fn parse_command(input: &str, num_players: usize) -> Result<MenuCommand, InputError> {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "quit" => Ok(MenuCommand::Quit),
        "all-debug" => Ok(MenuCommand::RevealAll),
        _ => {
            let index = input.parse::<usize>().map_err(|_| InputError::NotANumber)?;
            if (1..=num_players).contains(&index) {
                Ok(MenuCommand::Select(index - 1))
            } else {
                Err(InputError::OutOfRange { num_players })
            }
        }
    }
}

pub fn run(players: &[String], assignment: &Assignment) -> io::Result<()> {
    let term = Term::stdout();
    let roster = roster::sorted(players);
    loop {
        term.clear_screen()?;
        term.write_line(&tui::render_player_list(&roster))?;
        term.write_str("Select a player number, or 'quit' to exit: ")?;
        let input = term.read_line()?;
        match parse_command(&input, roster.len()) {
            Ok(MenuCommand::Quit) => break,
            Ok(MenuCommand::RevealAll) => {
                term.clear_screen()?;
                term.write_line(&tui::render_all_duties(assignment))?;
                term.write_line("\nPress Enter to return to the main menu...")?;
                term.read_line()?;
            }
            Ok(MenuCommand::Select(index)) => {
                let player = &roster[index];
                term.clear_screen()?;
                match assignment.duty(player) {
                    Some(duty) => {
                        term.write_line(&tui::render_duty(player, duty))?;
                        term.write_line("\nPress Enter to continue or type 'quit' to exit...")?;
                        if term.read_line()?.trim().eq_ignore_ascii_case("quit") {
                            break;
                        }
                    }
                    None => {
                        term.write_line("Player not found in assignments.")?;
                        term.write_line("\nPress Enter to continue...")?;
                        term.read_line()?;
                    }
                }
            }
            Err(err) => {
                term.write_line(&Style::new().red().apply_to(err).to_string())?;
                term.write_line("Press Enter to continue...")?;
                term.read_line()?;
            }
        }
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(parse_command("quit", 3), Ok(MenuCommand::Quit));
        assert_eq!(parse_command("  QUIT  ", 3), Ok(MenuCommand::Quit));
        assert_eq!(parse_command("All-Debug", 3), Ok(MenuCommand::RevealAll));
    }

    #[test]
    fn valid_indices_are_one_based() {
        assert_eq!(parse_command("1", 3), Ok(MenuCommand::Select(0)));
        assert_eq!(parse_command("3", 3), Ok(MenuCommand::Select(2)));
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        assert_eq!(parse_command("0", 3), Err(InputError::OutOfRange { num_players: 3 }));
        assert_eq!(parse_command("4", 3), Err(InputError::OutOfRange { num_players: 3 }));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(parse_command("alice", 3), Err(InputError::NotANumber));
        assert_eq!(parse_command("-1", 3), Err(InputError::NotANumber));
        assert_eq!(parse_command("", 3), Err(InputError::NotANumber));
    }
}
