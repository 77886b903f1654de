use itertools::Itertools;

// One entry per line; surrounding whitespace is stripped and blank lines are
// skipped. Used for both the player list and the task list.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

// Display order for the menu: alphabetical, indexed from 1.
pub fn sorted(players: &[String]) -> Vec<String> {
    players.iter().cloned().sorted().collect()
}
