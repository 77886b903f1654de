use console::Style;
use itertools::Itertools;
use killer_game::assignment::{Assignment, Duty};

pub fn render_player_list(roster: &[String]) -> String {
    let mut lines = vec![
        Style::new().bold().apply_to("Player list").to_string(),
        "-".repeat(30),
    ];
    for (i, player) in roster.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, player));
    }
    lines.join("\n")
}

pub fn render_duty(player: &str, duty: &Duty) -> String {
    format!(
        "{}'s target: {}\n{}'s task: {}",
        player,
        Style::new().red().apply_to(&duty.target),
        player,
        Style::new().cyan().apply_to(&duty.task),
    )
}

pub fn render_all_duties(assignment: &Assignment) -> String {
    let rule = "=".repeat(60);
    let body = assignment
        .iter()
        .sorted_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(player, duty)| format!("{} → Target: {} | Task: {}", player, duty.target, duty.task))
        .join("\n");
    format!(
        "{}\n{}\n{}\n{}\n{}",
        rule,
        Style::new().bold().apply_to("ALL ASSIGNMENTS (DEBUG MODE)"),
        rule,
        body,
        rule,
    )
}
