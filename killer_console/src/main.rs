#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

extern crate anyhow;
extern crate clap;
extern crate console;
extern crate itertools;

extern crate killer_game;

mod menu;
mod tui;

use anyhow::Context;
use clap::{Command, arg};
use killer_game::{assignment, roster};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("Killer")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about("Secret target and task dealer for killer-style party games")
        .arg(arg!(<players_file> "Path to the player list: one name per line."))
        .arg(arg!(<tasks_file> "Path to the task list: one task per line."))
        .get_matches();

    let players_file = matches.get_one::<String>("players_file").unwrap();
    let tasks_file = matches.get_one::<String>("tasks_file").unwrap();

    let players = read_list_file(players_file)?;
    let tasks = read_list_file(tasks_file)?;
    log::info!("Loaded {} players and {} tasks.", players.len(), tasks.len());

    let assignment = assignment::assign(&players, &tasks)?;
    menu::run(&players, &assignment)?;
    Ok(())
}

fn read_list_file(filename: &str) -> anyhow::Result<Vec<String>> {
    let contents =
        std::fs::read_to_string(filename).with_context(|| format!("cannot read '{filename}'"))?;
    Ok(roster::parse_lines(&contents))
}
