use std::collections::HashMap;
use std::fmt;

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::tasks::TaskPool;

pub const MIN_PLAYERS: usize = 2;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AssignmentError {
    NotEnoughPlayers,
    NoTasks,
}

impl fmt::Display for AssignmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentError::NotEnoughPlayers => write!(f, "need at least 2 players"),
            AssignmentError::NoTasks => write!(f, "need at least one task"),
        }
    }
}

impl std::error::Error for AssignmentError {}

/// What one player has to do: whom to go after and which task to pull off.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Duty {
    pub target: String,
    pub task: String,
}

/// The complete player → duty map for one game. Computed once at startup and
/// never mutated afterwards.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Assignment {
    duties: HashMap<String, Duty>,
}

impl Assignment {
    pub fn duty(&self, player: &str) -> Option<&Duty> { self.duties.get(player) }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Duty)> { self.duties.iter() }

    pub fn num_players(&self) -> usize { self.duties.len() }
}

// Targets form a single cycle: the players are shuffled and everybody goes
// after the next player in the shuffled order. Tasks are drawn in the same
// order from a balancing pool, so repeats only start once every task has
// been handed out.
pub fn assign(players: &[String], tasks: &[String]) -> Result<Assignment, AssignmentError> {
    if players.len() < MIN_PLAYERS {
        return Err(AssignmentError::NotEnoughPlayers);
    }
    if tasks.is_empty() {
        return Err(AssignmentError::NoTasks);
    }
    let mut rng = rand::rng();
    let mut order = players.to_vec();
    order.shuffle(&mut rng);
    let mut pool = TaskPool::new(tasks);
    let mut duties = HashMap::new();
    for (i, player) in order.iter().enumerate() {
        let target = order[(i + 1) % order.len()].clone();
        let task = pool.draw(&mut rng);
        duties.insert(player.clone(), Duty { target, task });
    }
    Ok(Assignment { duties })
}
