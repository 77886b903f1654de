use std::collections::HashMap;

use itertools::Itertools;
use rand::Rng;
use rand::seq::IndexedRandom;

// Keeps task reuse balanced: a task that has already been handed out twice
// leaves the available set, and the set is refilled from the full list once
// it runs dry. Selection always goes to a least-used available task, so no
// task repeats before every task has appeared at least once in the round.
#[derive(Clone, Debug)]
pub struct TaskPool {
    all_tasks: Vec<String>,
    usage_counts: HashMap<String, usize>,
    available: Vec<String>,
}

impl TaskPool {
    /// `tasks` must be non-empty.
    pub fn new(tasks: &[String]) -> Self {
        assert!(!tasks.is_empty());
        TaskPool {
            all_tasks: tasks.to_vec(),
            usage_counts: HashMap::new(),
            available: tasks.to_vec(),
        }
    }

    pub fn usage_count(&self, task: &str) -> usize {
        self.usage_counts.get(task).copied().unwrap_or(0)
    }

    pub fn draw(&mut self, rng: &mut impl Rng) -> String {
        if self.available.is_empty() {
            self.available = self.all_tasks.clone();
        }
        let min_count = self.available.iter().map(|t| self.usage_count(t)).min().unwrap();
        let least_used = self
            .available
            .iter()
            .filter(|t| self.usage_count(t) == min_count)
            .cloned()
            .collect_vec();
        let task = least_used.choose(rng).unwrap().clone();
        let count = self.usage_counts.entry(task.clone()).or_insert(0);
        *count += 1;
        if *count > 1 {
            self.available.retain(|t| *t != task);
        }
        task
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn tasks(names: &[&str]) -> Vec<String> { names.iter().map(|s| s.to_string()).collect() }

    #[test]
    fn single_task_repeats_forever() {
        let mut pool = TaskPool::new(&tasks(&["wink"]));
        let mut rng = rand::rng();
        for _ in 0..5 {
            assert_eq!(pool.draw(&mut rng), "wink");
        }
        assert_eq!(pool.usage_count("wink"), 5);
    }

    #[test]
    fn no_repeat_before_full_round() {
        let mut pool = TaskPool::new(&tasks(&["a", "b", "c", "d"]));
        let mut rng = rand::rng();
        let first_round = (0..4).map(|_| pool.draw(&mut rng)).sorted().collect_vec();
        assert_eq!(first_round, tasks(&["a", "b", "c", "d"]));
    }

    #[test]
    fn counts_stay_within_one_of_each_other() {
        let mut pool = TaskPool::new(&tasks(&["a", "b", "c"]));
        let mut rng = rand::rng();
        for total in 1..=20 {
            pool.draw(&mut rng);
            let counts = ["a", "b", "c"].map(|t| pool.usage_count(t));
            let max = counts.iter().max().unwrap();
            let min = counts.iter().min().unwrap();
            assert!(max - min <= 1, "unbalanced counts {:?} after {} draws", counts, total);
        }
    }
}
