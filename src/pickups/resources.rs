//! Pickups domain: score and level-goal resources.

use bevy::prelude::*;
use std::collections::HashSet;

/// Points accumulated from pickups this run.
#[derive(Resource, Debug, Default)]
pub struct Score {
    pub points: u32,
}

/// Tracks which pickups the level requires and which have been collected.
#[derive(Resource, Debug, Default)]
pub struct LevelGoal {
    required: HashSet<String>,
    collected: HashSet<String>,
}

impl LevelGoal {
    /// Builds the goal from the level's pickup ids. Duplicates collapse to
    /// one entry; the second element reports them for logging.
    pub fn from_ids<I, S>(ids: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut required = HashSet::new();
        let mut duplicates = Vec::new();
        for id in ids {
            let id = id.into();
            if !required.insert(id.clone()) {
                duplicates.push(id);
            }
        }
        (
            Self {
                required,
                collected: HashSet::new(),
            },
            duplicates,
        )
    }

    /// Records a collected pickup. Unknown ids are ignored.
    pub fn note_collected(&mut self, id: &str) {
        if self.required.contains(id) {
            self.collected.insert(id.to_string());
        }
    }

    pub fn is_complete(&self) -> bool {
        self.collected.len() >= self.required.len()
    }

    pub fn remaining(&self) -> usize {
        self.required.len() - self.collected.len()
    }
}
