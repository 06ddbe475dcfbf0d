//! Per-racer mutable state.

use crate::ability::Ability;
use crate::ids::RacerIdx;
use crate::modifier::RacerModifier;
use crate::types::RacerName;

/// Forces the next roll to a fixed value; tagged with the ability that
/// installed it so traces can attribute the override.
#[derive(Debug, Clone)]
pub struct RollOverride {
    pub source: &'static str,
    pub value: u8,
}

/// One competitor's mutable state plus the abilities/modifiers it owns.
#[derive(Debug)]
pub struct RacerState {
    pub idx: RacerIdx,
    pub name: RacerName,
    pub position: i32,
    pub victory_points: u32,
    pub tripped: bool,
    pub finished: bool,
    pub finish_position: Option<u32>,
    pub main_move_consumed: bool,
    pub roll_override: Option<RollOverride>,
    pub modifiers: Vec<Box<dyn RacerModifier>>,
    pub abilities: Vec<Box<dyn Ability>>,
    pub turns_taken: u32,
    pub recovery_turns: u32,
    pub sum_dice_rolled: u64,
    pub ability_trigger_count: u32,
    pub ability_self_target_count: u32,
    pub ability_target_count: u32,
}

impl RacerState {
    pub fn new(idx: RacerIdx, name: RacerName, position: i32) -> Self {
        Self {
            idx,
            name,
            position,
            victory_points: 0,
            tripped: false,
            finished: false,
            finish_position: None,
            main_move_consumed: false,
            roll_override: None,
            modifiers: Vec::new(),
            abilities: Vec::new(),
            turns_taken: 0,
            recovery_turns: 0,
            sum_dice_rolled: 0,
            ability_trigger_count: 0,
            ability_self_target_count: 0,
            ability_target_count: 0,
        }
    }

    pub fn repr(&self) -> String {
        format!("{}{}", self.name, self.idx)
    }

    /// Structural-equality dedup per the data model invariant: a modifier
    /// may appear at most once in a racer's modifier list.
    pub fn add_modifier(&mut self, modifier: Box<dyn RacerModifier>) {
        if !self.modifiers.iter().any(|m| m.identity() == modifier.identity()) {
            self.modifiers.push(modifier);
        }
    }

    pub fn remove_modifier(&mut self, identity: &str) {
        self.modifiers.retain(|m| m.identity() != identity);
    }

    pub fn has_modifier(&self, identity: &str) -> bool {
        self.modifiers.iter().any(|m| m.identity() == identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repr_combines_name_and_index() {
        let r = RacerState::new(RacerIdx::new(2), RacerName::Banana, 0);
        assert_eq!(r.repr(), "Banana#2");
    }
}
