//! Blimp: a self-installed modifier that speeds up early and slows down
//! once past the board's halfway marker.

use crate::ability::{Ability, AbilityOutcome};
use crate::engine::Engine;
use crate::event::{Event, EventTag};
use crate::ids::RacerIdx;
use crate::modifier::{MoveQuery, RacerModifier};

#[derive(Debug, Clone)]
pub struct BlimpModifier;

impl RacerModifier for BlimpModifier {
    fn name(&self) -> &'static str {
        "BlimpSpeed"
    }

    fn identity(&self) -> String {
        "BlimpModifier".to_string()
    }

    fn modify_roll(&self, query: &mut MoveQuery, owner_idx: RacerIdx, engine: &Engine, rolling_idx: RacerIdx) {
        if rolling_idx != owner_idx {
            return;
        }
        let threshold = engine.board.halfway();
        if engine.racer(owner_idx).position < threshold {
            query.push("BlimpSpeed", 3);
        } else {
            query.push("BlimpSlow", -1);
        }
    }

    fn clone_box(&self) -> Box<dyn RacerModifier> {
        Box::new(self.clone())
    }
}

#[derive(Debug, Default)]
pub struct BlimpModifierManager;

impl Ability for BlimpModifierManager {
    fn name(&self) -> &'static str {
        "BlimpModifierManager"
    }

    fn triggers(&self) -> &'static [EventTag] {
        &[]
    }

    fn on_setup(&self, owner_idx: RacerIdx, engine: &mut Engine) {
        engine.racer_mut(owner_idx).add_modifier(Box::new(BlimpModifier));
    }

    fn execute(&self, _event: &Event, _owner_idx: RacerIdx, _engine: &mut Engine) -> AbilityOutcome {
        AbilityOutcome::Skip
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::dice::ScriptedDice;
    use crate::engine::RacerConfig;
    use crate::rules::GameRules;
    use crate::types::RacerName;

    #[test]
    fn blimp_speeds_up_before_halfway() {
        let mut engine = Engine::new_engine(
            Board::new(30),
            vec![RacerConfig { name: RacerName::Blimp, start_pos: 0 }],
            Box::new(ScriptedDice::new([2])),
            GameRules::default(),
        )
        .unwrap();
        engine.run_turn().unwrap();
        assert_eq!(engine.racer(RacerIdx::new(0)).position, 5);
    }

    #[test]
    fn blimp_slows_down_past_halfway() {
        let mut engine = Engine::new_engine(
            Board::new(30),
            vec![RacerConfig { name: RacerName::Blimp, start_pos: 20 }],
            Box::new(ScriptedDice::new([2])),
            GameRules::default(),
        )
        .unwrap();
        engine.run_turn().unwrap();
        assert_eq!(engine.racer(RacerIdx::new(0)).position, 21);
    }
}
