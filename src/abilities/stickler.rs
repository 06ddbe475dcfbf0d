//! Stickler: enforces the rules so strictly that nobody else is allowed to
//! overshoot the finish line — their own overshoot is exempt from both the
//! veto and the reporting clamp.

use crate::ability::{Ability, AbilityOutcome};
use crate::engine::Engine;
use crate::event::{Event, EventTag};
use crate::ids::RacerIdx;
use crate::modifier::{MoveQuery, RacerModifier};

#[derive(Debug, Clone)]
pub struct StalwartModifier;

impl RacerModifier for StalwartModifier {
    fn name(&self) -> &'static str {
        "StalwartVeto"
    }

    fn identity(&self) -> String {
        "StalwartModifier".to_string()
    }

    fn modify_roll(&self, _query: &mut MoveQuery, _owner_idx: RacerIdx, _engine: &Engine, _rolling_idx: RacerIdx) {}

    fn vetoes_finish_overshoot(&self) -> bool {
        true
    }

    fn clone_box(&self) -> Box<dyn RacerModifier> {
        Box::new(self.clone())
    }
}

#[derive(Debug, Default)]
pub struct StalwartManager;

impl Ability for StalwartManager {
    fn name(&self) -> &'static str {
        "StalwartManager"
    }

    fn triggers(&self) -> &'static [EventTag] {
        &[]
    }

    fn exempts_finish_clamp(&self) -> bool {
        true
    }

    fn on_setup(&self, owner_idx: RacerIdx, engine: &mut Engine) {
        engine.racer_mut(owner_idx).add_modifier(Box::new(StalwartModifier));
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
    fn stickler_vetoes_another_racers_overshoot() {
        let mut engine = Engine::new_engine(
            Board::new(30),
            vec![
                RacerConfig { name: RacerName::Stickler, start_pos: 0 },
                RacerConfig { name: RacerName::Banana, start_pos: 28 },
            ],
            Box::new(ScriptedDice::new([3, 3, 2, 2])),
            GameRules::default(),
        )
        .unwrap();
        engine.run_turn().unwrap();
        engine.run_turn().unwrap();
        assert_eq!(engine.racer(RacerIdx::new(1)).position, 28);
        assert!(!engine.racer(RacerIdx::new(1)).finished);

        engine.run_turn().unwrap();
        engine.run_turn().unwrap();
        assert_eq!(engine.racer(RacerIdx::new(1)).position, 30);
        assert!(engine.racer(RacerIdx::new(1)).finished);
    }

    #[test]
    fn stickler_own_overshoot_is_not_clamped() {
        let mut engine = Engine::new_engine(
            Board::new(30),
            vec![RacerConfig { name: RacerName::Stickler, start_pos: 28 }],
            Box::new(ScriptedDice::new([3])),
            GameRules::default(),
        )
        .unwrap();
        engine.run_turn().unwrap();
        assert_eq!(engine.racer(RacerIdx::new(0)).position, 31);
        assert!(engine.racer(RacerIdx::new(0)).finished);
    }
}
