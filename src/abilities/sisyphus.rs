//! Sisyphus: starts ahead on victory points, but rolling a six sends it
//! straight back to the start and costs a point.

use crate::ability::{Ability, AbilityOutcome};
use crate::engine::Engine;
use crate::event::{Event, EventKind, EventTag};
use crate::ids::RacerIdx;
use crate::movement::{push_warp, EmitMode};
use crate::types::Phase;

#[derive(Debug, Default)]
pub struct SisyphusCurse;

impl Ability for SisyphusCurse {
    fn name(&self) -> &'static str {
        "SisyphusCurse"
    }

    fn triggers(&self) -> &'static [EventTag] {
        &[EventTag::RollResult]
    }

    fn preferred_dice(&self) -> Option<&'static [u8]> {
        Some(&[1, 2, 3, 4, 5])
    }

    fn on_setup(&self, owner_idx: RacerIdx, engine: &mut Engine) {
        engine.racer_mut(owner_idx).victory_points += 4;
    }

    fn execute(&self, event: &Event, owner_idx: RacerIdx, engine: &mut Engine) -> AbilityOutcome {
        if event.target_racer_idx != Some(owner_idx) {
            return AbilityOutcome::Skip;
        }
        let EventKind::RollResult { dice_value, .. } = event.kind else {
            return AbilityOutcome::Skip;
        };
        if dice_value != 6 {
            return AbilityOutcome::Skip;
        }
        engine.skip_main_move(owner_idx, "SisyphusCurse");
        push_warp(engine, 0, Phase::Reaction, owner_idx, "SisyphusCurse", owner_idx, EmitMode::None);
        let racer = engine.racer_mut(owner_idx);
        if racer.victory_points > 0 {
            racer.victory_points -= 1;
        }
        AbilityOutcome::Triggered { target_racer_idx: Some(owner_idx) }
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
    fn sisyphus_curse_resolves_over_six_turns() {
        let mut engine = Engine::new_engine(
            Board::new(30),
            vec![
                RacerConfig { name: RacerName::Mastermind, start_pos: 0 },
                RacerConfig { name: RacerName::Stickler, start_pos: 0 },
                RacerConfig { name: RacerName::Sisyphus, start_pos: 10 },
            ],
            Box::new(ScriptedDice::new([2, 2, 3, 2, 2, 6])),
            GameRules::default(),
        )
        .unwrap();
        for _ in 0..6 {
            engine.run_turn().unwrap();
        }
        let sisyphus = engine.racer(RacerIdx::new(2));
        assert_eq!(sisyphus.position, 0);
        assert_eq!(sisyphus.victory_points, 3);
    }
}
