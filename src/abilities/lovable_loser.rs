//! Lovable Loser: gains a victory point at the start of its turn whenever
//! it is strictly in last place.

use crate::ability::{Ability, AbilityOutcome};
use crate::engine::Engine;
use crate::event::{Event, EventTag};
use crate::ids::RacerIdx;

#[derive(Debug, Default)]
pub struct LovableLoserBonus;

impl Ability for LovableLoserBonus {
    fn name(&self) -> &'static str {
        "LovableLoserBonus"
    }

    fn triggers(&self) -> &'static [EventTag] {
        &[EventTag::TurnStart]
    }

    fn preferred_dice(&self) -> Option<&'static [u8]> {
        Some(&[1, 2, 3])
    }

    fn execute(&self, event: &Event, owner_idx: RacerIdx, engine: &mut Engine) -> AbilityOutcome {
        if event.target_racer_idx != Some(owner_idx) {
            return AbilityOutcome::Skip;
        }
        let own_position = engine.racer(owner_idx).position;
        let strictly_last = engine
            .racers
            .iter()
            .filter(|r| r.idx != owner_idx && !r.finished)
            .all(|r| r.position > own_position);
        if !strictly_last {
            return AbilityOutcome::Skip;
        }
        engine.racer_mut(owner_idx).victory_points += 1;
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
    fn lovable_loser_gains_a_point_while_strictly_last() {
        let mut engine = Engine::new_engine(
            Board::new(30),
            vec![
                RacerConfig { name: RacerName::LovableLoser, start_pos: 0 },
                RacerConfig { name: RacerName::BabaYaga, start_pos: 4 },
            ],
            Box::new(ScriptedDice::new([1])),
            GameRules::default(),
        )
        .unwrap();
        engine.run_turn().unwrap();
        assert_eq!(engine.racer(RacerIdx::new(0)).victory_points, 1);
    }

    #[test]
    fn lovable_loser_does_not_gain_a_point_when_tied() {
        let mut engine = Engine::new_engine(
            Board::new(30),
            vec![
                RacerConfig { name: RacerName::LovableLoser, start_pos: 4 },
                RacerConfig { name: RacerName::BabaYaga, start_pos: 4 },
            ],
            Box::new(ScriptedDice::new([1])),
            GameRules::default(),
        )
        .unwrap();
        engine.run_turn().unwrap();
        assert_eq!(engine.racer(RacerIdx::new(0)).victory_points, 0);
    }
}
