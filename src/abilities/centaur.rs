//! Centaur: tramples whoever it passes, pushing them backward.

use crate::ability::{Ability, AbilityOutcome};
use crate::engine::Engine;
use crate::event::{Event, EventKind, EventTag};
use crate::ids::RacerIdx;
use crate::movement::{push_move, EmitMode};
use crate::types::Phase;

#[derive(Debug, Default)]
pub struct CentaurTrample;

impl Ability for CentaurTrample {
    fn name(&self) -> &'static str {
        "CentaurTrample"
    }

    fn triggers(&self) -> &'static [EventTag] {
        &[EventTag::Passing]
    }

    fn execute(&self, event: &Event, owner_idx: RacerIdx, engine: &mut Engine) -> AbilityOutcome {
        let EventKind::Passing { passing_racer_idx, passed_racer_idx } = event.kind else {
            return AbilityOutcome::Skip;
        };
        if passing_racer_idx != owner_idx {
            return AbilityOutcome::Skip;
        }
        push_move(engine, -2, Phase::Reaction, passed_racer_idx, "CentaurTrample", owner_idx, EmitMode::None);
        AbilityOutcome::Triggered { target_racer_idx: Some(passed_racer_idx) }
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
    fn centaur_tramples_a_racer_it_passes() {
        let mut engine = Engine::new_engine(
            Board::new(30),
            vec![
                RacerConfig { name: RacerName::Centaur, start_pos: 0 },
                RacerConfig { name: RacerName::Banana, start_pos: 4 },
            ],
            Box::new(ScriptedDice::new([6])),
            GameRules::default(),
        )
        .unwrap();
        engine.run_turn().unwrap();
        assert_eq!(engine.racer(RacerIdx::new(0)).position, 6);
        assert_eq!(engine.racer(RacerIdx::new(1)).position, 2);
    }
}
