//! Banana: trips whoever passes it.

use crate::ability::{Ability, AbilityOutcome};
use crate::engine::Engine;
use crate::event::{Event, EventKind, EventTag};
use crate::ids::RacerIdx;
use crate::movement::push_trip;
use crate::types::Phase;

#[derive(Debug, Default)]
pub struct BananaTrip;

impl Ability for BananaTrip {
    fn name(&self) -> &'static str {
        "BananaTrip"
    }

    fn triggers(&self) -> &'static [EventTag] {
        &[EventTag::Passing]
    }

    fn execute(&self, event: &Event, owner_idx: RacerIdx, engine: &mut Engine) -> AbilityOutcome {
        let EventKind::Passing { passing_racer_idx, passed_racer_idx } = event.kind else {
            return AbilityOutcome::Skip;
        };
        if passed_racer_idx != owner_idx {
            return AbilityOutcome::Skip;
        }
        push_trip(engine, passing_racer_idx, "BananaTrip", owner_idx, Phase::Reaction);
        AbilityOutcome::Triggered { target_racer_idx: Some(passing_racer_idx) }
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
    fn banana_trips_a_racer_that_passes_it() {
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
        assert!(engine.racer(RacerIdx::new(0)).tripped);
    }

    #[test]
    fn banana_does_not_trip_a_racer_that_only_lands_on_it() {
        let mut engine = Engine::new_engine(
            Board::new(30),
            vec![
                RacerConfig { name: RacerName::Centaur, start_pos: 0 },
                RacerConfig { name: RacerName::Banana, start_pos: 4 },
            ],
            Box::new(ScriptedDice::new([4])),
            GameRules::default(),
        )
        .unwrap();
        engine.run_turn().unwrap();
        assert!(!engine.racer(RacerIdx::new(0)).tripped);
    }
}
