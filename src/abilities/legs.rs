//! Legs: may substitute its roll for a fixed 5, if the agent says yes.

use crate::ability::{Ability, AbilityOutcome, DecisionContext};
use crate::engine::Engine;
use crate::event::{Event, EventTag};
use crate::ids::RacerIdx;
use crate::racer::RollOverride;

#[derive(Debug, Default)]
pub struct LegsMove;

const OVERRIDE_VALUE: u8 = 5;

impl Ability for LegsMove {
    fn name(&self) -> &'static str {
        "LongLegs"
    }

    fn triggers(&self) -> &'static [EventTag] {
        &[EventTag::TurnStart]
    }

    fn baseline_boolean_decision(&self, _ctx: &DecisionContext) -> bool {
        true
    }

    /// Simplified heuristic: prefer the fixed roll only when it avoids
    /// landing on a trip tile, since the richer benefit/hazard evaluation
    /// this mirrors lives outside this crate's scope.
    fn auto_boolean_decision(&self, ctx: &DecisionContext) -> bool {
        let projected = ctx.engine.racer(ctx.source_racer_idx).position + OVERRIDE_VALUE as i32;
        !ctx.engine
            .board
            .features_at(projected)
            .iter()
            .any(|f| matches!(f, crate::board::TileFeature::TripTile))
    }

    fn execute(&self, event: &Event, owner_idx: RacerIdx, engine: &mut Engine) -> AbilityOutcome {
        if event.target_racer_idx != Some(owner_idx) {
            return AbilityOutcome::Skip;
        }
        let wants_override = {
            let ctx = DecisionContext {
                event,
                engine: &*engine,
                source_racer_idx: owner_idx,
            };
            engine.agent().make_boolean_decision(self, &ctx)
        };
        if wants_override {
            engine.racer_mut(owner_idx).roll_override = Some(RollOverride {
                source: "LongLegs",
                value: OVERRIDE_VALUE,
            });
            return AbilityOutcome::Triggered { target_racer_idx: Some(owner_idx) };
        }
        AbilityOutcome::Skip
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::BaselineAgent;
    use crate::board::Board;
    use crate::dice::ScriptedDice;
    use crate::engine::RacerConfig;
    use crate::rules::GameRules;
    use crate::types::RacerName;

    #[test]
    fn baseline_agent_always_takes_the_fixed_roll() {
        let mut engine = Engine::new_engine(
            Board::new(30),
            vec![RacerConfig { name: RacerName::Legs, start_pos: 0 }],
            Box::new(ScriptedDice::new([1])),
            GameRules::default(),
        )
        .unwrap();
        engine.set_agent(Box::new(BaselineAgent));
        engine.run_turn().unwrap();
        assert_eq!(engine.racer(RacerIdx::new(0)).position, OVERRIDE_VALUE as i32);
    }
}
