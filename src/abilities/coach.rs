//! Coach: a tile aura boosting every racer (including Coach) currently
//! sharing Coach's tile. Checked live against current position, so the
//! boost disappears the moment a racer (Coach included) moves off the tile.

use crate::ability::{Ability, AbilityOutcome};
use crate::engine::Engine;
use crate::event::{Event, EventTag};
use crate::ids::RacerIdx;
use crate::modifier::{MoveQuery, RacerModifier};

#[derive(Debug, Clone)]
pub struct CoachBoost;

impl RacerModifier for CoachBoost {
    fn name(&self) -> &'static str {
        "CoachBoost"
    }

    fn identity(&self) -> String {
        "CoachBoost".to_string()
    }

    fn modify_roll(&self, query: &mut MoveQuery, owner_idx: RacerIdx, engine: &Engine, rolling_idx: RacerIdx) {
        if engine.racer(rolling_idx).position != engine.racer(owner_idx).position {
            return;
        }
        query.push("CoachBoost", 1);
    }

    fn clone_box(&self) -> Box<dyn RacerModifier> {
        Box::new(self.clone())
    }
}

#[derive(Debug, Default)]
pub struct CoachAuraManager;

impl Ability for CoachAuraManager {
    fn name(&self) -> &'static str {
        "CoachAuraManager"
    }

    fn triggers(&self) -> &'static [EventTag] {
        &[]
    }

    fn on_setup(&self, owner_idx: RacerIdx, engine: &mut Engine) {
        engine.racer_mut(owner_idx).add_modifier(Box::new(CoachBoost));
    }

    fn execute(&self, _event: &Event, _owner_idx: RacerIdx, _engine: &mut Engine) -> AbilityOutcome {
        AbilityOutcome::Skip
    }
}
