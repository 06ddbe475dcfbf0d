//! Gunk: an ambient slime that slows every other racer's roll by 1,
//! regardless of tile proximity.

use crate::ability::{Ability, AbilityOutcome};
use crate::engine::Engine;
use crate::event::{Event, EventTag};
use crate::ids::RacerIdx;
use crate::modifier::{MoveQuery, RacerModifier};

#[derive(Debug, Clone)]
pub struct GunkSlime;

impl RacerModifier for GunkSlime {
    fn name(&self) -> &'static str {
        "GunkSlime"
    }

    fn identity(&self) -> String {
        "GunkSlime".to_string()
    }

    fn modify_roll(&self, query: &mut MoveQuery, owner_idx: RacerIdx, _engine: &Engine, rolling_idx: RacerIdx) {
        if rolling_idx == owner_idx {
            return;
        }
        query.push("GunkSlime", -1);
    }

    fn clone_box(&self) -> Box<dyn RacerModifier> {
        Box::new(self.clone())
    }
}

#[derive(Debug, Default)]
pub struct GunkSlimeManager;

impl Ability for GunkSlimeManager {
    fn name(&self) -> &'static str {
        "GunkSlimeManager"
    }

    fn triggers(&self) -> &'static [EventTag] {
        &[]
    }

    fn on_setup(&self, owner_idx: RacerIdx, engine: &mut Engine) {
        engine.racer_mut(owner_idx).add_modifier(Box::new(GunkSlime));
    }

    fn execute(&self, _event: &Event, _owner_idx: RacerIdx, _engine: &mut Engine) -> AbilityOutcome {
        AbilityOutcome::Skip
    }
}
