//! Lackey: rides along on whoever else rolls a six.

use crate::ability::{Ability, AbilityOutcome};
use crate::engine::Engine;
use crate::event::{Event, EventKind, EventTag};
use crate::ids::RacerIdx;
use crate::movement::{push_move, EmitMode};
use crate::types::Phase;

#[derive(Debug, Default)]
pub struct LackeyLoyalty;

impl Ability for LackeyLoyalty {
    fn name(&self) -> &'static str {
        "LackeyLoyalty"
    }

    fn triggers(&self) -> &'static [EventTag] {
        &[EventTag::RollResult]
    }

    fn execute(&self, event: &Event, owner_idx: RacerIdx, engine: &mut Engine) -> AbilityOutcome {
        if event.target_racer_idx == Some(owner_idx) {
            return AbilityOutcome::Skip;
        }
        let EventKind::RollResult { dice_value, .. } = event.kind else {
            return AbilityOutcome::Skip;
        };
        if dice_value != 6 {
            return AbilityOutcome::Skip;
        }
        push_move(engine, 2, Phase::Reaction, owner_idx, "LackeyLoyalty", owner_idx, EmitMode::AfterResolution);
        AbilityOutcome::Skip
    }
}
