//! Inchworm: freezes whoever rolls a one, then creeps forward itself.

use crate::ability::{Ability, AbilityOutcome};
use crate::engine::Engine;
use crate::event::{Event, EventKind, EventTag};
use crate::ids::RacerIdx;
use crate::movement::{push_move, EmitMode};
use crate::types::Phase;

#[derive(Debug, Default)]
pub struct InchwormCreep;

impl Ability for InchwormCreep {
    fn name(&self) -> &'static str {
        "InchwormCreep"
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
        if dice_value != 1 {
            return AbilityOutcome::Skip;
        }
        if let Some(skipped_idx) = event.target_racer_idx {
            engine.skip_main_move(skipped_idx, "InchwormCreep");
        }
        push_move(engine, 1, Phase::Reaction, owner_idx, "InchwormCreep", owner_idx, EmitMode::AfterResolution);
        AbilityOutcome::Skip
    }
}
