//! Scoocher: scoots forward one tile whenever any other racer's ability fires.

use crate::ability::{Ability, AbilityOutcome};
use crate::engine::Engine;
use crate::event::{Event, EventTag};
use crate::ids::RacerIdx;
use crate::movement::{push_move, EmitMode};
use crate::types::Phase;

#[derive(Debug, Default)]
pub struct ScoochStep;

impl Ability for ScoochStep {
    fn name(&self) -> &'static str {
        "ScoochStep"
    }

    fn triggers(&self) -> &'static [EventTag] {
        &[EventTag::AbilityTriggered]
    }

    fn execute(&self, event: &Event, owner_idx: RacerIdx, engine: &mut Engine) -> AbilityOutcome {
        if event.responsible_racer_idx == owner_idx {
            return AbilityOutcome::Skip;
        }
        push_move(engine, 1, Phase::Reaction, owner_idx, "ScoochStep", owner_idx, EmitMode::AfterResolution);
        AbilityOutcome::Skip
    }
}
