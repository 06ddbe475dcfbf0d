//! Romantic: pushes itself forward whenever it ends up sharing a tile with
//! exactly one other racer.

use crate::ability::{Ability, AbilityOutcome};
use crate::engine::Engine;
use crate::event::{Event, EventKind, EventTag};
use crate::ids::RacerIdx;
use crate::movement::{push_move, EmitMode};
use crate::types::Phase;

#[derive(Debug, Default)]
pub struct RomanticMove;

impl Ability for RomanticMove {
    fn name(&self) -> &'static str {
        "RomanticMove"
    }

    fn triggers(&self) -> &'static [EventTag] {
        &[EventTag::PostMove, EventTag::PostWarp]
    }

    fn execute(&self, event: &Event, owner_idx: RacerIdx, engine: &mut Engine) -> AbilityOutcome {
        let end_tile = match event.kind {
            EventKind::PostMove { end_tile, .. } => end_tile,
            EventKind::PostWarp { end_tile, .. } => end_tile,
            _ => return AbilityOutcome::Skip,
        };
        if engine.racer(owner_idx).finished || end_tile != engine.racer(owner_idx).position {
            return AbilityOutcome::Skip;
        }
        let sharing = engine.get_racers_at_position(end_tile);
        if sharing.len() == 2 {
            push_move(engine, 2, Phase::Reaction, owner_idx, "RomanticMove", owner_idx, EmitMode::AfterResolution);
        }
        AbilityOutcome::Skip
    }
}
