//! The closed event taxonomy the resolver dispatches.

use crate::ids::{EventId, RacerIdx};
use crate::types::Phase;

/// Tag-only mirror of [`EventKind`]'s discriminants, used by
/// `Ability::triggers` to declare interest without needing a full payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTag {
    TurnStart,
    RollResult,
    MoveDistanceQuery,
    PreMove,
    Passing,
    PostMove,
    PreWarp,
    PostWarp,
    Trip,
    AbilityTriggered,
    TurnEnd,
}

/// Payload for each closed event variant.
#[derive(Debug, Clone)]
pub enum EventKind {
    TurnStart,
    RollResult { dice_value: u8, base_value: i32 },
    /// Recorded for observability only — `push_move` resolves modifier
    /// contributions synchronously and never queues this variant for
    /// dispatch (see `DESIGN.md`).
    MoveDistanceQuery {
        modifiers: Vec<i32>,
        modifier_sources: Vec<(String, i32)>,
    },
    PreMove { start_tile: i32, end_tile: i32 },
    Passing { passing_racer_idx: RacerIdx, passed_racer_idx: RacerIdx },
    PostMove { start_tile: i32, end_tile: i32 },
    PreWarp,
    PostWarp { start_tile: i32, end_tile: i32 },
    Trip,
    AbilityTriggered { source: &'static str },
    TurnEnd,
}

impl EventKind {
    pub fn tag(&self) -> EventTag {
        match self {
            EventKind::TurnStart => EventTag::TurnStart,
            EventKind::RollResult { .. } => EventTag::RollResult,
            EventKind::MoveDistanceQuery { .. } => EventTag::MoveDistanceQuery,
            EventKind::PreMove { .. } => EventTag::PreMove,
            EventKind::Passing { .. } => EventTag::Passing,
            EventKind::PostMove { .. } => EventTag::PostMove,
            EventKind::PreWarp => EventTag::PreWarp,
            EventKind::PostWarp { .. } => EventTag::PostWarp,
            EventKind::Trip => EventTag::Trip,
            EventKind::AbilityTriggered { .. } => EventTag::AbilityTriggered,
            EventKind::TurnEnd => EventTag::TurnEnd,
        }
    }
}

/// An event flowing through the resolver's queue. Every event carries its
/// phase plus the actor (`responsible_racer_idx`) and the racer affected
/// (`target_racer_idx`), which together drive the self/other trigger-count
/// split in `RacerResult`.
#[derive(Debug, Clone)]
pub struct Event {
    pub id: EventId,
    pub phase: Phase,
    pub responsible_racer_idx: RacerIdx,
    pub target_racer_idx: Option<RacerIdx>,
    pub kind: EventKind,
}

impl Event {
    pub fn tag(&self) -> EventTag {
        self.kind.tag()
    }
}
