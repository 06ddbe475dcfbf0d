//! Passive, attachable racer effects.

use std::fmt;

use crate::engine::Engine;
use crate::ids::RacerIdx;

/// A passive effect attached to a racer. `push_move` calls `modify_roll` on
/// every racer's installed modifiers for every roll in the race — not just
/// the mover's own — so a modifier must compare `owner_idx` against
/// `rolling_racer_idx` itself to decide relevance (see `GunkSlime`, whose
/// whole point is to fire on *other* racers' rolls).
///
/// Each contribution `modify_roll` pushes onto `query` is credited with its
/// own `AbilityTriggeredEvent` by the caller, so purely-reactive abilities
/// like Scoocher observe every contribution as a discrete step.
pub trait RacerModifier: fmt::Debug {
    /// Stable tag, also used as the `source` on any `AbilityTriggeredEvent`
    /// the modifier emits.
    fn name(&self) -> &'static str;

    /// Identity string used for structural-equality dedup in a racer's
    /// modifier list: a modifier appears at most once per racer.
    fn identity(&self) -> String;

    /// Contribute a delta to an in-flight move-distance query.
    fn modify_roll(
        &self,
        _query: &mut MoveQuery,
        _owner_idx: RacerIdx,
        _engine: &Engine,
        _rolling_idx: RacerIdx,
    ) {
    }

    /// True for the one modifier Stickler installs on themselves: when any
    /// *other* racer's move would land past the finish line, the move is
    /// vetoed outright rather than clamped.
    fn vetoes_finish_overshoot(&self) -> bool {
        false
    }

    fn clone_box(&self) -> Box<dyn RacerModifier>;
}

impl Clone for Box<dyn RacerModifier> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Mutable accumulator for a single `push_move` call's distance. Every
/// racer's modifiers get a chance to append a delta before the mover's
/// final distance is computed.
#[derive(Debug, Default)]
pub struct MoveQuery {
    pub modifiers: Vec<i32>,
    pub modifier_sources: Vec<(String, i32)>,
}

impl MoveQuery {
    pub fn push(&mut self, source: &str, delta: i32) {
        self.modifiers.push(delta);
        self.modifier_sources.push((source.to_string(), delta));
    }

    pub fn sum(&self) -> i32 {
        self.modifiers.iter().sum()
    }
}
