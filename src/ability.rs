//! The ability interface every racer's bespoke behavior implements.

use std::fmt;

use crate::engine::Engine;
use crate::event::{Event, EventTag};
use crate::ids::RacerIdx;

/// What `Ability::execute` hands back to the resolver: either a concrete
/// reaction event to publish, or an indication that the ability did not
/// fire (or already handled publication itself, e.g. via `push_move`).
pub enum AbilityOutcome {
    Triggered { target_racer_idx: Option<RacerIdx> },
    Skip,
}

/// Read-only context passed to an `Agent` when an ability needs a live
/// decision. Carries just enough for both a baseline default and an
/// auto/heuristic evaluation to run against current engine state.
pub struct DecisionContext<'a> {
    pub event: &'a Event,
    pub engine: &'a Engine,
    pub source_racer_idx: RacerIdx,
}

/// A named behavior owned by one racer. Listens to a fixed set of event
/// tags and may publish reactions, install modifiers, or consult an
/// `Agent` for a live decision.
pub trait Ability: fmt::Debug {
    /// Stable tag, also used as the `source` on any event this ability
    /// triggers.
    fn name(&self) -> &'static str;

    /// Event tags this ability listens to; the resolver only calls
    /// `execute` when the popped event's tag is in this set.
    fn triggers(&self) -> &'static [EventTag];

    /// Dice values this racer's decision-making prefers, consulted by an
    /// external dice-preference layer. Not used by anything in this crate.
    fn preferred_dice(&self) -> Option<&'static [u8]> {
        None
    }

    /// Run once at race start, before the first turn.
    fn on_setup(&self, _owner_idx: RacerIdx, _engine: &mut Engine) {}

    /// Run when a modifier-installing ability enters play. Nothing in this
    /// crate gains/loses abilities mid-race, so `on_setup` is where the
    /// catalogue wires these up; the hooks exist for lifecycle symmetry
    /// with `RacerModifier` install/remove.
    fn on_gain(&self, _owner_idx: RacerIdx, _engine: &mut Engine) {}
    fn on_loss(&self, _owner_idx: RacerIdx, _engine: &mut Engine) {}

    /// True only for Stickler's own ability: their self-overshoot is
    /// recorded un-clamped (see `DESIGN.md`).
    fn exempts_finish_clamp(&self) -> bool {
        false
    }

    /// Default answer to a boolean decision when no live agent evaluation
    /// is wanted — typically "yes".
    fn baseline_boolean_decision(&self, _ctx: &DecisionContext) -> bool {
        true
    }

    /// Heuristic answer to a boolean decision; defaults to the baseline.
    fn auto_boolean_decision(&self, ctx: &DecisionContext) -> bool {
        self.baseline_boolean_decision(ctx)
    }

    /// Default answer to a selection decision among a closed set of named
    /// options (e.g. "which racer to trade places with"). No ability in
    /// this catalogue currently offers a choice with more than one option,
    /// so the baseline just takes the first; kept as a documented hook for
    /// the agent interface, the way `preferred_dice` is.
    fn baseline_selection_decision<'a>(&self, _ctx: &DecisionContext, options: &'a [String]) -> Option<&'a String> {
        options.first()
    }

    /// Heuristic answer to a selection decision; defaults to the baseline.
    fn auto_selection_decision<'a>(&self, ctx: &DecisionContext, options: &'a [String]) -> Option<&'a String> {
        self.baseline_selection_decision(ctx, options)
    }

    fn execute(&self, event: &Event, owner_idx: RacerIdx, engine: &mut Engine) -> AbilityOutcome;
}
