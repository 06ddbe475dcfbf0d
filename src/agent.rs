//! Interactive decision hooks invoked during event handling.

use crate::ability::{Ability, DecisionContext};

/// Pluggable live-decision collaborator. Calls are synchronous and occur
/// mid-drain; implementations must be pure observers of engine state — no
/// mutation.
pub trait Agent {
    fn make_boolean_decision(&self, ability: &dyn Ability, ctx: &DecisionContext) -> bool;

    /// Picks among a closed set of named options, or `None` if the agent
    /// declines to choose (treated as "no selection made" by the caller).
    fn make_selection_decision<'a>(&self, ability: &dyn Ability, ctx: &DecisionContext, options: &'a [String]) -> Option<&'a String>;
}

/// Always defers to each ability's baseline default (typically "yes").
#[derive(Debug, Clone, Copy, Default)]
pub struct BaselineAgent;

impl Agent for BaselineAgent {
    fn make_boolean_decision(&self, ability: &dyn Ability, ctx: &DecisionContext) -> bool {
        ability.baseline_boolean_decision(ctx)
    }

    fn make_selection_decision<'a>(&self, ability: &dyn Ability, ctx: &DecisionContext, options: &'a [String]) -> Option<&'a String> {
        ability.baseline_selection_decision(ctx, options)
    }
}

/// Defers to each ability's auto/heuristic evaluation, falling back to the
/// baseline for abilities that don't override it.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoAgent;

impl Agent for AutoAgent {
    fn make_boolean_decision(&self, ability: &dyn Ability, ctx: &DecisionContext) -> bool {
        ability.auto_boolean_decision(ctx)
    }

    fn make_selection_decision<'a>(&self, ability: &dyn Ability, ctx: &DecisionContext, options: &'a [String]) -> Option<&'a String> {
        ability.auto_selection_decision(ctx, options)
    }
}
