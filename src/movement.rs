//! Movement primitives. Every position change in the race goes through one
//! of these three functions — abilities and tile features never write
//! `racer.position` directly.

use crate::engine::Engine;
use crate::ids::RacerIdx;
use crate::modifier::MoveQuery;
use crate::resolver::NullModifier;
use crate::types::Phase;

/// Controls whether a movement primitive also publishes an
/// `AbilityTriggeredEvent` crediting `responsible_idx`, and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitMode {
    /// Publish before the move resolves (queued ahead of `PreMove`/`PostMove`).
    Before,
    /// Publish once the move (and any tile features it lands on) has fully
    /// resolved. Used by abilities that move themselves reactively, so the
    /// trigger count reflects a completed effect.
    AfterResolution,
    /// The caller (typically `Ability::execute` returning
    /// `AbilityOutcome::Triggered`) publishes its own event; the primitive
    /// stays silent.
    None,
}

/// Runs every racer's installed modifiers against an in-flight move-distance
/// query and returns the summed contribution. Each modifier decides its own
/// relevance by comparing its owner against `rolling_idx` (see
/// `RacerModifier::modify_roll`); each contribution it pushes is credited
/// with its own `AbilityTriggeredEvent` so reactive abilities like Scoocher
/// can observe them as discrete steps.
fn resolve_move_query(engine: &mut Engine, phase: Phase, rolling_idx: RacerIdx) -> MoveQuery {
    let mut query = MoveQuery::default();
    let racer_count = engine.racers.len();

    for i in 0..racer_count {
        let owner_idx = RacerIdx::new(i);
        let modifier_count = engine.racer(owner_idx).modifiers.len();
        for mi in 0..modifier_count {
            let modifier = std::mem::replace(
                &mut engine.racer_mut(owner_idx).modifiers[mi],
                Box::new(NullModifier),
            );
            let before = query.modifier_sources.len();
            modifier.modify_roll(&mut query, owner_idx, engine, rolling_idx);
            let name = modifier.name();
            engine.racer_mut(owner_idx).modifiers[mi] = modifier;

            for _ in before..query.modifier_sources.len() {
                engine.publish_ability_triggered(phase, owner_idx, Some(rolling_idx), name);
            }
        }
    }
    query
}

/// True if any *other* racer's modifier vetoes this move landing past the
/// finish line (Stickler's veto). The mover's own modifiers are never
/// consulted — a self-overshoot is never vetoed.
fn vetoed_by_another_racer(engine: &Engine, moved_idx: RacerIdx) -> bool {
    engine.racers.iter().any(|r| {
        r.idx != moved_idx
            && r.modifiers.iter().any(|m| m.vetoes_finish_overshoot())
    })
}

/// Moves `moved_idx` by `distance` tiles (which may be negative), running the
/// full move-distance query, publishing `PreMove`/`PostMove`, applying any
/// static tile features at the landing tile, and checking for a finish.
///
/// The floor-at-zero rule (a racer can never be pushed to a negative
/// position) only applies when the *base* `distance` is non-negative;
/// Centaur's Trample and similar pure-backward effects are allowed to go
/// negative unfloored, matching the scenario's literal numbers.
pub fn push_move(
    engine: &mut Engine,
    distance: i32,
    phase: Phase,
    moved_idx: RacerIdx,
    source: &'static str,
    responsible_idx: RacerIdx,
    emit: EmitMode,
) {
    if engine.racer(moved_idx).finished {
        return;
    }

    // Roll modifiers only act on the dice-roll-derived main move; reactive
    // and tile-induced pushes carry their distance as-is.
    let total = if phase == Phase::MainMove {
        let query = resolve_move_query(engine, phase, moved_idx);
        engine.record_move_query(phase, responsible_idx, Some(moved_idx), query.modifiers.clone(), query.modifier_sources.clone());
        let raw_total = distance + query.sum();
        if distance < 0 { raw_total } else { raw_total.max(0) }
    } else if distance < 0 {
        distance
    } else {
        distance.max(0)
    };

    let start = engine.racer(moved_idx).position;
    let end = start + total;

    if end > engine.board.length && vetoed_by_another_racer(engine, moved_idx) {
        engine.log_info(&format!("{} move vetoed by Stickler", engine.racer(moved_idx).repr()));
        return;
    }

    if let EmitMode::Before = emit {
        engine.publish_ability_triggered(phase, responsible_idx, Some(moved_idx), source);
    }

    engine.publish_event(
        crate::event::EventKind::PreMove { start_tile: start, end_tile: end },
        phase,
        responsible_idx,
        Some(moved_idx),
    );

    publish_passings(engine, moved_idx, start, end, phase);

    engine.racer_mut(moved_idx).position = end;

    engine.apply_tile_features(moved_idx, end);

    engine.publish_event(
        crate::event::EventKind::PostMove { start_tile: start, end_tile: end },
        phase,
        responsible_idx,
        Some(moved_idx),
    );

    engine.check_finish(moved_idx);

    if let EmitMode::AfterResolution = emit {
        engine.publish_ability_triggered(phase, responsible_idx, Some(moved_idx), source);
    }
}

/// Publishes `Passing` for every other racer whose position lies strictly
/// between `start` (exclusive) and `end` (inclusive), ordered by tile then
/// by racer index ascending. A negative-distance move (end < start) passes
/// no one.
fn publish_passings(engine: &mut Engine, passing_idx: RacerIdx, start: i32, end: i32, phase: Phase) {
    if end <= start {
        return;
    }
    let mut passed: Vec<RacerIdx> = engine
        .racers
        .iter()
        .filter(|r| !r.finished && r.idx != passing_idx && r.position > start && r.position < end)
        .map(|r| r.idx)
        .collect();
    passed.sort_by_key(|idx| engine.racer(*idx).position);

    for passed_idx in passed {
        engine.publish_event(
            crate::event::EventKind::Passing { passing_racer_idx: passing_idx, passed_racer_idx: passed_idx },
            phase,
            passing_idx,
            Some(passed_idx),
        );
    }
}

/// Teleports `warped_idx` to an absolute tile, bypassing any racers between
/// the old and new positions (no `Passing` events), but still running the
/// move-distance query, tile features, and finish check.
pub fn push_warp(
    engine: &mut Engine,
    target: i32,
    phase: Phase,
    warped_idx: RacerIdx,
    source: &'static str,
    responsible_idx: RacerIdx,
    emit: EmitMode,
) {
    if engine.racer(warped_idx).finished {
        return;
    }

    if target > engine.board.length && vetoed_by_another_racer(engine, warped_idx) {
        engine.log_info(&format!("{} warp vetoed by Stickler", engine.racer(warped_idx).repr()));
        return;
    }

    if let EmitMode::Before = emit {
        engine.publish_ability_triggered(phase, responsible_idx, Some(warped_idx), source);
    }

    let start = engine.racer(warped_idx).position;
    let target = target.max(0);

    engine.publish_event(crate::event::EventKind::PreWarp, phase, responsible_idx, Some(warped_idx));

    engine.racer_mut(warped_idx).position = target;
    engine.apply_tile_features(warped_idx, target);

    engine.publish_event(
        crate::event::EventKind::PostWarp { start_tile: start, end_tile: target },
        phase,
        responsible_idx,
        Some(warped_idx),
    );

    engine.check_finish(warped_idx);

    if let EmitMode::AfterResolution = emit {
        engine.publish_ability_triggered(phase, responsible_idx, Some(warped_idx), source);
    }
}

/// Marks `tripped_idx` tripped (their next main move is skipped by the turn
/// driver) and publishes `Trip`.
pub fn push_trip(
    engine: &mut Engine,
    tripped_idx: RacerIdx,
    source: &'static str,
    responsible_idx: RacerIdx,
    phase: Phase,
) {
    if engine.racer(tripped_idx).finished {
        return;
    }
    engine.racer_mut(tripped_idx).tripped = true;
    engine.log_debug(&format!("{} tripped by {}", engine.racer(tripped_idx).repr(), source));
    engine.publish_event(crate::event::EventKind::Trip, phase, responsible_idx, Some(tripped_idx));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::dice::ScriptedDice;
    use crate::engine::RacerConfig;
    use crate::rules::GameRules;
    use crate::types::RacerName;

    fn one_racer_engine(length: i32) -> Engine {
        Engine::new_engine(
            Board::new(length),
            vec![RacerConfig { name: RacerName::BabaYaga, start_pos: 0 }],
            Box::new(ScriptedDice::new([1, 1, 1, 1, 1])),
            GameRules::default(),
        )
        .unwrap()
    }

    #[test]
    fn push_move_advances_position() {
        let mut engine = one_racer_engine(30);
        let idx = RacerIdx::new(0);
        push_move(&mut engine, 4, Phase::MainMove, idx, "Test", idx, EmitMode::None);
        assert_eq!(engine.racer(idx).position, 4);
    }

    #[test]
    fn push_move_floors_nonnegative_distance_at_zero() {
        let mut engine = one_racer_engine(30);
        let idx = RacerIdx::new(0);
        push_move(&mut engine, 0, Phase::MainMove, idx, "Test", idx, EmitMode::None);
        assert_eq!(engine.racer(idx).position, 0);
    }

    #[test]
    fn push_move_allows_negative_result_for_negative_distance() {
        let mut engine = one_racer_engine(30);
        let idx = RacerIdx::new(0);
        engine.racer_mut(idx).position = 1;
        push_move(&mut engine, -5, Phase::Reaction, idx, "Trample", idx, EmitMode::None);
        assert_eq!(engine.racer(idx).position, -4);
    }

    #[test]
    fn push_move_past_length_finishes_the_racer() {
        let mut engine = one_racer_engine(10);
        let idx = RacerIdx::new(0);
        engine.racer_mut(idx).position = 8;
        push_move(&mut engine, 5, Phase::MainMove, idx, "Test", idx, EmitMode::None);
        assert_eq!(engine.racer(idx).position, 10);
        assert!(engine.racer(idx).finished);
        assert_eq!(engine.racer(idx).finish_position, Some(1));
    }

    #[test]
    fn push_warp_bypasses_passing_events() {
        let mut engine = one_racer_engine(30);
        let idx = RacerIdx::new(0);
        push_warp(&mut engine, 20, Phase::Reaction, idx, "Test", idx, EmitMode::None);
        assert_eq!(engine.racer(idx).position, 20);
    }

    #[test]
    fn push_trip_sets_tripped_flag() {
        let mut engine = one_racer_engine(30);
        let idx = RacerIdx::new(0);
        push_trip(&mut engine, idx, "Test", idx, Phase::Reaction);
        assert!(engine.racer(idx).tripped);
    }
}
