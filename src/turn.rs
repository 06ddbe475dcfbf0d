//! The per-turn driver: the fixed eight-step sequence every active racer's
//! turn runs through.

use crate::error::GameError;
use crate::event::EventKind;
use crate::ids::RacerIdx;
use crate::movement::{push_move, EmitMode};
use crate::types::Phase;

/// Runs one turn for `engine.current_racer_idx`, then advances the cursor.
/// Returns `Err` only when a drain hits a loop bound; the caller (`run_race`)
/// treats that as an aborted race.
pub fn run_turn(engine: &mut crate::engine::Engine) -> Result<(), GameError> {
    let racer_idx = engine.current_racer_idx;

    if engine.racer(racer_idx).finished {
        engine.advance_cursor_pub();
        return Ok(());
    }

    engine.turn_count += 1;
    engine.racer_mut(racer_idx).turns_taken += 1;

    engine.publish_event(EventKind::TurnStart, Phase::TurnStart, racer_idx, Some(racer_idx));
    engine.drain().map_err(GameError::Loop)?;

    if engine.racer(racer_idx).tripped {
        engine.racer_mut(racer_idx).tripped = false;
        engine.racer_mut(racer_idx).recovery_turns += 1;
        engine.publish_event(EventKind::TurnEnd, Phase::TurnEnd, racer_idx, Some(racer_idx));
        engine.drain().map_err(GameError::Loop)?;
        engine.advance_cursor_pub();
        return Ok(());
    }

    let dice_value = engine.roll_dice();
    let base_value = match engine.racer_mut(racer_idx).roll_override.take() {
        Some(over) => over.value as i32,
        None => dice_value as i32,
    };
    engine.racer_mut(racer_idx).sum_dice_rolled += dice_value as u64;

    engine.publish_event(
        EventKind::RollResult { dice_value, base_value },
        Phase::RollWindow,
        racer_idx,
        Some(racer_idx),
    );
    engine.drain().map_err(GameError::Loop)?;

    if !engine.racer(racer_idx).main_move_consumed {
        run_main_move(engine, racer_idx, base_value);
        engine.drain().map_err(GameError::Loop)?;
    }

    engine.publish_event(EventKind::TurnEnd, Phase::TurnEnd, racer_idx, Some(racer_idx));
    engine.drain().map_err(GameError::Loop)?;

    engine.racer_mut(racer_idx).main_move_consumed = false;
    engine.racer_mut(racer_idx).roll_override = None;

    engine.advance_cursor_pub();
    Ok(())
}

fn run_main_move(engine: &mut crate::engine::Engine, racer_idx: RacerIdx, base_value: i32) {
    push_move(engine, base_value, Phase::MainMove, racer_idx, "System", racer_idx, EmitMode::None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::dice::ScriptedDice;
    use crate::engine::{Engine, RacerConfig};
    use crate::rules::GameRules;
    use crate::types::RacerName;

    #[test]
    fn run_turn_advances_position_by_roll() {
        let mut engine = Engine::new_engine(
            Board::new(30),
            vec![
                RacerConfig { name: RacerName::BabaYaga, start_pos: 0 },
                RacerConfig { name: RacerName::BabaYaga, start_pos: 0 },
            ],
            Box::new(ScriptedDice::new([4])),
            GameRules::default(),
        )
        .unwrap();
        engine.run_turn().unwrap();
        assert_eq!(engine.racer(RacerIdx::new(0)).position, 4);
        assert_eq!(engine.current_racer_idx, RacerIdx::new(1));
    }

    #[test]
    fn tripped_racer_skips_their_roll_and_recovers() {
        let mut engine = Engine::new_engine(
            Board::new(30),
            vec![RacerConfig { name: RacerName::BabaYaga, start_pos: 5 }],
            Box::new(ScriptedDice::new([3])),
            GameRules::default(),
        )
        .unwrap();
        engine.racer_mut(RacerIdx::new(0)).tripped = true;
        engine.run_turn().unwrap();
        assert_eq!(engine.racer(RacerIdx::new(0)).position, 5);
        assert!(!engine.racer(RacerIdx::new(0)).tripped);
        assert_eq!(engine.racer(RacerIdx::new(0)).recovery_turns, 1);
    }
}
