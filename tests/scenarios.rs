//! The six concrete scenarios, restated as integration tests against the
//! public crate API rather than ability-local unit tests.

use raceway::{Board, Engine, RacerConfig, RacerIdx, RacerName, ScriptedDice, GameRules};

fn idx(i: usize) -> RacerIdx {
    RacerIdx::new(i)
}

#[test]
fn banana_passing() {
    let mut engine = Engine::new_engine(
        Board::new(30),
        vec![
            RacerConfig { name: RacerName::Centaur, start_pos: 0 },
            RacerConfig { name: RacerName::Banana, start_pos: 4 },
        ],
        Box::new(ScriptedDice::new([6])),
        GameRules::default(),
    )
    .unwrap();
    engine.run_turn().unwrap();

    let centaur = engine.racer(idx(0));
    assert_eq!(centaur.position, 6);
    assert!(centaur.tripped);
    assert_eq!(engine.racer(idx(1)).position, 2);
    assert!(centaur.ability_trigger_count > 0);
    assert!(engine.racer(idx(1)).ability_trigger_count > 0);
}

#[test]
fn banana_landing_not_passing() {
    let mut engine = Engine::new_engine(
        Board::new(30),
        vec![
            RacerConfig { name: RacerName::Centaur, start_pos: 0 },
            RacerConfig { name: RacerName::Banana, start_pos: 4 },
        ],
        Box::new(ScriptedDice::new([4])),
        GameRules::default(),
    )
    .unwrap();
    engine.run_turn().unwrap();

    let centaur = engine.racer(idx(0));
    assert_eq!(centaur.position, 4);
    assert!(!centaur.tripped);
}

#[test]
fn romantic_chain() {
    let mut engine = Engine::new_engine(
        Board::new(30),
        vec![
            RacerConfig { name: RacerName::Romantic, start_pos: 0 },
            RacerConfig { name: RacerName::Banana, start_pos: 4 },
            RacerConfig { name: RacerName::FlipFlop, start_pos: 6 },
        ],
        Box::new(ScriptedDice::new([4])),
        GameRules::default(),
    )
    .unwrap();
    engine.run_turn().unwrap();

    assert_eq!(engine.racer(idx(0)).position, 8);
}

#[test]
fn scoocher_cascade_under_blimp() {
    let mut engine = Engine::new_engine(
        Board::new(30),
        vec![
            RacerConfig { name: RacerName::Blimp, start_pos: 0 },
            RacerConfig { name: RacerName::Coach, start_pos: 0 },
            RacerConfig { name: RacerName::Gunk, start_pos: 0 },
            RacerConfig { name: RacerName::Scoocher, start_pos: 10 },
        ],
        Box::new(ScriptedDice::new([2])),
        GameRules::default(),
    )
    .unwrap();
    engine.run_turn().unwrap();

    assert_eq!(engine.racer(idx(0)).position, 5);
    assert_eq!(engine.racer(idx(3)).position, 13);
    assert_eq!(engine.racer(idx(3)).ability_trigger_count, 3);
}

#[test]
fn sisyphus_curse() {
    let mut engine = Engine::new_engine(
        Board::new(30),
        vec![
            RacerConfig { name: RacerName::Mastermind, start_pos: 0 },
            RacerConfig { name: RacerName::Stickler, start_pos: 0 },
            RacerConfig { name: RacerName::Sisyphus, start_pos: 10 },
        ],
        Box::new(ScriptedDice::new([2, 2, 3, 2, 2, 6])),
        GameRules::default(),
    )
    .unwrap();
    engine.run_turns(6).unwrap();

    let sisyphus = engine.racer(idx(2));
    assert_eq!(sisyphus.position, 0);
    assert_eq!(sisyphus.victory_points, 3);
}

#[test]
fn stickler_veto() {
    let mut engine = Engine::new_engine(
        Board::new(30),
        vec![
            RacerConfig { name: RacerName::Stickler, start_pos: 0 },
            RacerConfig { name: RacerName::Banana, start_pos: 28 },
        ],
        Box::new(ScriptedDice::new([3, 3, 2, 2])),
        GameRules::default(),
    )
    .unwrap();
    engine.run_turns(2).unwrap();
    assert_eq!(engine.racer(idx(1)).position, 28);

    engine.run_turns(2).unwrap();
    assert_eq!(engine.racer(idx(1)).position, 30);
    assert!(engine.racer(idx(1)).finished);
}
