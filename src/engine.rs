//! The race engine: owns state, wires up the catalogue, and drives turns.

use crate::abilities::catalog;
use crate::agent::{Agent, AutoAgent};
use crate::board::{Board, TileFeature};
use crate::dice::DiceSource;
use crate::error::{ConfigError, GameError};
use crate::event::{Event, EventKind};
use crate::ids::RacerIdx;
use crate::racer::RacerState;
use crate::resolver::ResolverState;
use crate::result::{RaceResult, RacerResult};
use crate::rules::{self, GameRules};
use crate::types::{ErrorCode, Phase, RacerName};

/// One roster entry: archetype plus starting tile. A racer's index is its
/// position in the configs list: stable for the race, never reused.
#[derive(Debug, Clone)]
pub struct RacerConfig {
    pub name: RacerName,
    pub start_pos: i32,
}

pub struct Engine {
    pub board: Board,
    pub racers: Vec<RacerState>,
    pub rules: GameRules,
    pub current_racer_idx: RacerIdx,
    pub next_turn_override: Option<RacerIdx>,
    pub turn_count: u32,
    pub aborted: Option<ErrorCode>,
    pub(crate) resolver: ResolverState,
    dice: Box<dyn DiceSource>,
    agent: Box<dyn Agent>,
    trace: Vec<String>,
    observer: Option<Box<dyn FnMut(&Event)>>,
}

impl Engine {
    pub fn new_engine(
        board: Board,
        racer_configs: Vec<RacerConfig>,
        dice: Box<dyn DiceSource>,
        rules: GameRules,
    ) -> Result<Self, GameError> {
        if board.length <= 0 {
            return Err(ConfigError::InvalidBoardLength(board.length).into());
        }
        if racer_configs.is_empty() {
            return Err(ConfigError::EmptyRoster.into());
        }

        let mut racers = Vec::with_capacity(racer_configs.len());
        for (i, cfg) in racer_configs.into_iter().enumerate() {
            let idx = RacerIdx::new(i);
            let mut racer = RacerState::new(idx, cfg.name, cfg.start_pos);
            racer.abilities = catalog::abilities_for(cfg.name);
            racers.push(racer);
        }

        let mut engine = Engine {
            board,
            racers,
            rules,
            current_racer_idx: RacerIdx::new(0),
            next_turn_override: None,
            turn_count: 0,
            aborted: None,
            resolver: ResolverState::default(),
            dice,
            agent: Box::new(AutoAgent),
            trace: Vec::new(),
            observer: None,
        };

        for idx in engine.racer_indices() {
            let abilities = std::mem::take(&mut engine.racer_mut(idx).abilities);
            for ability in &abilities {
                ability.on_setup(idx, &mut engine);
                ability.on_gain(idx, &mut engine);
            }
            engine.racer_mut(idx).abilities = abilities;
        }

        Ok(engine)
    }

    pub fn set_observer(&mut self, observer: Box<dyn FnMut(&Event)>) {
        self.observer = Some(observer);
    }

    pub fn set_agent(&mut self, agent: Box<dyn Agent>) {
        self.agent = agent;
    }

    pub fn agent(&self) -> &dyn Agent {
        self.agent.as_ref()
    }

    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    pub fn log_info(&mut self, message: &str) {
        self.trace.push(message.to_string());
    }

    pub fn log_debug(&mut self, message: &str) {
        self.trace.push(format!("debug: {message}"));
    }

    fn racer_indices(&self) -> Vec<RacerIdx> {
        self.racers.iter().map(|r| r.idx).collect()
    }

    pub fn racer(&self, idx: RacerIdx) -> &RacerState {
        &self.racers[idx.index()]
    }

    pub fn racer_mut(&mut self, idx: RacerIdx) -> &mut RacerState {
        &mut self.racers[idx.index()]
    }

    pub fn get_racers_at_position(&self, position: i32) -> Vec<RacerIdx> {
        self.racers
            .iter()
            .filter(|r| !r.finished && r.position == position)
            .map(|r| r.idx)
            .collect()
    }

    pub fn get_active_racers(&self, except: Option<RacerIdx>) -> Vec<RacerIdx> {
        self.racers
            .iter()
            .filter(|r| !r.finished && Some(r.idx) != except)
            .map(|r| r.idx)
            .collect()
    }

    /// An ability may set `main_move_consumed` and call this to suppress
    /// the turn driver's normal main-move step.
    pub fn skip_main_move(&mut self, skipped_racer_idx: RacerIdx, source: &str) {
        self.log_info(&format!(
            "{} main move skipped by {}",
            self.racer(skipped_racer_idx).repr(),
            source
        ));
        self.racer_mut(skipped_racer_idx).main_move_consumed = true;
    }

    /// Publish an `AbilityTriggeredEvent` and update the responsible
    /// racer's trigger-count bookkeeping. The single path used both by
    /// `push_move`/`push_warp`'s `emit` parameter and by the resolver when
    /// `Ability::execute` returns `AbilityOutcome::Triggered`.
    pub(crate) fn publish_ability_triggered(
        &mut self,
        phase: Phase,
        responsible_idx: RacerIdx,
        target_idx: Option<RacerIdx>,
        source: &'static str,
    ) {
        let id = self.next_event_id();
        {
            let racer = self.racer_mut(responsible_idx);
            racer.ability_trigger_count += 1;
        }
        match target_idx {
            Some(t) if t == responsible_idx => {
                self.racer_mut(responsible_idx).ability_self_target_count += 1;
            }
            Some(_) => {
                self.racer_mut(responsible_idx).ability_target_count += 1;
            }
            None => {}
        }
        let event = Event {
            id,
            phase,
            responsible_racer_idx: responsible_idx,
            target_racer_idx: target_idx,
            kind: EventKind::AbilityTriggered { source },
        };
        self.emit_to_observer(&event);
        self.publish(event);
    }

    fn emit_to_observer(&mut self, event: &Event) {
        if let Some(observer) = self.observer.as_mut() {
            observer(event);
        }
    }

    pub(crate) fn publish_event(&mut self, kind: EventKind, phase: Phase, responsible_idx: RacerIdx, target_idx: Option<RacerIdx>) {
        let id = self.next_event_id();
        let event = Event {
            id,
            phase,
            responsible_racer_idx: responsible_idx,
            target_racer_idx: target_idx,
            kind,
        };
        self.emit_to_observer(&event);
        self.publish(event);
    }

    /// Recorded for observability only; never enters the dispatch queue
    /// (see `event::EventKind::MoveDistanceQuery`).
    pub(crate) fn record_move_query(&mut self, phase: Phase, responsible_idx: RacerIdx, target_idx: Option<RacerIdx>, modifiers: Vec<i32>, modifier_sources: Vec<(String, i32)>) {
        let id = self.next_event_id();
        let event = Event {
            id,
            phase,
            responsible_racer_idx: responsible_idx,
            target_racer_idx: target_idx,
            kind: EventKind::MoveDistanceQuery { modifiers, modifier_sources },
        };
        self.emit_to_observer(&event);
    }

    pub(crate) fn apply_tile_features(&mut self, moved_idx: RacerIdx, tile: i32) {
        let features = self.board.features_at(tile).to_vec();
        for feature in features {
            match feature {
                TileFeature::MoveDeltaTile(delta) => {
                    crate::movement::push_move(
                        self,
                        delta,
                        Phase::Reaction,
                        moved_idx,
                        "Board",
                        moved_idx,
                        crate::movement::EmitMode::None,
                    );
                }
                TileFeature::TripTile => {
                    crate::movement::push_trip(self, moved_idx, "Board", moved_idx, Phase::Reaction);
                }
                TileFeature::VictoryPointTile(delta) => {
                    let racer = self.racer_mut(moved_idx);
                    racer.victory_points = (racer.victory_points as i64 + delta as i64).max(0) as u32;
                }
            }
        }
    }

    /// Marks a racer finished once their position reaches or passes the
    /// board length. Stickler's own ability is exempt from the
    /// clamp-to-length rule (see `DESIGN.md`).
    pub(crate) fn check_finish(&mut self, moved_idx: RacerIdx) {
        let length = self.board.length;
        if self.racer(moved_idx).finished || self.racer(moved_idx).position < length {
            return;
        }
        let exempt = self
            .racer(moved_idx)
            .abilities
            .iter()
            .any(|a| a.exempts_finish_clamp());
        let finish_rank = 1 + self.racers.iter().filter(|r| r.finished).count() as u32;

        let racer = self.racer_mut(moved_idx);
        racer.finished = true;
        racer.tripped = false;
        racer.finish_position = Some(finish_rank);
        if !exempt {
            racer.position = length;
        }
    }

    fn active_racer_count(&self) -> usize {
        self.racers.iter().filter(|r| !r.finished).count()
    }

    fn advance_cursor(&mut self) {
        if let Some(overridden) = self.next_turn_override.take() {
            self.current_racer_idx = overridden;
            return;
        }
        let n = self.racers.len();
        let mut next = (self.current_racer_idx.index() + 1) % n;
        for _ in 0..n {
            if !self.racers[next].finished {
                break;
            }
            next = (next + 1) % n;
        }
        self.current_racer_idx = RacerIdx::new(next);
    }

    /// Runs exactly one turn for the current racer. Test hook with the
    /// same semantics `run_race` uses internally.
    pub fn run_turn(&mut self) -> Result<(), GameError> {
        crate::turn::run_turn(self)
    }

    /// Runs up to `n` turns, stopping early on finish/abort.
    pub fn run_turns(&mut self, n: u32) -> Result<(), GameError> {
        for _ in 0..n {
            if self.active_racer_count() <= 1 || self.aborted.is_some() {
                break;
            }
            self.run_turn()?;
        }
        Ok(())
    }

    /// Runs turns until finish or abort, returning the full race record.
    pub fn run_race(&mut self) -> Result<RaceResult, GameError> {
        let start = std::time::Instant::now();
        loop {
            if self.active_racer_count() <= 1 {
                break;
            }
            if self.turn_count >= self.rules.max_turns {
                self.aborted = Some(ErrorCode::MaxTurnsReached);
                break;
            }
            if let Err(code) = self.run_turn() {
                self.aborted = Some(code);
                break;
            }
        }
        Ok(self.build_result(start.elapsed().as_millis() as u64))
    }

    fn build_result(&self, execution_time_ms: u64) -> RaceResult {
        let board_id = format!("len{}", self.board.length);
        let names: Vec<RacerName> = self.racers.iter().map(|r| r.name).collect();
        let config_hash = rules::config_hash(&board_id, 0, &names, &self.rules);

        let racers = self
            .racers
            .iter()
            .map(|r| RacerResult {
                config_hash: config_hash.clone(),
                racer_id: r.idx.index(),
                racer_name: r.name,
                final_vp: r.victory_points,
                turns_taken: r.turns_taken,
                recovery_turns: r.recovery_turns,
                sum_dice_rolled: r.sum_dice_rolled,
                ability_trigger_count: r.ability_trigger_count,
                ability_self_target_count: r.ability_self_target_count,
                ability_target_count: r.ability_target_count,
                finish_position: r.finish_position,
                eliminated: self.aborted.is_some() && !r.finished,
                rank: r.finish_position.filter(|&p| p <= 2),
            })
            .collect();

        RaceResult {
            config_hash,
            seed: 0,
            board_id,
            racer_names: names,
            racer_count: self.racers.len(),
            execution_time_ms,
            aborted: self.aborted.is_some(),
            error_code: self.aborted,
            total_turns: self.turn_count,
            racers,
        }
    }

    pub(crate) fn roll_dice(&mut self) -> u8 {
        self.dice.next()
    }

    pub(crate) fn advance_cursor_pub(&mut self) {
        self.advance_cursor();
    }
}
