pub mod abilities;
pub mod ability;
pub mod agent;
pub mod board;
pub mod dice;
pub mod engine;
pub mod error;
pub mod event;
pub mod ids;
pub mod modifier;
pub mod movement;
pub mod racer;
pub mod resolver;
pub mod result;
pub mod rules;
pub mod turn;
pub mod types;

pub use ability::{Ability, AbilityOutcome, DecisionContext};
pub use agent::{Agent, AutoAgent, BaselineAgent};
pub use board::{Board, TileFeature};
pub use dice::{DiceSource, ScriptedDice, SeededDice};
pub use engine::{Engine, RacerConfig};
pub use error::{ConfigError, GameError};
pub use event::{Event, EventKind, EventTag};
pub use ids::{EventId, RacerIdx};
pub use modifier::{MoveQuery, RacerModifier};
pub use movement::{push_move, push_trip, push_warp, EmitMode};
pub use racer::{RacerState, RollOverride};
pub use result::{RaceResult, RacerResult};
pub use rules::{config_hash, GameRules};
pub use types::{ErrorCode, Phase, RacerName, TimingMode};
