//! Per-race configuration and the deterministic config-hash digest.

use sha2::{Digest, Sha256};

use crate::types::{RacerName, TimingMode};

/// Caps and mode selection for one race. Constructor arguments, not a
/// file-backed config layer — the engine has no configuration surface
/// beyond what the caller passes to `new_engine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub timing_mode: TimingMode,
    pub max_turns: u32,
    pub max_steps_per_drain: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            timing_mode: TimingMode::Bfs,
            max_turns: 200,
            max_steps_per_drain: 1000,
        }
    }
}

/// Deterministic digest of `(board_id, seed, sorted racer-name tuple,
/// rules)`, hex-encoded. Lets an external batch runner detect and dedupe
/// identical configurations without re-running them.
pub fn config_hash(board_id: &str, seed: u64, racer_names: &[RacerName], rules: &GameRules) -> String {
    let mut sorted: Vec<String> = racer_names.iter().map(|n| n.to_string()).collect();
    sorted.sort();

    let mut hasher = Sha256::new();
    hasher.update(board_id.as_bytes());
    hasher.update(seed.to_le_bytes());
    for name in &sorted {
        hasher.update(name.as_bytes());
        hasher.update([0u8]);
    }
    hasher.update([rules.timing_mode as u8]);
    hasher.update(rules.max_turns.to_le_bytes());
    hasher.update(rules.max_steps_per_drain.to_le_bytes());

    let digest = hasher.finalize();
    digest.iter().map(|b| format!("{b:02x}")).collect()
}
