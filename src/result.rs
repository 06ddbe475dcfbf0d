//! The consumable result schema: what a finished (or aborted) race reports.

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::types::{ErrorCode, RacerName};

/// Per-racer outcome and bookkeeping for one race.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct RacerResult {
    pub config_hash: String,
    pub racer_id: usize,
    pub racer_name: RacerName,
    pub final_vp: u32,
    pub turns_taken: u32,
    pub recovery_turns: u32,
    pub sum_dice_rolled: u64,
    pub ability_trigger_count: u32,
    pub ability_self_target_count: u32,
    pub ability_target_count: u32,
    pub finish_position: Option<u32>,
    pub eliminated: bool,
    pub rank: Option<u32>,
}

/// The full race record: one `RacerResult` per roster entry plus
/// race-level metadata, including whether a loop bound aborted the run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct RaceResult {
    pub config_hash: String,
    pub seed: u64,
    pub board_id: String,
    pub racer_names: Vec<RacerName>,
    pub racer_count: usize,
    pub execution_time_ms: u64,
    pub aborted: bool,
    pub error_code: Option<ErrorCode>,
    pub total_turns: u32,
    pub racers: Vec<RacerResult>,
}

#[cfg(feature = "serialization")]
impl Serialize for RacerName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serialization")]
impl<'de> Deserialize<'de> for RacerName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        crate::types::racer_name_from_str(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown racer name {s:?}")))
    }
}

#[cfg(feature = "serialization")]
impl Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serialization")]
impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "CRITICAL_LOOP_DETECTED" => Ok(ErrorCode::CriticalLoopDetected),
            "MINOR_LOOP_DETECTED" => Ok(ErrorCode::MinorLoopDetected),
            "MAX_TURNS_REACHED" => Ok(ErrorCode::MaxTurnsReached),
            other => Err(serde::de::Error::custom(format!("unknown error code {other:?}"))),
        }
    }
}
