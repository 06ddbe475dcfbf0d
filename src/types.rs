use std::fmt;

/// Coarse tag on events indicating which stage of a turn they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Setup,
    TurnStart,
    RollWindow,
    MainMove,
    Reaction,
    TurnEnd,
}

/// Closed set of racer archetypes. Most carry no bespoke ability in this
/// crate (see the ability catalogue) and simply race with an empty
/// ability list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RacerName {
    BabaYaga,
    Banana,
    Centaur,
    Copycat,
    FlipFlop,
    Gunk,
    HugeBaby,
    Romantic,
    Scoocher,
    PartyAnimal,
    Magician,
    Skipper,
    Genius,
    Legs,
    Hare,
    Lackey,
    Dicemonger,
    Suckerfish,
    Duelist,
    LovableLoser,
    Leaptoad,
    Mastermind,
    Stickler,
    Sisyphus,
    Blimp,
    Coach,
    Inchworm,
}

impl fmt::Display for RacerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Inverse of `Display` for `RacerName`, used by the serde round-trip.
#[cfg(feature = "serialization")]
pub fn racer_name_from_str(s: &str) -> Option<RacerName> {
    use RacerName::*;
    Some(match s {
        "BabaYaga" => BabaYaga,
        "Banana" => Banana,
        "Centaur" => Centaur,
        "Copycat" => Copycat,
        "FlipFlop" => FlipFlop,
        "Gunk" => Gunk,
        "HugeBaby" => HugeBaby,
        "Romantic" => Romantic,
        "Scoocher" => Scoocher,
        "PartyAnimal" => PartyAnimal,
        "Magician" => Magician,
        "Skipper" => Skipper,
        "Genius" => Genius,
        "Legs" => Legs,
        "Hare" => Hare,
        "Lackey" => Lackey,
        "Dicemonger" => Dicemonger,
        "Suckerfish" => Suckerfish,
        "Duelist" => Duelist,
        "LovableLoser" => LovableLoser,
        "Leaptoad" => Leaptoad,
        "Mastermind" => Mastermind,
        "Stickler" => Stickler,
        "Sisyphus" => Sisyphus,
        "Blimp" => Blimp,
        "Coach" => Coach,
        "Inchworm" => Inchworm,
        _ => return None,
    })
}

/// Resolver ordering mode for reaction timing. BFS (the default) runs every
/// listener on an event before any of its reactions fire. DFS settles each
/// listener's reaction, cascades included, before moving to the next
/// listener on the same event — kept for backward-compatible tests only,
/// since it risks starving later handlers on a busy event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimingMode {
    #[default]
    Bfs,
    Dfs,
}

/// Race-level status codes surfaced on an aborted or capped result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    CriticalLoopDetected,
    /// Reserved for schema compatibility with the external persistence
    /// layer; nothing in this engine currently distinguishes it from
    /// `CriticalLoopDetected`.
    MinorLoopDetected,
    MaxTurnsReached,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::CriticalLoopDetected => "CRITICAL_LOOP_DETECTED",
            ErrorCode::MinorLoopDetected => "MINOR_LOOP_DETECTED",
            ErrorCode::MaxTurnsReached => "MAX_TURNS_REACHED",
        };
        write!(f, "{s}")
    }
}
