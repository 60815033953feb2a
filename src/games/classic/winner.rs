//! How a Classic game ends.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::color::ClassicTeam;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WinningReason {
    TargetScoreReached,
    OpponentHitAssassin,
    OpponentQuit,
}

impl fmt::Display for WinningReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinningReason::TargetScoreReached => write!(f, "Target score reached"),
            WinningReason::OpponentHitAssassin => write!(f, "Opponent hit assassin card"),
            WinningReason::OpponentQuit => write!(f, "Opponent quit"),
        }
    }
}

/// The winning team and why it won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Winner {
    pub team: ClassicTeam,
    pub reason: WinningReason,
}

impl Winner {
    #[must_use]
    pub const fn new(team: ClassicTeam, reason: WinningReason) -> Self {
        Self { team, reason }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} team ({})", self.team, self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_display() {
        let winner = Winner::new(ClassicTeam::Red, WinningReason::OpponentQuit);
        assert_eq!(winner.to_string(), "Red team (Opponent quit)");
    }

    #[test]
    fn test_winner_json() {
        let winner = Winner::new(ClassicTeam::Blue, WinningReason::OpponentHitAssassin);
        let json = serde_json::to_value(winner).unwrap();
        assert_eq!(json["team"], "BLUE");
        assert_eq!(json["reason"], "OPPONENT_HIT_ASSASSIN");
    }
}
