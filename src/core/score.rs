//! Per-team reveal counters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::team::Team;

/// How many cards a team has to find and how many it already found.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamScore {
    pub total: u32,
    pub revealed: u32,
}

impl TeamScore {
    #[must_use]
    pub const fn new(total: u32) -> Self {
        Self { total, revealed: 0 }
    }

    /// Cards still to find. Never negative.
    #[must_use]
    pub const fn unrevealed(&self) -> u32 {
        self.total.saturating_sub(self.revealed)
    }

    #[must_use]
    pub const fn target_reached(&self) -> bool {
        self.unrevealed() == 0
    }

    /// Count one more revealed card. Returns true iff the target is now reached.
    pub fn add_point(&mut self) -> bool {
        if self.revealed < self.total {
            self.revealed += 1;
        }
        self.target_reached()
    }
}

/// Scores of every team in a game.
///
/// ```
/// use codenames::core::Score;
/// use codenames::games::classic::ClassicTeam;
///
/// let mut score = Score::new([(ClassicTeam::Blue, 2), (ClassicTeam::Red, 1)]);
/// assert!(!score.add_point(ClassicTeam::Blue));
/// assert!(score.add_point(ClassicTeam::Blue));
/// assert_eq!(score.get(ClassicTeam::Red).unrevealed(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Score<T: Team> {
    teams: BTreeMap<T, TeamScore>,
}

impl<T: Team> Score<T> {
    /// Create a score from each team's total.
    pub fn new(totals: impl IntoIterator<Item = (T, u32)>) -> Self {
        Self {
            teams: totals
                .into_iter()
                .map(|(team, total)| (team, TeamScore::new(total)))
                .collect(),
        }
    }

    /// Score of `team`; zero for teams that were never registered.
    #[must_use]
    pub fn get(&self, team: T) -> TeamScore {
        self.teams.get(&team).copied().unwrap_or_default()
    }

    /// Count a revealed card for `team`. Returns true iff its target is reached.
    pub fn add_point(&mut self, team: T) -> bool {
        self.teams.entry(team).or_default().add_point()
    }

    /// Iterate over `(team, score)` in team order.
    pub fn iter(&self) -> impl Iterator<Item = (T, TeamScore)> + '_ {
        self.teams.iter().map(|(team, score)| (*team, *score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::classic::ClassicTeam;
    use crate::games::duet::DuetTeam;
    use proptest::prelude::*;

    #[test]
    fn test_add_point_reports_target() {
        let mut score = TeamScore::new(2);
        assert!(!score.add_point());
        assert_eq!(score.unrevealed(), 1);
        assert!(score.add_point());
        assert_eq!(score.unrevealed(), 0);
    }

    #[test]
    fn test_zero_total_is_already_reached() {
        let score = TeamScore::new(0);
        assert!(score.target_reached());
    }

    #[test]
    fn test_score_per_team() {
        let mut score = Score::new([(ClassicTeam::Blue, 9), (ClassicTeam::Red, 8)]);
        score.add_point(ClassicTeam::Red);
        assert_eq!(score.get(ClassicTeam::Red).revealed, 1);
        assert_eq!(score.get(ClassicTeam::Blue).revealed, 0);
    }

    #[test]
    fn test_score_json_uses_team_codes() {
        let score = Score::new([(DuetTeam::Main, 9)]);
        let json = serde_json::to_value(&score).unwrap();
        assert_eq!(json["teams"]["MAIN"]["total"], 9);
    }

    proptest! {
        #[test]
        fn test_add_point_true_exactly_at_zero(total in 1u32..20, points in 1u32..30) {
            let mut score = TeamScore::new(total);
            for i in 1..=points {
                let reached = score.add_point();
                prop_assert_eq!(reached, i >= total);
                prop_assert!(score.revealed <= score.total);
            }
        }
    }
}
