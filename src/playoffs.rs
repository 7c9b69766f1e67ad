//! Playoff qualification lookup
//!
//! Static per-season table of the team codes that reached the postseason,
//! keyed the way the source page encodes them (three-letter franchise
//! codes, four-digit seasons).

use std::collections::{HashMap, HashSet};

/// Qualifying team codes per season.
///
/// Adding a season is a new entry here, nothing else. Seasons absent from
/// the table have no known qualifiers.
const QUALIFIERS: &[(&str, &[&str])] = &[
    (
        "2022",
        &[
            "KAN", "BUF", "CIN", "JAX", "LAC", "BAL", "MIA", "PHI", "SFO", "MIN", "TAM", "DAL",
            "NYG", "SEA",
        ],
    ),
    (
        "2021",
        &[
            "KAN", "BUF", "CIN", "NWE", "TEN", "LVR", "PIT", "GNB", "SFO", "PHI", "TAM", "DAL",
            "LAR", "ARI",
        ],
    ),
    (
        "2020",
        &[
            "KAN", "BUF", "IND", "TEN", "CLE", "BAL", "GNB", "NOR", "LAR", "WAS", "TAM", "CHI",
            "SEA",
        ],
    ),
];

/// Season → qualifying-teams lookup
pub struct PlayoffTable {
    seasons: HashMap<&'static str, HashSet<&'static str>>,
}

impl Default for PlayoffTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayoffTable {
    pub fn new() -> Self {
        let seasons = QUALIFIERS
            .iter()
            .map(|(season, teams)| (*season, teams.iter().copied().collect()))
            .collect();
        PlayoffTable { seasons }
    }

    /// True iff `team` qualified for the playoffs in `season`.
    ///
    /// An unconfigured season is valid input and returns false for every
    /// team.
    pub fn qualifies(&self, season: &str, team: &str) -> bool {
        self.seasons
            .get(season)
            .map(|teams| teams.contains(team))
            .unwrap_or(false)
    }

    /// The flag value written on output rows.
    pub fn flag(&self, season: &str, team: &str) -> &'static str {
        if self.qualifies(season, team) {
            "Y"
        } else {
            "N"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualifying_team_is_found() {
        let table = PlayoffTable::new();
        assert!(table.qualifies("2022", "KAN"));
        assert!(table.qualifies("2021", "ARI"));
        assert!(table.qualifies("2020", "WAS"));
    }

    #[test]
    fn unknown_team_does_not_qualify() {
        let table = PlayoffTable::new();
        assert!(!table.qualifies("2022", "XYZ"));
        assert_eq!(table.flag("2022", "XYZ"), "N");
    }

    #[test]
    fn unconfigured_season_has_no_qualifiers() {
        let table = PlayoffTable::new();
        assert!(!table.qualifies("1999", "KAN"));
        assert_eq!(table.flag("1999", "KAN"), "N");
    }

    #[test]
    fn flag_renders_y_for_qualifier() {
        let table = PlayoffTable::new();
        assert_eq!(table.flag("2022", "KAN"), "Y");
        assert_eq!(table.flag("2020", "CHI"), "Y");
    }

    #[test]
    fn qualification_is_season_specific() {
        let table = PlayoffTable::new();
        // Jacksonville made it in 2022 but not 2021
        assert!(table.qualifies("2022", "JAX"));
        assert!(!table.qualifies("2021", "JAX"));
    }
}
