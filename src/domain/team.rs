//! Canonical team registry.
//!
//! Data providers name teams differently (full names, abbreviations,
//! relocated franchises). Everything is mapped onto a canonical [`TeamId`]
//! here so matchups are matched exactly instead of by substring.

use std::collections::HashMap;

use serde::Serialize;

use super::id::TeamId;

/// A canonical team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub nickname: String,
}

/// Lookup table from any accepted spelling to a canonical team.
#[derive(Debug, Clone, Default)]
pub struct TeamRegistry {
    teams: Vec<Team>,
    index: HashMap<String, usize>,
}

/// (abbreviation, full name, nickname, historical aliases)
const NFL_TEAMS: &[(&str, &str, &str, &[&str])] = &[
    ("ARI", "Arizona Cardinals", "Cardinals", &[]),
    ("ATL", "Atlanta Falcons", "Falcons", &[]),
    ("BAL", "Baltimore Ravens", "Ravens", &[]),
    ("BUF", "Buffalo Bills", "Bills", &[]),
    ("CAR", "Carolina Panthers", "Panthers", &[]),
    ("CHI", "Chicago Bears", "Bears", &[]),
    ("CIN", "Cincinnati Bengals", "Bengals", &[]),
    ("CLE", "Cleveland Browns", "Browns", &[]),
    ("DAL", "Dallas Cowboys", "Cowboys", &[]),
    ("DEN", "Denver Broncos", "Broncos", &[]),
    ("DET", "Detroit Lions", "Lions", &[]),
    ("GB", "Green Bay Packers", "Packers", &[]),
    ("HOU", "Houston Texans", "Texans", &[]),
    ("IND", "Indianapolis Colts", "Colts", &[]),
    ("JAX", "Jacksonville Jaguars", "Jaguars", &["JAC"]),
    ("KC", "Kansas City Chiefs", "Chiefs", &[]),
    ("LV", "Las Vegas Raiders", "Raiders", &["OAK", "Oakland Raiders"]),
    ("LAC", "Los Angeles Chargers", "Chargers", &["SD", "San Diego Chargers"]),
    ("LAR", "Los Angeles Rams", "Rams", &["LA", "STL", "St. Louis Rams"]),
    ("MIA", "Miami Dolphins", "Dolphins", &[]),
    ("MIN", "Minnesota Vikings", "Vikings", &[]),
    ("NE", "New England Patriots", "Patriots", &[]),
    ("NO", "New Orleans Saints", "Saints", &[]),
    ("NYG", "New York Giants", "Giants", &[]),
    ("NYJ", "New York Jets", "Jets", &[]),
    ("PHI", "Philadelphia Eagles", "Eagles", &[]),
    ("PIT", "Pittsburgh Steelers", "Steelers", &[]),
    ("SF", "San Francisco 49ers", "49ers", &[]),
    ("SEA", "Seattle Seahawks", "Seahawks", &[]),
    ("TB", "Tampa Bay Buccaneers", "Buccaneers", &[]),
    ("TEN", "Tennessee Titans", "Titans", &[]),
    (
        "WAS",
        "Washington Commanders",
        "Commanders",
        &["WSH", "Washington Football Team", "Washington Redskins"],
    ),
];

fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl TeamRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The 32-team NFL with historical aliases.
    #[must_use]
    pub fn nfl() -> Self {
        let mut registry = Self::new();
        for (abbreviation, name, nickname, aliases) in NFL_TEAMS {
            registry.register(
                Team {
                    id: TeamId::from(*abbreviation),
                    name: (*name).to_string(),
                    nickname: (*nickname).to_string(),
                },
                aliases,
            );
        }
        registry
    }

    /// Add a team. The abbreviation, full name, nickname and every alias
    /// become lookup keys; later registrations win on collisions.
    pub fn register(&mut self, team: Team, aliases: &[&str]) {
        let position = self.teams.len();
        let keys = [team.id.as_str(), team.name.as_str(), team.nickname.as_str()];
        for key in keys.into_iter().chain(aliases.iter().copied()) {
            self.index.insert(normalize(key), position);
        }
        self.teams.push(team);
    }

    /// Case-insensitive exact lookup by abbreviation, name, nickname or alias.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&Team> {
        self.index
            .get(&normalize(name))
            .and_then(|&position| self.teams.get(position))
    }

    /// Canonical team by id.
    #[must_use]
    pub fn get(&self, id: &TeamId) -> Option<&Team> {
        self.teams.iter().find(|team| &team.id == id)
    }

    /// Display name for `id`, falling back to the id itself.
    #[must_use]
    pub fn display_name(&self, id: &TeamId) -> String {
        self.get(id)
            .map_or_else(|| id.to_string(), |team| team.name.clone())
    }

    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}
