//! ESPN scoreboard response types.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

/// ESPN season type for the regular season.
pub const REGULAR_SEASON: u32 = 2;

#[derive(Debug, Clone, Deserialize)]
pub struct Scoreboard {
    #[serde(default)]
    pub events: Vec<EspnEvent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EspnEvent {
    /// ISO timestamp; ESPN omits seconds (`2025-09-07T17:00Z`).
    pub date: String,
    #[serde(default)]
    pub season: Option<EspnSeason>,
    #[serde(default)]
    pub competitions: Vec<Competition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EspnSeason {
    pub year: i32,
    #[serde(rename = "type")]
    pub season_type: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Competition {
    #[serde(default)]
    pub competitors: Vec<Competitor>,
    pub status: Status,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub home_away: String,
    #[serde(default)]
    pub score: Option<String>,
    pub team: EspnTeam,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EspnTeam {
    pub abbreviation: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Status {
    #[serde(rename = "type")]
    pub status_type: StatusType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusType {
    #[serde(default)]
    pub completed: bool,
}

impl EspnEvent {
    /// Kickoff time, accepting both full RFC 3339 and ESPN's minute precision.
    #[must_use]
    pub fn kickoff(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.date)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(&self.date, "%Y-%m-%dT%H:%MZ")
                    .ok()
                    .map(|naive| naive.and_utc())
            })
    }

    /// True unless ESPN marks the event as pre- or post-season.
    #[must_use]
    pub fn is_regular_season(&self) -> bool {
        self.season
            .as_ref()
            .map_or(true, |season| season.season_type == REGULAR_SEASON)
    }
}

impl Competitor {
    #[must_use]
    pub fn is_home(&self) -> bool {
        self.home_away.eq_ignore_ascii_case("home")
    }

    /// Final score; `None` when missing or unparseable.
    #[must_use]
    pub fn points(&self) -> Option<u32> {
        self.score.as_deref().and_then(|s| s.trim().parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(date: &str) -> EspnEvent {
        EspnEvent {
            date: date.to_string(),
            season: None,
            competitions: vec![],
        }
    }

    #[test]
    fn test_kickoff_parses_minute_precision() {
        let expected = Utc.with_ymd_and_hms(2025, 9, 7, 17, 0, 0).unwrap();
        assert_eq!(event("2025-09-07T17:00Z").kickoff(), Some(expected));
        assert_eq!(event("2025-09-07T17:00:00Z").kickoff(), Some(expected));
        assert_eq!(event("not a date").kickoff(), None);
    }
}
