//! ESPN scoreboard client for completed games.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::dto::{EspnEvent, Scoreboard, REGULAR_SEASON};
use super::settings::EspnConfig;
use crate::adapter::outbound::http::JsonHttp;
use crate::domain::{GameOutcome, TeamRegistry};
use crate::error::Result;
use crate::port::{GameResultsSource, LookbackWindow};

/// Reads regular-season results week by week from the ESPN scoreboard.
pub struct EspnScoreboardClient {
    http: JsonHttp,
    config: EspnConfig,
    registry: TeamRegistry,
}

impl EspnScoreboardClient {
    #[must_use]
    pub const fn new(config: EspnConfig, http: JsonHttp, registry: TeamRegistry) -> Self {
        Self {
            http,
            config,
            registry,
        }
    }

    async fn fetch_week(&self, season: i32, week: u32) -> Result<Vec<EspnEvent>> {
        let url = format!("{}/scoreboard", self.config.base_url.trim_end_matches('/'));
        let query = [
            ("seasontype", REGULAR_SEASON.to_string()),
            ("dates", season.to_string()),
            ("week", week.to_string()),
        ];
        let board: Scoreboard = self.http.get_json(&url, &query).await?;
        Ok(board.events)
    }
}

#[async_trait]
impl GameResultsSource for EspnScoreboardClient {
    async fn fetch_completed_games(&self, window: &LookbackWindow) -> Result<Vec<GameOutcome>> {
        // Walk forward until a week has no completed games; that bounds the
        // current week without knowing the calendar.
        let mut weeks: Vec<(u32, Vec<GameOutcome>)> = Vec::new();
        for week in 1..=self.config.regular_season_weeks {
            let events = self.fetch_week(window.season, week).await?;
            let games = to_outcomes(&events, &self.registry);
            debug!(week, events = events.len(), completed = games.len(), "Scoreboard week");
            if games.is_empty() {
                break;
            }
            weeks.push((week, games));
        }

        let games = select_window(weeks, window);
        if games.is_empty() {
            warn!(season = window.season, "No completed games found");
        } else {
            info!(season = window.season, games = games.len(), "Loaded completed games");
        }
        Ok(games)
    }

    fn source_name(&self) -> &'static str {
        "espn"
    }
}

/// Cut per-week results down to the lookback window.
///
/// `weeks` is in ascending week order. The current week is the last week
/// before the first one with no completed games; later weeks are ignored.
pub fn select_window(
    weeks: impl IntoIterator<Item = (u32, Vec<GameOutcome>)>,
    window: &LookbackWindow,
) -> Vec<GameOutcome> {
    let completed: Vec<(u32, Vec<GameOutcome>)> = weeks
        .into_iter()
        .take_while(|(_, games)| !games.is_empty())
        .collect();

    let Some(&(current_week, _)) = completed.last() else {
        return Vec::new();
    };

    let first_week = window.first_week(current_week);
    debug!(first_week, current_week, "Lookback window");
    completed
        .into_iter()
        .filter(|(week, _)| *week >= first_week)
        .flat_map(|(_, games)| games)
        .collect()
}

/// Keep completed regular-season games with both scores and known teams.
pub fn to_outcomes(events: &[EspnEvent], registry: &TeamRegistry) -> Vec<GameOutcome> {
    let mut games = Vec::new();

    for event in events.iter().filter(|e| e.is_regular_season()) {
        let Some(played_at) = event.kickoff() else {
            warn!(date = %event.date, "Skipping event with unparseable date");
            continue;
        };

        for competition in &event.competitions {
            if !competition.status.status_type.completed {
                continue;
            }

            let home = competition.competitors.iter().find(|c| c.is_home());
            let away = competition.competitors.iter().find(|c| !c.is_home());
            let (Some(home), Some(away)) = (home, away) else {
                continue;
            };

            let (Some(home_score), Some(away_score)) = (home.points(), away.points()) else {
                continue;
            };

            let (Some(home_team), Some(away_team)) = (
                registry.resolve(&home.team.display_name),
                registry.resolve(&away.team.display_name),
            ) else {
                warn!(
                    home = %home.team.abbreviation,
                    away = %away.team.abbreviation,
                    "Skipping game with unknown team"
                );
                continue;
            };

            games.push(GameOutcome::new(
                home_team.id.clone(),
                away_team.id.clone(),
                home_score,
                away_score,
                played_at,
            ));
        }
    }

    games
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn scoreboard() -> Scoreboard {
        serde_json::from_str(
            r#"{
                "week": {"number": 1},
                "events": [
                    {
                        "date": "2025-09-05T00:20Z",
                        "season": {"year": 2025, "type": 2},
                        "competitions": [{
                            "competitors": [
                                {"homeAway": "home", "score": "24", "team": {"abbreviation": "PHI", "displayName": "Philadelphia Eagles"}},
                                {"homeAway": "away", "score": "20", "team": {"abbreviation": "DAL", "displayName": "Dallas Cowboys"}}
                            ],
                            "status": {"type": {"completed": true}}
                        }]
                    },
                    {
                        "date": "2025-09-07T17:00Z",
                        "season": {"year": 2025, "type": 2},
                        "competitions": [{
                            "competitors": [
                                {"homeAway": "home", "score": "0", "team": {"abbreviation": "KC", "displayName": "Kansas City Chiefs"}},
                                {"homeAway": "away", "score": "0", "team": {"abbreviation": "BUF", "displayName": "Buffalo Bills"}}
                            ],
                            "status": {"type": {"completed": false}}
                        }]
                    },
                    {
                        "date": "2025-08-10T17:00Z",
                        "season": {"year": 2025, "type": 1},
                        "competitions": [{
                            "competitors": [
                                {"homeAway": "home", "score": "10", "team": {"abbreviation": "KC", "displayName": "Kansas City Chiefs"}},
                                {"homeAway": "away", "score": "3", "team": {"abbreviation": "BUF", "displayName": "Buffalo Bills"}}
                            ],
                            "status": {"type": {"completed": true}}
                        }]
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_keeps_only_completed_regular_season_games() {
        let games = to_outcomes(&scoreboard().events, &TeamRegistry::nfl());

        assert_eq!(games.len(), 1);
        assert_eq!(games[0].home.as_str(), "PHI");
        assert_eq!(games[0].away.as_str(), "DAL");
        assert_eq!(games[0].home_score, 24);
        assert_eq!(games[0].away_score, 20);
    }

    fn week(number: u32, games: usize) -> (u32, Vec<GameOutcome>) {
        let kickoff = Utc.with_ymd_and_hms(2025, 9, 7, 17, 0, 0).unwrap()
            + Duration::weeks(i64::from(number) - 1);
        let outcomes = (0..games)
            .map(|_| GameOutcome::new("KC", "BUF", 27, 20, kickoff))
            .collect();
        (number, outcomes)
    }

    #[test]
    fn test_window_stops_at_first_week_without_games() {
        let weeks = vec![week(1, 2), week(2, 1), week(3, 0), week(4, 3)];
        let games = select_window(weeks, &LookbackWindow::new(2025, 18));

        assert_eq!(games.len(), 3);
    }

    #[test]
    fn test_window_trims_weeks_before_first_week() {
        let weeks = vec![week(1, 1), week(2, 1), week(3, 2), week(4, 4), week(5, 0)];
        let games = select_window(weeks, &LookbackWindow::new(2025, 2));

        // Current week 4 with two weeks back keeps weeks 3 and 4.
        assert_eq!(games.len(), 6);
        let first_kickoff = games.iter().map(|g| g.played_at).min().unwrap();
        assert_eq!(first_kickoff, week(3, 1).1[0].played_at);
    }

    #[test]
    fn test_window_over_empty_season_is_empty() {
        let window = LookbackWindow::new(2025, 4);
        assert!(select_window(Vec::new(), &window).is_empty());
        assert!(select_window(vec![week(1, 0), week(2, 3)], &window).is_empty());
    }

    #[test]
    fn test_missing_score_is_dropped() {
        let mut board = scoreboard();
        board.events[0].competitions[0].competitors[1].score = None;

        assert!(to_outcomes(&board.events, &TeamRegistry::nfl()).is_empty());
    }
}
