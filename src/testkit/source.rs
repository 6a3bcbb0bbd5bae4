//! In-memory data sources for testing the application layer.
//!
//! - [`StaticResults`] / [`StaticOdds`] - Return a fixed data set and count calls.
//! - [`FailingSource`] - Fails every fetch; implements both ports.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{GameOutcome, MatchupOdds};
use crate::error::{Error, Result};
use crate::port::{GameResultsSource, LookbackWindow, OddsSource};

/// Results source returning a fixed list of games.
///
/// Records the last window it was asked for.
pub struct StaticResults {
    games: Vec<GameOutcome>,
    calls: Arc<AtomicU32>,
    last_window: Mutex<Option<LookbackWindow>>,
}

impl StaticResults {
    pub fn new(games: Vec<GameOutcome>) -> Self {
        Self {
            games,
            calls: Arc::new(AtomicU32::new(0)),
            last_window: Mutex::new(None),
        }
    }

    /// Shared counter of fetch calls.
    pub fn call_count(&self) -> Arc<AtomicU32> {
        Arc::clone(&self.calls)
    }

    pub fn last_window(&self) -> Option<LookbackWindow> {
        *self.last_window.lock().unwrap()
    }
}

#[async_trait]
impl GameResultsSource for StaticResults {
    async fn fetch_completed_games(&self, window: &LookbackWindow) -> Result<Vec<GameOutcome>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_window.lock().unwrap() = Some(*window);
        Ok(self.games.clone())
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}

/// Odds source returning a fixed list of markets.
pub struct StaticOdds {
    markets: Vec<MatchupOdds>,
    calls: Arc<AtomicU32>,
}

impl StaticOdds {
    pub fn new(markets: Vec<MatchupOdds>) -> Self {
        Self {
            markets,
            calls: Arc::new(AtomicU32::new(0)),
        }
    }

    pub fn call_count(&self) -> Arc<AtomicU32> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl OddsSource for StaticOdds {
    async fn fetch_moneylines(&self) -> Result<Vec<MatchupOdds>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.markets.clone())
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}

/// A source whose every fetch fails with [`Error::Source`].
pub struct FailingSource {
    message: String,
}

impl FailingSource {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl GameResultsSource for FailingSource {
    async fn fetch_completed_games(&self, _window: &LookbackWindow) -> Result<Vec<GameOutcome>> {
        Err(Error::Source(self.message.clone()))
    }

    fn source_name(&self) -> &'static str {
        "failing"
    }
}

#[async_trait]
impl OddsSource for FailingSource {
    async fn fetch_moneylines(&self) -> Result<Vec<MatchupOdds>> {
        Err(Error::Source(self.message.clone()))
    }

    fn source_name(&self) -> &'static str {
        "failing"
    }
}
