//! Historical results port.

use async_trait::async_trait;

use crate::domain::GameOutcome;
use crate::error::Result;

/// Which games feed the rating fold: the trailing `weeks_back` regular
/// season weeks of `season`, ending at the latest week with results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookbackWindow {
    pub season: i32,
    pub weeks_back: u32,
}

impl LookbackWindow {
    #[must_use]
    pub const fn new(season: i32, weeks_back: u32) -> Self {
        Self { season, weeks_back }
    }

    /// First week inside the window when `current_week` is the latest.
    #[must_use]
    pub fn first_week(&self, current_week: u32) -> u32 {
        (current_week + 1).saturating_sub(self.weeks_back).max(1)
    }
}

/// Supplies completed regular-season games.
///
/// Implementations return only games with both scores present. Ordering is
/// not required; the rating engine sorts by timestamp.
#[async_trait]
pub trait GameResultsSource: Send + Sync {
    /// Fetch completed games inside `window`.
    async fn fetch_completed_games(&self, window: &LookbackWindow) -> Result<Vec<GameOutcome>>;

    /// Source name for logging.
    fn source_name(&self) -> &'static str;
}
