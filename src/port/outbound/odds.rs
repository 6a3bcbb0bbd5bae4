//! Live odds port.

use async_trait::async_trait;

use crate::domain::MatchupOdds;
use crate::error::Result;

/// Supplies currently offered two-way moneyline markets.
///
/// One entry per matchup per bookmaker. A side the book does not price is
/// `None`, never a placeholder number.
#[async_trait]
pub trait OddsSource: Send + Sync {
    /// Fetch every moneyline market currently on offer.
    async fn fetch_moneylines(&self) -> Result<Vec<MatchupOdds>>;

    /// Source name for logging.
    fn source_name(&self) -> &'static str;
}
