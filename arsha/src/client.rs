use crate::{MarketListing, Region, Result, TrackedItem, WaitlistEntry};
use async_trait::async_trait;

/// The two market queries the watcher depends on.
///
/// `HttpClient` is the real implementation; the watch loop is generic over
/// this trait so it can be driven without network access.
#[async_trait]
pub trait MarketClient: Send + Sync {
    /// Current bidding info for one item. `Ok(None)` when the API has nothing
    /// for it.
    async fn fetch_market_listing(
        &self,
        item: &TrackedItem,
        region: Region,
    ) -> Result<Option<MarketListing>>;

    /// Items queued for registration on the world market.
    async fn fetch_waitlist(&self, region: Region) -> Result<Vec<WaitlistEntry>>;
}
