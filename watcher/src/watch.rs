use crate::alert::{Alert, TITLE};
use crate::config::Config;
use crate::notifier::Notifier;
use anyhow::Result;
use arsha::{MarketClient, WaitlistEntry};
use std::future::Future;
use tokio::time::sleep;

/// Polls the world market waitlist and raises an alert for every tracked
/// item queued at or under the price cap.
///
/// Cycles are independent: an entry that stays on the waitlist is alerted
/// again on every poll.
pub struct Watcher<C, N> {
    config: Config,
    client: C,
    notifier: N,
}

impl<C: MarketClient, N: Notifier> Watcher<C, N> {
    pub fn new(config: Config, client: C, notifier: N) -> Self {
        Self {
            config,
            client,
            notifier,
        }
    }

    pub fn find_alerts(&self, waitlist: &[WaitlistEntry]) -> Vec<Alert> {
        let price_cap = self.config.price_cap;
        waitlist
            .iter()
            .filter(|entry| entry.price <= price_cap)
            .flat_map(|entry| {
                self.config
                    .catalog
                    .iter()
                    .filter(move |item| item.key() == entry.key())
                    .map(move |item| Alert::new(item, entry))
            })
            .collect()
    }

    /// A failed fetch only costs this cycle.
    async fn fetch_waitlist(&self) -> Vec<WaitlistEntry> {
        match self.client.fetch_waitlist(self.config.region).await {
            Ok(waitlist) => waitlist,
            Err(e) => {
                log::error!("Failed to fetch waitlist: {e}");
                Vec::new()
            }
        }
    }

    /// Runs a single poll and returns how many alerts went out.
    pub async fn check_waitlist(&self) -> Result<usize> {
        let waitlist = self.fetch_waitlist().await;
        log::debug!("{} entries on the waitlist", waitlist.len());

        let alerts = self.find_alerts(&waitlist);
        for alert in &alerts {
            let message = alert.to_string();
            log::warn!("WAITLIST: {message}");
            self.notifier.notify(TITLE, &message)?;
        }

        Ok(alerts.len())
    }

    /// Polls every `interval` until `shutdown` resolves. Only a notification
    /// failure ends the loop early.
    pub async fn run(&self, shutdown: impl Future<Output = ()>) -> Result<()> {
        log::info!(
            "Starting market monitor: {} items in {}, cap {} silver, every {:?}",
            self.config.catalog.len(),
            self.config.region,
            self.config.price_cap,
            self.config.interval
        );
        tokio::pin!(shutdown);

        loop {
            self.check_waitlist().await?;

            tokio::select! {
                _ = sleep(self.config.interval) => {}
                _ = &mut shutdown => {
                    log::info!("Stopping market monitor");
                    return Ok(());
                }
            }
        }
    }
}
