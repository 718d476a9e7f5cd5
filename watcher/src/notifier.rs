use anyhow::Result;
use notify_rust::{Notification, Timeout};

const APP_NAME: &str = "BDO Market Watch";
const TIMEOUT_MS: u32 = 10_000;

pub trait Notifier {
    fn notify(&self, title: &str, message: &str) -> Result<()>;
}

/// Shows alerts through the operating system's notification center.
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, message: &str) -> Result<()> {
        Notification::new()
            .appname(APP_NAME)
            .summary(title)
            .body(message)
            .timeout(Timeout::Milliseconds(TIMEOUT_MS))
            .show()?;
        Ok(())
    }
}
