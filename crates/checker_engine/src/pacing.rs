use std::time::Duration;

/// Smallest allowed inter-request delay in seconds.
pub const MIN_DELAY_SECS: u64 = 1;

/// Largest allowed inter-request delay in seconds.
pub const MAX_DELAY_SECS: u64 = 5;

/// Pacing policy applied by the run loop between successive inspection
/// calls. A seam rather than a bare sleep so a token bucket could replace
/// the fixed delay without touching the inspection logic.
#[async_trait::async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self);
}

/// Fixed whole-second delay, clamped to the allowed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelayPacer {
    delay: Duration,
}

impl FixedDelayPacer {
    pub fn from_secs(secs: u64) -> Self {
        Self {
            delay: Duration::from_secs(secs.clamp(MIN_DELAY_SECS, MAX_DELAY_SECS)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait::async_trait]
impl Pacer for FixedDelayPacer {
    async fn pause(&self) {
        tokio::time::sleep(self.delay).await;
    }
}
