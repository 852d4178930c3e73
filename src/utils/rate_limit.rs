use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Serial pacer for the model API: at most one acquisition per
/// `interval`. The free Gemini tier allows ~15 requests/minute, so the
/// default interval is 5 seconds. This is a leaky bucket at rate
/// 1/interval, kept separate from the calling loop so the pacing
/// contract survives if the loop ever goes concurrent.
pub struct FixedIntervalLimiter {
    interval: Duration,
    last: Mutex<Option<Instant>>,
}

impl FixedIntervalLimiter {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Mutex::new(None),
        }
    }

    /// Wait until at least `interval` has passed since the previous
    /// acquire. The first acquire returns immediately.
    pub async fn acquire(&self) {
        let mut last = self.last.lock().await;
        if let Some(prev) = *last {
            let ready_at = prev + self.interval;
            let now = Instant::now();
            if ready_at > now {
                tokio::time::sleep_until(ready_at).await;
            }
        }
        *last = Some(Instant::now());
    }
}

impl Default for FixedIntervalLimiter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_first_acquire_is_free() {
        let limiter = FixedIntervalLimiter::new(Duration::from_secs(5));
        let start = Instant::now();
        limiter.acquire().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_acquire_waits_full_interval() {
        let limiter = FixedIntervalLimiter::new(Duration::from_secs(5));
        let start = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        assert!(start.elapsed() >= Duration::from_secs(5));
        assert!(start.elapsed() < Duration::from_secs(6));
    }

    #[tokio::test(start_paused = true)]
    async fn test_elapsed_time_counts_toward_interval() {
        let limiter = FixedIntervalLimiter::new(Duration::from_secs(5));
        limiter.acquire().await;
        tokio::time::sleep(Duration::from_secs(3)).await;
        let start = Instant::now();
        limiter.acquire().await;
        // only the remaining 2 seconds are waited
        assert_eq!(start.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_three_acquires_cost_two_intervals() {
        let limiter = FixedIntervalLimiter::new(Duration::from_secs(5));
        let start = Instant::now();
        for _ in 0..3 {
            limiter.acquire().await;
        }
        assert!(start.elapsed() >= Duration::from_secs(10));
    }
}
