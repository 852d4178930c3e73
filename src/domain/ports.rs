use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Boundary to the language model: prompt in, raw free text out.
/// Latency is unspecified and any call may fail with a transport or
/// quota error; stages decide whether that aborts the batch or only
/// the current item.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn call(&self, prompt: &str) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> &str;
    fn api_base(&self) -> &str;
    fn model(&self) -> &str;
    fn total_weeks(&self) -> usize;
    fn pacing_delay(&self) -> Duration;
}
