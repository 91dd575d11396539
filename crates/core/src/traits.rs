use crate::snapshot::MarketSnapshot;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch_snapshot(&self) -> Result<MarketSnapshot>;
}
