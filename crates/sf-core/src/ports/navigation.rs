use anyhow::Result;

use crate::registration::Route;

/// Client-side router.
#[async_trait::async_trait]
pub trait NavigationPort: Send + Sync {
    async fn navigate(&self, route: Route) -> Result<()>;
}
