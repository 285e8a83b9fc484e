//! Terminal router: the CLI has no views to swap, so navigation records the
//! path the user would land on and the command reports it on exit.

use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;
use sf_core::config::AppConfig;
use sf_core::ports::NavigationPort;
use sf_core::registration::Route;
use tracing::info;

#[derive(Debug)]
pub struct TerminalRouter {
    login_path: String,
    current: Mutex<Option<String>>,
}

impl TerminalRouter {
    pub fn new(login_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
            current: Mutex::new(None),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.login_route.clone())
    }

    /// Path a route resolves to; the login path is configurable.
    pub fn path_for(&self, route: Route) -> &str {
        match route {
            Route::Login => &self.login_path,
            other => other.default_path(),
        }
    }

    /// Last path navigated to, if any.
    pub fn current_path(&self) -> Option<String> {
        self.current.lock().ok().and_then(|current| current.clone())
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }
}

#[async_trait]
impl NavigationPort for TerminalRouter {
    async fn navigate(&self, route: Route) -> anyhow::Result<()> {
        let path = self.path_for(route).to_string();
        info!(?route, path = %path, "navigate");
        let mut current = self
            .current
            .lock()
            .map_err(|_| anyhow!("router state lock poisoned"))?;
        *current = Some(path);
        Ok(())
    }
}
