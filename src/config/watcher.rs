//! Configuration file watcher for hot reload.
//!
//! `ConfigWatcher` turns file events into validated configs on a channel;
//! `apply_updates` drains that channel into an `OriginResolver`.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::OriginMapConfig;
use crate::config::validation::{lint_rules, RuleWarning};
use crate::observability::metrics;
use crate::origin::resolver::rules_from_config;
use crate::origin::OriginResolver;

/// A watcher that monitors the configuration file for changes.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<OriginMapConfig>,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher.
    ///
    /// Returns the watcher and a receiver for validated configuration updates.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<OriginMapConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        let watcher = Self {
            path: path.to_path_buf(),
            update_tx,
        };
        (watcher, update_rx)
    }

    /// Start watching the file. The returned watcher must be kept alive.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx;
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
                    reload(&path, &tx);
                }
                Ok(_) => {}
                Err(e) => tracing::error!(error = ?e, "Watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Config watcher started");
        Ok(watcher)
    }
}

fn reload(path: &Path, tx: &mpsc::UnboundedSender<OriginMapConfig>) {
    tracing::info!(path = ?path, "Config file change detected, reloading");
    match load_config(path) {
        Ok(config) => {
            let _ = tx.send(config);
        }
        Err(e) => {
            metrics::record_reload(false);
            tracing::error!(error = %e, "Failed to reload config; keeping current origin map");
        }
    }
}

/// Install every config received on `updates` into `resolver`.
///
/// Returns when the sending side is dropped.
pub async fn apply_updates(
    resolver: Arc<OriginResolver>,
    mut updates: mpsc::UnboundedReceiver<OriginMapConfig>,
) {
    while let Some(config) = updates.recv().await {
        apply(&resolver, &config);
    }
    tracing::debug!("Config update channel closed");
}

/// Install one config into `resolver`.
///
/// Lints run on the installed set, defaults included, and are logged and
/// returned. A config that fails to parse installs nothing.
pub fn apply(resolver: &OriginResolver, config: &OriginMapConfig) -> Vec<RuleWarning> {
    match rules_from_config(config) {
        Ok(rules) => {
            let warnings = lint_rules(&rules);
            for warning in &warnings {
                tracing::warn!(%warning, "Suspicious origin map rule");
            }
            resolver.replace(rules);
            metrics::record_reload(true);
            warnings
        }
        Err(e) => {
            metrics::record_reload(false);
            tracing::error!(error = %e, "Rejected origin map; keeping current rules");
            Vec::new()
        }
    }
}
