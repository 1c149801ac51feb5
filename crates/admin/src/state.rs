use crate::di::{DependenciesInject, Repositories};
use prometheus_client::registry::Registry;
use shared::{
    config::ConnectionPool,
    utils::{SystemMetrics, run_metrics_collector},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
    pub system_metrics: Arc<SystemMetrics>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("registry", &self.registry)
            .field("system_metrics", &self.system_metrics)
            .finish()
    }
}

impl AppState {
    /// Postgres-backed state. Spawns the process metrics collector, so it
    /// must be called inside a tokio runtime.
    pub fn new(pool: ConnectionPool) -> Self {
        let state = Self::from_repositories(Repositories::postgres(pool));

        tokio::spawn(run_metrics_collector(state.system_metrics.clone()));

        state
    }

    pub fn from_repositories(repos: Repositories) -> Self {
        let mut registry = Registry::default();
        let system_metrics = Arc::new(SystemMetrics::new());

        let di_container = DependenciesInject::from_repositories(repos, &mut registry);

        system_metrics.register(&mut registry);

        Self {
            di_container,
            registry: Arc::new(registry),
            system_metrics,
        }
    }
}
