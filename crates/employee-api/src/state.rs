use std::sync::Arc;

use tracing::warn;

use crate::database::EmployeeStore;
use crate::metrics::Metrics;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EmployeeStore>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(store: Arc<dyn EmployeeStore>, metrics: Arc<Metrics>) -> Self {
        Self { store, metrics }
    }

    /// Set the employee gauge from a fresh count. A failed count keeps the
    /// previous gauge value and is only logged.
    pub async fn refresh_employee_gauge(&self) {
        match self.store.count().await {
            Ok(count) => self.metrics.employees_total.set(count),
            Err(e) => warn!("Failed to refresh employee count gauge: {}", e),
        }
    }
}
