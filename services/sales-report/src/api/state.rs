//! 路由共享状态

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::application::{EmployeeService, SalesService, TargetService};
use crate::domain::StoreProbe;

#[derive(Clone)]
pub struct AppState {
    pub sales: Arc<SalesService>,
    pub targets: Arc<TargetService>,
    pub employees: Arc<EmployeeService>,
    pub probe: Arc<dyn StoreProbe>,
    /// 未安装 Prometheus recorder 时 `/metrics` 返回 404
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(
        sales: SalesService,
        targets: TargetService,
        employees: EmployeeService,
        probe: Arc<dyn StoreProbe>,
    ) -> Self {
        Self {
            sales: Arc::new(sales),
            targets: Arc::new(targets),
            employees: Arc::new(employees),
            probe,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
