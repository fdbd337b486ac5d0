// src/services/dashboard_service.rs

use crate::{db::DashboardRepository, models::dashboard::DashboardMetrics};

#[derive(Clone)]
pub struct DashboardService {
    repo: DashboardRepository,
}

impl DashboardService {
    pub fn new(repo: DashboardRepository) -> Self {
        Self { repo }
    }

    pub async fn get_metrics(&self) -> DashboardMetrics {
        self.repo.metrics().await
    }
}
