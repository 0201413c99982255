//! Dashboard page
//!
//! Read-only landing view: KPI tiles plus the weekly revenue and per-module
//! activity charts. Everything comes from the seed snapshot.

use crate::models::metrics::{ChartPoint, StatMetric};
use crate::seed;

#[derive(Debug, Clone)]
pub struct DashboardState {
    metrics: Vec<StatMetric>,
    revenue: Vec<ChartPoint>,
    activity: Vec<ChartPoint>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            metrics: seed::dashboard_metrics(),
            revenue: seed::revenue_chart(),
            activity: seed::activity_chart(),
        }
    }

    pub fn metrics(&self) -> &[StatMetric] {
        &self.metrics
    }

    pub fn revenue(&self) -> &[ChartPoint] {
        &self.revenue
    }

    pub fn activity(&self) -> &[ChartPoint] {
        &self.activity
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_shape() {
        let page = DashboardState::new();
        assert_eq!(page.metrics().len(), 4);
        // One revenue point per day of the week
        assert_eq!(page.revenue().len(), 7);
        // One activity point per module
        assert_eq!(page.activity().len(), 4);
    }
}
