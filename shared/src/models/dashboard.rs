//! Dashboard Models
//!
//! Aggregate revenue/volume stats computed by the API; the client only
//! renders them.

use serde::{Deserialize, Serialize};

/// Headline numbers for a dashboard period
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_revenue: f64,
    pub total_services: i64,
    pub average_ticket: f64,
}

/// Revenue and volume for a single business day (YYYY-MM-DD)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyPoint {
    pub date: String,
    pub revenue: f64,
    pub services: i64,
}

/// Per-service slice of a period
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBreakdown {
    pub service_id: i64,
    pub service_name: String,
    pub revenue: f64,
    pub services: i64,
}

/// Per-barber slice of a period
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BarberBreakdown {
    pub barber_id: i64,
    pub barber_name: String,
    pub revenue: f64,
    pub services: i64,
}

/// Admin dashboard payload (GET /dashboard/admin)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub summary: DashboardSummary,
    #[serde(default)]
    pub daily_history: Vec<DailyPoint>,
    #[serde(default)]
    pub by_service: Vec<ServiceBreakdown>,
    #[serde(default)]
    pub by_barber: Vec<BarberBreakdown>,
}

/// Barber dashboard payload (GET /dashboard/barber)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BarberDashboard {
    pub summary: DashboardSummary,
    #[serde(default)]
    pub daily_history: Vec<DailyPoint>,
    #[serde(default)]
    pub service_breakdown: Vec<ServiceBreakdown>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_dashboard_tolerates_missing_sections() {
        let dashboard: AdminDashboard = serde_json::from_value(serde_json::json!({
            "summary": {
                "totalRevenue": 1200.0,
                "totalServices": 45,
                "averageTicket": 26.67,
            },
        }))
        .unwrap();

        assert_eq!(dashboard.summary.total_services, 45);
        assert!(dashboard.daily_history.is_empty());
        assert!(dashboard.by_barber.is_empty());
    }

    #[test]
    fn barber_dashboard_round_trip() {
        let dashboard: BarberDashboard = serde_json::from_value(serde_json::json!({
            "summary": {
                "totalRevenue": 150.0,
                "totalServices": 5,
                "averageTicket": 30.0,
            },
            "dailyHistory": [
                {"date": "2024-05-01", "revenue": 150.0, "services": 5},
            ],
            "serviceBreakdown": [
                {"serviceId": 3, "serviceName": "Haircut", "revenue": 120.0, "services": 3},
            ],
        }))
        .unwrap();

        assert_eq!(dashboard.daily_history.len(), 1);
        assert_eq!(dashboard.service_breakdown[0].service_name, "Haircut");
    }
}
