//! Dashboard API

use shared::models::{AdminDashboard, BarberDashboard};

use crate::{ClientResult, HttpClient, cache::keys};

/// Filters for the admin revenue dashboard
///
/// An absent or empty filter is omitted from the outgoing query string,
/// never sent as an empty parameter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminDashboardQuery {
    /// Inclusive range start, YYYY-MM-DD
    pub start_date: Option<String>,
    /// Inclusive range end, YYYY-MM-DD
    pub end_date: Option<String>,
    pub service_id: Option<i64>,
}

impl AdminDashboardQuery {
    /// Query pairs for the request; blank filters produce no pair
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(start) = self.start_date.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("startDate", start.to_string()));
        }
        if let Some(end) = self.end_date.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("endDate", end.to_string()));
        }
        if let Some(service_id) = self.service_id {
            pairs.push(("serviceId", service_id.to_string()));
        }

        pairs
    }

    /// Cache key for this exact filter combination; the key moves in
    /// lock-step with the filters, so a stale combination can never be
    /// served for the current one
    pub fn cache_key(&self) -> String {
        let filters = format!(
            "{}:{}:{}",
            self.start_date.as_deref().unwrap_or(""),
            self.end_date.as_deref().unwrap_or(""),
            self.service_id.map(|id| id.to_string()).unwrap_or_default(),
        );
        keys::admin_dashboard(&filters)
    }
}

impl HttpClient {
    /// Aggregate stats for the admin dashboard
    pub async fn admin_dashboard(
        &self,
        query: &AdminDashboardQuery,
    ) -> ClientResult<AdminDashboard> {
        self.get_with_query("/dashboard/admin", &query.to_pairs())
            .await
    }

    /// Per-barber stats over the trailing `days` period
    pub async fn barber_dashboard(&self, days: Option<u32>) -> ClientResult<BarberDashboard> {
        let pairs: Vec<(&str, String)> = days
            .map(|days| vec![("days", days.to_string())])
            .unwrap_or_default();

        self.get_with_query("/dashboard/barber", &pairs).await
    }
}
