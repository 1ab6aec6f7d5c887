//! # ReportService
//!
//! Wraps arbitrary report payloads with identity and receipt time, hands
//! them to the [`ReportRepo`] port, and announces each one in the log so
//! an operator watching the process sees incoming flags immediately.

use std::sync::Arc;

use chrono::Utc;
use domains::{Report, ReportReceipt, ReportRepo, Result};
use tracing::warn;
use uuid::Uuid;

#[derive(Clone)]
pub struct ReportService {
    repo: Arc<dyn ReportRepo>,
}

impl ReportService {
    pub fn new(repo: Arc<dyn ReportRepo>) -> Self {
        Self { repo }
    }

    /// Stores the payload verbatim and returns a success receipt. No
    /// schema is enforced on the data.
    pub async fn create_report(&self, data: serde_json::Value) -> Result<ReportReceipt> {
        let report = Report {
            id: Uuid::new_v4().to_string(),
            received_at: Utc::now(),
            data,
        };
        warn!(report_id = %report.id, payload = %report.data, "new report received");

        let report_id = report.id.clone();
        self.repo.append_report(report).await?;
        Ok(ReportReceipt::success(report_id))
    }
}
