//! Compliance report resources
//!
//! A compliance report records how one host measured up against one policy
//! assignment the last time the agent ran.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ListEndpoint;
use crate::pager::{PageableRequest, PageableResponse};

/// Compliance verdict for a host/assignment pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceState {
    /// State not set
    #[default]
    Unspecified,
    /// All policies of the assignment are satisfied
    Compliant,
    /// At least one policy is not satisfied
    NonCompliant,
    /// The agent could not determine compliance
    Unknown,
}

/// Compliance report for one host against one assignment
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComplianceReport {
    /// Resource name, `zones/{zone}/hosts/{host}/complianceReports/{id}`
    pub name: String,
    /// Host the report belongs to
    pub host: String,
    /// Policy assignment the report measures
    pub assignment: String,
    /// Time of the agent run that produced this report
    pub update_time: Option<DateTime<Utc>>,
    /// Overall verdict
    pub state: ComplianceState,
}

/// Request for listing compliance reports under a zone
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListComplianceReportsRequest {
    /// Parent zone, `zones/{zone}`
    pub parent: String,
    /// Maximum reports per page; the server may return fewer
    pub page_size: i32,
    /// Continuation token from a previous response
    pub page_token: String,
    /// Server-side filter expression, e.g. `state = "NON_COMPLIANT"`
    pub filter: String,
}

impl ListComplianceReportsRequest {
    /// Create a request scoped to a zone
    pub fn new(parent: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            ..Default::default()
        }
    }

    /// Set the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the filter expression
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }
}

impl PageableRequest for ListComplianceReportsRequest {
    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

impl ListEndpoint for ListComplianceReportsRequest {
    fn path(&self) -> String {
        format!("/v1/{}/complianceReports", self.parent)
    }

    fn query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if self.page_size > 0 {
            query.push(("pageSize".to_string(), self.page_size.to_string()));
        }
        if !self.page_token.is_empty() {
            query.push(("pageToken".to_string(), self.page_token.clone()));
        }
        if !self.filter.is_empty() {
            query.push(("filter".to_string(), self.filter.clone()));
        }
        query
    }
}

/// One page of compliance reports
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListComplianceReportsResponse {
    /// Reports in this page
    pub compliance_reports: Vec<ComplianceReport>,
    /// Token for the next page; empty on the final page
    pub next_page_token: String,
}

impl PageableResponse for ListComplianceReportsResponse {
    type Item = ComplianceReport;

    fn next_page_token(&self) -> &str {
        &self.next_page_token
    }

    fn items(&self) -> &[ComplianceReport] {
        &self.compliance_reports
    }

    fn into_items(self) -> Vec<ComplianceReport> {
        self.compliance_reports
    }
}
