//! Vulnerability report resources
//!
//! A vulnerability report lists the known CVEs affecting the packages
//! currently installed on a host, derived from its inventory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ListEndpoint;
use crate::pager::{PageableRequest, PageableResponse};

/// Severity of a vulnerability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Severity not set
    #[default]
    Unspecified,
    /// Minimal impact
    Minimal,
    /// Low impact
    Low,
    /// Medium impact
    Medium,
    /// High impact
    High,
    /// Critical impact
    Critical,
}

/// One known vulnerability affecting a host
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vulnerability {
    /// CVE identifier, e.g. `CVE-2024-12345`
    pub cve: String,
    /// CVSS v3 base score
    pub cvss_score: f32,
    /// Assessed severity
    pub severity: Severity,
    /// Short description
    pub description: String,
}

/// Vulnerability report for one host
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VulnerabilityReport {
    /// Resource name, `zones/{zone}/hosts/{host}/vulnerabilityReport`
    pub name: String,
    /// Host the report belongs to
    pub host: String,
    /// Vulnerabilities affecting the host
    pub vulnerabilities: Vec<Vulnerability>,
    /// Time the report was last regenerated
    pub update_time: Option<DateTime<Utc>>,
}

/// Request for listing vulnerability reports in a zone
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListVulnerabilityReportsRequest {
    /// Parent zone, `zones/{zone}`
    pub parent: String,
    /// Maximum reports per page; the server may return fewer
    pub page_size: i32,
    /// Continuation token from a previous response
    pub page_token: String,
    /// Server-side filter expression
    pub filter: String,
}

impl ListVulnerabilityReportsRequest {
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

impl PageableRequest for ListVulnerabilityReportsRequest {
    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

impl ListEndpoint for ListVulnerabilityReportsRequest {
    fn path(&self) -> String {
        format!("/v1/{}/vulnerabilityReports", self.parent)
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

/// One page of vulnerability reports
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListVulnerabilityReportsResponse {
    /// Reports in this page
    pub vulnerability_reports: Vec<VulnerabilityReport>,
    /// Token for the next page; empty on the final page
    pub next_page_token: String,
}

impl PageableResponse for ListVulnerabilityReportsResponse {
    type Item = VulnerabilityReport;

    fn next_page_token(&self) -> &str {
        &self.next_page_token
    }

    fn items(&self) -> &[VulnerabilityReport] {
        &self.vulnerability_reports
    }

    fn into_items(self) -> Vec<VulnerabilityReport> {
        self.vulnerability_reports
    }
}
