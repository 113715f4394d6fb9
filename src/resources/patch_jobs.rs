//! Patch job resources

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ListEndpoint;
use crate::pager::{PageableRequest, PageableResponse};

/// Lifecycle state of a patch job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PatchJobState {
    /// State not set
    #[default]
    Unspecified,
    /// Job accepted, host lookup pending
    Started,
    /// Resolving which hosts the job targets
    HostLookup,
    /// Patching targeted hosts
    Patching,
    /// All hosts patched successfully
    Succeeded,
    /// Finished, but some hosts failed
    CompletedWithErrors,
    /// Cancelled by a caller
    Canceled,
    /// Exceeded its deadline
    TimedOut,
}

/// A patch job rolling updates out to the hosts of a zone
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatchJob {
    /// Resource name, `zones/{zone}/patchJobs/{id}`
    pub name: String,
    /// Display name given at creation
    pub display_name: String,
    /// Human-readable description
    pub description: String,
    /// Lifecycle state
    pub state: PatchJobState,
    /// Whether the job runs without applying changes
    pub dry_run: bool,
    /// Completion percentage across targeted hosts
    pub percent_complete: f64,
    /// Number of hosts the job targets
    pub host_count: i64,
    /// Creation time
    pub create_time: Option<DateTime<Utc>>,
    /// Last state change
    pub update_time: Option<DateTime<Utc>>,
}

/// Request for listing patch jobs in a zone
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListPatchJobsRequest {
    /// Parent zone, `zones/{zone}`
    pub parent: String,
    /// Maximum jobs per page; the server may return fewer
    pub page_size: i32,
    /// Continuation token from a previous response
    pub page_token: String,
    /// Server-side filter expression, e.g. `state = "PATCHING"`
    pub filter: String,
}

impl ListPatchJobsRequest {
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

impl PageableRequest for ListPatchJobsRequest {
    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

impl ListEndpoint for ListPatchJobsRequest {
    fn path(&self) -> String {
        format!("/v1/{}/patchJobs", self.parent)
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

/// One page of patch jobs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListPatchJobsResponse {
    /// Jobs in this page, most recent first
    pub patch_jobs: Vec<PatchJob>,
    /// Token for the next page; empty on the final page
    pub next_page_token: String,
}

impl PageableResponse for ListPatchJobsResponse {
    type Item = PatchJob;

    fn next_page_token(&self) -> &str {
        &self.next_page_token
    }

    fn items(&self) -> &[PatchJob] {
        &self.patch_jobs
    }

    fn into_items(self) -> Vec<PatchJob> {
        self.patch_jobs
    }
}
