//! Policy assignment resources
//!
//! A policy assignment binds a desired-state OS policy to the hosts of a
//! zone. Assignments are versioned: every update creates a new revision,
//! and revisions of one assignment can be listed separately.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ListEndpoint;
use crate::pager::{PageableRequest, PageableResponse};

/// Rollout state of a policy assignment revision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RolloutState {
    /// State not set
    #[default]
    Unspecified,
    /// Rollout is in progress
    InProgress,
    /// Rollout is being cancelled
    Cancelling,
    /// Rollout was cancelled
    Cancelled,
    /// Rollout completed on all targeted hosts
    Succeeded,
}

/// A policy assignment applied to hosts in a zone
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PolicyAssignment {
    /// Resource name, `zones/{zone}/policyAssignments/{id}`
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Server-assigned revision id, unique per update
    pub revision_id: String,
    /// Creation time of this revision
    pub revision_create_time: Option<DateTime<Utc>>,
    /// Rollout state of this revision
    pub rollout_state: RolloutState,
    /// Whether this revision serves as the baseline for new hosts
    pub baseline: bool,
    /// Whether the assignment is being deleted
    pub deleted: bool,
    /// Etag for optimistic concurrency control
    pub etag: String,
}

// ============================================================================
// ListPolicyAssignments
// ============================================================================

/// Request for listing the policy assignments of a zone
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListPolicyAssignmentsRequest {
    /// Parent zone, `zones/{zone}`
    pub parent: String,
    /// Maximum assignments per page; the server may return fewer
    pub page_size: i32,
    /// Continuation token from a previous response
    pub page_token: String,
}

impl ListPolicyAssignmentsRequest {
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
}

impl PageableRequest for ListPolicyAssignmentsRequest {
    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

impl ListEndpoint for ListPolicyAssignmentsRequest {
    fn path(&self) -> String {
        format!("/v1/{}/policyAssignments", self.parent)
    }

    fn query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if self.page_size > 0 {
            query.push(("pageSize".to_string(), self.page_size.to_string()));
        }
        if !self.page_token.is_empty() {
            query.push(("pageToken".to_string(), self.page_token.clone()));
        }
        query
    }
}

/// One page of policy assignments
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListPolicyAssignmentsResponse {
    /// Assignments in this page
    pub policy_assignments: Vec<PolicyAssignment>,
    /// Token for the next page; empty on the final page
    pub next_page_token: String,
}

impl PageableResponse for ListPolicyAssignmentsResponse {
    type Item = PolicyAssignment;

    fn next_page_token(&self) -> &str {
        &self.next_page_token
    }

    fn items(&self) -> &[PolicyAssignment] {
        &self.policy_assignments
    }

    fn into_items(self) -> Vec<PolicyAssignment> {
        self.policy_assignments
    }
}

// ============================================================================
// ListPolicyAssignmentRevisions
// ============================================================================

/// Request for listing the revisions of one policy assignment
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListPolicyAssignmentRevisionsRequest {
    /// Assignment name, `zones/{zone}/policyAssignments/{id}`
    pub name: String,
    /// Maximum revisions per page; the server may return fewer
    pub page_size: i32,
    /// Continuation token from a previous response
    pub page_token: String,
}

impl ListPolicyAssignmentRevisionsRequest {
    /// Create a request for one assignment's revisions
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.page_size = page_size;
        self
    }
}

impl PageableRequest for ListPolicyAssignmentRevisionsRequest {
    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

impl ListEndpoint for ListPolicyAssignmentRevisionsRequest {
    fn path(&self) -> String {
        format!("/v1/{}:listRevisions", self.name)
    }

    fn query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if self.page_size > 0 {
            query.push(("pageSize".to_string(), self.page_size.to_string()));
        }
        if !self.page_token.is_empty() {
            query.push(("pageToken".to_string(), self.page_token.clone()));
        }
        query
    }
}

/// One page of policy assignment revisions
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListPolicyAssignmentRevisionsResponse {
    /// Revisions in this page, newest first
    pub policy_assignments: Vec<PolicyAssignment>,
    /// Token for the next page; empty on the final page
    pub next_page_token: String,
}

impl PageableResponse for ListPolicyAssignmentRevisionsResponse {
    type Item = PolicyAssignment;

    fn next_page_token(&self) -> &str {
        &self.next_page_token
    }

    fn items(&self) -> &[PolicyAssignment] {
        &self.policy_assignments
    }

    fn into_items(self) -> Vec<PolicyAssignment> {
        self.policy_assignments
    }
}
