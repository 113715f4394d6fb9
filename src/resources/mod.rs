//! Resource types for the Fleetconf API
//!
//! Request, response, and item shapes for the service's list operations,
//! plus the trait impls that plug them into the generic pagers. These
//! modules carry no traversal logic of their own.

mod inventory;
mod patch_jobs;
mod policy_assignments;
mod reports;
mod vulnerability;

pub use inventory::{
    Inventory, InventoryView, ListInventoriesRequest, ListInventoriesResponse, OsInfo,
};
pub use patch_jobs::{ListPatchJobsRequest, ListPatchJobsResponse, PatchJob, PatchJobState};
pub use policy_assignments::{
    ListPolicyAssignmentRevisionsRequest, ListPolicyAssignmentRevisionsResponse,
    ListPolicyAssignmentsRequest, ListPolicyAssignmentsResponse, PolicyAssignment, RolloutState,
};
pub use reports::{
    ComplianceReport, ComplianceState, ListComplianceReportsRequest, ListComplianceReportsResponse,
};
pub use vulnerability::{
    ListVulnerabilityReportsRequest, ListVulnerabilityReportsResponse, Severity, Vulnerability,
    VulnerabilityReport,
};

/// Maps a list request onto the service's REST surface.
///
/// Used by the transport-bound fetchers; custom transports can reuse it.
pub trait ListEndpoint {
    /// Request path relative to the endpoint root
    fn path(&self) -> String;

    /// Query parameters for the call
    fn query(&self) -> Vec<(String, String)>;
}

#[cfg(test)]
mod tests;
