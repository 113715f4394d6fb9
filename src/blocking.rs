//! Blocking Fleetconf client
//!
//! Wraps the asynchronous transport behind an owned single-threaded tokio
//! runtime: every call drives the underlying future to completion on the
//! calling thread. Must not be used from inside an async runtime.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::runtime::{Builder, Runtime};

use crate::client::HttpFetcher;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::pager::{AsyncPageFetcher, PageFetcher, PageableRequest, PageableResponse, Pager};
use crate::resources::{
    ListComplianceReportsRequest, ListComplianceReportsResponse, ListEndpoint,
    ListInventoriesRequest, ListInventoriesResponse, ListPatchJobsRequest, ListPatchJobsResponse,
    ListPolicyAssignmentRevisionsRequest, ListPolicyAssignmentRevisionsResponse,
    ListPolicyAssignmentsRequest, ListPolicyAssignmentsResponse, ListVulnerabilityReportsRequest,
    ListVulnerabilityReportsResponse,
};
use crate::types::CallOptions;

/// Blocking invoker driving the async transport to completion per call
#[derive(Debug)]
pub struct BlockingFetcher {
    runtime: Arc<Runtime>,
    inner: HttpFetcher,
}

impl<R, P> PageFetcher<R, P> for BlockingFetcher
where
    R: ListEndpoint + PageableRequest + Sync,
    P: PageableResponse + DeserializeOwned,
{
    fn fetch(&mut self, request: &R, options: &CallOptions) -> Result<P> {
        self.runtime.block_on(self.inner.fetch(request, options))
    }
}

/// Pager over `list_policy_assignments`
pub type PolicyAssignmentsPager =
    Pager<ListPolicyAssignmentsRequest, ListPolicyAssignmentsResponse, BlockingFetcher>;

/// Pager over `list_policy_assignment_revisions`
pub type PolicyAssignmentRevisionsPager = Pager<
    ListPolicyAssignmentRevisionsRequest,
    ListPolicyAssignmentRevisionsResponse,
    BlockingFetcher,
>;

/// Pager over `list_compliance_reports`
pub type ComplianceReportsPager =
    Pager<ListComplianceReportsRequest, ListComplianceReportsResponse, BlockingFetcher>;

/// Pager over `list_inventories`
pub type InventoriesPager =
    Pager<ListInventoriesRequest, ListInventoriesResponse, BlockingFetcher>;

/// Pager over `list_vulnerability_reports`
pub type VulnerabilityReportsPager =
    Pager<ListVulnerabilityReportsRequest, ListVulnerabilityReportsResponse, BlockingFetcher>;

/// Pager over `list_patch_jobs`
pub type PatchJobsPager = Pager<ListPatchJobsRequest, ListPatchJobsResponse, BlockingFetcher>;

/// Blocking client for the Fleetconf API
#[derive(Debug)]
pub struct BlockingClient {
    transport: Arc<HttpClient>,
    runtime: Arc<Runtime>,
}

impl BlockingClient {
    /// Create a client from a configuration.
    ///
    /// Starts the runtime that will drive all of this client's calls.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::runtime(format!("failed to start blocking runtime: {e}")))?;

        Ok(Self {
            transport: Arc::new(HttpClient::new(config)?),
            runtime: Arc::new(runtime),
        })
    }

    fn fetcher(&self) -> BlockingFetcher {
        BlockingFetcher {
            runtime: Arc::clone(&self.runtime),
            inner: HttpFetcher::new(Arc::clone(&self.transport)),
        }
    }

    /// List the policy assignments of a zone
    pub fn list_policy_assignments(
        &self,
        request: &ListPolicyAssignmentsRequest,
        options: CallOptions,
    ) -> Result<PolicyAssignmentsPager> {
        let mut fetcher = self.fetcher();
        let first: ListPolicyAssignmentsResponse = fetcher.fetch(request, &options)?;
        Ok(Pager::new(fetcher, request, first, options))
    }

    /// List the revisions of one policy assignment
    pub fn list_policy_assignment_revisions(
        &self,
        request: &ListPolicyAssignmentRevisionsRequest,
        options: CallOptions,
    ) -> Result<PolicyAssignmentRevisionsPager> {
        let mut fetcher = self.fetcher();
        let first: ListPolicyAssignmentRevisionsResponse = fetcher.fetch(request, &options)?;
        Ok(Pager::new(fetcher, request, first, options))
    }

    /// List compliance reports under a zone
    pub fn list_compliance_reports(
        &self,
        request: &ListComplianceReportsRequest,
        options: CallOptions,
    ) -> Result<ComplianceReportsPager> {
        let mut fetcher = self.fetcher();
        let first: ListComplianceReportsResponse = fetcher.fetch(request, &options)?;
        Ok(Pager::new(fetcher, request, first, options))
    }

    /// List host inventories in a zone
    pub fn list_inventories(
        &self,
        request: &ListInventoriesRequest,
        options: CallOptions,
    ) -> Result<InventoriesPager> {
        let mut fetcher = self.fetcher();
        let first: ListInventoriesResponse = fetcher.fetch(request, &options)?;
        Ok(Pager::new(fetcher, request, first, options))
    }

    /// List vulnerability reports in a zone
    pub fn list_vulnerability_reports(
        &self,
        request: &ListVulnerabilityReportsRequest,
        options: CallOptions,
    ) -> Result<VulnerabilityReportsPager> {
        let mut fetcher = self.fetcher();
        let first: ListVulnerabilityReportsResponse = fetcher.fetch(request, &options)?;
        Ok(Pager::new(fetcher, request, first, options))
    }

    /// List patch jobs in a zone
    pub fn list_patch_jobs(
        &self,
        request: &ListPatchJobsRequest,
        options: CallOptions,
    ) -> Result<PatchJobsPager> {
        let mut fetcher = self.fetcher();
        let first: ListPatchJobsResponse = fetcher.fetch(request, &options)?;
        Ok(Pager::new(fetcher, request, first, options))
    }
}
