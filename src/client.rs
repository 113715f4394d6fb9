//! Asynchronous Fleetconf client
//!
//! The facade over the service's list operations. Each `list_*` method
//! fetches the first page immediately and returns an [`AsyncPager`] bound
//! to the shared transport; the pager fetches the remaining pages on
//! demand.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::pager::{AsyncPageFetcher, AsyncPager, PageableRequest, PageableResponse};
use crate::resources::{
    ListComplianceReportsRequest, ListComplianceReportsResponse, ListEndpoint,
    ListInventoriesRequest, ListInventoriesResponse, ListPatchJobsRequest, ListPatchJobsResponse,
    ListPolicyAssignmentRevisionsRequest, ListPolicyAssignmentRevisionsResponse,
    ListPolicyAssignmentsRequest, ListPolicyAssignmentsResponse, ListVulnerabilityReportsRequest,
    ListVulnerabilityReportsResponse,
};
use crate::types::CallOptions;

/// Invoker binding list requests to the shared HTTP transport.
///
/// One instance is handed to every pager; it maps the request onto the
/// REST surface via [`ListEndpoint`] and decodes the JSON page.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    transport: Arc<HttpClient>,
}

impl HttpFetcher {
    pub(crate) fn new(transport: Arc<HttpClient>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl<R, P> AsyncPageFetcher<R, P> for HttpFetcher
where
    R: ListEndpoint + PageableRequest + Sync,
    P: PageableResponse + DeserializeOwned,
{
    async fn fetch(&mut self, request: &R, options: &CallOptions) -> Result<P> {
        self.transport
            .get_json(&request.path(), &request.query(), options)
            .await
    }
}

/// Pager over `list_policy_assignments`
pub type PolicyAssignmentsPager =
    AsyncPager<ListPolicyAssignmentsRequest, ListPolicyAssignmentsResponse, HttpFetcher>;

/// Pager over `list_policy_assignment_revisions`
pub type PolicyAssignmentRevisionsPager = AsyncPager<
    ListPolicyAssignmentRevisionsRequest,
    ListPolicyAssignmentRevisionsResponse,
    HttpFetcher,
>;

/// Pager over `list_compliance_reports`
pub type ComplianceReportsPager =
    AsyncPager<ListComplianceReportsRequest, ListComplianceReportsResponse, HttpFetcher>;

/// Pager over `list_inventories`
pub type InventoriesPager =
    AsyncPager<ListInventoriesRequest, ListInventoriesResponse, HttpFetcher>;

/// Pager over `list_vulnerability_reports`
pub type VulnerabilityReportsPager =
    AsyncPager<ListVulnerabilityReportsRequest, ListVulnerabilityReportsResponse, HttpFetcher>;

/// Pager over `list_patch_jobs`
pub type PatchJobsPager = AsyncPager<ListPatchJobsRequest, ListPatchJobsResponse, HttpFetcher>;

/// Asynchronous client for the Fleetconf API
#[derive(Clone, Debug)]
pub struct FleetconfClient {
    transport: Arc<HttpClient>,
}

impl FleetconfClient {
    /// Create a client from a configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: Arc::new(HttpClient::new(config)?),
        })
    }

    fn fetcher(&self) -> HttpFetcher {
        HttpFetcher::new(Arc::clone(&self.transport))
    }

    /// List the policy assignments of a zone
    pub async fn list_policy_assignments(
        &self,
        request: &ListPolicyAssignmentsRequest,
        options: CallOptions,
    ) -> Result<PolicyAssignmentsPager> {
        let mut fetcher = self.fetcher();
        let first: ListPolicyAssignmentsResponse = fetcher.fetch(request, &options).await?;
        Ok(AsyncPager::new(fetcher, request, first, options))
    }

    /// List the revisions of one policy assignment
    pub async fn list_policy_assignment_revisions(
        &self,
        request: &ListPolicyAssignmentRevisionsRequest,
        options: CallOptions,
    ) -> Result<PolicyAssignmentRevisionsPager> {
        let mut fetcher = self.fetcher();
        let first: ListPolicyAssignmentRevisionsResponse = fetcher.fetch(request, &options).await?;
        Ok(AsyncPager::new(fetcher, request, first, options))
    }

    /// List compliance reports under a zone
    pub async fn list_compliance_reports(
        &self,
        request: &ListComplianceReportsRequest,
        options: CallOptions,
    ) -> Result<ComplianceReportsPager> {
        let mut fetcher = self.fetcher();
        let first: ListComplianceReportsResponse = fetcher.fetch(request, &options).await?;
        Ok(AsyncPager::new(fetcher, request, first, options))
    }

    /// List host inventories in a zone
    pub async fn list_inventories(
        &self,
        request: &ListInventoriesRequest,
        options: CallOptions,
    ) -> Result<InventoriesPager> {
        let mut fetcher = self.fetcher();
        let first: ListInventoriesResponse = fetcher.fetch(request, &options).await?;
        Ok(AsyncPager::new(fetcher, request, first, options))
    }

    /// List vulnerability reports in a zone
    pub async fn list_vulnerability_reports(
        &self,
        request: &ListVulnerabilityReportsRequest,
        options: CallOptions,
    ) -> Result<VulnerabilityReportsPager> {
        let mut fetcher = self.fetcher();
        let first: ListVulnerabilityReportsResponse = fetcher.fetch(request, &options).await?;
        Ok(AsyncPager::new(fetcher, request, first, options))
    }

    /// List patch jobs in a zone
    pub async fn list_patch_jobs(
        &self,
        request: &ListPatchJobsRequest,
        options: CallOptions,
    ) -> Result<PatchJobsPager> {
        let mut fetcher = self.fetcher();
        let first: ListPatchJobsResponse = fetcher.fetch(request, &options).await?;
        Ok(AsyncPager::new(fetcher, request, first, options))
    }
}
