//! Tests for resource types

use super::*;
use crate::pager::{PageableRequest, PageableResponse};
use serde_json::json;

// ============================================================================
// Wire shape
// ============================================================================

#[test]
fn test_response_deserializes_camel_case() {
    let body = json!({
        "policyAssignments": [
            {
                "name": "zones/eu-1/policyAssignments/base",
                "revisionId": "rev-3",
                "rolloutState": "SUCCEEDED",
                "baseline": true
            }
        ],
        "nextPageToken": "tok-1"
    });

    let response: ListPolicyAssignmentsResponse = serde_json::from_value(body).unwrap();

    assert_eq!(response.policy_assignments.len(), 1);
    let assignment = &response.policy_assignments[0];
    assert_eq!(assignment.name, "zones/eu-1/policyAssignments/base");
    assert_eq!(assignment.revision_id, "rev-3");
    assert_eq!(assignment.rollout_state, RolloutState::Succeeded);
    assert!(assignment.baseline);
    assert_eq!(response.next_page_token, "tok-1");
}

#[test]
fn test_final_page_token_defaults_to_empty() {
    // The server omits nextPageToken on the last page.
    let body = json!({ "inventories": [] });

    let response: ListInventoriesResponse = serde_json::from_value(body).unwrap();

    assert!(response.next_page_token.is_empty());
    assert!(response.items().is_empty());
}

#[test]
fn test_vulnerability_report_fields() {
    let body = json!({
        "vulnerabilityReports": [
            {
                "name": "zones/eu-1/hosts/web-1/vulnerabilityReport",
                "host": "web-1",
                "vulnerabilities": [
                    {"cve": "CVE-2024-12345", "cvssScore": 9.8, "severity": "CRITICAL"}
                ]
            }
        ]
    });

    let response: ListVulnerabilityReportsResponse = serde_json::from_value(body).unwrap();

    let report = &response.vulnerability_reports[0];
    assert_eq!(report.vulnerabilities[0].cve, "CVE-2024-12345");
    assert_eq!(report.vulnerabilities[0].severity, Severity::Critical);
}

// ============================================================================
// Pageable trait impls
// ============================================================================

#[test]
fn test_set_page_token_replaces_value() {
    let mut request = ListPatchJobsRequest::new("zones/eu-1");
    assert!(request.page_token.is_empty());

    request.set_page_token("tok-2".to_string());
    assert_eq!(request.page_token, "tok-2");

    request.set_page_token("tok-3".to_string());
    assert_eq!(request.page_token, "tok-3");
}

#[test]
fn test_items_and_into_items_agree() {
    let response = ListComplianceReportsResponse {
        compliance_reports: vec![
            ComplianceReport {
                name: "zones/eu-1/hosts/web-1/complianceReports/r1".to_string(),
                state: ComplianceState::Compliant,
                ..Default::default()
            },
            ComplianceReport {
                name: "zones/eu-1/hosts/web-2/complianceReports/r1".to_string(),
                state: ComplianceState::NonCompliant,
                ..Default::default()
            },
        ],
        next_page_token: "tok".to_string(),
    };

    assert_eq!(response.next_page_token(), "tok");
    assert_eq!(response.items().to_vec(), response.clone().into_items());
}

// ============================================================================
// Endpoint mapping
// ============================================================================

#[test]
fn test_endpoint_paths() {
    assert_eq!(
        ListPolicyAssignmentsRequest::new("zones/eu-1").path(),
        "/v1/zones/eu-1/policyAssignments"
    );
    assert_eq!(
        ListPolicyAssignmentRevisionsRequest::new("zones/eu-1/policyAssignments/base").path(),
        "/v1/zones/eu-1/policyAssignments/base:listRevisions"
    );
    assert_eq!(
        ListComplianceReportsRequest::new("zones/eu-1").path(),
        "/v1/zones/eu-1/complianceReports"
    );
    assert_eq!(
        ListInventoriesRequest::new("zones/eu-1").path(),
        "/v1/zones/eu-1/inventories"
    );
    assert_eq!(
        ListVulnerabilityReportsRequest::new("zones/eu-1").path(),
        "/v1/zones/eu-1/vulnerabilityReports"
    );
    assert_eq!(
        ListPatchJobsRequest::new("zones/eu-1").path(),
        "/v1/zones/eu-1/patchJobs"
    );
}

#[test]
fn test_query_skips_unset_parameters() {
    let request = ListInventoriesRequest::new("zones/eu-1");
    assert!(request.query().is_empty());

    let request = ListInventoriesRequest::new("zones/eu-1")
        .with_view(InventoryView::Full)
        .with_page_size(50)
        .with_filter("osInfo.shortName = \"debian\"");
    let query = request.query();

    assert_eq!(
        query,
        vec![
            ("view".to_string(), "FULL".to_string()),
            ("pageSize".to_string(), "50".to_string()),
            (
                "filter".to_string(),
                "osInfo.shortName = \"debian\"".to_string()
            ),
        ]
    );
}

#[test]
fn test_query_carries_page_token() {
    let mut request = ListPolicyAssignmentsRequest::new("zones/eu-1").with_page_size(10);
    request.set_page_token("tok-9".to_string());

    let query = request.query();
    assert!(query.contains(&("pageToken".to_string(), "tok-9".to_string())));
    assert!(query.contains(&("pageSize".to_string(), "10".to_string())));
}
