//! Host inventory resources
//!
//! An inventory is the agent-collected snapshot of a host: OS details plus
//! installed and available packages. The full snapshot can be large, so
//! list calls take a view selector.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ListEndpoint;
use crate::pager::{PageableRequest, PageableResponse};

/// How much of each inventory to return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InventoryView {
    /// Server default (basic)
    #[default]
    Unspecified,
    /// OS information only
    Basic,
    /// OS information plus package data
    Full,
}

impl InventoryView {
    /// Query-parameter value; `None` for the server default
    pub fn as_param(self) -> Option<&'static str> {
        match self {
            InventoryView::Unspecified => None,
            InventoryView::Basic => Some("BASIC"),
            InventoryView::Full => Some("FULL"),
        }
    }
}

/// Operating system details reported by the agent
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OsInfo {
    /// Host name reported by the OS
    pub hostname: String,
    /// OS short name, e.g. `debian`
    pub short_name: String,
    /// OS version
    pub version: String,
    /// Kernel version
    pub kernel_version: String,
    /// CPU architecture
    pub architecture: String,
}

/// Inventory snapshot of one host
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Inventory {
    /// Resource name, `zones/{zone}/hosts/{host}/inventory`
    pub name: String,
    /// OS details
    pub os_info: OsInfo,
    /// Time the agent last refreshed the snapshot
    pub update_time: Option<DateTime<Utc>>,
}

/// Request for listing host inventories in a zone
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListInventoriesRequest {
    /// Parent zone, `zones/{zone}`
    pub parent: String,
    /// Inventory view selector
    pub view: InventoryView,
    /// Maximum inventories per page; the server may return fewer
    pub page_size: i32,
    /// Continuation token from a previous response
    pub page_token: String,
    /// Server-side filter expression
    pub filter: String,
}

impl ListInventoriesRequest {
    /// Create a request scoped to a zone
    pub fn new(parent: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            ..Default::default()
        }
    }

    /// Set the inventory view
    #[must_use]
    pub fn with_view(mut self, view: InventoryView) -> Self {
        self.view = view;
        self
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

impl PageableRequest for ListInventoriesRequest {
    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

impl ListEndpoint for ListInventoriesRequest {
    fn path(&self) -> String {
        format!("/v1/{}/inventories", self.parent)
    }

    fn query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(view) = self.view.as_param() {
            query.push(("view".to_string(), view.to_string()));
        }
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

/// One page of inventories
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListInventoriesResponse {
    /// Inventories in this page
    pub inventories: Vec<Inventory>,
    /// Token for the next page; empty on the final page
    pub next_page_token: String,
}

impl PageableResponse for ListInventoriesResponse {
    type Item = Inventory;

    fn next_page_token(&self) -> &str {
        &self.next_page_token
    }

    fn items(&self) -> &[Inventory] {
        &self.inventories
    }

    fn into_items(self) -> Vec<Inventory> {
        self.inventories
    }
}
