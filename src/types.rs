//! Common types used throughout site-pager
//!
//! This module contains the page descriptor handed to sinks, the component
//! identifier, and the context keys written by the page builders.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type, used for page contexts
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Context Keys
// ============================================================================

/// Records on the current page (pagination)
pub const KEY_NODES: &str = "nodes";
/// Current page number, 1-based (pagination)
pub const KEY_PAGE: &str = "page";
/// Number of pages (pagination)
pub const KEY_PAGES: &str = "pages";
/// Number of records across all pages
pub const KEY_TOTAL: &str = "total";
/// Records per page (pagination)
pub const KEY_LIMIT: &str = "limit";
/// Path of the previous page, only present when one exists
pub const KEY_PREV: &str = "prev";
/// Path of the next page, only present when one exists
pub const KEY_NEXT: &str = "next";

// ============================================================================
// Component
// ============================================================================

/// Opaque identifier of the component (template) that renders a page.
///
/// Forwarded unchanged into every descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Component(String);

impl Component {
    /// Create a component identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty identifier counts as not provided
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Component {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Component {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Page Descriptor
// ============================================================================

/// A generated page, handed to the page sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDescriptor {
    /// Canonical location of the page
    pub path: String,
    /// Component that renders the page
    pub component: Component,
    /// Navigation, summary and caller-supplied values
    #[serde(default)]
    pub context: JsonObject,
    /// Layout hint, only present when the record extractor supplied one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
}

impl PageDescriptor {
    /// Create a descriptor with an empty context
    pub fn new(path: impl Into<String>, component: Component) -> Self {
        Self {
            path: path.into(),
            component,
            context: JsonObject::new(),
            layout: None,
        }
    }

    /// Look up a context value
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.context.get(key)
    }

    /// Look up a string context value
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.context.get(key).and_then(JsonValue::as_str)
    }

    /// Path of the previous page, if any
    pub fn prev(&self) -> Option<&str> {
        self.get_str(KEY_PREV)
    }

    /// Path of the next page, if any
    pub fn next(&self) -> Option<&str> {
        self.get_str(KEY_NEXT)
    }

    /// Value of the `total` counter
    pub fn total(&self) -> Option<u64> {
        self.context.get(KEY_TOTAL).and_then(JsonValue::as_u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_component_conversions() {
        let component: Component = "templates/list.html".into();
        assert_eq!(component.as_str(), "templates/list.html");
        assert_eq!(component.to_string(), "templates/list.html");
        assert!(!component.is_empty());
        assert!(Component::new("").is_empty());
    }

    #[test]
    fn test_component_serializes_as_string() {
        let json = serde_json::to_string(&Component::new("post")).unwrap();
        assert_eq!(json, "\"post\"");
    }

    #[test]
    fn test_descriptor_omits_absent_layout() {
        let page = PageDescriptor::new("/", Component::new("list"));
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(
            value,
            json!({"path": "/", "component": "list", "context": {}})
        );

        let mut page = page;
        page.layout = Some("wide".to_string());
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["layout"], "wide");
    }

    #[test]
    fn test_descriptor_accessors() {
        let mut page = PageDescriptor::new("/2", Component::new("list"));
        page.context.insert(KEY_PREV.to_string(), json!("/"));
        page.context.insert(KEY_TOTAL.to_string(), json!(30));

        assert_eq!(page.prev(), Some("/"));
        assert_eq!(page.next(), None);
        assert_eq!(page.total(), Some(30));
    }
}
