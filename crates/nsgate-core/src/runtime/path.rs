// crates/nsgate-core/src/runtime/path.rs
// ============================================================================
// Module: Request Path Classifier
// Description: Parse namespaced-resource request paths into structured shape.
// Purpose: Decide which requests the resource rule governs and extract tokens.
// Dependencies: crate::core::identifiers
// ============================================================================

//! ## Overview
//! Recognized grammar, after any prefix ending in a `namespaces` segment
//! (the last such segment followed by two to four segments):
//!
//! - `/namespaces/{namespace}/{resourceType}`
//! - `/namespaces/{namespace}/{resourceType}/{resourceName}`
//! - `/namespaces/{namespace}/{resourceType}/{resourceName}/{subAction}`
//!
//! Every segment must be non-empty and use `[A-Za-z0-9_.-]`. Dots never
//! split a segment, so `topic.with.dots` is one resource name. A single
//! trailing slash is tolerated. Anything else, including a namespace with
//! `$` or `*`, is unclassifiable and yields `None`; malformed input defers to
//! the surrounding default-deny instead of raising a namespace error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::ops::RangeInclusive;

use crate::core::identifiers::is_name_byte;
use crate::core::identifiers::is_valid_namespace_name;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Segment that introduces the namespace name.
const NAMESPACES_SEGMENT: &str = "namespaces";
/// Accepted number of segments after the `namespaces` anchor.
const TAIL_SEGMENTS: RangeInclusive<usize> = 2 ..= 4;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Structured namespaced-resource request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    /// Target namespace.
    pub namespace: String,
    /// Catalog path segment of the resource type.
    pub resource_type: String,
    /// Resource instance name, when addressed.
    pub resource_name: Option<String>,
    /// Sub-action on the resource instance, when addressed.
    pub sub_action: Option<String>,
}

impl ParsedRequest {
    /// Returns the grant token this request must match: the bare resource
    /// type, or `resourceType/subAction` when a sub-action is present.
    #[must_use]
    pub fn grant_token(&self) -> String {
        match &self.sub_action {
            Some(sub_action) => format!("{}/{sub_action}", self.resource_type),
            None => self.resource_type.clone(),
        }
    }
}

// ============================================================================
// SECTION: Classifier
// ============================================================================

/// Classifies a request path; `None` when it is not a namespaced-resource request.
#[must_use]
pub fn classify(path: &str) -> Option<ParsedRequest> {
    let mut segments: Vec<&str> = path.strip_prefix('/')?.split('/').collect();
    if segments.last().is_some_and(|segment| segment.is_empty()) {
        segments.pop();
    }
    let anchor = (0 .. segments.len()).rev().find(|&index| {
        segments[index] == NAMESPACES_SEGMENT
            && TAIL_SEGMENTS.contains(&(segments.len() - index - 1))
    })?;
    if segments[.. anchor].iter().any(|segment| segment.is_empty()) {
        return None;
    }
    let tail = &segments[anchor + 1 ..];
    let (namespace, resource_type, resource_name, sub_action) = match *tail {
        [namespace, resource_type] => (namespace, resource_type, None, None),
        [namespace, resource_type, resource_name] => {
            (namespace, resource_type, Some(resource_name), None)
        }
        [namespace, resource_type, resource_name, sub_action] => {
            (namespace, resource_type, Some(resource_name), Some(sub_action))
        }
        _ => return None,
    };
    if !is_valid_namespace_name(namespace) || !is_valid_segment(resource_type) {
        return None;
    }
    if resource_name.is_some_and(|name| !is_valid_segment(name))
        || sub_action.is_some_and(|action| !is_valid_segment(action))
    {
        return None;
    }
    Some(ParsedRequest {
        namespace: namespace.to_string(),
        resource_type: resource_type.to_string(),
        resource_name: resource_name.map(str::to_string),
        sub_action: sub_action.map(str::to_string),
    })
}

/// Returns true for a non-empty segment of allowed bytes.
fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(is_name_byte)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only assertions use unwrap/expect for clarity."
    )]

    use super::classify;

    #[test]
    fn trailing_slash_is_tolerated_once() {
        let parsed = classify("/api/namespaces/test/topics/").expect("classified");
        assert_eq!(parsed.resource_type, "topics");
        assert!(classify("/api/namespaces/test/topics//").is_none());
    }

    #[test]
    fn empty_prefix_segments_are_rejected() {
        assert!(classify("//namespaces/test/topics").is_none());
        assert!(classify("api/namespaces/test/topics").is_none());
    }

    #[test]
    fn too_many_segments_are_rejected() {
        assert!(classify("/api/namespaces/test/topics/a/b/c").is_none());
    }

    #[test]
    fn last_namespaces_segment_with_valid_tail_anchors() {
        let nested = classify("/namespaces/api/namespaces/test/topics").expect("classified");
        assert_eq!(nested.namespace, "test");
        assert_eq!(nested.resource_type, "topics");

        let kind = classify("/api/namespaces/test/namespaces").expect("classified");
        assert_eq!(kind.namespace, "test");
        assert_eq!(kind.resource_type, "namespaces");
    }
}
