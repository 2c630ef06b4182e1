//! Policy/data source resolution (no IO).
//!
//! Input: the caller's repeated policy and data location strings.
//! Output: one ordered list of typed source descriptors.

#![forbid(unsafe_code)]

use pipeguard_types::PolicySource;

/// Resolve policy and data locations into one ordered evaluation context.
///
/// Every policy-kind entry precedes every data-kind entry; within each
/// group the caller's input order is preserved. Nothing is dropped,
/// merged, or deduplicated: validators decide what a location means.
pub fn resolve_sources(policy: &[String], data: &[String]) -> Vec<PolicySource> {
    let mut sources = Vec::with_capacity(policy.len() + data.len());
    sources.extend(policy.iter().map(PolicySource::policy));
    sources.extend(data.iter().map(PolicySource::data));
    sources
}
