// crates/nsgate-config/src/lib.rs
// ============================================================================
// Module: nsgate Config Library
// Description: Canonical config model and validation.
// Purpose: Single source of truth for nsgate.toml semantics.
// Dependencies: nsgate-core, serde, toml
// ============================================================================

//! ## Overview
//! `nsgate-config` defines the configuration model for nsgate: the admin
//! group injected into the engine, the verb-enforcement switch, and the
//! audit sink. Validation is strict and fails closed.
//!
//! ```toml
//! [security]
//! admin_group = "ns4kafka-admins"
//! enforce_verbs = false
//!
//! [audit]
//! sink = "file"
//! path = "/var/log/nsgate/audit.log"
//! ```

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
