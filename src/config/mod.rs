//! Configuration for the authorization engine
//!
//! This module handles validation and merging of engine configuration.

pub mod authz;

pub use authz::AuthzConfig;
