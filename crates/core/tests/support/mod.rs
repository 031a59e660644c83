//! Shared test helpers for `anypoint-core` integration tests.
//!
//! Provides an in-memory Access Management port so service tests can focus on
//! behaviour instead of HTTP plumbing.

pub mod access_management;
