//! Organization access boundary
//!
//! The core crate never talks HTTP. Everything it needs from the Access
//! Management API goes through [`ports::AccessManagementPort`], implemented in
//! `anypoint-infra` and mocked in tests.

pub mod ports;
