//! API constants
//!
//! Centralized location for endpoint paths, header names and defaults used by
//! every layer of the provider.

// Platform defaults
pub const DEFAULT_BASE_URL: &str = "https://anypoint.mulesoft.com";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("anypoint-provider/", env!("CARGO_PKG_VERSION"));

// Access Management endpoints
pub const LOGIN_PATH: &str = "/accounts/login";
pub const ME_PATH: &str = "/accounts/api/me";
pub const ORGANIZATIONS_PATH: &str = "/accounts/api/organizations";

// Request headers
pub const ORG_ID_HEADER: &str = "X-ANYPNT-ORG-ID";
pub const ENV_ID_HEADER: &str = "X-ANYPNT-ENV-ID";

// Business group paths
pub const PATH_DELIMITER: char = '/';

// Member search paging
pub const MEMBER_SEARCH_PAGE_SIZE: u32 = 100;

// Declarative resource type name exposed to the host tool
pub const BUSINESS_GROUP_RESOURCE: &str = "anypoint_business_group";

// Tracing target for request/response dumps
pub const WIRE_LOG_TARGET: &str = "anypoint::wire";
