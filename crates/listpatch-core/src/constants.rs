//! Shared constants for SharePoint REST interactions.

/// Claims-based membership provider prefix required by the user-lookup APIs.
pub const MEMBERSHIP_PROVIDER_PREFIX: &str = "i:0#.f|membership|";

/// Content negotiation value for SharePoint's verbose OData dialect.
pub const ODATA_VERBOSE: &str = "application/json;odata=verbose";
