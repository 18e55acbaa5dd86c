#![allow(clippy::too_many_arguments)]

pub mod client;
pub mod models;
pub mod query;

// Re-export the ergonomic client and configuration for easy access
pub use client::{ApiErrorKind, Configuration, EiaApiClient, EiaApiError, EIA_API_BASE};
pub use models::{
    FacetListing, Frequency, FrequencyListing, QueryResult, Record, RouteListing, RouteMetadata,
    RoutePath,
};
pub use query::{DEFAULT_PAGE_LENGTH, QueryRequest, SortDirection, SortSpec};
