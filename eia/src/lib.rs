pub use eia_api as api;

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod validate;

pub use catalog::{FacetDescriptor, FacetValues, RouteCatalog, RouteDescriptor};
pub use client::EiaClient;
pub use config::EiaConfig;
pub use error::{EiaError, Result};
pub use validate::QueryArgs;

pub use eia_api::{Frequency, QueryRequest, QueryResult, Record, RoutePath};
