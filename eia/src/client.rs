use std::sync::Arc;

use eia_api::{EiaApiClient, QueryResult, RoutePath};

use crate::catalog::{RouteCatalog, RouteDescriptor};
use crate::config::EiaConfig;
use crate::error::Result;
use crate::validate::{self, QueryArgs};

/// High-level client for the EIA open data API
///
/// Wraps the low-level [`EiaApiClient`] with the route catalog and
/// parameter validation: callers name a route and plain arguments, and
/// get back either a fully assembled result set or a typed rejection
/// that never touched the network.
#[derive(Debug)]
pub struct EiaClient {
    api: EiaApiClient,
    catalog: RouteCatalog,
    config: EiaConfig,
}

impl EiaClient {
    /// Create a client from the environment (`EIA_API_KEY` required)
    pub fn new() -> Result<Self> {
        Self::with_config(EiaConfig::from_env()?)
    }

    /// Create a client with custom configuration
    pub fn with_config(config: EiaConfig) -> Result<Self> {
        let api = EiaApiClient::new(Arc::clone(&config.api_config));
        let catalog = RouteCatalog::load_or_bundled(config.catalog_cache.as_deref());
        Ok(Self {
            api,
            catalog,
            config,
        })
    }

    /// Fetch the complete result set for a route.
    ///
    /// The route must resolve in the catalog and the arguments must pass
    /// validation against its descriptor before any request is issued.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use eia::{EiaClient, QueryArgs, RoutePath};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = EiaClient::new()?;
    /// let result = client
    ///     .fetch(
    ///         &RoutePath::from("electricity/retail-sales"),
    ///         QueryArgs::new()
    ///             .with_facet("stateid", "CA")
    ///             .with_frequency("monthly")
    ///             .with_data_columns(["sales", "price"]),
    ///     )
    ///     .await?;
    /// println!("{} rows (complete: {})", result.records.len(), result.complete);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch(&self, route: &RoutePath, args: QueryArgs) -> Result<QueryResult> {
        let descriptor = self.catalog.resolve(route)?;
        let request = validate::validate(&descriptor, args)?;
        Ok(self.api.fetch_all(&request).await?)
    }

    /// Describe a route: its label, child routes, facets, and supported
    /// frequencies.
    ///
    /// This is a pure catalog read for known paths. A path missing from
    /// the catalog triggers a one-off metadata refresh for that subtree;
    /// no data rows are ever requested. Terminal routes report an empty
    /// child list.
    pub async fn explore(&self, path: &RoutePath) -> Result<RouteDescriptor> {
        if !self.catalog.contains(path) {
            self.refresh(path).await?;
        }
        self.catalog.resolve(path)
    }

    /// Refresh one subtree of the catalog from the remote metadata
    /// endpoint. Sibling subtrees are untouched.
    pub async fn refresh(&self, path: &RoutePath) -> Result<()> {
        let metadata = self.api.route_metadata(path).await?;
        self.catalog.apply_metadata(path, &metadata);
        if let Some(cache) = &self.config.catalog_cache {
            // Cache writes are best-effort; a read-only disk must not
            // fail the call.
            let _ = self.catalog.save(cache);
        }
        Ok(())
    }

    /// The route catalog backing this client
    pub fn catalog(&self) -> &RouteCatalog {
        &self.catalog
    }

    /// The underlying API client for advanced operations
    pub fn api_client(&self) -> &EiaApiClient {
        &self.api
    }
}
