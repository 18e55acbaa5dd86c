//! Print the route metadata for a path, e.g.
//!
//!     EIA_API_KEY=... cargo run --example raw_metadata -- electricity

use std::sync::Arc;

use eia_api::{Configuration, EiaApiClient, RoutePath};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("EIA_API_KEY")?;
    let path: RoutePath = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "electricity".to_string())
        .into();

    let client = EiaApiClient::new(Arc::new(Configuration::new(api_key)));
    let metadata = client.route_metadata(&path).await?;

    println!("{}", metadata.name.as_deref().unwrap_or("(unnamed)"));
    if let Some(description) = &metadata.description {
        println!("{}", description);
    }
    for route in &metadata.routes {
        println!("  {}/{}  {}", path, route.id, route.name.as_deref().unwrap_or(""));
    }
    for facet in &metadata.facets {
        println!("  facet: {}  {}", facet.id, facet.description.as_deref().unwrap_or(""));
    }
    for frequency in &metadata.frequency {
        println!("  frequency: {}", frequency.id);
    }
    Ok(())
}
