use eia::{EiaClient, QueryArgs, RoutePath};

/// Fetch monthly retail electricity prices for California.
///
/// Requires `EIA_API_KEY` in the environment.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = EiaClient::new()?;

    let route = RoutePath::from("electricity/retail-sales");
    let descriptor = client.explore(&route).await?;
    println!("route: {}", descriptor.label);

    let result = client
        .fetch(
            &route,
            QueryArgs::new()
                .with_facet("stateid", "CA")
                .with_facet("sectorid", "RES")
                .with_frequency("monthly")
                .with_period(Some("2024-01".into()), Some("2024-06".into()))
                .with_data_columns(["price", "sales"]),
        )
        .await?;

    for record in &result.records {
        println!("{:?}", record);
    }
    println!(
        "{} of {} rows (complete: {})",
        result.records.len(),
        result.total,
        result.complete
    );
    Ok(())
}
