use anyhow::{Context, Result, bail};
use clap::{Arg, ArgAction, ArgMatches, Command};
use colored::Colorize;

use eia::{EiaClient, EiaConfig, FacetValues, QueryArgs, RoutePath};

fn cli() -> Command {
    Command::new("eia")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Explore and fetch U.S. energy statistics from the EIA open data API")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("explore")
                .about("List child routes, facets, and frequencies for a path")
                .arg(
                    Arg::new("path")
                        .help("Route path, e.g. 'electricity' or 'natural-gas/stor'")
                        .default_value(""),
                ),
        )
        .subcommand(
            Command::new("fetch")
                .about("Fetch data rows from a route")
                .arg(
                    Arg::new("route")
                        .help("Data route, e.g. 'electricity/retail-sales'")
                        .required(true),
                )
                .arg(
                    Arg::new("facet")
                        .long("facet")
                        .short('f')
                        .value_name("ID=VALUE")
                        .action(ArgAction::Append)
                        .help("Facet filter, repeatable (e.g. -f stateid=CA -f sectorid=RES)"),
                )
                .arg(
                    Arg::new("column")
                        .long("column")
                        .short('c')
                        .value_name("NAME")
                        .action(ArgAction::Append)
                        .help("Data column to retrieve, repeatable (e.g. -c sales -c price)"),
                )
                .arg(Arg::new("frequency").long("frequency").value_name("FREQ"))
                .arg(Arg::new("start").long("start").value_name("PERIOD"))
                .arg(Arg::new("end").long("end").value_name("PERIOD"))
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_name("N")
                        .value_parser(clap::value_parser!(u64))
                        .help("Maximum number of rows to return"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print raw JSON records instead of a summary"),
                ),
        )
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli().get_matches();

    let mut config = EiaConfig::from_env().context(
        "set EIA_API_KEY to your API key (register for free at https://www.eia.gov/opendata/)",
    )?;
    if let Some(cache) = EiaConfig::default_catalog_cache() {
        config = config.with_catalog_cache(cache);
    }
    let client = EiaClient::with_config(config)?;

    match matches.subcommand() {
        Some(("explore", sub)) => explore(&client, sub).await,
        Some(("fetch", sub)) => fetch(&client, sub).await,
        _ => unreachable!("subcommand is required"),
    }
}

async fn explore(client: &EiaClient, matches: &ArgMatches) -> Result<()> {
    let path: RoutePath = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or("")
        .into();

    let descriptor = client.explore(&path).await?;

    println!("{}", descriptor.label.bold());
    if !descriptor.children.is_empty() {
        println!("\n{}", "Routes:".bold());
        for child in &descriptor.children {
            println!("  {}", child.to_string().cyan());
        }
    }
    if !descriptor.facets.is_empty() {
        println!("\n{}", "Facets:".bold());
        for facet in &descriptor.facets {
            match &facet.values {
                FacetValues::Closed(values) => {
                    println!("  {}  [{}]", facet.id.cyan(), values.join(", ").dimmed())
                }
                FacetValues::Open => println!("  {}", facet.id.cyan()),
            }
        }
    }
    if !descriptor.frequencies.is_empty() {
        let frequencies: Vec<&str> = descriptor.frequencies.iter().map(|f| f.as_str()).collect();
        println!("\n{} {}", "Frequencies:".bold(), frequencies.join(", "));
        if let Some(default) = descriptor.default_frequency {
            println!("{} {}", "Default:".bold(), default);
        }
    }
    if descriptor.children.is_empty() && descriptor.facets.is_empty() {
        println!("{}", "(terminal route with no listed facets)".dimmed());
    }
    Ok(())
}

async fn fetch(client: &EiaClient, matches: &ArgMatches) -> Result<()> {
    let route: RoutePath = matches
        .get_one::<String>("route")
        .expect("route is required")
        .as_str()
        .into();

    let mut args = QueryArgs::new();
    if let Some(facets) = matches.get_many::<String>("facet") {
        for raw in facets {
            let Some((id, value)) = raw.split_once('=') else {
                bail!("facet filters take the form ID=VALUE, got `{raw}`");
            };
            args = args.with_facet(id, value);
        }
    }
    if let Some(columns) = matches.get_many::<String>("column") {
        args = args.with_data_columns(columns.map(String::as_str));
    }
    if let Some(frequency) = matches.get_one::<String>("frequency") {
        args = args.with_frequency(frequency.as_str());
    }
    args = args.with_period(
        matches.get_one::<String>("start").cloned(),
        matches.get_one::<String>("end").cloned(),
    );
    if let Some(limit) = matches.get_one::<u64>("limit") {
        args = args.with_limit(*limit);
    }

    let result = client.fetch(&route, args).await?;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&result.records)?);
    } else {
        for record in &result.records {
            let line: Vec<String> = record
                .iter()
                .map(|(column, value)| format!("{}={}", column.dimmed(), value))
                .collect();
            println!("{}", line.join("  "));
        }
    }

    let summary = format!(
        "{} of {} rows{}",
        result.records.len(),
        result.total,
        if result.complete {
            ""
        } else {
            " (truncated by row cap)"
        }
    );
    if result.complete {
        eprintln!("{}", summary.green());
    } else {
        eprintln!("{}", summary.yellow());
    }
    Ok(())
}
