//! Tool parameter structs and the static tool table.
//!
//! Each data tool accepts plain, human-oriented argument names (`state`,
//! `area`, `fuel_type`) and maps them onto the facet ids its route
//! actually uses. Unknown argument names are rejected at deserialization
//! time rather than silently dropped.

use eia::{QueryArgs, RoutePath};
use serde::Deserialize;
use serde_json::{Value, json};

/// Row cap applied when a tool call does not name its own `limit`.
pub const DEFAULT_TOOL_LIMIT: u64 = 100;

fn data_args(
    frequency: Option<String>,
    start: Option<String>,
    end: Option<String>,
    columns: Option<Vec<String>>,
    default_columns: &[&str],
    limit: Option<u64>,
) -> QueryArgs {
    let mut args = QueryArgs::new()
        .with_period(start, end)
        .with_limit(limit.unwrap_or(DEFAULT_TOOL_LIMIT));
    if let Some(frequency) = frequency {
        args = args.with_frequency(frequency);
    }
    match columns {
        Some(columns) if !columns.is_empty() => args.with_data_columns(columns),
        _ => args.with_data_columns(default_columns.iter().copied()),
    }
}

fn opt_facet(args: QueryArgs, id: &str, value: Option<String>) -> QueryArgs {
    match value {
        Some(value) => args.with_facet(id, value),
        None => args,
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetailSalesParams {
    state: Option<String>,
    sector: Option<String>,
    frequency: Option<String>,
    start: Option<String>,
    end: Option<String>,
    data_columns: Option<Vec<String>>,
    limit: Option<u64>,
}

impl RetailSalesParams {
    pub fn into_query(self) -> (RoutePath, QueryArgs) {
        let mut args = data_args(
            self.frequency,
            self.start,
            self.end,
            self.data_columns,
            &["revenue", "sales", "price", "customers"],
            self.limit,
        );
        args = opt_facet(args, "stateid", self.state);
        args = opt_facet(args, "sectorid", self.sector);
        (RoutePath::from("electricity/retail-sales"), args)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OperationalDataParams {
    state: Option<String>,
    fuel_type: Option<String>,
    frequency: Option<String>,
    start: Option<String>,
    end: Option<String>,
    data_columns: Option<Vec<String>>,
    limit: Option<u64>,
}

impl OperationalDataParams {
    pub fn into_query(self) -> (RoutePath, QueryArgs) {
        let mut args = data_args(
            self.frequency,
            self.start,
            self.end,
            self.data_columns,
            &["generation", "total-consumption"],
            self.limit,
        );
        // This route keys state by plant location, not stateid.
        args = opt_facet(args, "location", self.state);
        args = opt_facet(args, "fueltypeid", self.fuel_type);
        (
            RoutePath::from("electricity/electric-power-operational-data"),
            args,
        )
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RtoParams {
    route: Option<String>,
    respondent: Option<String>,
    fuel_type: Option<String>,
    start: Option<String>,
    end: Option<String>,
    data_columns: Option<Vec<String>>,
    limit: Option<u64>,
}

impl RtoParams {
    pub fn into_query(self) -> (RoutePath, QueryArgs) {
        let route = self.route.unwrap_or_else(|| "region-data".to_string());
        let mut args = data_args(
            None,
            self.start,
            self.end,
            self.data_columns,
            &["value"],
            self.limit,
        );
        args = opt_facet(args, "respondent", self.respondent);
        args = opt_facet(args, "fueltype", self.fuel_type);
        (RoutePath::from(format!("electricity/rto/{route}")), args)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StateProfilesParams {
    route: Option<String>,
    state: Option<String>,
    start: Option<String>,
    end: Option<String>,
    data_columns: Option<Vec<String>>,
    limit: Option<u64>,
}

impl StateProfilesParams {
    pub fn into_query(self) -> (RoutePath, QueryArgs) {
        let route = self
            .route
            .unwrap_or_else(|| "source-disposition".to_string());
        // Profile routes disagree on both the state facet id and the
        // meaningful value columns.
        let state_facet = if route == "emissions-by-state-by-fuel" {
            "stateid"
        } else {
            "state"
        };
        let default_columns: &[&str] = match route.as_str() {
            "emissions-by-state-by-fuel" => {
                &["co2-thousand-metric-tons", "so2-short-tons", "nox-short-tons"]
            }
            "source-disposition" => &[
                "electric-utilities",
                "independent-power-producers",
                "combined-heat-and-pwr-elect",
            ],
            "capability" => &["capability"],
            _ => &["value"],
        };

        let mut args = data_args(
            None,
            self.start,
            self.end,
            self.data_columns,
            default_columns,
            self.limit,
        );
        args = opt_facet(args, state_facet, self.state);
        (
            RoutePath::from(format!("electricity/state-electricity-profiles/{route}")),
            args,
        )
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorCapacityParams {
    state: Option<String>,
    status: Option<String>,
    technology: Option<String>,
    energy_source: Option<String>,
    start: Option<String>,
    end: Option<String>,
    data_columns: Option<Vec<String>>,
    limit: Option<u64>,
}

impl GeneratorCapacityParams {
    pub fn into_query(self) -> (RoutePath, QueryArgs) {
        let mut args = data_args(
            None,
            self.start,
            self.end,
            self.data_columns,
            &["nameplate-capacity-mw", "net-summer-capacity-mw"],
            self.limit,
        );
        args = opt_facet(args, "stateid", self.state);
        args = opt_facet(args, "status", self.status);
        args = opt_facet(args, "technology", self.technology);
        args = opt_facet(args, "energy_source_code", self.energy_source);
        (
            RoutePath::from("electricity/operating-generator-capacity"),
            args,
        )
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FacilityFuelParams {
    state: Option<String>,
    plant_id: Option<String>,
    fuel_type: Option<String>,
    frequency: Option<String>,
    start: Option<String>,
    end: Option<String>,
    data_columns: Option<Vec<String>>,
    limit: Option<u64>,
}

impl FacilityFuelParams {
    pub fn into_query(self) -> (RoutePath, QueryArgs) {
        let mut args = data_args(
            self.frequency,
            self.start,
            self.end,
            self.data_columns,
            &["generation", "gross-generation", "total-consumption"],
            self.limit,
        );
        args = opt_facet(args, "state", self.state);
        args = opt_facet(args, "plantCode", self.plant_id);
        args = opt_facet(args, "fuel2002", self.fuel_type);
        (RoutePath::from("electricity/facility-fuel"), args)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GasSummaryParams {
    series: Option<String>,
    frequency: Option<String>,
    start: Option<String>,
    end: Option<String>,
    data_columns: Option<Vec<String>>,
    limit: Option<u64>,
}

impl GasSummaryParams {
    pub fn into_query(self) -> (RoutePath, QueryArgs) {
        let mut args = data_args(
            self.frequency,
            self.start,
            self.end,
            self.data_columns,
            &["value"],
            self.limit,
        );
        args = opt_facet(args, "series", self.series);
        // The supply-and-disposition sub-route is the one that carries
        // rows; the bare summary route is metadata only.
        (RoutePath::from("natural-gas/sum/snd"), args)
    }
}

/// Shared shape for the routed natural-gas families (prices, production,
/// movements, storage, consumption, exploration). Which optional facets
/// apply varies per family, so each tool keeps its own struct.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GasPricesParams {
    route: Option<String>,
    area: Option<String>,
    product: Option<String>,
    frequency: Option<String>,
    start: Option<String>,
    end: Option<String>,
    data_columns: Option<Vec<String>>,
    limit: Option<u64>,
}

impl GasPricesParams {
    pub fn into_query(self) -> (RoutePath, QueryArgs) {
        let route = self.route.unwrap_or_else(|| "sum".to_string());
        let mut args = data_args(
            self.frequency,
            self.start,
            self.end,
            self.data_columns,
            &["value"],
            self.limit,
        );
        args = opt_facet(args, "duoarea", self.area);
        args = opt_facet(args, "product", self.product);
        (RoutePath::from(format!("natural-gas/pri/{route}")), args)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GasExplorationParams {
    route: Option<String>,
    area: Option<String>,
    frequency: Option<String>,
    start: Option<String>,
    end: Option<String>,
    data_columns: Option<Vec<String>>,
    limit: Option<u64>,
}

impl GasExplorationParams {
    pub fn into_query(self) -> (RoutePath, QueryArgs) {
        let route = self.route.unwrap_or_else(|| "wellend".to_string());
        let mut args = data_args(
            self.frequency,
            self.start,
            self.end,
            self.data_columns,
            &["value"],
            self.limit,
        );
        args = opt_facet(args, "duoarea", self.area);
        (RoutePath::from(format!("natural-gas/enr/{route}")), args)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GasProductionParams {
    route: Option<String>,
    area: Option<String>,
    product: Option<String>,
    frequency: Option<String>,
    start: Option<String>,
    end: Option<String>,
    data_columns: Option<Vec<String>>,
    limit: Option<u64>,
}

impl GasProductionParams {
    pub fn into_query(self) -> (RoutePath, QueryArgs) {
        let route = self.route.unwrap_or_else(|| "sum".to_string());
        let mut args = data_args(
            self.frequency,
            self.start,
            self.end,
            self.data_columns,
            &["value"],
            self.limit,
        );
        args = opt_facet(args, "duoarea", self.area);
        args = opt_facet(args, "product", self.product);
        (RoutePath::from(format!("natural-gas/prod/{route}")), args)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GasImportsExportsParams {
    route: Option<String>,
    area: Option<String>,
    country: Option<String>,
    frequency: Option<String>,
    start: Option<String>,
    end: Option<String>,
    data_columns: Option<Vec<String>>,
    limit: Option<u64>,
}

impl GasImportsExportsParams {
    pub fn into_query(self) -> (RoutePath, QueryArgs) {
        let route = self.route.unwrap_or_else(|| "state".to_string());
        let mut args = data_args(
            self.frequency,
            self.start,
            self.end,
            self.data_columns,
            &["value"],
            self.limit,
        );
        args = opt_facet(args, "duoarea", self.area);
        args = opt_facet(args, "countrynd", self.country);
        (RoutePath::from(format!("natural-gas/move/{route}")), args)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GasStorageParams {
    route: Option<String>,
    area: Option<String>,
    frequency: Option<String>,
    start: Option<String>,
    end: Option<String>,
    data_columns: Option<Vec<String>>,
    limit: Option<u64>,
}

impl GasStorageParams {
    pub fn into_query(self) -> (RoutePath, QueryArgs) {
        let route = self.route.unwrap_or_else(|| "sum".to_string());
        let mut args = data_args(
            self.frequency,
            self.start,
            self.end,
            self.data_columns,
            &["value"],
            self.limit,
        );
        args = opt_facet(args, "duoarea", self.area);
        (RoutePath::from(format!("natural-gas/stor/{route}")), args)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GasConsumptionParams {
    route: Option<String>,
    area: Option<String>,
    sector: Option<String>,
    frequency: Option<String>,
    start: Option<String>,
    end: Option<String>,
    data_columns: Option<Vec<String>>,
    limit: Option<u64>,
}

impl GasConsumptionParams {
    pub fn into_query(self) -> (RoutePath, QueryArgs) {
        let route = self.route.unwrap_or_else(|| "sum".to_string());
        let mut args = data_args(
            self.frequency,
            self.start,
            self.end,
            self.data_columns,
            &["value"],
            self.limit,
        );
        args = opt_facet(args, "duoarea", self.area);
        // Consumption sectors live under the `process` facet.
        args = opt_facet(args, "process", self.sector);
        (RoutePath::from(format!("natural-gas/cons/{route}")), args)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExploreParams {
    pub path: String,
}

#[derive(Debug)]
pub struct ToolSpec {
    pub tool_name: &'static str,
    pub method_name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

pub fn tool_specs() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            tool_name: "eia_electricity_retail_sales",
            method_name: "eia.electricityRetailSales",
            description: "Get electricity retail sales data including sales to customers by state and sector, customer counts, and pricing. Sources: Forms EIA-826, EIA-861, EIA-861M",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "state": {"type": "string", "description": "State code (e.g., 'CA', 'TX', 'NY'). Leave empty for all states."},
                    "sector": {"type": "string", "description": "Sector ID: RES (residential), COM (commercial), IND (industrial), TRA (transportation), OTH (other), ALL (all sectors)", "enum": ["RES", "COM", "IND", "TRA", "OTH", "ALL"]},
                    "frequency": {"type": "string", "description": "Data frequency", "enum": ["monthly", "quarterly", "annual"]},
                    "start": {"type": "string", "description": "Start date (YYYY-MM for monthly, YYYY for annual)"},
                    "end": {"type": "string", "description": "End date (YYYY-MM for monthly, YYYY for annual)"},
                    "data_columns": {"type": "array", "items": {"type": "string"}, "description": "Data columns to retrieve (e.g., 'revenue', 'sales', 'price', 'customers')"},
                    "limit": {"type": "integer", "description": "Maximum number of records to return (default: 100, max: 5000)"}
                },
                "additionalProperties": false
            }),
        },
        ToolSpec {
            tool_name: "eia_electricity_operational_data",
            method_name: "eia.electricityOperationalData",
            description: "Get monthly and annual electric power operational data including generation, fuel consumption, and emissions by state, sector, and energy source. Source: Form EIA-923",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "state": {"type": "string", "description": "State code (e.g., 'CA', 'TX')"},
                    "fuel_type": {"type": "string", "description": "Fuel type code (e.g., 'NG' for natural gas, 'COL' for coal, 'NUC' for nuclear, 'SUN' for solar, 'WND' for wind)"},
                    "frequency": {"type": "string", "description": "Data frequency", "enum": ["monthly", "quarterly", "annual"]},
                    "start": {"type": "string", "description": "Start date"},
                    "end": {"type": "string", "description": "End date"},
                    "data_columns": {"type": "array", "items": {"type": "string"}, "description": "Data columns to retrieve (e.g., 'generation', 'total-consumption')"},
                    "limit": {"type": "integer", "description": "Maximum number of records (default: 100)"}
                },
                "additionalProperties": false
            }),
        },
        ToolSpec {
            tool_name: "eia_electricity_rto",
            method_name: "eia.electricityRto",
            description: "Get hourly and daily electric power operations by balancing authority (Regional Transmission Operator). Includes demand, generation, and interchange data. Source: Form EIA-930",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "route": {"type": "string", "description": "RTO data route", "enum": ["region-data", "region-sub-ba-data", "fuel-type-data", "interchange-data", "daily-region-data", "daily-region-sub-ba-data", "daily-fuel-type-data", "daily-interchange-data"]},
                    "respondent": {"type": "string", "description": "Balancing authority code (e.g., 'CISO' for California ISO, 'PJM', 'MISO', 'ERCOT')"},
                    "fuel_type": {"type": "string", "description": "Fuel type for generation data (fuel-type-data routes only)"},
                    "start": {"type": "string", "description": "Start datetime (YYYY-MM-DDTHH)"},
                    "end": {"type": "string", "description": "End datetime (YYYY-MM-DDTHH)"},
                    "data_columns": {"type": "array", "items": {"type": "string"}, "description": "Data columns (e.g., 'value' for demand/generation values)"},
                    "limit": {"type": "integer", "description": "Maximum number of records (default: 100)"}
                },
                "additionalProperties": false
            }),
        },
        ToolSpec {
            tool_name: "eia_electricity_state_profiles",
            method_name: "eia.electricityStateProfiles",
            description: "Get state-level electricity profiles including generation mix, consumption patterns, and infrastructure data.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "route": {"type": "string", "description": "Profile data route", "enum": ["emissions-by-state-by-fuel", "source-disposition", "capability", "net-metering", "meters"]},
                    "state": {"type": "string", "description": "State code (e.g., 'CA', 'TX')"},
                    "start": {"type": "string", "description": "Start year"},
                    "end": {"type": "string", "description": "End year"},
                    "data_columns": {"type": "array", "items": {"type": "string"}, "description": "Data columns to retrieve (route-dependent defaults apply)"},
                    "limit": {"type": "integer", "description": "Maximum number of records (default: 100)"}
                },
                "additionalProperties": false
            }),
        },
        ToolSpec {
            tool_name: "eia_electricity_generator_capacity",
            method_name: "eia.electricityGeneratorCapacity",
            description: "Get inventory of operable generators in the U.S. including capacity, technology type, and status. Sources: Forms EIA-860, EIA-860M",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "state": {"type": "string", "description": "State code"},
                    "status": {"type": "string", "description": "Generator status code"},
                    "technology": {"type": "string", "description": "Technology type"},
                    "energy_source": {"type": "string", "description": "Primary energy source code"},
                    "start": {"type": "string", "description": "Start period"},
                    "end": {"type": "string", "description": "End period"},
                    "data_columns": {"type": "array", "items": {"type": "string"}, "description": "Data columns (e.g., 'nameplate-capacity-mw', 'net-summer-capacity-mw')"},
                    "limit": {"type": "integer", "description": "Maximum number of records (default: 100)"}
                },
                "additionalProperties": false
            }),
        },
        ToolSpec {
            tool_name: "eia_electricity_facility_fuel",
            method_name: "eia.electricityFacilityFuel",
            description: "Get annual and monthly operational data for individual power plants by energy source and equipment type. Source: Form EIA-923",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "state": {"type": "string", "description": "State code"},
                    "plant_id": {"type": "string", "description": "Specific plant ID"},
                    "fuel_type": {"type": "string", "description": "Fuel type code"},
                    "frequency": {"type": "string", "description": "Data frequency", "enum": ["monthly", "quarterly", "annual"]},
                    "start": {"type": "string", "description": "Start period"},
                    "end": {"type": "string", "description": "End period"},
                    "data_columns": {"type": "array", "items": {"type": "string"}, "description": "Data columns (e.g., 'generation', 'gross-generation', 'consumption-for-eg', 'total-consumption')"},
                    "limit": {"type": "integer", "description": "Maximum number of records (default: 100)"}
                },
                "additionalProperties": false
            }),
        },
        ToolSpec {
            tool_name: "eia_natural_gas_summary",
            method_name: "eia.naturalGasSummary",
            description: "Get natural gas summary data providing an overview of the natural gas survey information.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "series": {"type": "string", "description": "Data series to retrieve"},
                    "frequency": {"type": "string", "description": "Data frequency", "enum": ["weekly", "monthly", "annual"]},
                    "start": {"type": "string", "description": "Start period"},
                    "end": {"type": "string", "description": "End period"},
                    "data_columns": {"type": "array", "items": {"type": "string"}, "description": "Data columns to retrieve"},
                    "limit": {"type": "integer", "description": "Maximum number of records (default: 100)"}
                },
                "additionalProperties": false
            }),
        },
        ToolSpec {
            tool_name: "eia_natural_gas_prices",
            method_name: "eia.naturalGasPrices",
            description: "Get natural gas price data including spot prices, futures, citygate prices, residential, commercial, and industrial prices.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "route": {"type": "string", "description": "Price data route (e.g., 'sum' for summary prices)", "enum": ["sum", "fut", "rescom"]},
                    "area": {"type": "string", "description": "Geographic area or state code"},
                    "product": {"type": "string", "description": "Product type"},
                    "frequency": {"type": "string", "description": "Data frequency", "enum": ["daily", "weekly", "monthly", "annual"]},
                    "start": {"type": "string", "description": "Start period"},
                    "end": {"type": "string", "description": "End period"},
                    "data_columns": {"type": "array", "items": {"type": "string"}, "description": "Data columns to retrieve (e.g., 'value')"},
                    "limit": {"type": "integer", "description": "Maximum number of records (default: 100)"}
                },
                "additionalProperties": false
            }),
        },
        ToolSpec {
            tool_name: "eia_natural_gas_exploration_reserves",
            method_name: "eia.naturalGasExplorationReserves",
            description: "Get natural gas exploration and reserves data including resource discovery and stockpile levels.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "route": {"type": "string", "description": "Data route (e.g., 'wellend', 'drygase', 'crudeoilprov', 'welldrills')", "enum": ["wellend", "drygase", "crudeoilprov", "welldrills"]},
                    "area": {"type": "string", "description": "Geographic area"},
                    "frequency": {"type": "string", "description": "Data frequency", "enum": ["monthly", "annual"]},
                    "start": {"type": "string", "description": "Start period"},
                    "end": {"type": "string", "description": "End period"},
                    "data_columns": {"type": "array", "items": {"type": "string"}, "description": "Data columns to retrieve"},
                    "limit": {"type": "integer", "description": "Maximum number of records (default: 100)"}
                },
                "additionalProperties": false
            }),
        },
        ToolSpec {
            tool_name: "eia_natural_gas_production",
            method_name: "eia.naturalGasProduction",
            description: "Get natural gas production data including output metrics and production volumes.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "route": {"type": "string", "description": "Production data route (e.g., 'sum', 'lngwprp', 'oilwprr', 'whv')", "enum": ["sum", "lngwprp", "oilwprr", "whv"]},
                    "area": {"type": "string", "description": "Geographic area or state code"},
                    "product": {"type": "string", "description": "Product type"},
                    "frequency": {"type": "string", "description": "Data frequency", "enum": ["monthly", "annual"]},
                    "start": {"type": "string", "description": "Start period"},
                    "end": {"type": "string", "description": "End period"},
                    "data_columns": {"type": "array", "items": {"type": "string"}, "description": "Data columns to retrieve"},
                    "limit": {"type": "integer", "description": "Maximum number of records (default: 100)"}
                },
                "additionalProperties": false
            }),
        },
        ToolSpec {
            tool_name: "eia_natural_gas_imports_exports",
            method_name: "eia.naturalGasImportsExports",
            description: "Get natural gas imports, exports, and pipeline movement data including cross-border flows and distribution infrastructure.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "route": {"type": "string", "description": "Movement data route (e.g., 'impc', 'expc', 'poe1', 'state', 'ist')", "enum": ["impc", "expc", "poe1", "state", "ist"]},
                    "area": {"type": "string", "description": "Geographic area"},
                    "country": {"type": "string", "description": "Country for import/export data"},
                    "frequency": {"type": "string", "description": "Data frequency", "enum": ["monthly", "annual"]},
                    "start": {"type": "string", "description": "Start period"},
                    "end": {"type": "string", "description": "End period"},
                    "data_columns": {"type": "array", "items": {"type": "string"}, "description": "Data columns to retrieve"},
                    "limit": {"type": "integer", "description": "Maximum number of records (default: 100)"}
                },
                "additionalProperties": false
            }),
        },
        ToolSpec {
            tool_name: "eia_natural_gas_storage",
            method_name: "eia.naturalGasStorage",
            description: "Get natural gas storage data including inventory levels, injections, and withdrawals from storage facilities.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "route": {"type": "string", "description": "Storage data route (e.g., 'sum', 'base', 'wkly', 'lngwstor', 'stscd')", "enum": ["sum", "base", "wkly", "lngwstor", "stscd"]},
                    "area": {"type": "string", "description": "Geographic area or region"},
                    "frequency": {"type": "string", "description": "Data frequency", "enum": ["weekly", "monthly", "annual"]},
                    "start": {"type": "string", "description": "Start period"},
                    "end": {"type": "string", "description": "End period"},
                    "data_columns": {"type": "array", "items": {"type": "string"}, "description": "Data columns to retrieve"},
                    "limit": {"type": "integer", "description": "Maximum number of records (default: 100)"}
                },
                "additionalProperties": false
            }),
        },
        ToolSpec {
            tool_name: "eia_natural_gas_consumption",
            method_name: "eia.naturalGasConsumption",
            description: "Get natural gas consumption and end use data including demand patterns by sector (residential, commercial, industrial, electric power).",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "route": {"type": "string", "description": "Consumption data route (e.g., 'sum', 'num', 'pns', 'acct')", "enum": ["sum", "num", "pns", "acct"]},
                    "area": {"type": "string", "description": "Geographic area or state code"},
                    "sector": {"type": "string", "description": "Sector (e.g., 'RES' for residential, 'COM' for commercial)"},
                    "frequency": {"type": "string", "description": "Data frequency", "enum": ["monthly", "annual"]},
                    "start": {"type": "string", "description": "Start period"},
                    "end": {"type": "string", "description": "End period"},
                    "data_columns": {"type": "array", "items": {"type": "string"}, "description": "Data columns to retrieve"},
                    "limit": {"type": "integer", "description": "Maximum number of records (default: 100)"}
                },
                "additionalProperties": false
            }),
        },
        ToolSpec {
            tool_name: "eia_explore_routes",
            method_name: "eia.exploreRoutes",
            description: "Explore available EIA API routes and their metadata. Use this to discover available data series, facets, and parameters for any endpoint.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "path": {"type": "string", "description": "API path to explore (e.g., 'electricity', 'natural-gas', 'electricity/retail-sales', 'natural-gas/pri')"}
                },
                "required": ["path"],
                "additionalProperties": false
            }),
        },
    ]
}
