use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use eia_api::{Frequency, RouteMetadata, RoutePath};

use crate::error::{EiaError, Result};

/// The values a facet accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FacetValues {
    /// Any value is forwarded to the remote (e.g. plant codes, duoareas).
    Open,
    /// Only the enumerated values are accepted; anything else is rejected
    /// before a network call is made.
    Closed(Vec<String>),
}

impl FacetValues {
    pub fn allows(&self, value: &str) -> bool {
        match self {
            FacetValues::Open => true,
            FacetValues::Closed(values) => values.iter().any(|v| v == value),
        }
    }
}

/// A filterable dimension on a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetDescriptor {
    pub id: String,
    pub values: FacetValues,
    pub required: bool,
}

/// Everything the engine knows about one route: its facets, supported
/// frequencies, and child routes. Owned by the catalog; callers get
/// clones and never mutate shared state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    pub path: RoutePath,
    pub label: String,
    pub facets: Vec<FacetDescriptor>,
    pub frequencies: Vec<Frequency>,
    pub default_frequency: Option<Frequency>,
    /// Child routes in catalog order. Empty for terminal (data) routes.
    pub children: Vec<RoutePath>,
}

impl RouteDescriptor {
    pub fn facet(&self, id: &str) -> Option<&FacetDescriptor> {
        self.facets.iter().find(|facet| facet.id == id)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn supports_frequency(&self, frequency: Frequency) -> bool {
        self.frequencies.contains(&frequency)
    }
}

/// On-disk shape of a cached catalog.
#[derive(Serialize, Deserialize)]
struct CatalogFile {
    routes: Vec<RouteDescriptor>,
}

/// The route tree: every known route path mapped to its descriptor.
///
/// Populated from a bundled table mirroring the known EIA v2 hierarchy
/// and refreshed per subtree from the remote metadata endpoint on demand.
/// Reads are concurrent; a refresh replaces a descriptor in one write,
/// so readers never observe a half-updated entry. The catalog may be
/// persisted between runs as a pure optimization; a cold start without a
/// cache works from the bundled table alone.
#[derive(Debug)]
pub struct RouteCatalog {
    routes: RwLock<HashMap<RoutePath, RouteDescriptor>>,
}

impl RouteCatalog {
    /// Build the catalog from the bundled route table.
    pub fn bundled() -> Self {
        let mut routes = HashMap::new();
        for descriptor in bundled_routes() {
            routes.insert(descriptor.path.clone(), descriptor);
        }
        RouteCatalog {
            routes: RwLock::new(routes),
        }
    }

    /// Load a cached catalog, falling back to the bundled table when the
    /// cache is absent or unreadable. Correctness never depends on the
    /// cache.
    pub fn load_or_bundled(cache: Option<&Path>) -> Self {
        cache
            .and_then(|path| Self::load(path).ok())
            .unwrap_or_else(Self::bundled)
    }

    /// Load a catalog previously written with [`RouteCatalog::save`].
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let file: CatalogFile = serde_json::from_str(&raw)
            .map_err(|err| EiaError::config_error(format!("invalid catalog cache: {}", err)))?;
        let mut routes = HashMap::new();
        for descriptor in file.routes {
            routes.insert(descriptor.path.clone(), descriptor);
        }
        Ok(RouteCatalog {
            routes: RwLock::new(routes),
        })
    }

    /// Persist the catalog as JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut routes: Vec<RouteDescriptor> = self
            .routes
            .read()
            .expect("route catalog lock poisoned")
            .values()
            .cloned()
            .collect();
        routes.sort_by(|a, b| a.path.cmp(&b.path));
        let file = CatalogFile { routes };
        let raw = serde_json::to_string_pretty(&file)
            .map_err(|err| EiaError::config_error(format!("catalog serialization: {}", err)))?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    /// Resolve a route path to its descriptor.
    pub fn resolve(&self, path: &RoutePath) -> Result<RouteDescriptor> {
        self.routes
            .read()
            .expect("route catalog lock poisoned")
            .get(path)
            .cloned()
            .ok_or_else(|| EiaError::route_not_found(path))
    }

    /// Child routes of a path, in catalog order.
    pub fn children(&self, path: &RoutePath) -> Result<Vec<RoutePath>> {
        Ok(self.resolve(path)?.children)
    }

    pub fn contains(&self, path: &RoutePath) -> bool {
        self.routes
            .read()
            .expect("route catalog lock poisoned")
            .contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.routes
            .read()
            .expect("route catalog lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Merge freshly fetched metadata for one path into the catalog.
    ///
    /// Only the requested subtree changes: the path's descriptor is
    /// replaced in a single write, cached descendants under children the
    /// remote no longer lists are dropped, and sibling subtrees are left
    /// untouched. Applying the same metadata twice is a no-op.
    ///
    /// Metadata listings carry no facet value enumerations, so closed
    /// value sets and required flags already known for surviving facets
    /// are retained rather than widened to open.
    pub fn apply_metadata(&self, path: &RoutePath, metadata: &RouteMetadata) {
        let mut routes = self.routes.write().expect("route catalog lock poisoned");

        let existing = routes.get(path);

        let facets = metadata
            .facets
            .iter()
            .map(|listing| {
                existing
                    .and_then(|d| d.facet(&listing.id))
                    .cloned()
                    .unwrap_or_else(|| FacetDescriptor {
                        id: listing.id.clone(),
                        values: FacetValues::Open,
                        required: false,
                    })
            })
            .collect();

        let frequencies: Vec<Frequency> = metadata
            .frequency
            .iter()
            .filter_map(|listing| listing.id.parse().ok())
            .collect();

        let default_frequency = metadata
            .default_frequency
            .as_deref()
            .and_then(|id| id.parse().ok())
            .or_else(|| frequencies.first().copied());

        let label = metadata
            .name
            .clone()
            .or_else(|| metadata.description.clone())
            .unwrap_or_else(|| path.to_string());

        let children: Vec<RoutePath> = metadata
            .routes
            .iter()
            .map(|listing| path.join(&listing.id))
            .collect();

        let descriptor = RouteDescriptor {
            path: path.clone(),
            label,
            facets,
            frequencies,
            default_frequency,
            children,
        };

        // Drop cached entries under children that no longer exist.
        let child_ids: HashSet<&str> = metadata
            .routes
            .iter()
            .map(|listing| listing.id.as_str())
            .collect();
        let depth = path.segments().len();
        routes.retain(|candidate, _| {
            if candidate != path && candidate.starts_with(path) {
                child_ids.contains(candidate.segments()[depth].as_str())
            } else {
                true
            }
        });

        routes.insert(path.clone(), descriptor);
    }
}

fn open_facet(id: &str) -> FacetDescriptor {
    FacetDescriptor {
        id: id.to_string(),
        values: FacetValues::Open,
        required: false,
    }
}

fn closed_facet(id: &str, values: &[&str]) -> FacetDescriptor {
    FacetDescriptor {
        id: id.to_string(),
        values: FacetValues::Closed(values.iter().map(|v| v.to_string()).collect()),
        required: false,
    }
}

fn route(
    path: &str,
    label: &str,
    frequencies: &[Frequency],
    default_frequency: Option<Frequency>,
    facets: Vec<FacetDescriptor>,
    children: &[&str],
) -> RouteDescriptor {
    let path = RoutePath::from(path);
    let children = children.iter().map(|id| path.join(id)).collect();
    RouteDescriptor {
        path,
        label: label.to_string(),
        facets,
        frequencies: frequencies.to_vec(),
        default_frequency,
        children,
    }
}

/// The bundled route table, mirroring the known EIA v2 hierarchy for the
/// electricity and natural gas domains. Facet enumerations follow the
/// survey documentation; anything not enumerated here is open-ended and
/// validated by the remote.
fn bundled_routes() -> Vec<RouteDescriptor> {
    use Frequency::*;

    let mut routes = vec![
        route(
            "",
            "EIA API v2",
            &[],
            None,
            vec![],
            &["electricity", "natural-gas"],
        ),
        // === Electricity ===
        route(
            "electricity",
            "Electricity",
            &[],
            None,
            vec![],
            &[
                "retail-sales",
                "electric-power-operational-data",
                "rto",
                "state-electricity-profiles",
                "operating-generator-capacity",
                "facility-fuel",
            ],
        ),
        route(
            "electricity/retail-sales",
            "Electricity Sales to Ultimate Customers",
            &[Monthly, Quarterly, Annual],
            Some(Monthly),
            vec![
                open_facet("stateid"),
                closed_facet("sectorid", &["RES", "COM", "IND", "TRA", "OTH", "ALL"]),
            ],
            &[],
        ),
        route(
            "electricity/electric-power-operational-data",
            "Electric Power Operations (Annual and Monthly)",
            &[Monthly, Quarterly, Annual],
            Some(Monthly),
            vec![
                open_facet("location"),
                open_facet("sectorid"),
                open_facet("fueltypeid"),
            ],
            &[],
        ),
        route(
            "electricity/rto",
            "Electric Power Operations (Daily and Hourly)",
            &[],
            None,
            vec![],
            &[
                "region-data",
                "region-sub-ba-data",
                "fuel-type-data",
                "interchange-data",
                "daily-region-data",
                "daily-region-sub-ba-data",
                "daily-fuel-type-data",
                "daily-interchange-data",
            ],
        ),
        route(
            "electricity/state-electricity-profiles",
            "State Specific Data",
            &[],
            None,
            vec![],
            &[
                "emissions-by-state-by-fuel",
                "source-disposition",
                "capability",
                "net-metering",
                "meters",
            ],
        ),
        route(
            "electricity/operating-generator-capacity",
            "Inventory of Operable Generators",
            &[Monthly],
            Some(Monthly),
            vec![
                open_facet("stateid"),
                open_facet("status"),
                open_facet("technology"),
                open_facet("energy_source_code"),
            ],
            &[],
        ),
        route(
            "electricity/facility-fuel",
            "Electric Power Operations for Individual Power Plants",
            &[Monthly, Quarterly, Annual],
            Some(Monthly),
            vec![
                open_facet("state"),
                open_facet("plantCode"),
                open_facet("fuel2002"),
            ],
            &[],
        ),
        // === Natural Gas ===
        route(
            "natural-gas",
            "Natural Gas",
            &[],
            None,
            vec![],
            &["sum", "pri", "enr", "prod", "move", "stor", "cons"],
        ),
        route(
            "natural-gas/sum",
            "Natural Gas Summary",
            &[],
            None,
            vec![],
            &["snd"],
        ),
        route(
            "natural-gas/sum/snd",
            "Natural Gas Supply and Disposition",
            &[Weekly, Monthly, Annual],
            Some(Monthly),
            vec![
                open_facet("series"),
                open_facet("duoarea"),
                open_facet("process"),
            ],
            &[],
        ),
        route(
            "natural-gas/pri",
            "Natural Gas Prices",
            &[],
            None,
            vec![],
            &["sum", "fut", "rescom"],
        ),
        route(
            "natural-gas/enr",
            "Natural Gas Exploration and Reserves",
            &[],
            None,
            vec![],
            &["wellend", "drygase", "crudeoilprov", "welldrills"],
        ),
        route(
            "natural-gas/prod",
            "Natural Gas Production",
            &[],
            None,
            vec![],
            &["sum", "lngwprp", "oilwprr", "whv"],
        ),
        route(
            "natural-gas/move",
            "Natural Gas Imports, Exports and Pipelines",
            &[],
            None,
            vec![],
            &["impc", "expc", "poe1", "state", "ist"],
        ),
        route(
            "natural-gas/stor",
            "Natural Gas Storage",
            &[],
            None,
            vec![],
            &["sum", "base", "wkly", "lngwstor", "stscd"],
        ),
        route(
            "natural-gas/cons",
            "Natural Gas Consumption and End Use",
            &[],
            None,
            vec![],
            &["sum", "num", "pns", "acct"],
        ),
    ];

    // RTO sub-routes share a respondent facet; the fuel-type routes add a
    // fueltype facet. Hourly routes have daily- counterparts.
    for (id, label, frequencies, default, extra) in [
        (
            "region-data",
            "Hourly Demand, Generation and Interchange by Balancing Authority",
            &[Hourly, LocalHourly][..],
            Hourly,
            Some(open_facet("type")),
        ),
        (
            "region-sub-ba-data",
            "Hourly Demand by Subregion",
            &[Hourly, LocalHourly][..],
            Hourly,
            Some(open_facet("subba")),
        ),
        (
            "fuel-type-data",
            "Hourly Generation by Energy Source",
            &[Hourly, LocalHourly][..],
            Hourly,
            Some(open_facet("fueltype")),
        ),
        (
            "interchange-data",
            "Hourly Interchange Between Neighboring Balancing Authorities",
            &[Hourly, LocalHourly][..],
            Hourly,
            Some(open_facet("toba")),
        ),
        (
            "daily-region-data",
            "Daily Demand, Generation and Interchange by Balancing Authority",
            &[Daily][..],
            Daily,
            Some(open_facet("type")),
        ),
        (
            "daily-region-sub-ba-data",
            "Daily Demand by Subregion",
            &[Daily][..],
            Daily,
            Some(open_facet("subba")),
        ),
        (
            "daily-fuel-type-data",
            "Daily Generation by Energy Source",
            &[Daily][..],
            Daily,
            Some(open_facet("fueltype")),
        ),
        (
            "daily-interchange-data",
            "Daily Interchange Between Neighboring Balancing Authorities",
            &[Daily][..],
            Daily,
            Some(open_facet("toba")),
        ),
    ] {
        let mut facets = vec![open_facet("respondent")];
        facets.extend(extra);
        routes.push(route(
            &format!("electricity/rto/{}", id),
            label,
            frequencies,
            Some(default),
            facets,
            &[],
        ));
    }

    // State electricity profile sub-routes are annual. The emissions route
    // keys its state facet as stateid, the rest use state.
    for (id, label, state_facet) in [
        (
            "emissions-by-state-by-fuel",
            "Emissions by State and Fuel",
            "stateid",
        ),
        (
            "source-disposition",
            "Source and Disposition of Electricity",
            "state",
        ),
        ("capability", "Net Capability of Generators", "state"),
        ("net-metering", "Net Metering", "state"),
        ("meters", "Advanced Meters", "state"),
    ] {
        routes.push(route(
            &format!("electricity/state-electricity-profiles/{}", id),
            label,
            &[Annual],
            Some(Annual),
            vec![open_facet(state_facet)],
            &[],
        ));
    }

    // Natural gas data leaves follow a common shape: duoarea and process
    // facets over monthly/annual series, with route-specific exceptions.
    for (parent, id, label) in [
        ("natural-gas/pri", "sum", "Natural Gas Prices Summary"),
        ("natural-gas/pri", "fut", "Natural Gas Spot and Futures Prices"),
        (
            "natural-gas/pri",
            "rescom",
            "Natural Gas Residential and Commercial Prices",
        ),
        ("natural-gas/enr", "wellend", "Natural Gas Reserves"),
        ("natural-gas/enr", "drygase", "Dry Natural Gas Estimates"),
        (
            "natural-gas/enr",
            "crudeoilprov",
            "Crude Oil Proved Reserves",
        ),
        ("natural-gas/enr", "welldrills", "Wells Drilled"),
        ("natural-gas/prod", "sum", "Natural Gas Production Summary"),
        ("natural-gas/prod", "lngwprp", "LNG Production"),
        ("natural-gas/prod", "oilwprr", "Oil Well Production"),
        ("natural-gas/prod", "whv", "Wellhead Value"),
        ("natural-gas/move", "impc", "Natural Gas Imports by Country"),
        ("natural-gas/move", "expc", "Natural Gas Exports by Country"),
        (
            "natural-gas/move",
            "poe1",
            "Natural Gas Imports and Exports by Point of Entry/Exit",
        ),
        ("natural-gas/move", "state", "Interstate Movements"),
        ("natural-gas/move", "ist", "International and Interstate Trade"),
        ("natural-gas/stor", "sum", "Underground Storage Summary"),
        ("natural-gas/stor", "base", "Base Gas in Storage"),
        ("natural-gas/stor", "lngwstor", "LNG Storage"),
        ("natural-gas/stor", "stscd", "Storage by State"),
        ("natural-gas/cons", "sum", "Natural Gas Consumption Summary"),
        ("natural-gas/cons", "num", "Number of Consumers"),
        ("natural-gas/cons", "pns", "Deliveries to Consumers"),
        ("natural-gas/cons", "acct", "Consumption by End Use Account"),
    ] {
        let mut facets = vec![open_facet("duoarea"), open_facet("process")];
        if parent.ends_with("pri") || parent.ends_with("prod") {
            facets.push(open_facet("product"));
        }
        if parent.ends_with("move") {
            facets.push(open_facet("countrynd"));
        }
        let frequencies: &[Frequency] = if parent.ends_with("pri") && id == "fut" {
            &[Daily, Weekly, Monthly, Annual]
        } else {
            &[Monthly, Annual]
        };
        routes.push(route(
            &format!("{}/{}", parent, id),
            label,
            frequencies,
            Some(Monthly),
            facets,
            &[],
        ));
    }

    // The weekly storage report is the one natural gas leaf that is
    // weekly-only.
    routes.push(route(
        "natural-gas/stor/wkly",
        "Weekly Underground Natural Gas Storage",
        &[Weekly],
        Some(Weekly),
        vec![open_facet("duoarea"), open_facet("process")],
        &[],
    ));

    routes
}

#[cfg(test)]
mod tests {
    use super::*;
    use eia_api::{FacetListing, RouteListing};

    fn metadata(
        name: &str,
        routes: &[&str],
        facets: &[&str],
        frequency: &[&str],
    ) -> RouteMetadata {
        RouteMetadata {
            id: None,
            name: Some(name.to_string()),
            description: None,
            routes: routes
                .iter()
                .map(|id| RouteListing {
                    id: id.to_string(),
                    name: None,
                    description: None,
                })
                .collect(),
            frequency: frequency
                .iter()
                .map(|id| eia_api::FrequencyListing {
                    id: id.to_string(),
                    description: None,
                    format: None,
                })
                .collect(),
            facets: facets
                .iter()
                .map(|id| FacetListing {
                    id: id.to_string(),
                    description: None,
                })
                .collect(),
            default_frequency: None,
        }
    }

    #[test]
    fn bundled_catalog_resolves_known_routes() {
        let catalog = RouteCatalog::bundled();
        let descriptor = catalog
            .resolve(&RoutePath::from("electricity/retail-sales"))
            .unwrap();
        assert!(descriptor.is_leaf());
        assert!(descriptor.supports_frequency(Frequency::Monthly));
        assert_eq!(descriptor.default_frequency, Some(Frequency::Monthly));

        let sector = descriptor.facet("sectorid").unwrap();
        assert!(sector.values.allows("RES"));
        assert!(!sector.values.allows("XXX"));
        // State codes are open-ended.
        assert!(descriptor.facet("stateid").unwrap().values.allows("CA"));
    }

    #[test]
    fn bundled_catalog_lists_children_in_order() {
        let catalog = RouteCatalog::bundled();
        let children = catalog.children(&RoutePath::from("electricity")).unwrap();
        assert_eq!(children[0], RoutePath::from("electricity/retail-sales"));
        assert!(children.contains(&RoutePath::from("electricity/rto")));
        assert!(children.contains(&RoutePath::from(
            "electricity/state-electricity-profiles"
        )));

        // Every listed child resolves.
        for child in children {
            assert!(catalog.contains(&child), "missing child {}", child);
        }
    }

    #[test]
    fn every_bundled_child_resolves() {
        let catalog = RouteCatalog::bundled();
        let mut pending = vec![RoutePath::root()];
        while let Some(path) = pending.pop() {
            let descriptor = catalog.resolve(&path).unwrap();
            for child in descriptor.children {
                assert!(catalog.contains(&child), "missing child {}", child);
                pending.push(child);
            }
        }
    }

    #[test]
    fn unknown_route_fails_with_route_not_found() {
        let catalog = RouteCatalog::bundled();
        let err = catalog
            .resolve(&RoutePath::from("coal/retail-sales"))
            .unwrap_err();
        match err {
            EiaError::RouteNotFound { path } => assert_eq!(path, "coal/retail-sales"),
            other => panic!("expected RouteNotFound, got {:?}", other),
        }
    }

    #[test]
    fn refresh_replaces_only_the_requested_subtree() {
        let catalog = RouteCatalog::bundled();
        let gas_before = catalog.resolve(&RoutePath::from("natural-gas")).unwrap();
        let stor_before = catalog
            .resolve(&RoutePath::from("natural-gas/stor/wkly"))
            .unwrap();

        // The remote now lists only two electricity children.
        let path = RoutePath::from("electricity");
        catalog.apply_metadata(
            &path,
            &metadata("Electricity", &["retail-sales", "rto"], &[], &[]),
        );

        let refreshed = catalog.resolve(&path).unwrap();
        assert_eq!(refreshed.label, "Electricity");
        assert_eq!(refreshed.children.len(), 2);

        // Cached entries under dropped children are gone, retained ones stay.
        assert!(catalog.contains(&RoutePath::from("electricity/retail-sales")));
        assert!(catalog.contains(&RoutePath::from("electricity/rto/region-data")));
        assert!(!catalog.contains(&RoutePath::from("electricity/facility-fuel")));
        assert!(!catalog.contains(&RoutePath::from(
            "electricity/state-electricity-profiles/meters"
        )));

        // Sibling subtrees are untouched.
        assert_eq!(
            catalog.resolve(&RoutePath::from("natural-gas")).unwrap(),
            gas_before
        );
        assert_eq!(
            catalog
                .resolve(&RoutePath::from("natural-gas/stor/wkly"))
                .unwrap(),
            stor_before
        );
    }

    #[test]
    fn refresh_is_idempotent() {
        let catalog = RouteCatalog::bundled();
        let path = RoutePath::from("electricity");
        let meta = metadata("Electricity", &["retail-sales", "rto"], &[], &[]);

        catalog.apply_metadata(&path, &meta);
        let first = catalog.resolve(&path).unwrap();
        let len_first = catalog.len();

        catalog.apply_metadata(&path, &meta);
        assert_eq!(catalog.resolve(&path).unwrap(), first);
        assert_eq!(catalog.len(), len_first);
    }

    #[test]
    fn refresh_preserves_known_closed_facets() {
        let catalog = RouteCatalog::bundled();
        let path = RoutePath::from("electricity/retail-sales");
        catalog.apply_metadata(
            &path,
            &metadata(
                "Electricity Sales to Ultimate Customers",
                &[],
                &["stateid", "sectorid"],
                &["monthly", "quarterly", "annual"],
            ),
        );

        let descriptor = catalog.resolve(&path).unwrap();
        // The listing carries no enumerations; the bundled closed set
        // survives the refresh.
        match &descriptor.facet("sectorid").unwrap().values {
            FacetValues::Closed(values) => assert!(values.contains(&"RES".to_string())),
            FacetValues::Open => panic!("sectorid should remain closed"),
        }
        assert_eq!(descriptor.frequencies.len(), 3);
        assert_eq!(descriptor.default_frequency, Some(Frequency::Monthly));
    }

    #[test]
    fn catalog_cache_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("catalog.json");

        let catalog = RouteCatalog::bundled();
        catalog.save(&cache).unwrap();

        let loaded = RouteCatalog::load(&cache).unwrap();
        assert_eq!(loaded.len(), catalog.len());
        assert_eq!(
            loaded
                .resolve(&RoutePath::from("electricity/retail-sales"))
                .unwrap(),
            catalog
                .resolve(&RoutePath::from("electricity/retail-sales"))
                .unwrap()
        );
    }

    #[test]
    fn missing_cache_falls_back_to_bundled() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("does-not-exist.json");
        let catalog = RouteCatalog::load_or_bundled(Some(&cache));
        assert!(catalog.contains(&RoutePath::from("natural-gas/stor/wkly")));
    }
}
