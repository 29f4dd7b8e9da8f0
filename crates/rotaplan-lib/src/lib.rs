//! rotaplan library entry points.
//!
//! This crate loads geocoded place datasets, builds the neighbourhood graph,
//! and runs the two planning searches: A* shortest path over the adjacency
//! relation and exhaustive ordering of mandatory intermediate stops.
//! Higher-level consumers (the CLI, services) should only depend on the
//! functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod geo;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;
pub mod sequence;

pub use dataset::{fetch_records, load_records, load_records_from_path, read_records, PlaceRecord};
pub use error::{Error, Result};
pub use geo::{haversine_km, Coordinate, EARTH_RADIUS_KM};
pub use graph::{Graph, Place, PlaceId};
pub use output::{RouteEndpoint, RouteStep, RouteSummary};
pub use path::{find_route, Route};
pub use routing::{plan_route, plan_tour, PlanKind, RoutePlan, RouteRequest, TourRequest};
pub use sequence::{best_waypoint_order, MAX_WAYPOINTS};
