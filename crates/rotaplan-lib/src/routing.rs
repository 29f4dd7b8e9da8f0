//! High-level planning entry points.
//!
//! Consumers name places by display name or decimal id; this layer resolves
//! them against the graph and dispatches to the appropriate search. Path
//! planning and waypoint sequencing stay separate operations on purpose:
//! the former walks graph edges, the latter ranks visit orders by raw
//! point-to-point distance, and the two cost models are not interchangeable.

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::graph::{Graph, PlaceId};
use crate::path::find_route;
use crate::sequence::best_waypoint_order;

/// Kind of search that produced a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    /// Graph-constrained shortest path (A*).
    Path,
    /// Exhaustive ordering of mandatory stops.
    Tour,
}

impl PlanKind {
    /// Human-readable label shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            PlanKind::Path => "Path",
            PlanKind::Tour => "Tour",
        }
    }
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            PlanKind::Path => "path",
            PlanKind::Tour => "tour",
        };
        f.write_str(value)
    }
}

/// Request for a graph-constrained shortest path.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
        }
    }
}

/// Request for the best ordering of mandatory intermediate stops.
#[derive(Debug, Clone)]
pub struct TourRequest {
    pub start: String,
    pub goal: String,
    pub waypoints: Vec<String>,
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub kind: PlanKind,
    pub start: PlaceId,
    pub goal: PlaceId,
    pub steps: Vec<PlaceId>,
    pub total_km: f64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute the shortest graph path between the requested places.
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    let start = graph.resolve(&request.start)?;
    let goal = graph.resolve(&request.goal)?;

    let route = find_route(graph, start, goal)?;
    Ok(RoutePlan {
        kind: PlanKind::Path,
        start,
        goal,
        steps: route.steps,
        total_km: route.total_km,
    })
}

/// Compute the cheapest ordering of the requested waypoints.
pub fn plan_tour(graph: &Graph, request: &TourRequest) -> Result<RoutePlan> {
    let start = graph.resolve(&request.start)?;
    let goal = graph.resolve(&request.goal)?;
    let waypoints: Vec<PlaceId> = request
        .waypoints
        .iter()
        .map(|query| graph.resolve(query))
        .collect::<Result<_>>()?;

    let route = best_waypoint_order(graph, start, goal, &waypoints)?;
    Ok(RoutePlan {
        kind: PlanKind::Tour,
        start,
        goal,
        steps: route.steps,
        total_km: route.total_km,
    })
}
