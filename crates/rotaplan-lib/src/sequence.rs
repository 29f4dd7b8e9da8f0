//! Exhaustive ordering of mandatory intermediate stops.
//!
//! Cost is the straight-line great-circle distance between consecutive
//! stops, not a graph-constrained path. This intentionally differs from the
//! A* cost model in [`crate::path`]: the sequencer ranks visit orders by raw
//! point-to-point distance and never consults the adjacency lists.

use itertools::Itertools;
use tracing::debug;

use crate::error::{Error, Result};
use crate::geo::{haversine_km, Coordinate};
use crate::graph::{Graph, PlaceId};
use crate::path::Route;

/// Largest waypoint set the sequencer will enumerate. Factorial growth makes
/// anything beyond this intractable.
pub const MAX_WAYPOINTS: usize = 8;

/// Find the cheapest ordering of `waypoints` between `start` and `goal`.
///
/// Every permutation is evaluated; ties keep the first permutation in the
/// canonical enumeration order, so results are deterministic. An empty
/// waypoint set yields the direct start-goal segment.
pub fn best_waypoint_order(
    graph: &Graph,
    start: PlaceId,
    goal: PlaceId,
    waypoints: &[PlaceId],
) -> Result<Route> {
    if waypoints.len() > MAX_WAYPOINTS {
        return Err(Error::WaypointSetTooLarge {
            count: waypoints.len(),
            limit: MAX_WAYPOINTS,
        });
    }

    // Resolve every coordinate up front so lookup failures surface before
    // any enumeration work happens.
    let start_coordinate = graph.coordinate(start)?;
    let goal_coordinate = graph.coordinate(goal)?;
    let waypoint_coordinates: Vec<Coordinate> = waypoints
        .iter()
        .map(|&id| graph.coordinate(id))
        .collect::<Result<_>>()?;

    if waypoints.is_empty() {
        return Ok(Route {
            steps: vec![start, goal],
            total_km: haversine_km(start_coordinate, goal_coordinate),
        });
    }

    // The identity order is the first permutation in the canonical
    // enumeration, so strict improvement keeps the earliest tie.
    let mut order: Vec<usize> = (0..waypoints.len()).collect();
    let mut total_km = tour_cost(
        start_coordinate,
        goal_coordinate,
        &waypoint_coordinates,
        &order,
    );
    for permutation in (0..waypoints.len()).permutations(waypoints.len()) {
        let cost = tour_cost(
            start_coordinate,
            goal_coordinate,
            &waypoint_coordinates,
            &permutation,
        );
        if cost < total_km {
            order = permutation;
            total_km = cost;
        }
    }

    let mut steps = Vec::with_capacity(waypoints.len() + 2);
    steps.push(start);
    steps.extend(order.into_iter().map(|position| waypoints[position]));
    steps.push(goal);

    debug!(
        start,
        goal,
        waypoints = waypoints.len(),
        total_km,
        "waypoint order selected"
    );

    Ok(Route { steps, total_km })
}

fn tour_cost(
    start: Coordinate,
    goal: Coordinate,
    waypoints: &[Coordinate],
    order: &[usize],
) -> f64 {
    let mut total = 0.0;
    let mut previous = start;
    for &position in order {
        total += haversine_km(previous, waypoints[position]);
        previous = waypoints[position];
    }
    total + haversine_km(previous, goal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tour_cost_sums_consecutive_legs() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 1.0);
        let c = Coordinate::new(0.0, 2.0);

        let direct = tour_cost(a, c, &[b], &[0]);
        assert!((direct - (haversine_km(a, b) + haversine_km(b, c))).abs() < 1e-9);
    }

    #[test]
    fn tour_cost_with_empty_order_is_direct_distance() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(1.0, 1.0);
        assert_eq!(tour_cost(a, b, &[], &[]), haversine_km(a, b));
    }
}
