//! A* search over the place graph.
//!
//! Edge costs and the heuristic both use the great-circle distance between
//! place coordinates, so the heuristic never overestimates and the first
//! settled goal entry is optimal.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::geo::haversine_km;
use crate::graph::{Graph, PlaceId};

/// Ordered sequence of place identifiers with its total cost in kilometres.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub steps: Vec<PlaceId>,
    pub total_km: f64,
}

impl Route {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Search node stored in the per-invocation arena. Predecessors are arena
/// indices, so path reconstruction is a backward walk over the store.
#[derive(Debug, Clone, Copy)]
struct SearchNode {
    place: PlaceId,
    parent: Option<usize>,
    g: f64,
}

/// Find the lowest-cost path between `start` and `goal`.
///
/// Fails with [`Error::UnknownPlace`] before the search begins when either
/// endpoint is absent, and with [`Error::RouteNotFound`] when the open set
/// drains without reaching the goal.
pub fn find_route(graph: &Graph, start: PlaceId, goal: PlaceId) -> Result<Route> {
    let goal_coordinate = graph.coordinate(goal)?;
    let start_coordinate = graph.coordinate(start)?;

    if start == goal {
        return Ok(Route {
            steps: vec![start],
            total_km: 0.0,
        });
    }

    let mut arena: Vec<SearchNode> = Vec::new();
    let mut open = BinaryHeap::new();
    let mut best_g: HashMap<PlaceId, f64> = HashMap::new();
    let mut closed: HashSet<PlaceId> = HashSet::new();
    let mut sequence: u64 = 0;

    arena.push(SearchNode {
        place: start,
        parent: None,
        g: 0.0,
    });
    best_g.insert(start, 0.0);
    open.push(OpenEntry::new(
        0,
        haversine_km(start_coordinate, goal_coordinate),
        sequence,
    ));

    while let Some(entry) = open.pop() {
        let node = arena[entry.index];

        if closed.contains(&node.place) {
            continue;
        }
        // A better entry for this place superseded the popped one.
        if best_g
            .get(&node.place)
            .is_some_and(|&known| known < node.g)
        {
            continue;
        }

        if node.place == goal {
            let route = reconstruct(&arena, entry.index);
            debug!(
                start,
                goal,
                hops = route.hop_count(),
                total_km = route.total_km,
                expanded = closed.len(),
                "route found"
            );
            return Ok(route);
        }

        closed.insert(node.place);
        let current_coordinate = graph.coordinate(node.place)?;

        for &neighbour in graph.neighbours(node.place)? {
            if closed.contains(&neighbour) {
                continue;
            }

            let neighbour_coordinate = graph.coordinate(neighbour)?;
            let tentative_g = node.g + haversine_km(current_coordinate, neighbour_coordinate);
            if tentative_g < *best_g.get(&neighbour).unwrap_or(&f64::INFINITY) {
                best_g.insert(neighbour, tentative_g);
                arena.push(SearchNode {
                    place: neighbour,
                    parent: Some(entry.index),
                    g: tentative_g,
                });
                sequence += 1;
                let f = tentative_g + haversine_km(neighbour_coordinate, goal_coordinate);
                open.push(OpenEntry::new(arena.len() - 1, f, sequence));
            }
        }
    }

    Err(Error::RouteNotFound { start, goal })
}

fn reconstruct(arena: &[SearchNode], goal_index: usize) -> Route {
    let mut steps = Vec::new();
    let mut current = Some(goal_index);
    while let Some(index) = current {
        steps.push(arena[index].place);
        current = arena[index].parent;
    }
    steps.reverse();
    Route {
        steps,
        total_km: arena[goal_index].g,
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct OpenEntry {
    index: usize,
    estimate: FloatOrd,
    sequence: u64,
}

impl OpenEntry {
    fn new(index: usize, estimate: f64, sequence: u64) -> Self {
        Self {
            index,
            estimate: FloatOrd(estimate),
            sequence,
        }
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by f-cost;
        // earlier insertions win among equal estimates.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
