//! Structured route summaries for rendering and serialisation.

use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::geo::haversine_km;
use crate::graph::{Graph, PlaceId};
use crate::routing::{PlanKind, RoutePlan};

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteEndpoint {
    pub id: PlaceId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteEndpoint {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub id: PlaceId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Distance from the previous step in kilometres; `None` on the first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg_km: Option<f64>,
}

impl RouteStep {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Structured representation of a planned route that consumers can render
/// or serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub kind: PlanKind,
    pub hops: usize,
    pub total_km: f64,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved place names and
    /// per-leg distances.
    pub fn from_plan(graph: &Graph, plan: &RoutePlan) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyRoutePlan);
        }

        let mut steps = Vec::with_capacity(plan.steps.len());
        let mut previous: Option<PlaceId> = None;
        for (index, &id) in plan.steps.iter().enumerate() {
            let leg_km = match previous {
                Some(from) => Some(haversine_km(
                    graph.coordinate(from)?,
                    graph.coordinate(id)?,
                )),
                None => None,
            };
            steps.push(RouteStep {
                index,
                id,
                name: graph.name(id).map(str::to_string),
                leg_km,
            });
            previous = Some(id);
        }

        Ok(Self {
            kind: plan.kind,
            hops: plan.hop_count(),
            total_km: plan.total_km,
            start: endpoint(graph, plan.start),
            goal: endpoint(graph, plan.goal),
            steps,
        })
    }

    /// Render the summary as pretty-printed JSON.
    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Render the summary as plain text with numbered steps.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}: {} -> {} ({} hops, {:.2} km)",
            self.kind.label(),
            self.start.display_name(),
            self.goal.display_name(),
            self.hops,
            self.total_km
        );
        for step in &self.steps {
            match step.leg_km {
                Some(leg) => {
                    let _ = writeln!(
                        out,
                        "{:>3}. {} ({}) +{:.2} km",
                        step.index,
                        step.display_name(),
                        step.id,
                        leg
                    );
                }
                None => {
                    let _ = writeln!(out, "{:>3}. {} ({})", step.index, step.display_name(), step.id);
                }
            }
        }
        out
    }
}

fn endpoint(graph: &Graph, id: PlaceId) -> RouteEndpoint {
    RouteEndpoint {
        id,
        name: graph.name(id).map(str::to_string),
    }
}
