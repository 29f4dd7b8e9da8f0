//! In-memory graph of places and their neighbour relationships.

use std::collections::HashMap;

use tracing::debug;

use crate::dataset::PlaceRecord;
use crate::error::{Error, Result};
use crate::geo::Coordinate;

/// Numeric identifier for a place.
pub type PlaceId = u32;

/// Jaro-Winkler similarity below which a candidate is not suggested.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Geocoded place with its outgoing adjacency list.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub region: String,
    pub coordinate: Coordinate,
    pub neighbours: Vec<PlaceId>,
}

/// Immutable mapping from place identifier to [`Place`].
///
/// Built once per planning session; every declared neighbour is validated at
/// construction so searches never encounter a dangling reference.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    places: HashMap<PlaceId, Place>,
    name_to_id: HashMap<String, PlaceId>,
}

impl Graph {
    /// Build a graph from dataset records.
    ///
    /// Ids come from the explicit `Index` column when present, otherwise
    /// from the zero-based row position. Fails with
    /// [`Error::DanglingNeighbour`] if any neighbour id is not itself a
    /// place in the same collection.
    pub fn from_records(records: &[PlaceRecord]) -> Result<Self> {
        let mut places = HashMap::with_capacity(records.len());
        let mut name_to_id = HashMap::with_capacity(records.len());

        for (row, record) in records.iter().enumerate() {
            let id = record.index.unwrap_or(row as PlaceId);
            let place = Place {
                id,
                name: record.city.clone(),
                region: record.state.clone(),
                coordinate: Coordinate::new(record.latitude, record.longitude),
                neighbours: parse_neighbour_list(row, &record.neighbours)?,
            };
            name_to_id.insert(place.name.to_lowercase(), id);
            places.insert(id, place);
        }

        for place in places.values() {
            for &neighbour in &place.neighbours {
                if !places.contains_key(&neighbour) {
                    return Err(Error::DanglingNeighbour {
                        place: place.id,
                        neighbour,
                    });
                }
            }
        }

        debug!(places = places.len(), "built place graph");
        Ok(Self { places, name_to_id })
    }

    /// Return the place for a given identifier.
    pub fn place(&self, id: PlaceId) -> Result<&Place> {
        self.places.get(&id).ok_or(Error::UnknownPlace { id })
    }

    /// Return the neighbour ids for a given place identifier.
    pub fn neighbours(&self, id: PlaceId) -> Result<&[PlaceId]> {
        self.place(id).map(|place| place.neighbours.as_slice())
    }

    /// Return the coordinate for a given place identifier.
    pub fn coordinate(&self, id: PlaceId) -> Result<Coordinate> {
        self.place(id).map(|place| place.coordinate)
    }

    /// Lookup a place name by identifier.
    pub fn name(&self, id: PlaceId) -> Option<&str> {
        self.places.get(&id).map(|place| place.name.as_str())
    }

    /// Whether the graph contains the given identifier.
    pub fn contains(&self, id: PlaceId) -> bool {
        self.places.contains_key(&id)
    }

    /// Number of places in the graph.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Whether the graph holds no places.
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// All places ordered by identifier.
    pub fn places(&self) -> Vec<&Place> {
        let mut all: Vec<&Place> = self.places.values().collect();
        all.sort_by_key(|place| place.id);
        all
    }

    /// Resolve a query string to a place identifier.
    ///
    /// A decimal query is treated as an id; anything else is matched
    /// case-insensitively against place names. Unknown names carry fuzzy
    /// suggestions in the returned error.
    pub fn resolve(&self, query: &str) -> Result<PlaceId> {
        if let Ok(id) = query.parse::<PlaceId>() {
            return if self.places.contains_key(&id) {
                Ok(id)
            } else {
                Err(Error::UnknownPlace { id })
            };
        }

        self.name_to_id
            .get(&query.to_lowercase())
            .copied()
            .ok_or_else(|| Error::UnknownPlaceName {
                name: query.to_string(),
                suggestions: self.fuzzy_name_matches(query, 3),
            })
    }

    /// Return up to `limit` place names similar to `query`, most similar
    /// first. Names below the similarity threshold are dropped.
    pub fn fuzzy_name_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .places
            .values()
            .map(|place| {
                let score = strsim::jaro_winkler(&needle, &place.name.to_lowercase());
                (score, place.name.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}

fn parse_neighbour_list(row: usize, raw: &str) -> Result<Vec<PlaceId>> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<PlaceId>()
                .map_err(|_| Error::InvalidNeighbourList {
                    row,
                    token: token.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_delimited_neighbours() {
        assert_eq!(parse_neighbour_list(0, "1, 2,3").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_neighbour_list(0, "").unwrap(), Vec::<PlaceId>::new());
    }

    #[test]
    fn rejects_non_numeric_neighbour_tokens() {
        let err = parse_neighbour_list(4, "1,x").unwrap_err();
        match err {
            Error::InvalidNeighbourList { row, token } => {
                assert_eq!(row, 4);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
