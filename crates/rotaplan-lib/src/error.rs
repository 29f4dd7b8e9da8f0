use thiserror::Error;

/// Convenient result alias for the rotaplan library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a place identifier is absent from the graph.
    #[error("unknown place id: {id}")]
    UnknownPlace { id: u32 },

    /// Raised when a place name could not be found in the dataset.
    #[error("unknown place name: {name}{}", format_suggestions(.suggestions))]
    UnknownPlaceName {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised at graph build time when a neighbour list references an id
    /// that is not itself a place in the dataset.
    #[error("place {place} declares unknown neighbour {neighbour}")]
    DanglingNeighbour { place: u32, neighbour: u32 },

    /// Raised when a neighbour list entry cannot be parsed as an id.
    #[error("row {row}: invalid neighbour entry '{token}'")]
    InvalidNeighbourList { row: usize, token: String },

    /// Raised when no route could be found between two places.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: u32, goal: u32 },

    /// Raised when a waypoint set is too large to enumerate exhaustively.
    #[error("waypoint set of {count} exceeds the limit of {limit}")]
    WaypointSetTooLarge { count: usize, limit: usize },

    /// Raised when a computed route plan lacks any places.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for HTTP client errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
