use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use rotaplan_lib::{
    load_records, plan_route, plan_tour, Graph, RouteRequest, RouteSummary, TourRequest,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Neighbourhood route planning utilities")]
struct Cli {
    /// Dataset source: a CSV file path or an http(s) URL.
    #[arg(long)]
    data: String,

    /// Output format for planning commands.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every place with its identifier.
    Places,
    /// Compute the shortest path between two places.
    Route {
        /// Starting place name or id.
        #[arg(long = "from")]
        from: String,
        /// Destination place name or id.
        #[arg(long = "to")]
        to: String,
    },
    /// Find the cheapest visiting order for mandatory stops.
    Tour {
        /// Starting place name or id.
        #[arg(long = "from")]
        from: String,
        /// Destination place name or id.
        #[arg(long = "to")]
        to: String,
        /// Comma-separated intermediate place names or ids.
        #[arg(long = "via", value_delimiter = ',', num_args = 0..)]
        via: Vec<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let graph = load_graph(&cli.data)?;
    match cli.command {
        Command::Places => handle_places(&graph),
        Command::Route { from, to } => handle_route(&graph, cli.format, &from, &to),
        Command::Tour { from, to, via } => handle_tour(&graph, cli.format, &from, &to, via),
    }
}

fn load_graph(source: &str) -> Result<Graph> {
    let records = load_records(source)
        .with_context(|| format!("failed to load place records from {source}"))?;
    Graph::from_records(&records).context("failed to build the place graph")
}

fn handle_places(graph: &Graph) -> Result<()> {
    for place in graph.places() {
        println!(
            "{:>4}  {}, {} ({:.4}, {:.4})",
            place.id,
            place.name,
            place.region,
            place.coordinate.latitude,
            place.coordinate.longitude
        );
    }
    Ok(())
}

fn handle_route(graph: &Graph, format: OutputFormat, from: &str, to: &str) -> Result<()> {
    let plan = plan_route(graph, &RouteRequest::new(from, to))?;
    emit(graph, format, &plan)
}

fn handle_tour(
    graph: &Graph,
    format: OutputFormat,
    from: &str,
    to: &str,
    via: Vec<String>,
) -> Result<()> {
    let request = TourRequest {
        start: from.to_string(),
        goal: to.to_string(),
        waypoints: via,
    };
    let plan = plan_tour(graph, &request)?;
    emit(graph, format, &plan)
}

fn emit(graph: &Graph, format: OutputFormat, plan: &rotaplan_lib::RoutePlan) -> Result<()> {
    let summary = RouteSummary::from_plan(graph, plan)?;
    match format {
        OutputFormat::Text => print!("{}", summary.render_text()),
        OutputFormat::Json => println!("{}", summary.render_json()?),
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
