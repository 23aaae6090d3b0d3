use anyhow::{Context, Result};
use std::path::PathBuf;
use vroom::{RouteRequest, RouteService};

pub async fn run(
    binary: Option<PathBuf>,
    locations: Vec<String>,
    no_start: bool,
    end_at_last: bool,
    include_geometry: bool,
    pretty: bool,
) -> Result<()> {
    let service = RouteService::new(super::resolve_binary(binary)?);

    let mut request = RouteRequest::new(locations);
    request.start_at_first = !no_start;
    request.end_at_last = end_at_last;
    request.include_geometry = include_geometry;

    let solution = service
        .compute(&request)
        .await
        .context("Failed to compute route")?;

    if pretty {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        println!("{}", solution);
    }

    Ok(())
}
