//! Route request parameters and solver argument construction.

use crate::error::{Result, RouteError};

/// Parameters for a single routing computation.
///
/// Locations are caller-supplied "longitude,latitude" strings passed through
/// to the solver uninterpreted; only their count is validated.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    /// Ordered location strings, visited in sequence.
    pub locations: Vec<String>,
    /// Start the route at the first location (solver flag `-s`).
    pub start_at_first: bool,
    /// End the route at the last location (solver flag `-e`).
    pub end_at_last: bool,
    /// Include route geometry in the solver output (solver flag `-g`).
    pub include_geometry: bool,
}

impl RouteRequest {
    /// Create a request with the default flags: `start_at_first` on,
    /// `end_at_last` and `include_geometry` off.
    pub fn new(locations: Vec<String>) -> Self {
        Self {
            locations,
            start_at_first: true,
            end_at_last: false,
            include_geometry: false,
        }
    }

    /// Check the request carries enough locations to route between.
    pub fn validate(&self) -> Result<()> {
        if self.locations.len() < 2 {
            return Err(RouteError::TooFewLocations {
                count: self.locations.len(),
            });
        }
        Ok(())
    }

    /// Build the solver's argument vector: conditional flags in `-s`, `-e`,
    /// `-g` order, then the joined location argument last.
    pub fn solver_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.start_at_first {
            args.push("-s".to_string());
        }
        if self.end_at_last {
            args.push("-e".to_string());
        }
        if self.include_geometry {
            args.push("-g".to_string());
        }
        args.push(self.location_arg());
        args
    }

    /// The final `loc=<v1>&loc=<v2>&...` argument. Locations are joined
    /// verbatim; no URL-encoding is applied.
    pub fn location_arg(&self) -> String {
        format!("loc={}", self.locations.join("&loc="))
    }
}
