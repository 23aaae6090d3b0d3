//! # Vroom - VROOM solver invocation library
//!
//! Library for running the VROOM vehicle-routing optimization binary and
//! capturing the JSON solution it prints to its output streams.
//!
//! ## Features
//!
//! - **Deterministic command construction**: flags and locations map to the
//!   solver's command line in a fixed, testable order
//! - **Merged capture**: stdout and stderr are collected together, so solver
//!   diagnostics never get lost
//! - **Per-request verification**: the binary's existence and execute
//!   permission are re-checked on every computation
//!
//! ## Quick Start
//!
//! ```ignore
//! use vroom::{RouteRequest, RouteService};
//!
//! let service = RouteService::new("/opt/vroom/vroom");
//!
//! let mut request = RouteRequest::new(vec!["1.1,2.2".into(), "3.3,4.4".into()]);
//! request.include_geometry = true;
//!
//! let solution = service.compute(&request).await?;
//! println!("{}", solution);
//! ```
//!
//! ## Solver contract
//!
//! The binary is invoked as `./<name> [-s] [-e] [-g] loc=<v1>&loc=<v2>&...`
//! with its own directory as working directory. It is expected to print a
//! single JSON document and exit; the exit code is not inspected.

pub mod binary;
pub mod error;
pub mod exec;
pub mod request;
pub mod service;

// Re-export main types at crate root for convenience
pub use binary::VroomBinary;
pub use error::{Result, RouteError};
pub use exec::Invocation;
pub use request::RouteRequest;
pub use service::RouteService;
