//! CLI commands for the perp signal radar.

pub mod scan;
pub mod serve;

pub use scan::{run_scan, ScanArgs};
pub use serve::{run_serve, ServeArgs};
