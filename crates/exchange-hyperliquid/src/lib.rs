pub mod client;
pub mod error;

pub use client::{decode_snapshot, info_request_body, HyperliquidClient, HYPERLIQUID_API_URL};
pub use error::HyperliquidError;
