pub mod handlers;
pub mod refresher;
pub mod server;
pub mod state;

pub use handlers::{ErrorResponse, HealthResponse, SignalsResponse};
pub use refresher::SignalRefresher;
pub use server::ApiServer;
pub use state::{AppState, RankedSignals, SignalCache};
