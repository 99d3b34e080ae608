// Composition root for the tracking bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers.
// - Rebuild the tracking cache from persisted records before serving.

pub mod config;
pub mod http;
pub mod reconcile;
pub mod session;
pub mod state;
