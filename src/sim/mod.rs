pub mod route;
pub mod session;

pub use route::LoopRoute;
pub use session::{RunOutcome, RunSession, SessionConfig};
