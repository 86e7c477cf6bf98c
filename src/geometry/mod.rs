pub mod resolve;
pub mod rings;
pub mod rotate;

pub use resolve::{ClaimResolution, ResolveError, area_m2, resolve_claim};
pub use rings::{RingError, ring_from_path};
pub use rotate::rotate_about;
