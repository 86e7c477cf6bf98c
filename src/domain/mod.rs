pub mod path;
pub mod point;
pub mod ranking;
pub mod territory;

pub use path::RunPath;
pub use point::GeoPoint;
pub use ranking::{Leaderboard, RankingEntry};
pub use territory::RivalZone;
