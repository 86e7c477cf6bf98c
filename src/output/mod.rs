pub mod geojson;

pub use geojson::{run_feature_collection, write_run_geojson};
