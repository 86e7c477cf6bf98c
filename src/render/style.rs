/// Fill style for a territory region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionStyle {
    pub stroke: &'static str,
    pub fill: &'static str,
    pub fill_opacity: f64,
}

impl RegionStyle {
    /// Rival zone and its remainder: purple, lightly filled.
    pub fn rival() -> Self {
        Self {
            stroke: "purple",
            fill: "#800080",
            fill_opacity: 0.4,
        }
    }

    /// The captured overlap: green, more opaque than the plain territory.
    pub fn captured() -> Self {
        Self {
            stroke: "green",
            fill: "#00FF00",
            fill_opacity: 0.6,
        }
    }

    /// The whole claimed territory.
    pub fn territory() -> Self {
        Self {
            stroke: "green",
            fill: "#00FF00",
            fill_opacity: 0.4,
        }
    }
}

/// Stroke style for the traced path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathStyle {
    pub stroke: &'static str,
}

impl PathStyle {
    pub fn run() -> Self {
        Self { stroke: "red" }
    }
}
