//! City generation configuration
//!
//! All user-controlled parameters for a generation cycle live here. The
//! texture theme and view-mode flag are cosmetic: they are carried so a
//! frontend can read them back, but the core ignores them.

use clap::ValueEnum;

/// Road network pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoadPattern {
    /// Manhattan-style grid of horizontal and vertical roads
    Grid,
    /// Spokes from the center plus concentric rings
    Radial,
    /// Random connections between scattered nodes
    Random,
}

impl RoadPattern {
    pub fn label(&self) -> &'static str {
        match self {
            RoadPattern::Grid => "Grid",
            RoadPattern::Radial => "Radial",
            RoadPattern::Random => "Random",
        }
    }
}

/// Building height distribution policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SkylineType {
    /// All buildings low-rise
    LowRise,
    /// All buildings mid-rise
    MidRise,
    /// Mostly high-rise with some mid-rise
    Skyscraper,
    /// Equal mix of all three types
    Mixed,
}

impl SkylineType {
    pub fn label(&self) -> &'static str {
        match self {
            SkylineType::LowRise => "Low-Rise",
            SkylineType::MidRise => "Mid-Rise",
            SkylineType::Skyscraper => "Skyscraper",
            SkylineType::Mixed => "Mixed",
        }
    }
}

/// Building facade style. Cosmetic only; the core never consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TextureTheme {
    Modern,
    Classic,
    Industrial,
    Futuristic,
}

impl TextureTheme {
    pub fn label(&self) -> &'static str {
        match self {
            TextureTheme::Modern => "Modern",
            TextureTheme::Classic => "Classic",
            TextureTheme::Industrial => "Industrial",
            TextureTheme::Futuristic => "Futuristic",
        }
    }
}

/// All parameters controlling one city generation cycle.
#[derive(Debug, Clone)]
pub struct CityConfig {
    /// Number of buildings to generate
    pub num_buildings: usize,
    /// Layout density scalar shared by all three road patterns
    /// (e.g. 10 = a 10x10 grid)
    pub layout_size: i32,
    /// Road pattern for the network
    pub road_pattern: RoadPattern,
    /// Road width in pixels (cosmetic to this core)
    pub road_width: i32,
    /// Building height distribution
    pub skyline_type: SkylineType,
    /// Facade style (cosmetic)
    pub texture_theme: TextureTheme,
    /// Radius for circular parks
    pub park_radius: i32,
    /// Number of parks to generate
    pub num_parks: usize,
    /// Radius for the central fountain; zero disables it
    pub fountain_radius: i32,
    /// Footprint width used for interactive placement
    pub standard_width: f32,
    /// Footprint depth used for interactive placement
    pub standard_depth: f32,
    /// 2D/3D view toggle (cosmetic)
    pub view_3d: bool,
}

impl Default for CityConfig {
    fn default() -> Self {
        Self {
            num_buildings: 20,
            layout_size: 10,
            road_pattern: RoadPattern::Grid,
            road_width: 8,
            skyline_type: SkylineType::Mixed,
            texture_theme: TextureTheme::Modern,
            park_radius: 40,
            num_parks: 3,
            fountain_radius: 25,
            standard_width: 30.0,
            standard_depth: 30.0,
            view_3d: false,
        }
    }
}

impl CityConfig {
    /// One-line summary for logs.
    pub fn summary(&self) -> String {
        format!(
            "{} pattern, layout {}, {} buildings ({} skyline), {} parks r{}, fountain r{}",
            self.road_pattern.label(),
            self.layout_size,
            self.num_buildings,
            self.skyline_type.label(),
            self.num_parks,
            self.park_radius,
            self.fountain_radius
        )
    }
}
