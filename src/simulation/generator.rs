//! City generation orchestrator
//!
//! Ties the road generator and the layout passes together and owns the
//! single mutable [`CityData`] record. Generation, interactive placement,
//! and load all go through this type; everything else reads snapshots.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::CityConfig;
use super::layout;
use super::placement::{validate_placement, PlacementRejection};
use super::roads::RoadGenerator;
use super::types::{Bounds, Building, BuildingType, CityData};

/// Height assigned to interactively placed mid-rise buildings.
const PLACED_BUILDING_HEIGHT: f32 = 0.15;

/// Orchestrates the full generation cycle:
/// roads, then parks and fountain, then buildings.
pub struct CityGenerator {
    bounds: Bounds,
    road_generator: RoadGenerator,
    rng: StdRng,
    city: CityData,
}

impl CityGenerator {
    /// Create a generator with OS-seeded randomness. Two generators built
    /// this way will not produce identical cities for identical configs.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            road_generator: RoadGenerator::new(bounds),
            rng: StdRng::from_os_rng(),
            city: CityData::new(),
        }
    }

    /// Create a generator with deterministic randomness for tests.
    pub fn with_seed(bounds: Bounds, seed: u64) -> Self {
        Self {
            bounds,
            road_generator: RoadGenerator::with_seed(bounds, seed),
            rng: StdRng::seed_from_u64(seed),
            city: CityData::new(),
        }
    }

    /// Run a full generation cycle, replacing any previous city.
    ///
    /// Any traffic population generated against the previous road list is
    /// invalidated by this call; regenerate traffic afterwards.
    pub fn generate_city(&mut self, config: &CityConfig) {
        info!("Generating city: {}", config.summary());

        self.city.clear();

        self.city.roads = self.road_generator.generate(config);

        let (parks, fountain) = layout::generate_parks(&mut self.rng, self.bounds, config);
        self.city.parks = parks;
        self.city.fountain = fountain;

        self.city.buildings =
            layout::generate_buildings(&mut self.rng, self.bounds, config, &self.city.parks);

        self.city.is_generated = true;

        info!(
            "City generation complete: {} roads, {} parks, {} buildings",
            self.city.roads.len(),
            self.city.parks.len(),
            self.city.buildings.len()
        );
    }

    /// Read-only access to the generated city.
    pub fn city_data(&self) -> &CityData {
        &self.city
    }

    /// Mutable access, needed by the load path to replace the city
    /// wholesale.
    pub fn city_data_mut(&mut self) -> &mut CityData {
        &mut self.city
    }

    pub fn has_city(&self) -> bool {
        self.city.is_generated
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Interactively place one building centered at (x, y), using the
    /// strict validator. On rejection nothing is mutated.
    pub fn place_building(
        &mut self,
        x: f32,
        y: f32,
        config: &CityConfig,
    ) -> Result<(), PlacementRejection> {
        validate_placement(
            x,
            y,
            config.standard_width,
            config.standard_depth,
            &self.city.roads,
            &self.city.parks,
            &self.city.fountain,
            &self.city.buildings,
            self.bounds,
        )?;

        self.city.buildings.push(Building::new(
            x,
            y,
            config.standard_width,
            config.standard_depth,
            PLACED_BUILDING_HEIGHT,
            BuildingType::MidRise,
        ));

        debug!(
            "Building placed at ({:.0}, {:.0}), total buildings: {}",
            x,
            y,
            self.city.buildings.len()
        );

        Ok(())
    }
}
