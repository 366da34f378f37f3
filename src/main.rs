mod simulation;

use clap::Parser;
use log::info;
use std::path::PathBuf;

use simulation::{
    load_city, save_city, Bounds, CityConfig, CityGenerator, RoadPattern, SkylineType,
    TextureTheme, TrafficGenerator,
};

#[derive(Parser)]
#[command(name = "city_sim")]
#[command(about = "Procedural city generation with headless traffic simulation")]
struct Cli {
    /// Road network pattern
    #[arg(long, value_enum, default_value_t = RoadPattern::Grid)]
    pattern: RoadPattern,

    /// Layout density (e.g. 10 = 10x10 grid)
    #[arg(long, default_value_t = 10)]
    layout_size: i32,

    /// Number of buildings to generate
    #[arg(long, default_value_t = 20)]
    buildings: usize,

    /// Building height distribution
    #[arg(long, value_enum, default_value_t = SkylineType::Mixed)]
    skyline: SkylineType,

    /// Road width in pixels
    #[arg(long, default_value_t = 8)]
    road_width: i32,

    /// Building facade theme (cosmetic; carried through for frontends)
    #[arg(long, value_enum, default_value_t = TextureTheme::Modern)]
    theme: TextureTheme,

    /// Number of circular parks
    #[arg(long, default_value_t = 3)]
    parks: usize,

    /// Park radius in pixels
    #[arg(long, default_value_t = 40)]
    park_radius: i32,

    /// Central fountain radius in pixels (0 disables it)
    #[arg(long, default_value_t = 25)]
    fountain_radius: i32,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 800)]
    width: i32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 600)]
    height: i32,

    /// Number of cars to spawn
    #[arg(long, default_value_t = 15)]
    cars: usize,

    /// Number of simulation ticks to run
    #[arg(long, default_value_t = 300)]
    ticks: u32,

    /// Time delta per tick in seconds
    #[arg(long, default_value_t = 0.1)]
    delta: f32,

    /// RNG seed for reproducible generation (default: OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Load a previously saved city instead of generating one
    #[arg(long)]
    load: Option<PathBuf>,

    /// Save the city to this file after generation
    #[arg(long)]
    save: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let bounds = Bounds::new(cli.width, cli.height);
    let config = CityConfig {
        num_buildings: cli.buildings,
        layout_size: cli.layout_size,
        road_pattern: cli.pattern,
        road_width: cli.road_width,
        skyline_type: cli.skyline,
        texture_theme: cli.theme,
        num_parks: cli.parks,
        park_radius: cli.park_radius,
        fountain_radius: cli.fountain_radius,
        ..CityConfig::default()
    };

    let mut generator = match cli.seed {
        Some(seed) => CityGenerator::with_seed(bounds, seed),
        None => CityGenerator::new(bounds),
    };

    if let Some(path) = &cli.load {
        *generator.city_data_mut() = load_city(path)?;
    } else {
        generator.generate_city(&config);
    }

    if let Some(path) = &cli.save {
        save_city(generator.city_data(), path)?;
    }

    let mut traffic = match cli.seed {
        Some(seed) => TrafficGenerator::with_seed(seed),
        None => TrafficGenerator::new(),
    };

    let city = generator.city_data();
    traffic.generate_traffic(&city.roads, cli.cars, &city.parks, &city.fountain, bounds);

    info!(
        "Running {} ticks at {:.2}s per tick",
        cli.ticks, cli.delta
    );

    // Summarize once per simulated second.
    let ticks_per_second = (1.0 / cli.delta).ceil().max(1.0) as u32;
    for tick in 1..=cli.ticks {
        traffic.update_traffic(cli.delta, &city.roads);

        if tick % ticks_per_second == 0 || tick == cli.ticks {
            let cars = &traffic.traffic_data().cars;
            let moving = cars.iter().filter(|c| c.speed > 0.0).count();
            info!(
                "tick {} ({:.1}s): {} cars, {} moving",
                tick,
                tick as f32 * cli.delta,
                cars.len(),
                moving
            );
        }
    }

    info!("SIMULATION COMPLETE");
    info!("Total roads: {}", city.roads.len());
    info!("Total parks: {}", city.parks.len());
    info!("Total buildings: {}", city.buildings.len());
    info!("Active cars: {}", traffic.traffic_data().cars.len());

    Ok(())
}
