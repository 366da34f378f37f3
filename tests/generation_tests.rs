//! City generation validation tests
//!
//! Covers the rasterization primitives, the three road patterns, and the
//! park/building layout passes. Randomized outputs are checked against
//! shape invariants; exact-output tests use seeded generators.

use std::collections::HashSet;

use city_sim::simulation::{
    bresenham_line, centroid_metrics, midpoint_circle, Bounds, BuildingType, CityConfig,
    CityGenerator, Point, RoadGenerator, RoadPattern, SkylineType,
};

#[test]
fn test_line_includes_both_endpoints() {
    let cases = [
        (0, 0, 10, 3),
        (10, 3, 0, 0),
        (-5, 7, 12, -20),
        (4, 4, 4, 4),
        (0, 0, 0, 9),
        (0, 0, 9, 0),
    ];

    for (x0, y0, x1, y1) in cases {
        let points = bresenham_line(x0, y0, x1, y1);
        assert_eq!(
            points.first(),
            Some(&Point::new(x0, y0)),
            "line ({},{})->({},{}) must start at its first endpoint",
            x0,
            y0,
            x1,
            y1
        );
        assert_eq!(
            points.last(),
            Some(&Point::new(x1, y1)),
            "line ({},{})->({},{}) must end at its second endpoint",
            x0,
            y0,
            x1,
            y1
        );
    }
}

#[test]
fn test_line_is_eight_connected() {
    let cases = [(0, 0, 50, 13), (0, 0, 13, 50), (30, -2, -17, 9), (5, 5, 5, 25)];

    for (x0, y0, x1, y1) in cases {
        let points = bresenham_line(x0, y0, x1, y1);
        for pair in points.windows(2) {
            let dx = (pair[1].x - pair[0].x).abs();
            let dy = (pair[1].y - pair[0].y).abs();
            assert!(
                dx <= 1 && dy <= 1 && dx + dy > 0,
                "consecutive points {:?} -> {:?} must differ by exactly one step",
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn test_degenerate_line_is_single_point() {
    let points = bresenham_line(7, -3, 7, -3);
    assert_eq!(points, vec![Point::new(7, -3)]);
}

#[test]
fn test_circle_points_within_tolerance() {
    for radius in [1, 5, 25, 40] {
        let points = midpoint_circle(100, 200, radius);
        assert!(!points.is_empty());
        for p in &points {
            let dx = (p.x - 100) as f32;
            let dy = (p.y - 200) as f32;
            let dist = (dx * dx + dy * dy).sqrt();
            assert!(
                (dist - radius as f32).abs() <= 1.0,
                "point {:?} is {:.2} from center, expected ~{}",
                p,
                dist,
                radius
            );
        }
    }
}

#[test]
fn test_circle_rotational_symmetry() {
    let points: HashSet<Point> = midpoint_circle(0, 0, 30).into_iter().collect();

    for p in &points {
        // 90 degree rotation about the center
        assert!(
            points.contains(&Point::new(-p.y, p.x)),
            "missing 90-degree rotation of {:?}",
            p
        );
        // 180 degree rotation
        assert!(
            points.contains(&Point::new(-p.x, -p.y)),
            "missing 180-degree rotation of {:?}",
            p
        );
    }
}

#[test]
fn test_zero_radius_circle_degenerates_to_center() {
    assert_eq!(midpoint_circle(10, 20, 0), vec![Point::new(10, 20)]);
    assert_eq!(midpoint_circle(10, 20, -5), vec![Point::new(10, 20)]);
}

#[test]
fn test_grid_road_count() {
    let bounds = Bounds::new(800, 600);
    for layout_size in [1, 4, 10] {
        let config = CityConfig {
            layout_size,
            road_pattern: RoadPattern::Grid,
            ..CityConfig::default()
        };
        let roads = RoadGenerator::new(bounds).generate(&config);
        assert_eq!(
            roads.len(),
            2 * (layout_size as usize + 1),
            "grid with layout size {} must have 2(N+1) roads",
            layout_size
        );
    }
}

#[test]
fn test_grid_scenario_spans_canvas() {
    // Scenario: Grid pattern, layout size 10, 800x600 canvas.
    let config = CityConfig {
        layout_size: 10,
        road_pattern: RoadPattern::Grid,
        ..CityConfig::default()
    };
    let roads = RoadGenerator::new(Bounds::new(800, 600)).generate(&config);
    assert_eq!(roads.len(), 22);

    let horizontal = roads
        .iter()
        .filter(|r| r.points.iter().all(|p| p.y == r.points[0].y))
        .count();
    let vertical = roads
        .iter()
        .filter(|r| r.points.iter().all(|p| p.x == r.points[0].x))
        .count();
    assert_eq!(horizontal, 11, "expected 11 horizontal roads");
    assert_eq!(vertical, 11, "expected 11 vertical roads");

    // Horizontal roads span the full width minus margins.
    for road in roads.iter().take(11) {
        assert_eq!(road.points.first().map(|p| p.x), Some(50));
        assert_eq!(road.points.last().map(|p| p.x), Some(750));
    }
    // Vertical roads span the full height minus margins.
    for road in roads.iter().skip(11) {
        assert_eq!(road.points.first().map(|p| p.y), Some(50));
        assert_eq!(road.points.last().map(|p| p.y), Some(550));
    }
}

#[test]
fn test_grid_degenerate_layout_size() {
    let config = CityConfig {
        layout_size: 0,
        road_pattern: RoadPattern::Grid,
        ..CityConfig::default()
    };
    let roads = RoadGenerator::new(Bounds::new(800, 600)).generate(&config);
    // Smallest well-defined grid: one horizontal and one vertical road.
    assert_eq!(roads.len(), 2);
}

#[test]
fn test_radial_road_count_formula() {
    let bounds = Bounds::new(800, 600);
    let layout_size = 6;
    let config = CityConfig {
        layout_size,
        road_pattern: RoadPattern::Radial,
        ..CityConfig::default()
    };
    let roads = RoadGenerator::new(bounds).generate(&config);

    // Spokes plus, per ring, one road for every 8 boundary points
    // (rounded up).
    let max_radius = 600 / 2 - 50;
    let num_rings = layout_size / 2;
    let mut expected = layout_size as usize;
    for ring in 1..=num_rings {
        let circle = midpoint_circle(400, 300, max_radius * ring / num_rings);
        expected += circle.len().div_ceil(8);
    }

    assert_eq!(roads.len(), expected);
}

#[test]
fn test_random_road_count() {
    let bounds = Bounds::new(800, 600);
    for layout_size in [2, 5, 12] {
        let config = CityConfig {
            layout_size,
            road_pattern: RoadPattern::Random,
            ..CityConfig::default()
        };
        let roads = RoadGenerator::new(bounds).generate(&config);
        assert_eq!(
            roads.len(),
            layout_size as usize * 3,
            "random pattern with layout size {} must have 3N roads",
            layout_size
        );
    }
}

#[test]
fn test_roads_never_empty_after_generation() {
    let bounds = Bounds::new(800, 600);
    for pattern in [RoadPattern::Grid, RoadPattern::Radial, RoadPattern::Random] {
        let config = CityConfig {
            road_pattern: pattern,
            ..CityConfig::default()
        };
        let roads = RoadGenerator::new(bounds).generate(&config);
        assert!(!roads.is_empty());
        for road in &roads {
            assert!(
                !road.points.is_empty(),
                "{} road with empty point list",
                pattern.label()
            );
        }
    }
}

#[test]
fn test_park_scenario_with_fountain() {
    // Scenario: 3 parks plus a fountain of radius 25 on an 800x600 canvas.
    let mut generator = CityGenerator::new(Bounds::new(800, 600));
    generator.generate_city(&CityConfig::default());
    let city = generator.city_data();

    assert!(city.is_generated);
    assert_eq!(city.parks.len(), 4, "3 parks plus the fountain");
    assert_eq!(
        city.parks.last(),
        Some(&city.fountain),
        "fountain must be the last park list entry"
    );

    let metrics = centroid_metrics(&city.fountain).expect("fountain has boundary points");
    assert!((metrics.center_x - 400.0).abs() <= 1.0);
    assert!((metrics.center_y - 300.0).abs() <= 1.0);
    assert!((metrics.radius - 25.0).abs() <= 1.5);

    for p in &city.fountain {
        let dx = p.x as f32 - 400.0;
        let dy = p.y as f32 - 300.0;
        let dist = (dx * dx + dy * dy).sqrt();
        assert!(
            (dist - 25.0).abs() <= 1.5,
            "fountain boundary point {:?} is {:.2} from center",
            p,
            dist
        );
    }
}

#[test]
fn test_zero_counts_generate_nothing() {
    let config = CityConfig {
        num_parks: 0,
        fountain_radius: 0,
        num_buildings: 0,
        ..CityConfig::default()
    };
    let mut generator = CityGenerator::new(Bounds::new(800, 600));
    generator.generate_city(&config);
    let city = generator.city_data();

    assert!(city.parks.is_empty());
    assert!(city.fountain.is_empty());
    assert!(city.buildings.is_empty());
    assert!(city.is_generated, "an empty city still counts as generated");
}

#[test]
fn test_buildings_respect_park_clearance() {
    let mut generator = CityGenerator::new(Bounds::new(800, 600));
    generator.generate_city(&CityConfig::default());
    let city = generator.city_data();

    // Automatic generation uses the loose policy: building centers stay at
    // least 80 units from each park's first boundary point.
    for building in &city.buildings {
        for park in &city.parks {
            let reference = park.first().expect("park has boundary points");
            let dx = building.x - reference.x as f32;
            let dy = building.y - reference.y as f32;
            assert!(
                (dx * dx + dy * dy).sqrt() >= 80.0,
                "building at ({:.0}, {:.0}) too close to park reference {:?}",
                building.x,
                building.y,
                reference
            );
        }
    }
}

#[test]
fn test_building_shortfall_is_accepted() {
    // On a 140x140 canvas every candidate center (margin 50 leaves
    // [50, 90] on each axis) is within 80 units of the fountain's first
    // boundary point at (95, 70), so the attempt budget runs out with
    // nothing placed. The shortfall is final, not an error.
    let config = CityConfig {
        num_buildings: 5,
        num_parks: 0,
        fountain_radius: 25,
        ..CityConfig::default()
    };
    let mut generator = CityGenerator::with_seed(Bounds::new(140, 140), 1);
    generator.generate_city(&config);

    let city = generator.city_data();
    assert!(city.buildings.is_empty());
    assert_eq!(city.parks.len(), 1, "only the fountain entry");
    assert!(
        city.is_generated,
        "a generation cycle that places no buildings still completes"
    );
}

#[test]
fn test_skyline_low_rise_only() {
    let config = CityConfig {
        skyline_type: SkylineType::LowRise,
        num_parks: 0,
        fountain_radius: 0,
        ..CityConfig::default()
    };
    let mut generator = CityGenerator::new(Bounds::new(800, 600));
    generator.generate_city(&config);

    let city = generator.city_data();
    assert!(!city.buildings.is_empty());
    for building in &city.buildings {
        assert_eq!(building.kind, BuildingType::LowRise);
        assert!((10.0..30.0).contains(&building.height));
    }
}

#[test]
fn test_skyline_skyscraper_mix() {
    let config = CityConfig {
        skyline_type: SkylineType::Skyscraper,
        num_buildings: 40,
        num_parks: 0,
        fountain_radius: 0,
        ..CityConfig::default()
    };
    let mut generator = CityGenerator::new(Bounds::new(800, 600));
    generator.generate_city(&config);

    for building in &generator.city_data().buildings {
        match building.kind {
            BuildingType::HighRise => assert!((120.0..250.0).contains(&building.height)),
            BuildingType::MidRise => assert!((40.0..100.0).contains(&building.height)),
            BuildingType::LowRise => {
                panic!("skyscraper skyline must not produce low-rise buildings")
            }
        }
    }
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let config = CityConfig::default();
    let bounds = Bounds::new(800, 600);

    let mut a = CityGenerator::with_seed(bounds, 42);
    let mut b = CityGenerator::with_seed(bounds, 42);
    a.generate_city(&config);
    b.generate_city(&config);

    assert_eq!(a.city_data(), b.city_data());
}

#[test]
fn test_regeneration_replaces_city() {
    let mut generator = CityGenerator::new(Bounds::new(800, 600));
    generator.generate_city(&CityConfig::default());
    let first_roads = generator.city_data().roads.len();

    let config = CityConfig {
        layout_size: 4,
        road_pattern: RoadPattern::Grid,
        ..CityConfig::default()
    };
    generator.generate_city(&config);

    assert_ne!(generator.city_data().roads.len(), first_roads);
    assert_eq!(generator.city_data().roads.len(), 10);
}
