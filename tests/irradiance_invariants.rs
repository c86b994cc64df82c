//! Physical invariants of the irradiance model over a sweep of dates, places and orientations.

use solar_radiation::{
    AirMassModel, Atmosphere, Instant, SurfaceOrientation, Vector3, geometry, radiation,
};

const LATITUDES: [f64; 7] = [-66.0, -43.0, -23.5, 0.0, 23.5, 43.0, 66.0];

fn orientations() -> Vec<SurfaceOrientation> {
    let mut result = vec![SurfaceOrientation::zenith(), SurfaceOrientation::nadir()];
    for slope in [15.0, 45.0, 90.0, 135.0] {
        for azimuth in [-135.0, -90.0, 0.0, 90.0, 180.0] {
            result.push(SurfaceOrientation::from_slope_azimuth(slope, azimuth).unwrap());
        }
    }
    result
}

fn sample_instants() -> impl Iterator<Item = Instant> {
    (1..=12).flat_map(|month| {
        (0..24).map(move |hour| Instant::new(2019, month, 15, hour, 20).unwrap())
    })
}

#[test]
fn test_irradiance_is_non_negative_and_bounded() {
    let surfaces = orientations();
    for latitude in LATITUDES {
        for instant in sample_instants() {
            let beam =
                radiation::beam_irradiance(&instant, latitude, 0.0, &Atmosphere::standard())
                    .unwrap();
            for surface in &surfaces {
                let g =
                    radiation::irradiance_on_plane(surface, 0.0, &instant, latitude, None).unwrap();
                assert!(g >= 0.0, "negative irradiance at {instant:?}, {latitude}°");
                assert!(g <= beam + 1e-9, "plane exceeds beam at {instant:?}, {latitude}°");
                assert!(g < radiation::SOLAR_CONSTANT * 1.035);
            }
        }
    }
}

#[test]
fn test_zero_below_horizon_for_every_orientation() {
    let surfaces = orientations();
    for latitude in LATITUDES {
        for instant in sample_instants() {
            let position = geometry::solar_position(&instant, latitude).unwrap();
            if position.altitude() > 0.0 {
                continue;
            }
            for surface in &surfaces {
                let g =
                    radiation::irradiance_on_plane(surface, 0.0, &instant, latitude, None).unwrap();
                assert_eq!(g, 0.0, "sun below horizon at {instant:?}, {latitude}°");
            }
        }
    }
}

#[test]
fn test_maximum_when_facing_the_sun() {
    let instant = Instant::new(2019, 10, 17, 13, 1).unwrap();
    let latitude = -23.5;
    let sun = geometry::solar_position(&instant, latitude).unwrap().to_ned();
    let facing = SurfaceOrientation::from_vector(sun).unwrap();
    let best = radiation::irradiance_on_plane(&facing, 0.0, &instant, latitude, None).unwrap();

    // tilt the normal away from the sun in steps: irradiance follows cos θ down to zero at 90°
    let side = sun.cross(&Vector3::new(0.0, 0.0, 1.0)).normalized().unwrap();
    let mut previous = best;
    for step in 1..=9 {
        let theta = f64::from(step) * 10.0;
        let (s, c) = theta.to_radians().sin_cos();
        let normal = SurfaceOrientation::from_vector(sun * c + side * s).unwrap();
        let g = radiation::irradiance_on_plane(&normal, 0.0, &instant, latitude, None).unwrap();
        assert!(g < previous, "not decreasing at {theta}°");
        assert!((g - best * c).abs() < 1e-6, "cosine law at {theta}°");
        previous = g;
    }
    assert!(previous.abs() < 1e-9);
}

#[test]
fn test_southern_spring_noon_magnitude() {
    // lat -23.5°, sea level, October 17, 13:01 solar time, horizontal surface
    let instant = Instant::new(2019, 10, 17, 13, 1).unwrap();
    let g = radiation::irradiance_on_plane(&SurfaceOrientation::zenith(), 0.0, &instant, -23.5, None)
        .unwrap();
    assert!(g > 800.0 && g < 1000.0, "{g}");
}

#[test]
fn test_higher_sites_receive_more() {
    let instant = Instant::new(2019, 6, 21, 11, 0).unwrap();
    let mut previous = 0.0;
    for altitude in [0.0, 500.0, 1500.0, 3000.0, 5000.0, 10_000.0, 24_000.0] {
        let g = radiation::irradiance_on_plane(
            &SurfaceOrientation::zenith(),
            altitude,
            &instant,
            35.0,
            None,
        )
        .unwrap();
        assert!(g > previous, "not increasing at {altitude} m");
        previous = g;
    }
    assert!(
        radiation::irradiance_on_plane(&SurfaceOrientation::zenith(), 24_001.0, &instant, 35.0, None)
            .is_err()
    );
}

#[test]
fn test_plane_parallel_cutoff_only_affects_low_sun() {
    let standard = Atmosphere::standard();
    let flat_earth = standard.with_air_mass_model(AirMassModel::PlaneParallel);

    // high sun: the models agree closely
    let noon = Instant::new(2019, 3, 21, 12, 0).unwrap();
    let a = radiation::beam_irradiance(&noon, 10.0, 0.0, &standard).unwrap();
    let b = radiation::beam_irradiance(&noon, 10.0, 0.0, &flat_earth).unwrap();
    assert!((a - b).abs() / a < 0.005);

    // sun between the horizon and 5°: only the curved-atmosphere model gives light
    let dusk = Instant::new(2019, 3, 21, 17, 45).unwrap();
    let altitude = geometry::solar_position(&dusk, 0.0).unwrap().altitude();
    assert!(altitude > 0.0 && altitude < radiation::MIN_PLANE_PARALLEL_ALTITUDE);
    assert!(radiation::beam_irradiance(&dusk, 0.0, 0.0, &standard).unwrap() > 0.0);
    assert_eq!(
        radiation::beam_irradiance(&dusk, 0.0, 0.0, &flat_earth).unwrap(),
        0.0
    );
}

#[test]
fn test_morning_and_afternoon_symmetry() {
    // with solar time input, the sky is mirror-symmetric about solar noon
    let morning = Instant::new(2019, 5, 10, 9, 0).unwrap();
    let afternoon = Instant::new(2019, 5, 10, 15, 0).unwrap();
    let east = SurfaceOrientation::from_slope_azimuth(60.0, -90.0).unwrap();
    let west = SurfaceOrientation::from_slope_azimuth(60.0, 90.0).unwrap();

    let g_east = radiation::irradiance_on_plane(&east, 0.0, &morning, 43.0, None).unwrap();
    let g_west = radiation::irradiance_on_plane(&west, 0.0, &afternoon, 43.0, None).unwrap();
    assert!(g_east > 0.0);
    assert!((g_east - g_west).abs() < 1e-6);

    // and a west-facing wall sees nothing in the morning
    let g = radiation::irradiance_on_plane(
        &SurfaceOrientation::from_slope_azimuth(90.0, 90.0).unwrap(),
        0.0,
        &morning,
        43.0,
        None,
    )
    .unwrap();
    assert_eq!(g, 0.0);
}
