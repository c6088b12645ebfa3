//! Integration tests for the gym-map projection.

use renew_rubber_storefront::locator::{NL_BOUNDS, partner_gyms, project};

#[test]
fn outputs_are_clamped_to_the_panel_margin() {
    // North pole and deep south both clamp instead of escaping the panel
    let pole = project(90.0, 5.0);
    assert!((pole.y - 2.0).abs() < f64::EPSILON);

    let equator = project(0.0, 5.0);
    assert!((equator.y - 98.0).abs() < f64::EPSILON);

    let far_west = project(52.0, -180.0);
    assert!((far_west.x - 2.0).abs() < f64::EPSILON);
}

#[test]
fn north_is_up() {
    // Groningen sits north of Maastricht, so it must render higher
    let groningen = project(53.2194, 6.5665);
    let maastricht = project(50.8514, 5.6910);
    assert!(groningen.y < maastricht.y);
}

#[test]
fn x_tracks_longitude_linearly_inside_the_box() {
    let quarter = project(
        NL_BOUNDS.min_lat + 1.0,
        NL_BOUNDS.min_lng + (NL_BOUNDS.max_lng - NL_BOUNDS.min_lng) / 4.0,
    );
    assert!((quarter.x - 25.0).abs() < 1e-9);
}

#[test]
fn every_partner_gym_lands_inside_the_panel() {
    for gym in partner_gyms() {
        let pos = project(gym.lat, gym.lng);
        assert!((2.0..=98.0).contains(&pos.x), "{} x={}", gym.name, pos.x);
        assert!((2.0..=98.0).contains(&pos.y), "{} y={}", gym.name, pos.y);
    }
}
