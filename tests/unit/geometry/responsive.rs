use super::*;

fn square(side: f64) -> Viewport {
    Viewport::new(side, side)
}

#[test]
fn small_phone_resolves_low_density_and_smallest_radius() {
    let g = ResponsiveGeometry::resolve(Viewport::new(400.0, 860.0));
    assert_eq!(g.density, StarDensity::Low);
    assert_eq!(g.star_count(), 80);
    assert_eq!(g.fan_radius_vmin, 22.0);
}

#[test]
fn star_density_thresholds() {
    assert_eq!(StarDensity::for_viewport(square(519.0)).star_count(), 80);
    assert_eq!(StarDensity::for_viewport(square(520.0)).star_count(), 110);
    assert_eq!(StarDensity::for_viewport(square(767.0)).star_count(), 110);
    assert_eq!(StarDensity::for_viewport(square(768.0)).star_count(), 140);
}

#[test]
fn fan_radius_thresholds() {
    assert_eq!(fan_radius_vmin(square(559.0)), 22.0);
    assert_eq!(fan_radius_vmin(square(560.0)), 26.0);
    assert_eq!(fan_radius_vmin(square(767.0)), 26.0);
    assert_eq!(fan_radius_vmin(square(768.0)), 28.0);
    assert_eq!(fan_radius_vmin(square(1200.0)), 28.0);
    assert_eq!(fan_radius_vmin(square(1201.0)), 32.0);
}

#[test]
fn star_count_is_monotonic_in_shorter_side() {
    let mut last = 0;
    for side in (200..1600).step_by(8) {
        let count = StarDensity::for_viewport(Viewport::new(side as f64, 2000.0)).star_count();
        assert!(count >= last, "count dropped at side {side}");
        last = count;
    }
}

#[test]
fn radius_px_scales_with_vmin() {
    let g = ResponsiveGeometry::resolve(Viewport::new(1000.0, 400.0));
    assert_eq!(g.fan_radius_px(), 22.0 * 4.0);
}
