use super::*;

#[test]
fn transform_css_keeps_op_order() {
    let t = Transform::centered(1.0)
        .then(TransformOp::Rotate(90.0))
        .then(TransformOp::TranslateVmin(22.0));
    assert_eq!(
        t.to_css(),
        "translate(-50%, -50%) scale(1) rotate(90deg) translate(22vmin)"
    );
    assert_eq!(Transform::new().to_css(), "none");
    assert_eq!(Transform::translate_y_px(10.0).to_css(), "translateY(10px)");
}

#[test]
fn rotate_then_translate_lands_on_circle() {
    let viewport = Viewport::new(400.0, 900.0);
    let t = Transform::new()
        .then(TransformOp::Rotate(90.0))
        .then(TransformOp::TranslateVmin(22.0));
    let origin = t.to_affine(viewport, Size::ZERO).translation();
    assert!(origin.x.abs() < 1e-9);
    assert!((origin.y - 88.0).abs() < 1e-9);
}

#[test]
fn percent_translate_uses_element_box() {
    let t = Transform::centered(1.0);
    let a = t.to_affine(Viewport::default(), Size::new(120.0, 180.0));
    assert_eq!(a.translation(), Vec2::new(-60.0, -90.0));
}

#[test]
fn transition_css_lists_every_property() {
    let t = Transition::new(
        900,
        &[TransitionProperty::Transform, TransitionProperty::Opacity],
    );
    assert_eq!(t.to_css(), "transform 900ms ease, opacity 900ms ease");
}

#[test]
fn with_ease_changes_keyword_and_curve() {
    let t = Transition::new(400, &[TransitionProperty::Opacity]).with_ease(Ease::Linear);
    assert_eq!(t.to_css(), "opacity 400ms linear");
    assert_eq!(t.progress(100.0), 0.25);
}

#[test]
fn transition_progress_is_clamped_and_eased() {
    let t = Transition::new(1000, &[TransitionProperty::Opacity]);
    assert_eq!(t.progress(0.0), 0.0);
    assert_eq!(t.progress(5000.0), 1.0);
    assert!(t.progress(500.0) > 0.5);
    assert_eq!(Transition::new(0, &[]).progress(0.0), 1.0);
}

#[test]
fn drop_shadow_css() {
    let f = Filter::DropShadow {
        offset_x_px: 0.0,
        offset_y_px: 12.0,
        blur_px: 16.0,
        color: Rgba {
            r: 0,
            g: 0,
            b: 0,
            a: 0.45,
        },
    };
    assert_eq!(f.to_css(), "drop-shadow(0px 12px 16px rgba(0, 0, 0, 0.45))");
}

#[test]
fn style_css_and_effective_opacity() {
    let mut style = Style::default();
    assert_eq!(style.effective_opacity(), 1.0);
    assert_eq!(style.to_css(), "");

    style.opacity = Some(0.0);
    style.transform = Some(Transform::centered(0.98));
    assert_eq!(style.effective_opacity(), 0.0);
    assert_eq!(
        style.to_css(),
        "opacity: 0; transform: translate(-50%, -50%) scale(0.98)"
    );
}
