use rand::{SeedableRng, rngs::StdRng};

use super::*;
use crate::{
    animation::ease::Ease,
    foundation::core::{Size, Viewport},
    geometry::fan::Pointing,
    scene::{
        builder::{create_bottom_text, create_deck, create_overlay},
        style::TransformOp,
    },
    transition::TransitionOptions,
};

fn build_run(doc: &mut Document, options: TransitionOptions, viewport: Viewport) -> RunState {
    let config = options.resolve();
    let geometry = ResponsiveGeometry::resolve(viewport);
    let mut rng = StdRng::seed_from_u64(0);
    let overlay = create_overlay(doc, &geometry, config.enable_stars, &mut rng);
    let deck = create_deck(doc, &overlay, config.card_count);
    let caption = create_bottom_text(doc, &overlay, &config.caption_text);
    RunState {
        overlay,
        deck,
        caption,
        geometry,
        config,
    }
}

fn four_cards(pointing: Pointing, radial_align: bool) -> TransitionOptions {
    TransitionOptions {
        card_count: Some(4),
        pointing: Some(pointing),
        radial_align: Some(radial_align),
        ..TransitionOptions::default()
    }
}

fn last_rotation(doc: &Document, card: &Card) -> f64 {
    let transform = doc.style(card.element).unwrap().transform.clone().unwrap();
    match transform.ops().last() {
        Some(TransformOp::Rotate(deg)) => *deg,
        other => panic!("expected trailing rotate, got {other:?}"),
    }
}

#[test]
fn deck_in_shows_cards_at_full_scale() {
    let mut doc = Document::new();
    let run = build_run(&mut doc, four_cards(Pointing::Inward, true), Viewport::default());
    apply_stage(&mut doc, &run, Stage::DeckIn, &StageTimings::STANDARD);

    for card in &run.deck.cards {
        let style = doc.style(card.element).unwrap();
        assert_eq!(style.opacity, Some(1.0));
        assert_eq!(style.transform, Some(Transform::centered(1.0)));
        assert_eq!(style.transition.as_ref().unwrap().duration_ms, 900);
    }
}

#[test]
fn caption_fades_in_then_drops_out() {
    let mut doc = Document::new();
    let run = build_run(&mut doc, TransitionOptions::default(), Viewport::default());

    apply_stage(&mut doc, &run, Stage::CaptionIn, &StageTimings::STANDARD);
    let style = doc.style(run.caption).unwrap();
    assert_eq!(style.opacity, Some(1.0));
    assert_eq!(style.transform, Some(Transform::translate_y_px(0.0)));
    assert_eq!(style.transition.as_ref().unwrap().duration_ms, 700);

    apply_stage(&mut doc, &run, Stage::CaptionOut, &StageTimings::STANDARD);
    let style = doc.style(run.caption).unwrap();
    assert_eq!(style.opacity, Some(0.0));
    assert_eq!(style.transform, Some(Transform::translate_y_px(10.0)));
    assert_eq!(style.transition.as_ref().unwrap().duration_ms, 600);
}

#[test]
fn inward_fan_on_small_viewport() {
    let mut doc = Document::new();
    let viewport = Viewport::new(400.0, 800.0);
    let run = build_run(&mut doc, four_cards(Pointing::Inward, true), viewport);
    apply_stage(&mut doc, &run, Stage::Fan, &StageTimings::STANDARD);

    let angles: Vec<f64> = run.deck.cards.iter().map(|c| c.angle_deg).collect();
    assert_eq!(angles, vec![0.0, 90.0, 180.0, 270.0]);

    for card in &run.deck.cards {
        let style = doc.style(card.element).unwrap();
        let transform = style.transform.clone().unwrap();
        assert_eq!(transform, fan_transform(card.angle_deg, 22.0, -90.0));
        assert_eq!(last_rotation(&doc, card), -90.0);
        assert_eq!(style.filter, Some(CARD_SHADOW));

        let distance = transform.to_affine(viewport, Size::ZERO).translation().hypot();
        assert!((distance - run.geometry.fan_radius_px()).abs() < 1e-9);
    }
}

#[test]
fn outward_pointing_flips_counter_rotation() {
    let viewport = Viewport::default();
    let mut inward_doc = Document::new();
    let inward = build_run(&mut inward_doc, four_cards(Pointing::Inward, true), viewport);
    apply_stage(&mut inward_doc, &inward, Stage::Fan, &StageTimings::STANDARD);

    let mut outward_doc = Document::new();
    let outward = build_run(&mut outward_doc, four_cards(Pointing::Outward, true), viewport);
    apply_stage(&mut outward_doc, &outward, Stage::Fan, &StageTimings::STANDARD);

    for (a, b) in inward.deck.cards.iter().zip(&outward.deck.cards) {
        let ia = last_rotation(&inward_doc, a);
        let ob = last_rotation(&outward_doc, b);
        assert_eq!(ia.abs(), 90.0);
        assert_eq!(ia, -ob);
    }
}

#[test]
fn unaligned_fan_keeps_cards_upright() {
    let mut doc = Document::new();
    let run = build_run(&mut doc, four_cards(Pointing::Outward, false), Viewport::default());
    apply_stage(&mut doc, &run, Stage::Fan, &StageTimings::STANDARD);
    for card in &run.deck.cards {
        assert_eq!(last_rotation(&doc, card), -card.angle_deg);
    }
}

#[test]
fn disperse_doubles_radius_and_hides_cards() {
    let mut doc = Document::new();
    let viewport = Viewport::new(1000.0, 900.0);
    let run = build_run(&mut doc, four_cards(Pointing::Inward, true), viewport);
    apply_stage(&mut doc, &run, Stage::Fan, &StageTimings::STANDARD);
    apply_stage(&mut doc, &run, Stage::Disperse, &StageTimings::STANDARD);

    for card in &run.deck.cards {
        let style = doc.style(card.element).unwrap();
        assert_eq!(style.opacity, Some(0.0));
        assert_eq!(
            style.transform,
            Some(fan_transform(card.angle_deg, 56.0, -90.0))
        );
        // The shadow from the fan stage stays in place.
        assert_eq!(style.filter, Some(CARD_SHADOW));
    }
}

#[test]
fn resolve_fades_overlay_unless_holding() {
    let mut doc = Document::new();
    let run = build_run(&mut doc, TransitionOptions::default(), Viewport::default());
    apply_stage(&mut doc, &run, Stage::Resolve, &StageTimings::STANDARD);
    let style = doc.style(run.overlay.root).unwrap();
    assert_eq!(style.opacity, Some(0.0));
    assert_eq!(style.transition.as_ref().unwrap().duration_ms, 700);

    let mut doc = Document::new();
    let holding = TransitionOptions {
        hold_at_black: Some(true),
        ..TransitionOptions::default()
    };
    let run = build_run(&mut doc, holding, Viewport::default());
    apply_stage(&mut doc, &run, Stage::Resolve, &StageTimings::STANDARD);
    assert_eq!(doc.style(run.overlay.root).unwrap().effective_opacity(), 1.0);
}

#[test]
fn configured_ease_reaches_every_stage_transition() {
    let mut doc = Document::new();
    let options = TransitionOptions {
        ease: Some(Ease::EaseOut),
        ..four_cards(Pointing::Inward, true)
    };
    let run = build_run(&mut doc, options, Viewport::default());
    for stage in Stage::ALL {
        apply_stage(&mut doc, &run, stage, &StageTimings::STANDARD);
    }

    let mut styled = run.deck.cards.iter().map(|c| c.element).collect::<Vec<_>>();
    styled.push(run.caption);
    styled.push(run.overlay.root);
    for id in styled {
        let transition = doc.style(id).unwrap().transition.clone().unwrap();
        assert_eq!(transition.ease, Ease::EaseOut);
    }
}

#[test]
fn empty_deck_stages_are_no_ops() {
    let mut doc = Document::new();
    let options = TransitionOptions {
        card_count: Some(0),
        ..TransitionOptions::default()
    };
    let run = build_run(&mut doc, options, Viewport::default());
    let before = doc.len();
    for stage in Stage::ALL {
        apply_stage(&mut doc, &run, stage, &StageTimings::STANDARD);
    }
    assert_eq!(doc.len(), before);
    assert!(run.deck.cards.is_empty());
}

#[test]
fn stages_on_removed_overlay_are_ignored() {
    let mut doc = Document::new();
    let run = build_run(&mut doc, TransitionOptions::default(), Viewport::default());
    doc.remove(run.overlay.root);
    for stage in Stage::ALL {
        apply_stage(&mut doc, &run, stage, &StageTimings::STANDARD);
    }
    assert!(doc.is_empty());
}
