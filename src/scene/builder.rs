//! Builds the transient overlay subtree. No timing knowledge lives here: everything is created in
//! its pre-animation state and attached immediately.

use rand::Rng;

use crate::{
    geometry::{fan::card_angles, responsive::ResponsiveGeometry},
    scene::{
        document::{Document, ElementId},
        stars::StarField,
        style::{Transform, Transition, TransitionProperty},
    },
};

/// Overlay root, fixed over the whole viewport.
pub const OVERLAY_CLASS: &str = "transition-overlay";
/// Black background layer.
pub const BACKGROUND_CLASS: &str = "transition-bg";
/// Star field layer.
pub const STARS_CLASS: &str = "transition-stars";
/// Centered mount the deck hangs from.
pub const DECK_MOUNT_CLASS: &str = "transition-deck-mount";
/// Deck container.
pub const DECK_CLASS: &str = "transition-deck";
/// One card.
pub const CARD_CLASS: &str = "transition-card";
/// Outer card layer.
pub const CARD_BORDER_CLASS: &str = "transition-card-border";
/// Middle card layer.
pub const CARD_CORE_CLASS: &str = "transition-card-core";
/// Inner card layer.
pub const CARD_EMBLEM_CLASS: &str = "transition-card-emblem";
/// Caption under the deck.
pub const CAPTION_CLASS: &str = "transition-bottom-text";

/// Resting scale of a card before the deck-in stage.
pub const CARD_IDLE_SCALE: f64 = 0.98;
/// Transition a card carries before any stage overrides it.
pub const CARD_IDLE_TRANSITION_MS: u64 = 350;

/// Handles to the overlay root and its background layers.
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    /// Root; removing it removes everything the run built.
    pub root: ElementId,
    /// Black background.
    pub background: ElementId,
    /// Star layer, absent when stars are disabled.
    pub stars: Option<ElementId>,
    /// Stars drawn in the star layer, zero when it is absent.
    pub star_count: usize,
}

/// One deck slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    /// Position in creation order.
    pub index: usize,
    /// Slot angle, `index * 360 / count`.
    pub angle_deg: f64,
    /// The card element.
    pub element: ElementId,
}

/// Handles to the deck containers and its cards.
#[derive(Clone, Debug, PartialEq)]
pub struct Deck {
    /// Centered mount.
    pub mount: ElementId,
    /// Deck container.
    pub deck: ElementId,
    /// Cards in creation order.
    pub cards: Vec<Card>,
}

/// Full-viewport overlay with its background and, optionally, the star layer. Attached as the
/// last child of `<body>`.
pub fn create_overlay<R: Rng + ?Sized>(
    doc: &mut Document,
    geometry: &ResponsiveGeometry,
    enable_stars: bool,
    rng: &mut R,
) -> Overlay {
    let root = doc.create_element("div", OVERLAY_CLASS);
    let background = doc.create_element("div", BACKGROUND_CLASS);
    doc.append_child(root, background);

    let (stars, star_count) = if enable_stars {
        let field = StarField::generate(geometry.star_count(), rng);
        let layer = doc.create_element("div", STARS_CLASS);
        if let Some(el) = doc.get_mut(layer) {
            el.inner_svg = Some(field.to_svg());
        }
        doc.append_child(root, layer);
        (Some(layer), field.len())
    } else {
        (None, 0)
    };

    doc.append_child(doc.body(), root);
    tracing::trace!(?root, star_count, "overlay attached");

    Overlay {
        root,
        background,
        stars,
        star_count,
    }
}

/// `card_count` three-layer cards (border, core, emblem) under a deck mount, each idle:
/// invisible, centered, slightly scaled down.
pub fn create_deck(doc: &mut Document, overlay: &Overlay, card_count: usize) -> Deck {
    let mount = doc.create_element("div", DECK_MOUNT_CLASS);
    let deck = doc.create_element("div", DECK_CLASS);
    doc.append_child(mount, deck);
    doc.append_child(overlay.root, mount);

    let cards = card_angles(card_count)
        .into_iter()
        .enumerate()
        .map(|(index, angle_deg)| {
            let element = doc.create_element("div", CARD_CLASS);
            let border = doc.create_element("div", CARD_BORDER_CLASS);
            let core = doc.create_element("div", CARD_CORE_CLASS);
            let emblem = doc.create_element("div", CARD_EMBLEM_CLASS);
            doc.append_child(core, emblem);
            doc.append_child(border, core);
            doc.append_child(element, border);
            doc.append_child(deck, element);

            doc.update_style(element, |s| {
                s.opacity = Some(0.0);
                s.transform = Some(Transform::centered(CARD_IDLE_SCALE));
                s.transition = Some(Transition::new(
                    CARD_IDLE_TRANSITION_MS,
                    &[TransitionProperty::Transform, TransitionProperty::Opacity],
                ));
            });

            Card {
                index,
                angle_deg,
                element,
            }
        })
        .collect::<Vec<_>>();

    tracing::trace!(cards = cards.len(), "deck built");
    Deck { mount, deck, cards }
}

/// The caption under the deck, starting invisible.
pub fn create_bottom_text(doc: &mut Document, overlay: &Overlay, text: &str) -> ElementId {
    let caption = doc.create_element("div", CAPTION_CLASS);
    if let Some(el) = doc.get_mut(caption) {
        el.text = Some(text.to_string());
    }
    doc.update_style(caption, |s| s.opacity = Some(0.0));
    doc.append_child(overlay.root, caption);
    caption
}

#[cfg(test)]
#[path = "../../tests/unit/scene/builder.rs"]
mod tests;
