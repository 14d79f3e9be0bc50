//! Retained page tree the transition builds into and mutates.
//!
//! A host mirrors this tree into whatever actually draws it (a browser DOM through bindings, a
//! native compositor, a test). Elements live in an arena and are addressed by generational
//! [`ElementId`]s: slots freed by [`Document::remove`] are reused, but a handle to a removed
//! element carries a stale generation and simply stops resolving.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::scene::style::Style;

/// Handle to an element: arena slot plus the generation the slot had when it was created.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ElementId {
    index: u32,
    generation: u32,
}

impl ElementId {
    /// Arena slot, shared with whatever element previously lived there.
    pub fn index(self) -> u32 {
        self.index
    }

    /// Bumped every time the slot is freed.
    pub fn generation(self) -> u32 {
        self.generation
    }
}

/// One node of the page tree.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Element {
    /// Tag name, e.g. `div`.
    pub tag: String,
    /// Space-separated class list.
    pub class_name: String,
    /// Inline style.
    pub style: Style,
    /// Text content, for the caption.
    pub text: Option<String>,
    /// Raw markup for vector layers (the star field).
    pub inner_svg: Option<String>,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

impl Element {
    fn new(tag: &str, class_name: &str) -> Self {
        Self {
            tag: tag.to_string(),
            class_name: class_name.to_string(),
            style: Style::default(),
            text: None,
            inner_svg: None,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Parent element, `None` when detached (or for `<body>`).
    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    /// Children in document order.
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    /// Whether `class` is one of the element's classes.
    pub fn has_class(&self, class: &str) -> bool {
        self.class_name.split_whitespace().any(|c| c == class)
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    element: Option<Element>,
}

/// Arena-backed page tree rooted at `<body>`.
#[derive(Debug)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
    body: ElementId,
}

/// The document as shared between the facade, running sequencers and the host.
pub type SharedDocument = Arc<Mutex<Document>>;

impl Document {
    /// An empty document holding only `<body>`.
    pub fn new() -> Self {
        Self {
            slots: vec![Slot {
                generation: 0,
                element: Some(Element::new("body", "")),
            }],
            free: Vec::new(),
            live: 1,
            body: ElementId {
                index: 0,
                generation: 0,
            },
        }
    }

    /// Wrap the document for sharing between the host and running sequencers.
    pub fn shared(self) -> SharedDocument {
        Arc::new(Mutex::new(self))
    }

    /// The root element.
    pub fn body(&self) -> ElementId {
        self.body
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str, class_name: &str) -> ElementId {
        let element = Some(Element::new(tag, class_name));
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.element = element;
            return ElementId {
                index,
                generation: slot.generation,
            };
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            element,
        });
        ElementId {
            index,
            generation: 0,
        }
    }

    /// The element behind `id`, unless it has been removed.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.element.as_ref())
    }

    /// Mutable access to the element behind `id`, unless it has been removed.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.element.as_mut())
    }

    /// Inline style of `id`, unless it has been removed.
    pub fn style(&self, id: ElementId) -> Option<&Style> {
        self.get(id).map(|el| &el.style)
    }

    /// Mutate an element's inline style. Returns `false` if the element no longer exists.
    pub fn update_style(&mut self, id: ElementId, f: impl FnOnce(&mut Style)) -> bool {
        match self.get_mut(id) {
            Some(el) => {
                f(&mut el.style);
                true
            }
            None => false,
        }
    }

    /// Append `child` as the last child of `parent`, moving it if it was attached elsewhere.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if self.get(parent).is_none() || self.get(child).is_none() {
            return;
        }
        // Refuse to move an element under its own subtree.
        let mut cursor = Some(parent);
        while let Some(cur) = cursor {
            if cur == child {
                return;
            }
            cursor = self.get(cur).and_then(|el| el.parent);
        }
        self.detach(child);
        if let Some(p) = self.get_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.get_mut(child) {
            c.parent = Some(parent);
        }
    }

    /// Remove `id` and its whole subtree from the document. Returns `false` if it was already gone.
    pub fn remove(&mut self, id: ElementId) -> bool {
        if id == self.body || self.get(id).is_none() {
            return false;
        }
        self.detach(id);

        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(el) = self.free_slot(next) {
                stack.extend(el.children);
            }
        }
        true
    }

    /// Whether `id` exists and is reachable from `<body>`.
    pub fn is_attached(&self, id: ElementId) -> bool {
        let mut cursor = Some(id);
        while let Some(cur) = cursor {
            if cur == self.body {
                return true;
            }
            cursor = self.get(cur).and_then(|el| el.parent);
        }
        false
    }

    /// Attached elements carrying `class`, in document order.
    pub fn elements_by_class(&self, class: &str) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack = vec![self.body];
        while let Some(id) = stack.pop() {
            let Some(el) = self.get(id) else {
                continue;
            };
            if el.has_class(class) {
                out.push(id);
            }
            stack.extend(el.children.iter().rev().copied());
        }
        out
    }

    /// Number of live elements, `<body>` included.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether nothing but `<body>` is left.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    /// Arena slots allocated so far, live or free. Bounded by the peak live count.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn free_slot(&mut self, id: ElementId) -> Option<Element> {
        let slot = self
            .slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)?;
        let element = slot.element.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.live -= 1;
        Some(element)
    }

    fn detach(&mut self, id: ElementId) {
        let Some(parent) = self.get(id).and_then(|el| el.parent) else {
            return;
        };
        if let Some(p) = self.get_mut(parent) {
            p.children.retain(|c| *c != id);
        }
        if let Some(el) = self.get_mut(id) {
            el.parent = None;
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Lock a shared document, recovering the tree if another holder panicked mid-write.
pub fn lock_document(doc: &SharedDocument) -> MutexGuard<'_, Document> {
    doc.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/document.rs"]
mod tests;
