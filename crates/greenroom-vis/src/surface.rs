//! The consumed rendering layer.
//!
//! The widget toolkit that actually draws the lobby list lives outside
//! this core; [`ListSurface`] is the narrow seam it is consumed through.
//! [`RecordingSurface`] is the in-memory backend used by tests and
//! headless runs.

/// Handle to one rendered list item, issued by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(pub u64);

/// Opaque descriptor for the item to instantiate per peer.
///
/// What a template resolves to (a widget prefab, a DOM node, a test
/// record) is the surface's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTemplate {
    name: String,
}

impl ItemTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// External list-rendering primitive.
///
/// The reconciler only ever appends after a clear, so implementations
/// need no item reordering or removal beyond [`clear`](Self::clear).
pub trait ListSurface {
    /// Destroy every rendered item.
    fn clear(&mut self);

    /// Instantiate one item from the template, appended at the end.
    fn create_item(&mut self, template: &ItemTemplate) -> ItemId;

    /// Set an item's display label.
    fn set_label(&mut self, item: ItemId, text: &str);

    /// Toggle an item's visibility/activation.
    fn set_active(&mut self, item: ItemId, active: bool);
}

/// In-memory [`ListSurface`] that records rendered items.
///
/// Stands in for the real widget toolkit in tests, the way a headless
/// simulation stands in for a live mesh.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    next_id: u64,
    items: Vec<RecordedItem>,
}

/// One item as the recording surface saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedItem {
    pub id: ItemId,
    pub template: String,
    pub label: String,
    pub active: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items currently rendered, in append order.
    pub fn items(&self) -> &[RecordedItem] {
        &self.items
    }

    /// Labels currently rendered, in append order.
    pub fn labels(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.label.as_str()).collect()
    }

    fn find_mut(&mut self, item: ItemId) -> Option<&mut RecordedItem> {
        self.items.iter_mut().find(|i| i.id == item)
    }
}

impl ListSurface for RecordingSurface {
    fn clear(&mut self) {
        self.items.clear();
    }

    fn create_item(&mut self, template: &ItemTemplate) -> ItemId {
        // Ids keep incrementing across clears, like real widget handles.
        self.next_id += 1;
        let id = ItemId(self.next_id);
        self.items.push(RecordedItem {
            id,
            template: template.name().to_string(),
            label: String::new(),
            active: false,
        });
        id
    }

    fn set_label(&mut self, item: ItemId, text: &str) {
        if let Some(recorded) = self.find_mut(item) {
            recorded.label = text.to_string();
        }
    }

    fn set_active(&mut self, item: ItemId, active: bool) {
        if let Some(recorded) = self.find_mut(item) {
            recorded.active = active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_surface_tracks_items() {
        let mut surface = RecordingSurface::new();
        let template = ItemTemplate::new("row");

        let a = surface.create_item(&template);
        surface.set_label(a, "Ann");
        surface.set_active(a, true);

        assert_eq!(surface.labels(), vec!["Ann"]);
        assert!(surface.items()[0].active);

        surface.clear();
        assert!(surface.items().is_empty());
    }

    #[test]
    fn item_ids_survive_clear_without_reuse() {
        let mut surface = RecordingSurface::new();
        let template = ItemTemplate::new("row");

        let first = surface.create_item(&template);
        surface.clear();
        let second = surface.create_item(&template);

        assert_ne!(first, second);
    }
}
