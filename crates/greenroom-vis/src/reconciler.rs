//! Snapshot-to-surface reconciliation.

use tracing::trace;

use greenroom_roster::{format_label, RosterSnapshot};

use crate::surface::{ItemId, ItemTemplate, ListSurface};

/// Reconciles roster snapshots onto a list surface.
///
/// Owns the surface handle, the item template, and the collection of
/// previously-rendered item ids — all session-scoped state, not
/// process-wide globals. Rendering policy is full teardown and rebuild;
/// see the crate docs for the trade-off.
#[derive(Debug)]
pub struct ListReconciler<S> {
    surface: Option<S>,
    template: Option<ItemTemplate>,
    rendered: Vec<ItemId>,
}

impl<S: ListSurface> ListReconciler<S> {
    /// Reconciler bound to a surface and template.
    pub fn new(surface: S, template: ItemTemplate) -> Self {
        Self {
            surface: Some(surface),
            template: Some(template),
            rendered: Vec::new(),
        }
    }

    /// Reconciler with no surface attached; every render is a no-op.
    ///
    /// Covers the window where the session exists but the rendering layer
    /// has not produced a list widget (or its item template) yet.
    pub fn detached() -> Self {
        Self {
            surface: None,
            template: None,
            rendered: Vec::new(),
        }
    }

    /// Attach a surface and template after the fact.
    pub fn attach(&mut self, surface: S, template: ItemTemplate) {
        self.surface = Some(surface);
        self.template = Some(template);
        self.rendered.clear();
    }

    /// Render a snapshot: tear down every previous item, then one item
    /// per peer in snapshot order, labeled via the shared rendering rule.
    ///
    /// No-op if the surface or template is unavailable — never fails,
    /// never partially renders. Idempotent: the same snapshot twice
    /// yields an equivalent item set.
    pub fn render(&mut self, snapshot: &RosterSnapshot) {
        let (surface, template) = match (self.surface.as_mut(), self.template.as_ref()) {
            (Some(surface), Some(template)) => (surface, template),
            _ => return,
        };

        surface.clear();
        self.rendered.clear();

        for peer in snapshot.iter() {
            let item = surface.create_item(template);
            surface.set_label(item, &format_label(peer));
            surface.set_active(item, true);
            self.rendered.push(item);
        }

        trace!(peers = snapshot.len(), "rebuilt roster list");
    }

    /// Number of items currently rendered.
    pub fn rendered_count(&self) -> usize {
        self.rendered.len()
    }

    /// The bound surface, if any.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }
}
