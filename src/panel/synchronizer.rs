use super::factory::{ItemFactory, ItemSource};
use super::item::{ItemAction, ItemEvent, ItemId, ItemIntent, ViewItem};
use super::registry::Registry;
use crate::config::{PanelConfig, PopupConfig};
use crate::editor_bus::{EditorBus, Popup};
use crate::events::{EntityField, PopupAction, PopupId, SceneEvent};
use crate::scene::SceneModel;
use bevy_ecs::prelude::Entity;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemNotification {
    pub item: ItemId,
    pub event: ItemEvent,
}

/// Keeps one view item per live entity of the tracked kind and mediates every exchange
/// between those items, the scene model and the editor bus.
pub struct ListSynchronizer<F, S, B> {
    factory: F,
    scene: S,
    bus: B,
    popups: PopupConfig,
    auto_select_on_show: bool,
    registry: Registry,
    pending_removals: HashMap<PopupId, Entity>,
    notifications: Vec<ItemNotification>,
    next_item: u64,
}

impl<F, S, B> ListSynchronizer<F, S, B>
where
    F: ItemFactory,
    S: SceneModel,
    B: EditorBus,
{
    pub fn new(factory: F, scene: S, bus: B, config: &PanelConfig) -> Self {
        Self {
            factory,
            scene,
            bus,
            popups: config.popups.clone(),
            auto_select_on_show: config.auto_select_on_show,
            registry: Registry::new(),
            pending_removals: HashMap::new(),
            notifications: Vec::new(),
            next_item: 1,
        }
    }

    pub fn handle_event(&mut self, event: &SceneEvent) {
        match event {
            SceneEvent::ElementAdded { entity } => self.on_entity_added(*entity),
            SceneEvent::ElementRemoved { entity } => self.on_entity_removed(*entity),
            SceneEvent::SelectionChanged { selection } => self.on_selection_changed(*selection),
            SceneEvent::FieldChanged { entity, field } => self.on_field_changed(*entity, *field),
            SceneEvent::PopupResolved { id, action } => self.on_popup_resolved(*id, action),
        }
    }

    pub fn handle_intent(&mut self, intent: ItemIntent) {
        if !self.factory.accepts(intent.action) {
            tracing::trace!(item = %intent.item, action = ?intent.action, "action not offered by this list");
            return;
        }
        match intent.action {
            ItemAction::Click => self.on_item_clicked(intent.item),
            ItemAction::ToggleVisible => self.on_item_visibility_toggled(intent.item),
            ItemAction::Remove => self.on_item_remove_requested(intent.item),
            ItemAction::ShowMetadata => self.on_item_metadata_requested(intent.item),
        }
    }

    pub fn on_entity_added(&mut self, entity: Entity) {
        let Some(kind) = self.scene.kind(entity) else {
            tracing::trace!(entity = entity.index(), "added entity already gone, ignoring");
            return;
        };
        if kind != self.factory.tracked_kind() {
            return;
        }
        if self.registry.contains(entity) {
            tracing::error!(entity = entity.index(), "entity registered twice, dropping duplicate item");
            return;
        }
        let name = self.scene.name(entity).unwrap_or_default();
        let visible = self.scene.visible(entity).unwrap_or(true);
        let comments = self.scene.comments(entity);
        let id = ItemId(self.next_item);
        self.next_item += 1;
        let item = self.factory.create_item(id, ItemSource { name: &name, visible, comments: &comments });
        if let Err(item) = self.registry.insert(entity, item) {
            tracing::error!(entity = entity.index(), item = %item.id(), "item slot collision, dropping item");
        }
    }

    pub fn on_entity_removed(&mut self, entity: Entity) {
        if let Some(mut item) = self.registry.remove(entity) {
            item.detach();
        }
    }

    pub fn on_selection_changed(&mut self, selection: Option<Entity>) {
        let entries: Vec<(Entity, ItemId)> = self.registry.iter().map(|(entity, item)| (entity, item.id())).collect();
        for (entity, id) in entries {
            let Some(item) = self.registry.get_mut(id) else {
                continue;
            };
            if let Some(event) = item.set_selected(Some(entity) == selection) {
                self.notifications.push(ItemNotification { item: id, event });
            }
        }
    }

    pub fn on_field_changed(&mut self, entity: Entity, field: EntityField) {
        let Some(id) = self.registry.item_id(entity) else {
            tracing::trace!(entity = entity.index(), field = field.label(), "field change for unknown entity");
            return;
        };
        match field {
            EntityField::Name => {
                let Some(name) = self.scene.name(entity) else {
                    return;
                };
                if let Some(item) = self.registry.get_mut(id) {
                    item.set_name(&name);
                }
            }
            EntityField::Visible => {
                if !self.factory.mirrors_visibility() {
                    return;
                }
                let Some(visible) = self.scene.visible(entity) else {
                    return;
                };
                if let Some(event) = self.registry.get_mut(id).and_then(|item| item.set_visible(visible)) {
                    self.notifications.push(ItemNotification { item: id, event });
                }
            }
        }
    }

    /// Asks upstream for the selection; the item flag follows once `SelectionChanged` arrives.
    pub fn on_item_clicked(&mut self, id: ItemId) {
        if let Some(entity) = self.registry.entity_of(id) {
            self.bus.request_selection(entity);
        }
    }

    pub fn on_item_visibility_toggled(&mut self, id: ItemId) {
        let Some(entity) = self.registry.entity_of(id) else {
            return;
        };
        let Some(visible) = self.registry.get(id).map(|item| !item.visible()) else {
            return;
        };
        if let Err(err) = self.scene.set_visible(entity, visible) {
            tracing::warn!(entity = entity.index(), error = %err, "failed to apply visibility toggle");
            return;
        }
        if let Some(event) = self.registry.get_mut(id).and_then(|item| item.set_visible(visible)) {
            self.notifications.push(ItemNotification { item: id, event });
        }
        if visible && self.auto_select_on_show && self.bus.current_selection().is_none() {
            self.bus.request_selection(entity);
        }
    }

    pub fn on_item_remove_requested(&mut self, id: ItemId) {
        let Some(entity) = self.registry.entity_of(id) else {
            return;
        };
        let name = match self.scene.name(entity) {
            Some(name) => name,
            None => self.registry.get(id).map(|item| item.name().to_string()).unwrap_or_default(),
        };
        let popup = Popup::yes_no(self.popups.remove_title.clone(), self.popups.remove_message_for(&name));
        let popup_id = self.bus.show_popup(popup);
        self.pending_removals.insert(popup_id, entity);
    }

    pub fn on_item_metadata_requested(&mut self, id: ItemId) {
        let Some(item) = self.registry.get(id) else {
            return;
        };
        let popup = Popup::info(self.popups.metadata_title.clone(), item.annotation_text());
        let _ = self.bus.show_popup(popup);
    }

    /// Only a pending removal confirmed with `Yes` reaches the scene. The entity may have
    /// vanished while the popup was open, so a failed destroy is logged and dropped.
    pub fn on_popup_resolved(&mut self, id: PopupId, action: &PopupAction) {
        let Some(entity) = self.pending_removals.remove(&id) else {
            return;
        };
        if !action.is_affirmative() {
            tracing::debug!(entity = entity.index(), ?action, "removal declined");
            return;
        }
        if let Err(err) = self.scene.destroy(entity) {
            tracing::warn!(entity = entity.index(), error = %err, "confirmed removal failed");
        }
    }

    pub fn items(&self) -> impl Iterator<Item = &ViewItem> {
        self.registry.iter().map(|(_, item)| item)
    }

    pub fn item(&self, id: ItemId) -> Option<&ViewItem> {
        self.registry.get(id)
    }

    pub fn item_for(&self, entity: Entity) -> Option<&ViewItem> {
        self.registry.item_for(entity)
    }

    pub fn entity_of(&self, id: ItemId) -> Option<Entity> {
        self.registry.entity_of(id)
    }

    pub fn selected_item(&self) -> Option<&ViewItem> {
        self.items().find(|item| item.selected())
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn pending_confirmations(&self) -> usize {
        self.pending_removals.len()
    }

    pub fn drain_notifications(&mut self) -> Vec<ItemNotification> {
        std::mem::take(&mut self.notifications)
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }
}
