use super::item::{ItemId, ViewItem};
use bevy_ecs::prelude::Entity;
use std::collections::HashMap;

struct Slot {
    entity: Entity,
    item: ViewItem,
}

/// Entity <-> item mapping with both directions indexed and display order kept.
#[derive(Default)]
pub struct Registry {
    slots: HashMap<ItemId, Slot>,
    by_entity: HashMap<Entity, ItemId>,
    order: Vec<ItemId>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands the item back when the entity or item id is already registered.
    pub fn insert(&mut self, entity: Entity, item: ViewItem) -> Result<(), ViewItem> {
        let id = item.id();
        if self.by_entity.contains_key(&entity) || self.slots.contains_key(&id) {
            return Err(item);
        }
        self.by_entity.insert(entity, id);
        self.slots.insert(id, Slot { entity, item });
        self.order.push(id);
        Ok(())
    }

    pub fn remove(&mut self, entity: Entity) -> Option<ViewItem> {
        let id = self.by_entity.remove(&entity)?;
        self.order.retain(|candidate| *candidate != id);
        self.slots.remove(&id).map(|slot| slot.item)
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.by_entity.contains_key(&entity)
    }

    pub fn item_id(&self, entity: Entity) -> Option<ItemId> {
        self.by_entity.get(&entity).copied()
    }

    pub fn entity_of(&self, id: ItemId) -> Option<Entity> {
        self.slots.get(&id).map(|slot| slot.entity)
    }

    pub fn get(&self, id: ItemId) -> Option<&ViewItem> {
        self.slots.get(&id).map(|slot| &slot.item)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut ViewItem> {
        self.slots.get_mut(&id).map(|slot| &mut slot.item)
    }

    pub fn item_for(&self, entity: Entity) -> Option<&ViewItem> {
        self.item_id(entity).and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Items in display (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &ViewItem)> {
        self.order.iter().filter_map(|id| self.slots.get(id)).map(|slot| (slot.entity, &slot.item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    #[test]
    fn lookups_work_in_both_directions_and_keep_order() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let mut registry = Registry::new();
        registry.insert(b, ViewItem::new(ItemId(1), "b", true, "")).expect("insert b");
        registry.insert(a, ViewItem::new(ItemId(2), "a", true, "")).expect("insert a");

        assert_eq!(registry.entity_of(ItemId(2)), Some(a));
        assert_eq!(registry.item_id(b), Some(ItemId(1)));
        let names: Vec<_> = registry.iter().map(|(_, item)| item.name().to_string()).collect();
        assert_eq!(names, vec!["b", "a"]);

        let removed = registry.remove(b).expect("b registered");
        assert_eq!(removed.name(), "b");
        assert_eq!(registry.entity_of(ItemId(1)), None);
        assert!(registry.remove(b).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_entity_is_rejected() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let mut registry = Registry::new();
        registry.insert(a, ViewItem::new(ItemId(1), "a", true, "")).expect("first insert");
        let rejected = registry.insert(a, ViewItem::new(ItemId(2), "again", true, "")).unwrap_err();
        assert_eq!(rejected.id(), ItemId(2));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.item_for(a).map(|item| item.name()), Some("a"));
    }
}
