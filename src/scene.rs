use crate::events::{EventBus, SceneEvent};
use anyhow::{anyhow, Context, Result};
use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    #[default]
    Splat,
    Camera,
    Light,
}

/// Read access to the entity fields the panels project, plus the two mutations a panel
/// may request directly.
pub trait SceneModel {
    fn kind(&self, entity: Entity) -> Option<ElementKind>;
    fn name(&self, entity: Entity) -> Option<String>;
    fn visible(&self, entity: Entity) -> Option<bool>;
    fn comments(&self, entity: Entity) -> Vec<String>;
    fn set_visible(&mut self, entity: Entity, visible: bool) -> Result<()>;
    fn destroy(&mut self, entity: Entity) -> Result<()>;
}

impl<S: SceneModel + ?Sized> SceneModel for Rc<RefCell<S>> {
    fn kind(&self, entity: Entity) -> Option<ElementKind> {
        self.borrow().kind(entity)
    }

    fn name(&self, entity: Entity) -> Option<String> {
        self.borrow().name(entity)
    }

    fn visible(&self, entity: Entity) -> Option<bool> {
        self.borrow().visible(entity)
    }

    fn comments(&self, entity: Entity) -> Vec<String> {
        self.borrow().comments(entity)
    }

    fn set_visible(&mut self, entity: Entity, visible: bool) -> Result<()> {
        self.borrow_mut().set_visible(entity, visible)
    }

    fn destroy(&mut self, entity: Entity) -> Result<()> {
        self.borrow_mut().destroy(entity)
    }
}

#[derive(Component, Clone, Copy)]
pub struct SceneElement {
    pub kind: ElementKind,
}

#[derive(Component, Clone)]
pub struct DisplayName(pub String);

#[derive(Component, Clone, Copy)]
pub struct Shown(pub bool);

/// Free-text comments carried by the element's source asset, in file order.
#[derive(Component, Clone, Default)]
pub struct AssetComments(pub Vec<String>);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementDescription {
    #[serde(default)]
    pub kind: ElementKind,
    pub name: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

const fn default_visible() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub elements: Vec<ElementDescription>,
}

impl SceneDescription {
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).with_context(|| format!("Failed to read scene {}", path.display()))?;
        let description = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse scene {}", path.display()))?;
        Ok(description)
    }
}

/// Scene model backed by an ECS world. Owns selection and reports every change on its
/// event bus; callers drain the bus and feed the panels.
pub struct SplatScene {
    pub world: World,
    elements: Vec<Entity>,
    selection: Option<Entity>,
    events: EventBus,
}

impl Default for SplatScene {
    fn default() -> Self {
        Self::new()
    }
}

impl SplatScene {
    pub fn new() -> Self {
        Self { world: World::new(), elements: Vec::new(), selection: None, events: EventBus::default() }
    }

    pub fn from_description(description: &SceneDescription) -> Self {
        let mut scene = Self::new();
        for element in &description.elements {
            let entity = scene.spawn_element(element.kind, &element.name, element.comments.clone());
            if !element.visible {
                let _ = scene.set_visible(entity, false);
            }
        }
        scene
    }

    pub fn spawn_splat(&mut self, name: &str, comments: Vec<String>) -> Entity {
        self.spawn_element(ElementKind::Splat, name, comments)
    }

    pub fn spawn_element(&mut self, kind: ElementKind, name: &str, comments: Vec<String>) -> Entity {
        let entity = self
            .world
            .spawn((SceneElement { kind }, DisplayName(name.to_string()), Shown(true), AssetComments(comments)))
            .id();
        self.elements.push(entity);
        self.events.push(SceneEvent::ElementAdded { entity });
        entity
    }

    pub fn rename(&mut self, entity: Entity, name: &str) -> bool {
        let Some(mut display) = self.world.get_mut::<DisplayName>(entity) else {
            return false;
        };
        if display.0 == name {
            return false;
        }
        display.0 = name.to_string();
        self.events.push(SceneEvent::name_changed(entity));
        true
    }

    pub fn select(&mut self, selection: Option<Entity>) {
        let selection = selection.filter(|entity| self.contains(*entity));
        if self.selection == selection {
            return;
        }
        self.selection = selection;
        self.events.push(SceneEvent::SelectionChanged { selection });
    }

    pub fn selection(&self) -> Option<Entity> {
        self.selection
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.world.get::<SceneElement>(entity).is_some()
    }

    pub fn elements(&self) -> &[Entity] {
        &self.elements
    }

    pub fn find_by_name(&self, name: &str) -> Option<Entity> {
        self.elements.iter().copied().find(|entity| self.name(*entity).as_deref() == Some(name))
    }

    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        self.events.drain()
    }
}

impl SceneModel for SplatScene {
    fn kind(&self, entity: Entity) -> Option<ElementKind> {
        self.world.get::<SceneElement>(entity).map(|element| element.kind)
    }

    fn name(&self, entity: Entity) -> Option<String> {
        self.world.get::<DisplayName>(entity).map(|name| name.0.clone())
    }

    fn visible(&self, entity: Entity) -> Option<bool> {
        self.world.get::<Shown>(entity).map(|shown| shown.0)
    }

    fn comments(&self, entity: Entity) -> Vec<String> {
        self.world.get::<AssetComments>(entity).map(|comments| comments.0.clone()).unwrap_or_default()
    }

    fn set_visible(&mut self, entity: Entity, visible: bool) -> Result<()> {
        let mut shown = self
            .world
            .get_mut::<Shown>(entity)
            .ok_or_else(|| anyhow!("entity {} is not part of the scene", entity.index()))?;
        if shown.0 != visible {
            shown.0 = visible;
            self.events.push(SceneEvent::visibility_changed(entity));
        }
        Ok(())
    }

    fn destroy(&mut self, entity: Entity) -> Result<()> {
        if !self.contains(entity) {
            return Err(anyhow!("entity {} was already removed", entity.index()));
        }
        self.world.despawn(entity);
        self.elements.retain(|candidate| *candidate != entity);
        if self.selection == Some(entity) {
            self.selection = None;
            self.events.push(SceneEvent::SelectionChanged { selection: None });
        }
        self.events.push(SceneEvent::ElementRemoved { entity });
        Ok(())
    }
}
