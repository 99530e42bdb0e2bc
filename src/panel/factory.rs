use super::item::{ItemAction, ItemId, ViewItem};
use crate::annotation::Annotation;
use crate::config::{AnnotationConfig, PanelConfig};
use crate::scene::ElementKind;

/// Entity fields captured when an item is built. Comments are read only here, so later
/// comment edits never reach an existing item.
pub struct ItemSource<'a> {
    pub name: &'a str,
    pub visible: bool,
    pub comments: &'a [String],
}

pub trait ItemFactory {
    fn tracked_kind(&self) -> ElementKind;

    /// Whether visibility changes on the entity are copied onto the item.
    fn mirrors_visibility(&self) -> bool {
        true
    }

    /// Row actions this flavor reacts to; anything else is dropped before dispatch.
    fn accepts(&self, _action: ItemAction) -> bool {
        true
    }

    fn create_item(&self, id: ItemId, source: ItemSource<'_>) -> ViewItem;
}

/// Rows of the splat list: the annotation is kept indented for the metadata popup.
#[derive(Debug, Clone)]
pub struct SplatItemFactory {
    kind: ElementKind,
    annotation: AnnotationConfig,
}

impl SplatItemFactory {
    pub fn new(config: &PanelConfig) -> Self {
        Self { kind: config.tracked_kind, annotation: config.annotation.clone() }
    }
}

impl Default for SplatItemFactory {
    fn default() -> Self {
        Self::new(&PanelConfig::default())
    }
}

impl ItemFactory for SplatItemFactory {
    fn tracked_kind(&self) -> ElementKind {
        self.kind
    }

    fn create_item(&self, id: ItemId, source: ItemSource<'_>) -> ViewItem {
        let annotation = Annotation::from_comments(source.comments, &self.annotation.prefix);
        ViewItem::new(id, source.name, source.visible, annotation.pretty_text(&self.annotation.placeholder))
    }
}

/// Rows of the metadata list: one line per entity, visibility is not tracked.
#[derive(Debug, Clone)]
pub struct MetadataItemFactory {
    kind: ElementKind,
    annotation: AnnotationConfig,
}

impl MetadataItemFactory {
    pub fn new(config: &PanelConfig) -> Self {
        Self { kind: config.tracked_kind, annotation: config.annotation.clone() }
    }
}

impl Default for MetadataItemFactory {
    fn default() -> Self {
        Self::new(&PanelConfig::default())
    }
}

impl ItemFactory for MetadataItemFactory {
    fn tracked_kind(&self) -> ElementKind {
        self.kind
    }

    fn mirrors_visibility(&self) -> bool {
        false
    }

    fn accepts(&self, action: ItemAction) -> bool {
        action == ItemAction::Click
    }

    fn create_item(&self, id: ItemId, source: ItemSource<'_>) -> ViewItem {
        let annotation = Annotation::from_comments(source.comments, &self.annotation.prefix);
        ViewItem::new(id, source.name, true, annotation.compact_text(&self.annotation.placeholder))
    }
}
