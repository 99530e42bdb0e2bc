use super::factory::{MetadataItemFactory, SplatItemFactory};
use super::item::ItemIntent;
use super::synchronizer::ListSynchronizer;
use crate::config::PanelConfig;
use crate::editor_bus::EditorBus;
use crate::events::SceneEvent;
use crate::scene::SceneModel;

pub type SplatList<S, B> = ListSynchronizer<SplatItemFactory, S, B>;
pub type MetadataList<S, B> = ListSynchronizer<MetadataItemFactory, S, B>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelList {
    Splats,
    Metadata,
}

/// The meta panel: a splat list and a metadata list over the same scene and bus.
pub struct ScenePanels<S, B> {
    pub splats: SplatList<S, B>,
    pub metadata: MetadataList<S, B>,
}

impl<S, B> ScenePanels<S, B>
where
    S: SceneModel + Clone,
    B: EditorBus + Clone,
{
    pub fn new(scene: S, bus: B, config: &PanelConfig) -> Self {
        Self {
            metadata: ListSynchronizer::new(MetadataItemFactory::new(config), scene.clone(), bus.clone(), config),
            splats: ListSynchronizer::new(SplatItemFactory::new(config), scene, bus, config),
        }
    }

    pub fn dispatch(&mut self, event: &SceneEvent) {
        tracing::trace!(%event, "panel event");
        self.metadata.handle_event(event);
        self.splats.handle_event(event);
    }

    pub fn handle_intent(&mut self, list: PanelList, intent: ItemIntent) {
        match list {
            PanelList::Splats => self.splats.handle_intent(intent),
            PanelList::Metadata => self.metadata.handle_intent(intent),
        }
    }
}
