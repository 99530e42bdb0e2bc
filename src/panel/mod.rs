pub mod factory;
pub mod item;
pub mod panels;
pub mod registry;
pub mod synchronizer;

pub use factory::{ItemFactory, ItemSource, MetadataItemFactory, SplatItemFactory};
pub use item::{ItemAction, ItemEvent, ItemId, ItemIntent, ItemState, ViewItem};
pub use panels::{MetadataList, PanelList, ScenePanels, SplatList};
pub use registry::Registry;
pub use synchronizer::{ItemNotification, ListSynchronizer};
