pub mod annotation;
pub mod cli;
pub mod config;
pub mod editor_bus;
pub mod events;
pub mod panel;
pub mod scene;
pub mod session;
#[cfg(feature = "editor")]
pub mod ui;

pub use config::PanelConfig;
pub use panel::{ListSynchronizer, ScenePanels};
pub use session::PanelSession;
