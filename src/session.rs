use crate::config::PanelConfig;
use crate::editor_bus::{Popup, SceneBus};
use crate::events::{PopupAction, PopupId, SceneEvent};
use crate::panel::{ItemIntent, PanelList, ScenePanels};
use crate::scene::SplatScene;
use std::cell::RefCell;
use std::rc::Rc;

pub type SharedScene = Rc<RefCell<SplatScene>>;
pub type SharedBus = Rc<RefCell<SceneBus>>;

/// Upper bound on event rounds per pump; a feedback loop between panels and scene would
/// otherwise spin forever.
const MAX_PUMP_ROUNDS: usize = 64;

/// Headless editor loop: owns the scene, the bus and the panels and shuttles events
/// between them.
pub struct PanelSession {
    scene: SharedScene,
    bus: SharedBus,
    pub panels: ScenePanels<SharedScene, SharedBus>,
}

impl PanelSession {
    pub fn new(scene: SplatScene, config: &PanelConfig) -> Self {
        let scene = Rc::new(RefCell::new(scene));
        let bus = Rc::new(RefCell::new(SceneBus::new(Rc::clone(&scene))));
        let panels = ScenePanels::new(Rc::clone(&scene), Rc::clone(&bus), config);
        let mut session = Self { scene, bus, panels };
        session.pump();
        session
    }

    pub fn scene(&self) -> &SharedScene {
        &self.scene
    }

    pub fn bus(&self) -> &SharedBus {
        &self.bus
    }

    /// Feeds pending scene events to the panels until the scene is quiet. Returns the
    /// number of events dispatched.
    pub fn pump(&mut self) -> usize {
        let mut dispatched = 0;
        for _ in 0..MAX_PUMP_ROUNDS {
            let events = self.scene.borrow_mut().drain_events();
            if events.is_empty() {
                return dispatched;
            }
            for event in &events {
                self.panels.dispatch(event);
            }
            dispatched += events.len();
        }
        tracing::warn!(rounds = MAX_PUMP_ROUNDS, "scene kept producing events, stopping pump");
        dispatched
    }

    pub fn intent(&mut self, list: PanelList, intent: ItemIntent) {
        self.panels.handle_intent(list, intent);
        self.pump();
    }

    pub fn next_popup(&self) -> Option<(PopupId, Popup)> {
        self.bus.borrow().pending_popups().next().cloned()
    }

    /// Answers the oldest open popup. Returns `false` when none is open.
    pub fn resolve_next_popup(&mut self, action: PopupAction) -> bool {
        let Some((id, _)) = self.bus.borrow_mut().next_popup() else {
            return false;
        };
        self.panels.dispatch(&SceneEvent::PopupResolved { id, action });
        self.pump();
        true
    }
}
