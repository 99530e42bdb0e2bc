use crate::events::PopupId;
use crate::scene::SplatScene;
use bevy_ecs::prelude::Entity;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKind {
    YesNo,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub kind: PopupKind,
    pub title: String,
    pub message: String,
}

impl Popup {
    pub fn yes_no(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind: PopupKind::YesNo, title: title.into(), message: message.into() }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind: PopupKind::Info, title: title.into(), message: message.into() }
    }
}

/// Requests the panels send upstream. Popup answers come back later as
/// `SceneEvent::PopupResolved` carrying the id returned by `show_popup`.
pub trait EditorBus {
    fn current_selection(&self) -> Option<Entity>;
    fn request_selection(&mut self, entity: Entity);
    fn show_popup(&mut self, popup: Popup) -> PopupId;
}

impl<B: EditorBus + ?Sized> EditorBus for Rc<RefCell<B>> {
    fn current_selection(&self) -> Option<Entity> {
        self.borrow().current_selection()
    }

    fn request_selection(&mut self, entity: Entity) {
        self.borrow_mut().request_selection(entity)
    }

    fn show_popup(&mut self, popup: Popup) -> PopupId {
        self.borrow_mut().show_popup(popup)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusRequest {
    SetSelection(Entity),
    ShowPopup { id: PopupId, popup: Popup },
}

/// Headless bus: selection is forwarded to a shared `SplatScene`, popups wait in a queue
/// until something answers them, and every request is recorded.
pub struct SceneBus {
    scene: Rc<RefCell<SplatScene>>,
    pending_popups: VecDeque<(PopupId, Popup)>,
    requests: Vec<BusRequest>,
    next_popup: u64,
}

impl SceneBus {
    pub fn new(scene: Rc<RefCell<SplatScene>>) -> Self {
        Self { scene, pending_popups: VecDeque::new(), requests: Vec::new(), next_popup: 1 }
    }

    pub fn requests(&self) -> &[BusRequest] {
        &self.requests
    }

    pub fn take_requests(&mut self) -> Vec<BusRequest> {
        std::mem::take(&mut self.requests)
    }

    pub fn pending_popups(&self) -> impl Iterator<Item = &(PopupId, Popup)> {
        self.pending_popups.iter()
    }

    pub fn next_popup(&mut self) -> Option<(PopupId, Popup)> {
        self.pending_popups.pop_front()
    }

    pub fn selection_requests(&self) -> impl Iterator<Item = Entity> + '_ {
        self.requests.iter().filter_map(|request| match request {
            BusRequest::SetSelection(entity) => Some(*entity),
            BusRequest::ShowPopup { .. } => None,
        })
    }
}

impl EditorBus for SceneBus {
    fn current_selection(&self) -> Option<Entity> {
        self.scene.borrow().selection()
    }

    fn request_selection(&mut self, entity: Entity) {
        self.requests.push(BusRequest::SetSelection(entity));
        self.scene.borrow_mut().select(Some(entity));
    }

    fn show_popup(&mut self, popup: Popup) -> PopupId {
        let id = PopupId(self.next_popup);
        self.next_popup += 1;
        self.requests.push(BusRequest::ShowPopup { id, popup: popup.clone() });
        self.pending_popups.push_back((id, popup));
        id
    }
}
