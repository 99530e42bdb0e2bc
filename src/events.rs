use bevy_ecs::prelude::Entity;
use std::fmt;

/// Handle for a popup shown through the editor bus. Allocated by the bus, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PopupId(pub u64);

impl fmt::Display for PopupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "popup#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityField {
    Name,
    Visible,
}

impl EntityField {
    pub fn label(self) -> &'static str {
        match self {
            EntityField::Name => "name",
            EntityField::Visible => "visible",
        }
    }
}

/// How the user closed a popup. Anything other than `Yes` is a refusal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupAction {
    Yes,
    No,
    Dismissed,
    Other(String),
}

impl PopupAction {
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => PopupAction::Yes,
            "no" | "n" => PopupAction::No,
            "" | "cancel" | "dismiss" | "dismissed" => PopupAction::Dismissed,
            _ => PopupAction::Other(label.trim().to_string()),
        }
    }

    pub fn is_affirmative(&self) -> bool {
        matches!(self, PopupAction::Yes)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SceneEvent {
    ElementAdded { entity: Entity },
    ElementRemoved { entity: Entity },
    SelectionChanged { selection: Option<Entity> },
    FieldChanged { entity: Entity, field: EntityField },
    PopupResolved { id: PopupId, action: PopupAction },
}

impl SceneEvent {
    pub fn name_changed(entity: Entity) -> Self {
        SceneEvent::FieldChanged { entity, field: EntityField::Name }
    }

    pub fn visibility_changed(entity: Entity) -> Self {
        SceneEvent::FieldChanged { entity, field: EntityField::Visible }
    }
}

impl fmt::Display for SceneEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneEvent::ElementAdded { entity } => write!(f, "ElementAdded entity={}", entity.index()),
            SceneEvent::ElementRemoved { entity } => write!(f, "ElementRemoved entity={}", entity.index()),
            SceneEvent::SelectionChanged { selection: Some(entity) } => {
                write!(f, "SelectionChanged entity={}", entity.index())
            }
            SceneEvent::SelectionChanged { selection: None } => write!(f, "SelectionChanged entity=none"),
            SceneEvent::FieldChanged { entity, field } => {
                write!(f, "FieldChanged entity={} field={}", entity.index(), field.label())
            }
            SceneEvent::PopupResolved { id, action } => write!(f, "PopupResolved {id} action={action:?}"),
        }
    }
}

#[derive(Debug, Default)]
pub struct EventBus {
    events: Vec<SceneEvent>,
}

impl EventBus {
    pub fn push(&mut self, event: SceneEvent) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> Vec<SceneEvent> {
        self.events.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
