use std::fmt;

/// Slot handle for a view item. Ids are never reused, so an intent aimed at a removed item
/// can not land on a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEvent {
    Selected,
    Unselected,
    Shown,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Attached,
    Detached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemAction {
    Click,
    ToggleVisible,
    Remove,
    ShowMetadata,
}

/// Something the user did to an item, reported by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemIntent {
    pub item: ItemId,
    pub action: ItemAction,
}

impl ItemIntent {
    pub fn new(item: ItemId, action: ItemAction) -> Self {
        Self { item, action }
    }
}

#[derive(Debug, Clone)]
pub struct ViewItem {
    id: ItemId,
    name: String,
    selected: bool,
    visible: bool,
    annotation_text: String,
    state: ItemState,
}

impl ViewItem {
    pub fn new(id: ItemId, name: impl Into<String>, visible: bool, annotation_text: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            selected: false,
            visible,
            annotation_text: annotation_text.into(),
            state: ItemState::Attached,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn annotation_text(&self) -> &str {
        &self.annotation_text
    }

    pub fn state(&self) -> ItemState {
        self.state
    }

    pub fn is_attached(&self) -> bool {
        self.state == ItemState::Attached
    }

    pub fn set_name(&mut self, name: &str) -> bool {
        if !self.is_attached() || self.name == name {
            return false;
        }
        self.name = name.to_string();
        true
    }

    /// Returns the transition, or `None` when the value is unchanged or the item is detached.
    pub fn set_selected(&mut self, selected: bool) -> Option<ItemEvent> {
        if !self.is_attached() || self.selected == selected {
            return None;
        }
        self.selected = selected;
        Some(if selected { ItemEvent::Selected } else { ItemEvent::Unselected })
    }

    pub fn set_visible(&mut self, visible: bool) -> Option<ItemEvent> {
        if !self.is_attached() || self.visible == visible {
            return None;
        }
        self.visible = visible;
        Some(if visible { ItemEvent::Shown } else { ItemEvent::Hidden })
    }

    pub(crate) fn detach(&mut self) {
        self.state = ItemState::Detached;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_report_only_real_transitions() {
        let mut item = ViewItem::new(ItemId(1), "room", true, "No Metadata");
        assert_eq!(item.set_selected(true), Some(ItemEvent::Selected));
        assert_eq!(item.set_selected(true), None);
        assert_eq!(item.set_selected(false), Some(ItemEvent::Unselected));
        assert_eq!(item.set_visible(true), None);
        assert_eq!(item.set_visible(false), Some(ItemEvent::Hidden));
        assert!(!item.visible());
        assert_eq!(item.set_visible(true), Some(ItemEvent::Shown));
    }

    #[test]
    fn all_four_state_combinations_are_reachable() {
        let mut item = ViewItem::new(ItemId(2), "a", true, "");
        let mut seen = Vec::new();
        for selected in [false, true] {
            for visible in [true, false] {
                item.set_selected(selected);
                item.set_visible(visible);
                seen.push((item.selected(), item.visible()));
            }
        }
        assert_eq!(seen, vec![(false, true), (false, false), (true, true), (true, false)]);
    }

    #[test]
    fn detached_item_ignores_updates() {
        let mut item = ViewItem::new(ItemId(3), "a", true, "");
        item.detach();
        assert_eq!(item.state(), ItemState::Detached);
        assert_eq!(item.set_selected(true), None);
        assert_eq!(item.set_visible(false), None);
        assert!(!item.set_name("b"));
        assert_eq!(item.name(), "a");
        assert!(item.visible());
    }
}
