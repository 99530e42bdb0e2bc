use crate::editor_bus::EditorBus;
use crate::panel::{ItemAction, ItemIntent, PanelList, ScenePanels, ViewItem};
use crate::scene::SceneModel;
use egui::Ui;

const INFO_ICON: &str = "🛈";
const SHOWN_ICON: &str = "👁";
const HIDDEN_ICON: &str = "—";
const DELETE_ICON: &str = "🗑";

/// Draws the splat rows and returns what the user clicked. Nothing is mutated here.
pub fn show_splat_rows<'a>(ui: &mut Ui, items: impl IntoIterator<Item = &'a ViewItem>) -> Vec<ItemIntent> {
    let mut intents = Vec::new();
    for item in items {
        ui.push_id(item.id().0, |ui| {
            ui.horizontal(|ui| {
                if ui.selectable_label(item.selected(), item.name()).clicked() {
                    intents.push(ItemIntent::new(item.id(), ItemAction::Click));
                }
                if ui.small_button(INFO_ICON).on_hover_text("Show metadata").clicked() {
                    intents.push(ItemIntent::new(item.id(), ItemAction::ShowMetadata));
                }
                let (icon, hint) = if item.visible() { (SHOWN_ICON, "Hide") } else { (HIDDEN_ICON, "Show") };
                if ui.small_button(icon).on_hover_text(hint).clicked() {
                    intents.push(ItemIntent::new(item.id(), ItemAction::ToggleVisible));
                }
                if ui.small_button(DELETE_ICON).on_hover_text("Remove from scene").clicked() {
                    intents.push(ItemIntent::new(item.id(), ItemAction::Remove));
                }
            });
        });
    }
    intents
}

pub fn show_metadata_rows<'a>(ui: &mut Ui, items: impl IntoIterator<Item = &'a ViewItem>) -> Vec<ItemIntent> {
    let mut intents = Vec::new();
    for item in items {
        ui.push_id(item.id().0, |ui| {
            let response = ui.selectable_label(item.selected(), item.name());
            ui.weak(item.annotation_text());
            if response.clicked() {
                intents.push(ItemIntent::new(item.id(), ItemAction::Click));
            }
        });
    }
    intents
}

pub fn show_meta_panel<S, B>(ctx: &egui::Context, panels: &ScenePanels<S, B>) -> Vec<(PanelList, ItemIntent)>
where
    S: SceneModel + Clone,
    B: EditorBus + Clone,
{
    let mut intents = Vec::new();
    egui::SidePanel::right("splat_meta_panel").default_width(320.0).show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(INFO_ICON);
            ui.heading("Metadata Panel");
        });
        ui.separator();
        egui::ScrollArea::vertical().id_salt("metadata_list").max_height(200.0).show(ui, |ui| {
            intents.extend(
                show_metadata_rows(ui, panels.metadata.items())
                    .into_iter()
                    .map(|intent| (PanelList::Metadata, intent)),
            );
        });
        ui.separator();
        ui.label(format!("Splats ({})", panels.splats.len()));
        egui::ScrollArea::vertical().id_salt("splat_list").show(ui, |ui| {
            intents.extend(
                show_splat_rows(ui, panels.splats.items()).into_iter().map(|intent| (PanelList::Splats, intent)),
            );
        });
    });
    intents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PanelConfig;
    use crate::scene::SplatScene;
    use crate::session::PanelSession;

    #[test]
    fn rendering_without_input_produces_no_intents() {
        let mut scene = SplatScene::new();
        scene.spawn_splat("room", vec!["METADATA {\"a\":1}".to_string()]);
        scene.spawn_splat("garden", Vec::new());
        let session = PanelSession::new(scene, &PanelConfig::default());

        let ctx = egui::Context::default();
        let mut intents = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            intents = show_meta_panel(ctx, &session.panels);
        });
        assert!(intents.is_empty());
        assert_eq!(session.panels.splats.len(), 2);
    }
}
