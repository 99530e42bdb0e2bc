use splat_panels::config::PanelConfig;
use splat_panels::editor_bus::{BusRequest, PopupKind};
use splat_panels::events::PopupAction;
use splat_panels::panel::{ItemAction, ItemIntent, PanelList};
use splat_panels::scene::{SceneModel, SplatScene};
use splat_panels::session::PanelSession;

fn session_with_foo() -> (PanelSession, bevy_ecs::entity::Entity) {
    let mut scene = SplatScene::new();
    let foo = scene.spawn_splat("Foo", Vec::new());
    scene.spawn_splat("Bar", Vec::new());
    (PanelSession::new(scene, &PanelConfig::default()), foo)
}

fn request_removal(session: &mut PanelSession, entity: bevy_ecs::entity::Entity) {
    let id = session.panels.splats.item_for(entity).expect("item listed").id();
    session.intent(PanelList::Splats, ItemIntent::new(id, ItemAction::Remove));
}

fn confirm_popups(session: &PanelSession) -> Vec<String> {
    session
        .bus()
        .borrow()
        .requests()
        .iter()
        .filter_map(|request| match request {
            BusRequest::ShowPopup { popup, .. } if popup.kind == PopupKind::YesNo => Some(popup.message.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn remove_request_issues_one_confirmation_naming_the_entity() {
    let (mut session, foo) = session_with_foo();
    request_removal(&mut session, foo);

    let prompts = confirm_popups(&session);
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Foo"), "prompt was {}", prompts[0]);
    let (_, popup) = session.next_popup().expect("popup open");
    assert_eq!(popup.title, "Remove Splat");
    assert_eq!(session.panels.splats.pending_confirmations(), 1);
}

#[test]
fn declined_or_dismissed_confirmation_keeps_the_entity() {
    let (mut session, foo) = session_with_foo();
    for action in [PopupAction::No, PopupAction::Dismissed, PopupAction::Other("later".to_string())] {
        request_removal(&mut session, foo);
        assert!(session.resolve_next_popup(action));
        assert_eq!(session.panels.splats.len(), 2);
        assert!(session.scene().borrow().contains(foo));
    }
    assert_eq!(session.panels.splats.pending_confirmations(), 0);
    assert!(!session.resolve_next_popup(PopupAction::Yes));
}

#[test]
fn accepted_confirmation_destroys_exactly_once() {
    let (mut session, foo) = session_with_foo();
    request_removal(&mut session, foo);
    assert!(session.resolve_next_popup(PopupAction::Yes));

    assert!(!session.scene().borrow().contains(foo));
    assert_eq!(session.panels.splats.len(), 1);
    assert_eq!(session.panels.metadata.len(), 1);
    assert!(session.panels.splats.item_for(foo).is_none());
    assert_eq!(session.panels.splats.pending_confirmations(), 0);
}

#[test]
fn entity_removed_while_confirmation_is_open_is_tolerated() {
    let (mut session, foo) = session_with_foo();
    request_removal(&mut session, foo);

    session.scene().borrow_mut().destroy(foo).expect("removed by another path");
    session.pump();
    assert!(session.panels.splats.item_for(foo).is_none());

    assert!(session.resolve_next_popup(PopupAction::Yes));
    assert_eq!(session.panels.splats.len(), 1);
    assert_eq!(session.scene().borrow().elements().len(), 1);
}

#[test]
fn metadata_popup_is_informational() {
    let mut scene = SplatScene::new();
    let room = scene.spawn_splat("room", vec!["METADATA {\"scan\":\"lidar\"}".to_string()]);
    let mut session = PanelSession::new(scene, &PanelConfig::default());
    let id = session.panels.splats.item_for(room).expect("item").id();
    session.intent(PanelList::Splats, ItemIntent::new(id, ItemAction::ShowMetadata));

    let (_, popup) = session.next_popup().expect("info popup");
    assert_eq!(popup.kind, PopupKind::Info);
    assert_eq!(popup.message, "{\n  \"scan\": \"lidar\"\n}");
    assert!(session.resolve_next_popup(PopupAction::Yes));
    assert!(session.scene().borrow().contains(room));
    assert_eq!(session.panels.splats.pending_confirmations(), 0);
}
