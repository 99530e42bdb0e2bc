use anyhow::{anyhow, Result};
use splat_panels::cli::{ToolArgs, ToolCommand};
use splat_panels::config::PanelConfig;
use splat_panels::panel::{ItemAction, ItemIntent, PanelList};
use splat_panels::scene::{SceneDescription, SplatScene};
use splat_panels::session::PanelSession;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    if let Err(err) = run() {
        eprintln!("error: {err:?}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = ToolArgs::parse_from_env()?;
    let mut config = match &args.config {
        Some(path) => PanelConfig::load(path)?,
        None => PanelConfig::default(),
    };
    config.apply_overrides(&args.overrides);

    let description = SceneDescription::load_from_path(&args.scene)?;
    let mut session = PanelSession::new(SplatScene::from_description(&description), &config);

    match &args.command {
        ToolCommand::List => print_panels(&session),
        ToolCommand::Metadata { name } => {
            let intent = intent_for(&session, name, ItemAction::ShowMetadata)?;
            session.intent(PanelList::Splats, intent);
            print_next_popup(&session);
        }
        ToolCommand::Remove { name } => {
            let intent = intent_for(&session, name, ItemAction::Remove)?;
            session.intent(PanelList::Splats, intent);
            print_next_popup(&session);
            println!("> {:?}", args.answer);
            session.resolve_next_popup(args.answer.clone());
            print_panels(&session);
        }
    }
    Ok(())
}

fn intent_for(session: &PanelSession, name: &str, action: ItemAction) -> Result<ItemIntent> {
    let entity = session.scene().borrow().find_by_name(name).ok_or_else(|| anyhow!("no element named '{name}'"))?;
    let item = session
        .panels
        .splats
        .item_for(entity)
        .ok_or_else(|| anyhow!("'{name}' is not listed in the splat panel"))?;
    Ok(ItemIntent::new(item.id(), action))
}

fn print_next_popup(session: &PanelSession) {
    if let Some((id, popup)) = session.next_popup() {
        println!("[{id}] {}", popup.title);
        println!("{}", popup.message);
    }
}

fn print_panels(session: &PanelSession) {
    println!("Metadata Panel");
    for item in session.panels.metadata.items() {
        println!("  {}: {}", item.name(), item.annotation_text());
    }
    println!("Splats ({})", session.panels.splats.len());
    for item in session.panels.splats.items() {
        let marker = if item.selected() { '*' } else { ' ' };
        let visibility = if item.visible() { "shown" } else { "hidden" };
        println!(" {marker} {} [{visibility}]", item.name());
    }
}
