use crate::config::PanelConfigOverrides;
use crate::events::PopupAction;
use anyhow::{anyhow, bail, Context, Result};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCommand {
    List,
    Metadata { name: String },
    Remove { name: String },
}

#[derive(Debug, Clone)]
pub struct ToolArgs {
    pub command: ToolCommand,
    pub scene: PathBuf,
    pub config: Option<PathBuf>,
    pub overrides: PanelConfigOverrides,
    pub answer: PopupAction,
}

impl ToolArgs {
    pub fn parse_from_env() -> Result<Self> {
        Self::parse(env::args())
    }

    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut iter = args.into_iter().map(|arg| arg.as_ref().to_string());
        let _ = iter.next(); // skip program name if present
        let mut positional = Vec::new();
        let mut config = None;
        let mut overrides = PanelConfigOverrides::default();
        let mut answer = PopupAction::Dismissed;
        while let Some(arg) = iter.next() {
            let Some(key) = arg.strip_prefix("--") else {
                positional.push(arg);
                continue;
            };
            let value = iter.next().ok_or_else(|| anyhow!("Expected a value after '{arg}'"))?;
            match key {
                "config" => config = Some(PathBuf::from(value)),
                "prefix" => overrides.prefix = Some(value),
                "placeholder" => overrides.placeholder = Some(value),
                "auto-select" => {
                    overrides.auto_select_on_show = Some(
                        parse_bool_flag("auto-select", &value).with_context(|| format!("Invalid '{arg}'"))?,
                    );
                }
                "answer" => answer = PopupAction::parse(&value),
                _ => bail!(
                    "Unknown flag '{arg}'. Supported flags: --config, --prefix, --placeholder, --auto-select, --answer."
                ),
            }
        }

        let mut positional = positional.into_iter();
        let command = positional.next().ok_or_else(|| anyhow!("Missing command (list, metadata, remove)"))?;
        let scene = positional.next().map(PathBuf::from).ok_or_else(|| anyhow!("{command} requires a scene path"))?;
        let command = match command.as_str() {
            "list" => ToolCommand::List,
            "metadata" => ToolCommand::Metadata {
                name: positional.next().ok_or_else(|| anyhow!("metadata requires a splat name"))?,
            },
            "remove" => ToolCommand::Remove {
                name: positional.next().ok_or_else(|| anyhow!("remove requires a splat name"))?,
            },
            other => bail!("Unknown command '{other}'. Use list, metadata or remove."),
        };
        if let Some(extra) = positional.next() {
            bail!("Unexpected argument '{extra}'");
        }
        Ok(Self { command, scene, config, overrides, answer })
    }
}

fn parse_bool_flag(flag: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        other => bail!("Invalid {flag} value '{other}'. Use on/off or true/false."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_remove_with_answer_and_overrides() {
        let args = ["tool", "remove", "scene.json", "Foo", "--answer", "yes", "--auto-select", "off"];
        let parsed = ToolArgs::parse(args).expect("parse args");
        assert_eq!(parsed.command, ToolCommand::Remove { name: "Foo".to_string() });
        assert_eq!(parsed.scene, PathBuf::from("scene.json"));
        assert_eq!(parsed.answer, PopupAction::Yes);
        assert_eq!(parsed.overrides.auto_select_on_show, Some(false));
        assert!(parsed.config.is_none());
    }

    #[test]
    fn list_defaults_to_dismissed_answer() {
        let parsed = ToolArgs::parse(["tool", "list", "s.json", "--config", "cfg.json"]).expect("parse args");
        assert_eq!(parsed.command, ToolCommand::List);
        assert_eq!(parsed.config, Some(PathBuf::from("cfg.json")));
        assert_eq!(parsed.answer, PopupAction::Dismissed);
        assert!(parsed.overrides.is_empty());
    }

    #[test]
    fn rejects_missing_values_and_unknown_input() {
        assert!(ToolArgs::parse(["tool"]).is_err());
        assert!(ToolArgs::parse(["tool", "list"]).is_err());
        assert!(ToolArgs::parse(["tool", "metadata", "s.json"]).is_err());
        assert!(ToolArgs::parse(["tool", "list", "s.json", "--prefix"]).is_err());
        assert!(ToolArgs::parse(["tool", "list", "s.json", "--bogus", "1"]).is_err());
        assert!(ToolArgs::parse(["tool", "explode", "s.json"]).is_err());
        assert!(ToolArgs::parse(["tool", "list", "s.json", "extra"]).is_err());
        assert!(ToolArgs::parse(["tool", "list", "s.json", "--auto-select", "maybe"]).is_err());
    }
}
