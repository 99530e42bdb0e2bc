use crate::scene::ElementKind;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct AnnotationConfig {
    #[serde(default = "AnnotationConfig::default_prefix")]
    pub prefix: String,
    #[serde(default = "AnnotationConfig::default_placeholder")]
    pub placeholder: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PopupConfig {
    #[serde(default = "PopupConfig::default_remove_title")]
    pub remove_title: String,
    /// `{name}` is replaced with the entity's display name.
    #[serde(default = "PopupConfig::default_remove_message")]
    pub remove_message: String,
    #[serde(default = "PopupConfig::default_metadata_title")]
    pub metadata_title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PanelConfig {
    #[serde(default = "PanelConfig::default_tracked_kind")]
    pub tracked_kind: ElementKind,
    #[serde(default = "PanelConfig::default_auto_select_on_show")]
    pub auto_select_on_show: bool,
    #[serde(default)]
    pub annotation: AnnotationConfig,
    #[serde(default)]
    pub popups: PopupConfig,
}

#[derive(Debug, Clone, Default)]
pub struct PanelConfigOverrides {
    pub prefix: Option<String>,
    pub placeholder: Option<String>,
    pub auto_select_on_show: Option<bool>,
}

impl AnnotationConfig {
    fn default_prefix() -> String {
        "METADATA ".to_string()
    }

    fn default_placeholder() -> String {
        "No Metadata".to_string()
    }
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self { prefix: Self::default_prefix(), placeholder: Self::default_placeholder() }
    }
}

impl PopupConfig {
    fn default_remove_title() -> String {
        "Remove Splat".to_string()
    }

    fn default_remove_message() -> String {
        "Are you sure you want to remove '{name}' from the scene? This operation can not be undone.".to_string()
    }

    fn default_metadata_title() -> String {
        "Splat Metadata".to_string()
    }

    pub fn remove_message_for(&self, name: &str) -> String {
        self.remove_message.replace("{name}", name)
    }
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            remove_title: Self::default_remove_title(),
            remove_message: Self::default_remove_message(),
            metadata_title: Self::default_metadata_title(),
        }
    }
}

impl PanelConfig {
    const fn default_tracked_kind() -> ElementKind {
        ElementKind::Splat
    }

    const fn default_auto_select_on_show() -> bool {
        true
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read panel config {}", path.display()))?;
        let cfg = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse panel config {}", path.display()))?;
        Ok(cfg)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                tracing::warn!(error = ?err, "panel config load failed, falling back to defaults");
                Self::default()
            }
        }
    }

    pub fn apply_overrides(&mut self, overrides: &PanelConfigOverrides) {
        if let Some(prefix) = &overrides.prefix {
            self.annotation.prefix = prefix.clone();
        }
        if let Some(placeholder) = &overrides.placeholder {
            self.annotation.placeholder = placeholder.clone();
        }
        if let Some(auto_select) = overrides.auto_select_on_show {
            self.auto_select_on_show = auto_select;
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            tracked_kind: Self::default_tracked_kind(),
            auto_select_on_show: Self::default_auto_select_on_show(),
            annotation: AnnotationConfig::default(),
            popups: PopupConfig::default(),
        }
    }
}

impl PanelConfigOverrides {
    pub fn is_empty(&self) -> bool {
        self.prefix.is_none() && self.placeholder.is_none() && self.auto_select_on_show.is_none()
    }
}
