use std::{collections::HashMap, fs, path::PathBuf};

use serde::Deserialize;

pub const SETTINGS_FILE: &str = "site.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub bind_addr: String,
    pub log_filter: String,
    pub out_dir: PathBuf,
    pub asset_base: String,
    pub title: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".into(),
            log_filter: "info".into(),
            out_dir: PathBuf::from("dist"),
            asset_base: String::new(),
            title: None,
        }
    }
}

/// Defaults, then `site.toml`, then environment variables.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();
    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        apply_file(&mut settings, &raw);
    }
    apply_env(&mut settings, |key| std::env::var(key).ok());
    settings
}

pub fn apply_file(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) else {
        tracing::warn!(file = SETTINGS_FILE, "ignoring unreadable settings file");
        return;
    };
    if let Some(v) = file_cfg.get("bind_addr") {
        settings.bind_addr = v.clone();
    }
    if let Some(v) = file_cfg.get("log") {
        settings.log_filter = v.clone();
    }
    if let Some(v) = file_cfg.get("out_dir") {
        settings.out_dir = PathBuf::from(v);
    }
    if let Some(v) = file_cfg.get("asset_base") {
        settings.asset_base = normalize_asset_base(v);
    }
    if let Some(v) = file_cfg.get("title") {
        settings.title = Some(v.clone());
    }
}

pub fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("SITE_BIND") {
        settings.bind_addr = v;
    }
    if let Some(v) = lookup("APP__BIND_ADDR") {
        settings.bind_addr = v;
    }

    if let Some(v) = lookup("RUST_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = lookup("APP__LOG") {
        settings.log_filter = v;
    }

    if let Some(v) = lookup("APP__OUT_DIR") {
        settings.out_dir = PathBuf::from(v);
    }

    if let Some(v) = lookup("APP__ASSET_BASE") {
        settings.asset_base = normalize_asset_base(&v);
    }

    if let Some(v) = lookup("APP__TITLE") {
        settings.title = Some(v);
    }
}

/// Asset URLs are joined as `{base}/assets/...`, so the base never ends in a slash.
pub fn normalize_asset_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
