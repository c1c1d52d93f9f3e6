use std::collections::HashMap;

use super::*;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_bind_locally_and_build_into_dist() {
    let settings = Settings::default();
    assert_eq!(settings.bind_addr, "127.0.0.1:5000");
    assert_eq!(settings.log_filter, "info");
    assert_eq!(settings.out_dir, PathBuf::from("dist"));
    assert_eq!(settings.asset_base, "");
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    apply_file(
        &mut settings,
        "bind_addr = \"0.0.0.0:8080\"\nasset_base = \"/static/\"\ntitle = \"Portfolio\"\nout_dir = \"public\"\n",
    );
    assert_eq!(settings.bind_addr, "0.0.0.0:8080");
    assert_eq!(settings.asset_base, "/static");
    assert_eq!(settings.title.as_deref(), Some("Portfolio"));
    assert_eq!(settings.out_dir, PathBuf::from("public"));
}

#[test]
fn malformed_file_is_ignored() {
    let mut settings = Settings::default();
    apply_file(&mut settings, "bind_addr = [");
    assert_eq!(settings, Settings::default());
}

#[test]
fn app_prefixed_env_wins_over_plain_env() {
    let mut settings = Settings::default();
    apply_env(
        &mut settings,
        env(&[
            ("SITE_BIND", "127.0.0.1:1"),
            ("APP__BIND_ADDR", "127.0.0.1:2"),
            ("RUST_LOG", "debug"),
            ("APP__LOG", "trace"),
        ]),
    );
    assert_eq!(settings.bind_addr, "127.0.0.1:2");
    assert_eq!(settings.log_filter, "trace");
}

#[test]
fn env_overrides_file() {
    let mut settings = Settings::default();
    apply_file(&mut settings, "asset_base = \"/a\"\nout_dir = \"public\"\n");
    apply_env(
        &mut settings,
        env(&[
            ("APP__ASSET_BASE", "https://cdn.example.com/"),
            ("APP__OUT_DIR", "/tmp/site"),
        ]),
    );
    assert_eq!(settings.asset_base, "https://cdn.example.com");
    assert_eq!(settings.out_dir, PathBuf::from("/tmp/site"));
}

#[test]
fn asset_base_trims_trailing_slashes() {
    assert_eq!(normalize_asset_base(" /static// "), "/static");
    assert_eq!(normalize_asset_base("/"), "");
}
