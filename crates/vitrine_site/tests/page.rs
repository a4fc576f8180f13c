use std::fs;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use vitrine_site::{
    render_page_with, ConfigError, PageOptions, SiteConfig, SwitcherAction, ThemeSwitcher,
    CONFIG_FILE,
};
use vitrine_theme::{
    AttributeMap, ColorScheme, MemoryStorage, ThemeMode, ThemeState, ThemeStore, COLOR_SCHEME_ATTR,
    THEME_MODE_ATTR,
};

fn options() -> PageOptions {
    PageOptions {
        year: 2024,
        ..PageOptions::default()
    }
}

#[test]
fn scheme_change_recolors_every_component() {
    let store = ThemeStore::ephemeral(ThemeState::default());
    let config = SiteConfig::default();

    let before = render_page_with(&store, &config, &options());
    assert!(before.contains("from-cyan-400 via-teal-400 to-emerald-400"));

    let switcher = ThemeSwitcher::new(&store);
    switcher.apply(
        SwitcherAction::Select(ColorScheme::Purple),
        &mut StdRng::seed_from_u64(1),
    );
    store.tick(std::time::Duration::from_secs(1));

    let after = render_page_with(&store, &config, &options());
    assert!(after.contains(r#"data-color-scheme="purple""#));
    assert!(after.contains("from-purple-400 via-pink-400 to-fuchsia-400"));
    assert!(after.contains("border-color: rgb(217,70,239)"));
    // nothing from the previous scheme survives
    assert!(!after.contains("cyan-"));
    assert!(!after.contains("teal-"));
    assert!(!after.contains("rgb(34,211,238)"));
}

#[test]
fn light_mode_page_has_no_dark_surfaces() {
    let store = ThemeStore::ephemeral(ThemeState::new(ColorScheme::Blue, ThemeMode::Light));
    let page = render_page_with(&store, &SiteConfig::default(), &options());

    assert!(page.contains(r#"data-theme="light""#));
    assert!(!page.contains("bg-slate-900"));
    assert!(!page.contains("bg-slate-800"));
    assert!(page.contains("text-gray-900"));
    assert!(page.contains(r#"title="Switch to dark theme""#));
}

#[test]
fn render_matches_mirrored_root_attributes() {
    let root = Arc::new(AttributeMap::new());
    let store = ThemeStore::initialize(Arc::new(MemoryStorage::new()), root.clone());
    store.set_color_scheme(ColorScheme::Orange);
    store.toggle_theme_mode();

    let page = render_page_with(&store, &SiteConfig::default(), &options());
    let scheme = root.get(COLOR_SCHEME_ATTR).unwrap();
    let mode = root.get(THEME_MODE_ATTR).unwrap();

    assert_eq!((scheme.as_str(), mode.as_str()), ("orange", "light"));
    assert!(page.contains(&format!(r#"{COLOR_SCHEME_ATTR}="{scheme}""#)));
    assert!(page.contains(&format!(r#"{THEME_MODE_ATTR}="{mode}""#)));
    assert!(page.contains(&root.to_attribute_string()));
}

#[test]
fn config_loads_from_site_directory() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = SiteConfig::default();
    config.site.owner = "Grace Hopper".into();
    config.site.lang = "es".into();
    fs::write(dir.path().join(CONFIG_FILE), config.to_toml().unwrap()).unwrap();

    let loaded = SiteConfig::load(dir.path()).unwrap();
    assert_eq!(loaded, config);

    let store = ThemeStore::ephemeral(ThemeState::default());
    let page = render_page_with(&store, &loaded, &options());
    assert!(page.contains(r#"<html lang="es""#));
    assert!(page.contains("© 2024 Grace Hopper."));
    assert!(page.contains(r#"title="Cambiar a tema claro""#));
}

#[test]
fn missing_config_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = SiteConfig::load(dir.path()).unwrap_err();

    match err {
        ConfigError::Read { path, .. } => assert_eq!(path, dir.path().join(CONFIG_FILE)),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn every_client_hook_has_a_consumer() {
    let store = ThemeStore::ephemeral(ThemeState::default());
    let page = render_page_with(&store, &SiteConfig::default(), &options());

    let inline: Vec<&str> = page
        .split("<script>")
        .skip(1)
        .filter_map(|rest| rest.split("</script>").next())
        .collect();
    let behavior = inline
        .iter()
        .find(|body| body.starts_with("const vitrine="))
        .expect("client behavior script");
    let markup = page.replace(behavior, "");

    for hook in [
        "data-action",
        "data-open-dialog",
        "cursor-follower",
        "cursor-ripple",
        "data-x",
        "data-y",
        "ambient-light",
        "data-opacity",
    ] {
        assert!(markup.contains(hook), "{hook} missing from markup");
        assert!(behavior.contains(hook), "{hook} has no consumer");
    }
    assert!(behavior.contains(r#"toggle:"toggle-mode""#));
    assert!(behavior.contains(r#"schemeKey:"colorScheme""#));
    assert!(behavior.contains(r#"modeKey:"themeMode""#));
}
