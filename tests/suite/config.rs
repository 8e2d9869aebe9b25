//! Config files feeding a running app.

use std::fs;
use std::time::Duration;

use peaky_engine::{App, NavCause, PeakyConfig, Route};
use tempfile::tempdir;

fn load(contents: &str) -> PeakyConfig {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write config");
    PeakyConfig::load_from(&path)
        .expect("config parses")
        .expect("config exists")
}

#[test]
fn configured_timings_drive_autoplay() {
    let config = load(
        r#"
[carousel]
autoplay_interval_ms = 1000
cooldown_ms = 500
"#,
    );
    let mut app = App::new(Some(&config)).expect("built-in deck");
    if app.ui_options().reduced_motion {
        // PEAKY_REDUCED_MOTION is set in this environment.
        return;
    }

    let fired = app.tick(Duration::from_millis(2500));
    assert_eq!(fired.len(), 2);
    assert!(fired.iter().all(|t| t.cause == NavCause::Autoplay));
    assert_eq!(app.showcase().map(|s| s.current_index()), Some(2));
}

#[test]
fn start_path_selects_initial_page() {
    let config = load(
        r#"
[app]
start_path = "/privacy"
"#,
    );
    let mut app = App::new(Some(&config)).expect("built-in deck");
    assert_eq!(app.route(), Route::Privacy);
    assert!(app.showcase().is_none());
    assert!(app.tick(Duration::from_secs(60)).is_empty());

    app.navigate_to(Route::Home);
    let showcase = app.showcase().expect("home mounts the showcase");
    assert_eq!(showcase.current_index(), 0);
}

#[test]
fn unknown_start_path_lands_on_not_found() {
    let config = load(
        r#"
[app]
start_path = "/levels/42"
"#,
    );
    let app = App::new(Some(&config)).expect("built-in deck");
    assert_eq!(app.route(), Route::NotFound);
    assert_eq!(app.location().path, "/levels/42");
}

#[test]
fn malformed_config_reports_its_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[carousel\nautoplay_interval_ms = ").expect("write config");

    let err = PeakyConfig::load_from(&path).expect_err("invalid toml");
    assert_eq!(err.path(), &path);
}
