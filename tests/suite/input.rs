//! Terminal events driven through the app the way the frame loop does.

use std::time::Duration;

use crossterm::event::KeyCode;
use peaky_engine::carousel::DEFAULT_COOLDOWN;
use peaky_engine::{NavCause, Route, RouteChange};
use peaky_tui::apply_frame;
use peaky_types::ui::UiOptions;

use crate::common::{
    Harness, SCREEN_HEIGHT, app_with_options, center, code, ctrl, drag, key, press, release,
    released,
};

#[test]
fn arrow_keys_navigate_and_pause_autoplay() {
    let mut h = Harness::at("/");

    h.send(code(KeyCode::Right));
    assert_eq!(h.index(), 1);
    h.send(code(KeyCode::Left));
    h.send(code(KeyCode::Left));
    assert_eq!(h.index(), 3);

    let showcase = h.app.showcase().expect("home hosts the showcase");
    assert!(!showcase.is_auto_playing());
    assert!(showcase.pending_timers().cooldown.is_some());
}

#[test]
fn frame_advances_clock_before_applying_input() {
    let mut h = Harness::at("/");
    let elapsed = Duration::from_millis(1000);

    let quit = apply_frame(&mut h.app, elapsed, [code(KeyCode::Right)], &h.hits);
    assert!(!quit);

    // The cooldown is measured from when the key arrived, not from the
    // previous frame.
    let showcase = h.app.showcase().expect("home hosts the showcase");
    assert_eq!(showcase.current_index(), 1);
    assert_eq!(showcase.pending_timers().cooldown, Some(elapsed + DEFAULT_COOLDOWN));
}

#[test]
fn frame_with_quit_key_reports_quit() {
    let mut h = Harness::at("/");
    assert!(apply_frame(&mut h.app, Duration::ZERO, [key('q')], &h.hits));
}

#[test]
fn digit_keys_jump_to_slides() {
    let mut h = Harness::at("/");

    h.send(key('3'));
    assert_eq!(h.index(), 2);

    // Out of range: rejected, state untouched.
    h.send(key('9'));
    assert_eq!(h.index(), 2);
}

#[test]
fn key_release_is_ignored() {
    let mut h = Harness::at("/");
    h.send(released('2'));
    assert_eq!(h.index(), 0);
    assert!(h.auto_playing());
}

#[test]
fn drag_left_past_threshold_swipes_forward() {
    let mut h = Harness::at("/");
    let area = h.showcase_area();
    let row = area.y + 2;

    h.send(press(area.x + 30, row));
    h.send(drag(area.x + 25, row));
    h.send(drag(area.x + 20, row));
    h.send(release(area.x + 20, row));

    assert_eq!(h.index(), 1);
    let last = h.app.last_transition().expect("swipe navigated");
    assert_eq!(last.cause, NavCause::Swipe);
}

#[test]
fn drag_right_past_threshold_swipes_backward() {
    let mut h = Harness::at("/");
    let area = h.showcase_area();
    let row = area.y + 2;

    h.send(press(area.x + 10, row));
    h.send(drag(area.x + 20, row));
    h.send(release(area.x + 20, row));

    assert_eq!(h.index(), 3);
}

#[test]
fn short_drag_does_not_navigate_but_arms_cooldown() {
    let mut h = Harness::at("/");
    let area = h.showcase_area();
    let row = area.y + 2;

    // 4 cells is 32px, under the 50px threshold.
    h.send(press(area.x + 30, row));
    h.send(drag(area.x + 26, row));
    h.send(release(area.x + 26, row));

    assert_eq!(h.index(), 0);
    let showcase = h.app.showcase().expect("mounted");
    assert!(!showcase.is_auto_playing());
    assert!(showcase.pending_timers().cooldown.is_some());

    h.app.tick(Duration::from_millis(3000));
    assert!(h.auto_playing());
}

#[test]
fn clicks_outside_the_showcase_leave_autoplay_running() {
    let mut h = Harness::at("/");
    let area = h.showcase_area();

    // Navigation bar, hero and footer rows.
    for row in [0, area.y.saturating_sub(2), SCREEN_HEIGHT - 1] {
        h.send(press(10, row));
        h.send(drag(2, row));
        h.send(release(2, row));
    }

    assert_eq!(h.index(), 0);
    assert!(h.auto_playing());
    let showcase = h.app.showcase().expect("mounted");
    assert!(showcase.pending_timers().cooldown.is_none());
    assert_eq!(showcase.state().gesture.start, None);
}

#[test]
fn release_outside_still_ends_a_gesture_started_inside() {
    let mut h = Harness::at("/");
    let area = h.showcase_area();
    let row = area.y + 2;

    h.send(press(area.x + 30, row));
    h.send(drag(area.x + 20, 0));
    h.send(release(area.x + 20, 0));

    assert_eq!(h.index(), 1);
    assert_eq!(h.app.showcase().map(|s| s.state().gesture.start), Some(None));
}

#[test]
fn clicking_controls_navigates() {
    let mut h = Harness::at("/");

    let (column, row) = center(h.hits.next().expect("next control is drawn"));
    h.send(press(column, row));
    h.send(release(column, row));
    assert_eq!(h.index(), 1);
    assert_eq!(
        h.app.last_transition().map(|t| t.cause),
        Some(NavCause::Manual)
    );

    let (column, row) = center(h.hits.previous().expect("previous control is drawn"));
    h.send(press(column, row));
    h.send(press(column, row));
    assert_eq!(h.index(), 3);

    assert!(!h.auto_playing());
    h.app.tick(Duration::from_millis(3000));
    assert!(h.auto_playing());
}

#[test]
fn clicking_a_dot_jumps_to_its_slide() {
    let mut h = Harness::at("/");

    let (column, row) = center(h.hits.slide(2).expect("dot for slide 3 is drawn"));
    h.send(press(column, row));
    h.send(release(column, row));

    assert_eq!(h.index(), 2);
    assert!(!h.auto_playing());
}

#[test]
fn reduced_motion_disables_previous_and_next_targets() {
    let options = UiOptions {
        ascii_only: true,
        reduced_motion: true,
        ..UiOptions::default()
    };
    let h = Harness::new(app_with_options("/", options));

    assert!(h.hits.previous().is_none());
    assert!(h.hits.next().is_none());
    assert!(h.hits.slide(0).is_some());
}

#[test]
fn pages_without_showcase_have_no_targets() {
    let mut h = Harness::at("/delete-account");
    assert!(h.hits.showcase().is_none());

    h.send(code(KeyCode::Right));
    h.send(press(50, 20));
    h.send(release(10, 20));

    assert!(h.app.showcase().is_none());
    assert!(h.app.last_transition().is_none());
}

#[test]
fn route_keys_and_back() {
    let mut h = Harness::at("/");

    h.send(key('p'));
    assert_eq!(h.app.route(), Route::Privacy);
    assert!(h.app.showcase().is_none());

    h.send(key('d'));
    assert_eq!(h.app.route(), Route::DeleteData);

    h.send(key('b'));
    assert_eq!(h.app.route(), Route::Privacy);
    h.send(code(KeyCode::Backspace));
    assert_eq!(h.app.route(), Route::Home);
    assert!(h.app.showcase().is_some());
    assert!(!h.app.can_go_back());

    assert_eq!(h.app.go_back(), RouteChange::Unchanged);
}

#[test]
fn motion_key_toggles_reduced_motion_live() {
    let mut h = Harness::at("/");

    h.send(key('m'));
    assert!(h.app.ui_options().reduced_motion);
    let showcase = h.app.showcase().expect("mounted");
    assert!(showcase.reduced_motion());
    assert!(!showcase.is_auto_playing());
    assert_eq!(showcase.pending_timers().count(), 0);
    assert!(h.hits.next().is_none());

    assert!(h.app.tick(Duration::from_secs(30)).is_empty());

    h.send(key('m'));
    assert!(h.auto_playing());
    assert!(h.hits.next().is_some());
}

#[test]
fn quit_keys() {
    let mut h = Harness::at("/");
    assert!(!h.send(key('x')));
    assert!(h.send(key('q')));

    let mut h = Harness::at("/privacy");
    assert!(h.send(ctrl('c')));
}
