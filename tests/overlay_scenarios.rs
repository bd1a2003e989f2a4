/*
 * Overlay Scenario Tests
 *
 * The click-counter game and navigation toggle driven through a manual
 * clock, the way the app drives them from nannou's elapsed time.
 */

use std::time::Duration;

use nannou::prelude::*;
use neural_mesh::interaction::HACK_MESSAGE;
use neural_mesh::{Interaction, MeshParams, OverlayClicks, OverlayTimings, Viewport};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn overlay() -> Interaction {
    Interaction::new(OverlayTimings::default(), StdRng::seed_from_u64(17))
}

// A frame at `at` in which the navigation toggle was clicked
fn click(overlay: &mut Interaction, viewport: &mut Viewport, at: u64) {
    let clicks = OverlayClicks { toggle: true, link: false };
    overlay.step(ms(at), viewport, &MeshParams::default(), clicks);
}

#[test]
fn click_just_after_window_expiry_counts_from_one() {
    let mut overlay = overlay();
    let mut viewport = Viewport::new(1024, 768);

    click(&mut overlay, &mut viewport, 0);
    click(&mut overlay, &mut viewport, 500);

    // the window from the second click closed at 1500; the next frame is at 1510
    click(&mut overlay, &mut viewport, 1510);
    assert_eq!(overlay.click_count, 1);
    assert!(!overlay.markers.message_shown);
    assert!(overlay.markers.hack_alert);
    assert!(overlay.hack_window_pending());
}

#[test]
fn three_quick_clicks_unlock_then_reset() {
    let mut overlay = overlay();
    let mut viewport = Viewport::new(1024, 768);

    click(&mut overlay, &mut viewport, 0);
    click(&mut overlay, &mut viewport, 400);
    click(&mut overlay, &mut viewport, 800);

    assert_eq!(overlay.click_count, 0);
    assert!(overlay.markers.message_shown);
    assert!(overlay.markers.hack_alert);
    assert!(!overlay.hack_window_pending());
    assert_eq!(HACK_MESSAGE, "SYSTEM UNLOCKED: WELCOME, HACKER!");

    // the message holds for three seconds
    overlay.poll(ms(3799), &mut viewport);
    assert!(overlay.markers.message_shown);
    overlay.poll(ms(3800), &mut viewport);
    assert!(!overlay.markers.message_shown);
    assert!(!overlay.markers.hack_alert);

    // a fourth click well after the third starts a fresh count
    click(&mut overlay, &mut viewport, 3900);
    assert_eq!(overlay.click_count, 1);
}

#[test]
fn fourth_click_after_window_counts_from_one() {
    let mut overlay = overlay();
    let mut viewport = Viewport::new(1024, 768);

    click(&mut overlay, &mut viewport, 0);
    click(&mut overlay, &mut viewport, 300);
    click(&mut overlay, &mut viewport, 600);
    assert_eq!(overlay.click_count, 0);

    click(&mut overlay, &mut viewport, 1601);
    assert_eq!(overlay.click_count, 1);
    assert!(overlay.markers.hack_alert);
}

#[test]
fn two_clicks_then_idle_resets_without_message() {
    let mut overlay = overlay();
    let mut viewport = Viewport::new(1024, 768);

    click(&mut overlay, &mut viewport, 0);
    click(&mut overlay, &mut viewport, 250);
    assert_eq!(overlay.click_count, 2);

    overlay.poll(ms(1249), &mut viewport);
    assert_eq!(overlay.click_count, 2);

    overlay.poll(ms(1250), &mut viewport);
    assert_eq!(overlay.click_count, 0);
    assert!(!overlay.markers.hack_alert);
    assert!(!overlay.markers.message_shown);
}

#[test]
fn slow_clicks_never_unlock() {
    let mut overlay = overlay();
    let mut viewport = Viewport::new(1024, 768);

    for i in 0..6 {
        click(&mut overlay, &mut viewport, i * 1100);
        assert_eq!(overlay.click_count, 1);
    }
    assert!(!overlay.markers.message_shown);
}

#[test]
fn mobile_menu_opens_and_link_closes_it() {
    let mut overlay = overlay();
    let mut viewport = Viewport::new(480, 800);

    click(&mut overlay, &mut viewport, 0);
    assert!(overlay.markers.nav_open);
    assert!(overlay.markers.active().contains(&"nav-open"));

    let link = OverlayClicks { toggle: false, link: true };
    overlay.step(ms(50), &mut viewport, &MeshParams::default(), link);
    assert!(!overlay.markers.nav_open);
}

#[test]
fn touch_drag_is_momentary() {
    let params = MeshParams::default();
    let mut overlay = overlay();
    let mut viewport = Viewport::new(480, 800);

    overlay.touch_moved(ms(0), &mut viewport, vec2(100.0, 100.0), &params);
    overlay.touch_moved(ms(60), &mut viewport, vec2(110.0, 100.0), &params);
    assert_eq!(viewport.pointer, Some(vec2(110.0, 100.0)));

    // the first sample's clear fires even though a newer sample arrived
    overlay.poll(ms(100), &mut viewport);
    assert!(viewport.pointer.is_none());
}
