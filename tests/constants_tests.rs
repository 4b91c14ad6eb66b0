// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacity_band_is_ordered() {
    assert!(OPACITY_FLOOR > 0.0);
    assert!(OPACITY_FLOOR < OPACITY_INIT_MIN);
    assert!(OPACITY_INIT_MIN + OPACITY_INIT_SPAN <= OPACITY_DRIFT_TOP + 1e-6);
    assert!(OPACITY_DRIFT_TOP < OPACITY_CEILING);
    assert!(OPACITY_CEILING <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_limits_are_consistent() {
    // the fastest random start is already under the cap
    assert!(SPEED_SPAN / 2.0 * std::f32::consts::SQRT_2 < MAX_SPEED);
    assert!(POINTER_IMPULSE < MAX_SPEED);
    assert!(POINTER_RADIUS > LINK_DISTANCE);
    assert!(RADIUS_MIN - PULSE_AMPLITUDE >= MIN_DRAW_RADIUS);
    assert!(LINK_MAX_ALPHA > 0.0 && LINK_MAX_ALPHA <= 1.0);
}

#[test]
fn cap_is_reached_on_a_desktop_viewport() {
    let area = 1280.0_f32 * 720.0;
    assert!((area / AREA_PER_PARTICLE) as usize >= MAX_PARTICLES);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_thresholds_are_fractions() {
    for t in [
        PAGE_REVEAL_THRESHOLD,
        ABOUT_REVEAL_THRESHOLD,
        PROJECTS_REVEAL_THRESHOLD,
        RESUME_REVEAL_THRESHOLD,
        CONTACT_REVEAL_THRESHOLD,
    ] {
        assert!(t > 0.0 && t <= 1.0);
    }
    assert_eq!(STAGGER_STEP_MS, 200);
}

#[test]
fn element_ids_are_distinct() {
    let mut ids = vec![
        BACKGROUND_CANVAS_ID,
        HEADER_ID,
        MAIN_ID,
        MENU_TOGGLE_ID,
        MOBILE_MENU_ID,
        TYPEWRITER_ID,
        AVATAR_ID,
        ABOUT_ID,
        PROJECTS_ID,
        RESUME_ID,
        CONTACT_ID,
        PROJECT_PREVIEW_BODY_ID,
        RESUME_DOWNLOAD_ID,
        CONTACT_FORM_ID,
        CONTACT_SUBMIT_ID,
        CONTACT_SUBMIT_LABEL_ID,
    ];
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}
