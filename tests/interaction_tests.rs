// Host-side tests for header, hero and project-picker state.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod interaction {
    include!("../src/core/interaction.rs");
}

use interaction::*;

#[test]
fn header_turns_solid_after_fifty_pixels() {
    assert!(!header_is_scrolled(0.0));
    assert!(!header_is_scrolled(50.0));
    assert!(header_is_scrolled(50.5));
}

#[test]
fn menu_toggles_and_closes() {
    let mut menu = MenuState::default();
    assert!(!menu.is_open());
    assert!(menu.toggle());
    assert!(!menu.toggle());
    menu.toggle();
    menu.close();
    assert!(!menu.is_open());
}

#[test]
fn typewriter_shows_one_more_char_per_tick_then_stops() {
    let mut tw = Typewriter::new("Data");
    assert_eq!(tw.visible(), "");
    assert_eq!(tw.tick(), Some("D"));
    assert_eq!(tw.tick(), Some("Da"));
    assert_eq!(tw.tick(), Some("Dat"));
    assert_eq!(tw.tick(), Some("Data"));
    assert!(tw.is_done());
    assert_eq!(tw.tick(), None);
    assert_eq!(tw.visible(), "Data");
}

#[test]
fn typewriter_respects_multibyte_chars() {
    let mut tw = Typewriter::new("é→x");
    assert_eq!(tw.tick(), Some("é"));
    assert_eq!(tw.tick(), Some("é→"));
    assert_eq!(tw.tick(), Some("é→x"));
    assert_eq!(tw.tick(), None);
}

#[test]
fn avatar_tilts_toward_pointer() {
    let rect = Rect {
        left: 0.0,
        top: 0.0,
        width: 200.0,
        height: 200.0,
    };
    // up and to the right of center
    assert_eq!(
        avatar_tilt(150.0, 50.0, rect),
        "perspective(1000px) rotateX(3.75deg) rotateY(3.75deg) translateZ(50px)"
    );
    // bottom-left corner hits the full angle
    assert_eq!(
        avatar_tilt(0.0, 200.0, rect),
        "perspective(1000px) rotateX(-7.50deg) rotateY(-7.50deg) translateZ(50px)"
    );
}

#[test]
fn zero_sized_avatar_stays_level() {
    let rect = Rect {
        left: 10.0,
        top: 10.0,
        width: 0.0,
        height: 0.0,
    };
    assert_eq!(avatar_tilt(20.0, 20.0, rect), AVATAR_REST_TRANSFORM);
}

#[test]
fn project_selection_ignores_out_of_range_and_repeats() {
    let mut sel = ProjectSelection::new(4);
    assert_eq!(sel.active(), 0);
    assert!(!sel.select(0));
    assert!(sel.select(3));
    assert_eq!(sel.active(), 3);
    assert!(!sel.select(4));
    assert_eq!(sel.active(), 3);
}
