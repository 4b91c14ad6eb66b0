// Host-side tests for generated section markup.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod content {
    include!("../src/core/content.rs");
}
mod contact {
    include!("../src/core/contact.rs");
}
mod reveal {
    include!("../src/core/reveal.rs");
}
mod markup {
    include!("../src/core/markup.rs");
}

use content::*;
use markup::*;

#[test]
fn escapes_html_special_characters() {
    assert_eq!(
        escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
    );
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn reveal_selector_matches_reveal_attrs() {
    let attrs = reveal_attrs("social", 2, "animate-bounce-in");
    assert!(attrs.contains(r#"data-reveal-group="social""#));
    assert!(attrs.contains(r#"data-reveal-index="2""#));
    assert!(attrs.contains(r#"data-reveal="animate-bounce-in""#));
    assert_eq!(
        reveal_selector("social", 2),
        r#"[data-reveal-group="social"][data-reveal-index="2"]"#
    );
}

#[test]
fn header_links_every_section() {
    let html = header();
    for item in NAV_ITEMS {
        assert!(html.contains(&format!(r#"data-nav-target="{}""#, item.target)));
    }
    assert!(html.contains(r#"id="menu-toggle""#));
    assert!(html.contains(r#"id="mobile-menu""#));
}

#[test]
fn about_tracks_four_blocks_and_every_skill() {
    let html = about();
    assert_eq!(html.matches(TRACK_ATTR).count(), 4);
    assert_eq!(html.matches("skill-bar ").count(), SKILLS.len());
    assert!(html.contains(r#"data-level="92""#));
}

#[test]
fn projects_mark_exactly_one_active_card() {
    let html = projects(2);
    assert_eq!(html.matches("data-project-index=").count(), PROJECTS.len());
    assert_eq!(html.matches(" active\"").count(), 1);
    assert!(html.contains(&escape_html(PROJECTS[2].title)));
}

#[test]
fn resume_and_contact_sections_track_themselves() {
    for html in [resume(), contact()] {
        assert!(html.contains(r#"class="section section-animate" data-track-index="0""#));
    }
    let contact = contact();
    for id in ["name", "email", "subject", "message", "contact-submit", "contact-form"] {
        assert!(contact.contains(&format!(r#"id="{}""#, id)), "missing #{}", id);
    }
    assert_eq!(contact.matches(r#"data-reveal-group="social""#).count(), SOCIAL_LINKS.len());
    assert_eq!(resume().matches(r#"data-reveal-group="highlight""#).count(), RESUME_HIGHLIGHTS.len());
}

#[test]
fn page_sections_come_in_document_order() {
    let html = page_sections();
    let pos = |id: &str| html.find(&format!(r#"id="{}""#, id)).expect("section present");
    assert!(pos("home") < pos("about"));
    assert!(pos("about") < pos("projects"));
    assert!(pos("projects") < pos("resume"));
    assert!(pos("resume") < pos("contact"));
}
