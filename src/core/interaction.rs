use super::constants::{AVATAR_LIFT_PX, AVATAR_TILT_DEG, HEADER_SCROLLED_AFTER_PX};

pub const AVATAR_REST_TRANSFORM: &str =
    "perspective(1000px) rotateX(0deg) rotateY(0deg) translateZ(0px)";

#[inline]
pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_AFTER_PX
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Reveals a fixed string one character per tick.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: &'static str,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &'static str) -> Self {
        Self { text, shown: 0 }
    }

    /// Show one more character. `None` once the whole text is already visible.
    pub fn tick(&mut self) -> Option<&'static str> {
        if self.is_done() {
            return None;
        }
        self.shown += 1;
        Some(self.visible())
    }

    pub fn visible(&self) -> &'static str {
        let end = self
            .text
            .char_indices()
            .nth(self.shown)
            .map_or(self.text.len(), |(i, _)| i);
        &self.text[..end]
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.text.chars().count()
    }
}

/// Bounding box of an element in client pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// CSS transform tilting the avatar toward a pointer at client `(x, y)`.
pub fn avatar_tilt(x: f64, y: f64, rect: Rect) -> String {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return AVATAR_REST_TRANSFORM.to_string();
    }
    let dx = x - rect.left - rect.width / 2.0;
    let dy = y - rect.top - rect.height / 2.0;
    let rotate_x = (dy / rect.height) * AVATAR_TILT_DEG;
    let rotate_y = (dx / rect.width) * AVATAR_TILT_DEG;
    format!(
        "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) translateZ({}px)",
        -rotate_x, rotate_y, AVATAR_LIFT_PX
    )
}

/// Which project card drives the preview pane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectSelection {
    active: usize,
    count: usize,
}

impl ProjectSelection {
    pub fn new(count: usize) -> Self {
        Self { active: 0, count }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Select `index`. Out-of-range or unchanged selections return false.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.count || index == self.active {
            return false;
        }
        self.active = index;
        true
    }
}
