use super::constants::*;
use super::content::{CONTACT_INFO, RESUME_HIGHLIGHTS, SOCIAL_LINKS};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

/// Indices that have been revealed. Insert-only.
#[derive(Clone, Debug, Default)]
pub struct RevealSet {
    revealed: BTreeSet<usize>,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `index` revealed. Returns true only on the hidden -> revealed transition.
    pub fn reveal(&mut self, index: usize) -> bool {
        self.revealed.insert(index)
    }

    pub fn state(&self, index: usize) -> RevealState {
        if self.revealed.contains(&index) {
            RevealState::Revealed
        } else {
            RevealState::Hidden
        }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.revealed.iter().copied()
    }
}

#[inline]
pub fn meets_threshold(ratio: f64, threshold: f64) -> bool {
    ratio >= threshold
}

/// An observer entry counts once it intersects with at least `threshold` of its area.
#[inline]
pub fn is_sufficiently_visible(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && meets_threshold(ratio, threshold)
}

#[inline]
pub fn stagger_delay_ms(index: usize, offset: u32) -> u32 {
    (index as u32 + offset) * STAGGER_STEP_MS
}

/// A group of items revealed one by one after their section first becomes visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    pub group: &'static str,
    pub count: usize,
    pub offset: u32,
}

/// How one content section reveals itself.
#[derive(Clone, Copy, Debug)]
pub struct RevealPlan {
    pub threshold: f64,
    /// Group name carried by the observed elements themselves.
    pub tracked_group: &'static str,
    /// Delay each tracked element's own reveal by its index.
    pub stagger_tracked: bool,
    /// Groups cascaded once, on the first sufficient visibility of any tracked element.
    pub cascades: &'static [Stagger],
}

pub const SECTION_GROUP: &str = "section";

pub const ABOUT_PLAN: RevealPlan = RevealPlan {
    threshold: ABOUT_REVEAL_THRESHOLD,
    tracked_group: "block",
    stagger_tracked: false,
    cascades: &[],
};

pub const PROJECTS_PLAN: RevealPlan = RevealPlan {
    threshold: PROJECTS_REVEAL_THRESHOLD,
    tracked_group: "project",
    stagger_tracked: true,
    cascades: &[Stagger {
        group: SECTION_GROUP,
        count: 1,
        offset: 0,
    }],
};

pub const RESUME_PLAN: RevealPlan = RevealPlan {
    threshold: RESUME_REVEAL_THRESHOLD,
    tracked_group: SECTION_GROUP,
    stagger_tracked: false,
    cascades: &[Stagger {
        group: "highlight",
        count: RESUME_HIGHLIGHTS.len(),
        offset: 0,
    }],
};

pub const CONTACT_PLAN: RevealPlan = RevealPlan {
    threshold: CONTACT_REVEAL_THRESHOLD,
    tracked_group: SECTION_GROUP,
    stagger_tracked: false,
    cascades: &[
        Stagger {
            group: "contact-info",
            count: CONTACT_INFO.len(),
            offset: 0,
        },
        Stagger {
            group: "social",
            count: SOCIAL_LINKS.len(),
            offset: SOCIAL_STAGGER_OFFSET,
        },
    ],
};

/// A reveal to apply after `delay_ms` (zero means now).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledReveal {
    pub group: &'static str,
    pub index: usize,
    pub delay_ms: u32,
}

/// Per-section reveal bookkeeping, independent of the DOM.
///
/// `observe` turns visibility reports into scheduled reveals; `mark` applies one
/// when its delay has elapsed.
pub struct RevealController {
    plan: RevealPlan,
    seen: RevealSet,
    cascaded: bool,
    groups: BTreeMap<&'static str, RevealSet>,
}

impl RevealController {
    pub fn new(plan: RevealPlan) -> Self {
        Self {
            plan,
            seen: RevealSet::new(),
            cascaded: false,
            groups: BTreeMap::new(),
        }
    }

    /// Feed one observer report for the tracked element at `index`.
    pub fn observe(&mut self, index: usize, is_intersecting: bool, ratio: f64) -> Vec<ScheduledReveal> {
        let mut out = Vec::new();
        if !is_sufficiently_visible(is_intersecting, ratio, self.plan.threshold) {
            return out;
        }
        if !self.seen.reveal(index) {
            return out;
        }
        out.push(ScheduledReveal {
            group: self.plan.tracked_group,
            index,
            delay_ms: if self.plan.stagger_tracked {
                stagger_delay_ms(index, 0)
            } else {
                0
            },
        });
        if !self.cascaded {
            self.cascaded = true;
            for stagger in self.plan.cascades {
                out.extend((0..stagger.count).map(|i| ScheduledReveal {
                    group: stagger.group,
                    index: i,
                    delay_ms: stagger_delay_ms(i, stagger.offset),
                }));
            }
        }
        out
    }

    /// Apply a reveal. Returns true when the item was still hidden.
    pub fn mark(&mut self, group: &'static str, index: usize) -> bool {
        self.groups.entry(group).or_default().reveal(index)
    }

    pub fn state(&self, group: &str, index: usize) -> RevealState {
        self.groups
            .get(group)
            .map_or(RevealState::Hidden, |set| set.state(index))
    }
}
