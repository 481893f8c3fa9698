//! Pinned-column overlays.
//!
//! Each scroll tick recomputes, from current measurements only, whether the
//! left and right pinned groups need their overlay and how wide it is.

use std::time::{Duration, Instant};

use edtable_domain::{ColumnDecl, ColumnSizeMap, FixedSide};

use crate::effect::Effect;
use crate::throttle::Throttle;

pub const SCROLL_THROTTLE: Duration = Duration::from_millis(30);

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub viewport_width: f64,
    pub table_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PinnedWidths {
    pub left: f64,
    pub right: f64,
}

impl PinnedWidths {
    pub fn measure(columns: &[ColumnDecl], sizes: &ColumnSizeMap) -> Self {
        columns.iter().fold(Self::default(), |mut acc, decl| {
            match decl.fixed {
                Some(FixedSide::Left) => acc.left += sizes.render_width(&decl.key),
                Some(FixedSide::Right) => acc.right += sizes.render_width(&decl.key),
                None => {}
            }
            acc
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlayState {
    pub visible: bool,
    pub width: f64,
}

impl OverlayState {
    pub const HIDDEN: Self = Self {
        visible: false,
        width: 0.0,
    };

    pub fn shown(width: f64) -> Self {
        Self {
            visible: true,
            width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedOverlays {
    pub left: OverlayState,
    pub right: OverlayState,
}

pub fn compute_overlays(metrics: ScrollMetrics, pinned: PinnedWidths) -> FixedOverlays {
    let left = if metrics.scroll_left == 0.0 {
        OverlayState::HIDDEN
    } else {
        OverlayState::shown(pinned.left)
    };
    let right = if metrics.scroll_left + metrics.viewport_width >= metrics.table_width {
        OverlayState::HIDDEN
    } else {
        OverlayState::shown(pinned.right)
    };
    FixedOverlays { left, right }
}

#[derive(Debug, Clone)]
pub struct FixedColumnTracker {
    throttle: Throttle,
    overlays: FixedOverlays,
}

impl Default for FixedColumnTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl FixedColumnTracker {
    pub fn new() -> Self {
        Self {
            throttle: Throttle::new(SCROLL_THROTTLE),
            overlays: FixedOverlays::default(),
        }
    }

    pub fn overlays(&self) -> FixedOverlays {
        self.overlays
    }

    pub fn pending_deadline(&self) -> Option<Instant> {
        self.throttle.trailing_deadline()
    }

    pub fn on_scroll(
        &mut self,
        now: Instant,
        metrics: ScrollMetrics,
        pinned: PinnedWidths,
    ) -> Vec<Effect> {
        if self.throttle.hit(now) {
            self.recompute(metrics, pinned)
        } else {
            vec![]
        }
    }

    /// Runs a deferred scroll recompute once its window has passed.
    pub fn flush_due(
        &mut self,
        now: Instant,
        metrics: ScrollMetrics,
        pinned: PinnedWidths,
    ) -> Vec<Effect> {
        if self.throttle.take_due(now) {
            self.recompute(metrics, pinned)
        } else {
            vec![]
        }
    }

    /// Unthrottled; used for the initial pass and after layout changes.
    pub fn recompute(&mut self, metrics: ScrollMetrics, pinned: PinnedWidths) -> Vec<Effect> {
        let next = compute_overlays(metrics, pinned);
        let mut effects = Vec::new();

        if next.left != self.overlays.left {
            effects.push(Effect::SetFixedOverlay {
                side: FixedSide::Left,
                overlay: next.left,
            });
        }
        if next.right != self.overlays.right {
            effects.push(Effect::SetFixedOverlay {
                side: FixedSide::Right,
                overlay: next.right,
            });
        }
        if !effects.is_empty() {
            log::trace!("fixed overlays now {next:?}");
        }

        self.overlays = next;
        effects
    }
}
