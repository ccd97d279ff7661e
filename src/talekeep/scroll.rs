//! Viewport geometry → reading progress, independent of any DOM event.
//!
//! Progress is the fraction of the content's height that has passed through
//! the viewport, not raw scroll offset: content height varies wildly by
//! device, so the same story must report the same percentage for the same
//! reading position regardless of screen size.

/// One scroll sample. All values are in the same pixel unit, with
/// `content_top` measured from the top of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollGeometry {
    /// Offset of the content's top edge from the page top.
    pub content_top: f64,
    /// Total height of the content being read.
    pub content_height: f64,
    /// Height of the visible viewport.
    pub viewport_height: f64,
    /// Current scroll offset of the viewport from the page top.
    pub scroll_top: f64,
}

impl ScrollGeometry {
    /// Percentage of the content that has passed through the viewport,
    /// in [0, 100].
    ///
    /// The numerator is the portion of the content above the viewport's
    /// bottom edge, clamped to the content itself. That single expression
    /// covers all four cases: content not yet reached (0), content taller
    /// than the viewport (partial), scrolled past the top (still counts the
    /// part above), and content fully visible (100). Degenerate zero-height
    /// content reads as fully read.
    pub fn percent(&self) -> f64 {
        if self.content_height <= 0.0 {
            return 100.0;
        }
        let viewport_bottom = self.scroll_top + self.viewport_height;
        let passed = (viewport_bottom - self.content_top).clamp(0.0, self.content_height);
        passed / self.content_height * 100.0
    }
}

/// Whether a new sample differs enough from the last persisted one to be
/// worth a write. Scroll events fire at high frequency; persisting every
/// sample churns storage for no benefit. This is a performance policy, not
/// a correctness rule — the store's monotonic check stands regardless.
pub fn meaningful_change(last_saved: f64, sample: f64, step: f64) -> bool {
    sample - last_saved >= step
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geom(content_top: f64, content_height: f64, viewport_height: f64, scroll_top: f64) -> f64 {
        ScrollGeometry {
            content_top,
            content_height,
            viewport_height,
            scroll_top,
        }
        .percent()
    }

    #[test]
    fn content_not_yet_reached() {
        // Content starts at 2000, viewport shows 0..800
        assert_eq!(geom(2000.0, 3000.0, 800.0, 0.0), 0.0);
    }

    #[test]
    fn content_taller_than_viewport_partial() {
        // Viewport bottom at 1000, content spans 0..4000
        assert_eq!(geom(0.0, 4000.0, 800.0, 200.0), 25.0);
    }

    #[test]
    fn scrolled_past_bottom_caps_at_full() {
        assert_eq!(geom(0.0, 1000.0, 800.0, 5000.0), 100.0);
    }

    #[test]
    fn short_content_fully_visible() {
        // Content shorter than the viewport is fully read as soon as shown
        assert_eq!(geom(100.0, 400.0, 800.0, 0.0), 100.0);
    }

    #[test]
    fn zero_height_content() {
        assert_eq!(geom(0.0, 0.0, 800.0, 0.0), 100.0);
    }

    #[test]
    fn progress_grows_with_scroll() {
        let mut last = 0.0;
        for scroll in [0.0, 500.0, 1500.0, 2800.0, 4000.0] {
            let p = geom(0.0, 4000.0, 800.0, scroll);
            assert!(p >= last, "percent regressed at scroll {}", scroll);
            last = p;
        }
        assert_eq!(last, 100.0);
    }

    #[test]
    fn meaningful_change_threshold() {
        assert!(meaningful_change(40.0, 45.0, 5.0));
        assert!(!meaningful_change(40.0, 44.9, 5.0));
        // Backwards movement is never meaningful
        assert!(!meaningful_change(40.0, 30.0, 5.0));
    }
}
