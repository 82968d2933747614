//! Lightbox interaction state machine.
//!
//! The published page's modal viewer (zoom, pan, keyboard, swipe) is driven
//! by a small amount of browser glue, but its semantics live here as a pure
//! transition function so they can be exercised without a browser:
//!
//! ```text
//! transition(state, event, item_count) → state     // testable
//! project(state) → Projection                      // testable
//! DOM updates from Projection                      // glue, static/gallery.js
//! ```
//!
//! The numeric constants below are the single source of truth; the site
//! generator substitutes them into the embedded JS runtime so the browser
//! behavior cannot drift from the tested machine.
//!
//! ## Rules
//!
//! - `current_index` always wraps, in both directions. Never out of range.
//! - Zoom scale lives in `[MIN_ZOOM, MAX_ZOOM]`, stepped by [`ZOOM_STEP`];
//!   repeated zooms saturate at the bounds.
//! - Any navigation (open included) resets zoom to scale 1 at center. Zoom
//!   never persists across items.
//! - A swipe shorter than [`SWIPE_THRESHOLD_PX`] is a no-op, not a
//!   navigation.
//! - While closed, every event except `Open` is ignored. Opening an empty
//!   gallery is a no-op.

/// No zoom-out below natural size.
pub const MIN_ZOOM: f32 = 1.0;
/// Upper zoom bound.
pub const MAX_ZOOM: f32 = 4.0;
/// Scale change per discrete zoom action (button press or wheel notch).
pub const ZOOM_STEP: f32 = 0.25;
/// Minimum horizontal swipe distance, in device-independent pixels, for a
/// swipe to count as navigation.
pub const SWIPE_THRESHOLD_PX: f32 = 40.0;

/// Zoom transform parameters: scale plus the origin point the transform is
/// anchored to, as percentages of the image bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom {
    pub scale: f32,
    pub origin_x: f32,
    pub origin_y: f32,
}

impl Default for Zoom {
    fn default() -> Self {
        Self {
            scale: MIN_ZOOM,
            origin_x: 50.0,
            origin_y: 50.0,
        }
    }
}

/// The viewer's entire runtime state. Owned by the single overlay instance,
/// mutated only through [`transition`], never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LightboxState {
    pub is_open: bool,
    pub current_index: usize,
    pub zoom: Zoom,
}

/// User-triggered events, already reduced to their meaning. Keyboard, wheel,
/// and touch input all funnel into these: ArrowRight is `Next`, wheel-up is
/// `ZoomIn`, a completed touch drag is `SwipeEnd`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Thumbnail at position `i` was activated.
    Open(usize),
    Next,
    Prev,
    /// Close button, backdrop click, empty-stage click, or Escape.
    Close,
    ZoomIn,
    ZoomOut,
    ZoomReset,
    /// Pointer position relative to the image bounds, in percent.
    PointerMove { x_pct: f32, y_pct: f32 },
    /// Horizontal touch-drag delta in device-independent pixels; negative is
    /// a leftward swipe.
    SwipeEnd { dx: f32 },
}

/// Apply one event to the current state. Pure; the caller owns the state and
/// projects the result onto the DOM separately.
pub fn transition(state: LightboxState, event: Event, item_count: usize) -> LightboxState {
    if !state.is_open {
        return match event {
            Event::Open(i) if item_count > 0 => LightboxState {
                is_open: true,
                current_index: i % item_count,
                zoom: Zoom::default(),
            },
            _ => state,
        };
    }

    match event {
        Event::Open(i) => LightboxState {
            is_open: true,
            current_index: if item_count > 0 { i % item_count } else { 0 },
            zoom: Zoom::default(),
        },
        Event::Next => navigate(state, 1, item_count),
        Event::Prev => navigate(state, item_count.saturating_sub(1), item_count),
        Event::Close => LightboxState {
            is_open: false,
            current_index: state.current_index,
            zoom: Zoom::default(),
        },
        Event::ZoomIn => with_scale(state, (state.zoom.scale + ZOOM_STEP).min(MAX_ZOOM)),
        Event::ZoomOut => with_scale(state, (state.zoom.scale - ZOOM_STEP).max(MIN_ZOOM)),
        Event::ZoomReset => LightboxState {
            zoom: Zoom::default(),
            ..state
        },
        Event::PointerMove { x_pct, y_pct } => {
            // Origin tracking only means something while zoomed in
            if state.zoom.scale > MIN_ZOOM {
                LightboxState {
                    zoom: Zoom {
                        scale: state.zoom.scale,
                        origin_x: x_pct.clamp(0.0, 100.0),
                        origin_y: y_pct.clamp(0.0, 100.0),
                    },
                    ..state
                }
            } else {
                state
            }
        }
        Event::SwipeEnd { dx } => {
            if dx <= -SWIPE_THRESHOLD_PX {
                navigate(state, 1, item_count)
            } else if dx >= SWIPE_THRESHOLD_PX {
                navigate(state, item_count.saturating_sub(1), item_count)
            } else {
                state
            }
        }
    }
}

/// Advance the index by `step` modulo the item count, resetting zoom.
fn navigate(state: LightboxState, step: usize, item_count: usize) -> LightboxState {
    if item_count == 0 {
        return state;
    }
    LightboxState {
        is_open: true,
        current_index: (state.current_index + step) % item_count,
        zoom: Zoom::default(),
    }
}

fn with_scale(state: LightboxState, scale: f32) -> LightboxState {
    LightboxState {
        zoom: Zoom {
            scale,
            ..state.zoom
        },
        ..state
    }
}

/// Indices to prefetch after the current state settled: the items adjacent to
/// `current_index`, wrapped. Fire-and-forget; ordering relative to the
/// visible image's own load is not guaranteed.
pub fn prefetch_targets(state: LightboxState, item_count: usize) -> Vec<usize> {
    if !state.is_open || item_count < 2 {
        return Vec::new();
    }
    let next = (state.current_index + 1) % item_count;
    let prev = (state.current_index + item_count - 1) % item_count;
    if next == prev {
        vec![next]
    } else {
        vec![next, prev]
    }
}

/// Presentation of a [`LightboxState`]: the class and style values the page
/// toggles. Rendering side effects stop here; everything in this struct is
/// plain data.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// Overlay carries the `open` class.
    pub overlay_open: bool,
    /// Stage carries the `zoomable` class (pan cursor, pointer tracking on).
    pub zoomable: bool,
    /// Page scroll is consumed by the lightbox instead of the document.
    pub scroll_locked: bool,
    /// CSS transform for the stage image.
    pub transform: String,
    /// CSS transform-origin for the stage image.
    pub transform_origin: String,
}

/// Map state to presentation.
pub fn project(state: LightboxState) -> Projection {
    Projection {
        overlay_open: state.is_open,
        zoomable: state.is_open && state.zoom.scale > MIN_ZOOM,
        scroll_locked: state.is_open,
        transform: format!("scale({})", state.zoom.scale),
        transform_origin: format!("{}% {}%", state.zoom.origin_x, state.zoom.origin_y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_at(index: usize, n: usize) -> LightboxState {
        transition(LightboxState::default(), Event::Open(index), n)
    }

    // =========================================================================
    // Open / close
    // =========================================================================

    #[test]
    fn open_sets_index_and_state() {
        let s = open_at(3, 5);
        assert!(s.is_open);
        assert_eq!(s.current_index, 3);
        assert_eq!(s.zoom, Zoom::default());
    }

    #[test]
    fn open_wraps_out_of_range_index() {
        assert_eq!(open_at(7, 5).current_index, 2);
    }

    #[test]
    fn open_on_empty_gallery_is_noop() {
        let s = transition(LightboxState::default(), Event::Open(0), 0);
        assert!(!s.is_open);
    }

    #[test]
    fn open_then_close_restores_closed_state() {
        for i in 0..4 {
            let s = transition(open_at(i, 4), Event::Close, 4);
            assert!(!s.is_open);
            let p = project(s);
            assert!(!p.overlay_open);
            assert!(!p.scroll_locked);
        }
    }

    #[test]
    fn close_resets_zoom() {
        let mut s = open_at(0, 2);
        s = transition(s, Event::ZoomIn, 2);
        s = transition(s, Event::Close, 2);
        assert_eq!(s.zoom, Zoom::default());
    }

    #[test]
    fn events_while_closed_are_ignored() {
        let closed = LightboxState::default();
        for event in [
            Event::Next,
            Event::Prev,
            Event::Close,
            Event::ZoomIn,
            Event::ZoomOut,
            Event::ZoomReset,
            Event::PointerMove {
                x_pct: 10.0,
                y_pct: 10.0,
            },
            Event::SwipeEnd { dx: -120.0 },
        ] {
            assert_eq!(transition(closed, event, 5), closed);
        }
    }

    #[test]
    fn reopen_while_open_jumps_to_new_index() {
        let mut s = open_at(1, 5);
        s = transition(s, Event::ZoomIn, 5);
        s = transition(s, Event::Open(4), 5);
        assert_eq!(s.current_index, 4);
        assert_eq!(s.zoom, Zoom::default());
    }

    // =========================================================================
    // Navigation and wraparound
    // =========================================================================

    #[test]
    fn next_advances_and_wraps_at_end() {
        let mut s = open_at(3, 5);
        s = transition(s, Event::Next, 5);
        assert_eq!(s.current_index, 4);
        s = transition(s, Event::Next, 5);
        assert_eq!(s.current_index, 0);
    }

    #[test]
    fn prev_from_zero_wraps_to_last() {
        let s = transition(open_at(0, 5), Event::Prev, 5);
        assert_eq!(s.current_index, 4);
    }

    #[test]
    fn index_stays_in_range_under_any_sequence() {
        let n = 7;
        let mut s = open_at(0, n);
        let moves = [
            Event::Next,
            Event::Prev,
            Event::Prev,
            Event::Next,
            Event::Next,
            Event::Next,
            Event::Prev,
            Event::Next,
            Event::Prev,
            Event::Prev,
            Event::Prev,
            Event::Next,
        ];
        for event in moves.iter().cycle().take(200) {
            s = transition(s, *event, n);
            assert!(s.current_index < n, "index {} out of range", s.current_index);
        }
    }

    #[test]
    fn single_item_navigation_stays_put() {
        let mut s = open_at(0, 1);
        s = transition(s, Event::Next, 1);
        assert_eq!(s.current_index, 0);
        s = transition(s, Event::Prev, 1);
        assert_eq!(s.current_index, 0);
        assert!(s.is_open);
    }

    #[test]
    fn navigation_resets_zoom_state() {
        let mut s = open_at(0, 3);
        s = transition(s, Event::ZoomIn, 3);
        s = transition(s, Event::ZoomIn, 3);
        s = transition(
            s,
            Event::PointerMove {
                x_pct: 80.0,
                y_pct: 20.0,
            },
            3,
        );
        s = transition(s, Event::Next, 3);
        assert_eq!(s.zoom, Zoom::default());

        s = transition(s, Event::ZoomIn, 3);
        s = transition(s, Event::Prev, 3);
        assert_eq!(s.zoom, Zoom::default());
    }

    // =========================================================================
    // Zoom
    // =========================================================================

    #[test]
    fn zoom_in_steps_by_quarter() {
        let s = transition(open_at(0, 1), Event::ZoomIn, 1);
        assert_eq!(s.zoom.scale, 1.25);
    }

    #[test]
    fn zoom_saturates_at_max() {
        let mut s = open_at(0, 1);
        for _ in 0..30 {
            s = transition(s, Event::ZoomIn, 1);
            assert!(s.zoom.scale <= MAX_ZOOM);
        }
        assert_eq!(s.zoom.scale, MAX_ZOOM);
    }

    #[test]
    fn zoom_out_saturates_at_min() {
        let mut s = open_at(0, 1);
        s = transition(s, Event::ZoomIn, 1);
        for _ in 0..30 {
            s = transition(s, Event::ZoomOut, 1);
            assert!(s.zoom.scale >= MIN_ZOOM);
        }
        assert_eq!(s.zoom.scale, MIN_ZOOM);
    }

    #[test]
    fn zoom_reset_restores_defaults() {
        let mut s = open_at(0, 1);
        s = transition(s, Event::ZoomIn, 1);
        s = transition(s, Event::ZoomIn, 1);
        s = transition(
            s,
            Event::PointerMove {
                x_pct: 5.0,
                y_pct: 95.0,
            },
            1,
        );
        s = transition(s, Event::ZoomReset, 1);
        assert_eq!(s.zoom, Zoom::default());
        assert!(s.is_open);
    }

    #[test]
    fn pointer_move_tracks_origin_while_zoomed() {
        let mut s = open_at(0, 1);
        s = transition(s, Event::ZoomIn, 1);
        s = transition(
            s,
            Event::PointerMove {
                x_pct: 25.0,
                y_pct: 75.0,
            },
            1,
        );
        assert_eq!(s.zoom.origin_x, 25.0);
        assert_eq!(s.zoom.origin_y, 75.0);
        assert_eq!(s.zoom.scale, 1.25);
    }

    #[test]
    fn pointer_move_ignored_at_natural_size() {
        let s = transition(
            open_at(0, 1),
            Event::PointerMove {
                x_pct: 25.0,
                y_pct: 75.0,
            },
            1,
        );
        assert_eq!(s.zoom, Zoom::default());
    }

    #[test]
    fn pointer_move_clamps_to_bounds() {
        let mut s = open_at(0, 1);
        s = transition(s, Event::ZoomIn, 1);
        s = transition(
            s,
            Event::PointerMove {
                x_pct: -12.0,
                y_pct: 140.0,
            },
            1,
        );
        assert_eq!(s.zoom.origin_x, 0.0);
        assert_eq!(s.zoom.origin_y, 100.0);
    }

    // =========================================================================
    // Swipe
    // =========================================================================

    #[test]
    fn swipe_below_threshold_is_noop() {
        let s = open_at(2, 5);
        assert_eq!(transition(s, Event::SwipeEnd { dx: -20.0 }, 5), s);
        assert_eq!(transition(s, Event::SwipeEnd { dx: 20.0 }, 5), s);
        assert_eq!(transition(s, Event::SwipeEnd { dx: -39.9 }, 5), s);
    }

    #[test]
    fn swipe_left_past_threshold_navigates_next() {
        let s = transition(open_at(2, 5), Event::SwipeEnd { dx: -50.0 }, 5);
        assert_eq!(s.current_index, 3);
    }

    #[test]
    fn swipe_right_past_threshold_navigates_prev() {
        let s = transition(open_at(2, 5), Event::SwipeEnd { dx: 50.0 }, 5);
        assert_eq!(s.current_index, 1);
    }

    #[test]
    fn swipe_exactly_at_threshold_navigates() {
        let s = transition(open_at(0, 3), Event::SwipeEnd { dx: -40.0 }, 3);
        assert_eq!(s.current_index, 1);
    }

    #[test]
    fn swipe_resets_zoom() {
        let mut s = open_at(0, 3);
        s = transition(s, Event::ZoomIn, 3);
        s = transition(s, Event::SwipeEnd { dx: -80.0 }, 3);
        assert_eq!(s.zoom, Zoom::default());
    }

    // =========================================================================
    // Prefetch
    // =========================================================================

    #[test]
    fn prefetch_targets_are_adjacent_wrapped() {
        assert_eq!(prefetch_targets(open_at(0, 5), 5), vec![1, 4]);
        assert_eq!(prefetch_targets(open_at(4, 5), 5), vec![0, 3]);
    }

    #[test]
    fn prefetch_deduplicates_for_two_items() {
        assert_eq!(prefetch_targets(open_at(0, 2), 2), vec![1]);
    }

    #[test]
    fn prefetch_empty_when_closed_or_trivial() {
        assert!(prefetch_targets(LightboxState::default(), 5).is_empty());
        assert!(prefetch_targets(open_at(0, 1), 1).is_empty());
    }

    // =========================================================================
    // Projection
    // =========================================================================

    #[test]
    fn projection_of_closed_state() {
        let p = project(LightboxState::default());
        assert!(!p.overlay_open);
        assert!(!p.zoomable);
        assert!(!p.scroll_locked);
        assert_eq!(p.transform, "scale(1)");
        assert_eq!(p.transform_origin, "50% 50%");
    }

    #[test]
    fn projection_of_zoomed_state() {
        let mut s = open_at(0, 1);
        s = transition(s, Event::ZoomIn, 1);
        s = transition(s, Event::ZoomIn, 1);
        s = transition(
            s,
            Event::PointerMove {
                x_pct: 30.0,
                y_pct: 60.0,
            },
            1,
        );
        let p = project(s);
        assert!(p.overlay_open);
        assert!(p.zoomable);
        assert!(p.scroll_locked);
        assert_eq!(p.transform, "scale(1.5)");
        assert_eq!(p.transform_origin, "30% 60%");
    }

    #[test]
    fn projection_not_zoomable_at_natural_size() {
        let p = project(open_at(0, 3));
        assert!(p.overlay_open);
        assert!(!p.zoomable);
    }
}
