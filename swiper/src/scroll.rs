use crate::Direction;

/// Remaining scroll distance (px) under which the strip is considered to sit at its right edge.
///
/// Absorbs sub-pixel scroll offsets reported by fractional layouts.
const EDGE_EPSILON: f64 = 0.5;

/// Measurements needed to compute a paging target.
///
/// All values are rendered widths/offsets in px, read by the adapter right before scrolling.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Current horizontal scroll offset of the container.
    pub scroll_offset: f64,
    /// Rendered width of one item.
    pub item_width: f64,
    pub items_per_page: usize,
    /// Rendered width of the wrapper (the visible frame).
    pub wrapper_width: f64,
    /// Rendered width of the item list (the full strip).
    pub list_width: f64,
    /// Absolute value of the container's horizontal negative margin.
    pub container_margin: f64,
}

impl ScrollMetrics {
    pub fn page_width(&self) -> f64 {
        self.item_width * self.items_per_page as f64
    }

    /// Offset that centers a page inside the wrapper when the page is narrower than it.
    pub fn padding(&self) -> f64 {
        (self.wrapper_width - self.page_width()) / 2.0
    }

    /// Largest reachable scroll offset.
    pub fn max_offset(&self) -> f64 {
        (self.list_width - self.wrapper_width).max(0.0)
    }

    pub fn clamp_offset(&self, offset: f64) -> f64 {
        offset.min(self.max_offset()).max(0.0)
    }

    /// Index of the page to land on when paging in `direction`.
    pub fn target_page(&self, direction: Direction) -> Option<f64> {
        let page_width = self.page_width();
        if page_width.is_nan() || page_width <= 0.0 {
            return None;
        }
        Some((self.scroll_offset / page_width).ceil() + direction.step())
    }

    /// Scroll offset to animate to when paging in `direction`.
    ///
    /// Returns `None` when there is nothing to page through (no items, or items without width).
    pub fn page_target(&self, direction: Direction) -> Option<f64> {
        let page = self.target_page(direction)?;
        let raw = page * self.page_width() - (self.padding() + self.container_margin);
        let target = self.clamp_offset(raw);
        strace!(
            scroll_offset = self.scroll_offset,
            page,
            raw,
            target,
            "ScrollMetrics::page_target"
        );
        Some(target)
    }

    /// Scroll offset that brings an item (by its offset inside the list) into the paged frame.
    pub fn item_target(&self, item_offset: f64) -> f64 {
        self.clamp_offset(item_offset - (self.padding() + self.container_margin))
    }
}

/// Enabled state of one navigation button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonState {
    Enabled,
    Disabled,
}

impl ButtonState {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }

    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }
}

/// Enabled state of both navigation buttons for a scroll position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavState {
    pub prev: ButtonState,
    pub next: ButtonState,
}

impl NavState {
    /// State of a freshly enabled strip (scrolled to the start).
    pub const INITIAL: Self = Self {
        prev: ButtonState::Disabled,
        next: ButtonState::Enabled,
    };

    /// Derives the button state from the container's scroll geometry.
    ///
    /// "previous" is enabled once the strip has left its start; "next" is enabled until the
    /// remaining scroll width equals the container width.
    ///
    /// The right edge is not an exact comparison: "next" is already disabled when at most
    /// half a pixel remains, so fractional layouts that stop a sub-pixel short of the
    /// end still read as "at the end".
    pub fn from_scroll(scroll_offset: f64, scroll_width: f64, container_width: f64) -> Self {
        let remaining = scroll_width - scroll_offset - container_width;
        Self {
            prev: ButtonState::from_enabled(scroll_offset > 0.0),
            next: ButtonState::from_enabled(remaining > EDGE_EPSILON),
        }
    }

    pub fn get(&self, direction: Direction) -> ButtonState {
        match direction {
            Direction::Prev => self.prev,
            Direction::Next => self.next,
        }
    }
}

/// Whether the list is wider than its container, i.e. whether paging is possible at all.
pub fn is_overflowing(container_width: f64, list_width: f64) -> bool {
    container_width < list_width
}
