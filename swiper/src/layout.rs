use crate::Spacing;

/// Resolves the item spacing (px) for a viewport width.
///
/// An element-level `overrides` value wins over `default`. When neither resolves (a breakpoint
/// list whose first rule starts above the viewport width), the spacing is `0`.
pub fn compute_spacing(
    overrides: Option<&Spacing>,
    default: &Spacing,
    viewport_width: f64,
) -> u32 {
    overrides
        .and_then(|s| s.resolve(viewport_width))
        .or_else(|| default.resolve(viewport_width))
        .unwrap_or(0)
}

/// Number of items that make up one scroll page.
///
/// `ceil((container_width * visible_portion / 10) / (max_width + 2 * spacing))`, clamped to at
/// least `1` so that degenerate measurements never yield an empty page.
pub fn items_per_page(
    container_width: f64,
    visible_portion: f64,
    max_width: u32,
    spacing: u32,
) -> usize {
    let slot = f64::from(max_width) + 2.0 * f64::from(spacing);
    let visible = container_width * (visible_portion / 10.0);
    if slot <= 0.0 || !visible.is_finite() || visible <= 0.0 {
        return 1;
    }
    let n = (visible / slot).ceil();
    if n < 1.0 { 1 } else { n as usize }
}

/// Space reserved below the strip so the native scrollbar does not shift layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BottomReserve {
    /// Applied as the container's `margin-bottom` (px, non-positive).
    pub container_margin: f64,
    /// Applied as the item list's `padding-bottom` (px).
    pub list_padding: f64,
}

impl BottomReserve {
    /// Builds the reserve from a probed scrollbar thickness.
    ///
    /// A measured scrollbar is pushed out of view with a doubled negative margin; without a
    /// measurement `fallback` is used as-is on both sides.
    pub fn from_scrollbar(measured: Option<f64>, fallback: u32) -> Self {
        match measured {
            Some(size) if size > 0.0 => Self {
                container_margin: -(size * 2.0),
                list_padding: size,
            },
            _ => Self {
                container_margin: -f64::from(fallback),
                list_padding: f64::from(fallback),
            },
        }
    }
}

/// Percentage layout of an enabled strip.
///
/// The list is made wider than its container so that exactly `items_per_page` items share the
/// visible portion of the container; the overflow is reached by scrolling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripLayout {
    pub item_count: usize,
    pub items_per_page: usize,
    /// Share of the container taken by one item (percent).
    pub item_share_pct: f64,
    /// Width of each item relative to the list (percent).
    pub item_width_pct: f64,
    /// Width of the list relative to the container (percent).
    pub list_width_pct: f64,
    /// Horizontal padding on both sides of each item (px).
    pub spacing: u32,
    pub bottom: BottomReserve,
}

impl StripLayout {
    /// Returns `None` when there are no items to lay out.
    pub fn compute(
        item_count: usize,
        items_per_page: usize,
        visible_portion: f64,
        spacing: u32,
        bottom: BottomReserve,
    ) -> Option<Self> {
        if item_count == 0 {
            return None;
        }
        let items_per_page = items_per_page.max(1);
        let item_share_pct = (visible_portion * 10.0) / items_per_page as f64;
        let layout = Self {
            item_count,
            items_per_page,
            item_share_pct,
            item_width_pct: 100.0 / item_count as f64,
            list_width_pct: item_count as f64 * item_share_pct,
            spacing,
            bottom,
        };
        strace!(
            item_count,
            items_per_page,
            list_width_pct = layout.list_width_pct,
            "StripLayout::compute"
        );
        Some(layout)
    }

    /// Horizontal margin applied to the container on both sides (px, non-positive).
    ///
    /// Pulls the outer item padding out so edge items line up with the surrounding content.
    pub fn container_margin(&self) -> f64 {
        -f64::from(self.spacing)
    }
}
