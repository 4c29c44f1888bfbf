use crate::Easing;

/// One breakpoint of a responsive spacing list.
///
/// The rule applies from `width` (viewport px, inclusive) upwards until a later rule takes over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpacingRule {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient_px"))]
    pub width: u32,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient_px"))]
    pub spacing: u32,
}

/// Horizontal item spacing: either a fixed pixel value or a list of viewport breakpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Spacing {
    Fixed(#[cfg_attr(feature = "serde", serde(deserialize_with = "lenient_px"))] u32),
    /// Rules are expected in ascending `width` order.
    Breakpoints(Vec<SpacingRule>),
}

impl Spacing {
    /// Resolves the spacing for a viewport width.
    ///
    /// For a breakpoint list, the last rule (in list order) whose `width <= viewport_width` wins.
    /// Returns `None` when no rule matches.
    pub fn resolve(&self, viewport_width: f64) -> Option<u32> {
        match self {
            Self::Fixed(px) => Some(*px),
            Self::Breakpoints(rules) => rules
                .iter()
                .rev()
                .find(|rule| f64::from(rule.width) <= viewport_width)
                .map(|rule| rule.spacing),
        }
    }
}

/// Reads a non-negative pixel count, truncating fractions (`12.5` reads as `12`).
#[cfg(feature = "serde")]
fn lenient_px<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let value = <f64 as serde::Deserialize>::deserialize(deserializer)?;
    if !value.is_finite() || value < 0.0 {
        return Err(D::Error::custom(format_args!(
            "expected a non-negative pixel value, got {value}"
        )));
    }
    Ok(value.trunc().min(f64::from(u32::MAX)) as u32)
}

impl Default for Spacing {
    fn default() -> Self {
        Self::Fixed(8)
    }
}

impl From<u32> for Spacing {
    fn from(px: u32) -> Self {
        Self::Fixed(px)
    }
}

impl From<Vec<SpacingRule>> for Spacing {
    fn from(rules: Vec<SpacingRule>) -> Self {
        Self::Breakpoints(rules)
    }
}

/// Configuration shared by every swiper managed by one adapter instance.
///
/// Class names are part of the public contract: host page CSS is expected to target them.
/// Build it from [`Settings::default`] and override what you need with the `with_*` methods.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Settings {
    /// Selector identifying the item-list root elements.
    pub selector: String,
    /// Selector identifying the child to bring into view on load.
    pub start_selector: String,

    #[cfg_attr(feature = "serde", serde(alias = "swiperContainerClass"))]
    pub container_class: String,
    #[cfg_attr(feature = "serde", serde(alias = "swiperWrapperClass"))]
    pub wrapper_class: String,
    #[cfg_attr(feature = "serde", serde(alias = "swiperEnabledClass"))]
    pub enabled_class: String,
    #[cfg_attr(feature = "serde", serde(alias = "swiperPrevClass"))]
    pub prev_class: String,
    #[cfg_attr(feature = "serde", serde(alias = "swiperNextClass"))]
    pub next_class: String,
    /// Inner HTML of the injected "previous" button.
    #[cfg_attr(feature = "serde", serde(alias = "swiperPrevContent"))]
    pub prev_content: String,
    /// Inner HTML of the injected "next" button.
    #[cfg_attr(feature = "serde", serde(alias = "swiperNextContent"))]
    pub next_content: String,
    pub hidden_class: String,
    pub disabled_button_class: String,

    /// Scroll animation duration in milliseconds.
    pub animation_speed: u64,
    pub easing: Easing,

    /// Default item spacing (px on each side of an item).
    pub spacing: Spacing,
    /// Default maximum item width (px) used to size a page.
    pub default_max_width: u32,
    /// Portion of the container considered one page, in tenths (`8.5` = 85%).
    pub visible_portion: f64,
    /// Scrollbar thickness assumed when it cannot be measured.
    pub scrollbar_fallback: u32,
    /// Viewport width from which swipers are disabled when the element does not say otherwise.
    pub default_until: u32,

    /// Resize bursts collapse into one recomputation per window of this length.
    pub resize_throttle_ms: u64,
    /// Delay between initial layout and the jump to the start item.
    pub start_item_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            selector: "[data-swipe-natural]".into(),
            start_selector: "[data-swipe-start]".into(),
            container_class: "swiper-container".into(),
            wrapper_class: "swiper-wrapper".into(),
            enabled_class: "swiper-enabled".into(),
            prev_class: "swiper-prev".into(),
            next_class: "swiper-next".into(),
            prev_content: r#"<span class="swiper-prev__content">Previous</span>"#.into(),
            next_content: r#"<span class="swiper-next__content">Next</span>"#.into(),
            hidden_class: "is-hidden".into(),
            disabled_button_class: "is-disabled".into(),
            animation_speed: 500,
            easing: Easing::EaseOutQuart,
            spacing: Spacing::default(),
            default_max_width: 320,
            visible_portion: 8.5,
            scrollbar_fallback: 20,
            default_until: 9999,
            resize_throttle_ms: 66,
            start_item_delay_ms: 32,
        }
    }
}

impl Settings {
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    pub fn with_start_selector(mut self, start_selector: impl Into<String>) -> Self {
        self.start_selector = start_selector.into();
        self
    }

    /// Sets the container/wrapper class names.
    pub fn with_structure_classes(
        mut self,
        container_class: impl Into<String>,
        wrapper_class: impl Into<String>,
    ) -> Self {
        self.container_class = container_class.into();
        self.wrapper_class = wrapper_class.into();
        self
    }

    pub fn with_enabled_class(mut self, enabled_class: impl Into<String>) -> Self {
        self.enabled_class = enabled_class.into();
        self
    }

    /// Sets the class names of the previous/next buttons.
    pub fn with_button_classes(
        mut self,
        prev_class: impl Into<String>,
        next_class: impl Into<String>,
    ) -> Self {
        self.prev_class = prev_class.into();
        self.next_class = next_class.into();
        self
    }

    /// Sets the inner HTML of the previous/next buttons.
    pub fn with_button_content(
        mut self,
        prev_content: impl Into<String>,
        next_content: impl Into<String>,
    ) -> Self {
        self.prev_content = prev_content.into();
        self.next_content = next_content.into();
        self
    }

    /// Sets the hidden and disabled state classes applied to buttons.
    pub fn with_state_classes(
        mut self,
        hidden_class: impl Into<String>,
        disabled_button_class: impl Into<String>,
    ) -> Self {
        self.hidden_class = hidden_class.into();
        self.disabled_button_class = disabled_button_class.into();
        self
    }

    pub fn with_animation_speed(mut self, animation_speed: u64) -> Self {
        self.animation_speed = animation_speed;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_spacing(mut self, spacing: impl Into<Spacing>) -> Self {
        self.spacing = spacing.into();
        self
    }

    pub fn with_default_max_width(mut self, default_max_width: u32) -> Self {
        self.default_max_width = default_max_width;
        self
    }

    pub fn with_visible_portion(mut self, visible_portion: f64) -> Self {
        self.visible_portion = visible_portion;
        self
    }

    pub fn with_scrollbar_fallback(mut self, scrollbar_fallback: u32) -> Self {
        self.scrollbar_fallback = scrollbar_fallback;
        self
    }

    pub fn with_default_until(mut self, default_until: u32) -> Self {
        self.default_until = default_until;
        self
    }

    pub fn with_resize_throttle_ms(mut self, resize_throttle_ms: u64) -> Self {
        self.resize_throttle_ms = resize_throttle_ms;
        self
    }

    pub fn with_start_item_delay_ms(mut self, start_item_delay_ms: u64) -> Self {
        self.start_item_delay_ms = start_item_delay_ms;
        self
    }
}
