use core::fmt;

use swiper::{
    Animation, AnimationHandle, AnimationState, BottomReserve, Direction, NavState,
    ScrollMetrics, Settings, StripLayout, Tween, compute_spacing, is_overflowing, items_per_page,
};

use crate::dom::{percent, px};
use crate::{ATTR_ITEMS_TO_SCROLL, Chrome, Dom, InstanceOptions, unwrap, wrap};

/// Per-list state: the synthesized structure, the cached page size and the active animation.
///
/// This type does not own the page. Every operation takes the [`Dom`] it should act on, so the
/// same controller can be driven by [`crate::Swipers`] or directly by an adapter.
///
/// At most one scroll animation is active at a time: starting a new one cancels the previous.
#[derive(Clone, Debug)]
pub struct Controller<N> {
    list: N,
    options: InstanceOptions,
    start_item: Option<N>,
    chrome: Option<Chrome<N>>,
    items_per_page: usize,
    spacing: u32,
    animation: Option<Animation>,
    start_due_ms: Option<u64>,
}

impl<N: Clone + PartialEq + fmt::Debug> Controller<N> {
    pub fn new(list: N, options: InstanceOptions, start_item: Option<N>) -> Self {
        Self {
            list,
            options,
            start_item,
            chrome: None,
            items_per_page: 1,
            spacing: 0,
            animation: None,
            start_due_ms: None,
        }
    }

    /// Reads the element's overrides and start item through `dom`.
    pub fn from_dom<D: Dom<Node = N>>(dom: &D, settings: &Settings, list: N) -> Self {
        let options = InstanceOptions::read(dom, &list);
        let start_item = dom.query_descendant(&list, &settings.start_selector);
        Self::new(list, options, start_item)
    }

    pub fn list(&self) -> &N {
        &self.list
    }

    pub fn options(&self) -> &InstanceOptions {
        &self.options
    }

    pub fn start_item(&self) -> Option<&N> {
        self.start_item.as_ref()
    }

    /// Replaces the item brought into view by the next scheduled start jump.
    pub fn set_start_item(&mut self, item: N) {
        self.start_item = Some(item);
    }

    pub fn chrome(&self) -> Option<&Chrome<N>> {
        self.chrome.as_ref()
    }

    pub fn is_enabled(&self) -> bool {
        self.chrome.is_some()
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Spacing applied by the last layout pass (px).
    pub fn spacing(&self) -> u32 {
        self.spacing
    }

    pub fn is_animating(&self) -> bool {
        self.animation.as_ref().is_some_and(Animation::is_active)
    }

    /// Whether an animation or the start-item jump is still pending.
    pub fn is_busy(&self) -> bool {
        self.is_animating() || self.start_due_ms.is_some()
    }

    /// Cancel capability of the active scroll animation.
    pub fn animation_handle(&self) -> Option<AnimationHandle> {
        self.animation.as_ref().map(Animation::handle)
    }

    pub fn cancel_animation(&mut self) {
        if let Some(animation) = self.animation.take() {
            animation.cancel();
        }
    }

    /// Whether `enable` would leave this list paged at the given viewport width.
    pub fn wants_enabled(&self, settings: &Settings, viewport_width: f64) -> bool {
        viewport_width < f64::from(self.options.until(settings))
    }

    /// Which navigation button of this list `node` is, if any.
    pub fn button_direction(&self, node: &N) -> Option<Direction> {
        self.chrome.as_ref()?.direction_of(node)
    }

    pub fn owns_container(&self, node: &N) -> bool {
        self.chrome.as_ref().is_some_and(|c| c.container == *node)
    }

    /// Wraps the list (if needed), then lays it out and syncs the buttons.
    ///
    /// Returns `true` when the structure was created by this call.
    pub fn enable<D: Dom<Node = N>>(
        &mut self,
        dom: &mut D,
        settings: &Settings,
        scrollbar: Option<f64>,
    ) -> bool {
        let created = if self.chrome.is_none() {
            let Some(chrome) = wrap(dom, settings, &self.list) else {
                return false;
            };
            self.chrome = Some(chrome);
            true
        } else {
            false
        };
        self.apply_layout(dom, settings, scrollbar);
        self.update_nav(dom, settings);
        created
    }

    /// Removes the structure and inline styles. No-op when not enabled.
    pub fn disable<D: Dom<Node = N>>(&mut self, dom: &mut D, settings: &Settings) -> bool {
        self.cancel_animation();
        self.start_due_ms = None;
        let Some(chrome) = self.chrome.take() else {
            return false;
        };
        unwrap(dom, settings, &self.list, &chrome);
        true
    }

    /// Applies the strip layout for the current container width and viewport.
    pub fn apply_layout<D: Dom<Node = N>>(
        &mut self,
        dom: &mut D,
        settings: &Settings,
        scrollbar: Option<f64>,
    ) {
        let Some(chrome) = self.chrome.clone() else {
            return;
        };
        let viewport_width = dom.viewport_width();
        self.spacing = compute_spacing(
            self.options.spacing.as_ref(),
            &settings.spacing,
            viewport_width,
        );
        self.items_per_page = items_per_page(
            dom.offset_width(&chrome.container),
            settings.visible_portion,
            self.options.max_width(settings),
            self.spacing,
        );
        dom.set_attribute(
            &chrome.container,
            ATTR_ITEMS_TO_SCROLL,
            &self.items_per_page.to_string(),
        );

        let items = dom.children(&self.list);
        let bottom = BottomReserve::from_scrollbar(scrollbar, settings.scrollbar_fallback);
        let Some(layout) = StripLayout::compute(
            items.len(),
            self.items_per_page,
            settings.visible_portion,
            self.spacing,
            bottom,
        ) else {
            swarn!(list = ?self.list, "swiper list has no items");
            set_buttons_visible(dom, settings, &chrome, false);
            return;
        };

        let padding = px(f64::from(layout.spacing));
        let item_width = percent(layout.item_width_pct);
        for item in &items {
            dom.set_style(item, "float", "left");
            dom.set_style(item, "width", &item_width);
            dom.set_style(item, "padding-left", &padding);
            dom.set_style(item, "padding-right", &padding);
        }

        let margin = px(layout.container_margin());
        dom.set_style(&chrome.container, "margin-left", &margin);
        dom.set_style(&chrome.container, "margin-right", &margin);
        dom.set_style(&chrome.container, "margin-bottom", &px(bottom.container_margin));
        dom.set_style(&self.list, "width", &percent(layout.list_width_pct));
        dom.set_style(&self.list, "padding-bottom", &px(bottom.list_padding));

        let overflowing = is_overflowing(
            dom.offset_width(&chrome.container),
            dom.offset_width(&self.list),
        );
        set_buttons_visible(dom, settings, &chrome, overflowing);
        strace!(
            list = ?self.list,
            items_per_page = self.items_per_page,
            spacing = self.spacing,
            overflowing,
            "swiper layout applied"
        );
    }

    /// Syncs the buttons' enabled state with the container's scroll position.
    pub fn update_nav<D: Dom<Node = N>>(&self, dom: &mut D, settings: &Settings) {
        let Some(chrome) = &self.chrome else {
            return;
        };
        let container = &chrome.container;
        let state = NavState::from_scroll(
            dom.scroll_left(container),
            dom.scroll_width(container),
            dom.offset_width(container),
        );
        for direction in [Direction::Prev, Direction::Next] {
            let enabled = state.get(direction).is_enabled();
            set_button_enabled(dom, settings, chrome.button(direction), enabled);
        }
    }

    fn metrics<D: Dom<Node = N>>(&self, dom: &D, chrome: &Chrome<N>) -> Option<ScrollMetrics> {
        let first = dom.children(&self.list).into_iter().next()?;
        Some(ScrollMetrics {
            scroll_offset: dom.scroll_left(&chrome.container),
            item_width: dom.offset_width(&first),
            items_per_page: self.items_per_page,
            wrapper_width: dom.offset_width(&chrome.wrapper),
            list_width: dom.offset_width(&self.list),
            container_margin: f64::from(self.spacing),
        })
    }

    /// Starts animating one page in `direction`.
    ///
    /// Returns the target offset, or `None` when the list is disabled or has nothing to page.
    pub fn scroll_to<D: Dom<Node = N>>(
        &mut self,
        dom: &mut D,
        settings: &Settings,
        direction: Direction,
        now_ms: u64,
    ) -> Option<f64> {
        let chrome = self.chrome.as_ref()?;
        let metrics = self.metrics(dom, chrome)?;
        let target = metrics.page_target(direction)?;
        self.start_animation(settings, metrics.scroll_offset, target, now_ms);
        Some(target)
    }

    /// Starts animating so that `item` lands where a page would start.
    pub fn scroll_to_item<D: Dom<Node = N>>(
        &mut self,
        dom: &mut D,
        settings: &Settings,
        item: &N,
        now_ms: u64,
    ) -> Option<f64> {
        let chrome = self.chrome.as_ref()?;
        let metrics = self.metrics(dom, chrome)?;
        let target = metrics.item_target(dom.offset_left(item));
        self.start_animation(settings, metrics.scroll_offset, target, now_ms);
        Some(target)
    }

    fn start_animation(&mut self, settings: &Settings, from: f64, to: f64, now_ms: u64) {
        self.cancel_animation();
        let tween = Tween::new(from, to, now_ms, settings.animation_speed, settings.easing);
        self.animation = Some(Animation::new(tween));
    }

    /// Schedules the jump to the start item (if the list has one) for `due_ms`.
    pub fn schedule_start(&mut self, due_ms: u64) {
        if self.start_item.is_some() && self.is_enabled() {
            self.start_due_ms = Some(due_ms);
        }
    }

    /// Advances the pending start jump and the active animation.
    ///
    /// Returns `true` while more ticks are needed.
    pub fn tick<D: Dom<Node = N>>(&mut self, dom: &mut D, settings: &Settings, now_ms: u64) -> bool {
        if self.start_due_ms.is_some_and(|due| now_ms >= due) {
            self.start_due_ms = None;
            if let Some(item) = self.start_item.clone() {
                self.scroll_to_item(dom, settings, &item, now_ms);
            }
        }

        let (Some(chrome), Some(animation)) = (&self.chrome, self.animation.as_mut()) else {
            return self.start_due_ms.is_some();
        };
        let container = &chrome.container;
        match animation.step(now_ms, |offset| dom.set_scroll_left(container, offset)) {
            AnimationState::Running => true,
            AnimationState::Done | AnimationState::Cancelled => {
                self.animation = None;
                self.start_due_ms.is_some()
            }
        }
    }
}

fn set_button_enabled<D: Dom>(dom: &mut D, settings: &Settings, button: &D::Node, enabled: bool) {
    if enabled {
        dom.remove_class(button, &settings.disabled_button_class);
        dom.remove_attribute(button, "disabled");
    } else {
        dom.add_class(button, &settings.disabled_button_class);
        dom.set_attribute(button, "disabled", "disabled");
    }
}

fn set_buttons_visible<D: Dom>(
    dom: &mut D,
    settings: &Settings,
    chrome: &Chrome<D::Node>,
    visible: bool,
) {
    for button in [&chrome.prev, &chrome.next] {
        if visible {
            dom.remove_class(button, &settings.hidden_class);
            dom.clear_styles(button);
        } else {
            dom.add_class(button, &settings.hidden_class);
            dom.set_style(button, "display", "none");
        }
    }
}
