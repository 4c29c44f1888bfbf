use swiper::Settings;

use crate::{Controller, Dom, merge_settings_json};

/// Manages every swiper on a page.
///
/// Owns the [`Dom`] it acts on, the settings it was initialized with and one [`Controller`] per
/// managed list. The host drives it:
///
/// - `init` / `destroy` for the lifecycle, `enable` / `disable` for individual lists
/// - `on_click` / `on_scroll` / `on_resize` when the matching native events fire
/// - `tick(now_ms)` on every animation frame (or timer) while it returns `true`
///
/// Nothing here reports errors: unsupported environments, unexpected markup and malformed
/// attributes all degrade to a no-op.
#[derive(Debug)]
pub struct Swipers<D: Dom> {
    dom: D,
    settings: Option<Settings>,
    controllers: Vec<Controller<D::Node>>,
    scrollbar: Option<Option<f64>>,
    resize_due_ms: Option<u64>,
}

impl<D: Dom> Swipers<D> {
    pub fn new(dom: D) -> Self {
        Self {
            dom,
            settings: None,
            controllers: Vec::new(),
            scrollbar: None,
            resize_due_ms: None,
        }
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    pub fn into_dom(self) -> D {
        self.dom
    }

    pub fn settings(&self) -> Option<&Settings> {
        self.settings.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.settings.is_some()
    }

    pub fn controllers(&self) -> &[Controller<D::Node>] {
        &self.controllers
    }

    pub fn controller(&self, list: &D::Node) -> Option<&Controller<D::Node>> {
        self.controllers.iter().find(|c| c.list() == list)
    }

    /// Whether any animation, start jump or resize recomputation is still pending.
    pub fn is_busy(&self) -> bool {
        self.resize_due_ms.is_some() || self.controllers.iter().any(Controller::is_busy)
    }

    /// Discovers the lists matching `settings.selector` and pages the ones below their
    /// breakpoint.
    ///
    /// Calling it again tears the previous initialization down first. Returns `false` (and does
    /// nothing) when the environment is not supported.
    pub fn init(&mut self, settings: Settings, now_ms: u64) -> bool {
        if !self.dom.is_supported() {
            sdebug!("swiper environment not supported");
            return false;
        }
        self.destroy();

        let lists = self.dom.query_all(&settings.selector);
        self.controllers = lists
            .into_iter()
            .map(|list| Controller::from_dom(&self.dom, &settings, list))
            .collect();
        sdebug!(count = self.controllers.len(), "swipers discovered");
        self.settings = Some(settings);

        self.refresh();

        if let Some(settings) = &self.settings {
            let due_ms = now_ms.saturating_add(settings.start_item_delay_ms);
            for controller in &mut self.controllers {
                controller.schedule_start(due_ms);
            }
        }
        self.dom.add_resize_listener();
        true
    }

    /// Like [`Swipers::init`], with settings merged from a JSON object of overrides.
    ///
    /// Ill-typed keys are skipped individually; input that is not a JSON object is ignored in
    /// favor of the defaults.
    pub fn init_with_json(&mut self, overrides: &str, now_ms: u64) -> bool {
        let settings = match merge_settings_json(overrides) {
            Ok((settings, rejected)) => {
                for _err in &rejected {
                    swarn!(error = %_err, "ignoring swiper setting");
                }
                settings
            }
            Err(_err) => {
                swarn!(error = %_err, "ignoring malformed swiper settings");
                Settings::default()
            }
        };
        self.init(settings, now_ms)
    }

    /// Pages `list`, tracking it first if it was not discovered by `init`.
    ///
    /// Returns `true` when the structure was created by this call.
    pub fn enable(&mut self, list: &D::Node) -> bool {
        let scrollbar = self.scrollbar_size();
        let Some(settings) = &self.settings else {
            return false;
        };
        let index = match self.controllers.iter().position(|c| c.list() == list) {
            Some(index) => index,
            None => {
                let controller = Controller::from_dom(&self.dom, settings, list.clone());
                self.controllers.push(controller);
                self.controllers.len() - 1
            }
        };
        self.controllers[index].enable(&mut self.dom, settings, scrollbar)
    }

    /// Like [`Swipers::enable`], then brings a start item into view after the start delay.
    ///
    /// `start_item` replaces the item discovered through `start_selector`; with `None` the
    /// discovered one (if any) is used. Returns `true` when the structure was created by this
    /// call.
    pub fn enable_with_start(
        &mut self,
        list: &D::Node,
        start_item: Option<&D::Node>,
        now_ms: u64,
    ) -> bool {
        let created = self.enable(list);
        let Some(settings) = &self.settings else {
            return created;
        };
        let due_ms = now_ms.saturating_add(settings.start_item_delay_ms);
        if let Some(controller) = self.controllers.iter_mut().find(|c| c.list() == list) {
            if let Some(item) = start_item {
                controller.set_start_item(item.clone());
            }
            controller.schedule_start(due_ms);
        }
        created
    }

    /// Restores `list` to its unpaged markup. No-op for lists that are not paged.
    pub fn disable(&mut self, list: &D::Node) -> bool {
        let Some(settings) = &self.settings else {
            return false;
        };
        self.controllers
            .iter_mut()
            .find(|c| c.list() == list)
            .is_some_and(|c| c.disable(&mut self.dom, settings))
    }

    /// Removes every injected element and listener and forgets all state but the scrollbar
    /// probe. A later `init` starts clean.
    pub fn destroy(&mut self) {
        let Some(settings) = self.settings.take() else {
            return;
        };
        self.dom.remove_resize_listener();
        for mut controller in self.controllers.drain(..) {
            controller.disable(&mut self.dom, &settings);
        }
        self.resize_due_ms = None;
        sdebug!("swipers destroyed");
    }

    /// Routes a click on a navigation button.
    ///
    /// Returns the scroll target when `button` belongs to a paged list.
    pub fn on_click(&mut self, button: &D::Node, now_ms: u64) -> Option<f64> {
        let settings = self.settings.as_ref()?;
        let (controller, direction) = self
            .controllers
            .iter_mut()
            .find_map(|c| c.button_direction(button).map(|d| (c, d)))?;
        controller.scroll_to(&mut self.dom, settings, direction, now_ms)
    }

    /// Routes a scroll notification from a container; updates its buttons immediately.
    pub fn on_scroll(&mut self, container: &D::Node) -> bool {
        let Some(settings) = &self.settings else {
            return false;
        };
        let Some(controller) = self.controllers.iter().find(|c| c.owns_container(container))
        else {
            return false;
        };
        controller.update_nav(&mut self.dom, settings);
        true
    }

    /// Records a viewport resize.
    ///
    /// The first resize of a burst schedules one recomputation `resize_throttle_ms` later;
    /// further resizes before then are absorbed.
    pub fn on_resize(&mut self, now_ms: u64) {
        let Some(settings) = &self.settings else {
            return;
        };
        if self.resize_due_ms.is_none() {
            self.resize_due_ms = Some(now_ms.saturating_add(settings.resize_throttle_ms));
        }
    }

    /// Advances pending work: the throttled resize recomputation, start-item jumps and scroll
    /// animations.
    ///
    /// Returns `true` while more ticks are needed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.resize_due_ms.is_some_and(|due| now_ms >= due) {
            self.resize_due_ms = None;
            self.refresh();
        }

        let Some(settings) = &self.settings else {
            return false;
        };
        let mut busy = self.resize_due_ms.is_some();
        for controller in &mut self.controllers {
            busy |= controller.tick(&mut self.dom, settings, now_ms);
        }
        busy
    }

    /// Re-evaluates every list against its breakpoint at the current viewport width.
    fn refresh(&mut self) {
        let scrollbar = self.scrollbar_size();
        let Some(settings) = &self.settings else {
            return;
        };
        let viewport_width = self.dom.viewport_width();
        for controller in &mut self.controllers {
            if controller.wants_enabled(settings, viewport_width) {
                controller.enable(&mut self.dom, settings, scrollbar);
            } else {
                controller.disable(&mut self.dom, settings);
            }
        }
        strace!(viewport_width, "swipers refreshed");
    }

    fn scrollbar_size(&mut self) -> Option<f64> {
        *self
            .scrollbar
            .get_or_insert_with(|| self.dom.scrollbar_size())
    }
}
