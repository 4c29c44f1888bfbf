// Example: the paging math on its own, with an adapter-owned scroll offset.
use swiper::{
    Animation, AnimationState, BottomReserve, Direction, Easing, NavState, ScrollMetrics,
    Settings, StripLayout, Tween, compute_spacing, items_per_page,
};

fn main() {
    let settings = Settings::default();
    let viewport = 1024.0;
    let container_width = 1000.0;
    let item_count = 12;

    let spacing = compute_spacing(None, &settings.spacing, viewport);
    let k = items_per_page(
        container_width,
        settings.visible_portion,
        settings.default_max_width,
        spacing,
    );
    let bottom = BottomReserve::from_scrollbar(Some(15.0), settings.scrollbar_fallback);
    let Some(layout) = StripLayout::compute(item_count, k, settings.visible_portion, spacing, bottom)
    else {
        return;
    };
    println!(
        "items_per_page={k} item_width={:.3}% list_width={:.3}%",
        layout.item_width_pct, layout.list_width_pct
    );

    let list_width = container_width * layout.list_width_pct / 100.0;
    let mut metrics = ScrollMetrics {
        scroll_offset: 0.0,
        item_width: list_width * layout.item_width_pct / 100.0,
        items_per_page: k,
        wrapper_width: container_width - 2.0 * f64::from(spacing),
        list_width,
        container_margin: f64::from(spacing),
    };

    // Page forward until the end, then back once.
    let mut now_ms = 0u64;
    for direction in [Direction::Next, Direction::Next, Direction::Next, Direction::Prev] {
        let Some(to) = metrics.page_target(direction) else {
            break;
        };
        let tween = Tween::new(
            metrics.scroll_offset,
            to,
            now_ms,
            settings.animation_speed,
            Easing::EaseOutQuart,
        );
        let mut animation = Animation::new(tween);
        loop {
            now_ms += 16;
            let state = animation.step(now_ms, |offset| metrics.scroll_offset = offset);
            if state != AnimationState::Running {
                break;
            }
        }

        let nav = NavState::from_scroll(metrics.scroll_offset, list_width, container_width);
        println!(
            "{direction:?}: offset={:.1} prev={:?} next={:?}",
            metrics.scroll_offset, nav.prev, nav.next
        );
    }
}
