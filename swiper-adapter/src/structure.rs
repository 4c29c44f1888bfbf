use swiper::{Direction, Settings};

use crate::{Dom, EventKind};

/// Elements synthesized around an enabled item list.
///
/// The resulting tree is `wrapper > [prev, container > list, next]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Chrome<N> {
    pub wrapper: N,
    pub container: N,
    pub prev: N,
    pub next: N,
}

impl<N: PartialEq> Chrome<N> {
    pub fn button(&self, direction: Direction) -> &N {
        match direction {
            Direction::Prev => &self.prev,
            Direction::Next => &self.next,
        }
    }

    /// Which navigation button `node` is, if any.
    pub fn direction_of(&self, node: &N) -> Option<Direction> {
        if *node == self.prev {
            Some(Direction::Prev)
        } else if *node == self.next {
            Some(Direction::Next)
        } else {
            None
        }
    }
}

/// Wraps `list` in a container and a wrapper, and injects the navigation buttons.
///
/// Returns `None` without touching the page when `list` is detached or already sits in a
/// container.
pub fn wrap<D: Dom>(dom: &mut D, settings: &Settings, list: &D::Node) -> Option<Chrome<D::Node>> {
    let Some(parent) = dom.parent(list) else {
        swarn!(list = ?list, "cannot wrap a detached swiper list");
        return None;
    };
    if dom.has_class(&parent, &settings.container_class) {
        sdebug!(list = ?list, "swiper list is already wrapped");
        return None;
    }

    let wrapper = dom.create_element("div");
    let container = dom.create_element("div");
    dom.add_class(&wrapper, &settings.wrapper_class);
    dom.add_class(&container, &settings.container_class);

    dom.insert_before(&parent, &container, Some(list));
    dom.insert_before(&container, list, None);
    dom.insert_before(&parent, &wrapper, Some(&container));
    dom.insert_before(&wrapper, &container, None);

    let prev = create_button(dom, &settings.prev_class, &settings.prev_content);
    let next = create_button(dom, &settings.next_class, &settings.next_content);
    // Scrolled to the start: nothing to go back to yet.
    dom.add_class(&prev, &settings.disabled_button_class);
    dom.set_attribute(&prev, "disabled", "disabled");

    dom.insert_before(&wrapper, &prev, Some(&container));
    dom.insert_before(&wrapper, &next, None);
    dom.add_listener(&prev, EventKind::Click);
    dom.add_listener(&next, EventKind::Click);

    dom.add_class(list, &settings.enabled_class);
    dom.add_listener(&container, EventKind::Scroll);

    sdebug!(list = ?list, "swiper wrapped");
    Some(Chrome {
        wrapper,
        container,
        prev,
        next,
    })
}

fn create_button<D: Dom>(dom: &mut D, class: &str, content: &str) -> D::Node {
    let button = dom.create_element("button");
    dom.add_class(&button, class);
    dom.set_attribute(&button, "type", "button");
    dom.set_inner_html(&button, content);
    button
}

/// Reverses [`wrap`]: removes the buttons and listeners, strips the inline layout styles, and
/// puts `list` back where the wrapper was.
///
/// Returns `false` when the expected structure is no longer in place; whatever could be cleaned
/// up is still cleaned up.
pub fn unwrap<D: Dom>(
    dom: &mut D,
    settings: &Settings,
    list: &D::Node,
    chrome: &Chrome<D::Node>,
) -> bool {
    for button in [&chrome.prev, &chrome.next] {
        dom.remove_listener(button, EventKind::Click);
        dom.remove(button);
    }
    dom.remove_listener(&chrome.container, EventKind::Scroll);

    for item in dom.children(list) {
        dom.clear_styles(&item);
    }
    dom.remove_class(list, &settings.enabled_class);
    dom.clear_styles(list);

    let in_container = dom.parent(list).as_ref() == Some(&chrome.container);
    let Some(outer) = dom.parent(&chrome.wrapper).filter(|_| in_container) else {
        swarn!(list = ?list, "swiper structure changed under us; leaving list in place");
        return false;
    };
    dom.insert_before(&outer, list, Some(&chrome.wrapper));
    dom.remove(&chrome.wrapper);

    sdebug!(list = ?list, "swiper unwrapped");
    true
}
