use core::fmt;

/// Events the adapter subscribes to on injected or managed elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Navigation button activation; route to [`crate::Swipers::on_click`].
    Click,
    /// Container scroll; route to [`crate::Swipers::on_scroll`].
    Scroll,
}

/// The page capabilities the adapter needs.
///
/// Implementations wrap a real document (e.g. through a browser binding) or an in-memory tree.
/// Listener registration is bookkeeping only: the host forwards the matching native events to
/// the [`crate::Swipers`] entry points.
///
/// Element-tree methods follow DOM semantics: `insert_before` moves a node that is already
/// attached elsewhere, and measurements are rendered sizes in CSS px.
pub trait Dom {
    type Node: Clone + PartialEq + fmt::Debug;

    /// Whether the environment offers everything the adapter relies on.
    ///
    /// When this returns `false`, initialization silently does nothing.
    fn is_supported(&self) -> bool {
        true
    }

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    /// First descendant of `root` matching `selector`.
    fn query_descendant(&self, root: &Self::Node, selector: &str) -> Option<Self::Node>;
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;
    /// Element children of `node`, in order.
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    fn create_element(&mut self, tag: &str) -> Self::Node;
    /// Inserts `node` into `parent` before `reference`, or appends it when `reference` is `None`.
    fn insert_before(
        &mut self,
        parent: &Self::Node,
        node: &Self::Node,
        reference: Option<&Self::Node>,
    );
    /// Detaches `node` from its parent.
    fn remove(&mut self, node: &Self::Node);

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn add_class(&mut self, node: &Self::Node, class: &str);
    fn remove_class(&mut self, node: &Self::Node, class: &str);

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);
    fn remove_attribute(&mut self, node: &Self::Node, name: &str);

    /// Sets one inline style property (CSS property name, e.g. `padding-left`).
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str);
    /// Drops every inline style of `node`.
    fn clear_styles(&mut self, node: &Self::Node);
    fn set_inner_html(&mut self, node: &Self::Node, html: &str);

    fn viewport_width(&self) -> f64;
    fn offset_width(&self, node: &Self::Node) -> f64;
    /// Horizontal offset of `node` inside its parent.
    fn offset_left(&self, node: &Self::Node) -> f64;
    fn scroll_left(&self, node: &Self::Node) -> f64;
    fn set_scroll_left(&mut self, node: &Self::Node, value: f64);
    fn scroll_width(&self, node: &Self::Node) -> f64;

    /// Measures the thickness of a native horizontal scrollbar.
    ///
    /// Returns `None` where it cannot be measured (e.g. overlay scrollbars). The adapter calls
    /// this at most once per [`crate::Swipers`].
    fn scrollbar_size(&mut self) -> Option<f64>;

    fn add_listener(&mut self, node: &Self::Node, kind: EventKind);
    fn remove_listener(&mut self, node: &Self::Node, kind: EventKind);
    fn add_resize_listener(&mut self);
    fn remove_resize_listener(&mut self);
}

pub(crate) fn px(value: f64) -> String {
    // `-0px` reads oddly in inline styles.
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}px")
}

pub(crate) fn percent(value: f64) -> String {
    format!("{value}%")
}
