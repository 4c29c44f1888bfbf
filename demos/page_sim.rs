// Example: a simulated page driven the way a browser binding would drive it.
//
// Run with `RUST_LOG=swiper_adapter=debug cargo run --example page_sim --features tracing`
// to see the lifecycle logs.
use swiper_kit::{Dom, EventKind, Settings, Swipers};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, Default)]
struct Node {
    tag: String,
    parent: Option<usize>,
    children: Vec<usize>,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    styles: Vec<(String, String)>,
    scroll_left: f64,
}

/// A tiny document: block elements fill their parent, `%` widths are relative to it, and
/// children sit side by side.
#[derive(Debug)]
struct Page {
    nodes: Vec<Node>,
    viewport: f64,
    listeners: usize,
}

impl Page {
    fn new(viewport: f64) -> Self {
        Self {
            nodes: vec![Node {
                tag: "body".into(),
                ..Node::default()
            }],
            viewport,
            listeners: 0,
        }
    }

    fn append(&mut self, parent: usize, tag: &str) -> usize {
        let id = self.create_element(tag);
        self.insert_before(&parent, &id, None);
        id
    }

    fn style(&self, id: usize, property: &str) -> Option<&str> {
        self.nodes[id]
            .styles
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    fn px_style(&self, id: usize, property: &str) -> f64 {
        self.style(id, property)
            .and_then(|v| v.strip_suffix("px"))
            .and_then(|v| v.parse().ok())
            .unwrap_or(0.0)
    }

    fn width(&self, id: usize) -> f64 {
        if self.style(id, "display") == Some("none") {
            return 0.0;
        }
        let parent = self.nodes[id]
            .parent
            .map_or(self.viewport, |p| self.width(p));
        match self
            .style(id, "width")
            .and_then(|w| w.strip_suffix('%'))
            .and_then(|w| w.parse::<f64>().ok())
        {
            Some(pct) => parent * pct / 100.0,
            None => parent - self.px_style(id, "margin-left") - self.px_style(id, "margin-right"),
        }
    }

    fn walk(&self, id: usize, out: &mut Vec<usize>) {
        for &child in &self.nodes[id].children {
            out.push(child);
            self.walk(child, out);
        }
    }

    fn matches(&self, id: usize, selector: &str) -> bool {
        let node = &self.nodes[id];
        match selector.strip_prefix('.') {
            Some(class) => node.classes.iter().any(|c| c == class),
            None => selector
                .strip_prefix('[')
                .and_then(|s| s.strip_suffix(']'))
                .is_some_and(|attr| node.attrs.iter().any(|(a, _)| a == attr)),
        }
    }

    fn render(&self, id: usize, depth: usize, out: &mut String) {
        let node = &self.nodes[id];
        if node.tag == "li" {
            return;
        }
        let items = node.children.iter().filter(|&&c| self.nodes[c].tag == "li").count();
        out.push_str(&format!(
            "{:indent$}<{} class=\"{}\"> width={:.0}{}\n",
            "",
            node.tag,
            node.classes.join(" "),
            self.width(id),
            if items > 0 { format!(" items={items}") } else { String::new() },
            indent = depth * 2
        ));
        for &child in &node.children {
            self.render(child, depth + 1, out);
        }
    }
}

impl Dom for Page {
    type Node = usize;

    fn query_all(&self, selector: &str) -> Vec<usize> {
        let mut all = Vec::new();
        self.walk(0, &mut all);
        all.retain(|&id| self.matches(id, selector));
        all
    }

    fn query_descendant(&self, root: &usize, selector: &str) -> Option<usize> {
        let mut all = Vec::new();
        self.walk(*root, &mut all);
        all.into_iter().find(|&id| self.matches(id, selector))
    }

    fn parent(&self, node: &usize) -> Option<usize> {
        self.nodes[*node].parent
    }

    fn children(&self, node: &usize) -> Vec<usize> {
        self.nodes[*node].children.clone()
    }

    fn create_element(&mut self, tag: &str) -> usize {
        self.nodes.push(Node {
            tag: tag.to_owned(),
            ..Node::default()
        });
        self.nodes.len() - 1
    }

    fn insert_before(&mut self, parent: &usize, node: &usize, reference: Option<&usize>) {
        self.remove(node);
        let siblings = &mut self.nodes[*parent].children;
        let at = reference
            .and_then(|r| siblings.iter().position(|c| c == r))
            .unwrap_or(siblings.len());
        siblings.insert(at, *node);
        self.nodes[*node].parent = Some(*parent);
    }

    fn remove(&mut self, node: &usize) {
        if let Some(parent) = self.nodes[*node].parent.take() {
            self.nodes[parent].children.retain(|c| c != node);
        }
    }

    fn has_class(&self, node: &usize, class: &str) -> bool {
        self.nodes[*node].classes.iter().any(|c| c == class)
    }

    fn add_class(&mut self, node: &usize, class: &str) {
        if !self.has_class(node, class) {
            self.nodes[*node].classes.push(class.to_owned());
        }
    }

    fn remove_class(&mut self, node: &usize, class: &str) {
        self.nodes[*node].classes.retain(|c| c != class);
    }

    fn attribute(&self, node: &usize, name: &str) -> Option<String> {
        self.nodes[*node]
            .attrs
            .iter()
            .find(|(a, _)| a == name)
            .map(|(_, v)| v.clone())
    }

    fn set_attribute(&mut self, node: &usize, name: &str, value: &str) {
        self.remove_attribute(node, name);
        self.nodes[*node]
            .attrs
            .push((name.to_owned(), value.to_owned()));
    }

    fn remove_attribute(&mut self, node: &usize, name: &str) {
        self.nodes[*node].attrs.retain(|(a, _)| a != name);
    }

    fn set_style(&mut self, node: &usize, property: &str, value: &str) {
        let styles = &mut self.nodes[*node].styles;
        styles.retain(|(p, _)| p != property);
        styles.push((property.to_owned(), value.to_owned()));
    }

    fn clear_styles(&mut self, node: &usize) {
        self.nodes[*node].styles.clear();
    }

    fn set_inner_html(&mut self, _node: &usize, _html: &str) {}

    fn viewport_width(&self) -> f64 {
        self.viewport
    }

    fn offset_width(&self, node: &usize) -> f64 {
        self.width(*node)
    }

    fn offset_left(&self, node: &usize) -> f64 {
        let Some(parent) = self.nodes[*node].parent else {
            return 0.0;
        };
        self.nodes[parent]
            .children
            .iter()
            .take_while(|&c| c != node)
            .map(|&c| self.width(c))
            .sum()
    }

    fn scroll_left(&self, node: &usize) -> f64 {
        self.nodes[*node].scroll_left
    }

    fn set_scroll_left(&mut self, node: &usize, value: f64) {
        let max = (self.scroll_width(node) - self.width(*node)).max(0.0);
        self.nodes[*node].scroll_left = value.clamp(0.0, max);
    }

    fn scroll_width(&self, node: &usize) -> f64 {
        self.nodes[*node]
            .children
            .iter()
            .map(|&c| self.width(c))
            .fold(self.width(*node), f64::max)
    }

    fn scrollbar_size(&mut self) -> Option<f64> {
        Some(17.0)
    }

    fn add_listener(&mut self, _node: &usize, _kind: EventKind) {
        self.listeners += 1;
    }

    fn remove_listener(&mut self, _node: &usize, _kind: EventKind) {
        self.listeners = self.listeners.saturating_sub(1);
    }

    fn add_resize_listener(&mut self) {}

    fn remove_resize_listener(&mut self) {}
}

/// Ticks at ~60fps until nothing is pending; returns the clock afterwards.
fn settle(swipers: &mut Swipers<Page>, mut now_ms: u64) -> u64 {
    while swipers.tick(now_ms) {
        now_ms += 16;
    }
    now_ms
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut page = Page::new(1024.0);
    let main_el = page.append(0, "main");
    let list = page.append(main_el, "ul");
    page.set_attribute(&list, "data-swipe-natural", "");
    page.set_attribute(&list, "data-swipe-until", "1200");
    for i in 0..12 {
        let item = page.append(list, "li");
        if i == 5 {
            page.set_attribute(&item, "data-swipe-start", "");
        }
    }

    let mut swipers = Swipers::new(page);
    swipers.init(Settings::default(), 0);
    let mut out = String::new();
    swipers.dom().render(0, 0, &mut out);
    print!("{out}");

    let Some(chrome) = swipers.controller(&list).and_then(|c| c.chrome()).cloned() else {
        return;
    };
    let mut now_ms = settle(&mut swipers, 0);
    swipers.on_scroll(&chrome.container);
    println!(
        "start item in view: offset={:.1}",
        swipers.dom().scroll_left(&chrome.container)
    );

    for _ in 0..4 {
        let target = swipers.on_click(&chrome.next, now_ms);
        now_ms = settle(&mut swipers, now_ms);
        swipers.on_scroll(&chrome.container);
        println!(
            "next -> target={target:?} offset={:.1} next_disabled={}",
            swipers.dom().scroll_left(&chrome.container),
            swipers.dom().has_class(&chrome.next, "is-disabled")
        );
    }

    // Growing past the breakpoint restores the original markup.
    swipers.dom_mut().viewport = 1440.0;
    swipers.on_resize(now_ms);
    settle(&mut swipers, now_ms);
    let mut out = String::new();
    swipers.dom().render(0, 0, &mut out);
    print!("{out}");
    println!("listeners left: {}", swipers.dom().listeners);

    swipers.destroy();
}
