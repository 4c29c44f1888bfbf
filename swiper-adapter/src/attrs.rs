use swiper::{Settings, Spacing};
use thiserror::Error;

use crate::Dom;

/// Viewport width (px) from which the element is no longer paged.
pub const ATTR_UNTIL: &str = "data-swipe-until";
/// Spacing override: a number or a JSON list of `{"width", "spacing"}` rules.
pub const ATTR_SPACING: &str = "data-swipe-spacing";
/// Maximum item width override (px).
pub const ATTR_MAX_WIDTH: &str = "data-swipe-maxwidth";
/// Written on the container with the current items-per-page value.
pub const ATTR_ITEMS_TO_SCROLL: &str = "data-items-to-scroll";

#[derive(Debug, Error)]
pub enum AttributeError {
    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} is neither a number nor a breakpoint list: {source}")]
    InvalidSpacing {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Per-element overrides read from data attributes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InstanceOptions {
    pub until: Option<u32>,
    pub spacing: Option<Spacing>,
    pub max_width: Option<u32>,
}

impl InstanceOptions {
    /// Reads the overrides of `node`.
    ///
    /// Malformed attributes are skipped individually and reported through the `tracing` hook.
    pub fn read<D: Dom>(dom: &D, node: &D::Node) -> Self {
        let (options, errors) = Self::parse(
            dom.attribute(node, ATTR_UNTIL).as_deref(),
            dom.attribute(node, ATTR_SPACING).as_deref(),
            dom.attribute(node, ATTR_MAX_WIDTH).as_deref(),
        );
        for _err in &errors {
            swarn!(node = ?node, error = %_err, "ignoring malformed swiper attribute");
        }
        options
    }

    /// Parses raw attribute values, keeping every value that is well formed.
    pub fn parse(
        until: Option<&str>,
        spacing: Option<&str>,
        max_width: Option<&str>,
    ) -> (Self, Vec<AttributeError>) {
        let mut errors = Vec::new();
        let mut options = Self::default();

        if let Some(raw) = until {
            match parse_px(ATTR_UNTIL, raw) {
                Ok(v) => options.until = Some(v),
                Err(err) => errors.push(err),
            }
        }
        if let Some(raw) = spacing {
            match parse_spacing(raw) {
                Ok(v) => options.spacing = Some(v),
                Err(err) => errors.push(err),
            }
        }
        if let Some(raw) = max_width {
            match parse_px(ATTR_MAX_WIDTH, raw) {
                Ok(v) => options.max_width = Some(v),
                Err(err) => errors.push(err),
            }
        }

        (options, errors)
    }

    pub fn until(&self, settings: &Settings) -> u32 {
        self.until.unwrap_or(settings.default_until)
    }

    pub fn max_width(&self, settings: &Settings) -> u32 {
        self.max_width.unwrap_or(settings.default_max_width)
    }
}

/// Parses a leading positive integer, ignoring a trailing unit (`"600px"` reads as `600`).
fn parse_px(name: &'static str, raw: &str) -> Result<u32, AttributeError> {
    let trimmed = raw.trim();
    let digits = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .map_or(trimmed, |end| &trimmed[..end]);
    match digits.parse::<u32>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(AttributeError::InvalidNumber {
            name,
            value: raw.to_owned(),
        }),
    }
}

fn parse_spacing(raw: &str) -> Result<Spacing, AttributeError> {
    serde_json::from_str(raw.trim()).map_err(|source| AttributeError::InvalidSpacing {
        name: ATTR_SPACING,
        source,
    })
}
