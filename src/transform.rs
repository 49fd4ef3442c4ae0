//! SVG markup to template body rewriting.
//!
//! The markup is treated as opaque text: attributes are rewritten with
//! single-occurrence regex substitutions, so only the first `class`, `width`
//! and `height` in the document are stripped. Nothing here can fail; inputs
//! that don't match simply pass through, and markup without an `<svg` start
//! tag gets no parameter attributes.

use std::sync::LazyLock;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use regex::{Captures, Regex};

use crate::format::{OutputFormat, Param};

/// Fallback size when no other size applies.
pub const DEFAULT_SIZE: u32 = 16;

static XMLNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#" xmlns="[^"]*""#).unwrap());
static CLASS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#" class="[^"]*""#).unwrap());
static WIDTH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#" width="[^"]*""#).unwrap());
static HEIGHT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#" height="[^"]*""#).unwrap());
static SVG_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<svg([\s/>])").unwrap());
static INTER_TAG_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">\s+<").unwrap());

/// Transformation settings for one icon.
#[derive(Debug, Clone, Copy)]
pub struct TransformOptions {
    pub format: OutputFormat,
    /// Size used when the viewBox doesn't decide it.
    pub default_size: u32,
    /// Take the size from a square root `viewBox`.
    pub infer_size: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            default_size: DEFAULT_SIZE,
            infer_size: false,
        }
    }
}

/// Rewritten markup ready to be wrapped by an emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateBody {
    pub markup: String,
    /// Effective default size.
    pub size: u32,
}

/// Rewrite raw SVG markup into a parameterized template body.
pub fn transform(raw_svg: &str, options: &TransformOptions) -> TemplateBody {
    let svg = raw_svg.replace(['\n', '\r'], " ");

    let size = if options.infer_size {
        square_viewbox_size(&svg).unwrap_or(options.default_size)
    } else {
        options.default_size
    };

    let svg = XMLNS.replace(&svg, "");
    let svg = CLASS.replace(&svg, "");
    let svg = WIDTH.replace(&svg, "");
    let svg = HEIGHT.replace(&svg, "");

    let block = attribute_block(options.format, size);
    let svg = SVG_OPEN.replace(&svg, |caps: &Captures| format!("<svg {block}{}", &caps[1]));

    let markup = INTER_TAG_SPACE
        .replace_all(&svg, "><")
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .to_string();

    TemplateBody { markup, size }
}

/// The `style`, `class`, `width` and `height` attributes bound to parameters.
fn attribute_block(format: OutputFormat, size: u32) -> String {
    format!(
        r#"style="{}" class="{}" width="{}" height="{}""#,
        format.placeholder(Param::Style, size),
        format.placeholder(Param::ExtraCls, size),
        format.placeholder(Param::Size, size),
        format.placeholder(Param::Size, size),
    )
}

/// Size of a square root `viewBox`, if there is one.
pub fn square_viewbox_size(svg: &str) -> Option<u32> {
    let view_box = root_viewbox(svg)?;
    let mut tokens = view_box
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty());
    let width: u32 = tokens.nth(2)?.parse().ok()?;
    let height: u32 = tokens.next()?.parse().ok()?;
    (width == height).then_some(width)
}

/// The `viewBox` of the root `<svg>` element. Anything unreadable yields `None`.
fn root_viewbox(svg: &str) -> Option<String> {
    let mut reader = Reader::from_str(svg);

    loop {
        match reader.read_event().ok()? {
            Event::Start(start) | Event::Empty(start) => return viewbox_attr(&start),
            Event::Eof => return None,
            _ => {}
        }
    }
}

fn viewbox_attr(start: &BytesStart) -> Option<String> {
    if start.local_name().as_ref() != b"svg" {
        return None;
    }

    for attr in start.attributes().flatten() {
        if attr.key.as_ref() == b"viewBox" {
            return attr.unescape_value().ok().map(|value| value.into_owned());
        }
    }

    None
}
