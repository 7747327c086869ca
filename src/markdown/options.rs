//! Render configuration: heading size anchoring and CSS namespace.

use std::fmt;
use std::str::FromStr;

/// Ordered heading size scale, largest first.
const SCALE: [HeadingSize; 4] = [
    HeadingSize::ExtraLarge,
    HeadingSize::Large,
    HeadingSize::Medium,
    HeadingSize::Small,
];

/// GOV.UK heading size modifier (`govuk-heading-{modifier}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeadingSize {
    ExtraLarge,
    #[default]
    Large,
    Medium,
    Small,
}

impl HeadingSize {
    /// Class modifier used in `govuk-heading-*`.
    pub fn modifier(&self) -> &'static str {
        match self {
            HeadingSize::ExtraLarge => "xl",
            HeadingSize::Large => "l",
            HeadingSize::Medium => "m",
            HeadingSize::Small => "s",
        }
    }

    fn index(&self) -> usize {
        match self {
            HeadingSize::ExtraLarge => 0,
            HeadingSize::Large => 1,
            HeadingSize::Medium => 2,
            HeadingSize::Small => 3,
        }
    }

    /// Returns the size for a heading depth, relative to the size of depth 1.
    ///
    /// Walks down the scale one step per depth and clamps at the smallest
    /// size. Depth 0 is treated as depth 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use govuk_markdown::HeadingSize;
    ///
    /// assert_eq!(HeadingSize::for_depth(HeadingSize::Large, 2), HeadingSize::Medium);
    /// assert_eq!(HeadingSize::for_depth(HeadingSize::Large, 6), HeadingSize::Small);
    /// ```
    pub fn for_depth(start: HeadingSize, depth: u8) -> HeadingSize {
        let offset = usize::from(depth.max(1)) - 1;
        let index = (start.index() + offset).min(SCALE.len() - 1);
        SCALE[index]
    }

    /// Parses a modifier, falling back to [`HeadingSize::Large`] for anything
    /// that is not one of `xl`, `l`, `m` or `s`.
    pub fn from_option(value: Option<&str>) -> HeadingSize {
        match value.map(str::parse::<HeadingSize>) {
            Some(Ok(size)) => size,
            Some(Err(_)) => {
                tracing::debug!(value = ?value, "Unknown headingsStartWith, using default");
                HeadingSize::default()
            }
            None => HeadingSize::default(),
        }
    }
}

impl FromStr for HeadingSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xl" => Ok(HeadingSize::ExtraLarge),
            "l" => Ok(HeadingSize::Large),
            "m" => Ok(HeadingSize::Medium),
            "s" => Ok(HeadingSize::Small),
            other => Err(format!("unknown heading size: {other}")),
        }
    }
}

impl fmt::Display for HeadingSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.modifier())
    }
}

/// CSS namespace used when composing class names.
///
/// Component classes are `{prefix}-{block}`, utility classes are
/// `{prefix}-{utility}-{rule}` and extension classes are `x-{prefix}-{block}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub prefix: String,
    pub utility: String,
}

impl Namespace {
    pub fn new(prefix: impl Into<String>, utility: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            utility: utility.into(),
        }
    }

    /// Component class, e.g. `govuk-table__row`.
    pub fn class(&self, name: &str) -> String {
        format!("{}-{}", self.prefix, name)
    }

    /// Utility class, e.g. `govuk-!-text-align-left`.
    pub fn utility(&self, name: &str) -> String {
        format!("{}-{}-{}", self.prefix, self.utility, name)
    }

    /// Extension class, e.g. `x-govuk-checkbox`.
    pub fn extension(&self, name: &str) -> String {
        format!("x-{}-{}", self.prefix, name)
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new("govuk", "!")
    }
}

/// Options for a render pass.
///
/// Defaults: headings start at `l`, namespace prefix `govuk`, utility
/// infix `!`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub headings_start_with: HeadingSize,
    pub namespace: Namespace,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the size of depth 1 headings.
    pub fn headings_start_with(mut self, size: HeadingSize) -> Self {
        self.headings_start_with = size;
        self
    }

    /// Sets the CSS namespace.
    pub fn namespace(mut self, namespace: Namespace) -> Self {
        self.namespace = namespace;
        self
    }
}
