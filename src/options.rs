use std::borrow::Cow;

/// Parser dialect selector for [`read_json_with`](crate::read_json_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadMode {
    /// Standard JSON: double quotes only, quoted keys, no `+`, no radix
    /// prefixes, trailing garbage after the top-level value fails.
    #[default]
    Strict,
    /// JavaScript-object-literal leniency: single quotes, bare and numeric
    /// keys, `0x`/`0o`/`0b` prefixes, `undefined`, `\x`/`\v` escapes,
    /// backslash-newline continuation. Trailing input is ignored.
    Ecma,
    /// Strict lexing, but trailing input is allowed and the number of
    /// consumed bytes is reported, for concatenated documents.
    Serialized,
}

impl ReadMode {
    /// Serialized shares the strict lexical rules; the two modes differ
    /// only in how trailing input is handled.
    pub(crate) fn strict_lexing(self) -> bool {
        !matches!(self, ReadMode::Ecma)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indent {
    /// No line breaks at all.
    None,
    /// N spaces per level; zero still breaks lines without indenting.
    Spaces(usize),
    /// A literal indent unit, e.g. `"\t"`.
    Text(Cow<'static, str>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separators {
    /// Between items in multi-line containers.
    pub item: Cow<'static, str>,
    /// Between an object key and its value.
    pub key: Cow<'static, str>,
    /// Between items once a container collapsed to a single line.
    pub alt_item: Cow<'static, str>,
}

/// Layout policy for [`write_json`](crate::write_json).
///
/// The four presets mirror the usual pretty-printer menu; anything else can
/// be spelled out field by field.
///
/// ```
/// use json_tree::{read_json, to_bytes, WriteConfig};
///
/// let value = read_json(r#"{"a": [1, 2]}"#);
/// assert_eq!(to_bytes(&value, &WriteConfig::CONCISE), br#"{"a":[1,2]}"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WriteConfig {
    pub indent: Indent,
    pub separators: Separators,
    /// Render empty containers as `{}`/`[]` and single-child containers on
    /// the parent's line even when the size estimate says they do not fit.
    pub inline_single_item: bool,
    /// Horizontal budget in bytes: a container whose one-line rendering is
    /// estimated to fit is collapsed, together with all its children.
    pub horiz_space: usize,
}

impl WriteConfig {
    pub const CONCISE: WriteConfig = WriteConfig {
        indent: Indent::None,
        separators: Separators {
            item: Cow::Borrowed(","),
            key: Cow::Borrowed(":"),
            alt_item: Cow::Borrowed(","),
        },
        inline_single_item: false,
        horiz_space: 80,
    };

    pub const TAB: WriteConfig = WriteConfig {
        indent: Indent::Text(Cow::Borrowed("\t")),
        separators: Separators {
            item: Cow::Borrowed(","),
            key: Cow::Borrowed(": "),
            alt_item: Cow::Borrowed(", "),
        },
        inline_single_item: true,
        horiz_space: 80,
    };

    pub const TWO_SPACES: WriteConfig = WriteConfig {
        indent: Indent::Spaces(2),
        separators: Separators {
            item: Cow::Borrowed(","),
            key: Cow::Borrowed(": "),
            alt_item: Cow::Borrowed(", "),
        },
        inline_single_item: true,
        horiz_space: 80,
    };

    pub const FOUR_SPACES: WriteConfig = WriteConfig {
        indent: Indent::Spaces(4),
        separators: Separators {
            item: Cow::Borrowed(","),
            key: Cow::Borrowed(": "),
            alt_item: Cow::Borrowed(", "),
        },
        inline_single_item: true,
        horiz_space: 80,
    };

    pub fn with_horiz_space(mut self, allowed: usize) -> Self {
        self.horiz_space = allowed;
        self
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_inline_single_item(mut self, inline: bool) -> Self {
        self.inline_single_item = inline;
        self
    }
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self::TWO_SPACES
    }
}
