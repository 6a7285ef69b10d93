//! Configuration options for markdown parsing

/// How `_text_` spans are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnderscoreStyle {
    /// Treat `_text_` like `**text**` and render it as `<b>`
    #[default]
    Bold,
    /// Render `_text_` as `<i>`
    Italic,
}

/// Options for building element trees
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Span kind produced by the underscore delimiter
    pub underscore_style: UnderscoreStyle,
}
