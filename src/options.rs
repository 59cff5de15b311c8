//! Configuration options for stringification.
//!
//! This module provides types to customize rendered output:
//!
//! - [`FormatOptions`]: Main configuration struct
//! - [`PlaceholderStyle`]: Bracket style used for special type placeholders such as `<Map>`
//!
//! The circular marker is always `<Circular>` inside the container's own
//! bracket (`[<Circular>]`, `{<Circular>}`), whatever the placeholder style.
//!
//! The defaults reproduce the flag-free contract of [`stringify`](crate::stringify):
//! angle-bracket placeholders, no depth cap, no element cap.
//!
//! ## Examples
//!
//! ```rust
//! use logvalue::{logvalue, stringify_with_options, FormatOptions, PlaceholderStyle};
//!
//! let value = logvalue!([1, [2, [3, [4]]]]);
//!
//! let options = FormatOptions::new().with_max_depth(2);
//! assert_eq!(stringify_with_options(&value, &options), "[1, [2, [...]]]");
//!
//! let options = FormatOptions::new().with_placeholder(PlaceholderStyle::Square);
//! assert_eq!(options.placeholder.wrap("Map"), "[Map]");
//! ```

/// Bracket style for special type placeholders.
///
/// # Examples
///
/// ```rust
/// use logvalue::PlaceholderStyle;
///
/// assert_eq!(PlaceholderStyle::Angle.wrap("Map"), "<Map>");
/// assert_eq!(PlaceholderStyle::Square.wrap("Map"), "[Map]");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlaceholderStyle {
    #[default]
    Angle,
    Square,
}

impl PlaceholderStyle {
    /// Returns the opening and closing bracket characters.
    #[must_use]
    pub const fn brackets(&self) -> (char, char) {
        match self {
            PlaceholderStyle::Angle => ('<', '>'),
            PlaceholderStyle::Square => ('[', ']'),
        }
    }

    /// Wraps `name` in this style's brackets.
    #[must_use]
    pub fn wrap(&self, name: &str) -> String {
        let (open, close) = self.brackets();
        let mut out = String::with_capacity(name.len() + 2);
        out.push(open);
        out.push_str(name);
        out.push(close);
        out
    }
}

/// Configuration options for stringification.
///
/// # Examples
///
/// ```rust
/// use logvalue::{FormatOptions, PlaceholderStyle};
///
/// // Defaults: angle placeholders, unlimited depth and elements
/// let options = FormatOptions::new();
/// assert_eq!(options.max_depth, None);
///
/// // Custom configuration
/// let options = FormatOptions::new()
///     .with_placeholder(PlaceholderStyle::Square)
///     .with_max_depth(3)
///     .with_max_elements(10)
///     .with_show_millis(true);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FormatOptions {
    pub placeholder: PlaceholderStyle,
    pub max_depth: Option<usize>,
    pub max_elements: Option<usize>,
    pub show_millis: bool,
}

impl FormatOptions {
    /// Creates default options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use logvalue::FormatOptions;
    ///
    /// let options = FormatOptions::new();
    /// assert!(!options.show_millis);
    /// assert_eq!(options.max_elements, None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the placeholder bracket style.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: PlaceholderStyle) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Caps container nesting. A cap of `0` means no cap beyond the renderer's
    /// [`MAX_NESTING_DEPTH`](crate::render::MAX_NESTING_DEPTH) ceiling.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use logvalue::FormatOptions;
    ///
    /// let options = FormatOptions::new().with_max_depth(0);
    /// assert!(!options.is_max_depth_reached(100));
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Caps the number of elements rendered per container. A cap of `0` means unlimited.
    #[must_use]
    pub fn with_max_elements(mut self, max_elements: usize) -> Self {
        self.max_elements = Some(max_elements);
        self
    }

    /// Renders assembler timestamps with milliseconds.
    #[must_use]
    pub fn with_show_millis(mut self, show_millis: bool) -> Self {
        self.show_millis = show_millis;
        self
    }

    /// Returns `true` if a container opened at `depth` must be elided.
    #[must_use]
    pub fn is_max_depth_reached(&self, depth: usize) -> bool {
        match self.max_depth {
            None | Some(0) => false,
            Some(max) => depth >= max,
        }
    }

    /// Returns `true` if the element at index `nth` must be elided.
    #[must_use]
    pub fn is_max_elements_reached(&self, nth: usize) -> bool {
        match self.max_elements {
            None | Some(0) => false,
            Some(max) => nth >= max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_cap() {
        let options = FormatOptions::new().with_max_depth(2);
        assert!(!options.is_max_depth_reached(0));
        assert!(!options.is_max_depth_reached(1));
        assert!(options.is_max_depth_reached(2));
        assert!(options.is_max_depth_reached(7));
    }

    #[test]
    fn test_zero_caps_are_unlimited() {
        let options = FormatOptions::new().with_max_depth(0).with_max_elements(0);
        assert!(!options.is_max_depth_reached(usize::MAX));
        assert!(!options.is_max_elements_reached(usize::MAX));
    }

    #[test]
    fn test_element_cap() {
        let options = FormatOptions::new().with_max_elements(3);
        assert!(!options.is_max_elements_reached(2));
        assert!(options.is_max_elements_reached(3));
    }

    #[test]
    fn test_placeholder_wrap() {
        assert_eq!(PlaceholderStyle::default().wrap("Set"), "<Set>");
        assert_eq!(PlaceholderStyle::Square.wrap("RegExp"), "[RegExp]");
    }
}
