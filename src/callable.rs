//! Callable values and their textual form.
//!
//! A [`Callable`] carries the declaration metadata a host runtime keeps for a
//! function object: its declared name, if any, and the syntactic form it was
//! declared with. Rendering is decided purely from that metadata:
//!
//! | Form | Name | Text |
//! |---|---|---|
//! | arrow / closure | any | `Function:` |
//! | function declaration | `name` | `Function: name` |
//! | method shorthand | `name` | `Method: name` |
//! | any | missing, empty or not an identifier | `Function:` |
//!
//! [`Callable::of`] derives the metadata from a Rust fn item or closure.

use std::fmt;

/// The syntactic form a callable was declared with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CallableForm {
    /// Arrow function or closure; never carries a name of its own.
    #[default]
    Arrow,
    /// `function name(...) { ... }` style declaration or expression.
    Function,
    /// `name() { ... }` shorthand inside a record literal.
    Method,
}

/// A function value.
///
/// # Examples
///
/// ```rust
/// use logvalue::Callable;
///
/// assert_eq!(Callable::function("handler").render(), "Function: handler");
/// assert_eq!(Callable::method("save").render(), "Method: save");
/// assert_eq!(Callable::arrow().render(), "Function:");
/// assert_eq!(Callable::function("handler").with_name("").render(), "Function:");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Callable {
    name: Option<String>,
    form: CallableForm,
}

impl Callable {
    #[must_use]
    pub fn arrow() -> Self {
        Callable {
            name: None,
            form: CallableForm::Arrow,
        }
    }

    /// An anonymous `function () {}` expression.
    #[must_use]
    pub fn anonymous() -> Self {
        Callable {
            name: None,
            form: CallableForm::Function,
        }
    }

    #[must_use]
    pub fn function(name: impl Into<String>) -> Self {
        Callable {
            name: Some(name.into()),
            form: CallableForm::Function,
        }
    }

    #[must_use]
    pub fn method(name: impl Into<String>) -> Self {
        Callable {
            name: Some(name.into()),
            form: CallableForm::Method,
        }
    }

    /// Replaces the declared name. An empty name clears it.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = if name.is_empty() { None } else { Some(name) };
        self
    }

    /// Reflects over a Rust callable.
    ///
    /// Closures have no declared name and render like arrow functions; fn
    /// items render as `Function: <item name>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use logvalue::Callable;
    ///
    /// fn shutdown() {}
    ///
    /// assert_eq!(Callable::of(&shutdown).render(), "Function: shutdown");
    /// assert_eq!(Callable::of(&|| 1).render(), "Function:");
    /// ```
    #[must_use]
    pub fn of<F: ?Sized>(_f: &F) -> Self {
        Self::from_type_name(std::any::type_name::<F>())
    }

    fn from_type_name(path: &str) -> Self {
        if path.contains("{{closure}}") || path.contains("{closure#") {
            return Callable::arrow();
        }
        // Generic arguments would confuse the `::` split below.
        let path = path.split('<').next().unwrap_or(path);
        match path.rsplit("::").next() {
            Some(name) if is_identifier(name) => Callable::function(name),
            _ => Callable::anonymous(),
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub const fn form(&self) -> CallableForm {
        self.form
    }

    /// Renders the unwrapped callable text (`Function: name`, `Method: name` or `Function:`).
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.as_deref().filter(|n| is_identifier(n));
        match (self.form, name) {
            (CallableForm::Function, Some(name)) => write!(f, "Function: {}", name),
            (CallableForm::Method, Some(name)) => write!(f, "Method: {}", name),
            _ => f.write_str("Function:"),
        }
    }
}

/// `[A-Za-z_$][A-Za-z0-9_$]*`
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
