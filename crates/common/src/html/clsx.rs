//! Conditional CSS class-name joining
//!
//! Mirrors the `clsx` convention used by component libraries: strings and
//! numbers are kept when non-empty, maps contribute the keys whose flag is
//! set, lists are flattened recursively, and falsy values are skipped.

/// One argument to [`clsx`].
#[derive(Debug, Clone, PartialEq)]
pub enum ClassValue {
    /// Kept verbatim unless empty.
    Str(String),
    /// Kept unless zero.
    Num(i64),
    /// Contributes nothing; lets `cond && "class"` style arguments compile.
    Bool(bool),
    /// Keys whose flag is `true`, in insertion order.
    Map(Vec<(String, bool)>),
    /// Flattened recursively.
    List(Vec<ClassValue>),
    /// Contributes nothing.
    None,
}

impl ClassValue {
    /// Conditional-map value built from `(class, enabled)` pairs.
    pub fn map<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        Self::Map(entries.into_iter().map(|(class, on)| (class.into(), on)).collect())
    }

    fn is_truthy(&self) -> bool {
        match self {
            Self::Str(s) => !s.is_empty(),
            Self::Num(n) => *n != 0,
            Self::Bool(b) => *b,
            Self::Map(_) | Self::List(_) => true,
            Self::None => false,
        }
    }

    fn write_into(&self, out: &mut String) {
        match self {
            Self::Str(s) => push_class(out, s),
            Self::Num(n) => push_class(out, &n.to_string()),
            Self::Map(entries) => {
                for (class, _) in entries.iter().filter(|(_, on)| *on) {
                    push_class(out, class);
                }
            }
            Self::List(items) => {
                for item in items.iter().filter(|item| item.is_truthy()) {
                    item.write_into(out);
                }
            }
            Self::Bool(_) | Self::None => {}
        }
    }
}

fn push_class(out: &mut String, class: &str) {
    if class.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(class);
}

impl From<&str> for ClassValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for ClassValue {
    fn from(value: i64) -> Self {
        Self::Num(value)
    }
}

impl From<bool> for ClassValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for ClassValue {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

/// Join class names, skipping falsy inputs.
///
/// # Examples
///
/// ```
/// use sse_auth_common::html::{clsx, ClassValue};
///
/// let classes = clsx([
///     ClassValue::from("button"),
///     ClassValue::from(None::<&str>),
///     ClassValue::map([("button--enabled", true), ("button--hidden", false)]),
/// ]);
/// assert_eq!(classes, "button button--enabled");
/// ```
pub fn clsx<I>(values: I) -> String
where
    I: IntoIterator<Item = ClassValue>,
{
    let mut out = String::new();
    for value in values.into_iter().filter(ClassValue::is_truthy) {
        value.write_into(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_falsy_values() {
        let classes = clsx([
            ClassValue::from(""),
            ClassValue::from(0_i64),
            ClassValue::from(false),
            ClassValue::None,
            ClassValue::from("kept"),
        ]);
        assert_eq!(classes, "kept");
    }

    #[test]
    fn numbers_are_stringified() {
        assert_eq!(clsx([ClassValue::from("col"), ClassValue::from(12_i64)]), "col 12");
    }

    #[test]
    fn maps_keep_enabled_keys_in_order() {
        let classes = clsx([ClassValue::map([("b", true), ("a", true), ("c", false)])]);
        assert_eq!(classes, "b a");
    }

    #[test]
    fn nested_lists_are_flattened() {
        let nested = ClassValue::List(vec![
            ClassValue::from("outer"),
            ClassValue::List(vec![ClassValue::from("inner"), ClassValue::from("")]),
            ClassValue::map([("flag", true)]),
        ]);
        assert_eq!(clsx([nested, ClassValue::from("tail")]), "outer inner flag tail");
    }

    #[test]
    fn empty_map_contributes_nothing() {
        let classes = clsx([ClassValue::map(Vec::<(&str, bool)>::new()), ClassValue::from("x")]);
        assert_eq!(classes, "x");
    }
}
