//! Placeholder parameters and `{name}` substitution.
//!
//! Placeholder syntax is fixed by the translated strings themselves:
//! `{name}` where `name` is any run of characters other than braces.
//! Substitution is one left-to-right pass over the template, so a value that
//! itself contains `{...}` is never expanded again and parameter order does
//! not matter.

use std::fmt;

/// Named values substituted into a translated string.
///
/// # Example
///
/// ```
/// use plugin_i18n::Params;
///
/// let params = Params::new().with("filename", "a.pdf").with("count", 3);
/// assert_eq!(params.get("count"), Some("3"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: Vec<(String, String)>,
}

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Params::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(name, value);
        self
    }

    /// Set `name` to the string form of `value`, replacing any earlier value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl fmt::Display) {
        let name = name.into();
        let value = value.to_string();
        match self.values.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.values.push((name, value)),
        }
    }

    /// Value for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: fmt::Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

/// Replace every `{name}` in `template` whose name is present in `params`.
///
/// Unmatched placeholders and unbalanced braces are copied verbatim.
pub fn interpolate(template: &str, params: &Params) -> String {
    if params.is_empty() || !template.contains('{') {
        return template.to_string();
    }

    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match after.find(|c: char| c == '{' || c == '}') {
            Some(close) if after[close..].starts_with('}') => {
                let name = &after[..close];
                match params.get(name) {
                    Some(value) => result.push_str(value),
                    None => {
                        result.push('{');
                        result.push_str(name);
                        result.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            // Unclosed, or another '{' first: this brace is literal text.
            _ => {
                result.push('{');
                rest = after;
            }
        }
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Params Tests ====================

    #[test]
    fn test_params_with_uses_display_form() {
        let params = Params::new().with("count", 42).with("ratio", 0.5);
        assert_eq!(params.get("count"), Some("42"));
        assert_eq!(params.get("ratio"), Some("0.5"));
    }

    #[test]
    fn test_params_insert_replaces_existing() {
        let mut params = Params::new().with("name", "old");
        params.insert("name", "new");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("name"), Some("new"));
    }

    #[test]
    fn test_params_from_iter() {
        let params: Params = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(params.get("a"), Some("1"));
        assert_eq!(params.get("b"), Some("2"));
        assert_eq!(params.get("c"), None);
    }

    // ==================== interpolate Tests ====================

    #[test]
    fn test_interpolate_single() {
        let params = Params::new().with("filename", "a.pdf");
        assert_eq!(
            interpolate("File deleted: {filename}", &params),
            "File deleted: a.pdf"
        );
    }

    #[test]
    fn test_interpolate_repeated_placeholder() {
        let params = Params::new().with("x", "1");
        assert_eq!(interpolate("{x} and {x}", &params), "1 and 1");
    }

    #[test]
    fn test_interpolate_unmatched_left_verbatim() {
        let params = Params::new().with("other", "value");
        assert_eq!(
            interpolate("File deleted: {filename}", &params),
            "File deleted: {filename}"
        );
    }

    #[test]
    fn test_interpolate_empty_params_is_identity() {
        assert_eq!(
            interpolate("File deleted: {filename}", &Params::new()),
            "File deleted: {filename}"
        );
    }

    #[test]
    fn test_interpolate_order_independent() {
        let forward = Params::new().with("a", "1").with("b", "2");
        let backward = Params::new().with("b", "2").with("a", "1");
        let template = "{b}-{a}-{b}";
        assert_eq!(interpolate(template, &forward), "2-1-2");
        assert_eq!(interpolate(template, &forward), interpolate(template, &backward));
    }

    #[test]
    fn test_interpolate_does_not_rescan_values() {
        let params = Params::new().with("a", "{b}").with("b", "oops");
        assert_eq!(interpolate("{a}", &params), "{b}");
    }

    #[test]
    fn test_interpolate_unclosed_brace() {
        let params = Params::new().with("a", "1");
        assert_eq!(interpolate("open { brace {a}", &params), "open { brace 1");
        assert_eq!(interpolate("trailing {a", &params), "trailing {a");
    }

    #[test]
    fn test_interpolate_nested_open_brace() {
        let params = Params::new().with("a", "1");
        assert_eq!(interpolate("{{a}}", &params), "{1}");
    }

    #[test]
    fn test_interpolate_multibyte_text() {
        let params = Params::new().with("filename", "論文.pdf");
        assert_eq!(
            interpolate("文件已删除：{filename}", &params),
            "文件已删除：論文.pdf"
        );
    }
}
