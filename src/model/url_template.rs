use regex::Regex;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([^{}]+)\}").expect("placeholder pattern is valid")
});

/// A URL with `{name}` placeholders that are filled in at call time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    template: String,
    placeholders: Vec<String>,
}

impl UrlTemplate {
    pub fn parse(template: &str) -> Self {
        let mut placeholders: Vec<String> = Vec::new();
        for captures in PLACEHOLDER.captures_iter(template) {
            let name = &captures[1];
            if !placeholders.iter().any(|p| p == name) {
                placeholders.push(name.to_string());
            }
        }
        Self { template: template.to_string(), placeholders }
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Placeholder names in order of first appearance, without duplicates.
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    /// Placeholders that name one of `params`, keeping template order.
    pub fn bound<I, S>(&self, params: I) -> Vec<&str>
    where
        I: IntoIterator<Item = S> + Clone,
        S: AsRef<str>,
    {
        self.placeholders
            .iter()
            .map(String::as_str)
            .filter(|p| params.clone().into_iter().any(|param| param.as_ref() == *p))
            .collect()
    }

    /// Placeholders that do not name any of `params`.
    pub fn unbound<I, S>(&self, params: I) -> Vec<&str>
    where
        I: IntoIterator<Item = S> + Clone,
        S: AsRef<str>,
    {
        self.placeholders
            .iter()
            .map(String::as_str)
            .filter(|p| !params.clone().into_iter().any(|param| param.as_ref() == *p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_placeholders_in_order_without_duplicates() {
        let template = UrlTemplate::parse("https://x.test/{city}/{day}?again={city}");
        assert_eq!(template.placeholders(), ["city", "day"]);
    }

    #[test]
    fn no_placeholders() {
        let template = UrlTemplate::parse("https://x.test/static");
        assert!(template.placeholders().is_empty());
    }

    #[test]
    fn splits_bound_and_unbound_placeholders() {
        let template = UrlTemplate::parse("https://x.test/{city}/{token}");
        let params = ["city", "limit"];
        assert_eq!(template.bound(params), vec!["city"]);
        assert_eq!(template.unbound(params), vec!["token"]);
    }
}
