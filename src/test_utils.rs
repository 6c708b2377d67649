use crate::config::RoseConfig;
use crate::context::RoseContext;

// Check that the error between a and b is close enough
pub fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

pub fn make_context(patch: impl FnOnce(&mut RoseConfig)) -> RoseContext {
    let mut cfg = RoseConfig::default();
    patch(&mut cfg);
    RoseContext::new(cfg)
}

// Number of non-overlapping occurrences of `needle` in rendered markup
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

// Each `<tag ...>` element of rendered markup, line breaks removed so text
// content reads inline
pub fn elements(markup: &str, tag: &str) -> Vec<String> {
    let open = format!("<{tag} ");
    markup
        .split(open.as_str())
        .skip(1)
        .map(|s| s.replace('\n', ""))
        .collect()
}
