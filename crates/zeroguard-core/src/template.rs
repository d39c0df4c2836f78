//! Template rendering: rich (minijinja) templates and style tokens.
//!
//! Rendering runs in two passes. Templates containing statement, expression or
//! comment markers are first rendered by minijinja against the caller's data.
//! Style tokens are then resolved against a [`Palette`], or stripped entirely
//! when color output is disabled.

use std::borrow::Cow;

use minijinja::{context, Environment, UndefinedBehavior};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::{
    error::{Result, ZeroGuardError},
    terminal::Palette,
};

/// Markers of rich template syntax. Each marker must open and close on one
/// line.
static RICH_TEMPLATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{.+\}\}|\{%.+%\}|\{#.+#\}").expect("rich template pattern is valid")
});

/// Bracketed word-and-punctuation tokens, the grammar of style tokens.
static STYLE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[\w:._^<>]+\}").expect("style token pattern is valid"));

/// Whether the template carries rich template syntax.
pub fn is_rich_template(template: &str) -> bool {
    RICH_TEMPLATE.is_match(template)
}

/// Renders a rich template against `data`.
///
/// Undefined variables are errors, so a template referencing variables fails
/// when no data is supplied. Templates using only literals render without
/// data.
pub fn render_rich(template: &str, data: Option<&Value>) -> Result<String> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    let rendered = match data {
        Some(data) => env.render_str(template, data)?,
        None => env.render_str(template, context! {})?,
    };
    Ok(rendered)
}

/// Replaces every style token with its escape sequence from `palette`.
///
/// Every bracketed token must be a known `{t.<name>}` style.
pub fn apply_styles(text: &str, palette: &Palette) -> Result<String> {
    let mut output = String::with_capacity(text.len());
    let mut last = 0;
    for token in STYLE_TOKEN.find_iter(text) {
        let escape = token
            .as_str()
            .strip_prefix("{t.")
            .and_then(|rest| rest.strip_suffix('}'))
            .and_then(|name| palette.resolve(name))
            .ok_or_else(|| ZeroGuardError::unknown_style_token(token.as_str()))?;
        output.push_str(&text[last..token.start()]);
        output.push_str(&escape);
        last = token.end();
    }
    output.push_str(&text[last..]);
    Ok(output)
}

/// Removes every token matching the style token grammar without validating
/// its name.
pub fn strip_styles(text: &str) -> Cow<'_, str> {
    STYLE_TOKEN.replace_all(text, "")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::terminal::style_escape;

    #[test]
    fn test_rich_template_detection() {
        assert!(is_rich_template("{{ value }}"));
        assert!(is_rich_template("{% for i in range(2) %}x{% endfor %}"));
        assert!(is_rich_template("{# note #}text"));
        assert!(!is_rich_template("plain {t.red}text{t.normal}"));
        assert!(!is_rich_template("{{}}"));
        assert!(!is_rich_template("{{\n}}"));
    }

    #[test]
    fn test_render_rich_with_data() {
        let data = json!({"items": ["a", "b"], "name": "zg"});
        let rendered = render_rich(
            "{{ name }}:{% for i in items %} {{ i }}{% endfor %}",
            Some(&data),
        )
        .unwrap();
        assert_eq!(rendered, "zg: a b");
    }

    #[test]
    fn test_render_rich_literal_loop_without_data() {
        let rendered = render_rich("{% for i in range(3) %}{{ i }}{% endfor %}", None).unwrap();
        assert_eq!(rendered, "012");
    }

    #[test]
    fn test_render_rich_missing_variable_fails() {
        let result = render_rich("hello {{ who }}", None);
        assert!(matches!(result, Err(ZeroGuardError::TemplateRender { .. })));

        let result = render_rich("hello {{ who }}", Some(&json!({"other": 1})));
        assert!(matches!(result, Err(ZeroGuardError::TemplateRender { .. })));
    }

    #[test]
    fn test_rich_render_keeps_style_tokens() {
        let rendered = render_rich("{t.blue}{{ n }}{t.normal}", Some(&json!({"n": 7}))).unwrap();
        assert_eq!(rendered, "{t.blue}7{t.normal}");
    }

    #[test]
    fn test_apply_styles() {
        let palette = Palette::new(true);
        let styled = apply_styles("{t.red}alert{t.normal}", &palette).unwrap();
        assert_eq!(
            styled,
            format!(
                "{}alert{}",
                style_escape("red").unwrap(),
                style_escape("normal").unwrap()
            )
        );

        let plain = apply_styles("{t.red}alert{t.normal}", &Palette::new(false)).unwrap();
        assert_eq!(plain, "alert");
    }

    #[test]
    fn test_apply_styles_rejects_unknown_tokens() {
        let palette = Palette::new(true);
        let err = apply_styles("{t.purple}x", &palette).unwrap_err();
        assert!(matches!(
            err,
            ZeroGuardError::UnknownStyleToken { ref token } if token == "{t.purple}"
        ));
        assert!(apply_styles("{value}", &palette).is_err());
        // Lone braces are not tokens.
        assert_eq!(apply_styles("{ x }", &palette).unwrap(), "{ x }");
    }

    #[test]
    fn test_strip_styles() {
        assert_eq!(
            strip_styles("disk {t.bold}usage{t.normal} high"),
            "disk usage high"
        );
        assert_eq!(strip_styles("{t.purple}{anything}left"), "left");
        assert!(matches!(strip_styles("untouched"), Cow::Borrowed(_)));
    }
}
