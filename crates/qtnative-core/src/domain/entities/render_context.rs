//! Template parameter set and the substitution context built from it.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::entities::options::ValidatedOptions;

/// The fixed record of substitution values applied to every generated file.
///
/// Derived once per run from validated options and consumed read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateParams {
    pub package: String,
    pub name: String,
    pub lower_case_name: String,
}

impl TemplateParams {
    pub fn from_options(options: &ValidatedOptions) -> Self {
        Self {
            package: options.package.to_string(),
            name: options.name.to_string(),
            lower_case_name: options.name.to_lowercase(),
        }
    }
}

/// Context for template rendering.
///
/// A **Value Object** holding the placeholder map. Immutable after creation.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `PACKAGE` | "myapp.dev" | `--package` or derived |
/// | `NAME` | "MyApp" | User input |
/// | `LOWER_CASE_NAME` | "myapp" | Computed |
#[derive(Debug, Clone)]
pub struct RenderContext {
    params: TemplateParams,
    variables: HashMap<&'static str, String>,
}

impl RenderContext {
    pub fn new(params: TemplateParams) -> Self {
        let mut variables = HashMap::new();
        variables.insert("PACKAGE", params.package.clone());
        variables.insert("NAME", params.name.clone());
        variables.insert("LOWER_CASE_NAME", params.lower_case_name.clone());

        Self { params, variables }
    }

    pub fn params(&self) -> &TemplateParams {
        &self.params
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// # Edge Cases
    ///
    /// - `{{UNKNOWN}}` → remains as literal `{{UNKNOWN}}` (no error)
    /// - `{{NAME}}{{NAME}}` → both replaced
    /// - Nested braces `{{{NAME}}}` → outer braces preserved, inner replaced
    /// - Substituted values are never re-scanned, so a name containing
    ///   `{{PACKAGE}}` is written as-is.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            match after_open.find("}}") {
                Some(end) => {
                    let key = &after_open[..end];
                    match self.get(key) {
                        Some(value) => {
                            out.push_str(value);
                            rest = &after_open[end + 2..];
                        }
                        // Not a known key: emit one brace and rescan so
                        // `{{{NAME}}}` still finds the inner placeholder.
                        None => {
                            out.push('{');
                            rest = &rest[start + 1..];
                        }
                    }
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::options::GeneratorOptions;

    fn ctx(name: &str) -> RenderContext {
        let opts = GeneratorOptions::new(name, None).validate().unwrap();
        RenderContext::new(TemplateParams::from_options(&opts))
    }

    #[test]
    fn params_derive_from_options() {
        let opts = GeneratorOptions::new("MyApp", None).validate().unwrap();
        let params = TemplateParams::from_options(&opts);
        assert_eq!(params.package, "myapp.dev");
        assert_eq!(params.name, "MyApp");
        assert_eq!(params.lower_case_name, "myapp");
    }

    #[test]
    fn renders_all_builtins() {
        let out = ctx("MyApp").render("{{PACKAGE}} {{NAME}} {{LOWER_CASE_NAME}}");
        assert_eq!(out, "myapp.dev MyApp myapp");
    }

    #[test]
    fn repeated_placeholders_are_all_replaced() {
        assert_eq!(ctx("MyApp").render("{{NAME}}{{NAME}}"), "MyAppMyApp");
    }

    #[test]
    fn unknown_placeholder_is_left_alone() {
        assert_eq!(
            ctx("MyApp").render("${CMAKE_BINARY_DIR} {{UNKNOWN}}"),
            "${CMAKE_BINARY_DIR} {{UNKNOWN}}"
        );
    }

    #[test]
    fn unterminated_placeholder_is_left_alone() {
        assert_eq!(ctx("MyApp").render("a {{NAME"), "a {{NAME");
    }

    #[test]
    fn nested_braces_keep_outer() {
        assert_eq!(ctx("MyApp").render("{{{NAME}}}"), "{MyApp}");
    }
}
