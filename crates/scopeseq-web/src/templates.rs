//! Page templates, compiled into the binary and parsed once at startup.

use minijinja::Environment;
use scopeseq_common::ApiError;
use serde::Serialize;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html",      include_str!("../templates/base.html")),
    ("hub.html",       include_str!("../templates/hub.html")),
    ("subject.html",   include_str!("../templates/subject.html")),
    ("wizard.html",    include_str!("../templates/wizard.html")),
    ("not_found.html", include_str!("../templates/not_found.html")),
];

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Render `name` with `ctx`. Failures are logged and surface as a 500.
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, ApiError> {
        self.env
            .get_template(name)
            .and_then(|tmpl| tmpl.render(ctx))
            .map_err(|e| {
                tracing::error!(template = name, error = %e, "Template render failed");
                ApiError::Internal("Failed to render page".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_all_templates_compile() {
        let templates = Templates::new().unwrap();
        for (name, _) in TEMPLATES {
            assert!(templates.env.get_template(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_not_found_escapes_message() {
        let templates = Templates::new().unwrap();
        let html = templates
            .render("not_found.html", context! { message => "<b>gone</b>" })
            .unwrap();
        assert!(html.contains("&lt;b&gt;gone"));
        assert!(!html.contains("<b>gone"));
    }
}
