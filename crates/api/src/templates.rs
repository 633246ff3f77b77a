//! Embedded page templates.

use minijinja::Environment;
use serde::Serialize;

use peminjaman_shared::AppError;

const SOURCES: [(&str, &str); 5] = [
    ("layout.html", include_str!("../templates/layout.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("add.html", include_str!("../templates/add.html")),
    ("edit.html", include_str!("../templates/edit.html")),
    ("error.html", include_str!("../templates/error.html")),
];

/// Compiled templates, built once at startup.
///
/// Names ending in `.html` are auto-escaped.
#[derive(Debug)]
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Compiles every embedded template.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Render`] on a template syntax error.
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        for (name, source) in SOURCES {
            env.add_template(name, source)
                .map_err(|e| AppError::Render(format!("{name}: {e}")))?;
        }
        Ok(Self { env })
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Render`] if the template is unknown or rendering fails.
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, AppError> {
        self.env
            .get_template(name)
            .and_then(|template| template.render(ctx))
            .map_err(|e| AppError::Render(format!("{name}: {e}")))
    }
}
