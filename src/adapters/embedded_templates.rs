use include_dir::{Dir, DirEntry, include_dir};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde_json::Value;

use crate::domain::AppError;
use crate::ports::TemplateRenderer;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Renders the templates compiled into the binary.
///
/// Template names are paths relative to `src/assets/templates`. Only `.html`
/// templates are HTML auto-escaped; script and config templates receive
/// values that are already encoded as literals.
#[derive(Debug)]
pub struct EmbeddedTemplateRenderer {
    env: Environment<'static>,
}

impl EmbeddedTemplateRenderer {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(auto_escape_for);
        register_templates(&mut env, &TEMPLATES_DIR)?;
        Ok(Self { env })
    }
}

impl TemplateRenderer for EmbeddedTemplateRenderer {
    fn render(&self, name: &str, context: &Value) -> Result<String, AppError> {
        let template =
            self.env.get_template(name).map_err(|_| AppError::TemplateMissing(name.to_string()))?;
        template.render(context).map_err(|err| AppError::TemplateRender {
            template: name.to_string(),
            details: err.to_string(),
        })
    }
}

fn auto_escape_for(name: &str) -> AutoEscape {
    if name.ends_with(".html") { AutoEscape::Html } else { AutoEscape::None }
}

fn register_templates(
    env: &mut Environment<'static>,
    dir: &'static Dir<'static>,
) -> Result<(), AppError> {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                let name = file.path().to_str().ok_or_else(|| {
                    AppError::config_error(format!(
                        "Template path is not UTF-8: {}",
                        file.path().to_string_lossy()
                    ))
                })?;
                let content = file.contents_utf8().ok_or_else(|| {
                    AppError::config_error(format!("Template file is not UTF-8: {}", name))
                })?;
                env.add_template(name, content).map_err(|err| AppError::TemplateRender {
                    template: name.to_string(),
                    details: err.to_string(),
                })?;
            }
            DirEntry::Dir(subdir) => register_templates(env, subdir)?,
        }
    }
    Ok(())
}
