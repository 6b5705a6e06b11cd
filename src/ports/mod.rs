mod project_store;
mod template_renderer;

pub use project_store::ProjectStore;
pub use template_renderer::TemplateRenderer;
