pub mod embedded_templates;
pub mod project_filesystem;

pub use embedded_templates::EmbeddedTemplateRenderer;
pub use project_filesystem::FilesystemProjectStore;
