pub mod common;
pub mod manifest;
pub mod options;
pub mod project_structure;
pub mod render_context;
