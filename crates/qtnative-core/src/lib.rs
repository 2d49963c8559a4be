//! Generator core for qtnative.
//!
//! The CLI builds a [`GeneratorService`](application::GeneratorService)
//! from adapters and calls its phases in order:
//!
//! ```text
//! initialize ──► write ──► end
//!     │            │
//!     │            ├─ TemplateRenderer: manifest + assets ─► ProjectStructure
//!     │            └─ Filesystem: ProjectStructure ─► disk
//!     └─ GeneratorOptions::validate (package, name)
//! ```
//!
//! ```rust,ignore
//! let generator = GeneratorService::ubuntu(assets, renderer, filesystem);
//! let options = GeneratorOptions::new("MyApp", None); // package myapp.dev
//! generator.initialize(&options)?;
//! generator.write(&options, "./MyApp")?;
//! print!("{}", generator.end("./MyApp"));
//! ```

pub mod application;
pub mod domain;
pub mod error;
