//! Core build engine.
//!
//! ## Pipeline
//!
//! 1. **Collect**: read categories, fields and presets; fields and presets are
//!    validated against their JSON schemas as they are read.
//! 2. **Validate**: check category members and preset fields resolve.
//! 3. **Synthesize**: derive the translation source document.
//! 4. **Render**: produce the bundle files, `presets.yaml` and `taginfo.json`.

pub mod collect;
pub mod context;
pub mod emit;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod references;
pub mod schema;
pub mod source;
pub mod translate;

pub use context::BuildContext;
pub use error::BuildError;
pub use pipeline::{Bundle, build};
