//! Domain logic for the hyper-generate service.
//!
//! Everything here is synchronous and free of I/O: prompt normalization,
//! the procedural scene builder, the fixed storyboard / soundtrack / snippet
//! content, bundle assembly and diagnostics rendering. The `api` crate wires
//! these into HTTP handlers.

pub mod audio;
pub mod diagnostics;
pub mod generation;
pub mod narrative;
pub mod prompt;
pub mod scene;
pub mod snippets;
pub mod storyboard;
