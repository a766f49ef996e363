//! HTML rendering utilities
//!
//! This module turns a [`PathTree`](crate::tree::PathTree) into the index
//! document:
//!
//! - Nested `<ul>`/`<li>` lists, one level per directory
//! - Links built by prefixing the base URL to each relative path
//! - Escaping of names so the document stays well-formed

mod render;

pub use render::render_document;
