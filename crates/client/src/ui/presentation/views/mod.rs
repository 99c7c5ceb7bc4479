//! Top-level views

mod generator;

pub use generator::GeneratorView;
