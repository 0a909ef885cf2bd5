//! # Translation pipeline
//!
//! - `translation`: the adapter lifecycle and request handling
//! - `generation`: traits separating the adapter from the model library
//! - `madlad`: MADLAD-400 tokenizer and generator backed by `rust-bert` and libtorch

pub mod generation;
pub mod madlad;
pub mod translation;
