//! Buildscope Decode: the untrusted-input half of the engine.
//!
//! Transforms a multiply-encoded build code into a validated `ParsedBuild`:
//!
//! ```text
//! raw string → Decoder → Structural Parser → Extractors → Assembler
//!                  ↑ cache hit short-circuits everything ↑
//! ```
//!
//! Every stage before the extractors can reject the input with a terminal
//! error; from the extractors on, missing content degrades to defaults and
//! the pipeline always yields a usable aggregate.

pub mod assembler;
pub mod decoder;
pub mod extract;
pub mod markup;
pub mod pipeline;

pub use pipeline::BuildPipeline;
