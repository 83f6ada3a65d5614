/// Command-line argument parsing and the render/validate commands.
pub mod cli;

/// Deployment configuration model, validation and backend defaults.
pub mod config;

/// Fixed names and directory conventions.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for standard library types.
pub mod ext;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Template rendering engine.
pub mod renderer;

/// Renders template subtrees into the output directory.
pub mod template;
