//! Template processing for the Terraform and Ansible subtrees
//!
//! - `context`: builds the render context from a validated config
//! - `operation`: filesystem changes produced by rendering
//! - `processor`: walks a template subtree and applies the operations

pub mod context;
pub mod operation;
pub mod processor;

pub use context::build_context;
pub use operation::TemplateOperation;
pub use processor::TemplateProcessor;
