//! Faultline errors - structured error taxonomy
//!
//! This crate provides the core of the taxonomy: error kinds that attach a
//! stable occurrence identifier, a bounded human message, a causal chain,
//! and open metadata to failures raised inside a backend service.
//!
//! - [`Fault`]: chain node holding at most one cause; repeated wrapping
//!   builds a singly-linked cause chain
//! - [`MultiFault`]: aggregate node fanning out over an ordered cause
//!   list, for sibling failures such as batch validation
//! - [`Cause`]: the closed union every causal edge points at (foreign
//!   leaf, chain node, or aggregate node)
//! - Traversal over arbitrarily deep/wide causal trees: `trace`,
//!   `find_cause_by_name`, `full_stack`, and the serializable
//!   [`ErrorSummary`]

pub mod cause;
pub mod fault;
pub mod identity;
pub mod multi;

pub use cause::{Cause, ForeignError};
pub use fault::Fault;
pub use identity::{ErrorCore, ErrorSummary, MESSAGE_LIMIT};
pub use multi::MultiFault;
