//! Document model: node representation, derivation, projection, and patching.
//!
//! The document itself lives in the file store as canonical JSON text. This
//! module owns everything derived from it: the row-based [`node::NodeData`]
//! representation, the [`builder`] that produces the flat node list, the
//! [`projection`] of one node back into display JSON, and the [`patch`]
//! operation that writes edited values into the document at a node's path.

pub mod builder;
pub mod node;
pub mod patch;
pub mod projection;
