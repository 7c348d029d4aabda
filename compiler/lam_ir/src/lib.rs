//! Lam IR - syntax tree types shared by the parser and the evaluator.
//!
//! A program is a sequence of lines; each line parses to one [`Node`].
//! Nodes are plain owned trees. Lambda bodies sit behind an `Rc` so that
//! closures created at runtime can hold on to them without copying.

mod name;
mod node;
pub mod syntax;

pub use name::Name;
pub use node::Node;
