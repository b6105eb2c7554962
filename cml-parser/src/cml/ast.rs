//! Typed syntax tree for CML
//!
//! The grammar turns the token stream into a [`SyntaxTree`]: a list of top-level
//! [`Element`](elements::Element)s, each a typed declaration with typed child collections.
//! Nothing here is linked yet; names are plain strings until the builder resolves them.
//!
//! Nodes carry byte spans. [`range::SourceLocation`] turns those into line/column positions
//! when a diagnostic needs them.
//!
//! [`node::NodeRef`] gives a uniform, borrowed view over every node kind so the building walker
//! can search the tree generically.

pub mod elements;
pub mod node;
pub mod range;

pub use elements::*;
pub use node::{NodeKind, NodeRef};
pub use range::{Position, SourceLocation, Span};
