//! # Core listing machinery
//!
//! Path resolution, paging, row rendering and the depth first walk over the remote tree.
//!

pub mod pager;
pub mod printer;
pub mod prompt;
pub mod resolver;
pub mod walker;

pub use crate::core::pager::Pager;
pub use crate::core::printer::{Printer, RenderContext};
pub use crate::core::prompt::{AlwaysContinue, LinePrompt, PagePrompt};
pub use crate::core::resolver::PathResolver;
pub use crate::core::walker::{TreeWalker, Walk};
