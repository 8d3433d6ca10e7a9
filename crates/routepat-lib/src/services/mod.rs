//! Read-only editor services over a parsed route tree.
//!
//! Offsets and ranges are in decoded-text coordinates unless noted; hosts convert with
//! [`VirtualChars::virtual_offset`](crate::VirtualChars::virtual_offset) and
//! [`RouteTree::source_range`](crate::RouteTree::source_range). Every service works on
//! trees with diagnostics.

pub mod braces;
pub mod completion;
pub mod fixes;
pub mod highlight;


pub use braces::{DelimiterMatch, find_matching_delimiter};
pub use completion::{
    CompletionContext, CompletionItem, CompletionKind, completion_context, completion_items,
};
pub use fixes::{FixEdit, FixProposal, fixes_for};
pub use highlight::{Highlights, highlight};
