//! Grammar productions for route templates.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Structural checks that only need one segment at a time run here, right after the
//! segment is built; checks spanning several parameters live in `crate::analyze`.

mod parameters;
mod replacements;
mod segments;
mod validation;

use rowan::TextRange;

/// What a parsed segment section turned out to be, kept for segment-level checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum SectionShape {
    Literal,
    Parameter { catch_all: bool, optional: bool },
    Replacement,
}

#[derive(Debug, Clone, Copy)]
pub(super) struct SectionInfo {
    pub shape: SectionShape,
    pub range: TextRange,
}

impl SectionInfo {
    pub fn is_parameter(&self) -> bool {
        matches!(self.shape, SectionShape::Parameter { .. })
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(
            self.shape,
            SectionShape::Parameter {
                catch_all: true,
                ..
            }
        )
    }

    pub fn is_optional(&self) -> bool {
        matches!(
            self.shape,
            SectionShape::Parameter { optional: true, .. }
        )
    }
}
