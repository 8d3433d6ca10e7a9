//! Parser self-checks. A failure here is a bug in the route grammar, never bad template input.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::{LOOKAHEAD_BUDGET, Parser};
use super::cst::SyntaxKind;

impl Parser<'_> {
    /// Every lookahead spends budget; `bump` refills it.
    #[inline]
    pub(super) fn ensure_progress(&self) {
        let left = self.lookahead_budget.get();
        assert!(
            left != 0,
            "route parser made no progress in {LOOKAHEAD_BUDGET} lookaheads at token {}",
            self.pos,
        );
        self.lookahead_budget.set(left - 1);
    }

    /// Grammar rules call this before consuming a token their caller already matched.
    #[inline]
    pub(super) fn assert_current(&self, expected_kind: SyntaxKind) {
        let current_kind = self.current();
        assert_eq!(
            current_kind, expected_kind,
            "route grammar dispatched on {:?} but token {} is {:?}",
            expected_kind, self.pos, current_kind,
        );
    }
}
