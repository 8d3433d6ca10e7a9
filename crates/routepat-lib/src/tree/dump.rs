//! Test-only dump methods for tree inspection.
