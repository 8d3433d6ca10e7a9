mod dialects_tests;
mod parameters_tests;
mod replacements_tests;
mod segments_tests;
