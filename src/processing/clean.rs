/*! Rule-based cleaning

Applies [DEFAULT_RULES] to a whole file, in memory, and writes the result.
!*/
use std::path::Path;

use log::info;

use crate::error::Error;
use crate::transformers::{RuleSet, Transform, DEFAULT_RULES};

/// Sizes before and after cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanReport {
    pub chars_before: usize,
    pub lines_before: usize,
    pub chars_after: usize,
    pub lines_after: usize,
}

/// Clean `src` into `dst` using the default rule table.
///
/// `dst` is truncated (or created). `src` and `dst` may be the same file.
pub fn clean_file(src: &Path, dst: &Path) -> Result<CleanReport, Error> {
    clean_file_with(src, dst, &DEFAULT_RULES)
}

/// Clean `src` into `dst` using the provided rules.
pub fn clean_file_with(src: &Path, dst: &Path, rules: &RuleSet) -> Result<CleanReport, Error> {
    info!("reading from {:?}", src);
    let content = std::fs::read_to_string(src)?;

    let chars_before = content.chars().count();
    let lines_before = content.lines().count();
    info!(
        "original size: {} characters, {} lines",
        chars_before, lines_before
    );

    let cleaned = rules.transform_own(content);

    let report = CleanReport {
        chars_before,
        lines_before,
        chars_after: cleaned.chars().count(),
        lines_after: cleaned.lines().count(),
    };
    info!(
        "cleaned size: {} characters, {} lines",
        report.chars_after, report.lines_after
    );

    std::fs::write(dst, cleaned)?;
    info!("written to {:?}", dst);

    Ok(report)
}
