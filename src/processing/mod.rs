/*! Offline processing

Operations on whole files that do not need the correction oracle.
!*/
pub mod clean;

pub use clean::{clean_file, CleanReport};
