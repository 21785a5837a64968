/*!
# Append-only file writing

The user-facing object is [AppendingSink], which reopens its destination for each append
so that every piece of corrected text is on disk before the next one is produced.
!*/
mod textwriter;

pub use textwriter::AppendingSink;
