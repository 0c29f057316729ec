//! Discovery layer: enumerates the files a scan pass will visit.

pub mod walker;

pub use walker::{DirectoryWalker, WalkConfig};
