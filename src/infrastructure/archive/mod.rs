//! Archive adapters

mod zip_archiver;

pub use zip_archiver::ZipArchiver;
