//! Layer size classification
//!
//! Lambda rejects direct layer uploads over 50 MB (zipped). Layers staged
//! through S3 can be larger, but the unzipped function package, layers
//! included, still cannot exceed 250 MB.

/// Maximum zipped size for a direct layer upload, in MB
pub const LAYER_SIZE_LIMIT_MB: u64 = 50;

/// Maximum unzipped size of a function plus its layers, in MB
pub const UNZIPPED_SIZE_LIMIT_MB: u64 = 250;

pub const BYTES_PER_MB: u64 = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    WithinLimit,
    ExceedsLimit,
}

/// Size of a built archive and its classification against the upload limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeReport {
    size_bytes: u64,
}

impl SizeReport {
    pub fn new(size_bytes: u64) -> Self {
        Self { size_bytes }
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / BYTES_PER_MB as f64
    }

    /// Exactly 50 MB is still within the limit.
    pub fn class(&self) -> SizeClass {
        if self.size_bytes > LAYER_SIZE_LIMIT_MB * BYTES_PER_MB {
            SizeClass::ExceedsLimit
        } else {
            SizeClass::WithinLimit
        }
    }

    pub fn exceeds_limit(&self) -> bool {
        self.class() == SizeClass::ExceedsLimit
    }

    /// Operator-facing message for this classification
    pub fn message(&self) -> String {
        match self.class() {
            SizeClass::ExceedsLimit => format!(
                "Layer size ({:.2}MB) exceeds AWS Lambda limit of {}MB. Upload it to S3 first. \
                 Be mindful that the Lambda package cannot exceed {}MB unzipped.",
                self.size_mb(),
                LAYER_SIZE_LIMIT_MB,
                UNZIPPED_SIZE_LIMIT_MB
            ),
            SizeClass::WithinLimit => format!(
                "Layer size ({:.2}MB) is within recommended limits",
                self.size_mb()
            ),
        }
    }
}
