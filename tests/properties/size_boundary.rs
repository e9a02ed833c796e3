//! Property tests for layer size classification.

use proptest::prelude::*;

use lambda_layer_maker::domain::value_objects::{SizeClass, BYTES_PER_MB, LAYER_SIZE_LIMIT_MB};
use lambda_layer_maker::SizeReport;

const LIMIT_BYTES: u64 = LAYER_SIZE_LIMIT_MB * BYTES_PER_MB;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: an archive exceeds the limit iff it is strictly larger than 50 MB.
    #[test]
    fn property_exceeds_iff_strictly_over_limit(size in 0u64..=(2 * LIMIT_BYTES)) {
        let report = SizeReport::new(size);
        prop_assert_eq!(report.exceeds_limit(), size > LIMIT_BYTES);
        prop_assert_eq!(
            report.class() == SizeClass::ExceedsLimit,
            report.exceeds_limit()
        );
    }

    /// PROPERTY: the message always carries the size and advises S3 only when over.
    #[test]
    fn property_message_matches_class(size in 0u64..=(2 * LIMIT_BYTES)) {
        let report = SizeReport::new(size);
        let message = report.message();
        let formatted_size = format!("({:.2}MB)", report.size_mb());
        prop_assert!(message.contains(&formatted_size));
        prop_assert_eq!(message.contains("Upload it to S3 first"), report.exceeds_limit());
    }

    /// PROPERTY: a larger archive never classifies as smaller.
    #[test]
    fn property_classification_is_monotonic(a in any::<u32>(), b in any::<u32>()) {
        let (small, large) = if a <= b { (a as u64, b as u64) } else { (b as u64, a as u64) };
        if SizeReport::new(small).exceeds_limit() {
            prop_assert!(SizeReport::new(large).exceeds_limit());
        }
    }
}
