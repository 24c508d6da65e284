#![no_main]

use libfuzzer_sys::fuzz_target;
use tracepaths::categorize::categorize;
use tracepaths::extract::PathExtractor;

fuzz_target!(|data: &[u8]| {
    let Ok(extractor) = PathExtractor::new() else {
        return;
    };

    // Arbitrary bytes go through the lossy streaming path; never panics
    if let Ok(paths) = extractor.extract_reader(data) {
        let report = categorize(&paths);
        assert_eq!(report.total(), paths.len());
    }
});
