#![no_main]

use libfuzzer_sys::fuzz_target;
use st2make::descriptor::{extract_build_settings, extract_sources, Descriptor};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Both extractors must return an error, not panic, on any XML
        let descriptor = Descriptor::new(".cproject", content);
        let _ = extract_sources(&descriptor);
        let _ = extract_build_settings(&descriptor);
    }
});
