#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing and target rule compilation must never panic
        if let Ok(config) = toml::from_str::<st2make::Config>(content) {
            let _ = st2make::TargetResolver::with_rules(&config.targets);
        }
    }
});
