#![no_main]

use libfuzzer_sys::fuzz_target;
use st2make::template::{Slots, Template};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let mut slots = Slots::new();
        slots.insert("TARGET", "fuzz".to_string());
        slots.insert("MEMORY", "RAM : ORIGIN = 0, LENGTH = 1K".to_string());
        let _ = Template::new("fuzz.tpl", content).substitute(&slots);
    }
});
