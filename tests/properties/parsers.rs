//! Property tests for descriptor, linker script and template parsing.

use std::path::Path;

use proptest::prelude::*;

use st2make::descriptor::{extract_build_settings, extract_sources, Descriptor};
use st2make::linker::analyze_link_script;
use st2make::template::{Slots, Template};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Arbitrary descriptor text yields a value or an error, never a panic.
    #[test]
    fn property_descriptor_never_panics(text in "(?s).{0,512}") {
        let descriptor = Descriptor::new(".cproject", text);
        let _ = extract_sources(&descriptor);
        let _ = extract_build_settings(&descriptor);
    }

    /// PROPERTY: Arbitrary linker script text never panics.
    #[test]
    fn property_link_script_never_panics(text in "(?s).{0,512}") {
        let _ = analyze_link_script(&text, Path::new("x.ld"));
    }

    /// PROPERTY: Any single-line MEMORY body and `_estack` line are lifted verbatim.
    #[test]
    fn property_layout_extracted_verbatim(
        body in "[A-Za-z0-9_()]{1,12} : ORIGIN = 0x[0-9A-F]{1,8}, LENGTH = [0-9]{1,4}K",
        addr in "0x[0-9A-F]{8}",
    ) {
        let text = format!("MEMORY {{ {body} }}\n_estack = {addr};\n");

        let layout = analyze_link_script(&text, Path::new("x.ld")).unwrap();

        prop_assert_eq!(layout.memory, body);
        prop_assert_eq!(layout.estack, format!("_estack = {addr};"));
    }

    /// PROPERTY: Templates without `$` render unchanged; `$$` always renders `$`.
    #[test]
    fn property_template_literal_text(text in "[^$]{0,128}") {
        let plain = Template::new("t", text.clone());
        prop_assert_eq!(plain.substitute(&Slots::new()).unwrap(), text.clone());

        let escaped = Template::new("t", format!("$${text}$$"));
        prop_assert_eq!(escaped.substitute(&Slots::new()).unwrap(), format!("${text}$"));
    }
}
