#![no_main]

use std::collections::BTreeMap;

use benchplot::render::PlotTemplate;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };

    // Parsing may reject the template but must not panic
    if let Ok(template) = PlotTemplate::parse(source) {
        let values: BTreeMap<&str, String> = template
            .placeholders()
            .into_iter()
            .map(|name| (name, "(1, 2.000)".to_string()))
            .collect();
        // Every declared placeholder is supplied, so rendering must succeed
        template.render(&values).expect("all placeholders supplied");
    }
});
