#![no_main]

use benchplot::layout::LayoutTable;
use benchplot::pipeline::extract_text;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes are decoded the same way log files are
    let text = String::from_utf8_lossy(data);
    let table = LayoutTable::builtin();

    // Extraction must never fail on log content, only on configuration
    for (key, _) in table.iter() {
        let extraction = extract_text(&text, &table, key.system, &key.metric_set)
            .expect("builtin layouts are valid");
        assert_eq!(
            extraction.stats.records_extracted + extraction.stats.lines_skipped,
            extraction.stats.lines_matched
        );

        if let Ok(coords) = extraction.series.indexed(&extraction.series.fields()[0].name) {
            let _ = coords.to_string();
        }
    }
});
