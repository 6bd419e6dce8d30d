// fuzz/fuzz_targets/metrics_document_parse.rs
#![no_main]
use libfuzzer_sys::fuzz_target;
use metrics::{
    MetricsDocument, RowLayout, SampleField, ScalarField, extract_frequency_series,
    extract_scalar_series,
};

fuzz_target!(|data: &[u8]| {
    let Ok(doc) = MetricsDocument::from_reader(data, "<fuzz>") else {
        return;
    };
    for field in ScalarField::ALL {
        let _ = extract_scalar_series(&doc, field);
    }
    for field in SampleField::ALL {
        for layout in [RowLayout::TrailingDigit, RowLayout::Ordinal] {
            let _ = extract_frequency_series(&doc, field, layout);
        }
    }
});
