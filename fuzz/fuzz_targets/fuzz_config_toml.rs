#![no_main]

use libfuzzer_sys::fuzz_target;
use prime_pages::{OutputFormat, PageGeometry};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and validating any config must never panic
        if let Ok(config) = toml::from_str::<prime_pages::Config>(content) {
            let options = config.print_options(OutputFormat::Text);
            let _ = options.resolved_header();
            let _ = PageGeometry::new(options.rows_per_page, options.columns_per_page, "fuzz");
        }
    }
});
