#![no_main]

use libfuzzer_sys::fuzz_target;
use prime_pages::{MemorySink, PageGeometry, RowLayout, TablePagePrinter};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    let rows = i64::from(data[0] % 16) - 2;
    let columns = i64::from(data[1] % 8) - 2;
    let layout = if data[2] % 2 == 0 {
        RowLayout::Stacked
    } else {
        RowLayout::Aligned
    };
    let values: Vec<u64> = data[3..].iter().map(|&b| u64::from(b)).collect();

    let Ok(geometry) = PageGeometry::new(rows, columns, "fuzz") else {
        return;
    };
    let pages = geometry.page_count(values.len());
    let printer = TablePagePrinter::new(geometry).with_layout(layout);

    let mut sink = MemorySink::new();
    printer
        .print_data(&values, &mut sink)
        .expect("memory sink never fails");

    let headers = sink
        .lines()
        .iter()
        .filter(|line| line.starts_with("fuzz --- Page "))
        .count();
    assert_eq!(headers, pages);
});
