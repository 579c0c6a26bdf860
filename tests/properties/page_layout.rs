//! Property tests for pagination and column-major layout.

use proptest::prelude::*;

use prime_pages::{paginate, MemorySink, PageGeometry, RowLayout, TablePagePrinter};

fn data_strategy() -> impl Strategy<Value = Vec<u64>> {
    proptest::collection::vec(any::<u64>(), 0..=120)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: pages cover the data in order, each at most rows x columns long.
    #[test]
    fn property_pages_partition_data(
        data in data_strategy(),
        rows in 1i64..=12,
        columns in 1i64..=6,
    ) {
        let geometry = PageGeometry::new(rows, columns, "P").unwrap();
        let pages: Vec<_> = paginate(&data, &geometry).collect();

        prop_assert_eq!(pages.len(), geometry.page_count(data.len()));
        let rejoined: Vec<u64> = pages.iter().flat_map(|p| p.values().iter().copied()).collect();
        prop_assert_eq!(&rejoined, &data);

        for (i, page) in pages.iter().enumerate() {
            prop_assert_eq!(page.number(), i + 1);
            prop_assert!(page.values().len() <= geometry.numbers_per_page());
            if i + 1 < pages.len() {
                prop_assert_eq!(page.values().len(), geometry.numbers_per_page());
            }
        }
    }

    /// PROPERTY: every value on a page appears exactly once, at row (i % rows).
    #[test]
    fn property_rows_are_column_major(
        data in data_strategy(),
        rows in 1i64..=12,
        columns in 1i64..=6,
    ) {
        let geometry = PageGeometry::new(rows, columns, "P").unwrap();
        let rows = rows as usize;

        for page in paginate(&data, &geometry) {
            let laid_out: Vec<Vec<u64>> = page.rows().collect();
            prop_assert_eq!(laid_out.len(), rows.min(page.values().len()));
            prop_assert!(laid_out.iter().all(|row| !row.is_empty()));

            let cells: usize = laid_out.iter().map(Vec::len).sum();
            prop_assert_eq!(cells, page.values().len());

            for (index, value) in page.values().iter().enumerate() {
                prop_assert_eq!(laid_out[index % rows][index / rows], *value);
            }
        }
    }

    /// PROPERTY: stacked output is one header per page plus one line per value.
    #[test]
    fn property_stacked_line_count(
        data in data_strategy(),
        rows in 1i64..=12,
        columns in 1i64..=6,
    ) {
        let geometry = PageGeometry::new(rows, columns, "P").unwrap();
        let pages = geometry.page_count(data.len());
        let printer = TablePagePrinter::new(geometry);

        let mut sink = MemorySink::new();
        printer.print_data(&data, &mut sink).unwrap();

        prop_assert_eq!(sink.lines().len(), pages + data.len());
        let headers = sink.lines().iter().filter(|l| l.starts_with("P --- Page ")).count();
        prop_assert_eq!(headers, pages);
    }

    /// PROPERTY: aligned output never pads missing cells and never fuses neighbours.
    #[test]
    fn property_aligned_rows_have_no_placeholders(
        data in proptest::collection::vec(0u64..1_000_000, 0..=120),
        rows in 1i64..=12,
        columns in 1i64..=6,
    ) {
        let geometry = PageGeometry::new(rows, columns, "P").unwrap();
        let printer = TablePagePrinter::new(geometry)
            .with_layout(RowLayout::Aligned)
            .with_column_width(8)
            .unwrap();

        let mut sink = MemorySink::new();
        printer.print_data(&data, &mut sink).unwrap();

        let mut cells = 0;
        for line in sink.lines().iter().filter(|l| !l.starts_with("P --- Page ")) {
            prop_assert!(!line.is_empty());
            prop_assert!(line.split_whitespace().all(|cell| cell.parse::<u64>().is_ok()));
            prop_assert_eq!(line.len() % 8, 0);
            cells += line.len() / 8;
        }
        prop_assert_eq!(cells, data.len());
    }

    /// PROPERTY: at any width, splitting aligned rows on whitespace recovers every value.
    #[test]
    fn property_aligned_cells_stay_separable(
        data in data_strategy(),
        rows in 1i64..=12,
        columns in 1i64..=6,
        width in 1usize..=4,
    ) {
        let geometry = PageGeometry::new(rows, columns, "P").unwrap();
        let expected: Vec<u64> = paginate(&data, &geometry)
            .flat_map(|page| page.reading_order().collect::<Vec<_>>())
            .collect();
        let printer = TablePagePrinter::new(geometry)
            .with_layout(RowLayout::Aligned)
            .with_column_width(width)
            .unwrap();

        let mut sink = MemorySink::new();
        printer.print_data(&data, &mut sink).unwrap();

        let parsed: Vec<u64> = sink
            .lines()
            .iter()
            .filter(|l| !l.starts_with("P --- Page "))
            .flat_map(|l| l.split_whitespace().map(|cell| cell.parse::<u64>().unwrap()))
            .collect();
        prop_assert_eq!(parsed, expected);
    }
}
