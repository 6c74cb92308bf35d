/// Renders a value as a column-aligned text table.
pub trait TableShow {
    // number of columns
    const COLS: usize;

    fn head() -> Vec<String>;

    // column title and cells, top to bottom
    fn cols(&self) -> Vec<(String, Vec<String>)>;

    fn table(&self) -> String {
        let cols = self.cols();
        let widths = cols
            .iter()
            .map(|(h, cells)| {
                2 + cells
                    .iter()
                    .map(|s| s.len())
                    .max()
                    .unwrap_or_default()
                    .max(h.len())
            })
            .collect::<Vec<_>>();

        fn cell(table: &mut String, width: usize, s: &str, center: bool) {
            let pad = width.saturating_sub(s.len());
            let front = if center { pad / 2 } else { pad.min(1) };
            table.extend(std::iter::repeat(' ').take(front));
            table.push_str(s);
            table.extend(std::iter::repeat(' ').take(pad - front));
        }

        let mut table = String::new();
        for ((h, _), &w) in cols.iter().zip(widths.iter()) {
            cell(&mut table, w, h, true);
        }
        table.push('\n');

        for &w in widths.iter() {
            table.extend(std::iter::repeat('-').take(w));
        }
        table.push('\n');

        let rows = cols.iter().map(|c| c.1.len()).max().unwrap_or_default();
        for idx in 0..rows {
            for ((_, cells), &w) in cols.iter().zip(widths.iter()) {
                cell(
                    &mut table,
                    w,
                    cells.get(idx).map(|s| s.as_str()).unwrap_or_default(),
                    false,
                );
            }
            table.push('\n');
        }

        table
    }
}
