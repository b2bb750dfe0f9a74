/// Width model for a rendered token chip. The defaults describe the
/// terminal renderer: one cell per character, one padding cell and one
/// border cell on each side, one cell between chips.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChipMetrics {
    pub per_char: f32,
    pub h_padding: f32,
    pub border: f32,
    pub gap: f32,
}

impl Default for ChipMetrics {
    fn default() -> Self {
        Self {
            per_char: 1.0,
            h_padding: 1.0,
            border: 1.0,
            gap: 1.0,
        }
    }
}

impl ChipMetrics {
    pub fn chip_width(&self, token: &str) -> f32 {
        token.chars().count() as f32 * self.per_char + self.h_padding * 2.0 + self.border * 2.0
    }
}

/// Minimum number of answer rows the quiz screen draws; rows beyond the
/// packed content render as empty placeholder lines.
pub const MIN_ANSWER_ROWS: usize = 3;

/// A selected token placed into a packed row, keeping its position in the
/// selection so removal can address the right chip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PackedChip<'a> {
    pub token: &'a str,
    pub original_index: usize,
}

/// Wrap the selected tokens into rows that fit `available_width`.
///
/// Greedy left-to-right: a new row starts when the current row is non-empty
/// and the next chip (plus the inter-chip gap) would overflow. A chip wider
/// than the whole row still occupies a row of its own; nothing is ever
/// dropped. Empty input yields no rows.
pub fn pack<'a>(
    selected: &'a [String],
    available_width: f32,
    metrics: ChipMetrics,
) -> Vec<Vec<PackedChip<'a>>> {
    let mut rows: Vec<Vec<PackedChip<'a>>> = Vec::new();
    let mut row: Vec<PackedChip<'a>> = Vec::new();
    let mut row_width = 0.0f32;

    for (original_index, token) in selected.iter().enumerate() {
        let chip_width = metrics.chip_width(token);
        let next_width = if row.is_empty() {
            chip_width
        } else {
            row_width + metrics.gap + chip_width
        };

        if !row.is_empty() && next_width > available_width {
            rows.push(std::mem::take(&mut row));
            row.push(PackedChip {
                token,
                original_index,
            });
            row_width = chip_width;
        } else {
            row.push(PackedChip {
                token,
                original_index,
            });
            row_width = next_width;
        }
    }

    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|t| t.to_string()).collect()
    }

    fn flatten<'a>(rows: &[Vec<PackedChip<'a>>]) -> Vec<&'a str> {
        rows.iter().flatten().map(|chip| chip.token).collect()
    }

    #[test]
    fn chip_width_counts_padding_and_border() {
        let metrics = ChipMetrics::default();
        // 6 chars + 2 padding + 2 border cells.
        assert_eq!(metrics.chip_width("SELECT"), 10.0);
    }

    #[test]
    fn empty_selection_packs_to_no_rows() {
        let rows = pack(&[], 40.0, ChipMetrics::default());
        assert!(rows.is_empty());
    }

    #[test]
    fn everything_fits_on_one_row() {
        let selected = tokens(&["a", "b", "c"]);
        let rows = pack(&selected, 80.0, ChipMetrics::default());
        assert_eq!(rows.len(), 1);
        assert_eq!(flatten(&rows), vec!["a", "b", "c"]);
    }

    #[test]
    fn wraps_when_row_would_overflow() {
        // Each chip is 5 wide; two chips plus a gap are 11 wide.
        let selected = tokens(&["a", "b", "c", "d"]);
        let rows = pack(&selected, 11.0, ChipMetrics::default());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1].len(), 2);
    }

    #[test]
    fn never_drops_a_token() {
        let selected = tokens(&["SELECT", "name", "FROM", "employee", "WHERE", "salary", ">", "5000"]);
        for width in [1.0, 8.0, 15.0, 30.0, 200.0] {
            let rows = pack(&selected, width, ChipMetrics::default());
            let packed: Vec<&str> = flatten(&rows);
            let expected: Vec<&str> = selected.iter().map(String::as_str).collect();
            assert_eq!(packed, expected, "width {width}");
        }
    }

    #[test]
    fn oversized_chip_gets_its_own_row() {
        let selected = tokens(&["a", "extraordinarily_long_token", "b"]);
        let rows = pack(&selected, 10.0, ChipMetrics::default());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1][0].token, "extraordinarily_long_token");
    }

    #[test]
    fn original_indices_follow_selection_order() {
        let selected = tokens(&["a", "b", "c"]);
        let rows = pack(&selected, 5.0, ChipMetrics::default());
        let indices: Vec<usize> = rows.iter().flatten().map(|c| c.original_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
