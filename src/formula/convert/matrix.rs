// Matrix conversion logic
//
// `mtable` rows are its `mtr` children, cells are their `mtd` children.
// Anything else inside a table (KaTeX never emits it) is ignored.

use super::converter::MathmlConverter;
use crate::formula::ast::MathComponent;
use crate::formula::mathml::{MathmlElement, MathmlTag};

const COMPAT_OPEN: &str = "[";
const COMPAT_CLOSE: &str = "]";
const COMPAT_CELL_SEPARATOR: &str = ", ";
const COMPAT_ROW_SEPARATOR: &str = "; ";

impl MathmlConverter {
    /// Convert an `mtable` sitting at `depth`
    ///
    /// Produces one matrix, or in LibreOffice mode a bracketed flat sequence
    /// such as `[a, b; c, d]` with converted cell content between the
    /// literal runs.
    pub(super) fn convert_table(
        &mut self,
        table: &MathmlElement,
        depth: usize,
    ) -> Vec<MathComponent> {
        self.stats.record_matrix();

        // table, row and cell each add a level above the cell content
        let cell_depth = depth + 3;
        let mut rows: Vec<Vec<Vec<MathComponent>>> = Vec::new();
        for row in table.children_tagged(MathmlTag::TableRow) {
            let cells = row
                .children_tagged(MathmlTag::TableCell)
                .map(|cell| self.convert_siblings(&cell.children, cell_depth))
                .collect();
            rows.push(cells);
        }

        if self.options.libreoffice_compat {
            flatten_rows(rows)
        } else {
            vec![MathComponent::Matrix { rows }]
        }
    }
}

/// Interleave cell content with bracket and separator runs
fn flatten_rows(rows: Vec<Vec<Vec<MathComponent>>>) -> Vec<MathComponent> {
    let mut components = vec![MathComponent::run(COMPAT_OPEN)];
    for (row_index, row) in rows.into_iter().enumerate() {
        if row_index > 0 {
            components.push(MathComponent::run(COMPAT_ROW_SEPARATOR));
        }
        for (cell_index, cell) in row.into_iter().enumerate() {
            if cell_index > 0 {
                components.push(MathComponent::run(COMPAT_CELL_SEPARATOR));
            }
            components.extend(cell);
        }
    }
    components.push(MathComponent::run(COMPAT_CLOSE));
    components
}
