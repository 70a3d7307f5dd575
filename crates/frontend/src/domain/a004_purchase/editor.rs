//! Inline cell editing on the inventory board.
//!
//! At most one cell is in edit mode. A commit always writes the parsed value
//! into the board and closes the cursor before any network call happens.
//! Purchased-quantity cells then yield a [`DetailPatch`] for the caller to
//! send. Inventory cells stay local.

use contracts::domain::a003_product::ProductId;
use contracts::domain::a004_purchase::{DetailId, DetailUpdate};

use super::pivot::{ColumnSlot, InventoryBoard};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellField {
    /// Inventory count after the purchase (local only)
    Inventory(ColumnSlot),
    /// Units purchased (sent to the backend)
    Purchased(ColumnSlot),
}

impl CellField {
    pub fn slot(self) -> ColumnSlot {
        match self {
            CellField::Inventory(slot) | CellField::Purchased(slot) => slot,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCursor {
    pub row_id: ProductId,
    pub field: CellField,
    /// Raw text of the input box
    pub pending: String,
}

/// Partial update produced by a purchased-quantity commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailPatch {
    pub detail_id: DetailId,
    pub body: DetailUpdate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOutcome {
    pub row_id: ProductId,
    pub field: CellField,
    /// Value written into the board
    pub value: i64,
    /// Quantity before the commit, restored by [`rollback`]
    pub previous: i64,
    pub patch: Option<DetailPatch>,
}

/// Cell text to number. Anything unparsable, or negative, becomes 0.
pub fn parse_cell_value(text: &str) -> i64 {
    text.trim().parse::<i64>().map(|v| v.max(0)).unwrap_or(0)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineEditor {
    cursor: Option<EditCursor>,
}

impl InlineEditor {
    pub fn cursor(&self) -> Option<&EditCursor> {
        self.cursor.as_ref()
    }

    pub fn is_editing(&self, row_id: ProductId, field: CellField) -> bool {
        self.cursor
            .as_ref()
            .is_some_and(|c| c.row_id == row_id && c.field == field)
    }

    pub fn pending(&self) -> String {
        self.cursor
            .as_ref()
            .map(|c| c.pending.clone())
            .unwrap_or_default()
    }

    /// Put a cell into edit mode, seeded with its current value.
    ///
    /// Any other open edit is dropped without saving. Cells of absent columns
    /// cannot be edited and leave the editor unchanged.
    pub fn begin(&mut self, board: &InventoryBoard, row_id: ProductId, field: CellField) -> bool {
        let Some(column) = board.row(row_id).and_then(|r| r.column(field.slot())) else {
            return false;
        };

        let current = match field {
            CellField::Inventory(_) => column.displayed_inventory(),
            CellField::Purchased(_) => column.quantity,
        };

        if let Some(previous) = &self.cursor {
            log::debug!("dropping uncommitted edit of {:?}/{:?}", previous.row_id, previous.field);
        }

        self.cursor = Some(EditCursor {
            row_id,
            field,
            pending: current.to_string(),
        });
        true
    }

    pub fn set_pending(&mut self, text: String) {
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.pending = text;
        }
    }

    /// Close the cursor and write its value into the board.
    ///
    /// Returns `None` when nothing was open or the row/column vanished under a
    /// refresh. The cursor is closed in every case.
    pub fn commit(&mut self, board: &mut InventoryBoard) -> Option<CommitOutcome> {
        let cursor = self.cursor.take()?;
        let value = parse_cell_value(&cursor.pending);

        let column = board
            .row_mut(cursor.row_id)
            .and_then(|r| r.column_mut(cursor.field.slot()))?;
        let previous = column.quantity;

        let patch = match cursor.field {
            CellField::Inventory(_) => {
                column.inventory_override = Some(value);
                None
            }
            CellField::Purchased(_) => {
                column.quantity = value;
                match column.detail_id {
                    Some(detail_id) => Some(DetailPatch {
                        detail_id,
                        body: DetailUpdate {
                            cantidad: value,
                            inventario_anterior: column.prior_inventory,
                        },
                    }),
                    None => {
                        log::warn!("column without detail id, edit stays local");
                        None
                    }
                }
            }
        };

        Some(CommitOutcome {
            row_id: cursor.row_id,
            field: cursor.field,
            value,
            previous,
            patch,
        })
    }
}

/// Undo a purchased-quantity commit whose patch was rejected.
///
/// Only restores while the cell still shows the committed value; a refresh
/// that already replaced it wins. Returns whether anything changed.
pub fn rollback(board: &mut InventoryBoard, outcome: &CommitOutcome) -> bool {
    if !matches!(outcome.field, CellField::Purchased(_)) {
        return false;
    }
    match board
        .row_mut(outcome.row_id)
        .and_then(|r| r.column_mut(outcome.field.slot()))
    {
        Some(column) if column.quantity == outcome.value => {
            column.quantity = outcome.previous;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_purchase::pivot::build_inventory_board;
    use chrono::NaiveDate;
    use contracts::domain::a002_supplier::SupplierId;
    use contracts::domain::a004_purchase::{Detail, Purchase, PurchaseId};

    fn board() -> InventoryBoard {
        let purchase = |id: i64, fecha: &str, detail_id: i64, cantidad: i64, anterior: i64| Purchase {
            id: Some(PurchaseId(id)),
            proveedor: SupplierId(1),
            fecha_compra: NaiveDate::parse_from_str(fecha, "%Y-%m-%d").unwrap(),
            detalles: vec![Detail {
                id: Some(DetailId(detail_id)),
                producto: ProductId(1),
                producto_nombre: Some("Producto A".into()),
                cantidad,
                inventario_anterior: anterior,
            }],
        };
        build_inventory_board(&[
            purchase(1, "2024-03-05", 11, 30, 55),
            purchase(2, "2024-01-15", 21, 20, 65),
        ])
    }

    const P1: ProductId = ProductId(1);

    #[test]
    fn begin_seeds_current_value() {
        let board = board();
        let mut editor = InlineEditor::default();

        assert!(editor.begin(&board, P1, CellField::Purchased(ColumnSlot::Second)));
        assert_eq!(editor.pending(), "20");
        assert!(editor.is_editing(P1, CellField::Purchased(ColumnSlot::Second)));

        assert!(editor.begin(&board, P1, CellField::Inventory(ColumnSlot::First)));
        assert_eq!(editor.pending(), "85");
    }

    #[test]
    fn purchased_commit_patches_detail_with_stored_prior_inventory() {
        let mut board = board();
        let mut editor = InlineEditor::default();
        editor.begin(&board, P1, CellField::Purchased(ColumnSlot::Second));
        editor.set_pending("25".into());

        let outcome = editor.commit(&mut board).unwrap();

        assert!(editor.cursor().is_none());
        assert_eq!(board.row(P1).unwrap().quantity_value(ColumnSlot::Second), 25);
        assert_eq!(
            outcome.patch,
            Some(DetailPatch {
                detail_id: DetailId(21),
                body: DetailUpdate {
                    cantidad: 25,
                    inventario_anterior: 65
                },
            })
        );
        assert_eq!(outcome.previous, 20);
    }

    #[test]
    fn twelve_is_sent_as_twelve() {
        let mut board = board();
        let mut editor = InlineEditor::default();
        editor.begin(&board, P1, CellField::Purchased(ColumnSlot::First));
        editor.set_pending("12".into());

        let patch = editor.commit(&mut board).unwrap().patch.unwrap();
        assert_eq!(patch.body.cantidad, 12);
        assert_eq!(patch.body.inventario_anterior, 55);
    }

    #[test]
    fn unparsable_input_commits_zero() {
        let mut board = board();
        let mut editor = InlineEditor::default();
        editor.begin(&board, P1, CellField::Purchased(ColumnSlot::First));
        editor.set_pending("abc".into());

        let outcome = editor.commit(&mut board).unwrap();
        assert_eq!(outcome.value, 0);
        assert_eq!(outcome.patch.unwrap().body.cantidad, 0);
        assert_eq!(board.row(P1).unwrap().quantity_value(ColumnSlot::First), 0);
    }

    #[test]
    fn inventory_commit_is_local_only() {
        let mut board = board();
        let mut editor = InlineEditor::default();
        editor.begin(&board, P1, CellField::Inventory(ColumnSlot::First));
        editor.set_pending("80".into());

        let outcome = editor.commit(&mut board).unwrap();
        assert!(outcome.patch.is_none());
        let row = board.row(P1).unwrap();
        assert_eq!(row.inventory_value(ColumnSlot::First), 80);
        assert_eq!(row.quantity_value(ColumnSlot::First), 30);
    }

    #[test]
    fn switching_cells_drops_pending_text() {
        let mut board = board();
        let mut editor = InlineEditor::default();
        editor.begin(&board, P1, CellField::Purchased(ColumnSlot::First));
        editor.set_pending("99".into());

        editor.begin(&board, P1, CellField::Purchased(ColumnSlot::Second));
        assert_eq!(board.row(P1).unwrap().quantity_value(ColumnSlot::First), 30);
        assert_eq!(editor.pending(), "20");

        editor.commit(&mut board);
        assert_eq!(board.row(P1).unwrap().quantity_value(ColumnSlot::First), 30);
    }

    #[test]
    fn absent_column_is_not_editable() {
        let board = board();
        let mut editor = InlineEditor::default();
        assert!(!editor.begin(&board, P1, CellField::Purchased(ColumnSlot::Third)));
        assert!(!editor.begin(&board, ProductId(404), CellField::Inventory(ColumnSlot::First)));
        assert!(editor.cursor().is_none());
    }

    #[test]
    fn second_commit_is_a_no_op() {
        let mut board = board();
        let mut editor = InlineEditor::default();
        editor.begin(&board, P1, CellField::Purchased(ColumnSlot::First));
        assert!(editor.commit(&mut board).is_some());
        assert!(editor.commit(&mut board).is_none());
    }

    #[test]
    fn commit_after_row_vanished_closes_cursor() {
        let mut board = board();
        let mut editor = InlineEditor::default();
        editor.begin(&board, P1, CellField::Purchased(ColumnSlot::First));
        board.rows.clear();

        assert!(editor.commit(&mut board).is_none());
        assert!(editor.cursor().is_none());
    }

    #[test]
    fn rollback_restores_previous_quantity() {
        let mut board = board();
        let mut editor = InlineEditor::default();
        editor.begin(&board, P1, CellField::Purchased(ColumnSlot::Second));
        editor.set_pending("25".into());
        let outcome = editor.commit(&mut board).unwrap();

        assert!(rollback(&mut board, &outcome));
        assert_eq!(board.row(P1).unwrap().quantity_value(ColumnSlot::Second), 20);
    }

    #[test]
    fn rollback_yields_to_newer_data() {
        let mut board = board();
        let mut editor = InlineEditor::default();
        editor.begin(&board, P1, CellField::Purchased(ColumnSlot::Second));
        editor.set_pending("25".into());
        let outcome = editor.commit(&mut board).unwrap();

        board
            .row_mut(P1)
            .and_then(|r| r.column_mut(ColumnSlot::Second))
            .unwrap()
            .quantity = 40;

        assert!(!rollback(&mut board, &outcome));
        assert_eq!(board.row(P1).unwrap().quantity_value(ColumnSlot::Second), 40);
    }

    #[test]
    fn parse_cell_value_rules() {
        assert_eq!(parse_cell_value(" 12 "), 12);
        assert_eq!(parse_cell_value(""), 0);
        assert_eq!(parse_cell_value("1.5"), 0);
        assert_eq!(parse_cell_value("-3"), 0);
    }

    #[test]
    fn huge_quantity_keeps_board_readable() {
        let mut board = board();
        let mut editor = InlineEditor::default();
        editor.begin(&board, P1, CellField::Purchased(ColumnSlot::Second));
        editor.set_pending(i64::MAX.to_string());
        let outcome = editor.commit(&mut board).unwrap();

        assert_eq!(outcome.patch.unwrap().body.cantidad, i64::MAX);
        let row = board.row(P1).unwrap();
        assert_eq!(row.inventory_value(ColumnSlot::Second), i64::MAX);
        assert_eq!(row.purchased_delta(ColumnSlot::Second), Some(65 - i64::MAX));
        assert_eq!(board.total_purchased(), i64::MAX);
    }
}
