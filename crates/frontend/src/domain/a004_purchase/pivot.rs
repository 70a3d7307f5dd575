//! Pivot of the latest purchases into one row per product.
//!
//! Column 1 holds the newest purchase, column 3 the oldest of the window.
//! The board is rebuilt from scratch on every purchase-list refresh.

use chrono::NaiveDate;
use contracts::domain::a003_product::ProductId;
use contracts::domain::a004_purchase::{DetailId, Purchase};
use std::collections::HashMap;

/// Number of purchase columns on the board. Fixed.
pub const PIVOT_WINDOW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnSlot {
    First,
    Second,
    Third,
}

impl ColumnSlot {
    pub const ALL: [ColumnSlot; PIVOT_WINDOW] =
        [ColumnSlot::First, ColumnSlot::Second, ColumnSlot::Third];

    pub fn index(self) -> usize {
        match self {
            ColumnSlot::First => 0,
            ColumnSlot::Second => 1,
            ColumnSlot::Third => 2,
        }
    }
}

/// One purchase's data for one product
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryColumn {
    /// Backend line the column was built from; edits are routed here
    pub detail_id: Option<DetailId>,
    pub date: NaiveDate,
    pub quantity: i64,
    pub prior_inventory: i64,
    /// Local-only correction typed into the inventory cell
    pub inventory_override: Option<i64>,
}

impl InventoryColumn {
    /// Saturates at `i64::MAX` for oversized cell input.
    pub fn new_inventory(&self) -> i64 {
        self.prior_inventory.saturating_add(self.quantity)
    }

    /// What the inventory cell shows
    pub fn displayed_inventory(&self) -> i64 {
        self.inventory_override
            .unwrap_or_else(|| self.new_inventory())
    }

    /// Badge next to the purchased quantity: prior minus shown inventory
    pub fn purchased_delta(&self) -> i64 {
        self.prior_inventory.saturating_sub(self.displayed_inventory())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRow {
    pub product_id: ProductId,
    pub product_name: String,
    pub columns: [Option<InventoryColumn>; PIVOT_WINDOW],
}

impl InventoryRow {
    fn new(product_id: ProductId, product_name: String) -> Self {
        Self {
            product_id,
            product_name,
            columns: [None, None, None],
        }
    }

    pub fn column(&self, slot: ColumnSlot) -> Option<&InventoryColumn> {
        self.columns[slot.index()].as_ref()
    }

    pub fn column_mut(&mut self, slot: ColumnSlot) -> Option<&mut InventoryColumn> {
        self.columns[slot.index()].as_mut()
    }

    /// Inventory cell value; absent columns show 0
    pub fn inventory_value(&self, slot: ColumnSlot) -> i64 {
        self.column(slot)
            .map(InventoryColumn::displayed_inventory)
            .unwrap_or(0)
    }

    /// Purchased cell value; absent columns show 0
    pub fn quantity_value(&self, slot: ColumnSlot) -> i64 {
        self.column(slot).map(|c| c.quantity).unwrap_or(0)
    }

    /// `None` for absent columns, never a fake zero delta
    pub fn purchased_delta(&self, slot: ColumnSlot) -> Option<i64> {
        self.column(slot).map(InventoryColumn::purchased_delta)
    }

    pub fn populated_columns(&self) -> usize {
        self.columns.iter().filter(|c| c.is_some()).count()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryBoard {
    /// Date of each windowed purchase, used for the column headers
    pub dates: [Option<NaiveDate>; PIVOT_WINDOW],
    pub rows: Vec<InventoryRow>,
}

impl InventoryBoard {
    pub fn row(&self, product_id: ProductId) -> Option<&InventoryRow> {
        self.rows.iter().find(|r| r.product_id == product_id)
    }

    pub fn row_mut(&mut self, product_id: ProductId) -> Option<&mut InventoryRow> {
        self.rows.iter_mut().find(|r| r.product_id == product_id)
    }

    /// Sum of every purchased quantity shown on the board
    pub fn total_purchased(&self) -> i64 {
        self.rows
            .iter()
            .flat_map(|r| r.columns.iter().flatten())
            .fold(0i64, |acc, c| acc.saturating_add(c.quantity))
    }
}

/// Newest purchases first, at most [`PIVOT_WINDOW`] of them.
///
/// The sort is stable, so purchases sharing a date keep their list order.
pub fn recent_window(purchases: &[Purchase]) -> Vec<&Purchase> {
    let mut sorted: Vec<&Purchase> = purchases.iter().collect();
    sorted.sort_by(|a, b| b.fecha_compra.cmp(&a.fecha_compra));
    sorted.truncate(PIVOT_WINDOW);
    sorted
}

/// Build the board from an unordered purchase list.
pub fn build_inventory_board(purchases: &[Purchase]) -> InventoryBoard {
    let window = recent_window(purchases);

    let mut board = InventoryBoard::default();
    let mut positions: HashMap<ProductId, usize> = HashMap::new();

    for (index, purchase) in window.iter().enumerate() {
        board.dates[index] = Some(purchase.fecha_compra);

        for detail in &purchase.detalles {
            let position = *positions.entry(detail.producto).or_insert_with(|| {
                board
                    .rows
                    .push(InventoryRow::new(detail.producto, detail.display_name()));
                board.rows.len() - 1
            });

            // A product listed twice in one purchase: the later line wins.
            board.rows[position].columns[index] = Some(InventoryColumn {
                detail_id: detail.id,
                date: purchase.fecha_compra,
                quantity: detail.cantidad,
                prior_inventory: detail.inventario_anterior,
                inventory_override: None,
            });
        }
    }

    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_supplier::SupplierId;
    use contracts::domain::a004_purchase::{Detail, PurchaseId};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn detail(id: i64, product: i64, cantidad: i64, anterior: i64) -> Detail {
        Detail {
            id: Some(DetailId(id)),
            producto: ProductId(product),
            producto_nombre: Some(format!("Producto {}", product)),
            cantidad,
            inventario_anterior: anterior,
        }
    }

    fn purchase(id: i64, fecha: &str, detalles: Vec<Detail>) -> Purchase {
        Purchase {
            id: Some(PurchaseId(id)),
            proveedor: SupplierId(1),
            fecha_compra: date(fecha),
            detalles,
        }
    }

    #[test]
    fn two_purchase_scenario() {
        let purchases = vec![
            purchase(1, "2024-03-05", vec![detail(11, 1, 30, 55)]),
            purchase(2, "2024-01-15", vec![detail(21, 1, 20, 65)]),
        ];

        let board = build_inventory_board(&purchases);
        assert_eq!(board.rows.len(), 1);
        let row = &board.rows[0];

        let first = row.column(ColumnSlot::First).unwrap();
        assert_eq!(first.date, date("2024-03-05"));
        assert_eq!((first.quantity, first.prior_inventory), (30, 55));
        assert_eq!(first.new_inventory(), 85);
        assert_eq!(first.detail_id, Some(DetailId(11)));

        let second = row.column(ColumnSlot::Second).unwrap();
        assert_eq!(second.date, date("2024-01-15"));
        assert_eq!((second.quantity, second.prior_inventory), (20, 65));
        assert_eq!(second.new_inventory(), 85);

        assert!(row.column(ColumnSlot::Third).is_none());
        assert_eq!(board.dates[2], None);
    }

    #[test]
    fn sorts_by_date_descending_regardless_of_input_order() {
        let purchases = vec![
            purchase(1, "2024-01-15", vec![detail(11, 1, 1, 0)]),
            purchase(2, "2024-03-05", vec![detail(21, 1, 3, 0)]),
            purchase(3, "2024-02-10", vec![detail(31, 1, 2, 0)]),
        ];

        let board = build_inventory_board(&purchases);
        assert_eq!(
            board.dates,
            [
                Some(date("2024-03-05")),
                Some(date("2024-02-10")),
                Some(date("2024-01-15"))
            ]
        );
        let row = &board.rows[0];
        assert_eq!(row.quantity_value(ColumnSlot::First), 3);
        assert_eq!(row.quantity_value(ColumnSlot::Second), 2);
        assert_eq!(row.quantity_value(ColumnSlot::Third), 1);
    }

    #[test]
    fn only_three_newest_purchases_are_used() {
        let purchases = vec![
            purchase(1, "2024-01-01", vec![detail(11, 9, 5, 5)]),
            purchase(2, "2024-02-01", vec![detail(21, 1, 1, 1)]),
            purchase(3, "2024-03-01", vec![detail(31, 1, 1, 1)]),
            purchase(4, "2024-04-01", vec![detail(41, 2, 1, 1)]),
        ];

        let board = build_inventory_board(&purchases);
        assert!(board.row(ProductId(9)).is_none());
        assert_eq!(board.rows.len(), 2);
        for row in &board.rows {
            assert!(row.populated_columns() <= PIVOT_WINDOW);
        }
    }

    #[test]
    fn equal_dates_keep_list_order() {
        let purchases = vec![
            purchase(1, "2024-03-05", vec![detail(11, 1, 10, 0)]),
            purchase(2, "2024-03-05", vec![detail(21, 1, 20, 0)]),
        ];

        let window = recent_window(&purchases);
        assert_eq!(window[0].id, Some(PurchaseId(1)));
        assert_eq!(window[1].id, Some(PurchaseId(2)));

        let board = build_inventory_board(&purchases);
        assert_eq!(board.rows[0].quantity_value(ColumnSlot::First), 10);
        assert_eq!(board.rows[0].quantity_value(ColumnSlot::Second), 20);
    }

    #[test]
    fn rows_follow_product_first_seen_order() {
        let purchases = vec![
            purchase(1, "2024-03-05", vec![detail(11, 3, 1, 0), detail(12, 1, 1, 0)]),
            purchase(2, "2024-02-05", vec![detail(21, 2, 1, 0), detail(22, 3, 1, 0)]),
        ];

        let board = build_inventory_board(&purchases);
        let order: Vec<i64> = board.rows.iter().map(|r| r.product_id.value()).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn product_missing_from_newer_purchase_leaves_gap() {
        let purchases = vec![
            purchase(1, "2024-03-05", vec![detail(11, 1, 4, 10)]),
            purchase(2, "2024-02-05", vec![detail(21, 2, 6, 20)]),
        ];

        let board = build_inventory_board(&purchases);
        let row = board.row(ProductId(2)).unwrap();
        assert!(row.column(ColumnSlot::First).is_none());
        assert_eq!(row.inventory_value(ColumnSlot::First), 0);
        assert_eq!(row.quantity_value(ColumnSlot::First), 0);
        assert_eq!(row.purchased_delta(ColumnSlot::First), None);
        assert_eq!(row.purchased_delta(ColumnSlot::Second), Some(-6));
    }

    #[test]
    fn duplicate_product_in_one_purchase_keeps_last_line() {
        let purchases = vec![purchase(
            1,
            "2024-03-05",
            vec![detail(11, 1, 4, 10), detail(12, 1, 7, 10)],
        )];

        let board = build_inventory_board(&purchases);
        assert_eq!(board.rows.len(), 1);
        let col = board.rows[0].column(ColumnSlot::First).unwrap();
        assert_eq!(col.detail_id, Some(DetailId(12)));
        assert_eq!(col.quantity, 7);
    }

    #[test]
    fn override_changes_display_but_not_derived_inventory() {
        let purchases = vec![purchase(1, "2024-03-05", vec![detail(11, 1, 30, 55)])];
        let mut board = build_inventory_board(&purchases);

        let col = board
            .row_mut(ProductId(1))
            .and_then(|r| r.column_mut(ColumnSlot::First))
            .unwrap();
        col.inventory_override = Some(80);

        assert_eq!(col.new_inventory(), 85);
        assert_eq!(col.displayed_inventory(), 80);
        assert_eq!(col.purchased_delta(), -25);
    }

    #[test]
    fn totals_ignore_absent_columns() {
        let purchases = vec![
            purchase(1, "2024-03-05", vec![detail(11, 1, 30, 55), detail(12, 2, 5, 0)]),
            purchase(2, "2024-01-15", vec![detail(21, 1, 20, 65)]),
        ];
        assert_eq!(build_inventory_board(&purchases).total_purchased(), 55);
    }

    #[test]
    fn empty_list_gives_empty_board() {
        let board = build_inventory_board(&[]);
        assert!(board.rows.is_empty());
        assert_eq!(board.dates, [None, None, None]);
        assert_eq!(board.total_purchased(), 0);
    }

    #[test]
    fn oversized_quantities_saturate() {
        let mut board = build_inventory_board(&[purchase(
            1,
            "2024-03-05",
            vec![detail(1, 1, i64::MAX, 65), detail(2, 2, i64::MAX, 0)],
        )]);
        let row = board.row(ProductId(1)).unwrap();
        assert_eq!(row.inventory_value(ColumnSlot::First), i64::MAX);
        assert_eq!(row.purchased_delta(ColumnSlot::First), Some(65 - i64::MAX));
        assert_eq!(board.total_purchased(), i64::MAX);

        board.rows[0].columns[0].as_mut().unwrap().inventory_override = Some(-5);
        assert_eq!(board.rows[0].purchased_delta(ColumnSlot::First), Some(70));
    }
}
