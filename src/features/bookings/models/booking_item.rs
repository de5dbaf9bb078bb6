use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// Line item joined with the menu item's name for detail views.
///
/// `unit_price` is copied from the menu item when the line is created;
/// later price edits do not touch existing lines.
#[derive(Debug, Clone, FromRow)]
pub struct BookingItemWithName {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub menu_item_id: Uuid,
    pub menu_item_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
}

/// Line subtotal from the snapshotted unit price
pub fn line_subtotal(unit_price: Decimal, quantity: i32) -> Decimal {
    unit_price * Decimal::from(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_subtotal() {
        // 12.50 * 4 = 50.00
        assert_eq!(
            line_subtotal(Decimal::new(1250, 2), 4),
            Decimal::new(5000, 2)
        );
    }

    #[test]
    fn test_line_subtotal_quantity_one() {
        let price = Decimal::new(799, 2);
        assert_eq!(line_subtotal(price, 1), price);
    }
}
