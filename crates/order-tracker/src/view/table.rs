use crate::model::Order;
use crate::view::sort::{SortField, SortState};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Table};

const COLUMNS: [(SortField, &str); 7] = [
    (SortField::Id, "ID"),
    (SortField::CompanyName, "Company"),
    (SortField::ProductName, "Product"),
    (SortField::ShippedProducts, "Shipped"),
    (SortField::CreatedAt, "Created"),
    (SortField::EstimatedDeliveryDate, "Delivery"),
    (SortField::Status, "Status"),
];

/// Renders `orders` as a text table, marking the active sort column with an arrow.
pub fn render_table(orders: &[Order], sort: &SortState) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS);

    table.set_header(COLUMNS.iter().map(|(field, label)| {
        // Shipment progress doubles as the total column.
        let active = *field == sort.field
            || (*field == SortField::ShippedProducts && sort.field == SortField::TotalProducts);
        let text = if active {
            format!("{label} {}", sort.direction.arrow())
        } else {
            label.to_string()
        };
        Cell::new(text).add_attribute(Attribute::Bold)
    }));

    if orders.is_empty() {
        table.add_row(vec![Cell::new("No orders found")]);
        return table;
    }

    for order in orders {
        table.add_row(vec![
            Cell::new(order.id),
            Cell::new(&order.company_name),
            Cell::new(&order.product_name),
            Cell::new(format!("{}/{}", order.shipped_products, order.total_products))
                .set_alignment(CellAlignment::Right),
            Cell::new(order.created_at),
            Cell::new(order.estimated_delivery_date),
            Cell::new(order.status),
        ]);
    }
    table
}
