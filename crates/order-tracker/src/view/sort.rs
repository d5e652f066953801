use crate::model::Order;
use std::cmp::Ordering;

/// A sortable column of the order table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Id,
    CompanyName,
    ProductName,
    TotalProducts,
    ShippedProducts,
    CreatedAt,
    EstimatedDeliveryDate,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Active sort column and direction. Starts on `CreatedAt`, newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: SortField::CreatedAt,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    /// Header click: the active ascending column flips to descending, anything else
    /// sorts ascending.
    pub fn select(&mut self, field: SortField) {
        self.direction = if field == self.field && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        self.field = field;
    }

    /// Stable in-place sort; ties keep their current relative order.
    pub fn apply(&self, orders: &mut [Order]) {
        orders.sort_by(|a, b| {
            let ordering = compare(self.field, a, b);
            match self.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
}

fn compare(field: SortField, a: &Order, b: &Order) -> Ordering {
    match field {
        SortField::TotalProducts => a.total_products.cmp(&b.total_products),
        SortField::ShippedProducts => a.shipped_products.cmp(&b.shipped_products),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::EstimatedDeliveryDate => {
            a.estimated_delivery_date.cmp(&b.estimated_delivery_date)
        }
        SortField::Id => compare_text(&a.id.to_string(), &b.id.to_string()),
        SortField::CompanyName => compare_text(&a.company_name, &b.company_name),
        SortField::ProductName => compare_text(&a.product_name, &b.product_name),
        SortField::Status => compare_text(a.status.as_str(), b.status.as_str()),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
