use crate::model::{Order, OrderId, OrderStatus};
use chrono::NaiveDate;

struct SeedRow {
    id: u32,
    company: &'static str,
    product: &'static str,
    total: u32,
    shipped: u32,
    created: NaiveDate,
    delivery: NaiveDate,
    status: OrderStatus,
}

/// Evaluated in const context: an impossible date fails the build.
const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid seed date"),
    }
}

const SEED: [SeedRow; 5] = [
    SeedRow {
        id: 1,
        company: "Tech Solutions",
        product: "PC Portable Dell XPS",
        total: 10,
        shipped: 5,
        created: ymd(2025, 4, 15),
        delivery: ymd(2025, 5, 15),
        status: OrderStatus::Partial,
    },
    SeedRow {
        id: 2,
        company: "InnovateTech",
        product: "PC Bureau HP Elite",
        total: 5,
        shipped: 5,
        created: ymd(2025, 4, 10),
        delivery: ymd(2025, 5, 1),
        status: OrderStatus::Completed,
    },
    SeedRow {
        id: 3,
        company: "Digital Systems",
        product: "MacBook Pro M2",
        total: 8,
        shipped: 0,
        created: ymd(2025, 4, 20),
        delivery: ymd(2025, 6, 1),
        status: OrderStatus::Pending,
    },
    SeedRow {
        id: 4,
        company: "Tech Solutions",
        product: "Serveur Dell PowerEdge",
        total: 2,
        shipped: 0,
        created: ymd(2025, 4, 18),
        delivery: ymd(2025, 6, 10),
        status: OrderStatus::Cancelled,
    },
    SeedRow {
        id: 5,
        company: "Cyber Innovations",
        product: "PC Portable Lenovo ThinkPad",
        total: 15,
        shipped: 10,
        created: ymd(2025, 4, 5),
        delivery: ymd(2025, 5, 20),
        status: OrderStatus::Partial,
    },
];

/// The five demo orders the tracker starts with, `CMD-001` through `CMD-005`.
pub fn seed_orders() -> Vec<Order> {
    SEED.iter()
        .map(|row| Order {
            id: OrderId(row.id),
            company_name: row.company.to_string(),
            product_name: row.product.to_string(),
            total_products: row.total,
            shipped_products: row.shipped,
            created_at: row.created,
            estimated_delivery_date: row.delivery,
            status: row.status,
        })
        .collect()
}
