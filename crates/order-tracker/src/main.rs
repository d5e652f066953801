//! # Order Tracker Demo
//!
//! Runs a scripted session against the seeded in-memory store:
//! 1.  Starts the [`OrderSystem`] and loads the table.
//! 2.  Filters, sorts, creates, edits and deletes orders through the [`OrderView`].
//! 3.  Prints the table and notifications after each step, then shuts down.
//!
//! `RUST_LOG=debug` shows every request the actor receives.

use order_tracker::config::TrackerConfig;
use order_tracker::lifecycle::{setup_tracing, OrderSystem};
use order_tracker::model::{OrderId, OrderStatus};
use order_tracker::store::OrderStore;
use order_tracker::view::{AutoConfirm, FilterForm, OrderView, SortField};
use tracing::{info, Instrument};

fn show<S: OrderStore>(step: &str, view: &mut OrderView<S>) {
    println!("\n== {step} ==");
    if let Some(banner) = view.error() {
        println!("! {banner}");
    }
    println!("{}", view.render_table());
    for notification in view.take_notifications() {
        println!("{notification}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = TrackerConfig::default();
    let system = OrderSystem::new(&config);
    let mut view = OrderView::new(system.store());

    view.load().instrument(tracing::info_span!("initial_load")).await;
    show("All orders, newest first", &mut view);

    let filter = FilterForm {
        company_name: "tech".to_string(),
        ..FilterForm::default()
    };
    view.apply_filter_form(&filter).await?;
    view.sort_by(SortField::CompanyName);
    show("Company contains \"tech\", by company", &mut view);
    view.reset_filter().await;

    let span = tracing::info_span!("create_order");
    async {
        view.open_create();
        let Some(mut form) = view.dialog().form().cloned() else {
            return;
        };
        form.company_name = "Nordic Data".to_string();
        form.product_name = "Switch Cisco Catalyst".to_string();
        form.total_products = "4".to_string();
        match view.submit_form(form).await {
            Ok(order) => info!(id = %order.id, "Order created"),
            Err(e) => info!(error = %e, "Order not created"),
        }
    }
    .instrument(span)
    .await;
    show("After creating an order", &mut view);

    view.open_edit(OrderId(3))?;
    if let Some(mut form) = view.dialog().form().cloned() {
        form.shipped_products = "8".to_string();
        form.status = OrderStatus::Completed.to_string();
        view.submit_form(form).await?;
    }
    show("After completing CMD-003", &mut view);

    view.delete(OrderId(4), &AutoConfirm(false)).await?;
    view.delete(OrderId(4), &AutoConfirm(true)).await?;
    show("After deleting CMD-004", &mut view);

    drop(view);
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
