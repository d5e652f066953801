//! # Order View
//!
//! [`OrderView`] is the headless state behind the order table page: the rows on screen,
//! the sort column, the active filter, the create/edit dialog, the page error banner and
//! the queue of notifications. Every operation that talks to the store awaits it directly;
//! the view is driven by one user through `&mut self`.
//!
//! ```rust
//! use order_tracker::config::TrackerConfig;
//! use order_tracker::lifecycle::OrderSystem;
//! use order_tracker::model::OrderFilter;
//! use order_tracker::view::{OrderView, SortField};
//!
//! #[tokio::main]
//! async fn main() {
//!     let system = OrderSystem::new(&TrackerConfig::default().without_latency());
//!     let mut view = OrderView::new(system.store());
//!     view.load().await;
//!
//!     view.apply_filter(OrderFilter::company("tech")).await;
//!     view.sort_by(SortField::CompanyName);
//!     println!("{}", view.render_table());
//!
//!     drop(view);
//!     system.shutdown().await.unwrap();
//! }
//! ```

pub mod confirm;
pub mod filter;
pub mod form;
pub mod notification;
pub mod sort;
pub mod table;

pub use confirm::*;
pub use filter::*;
pub use form::*;
pub use notification::*;
pub use sort::*;
pub use table::render_table;

use crate::model::{Order, OrderFilter, OrderId, OrderUpdate};
use crate::order_actor::OrderError;
use crate::store::OrderStore;
use chrono::{Local, NaiveDate};
use thiserror::Error;
use tracing::{debug, info, warn};

const LOAD_FAILED: &str = "An error occurred while loading orders";

/// State of the create/edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Closed,
    /// New order; `form` holds the default inputs.
    Creating { form: OrderForm },
    /// Editing `order`; `form` is prefilled from it.
    Editing { order: Order, form: OrderForm },
}

impl Dialog {
    pub fn is_open(&self) -> bool {
        !matches!(self, Dialog::Closed)
    }

    /// Inputs the dialog was opened with.
    pub fn form(&self) -> Option<&OrderForm> {
        match self {
            Dialog::Closed => None,
            Dialog::Creating { form } | Dialog::Editing { form, .. } => Some(form),
        }
    }
}

/// Why a submitted form did not produce a stored order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmitError {
    #[error("no order form is open")]
    NoDialog,
    #[error(transparent)]
    Invalid(#[from] FormErrors),
    #[error(transparent)]
    Store(#[from] OrderError),
}

/// View model of the order page over any [`OrderStore`].
pub struct OrderView<S: OrderStore> {
    store: S,
    rows: Vec<Order>,
    sort: SortState,
    filter: OrderFilter,
    dialog: Dialog,
    form_errors: FormErrors,
    loading: bool,
    error: Option<String>,
    notifications: Vec<Notification>,
}

impl<S: OrderStore> OrderView<S> {
    /// An empty view; call [`load`](Self::load) to fetch the first rows.
    pub fn new(store: S) -> Self {
        Self {
            store,
            rows: Vec::new(),
            sort: SortState::default(),
            filter: OrderFilter::default(),
            dialog: Dialog::Closed,
            form_errors: FormErrors::default(),
            loading: false,
            error: None,
            notifications: Vec::new(),
        }
    }

    pub fn rows(&self) -> &[Order] {
        &self.rows
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn filter(&self) -> &OrderFilter {
        &self.filter
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    /// Rule violations of the last rejected submission.
    pub fn form_errors(&self) -> &FormErrors {
        &self.form_errors
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Page-level banner set when loading fails.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Hands pending notifications to the caller and clears the queue.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    pub fn render_table(&self) -> comfy_table::Table {
        render_table(&self.rows, &self.sort)
    }

    /// Re-queries the store with the active filter and re-sorts. On failure the rows are
    /// kept and the error banner is set.
    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;

        let result = if self.filter.is_empty() {
            self.store.list().await
        } else {
            self.store.list_filtered(self.filter.clone()).await
        };

        match result {
            Ok(mut rows) => {
                self.sort.apply(&mut rows);
                debug!(count = rows.len(), "Orders loaded");
                self.rows = rows;
            }
            Err(e) => {
                warn!(error = %e, "Loading orders failed");
                self.error = Some(LOAD_FAILED.to_string());
            }
        }
        self.loading = false;
    }

    /// Sorts the current rows in place; no store round trip.
    pub fn sort_by(&mut self, field: SortField) {
        self.sort.select(field);
        self.sort.apply(&mut self.rows);
    }

    pub async fn apply_filter(&mut self, filter: OrderFilter) {
        self.filter = filter;
        self.load().await;
    }

    /// Parses the filter panel and applies it. Malformed input leaves the view unchanged.
    pub async fn apply_filter_form(&mut self, form: &FilterForm) -> Result<(), FilterFormError> {
        let filter = form.parse()?;
        self.apply_filter(filter).await;
        Ok(())
    }

    pub async fn reset_filter(&mut self) {
        self.apply_filter(OrderFilter::default()).await;
    }

    /// Opens the dialog for a new order with today's defaults.
    pub fn open_create(&mut self) {
        self.open_create_on(Local::now().date_naive());
    }

    pub fn open_create_on(&mut self, today: NaiveDate) {
        self.form_errors = FormErrors::default();
        self.dialog = Dialog::Creating {
            form: OrderForm::new_order(today),
        };
    }

    /// Opens the dialog for a row currently on screen.
    pub fn open_edit(&mut self, id: OrderId) -> Result<(), OrderError> {
        let order = self
            .rows
            .iter()
            .find(|order| order.id == id)
            .cloned()
            .ok_or_else(|| OrderError::not_found(id))?;
        self.form_errors = FormErrors::default();
        self.dialog = Dialog::Editing {
            form: OrderForm::from_order(&order),
            order,
        };
        Ok(())
    }

    pub fn close_form(&mut self) {
        self.form_errors = FormErrors::default();
        self.dialog = Dialog::Closed;
    }

    /// Validates `form` and creates or updates depending on the open dialog.
    ///
    /// Invalid input is recorded in [`form_errors`](Self::form_errors) and never reaches
    /// the store. A store failure pushes an error notification and keeps the dialog open.
    pub async fn submit_form(&mut self, form: OrderForm) -> Result<Order, SubmitError> {
        let editing = match &self.dialog {
            Dialog::Closed => return Err(SubmitError::NoDialog),
            Dialog::Creating { .. } => None,
            Dialog::Editing { order, .. } => Some(order.id),
        };

        let params = match form.validate() {
            Ok(params) => params,
            Err(errors) => {
                debug!(invalid = errors.0.len(), "Form rejected");
                self.form_errors = errors.clone();
                return Err(errors.into());
            }
        };
        self.form_errors = FormErrors::default();

        let (result, action) = match editing {
            Some(id) => (
                self.store.update(id, OrderUpdate::from(params)).await,
                "updating",
            ),
            None => (self.store.create(params).await, "creating"),
        };

        match result {
            Ok(order) => {
                info!(id = %order.id, action, "Order saved");
                let notification = match editing {
                    Some(_) => Notification::success(
                        "Order updated",
                        "The order was updated successfully.",
                    ),
                    None => Notification::success(
                        "Order created",
                        "The order was created successfully.",
                    ),
                };
                self.notifications.push(notification);
                self.dialog = Dialog::Closed;
                self.load().await;
                Ok(order)
            }
            Err(e) => {
                warn!(error = %e, action, "Saving order failed");
                self.notifications.push(Notification::error(format!(
                    "An error occurred while {action} the order: {e}"
                )));
                Err(e.into())
            }
        }
    }

    /// Deletes `id` once `confirm` approves. Returns whether the order was deleted.
    pub async fn delete(
        &mut self,
        id: OrderId,
        confirm: &impl Confirm,
    ) -> Result<bool, OrderError> {
        if !confirm.confirm(&format!("Are you sure you want to delete order {id}?")) {
            debug!(%id, "Delete declined");
            return Ok(false);
        }

        match self.store.delete(id).await {
            Ok(()) => {
                info!(%id, "Order deleted");
                self.notifications.push(Notification::success(
                    "Order deleted",
                    "The order was deleted successfully.",
                ));
                self.load().await;
                Ok(true)
            }
            Err(e) => {
                warn!(%id, error = %e, "Deleting order failed");
                self.notifications.push(Notification::error(format!(
                    "An error occurred while deleting the order: {e}"
                )));
                Err(e)
            }
        }
    }
}
