//! The create/edit dialog: raw text inputs and their validation.
use crate::model::{Order, OrderCreate, OrderStatus};
use chrono::{Days, NaiveDate};
use std::fmt::Display;
use thiserror::Error;

const DEFAULT_DELIVERY_DAYS: u64 = 30;

/// An input of the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    CompanyName,
    ProductName,
    TotalProducts,
    ShippedProducts,
    CreatedAt,
    EstimatedDeliveryDate,
    Status,
}

impl FormField {
    pub fn name(&self) -> &'static str {
        match self {
            FormField::CompanyName => "companyName",
            FormField::ProductName => "productName",
            FormField::TotalProducts => "totalProducts",
            FormField::ShippedProducts => "shippedProducts",
            FormField::CreatedAt => "createdAt",
            FormField::EstimatedDeliveryDate => "estimatedDeliveryDate",
            FormField::Status => "status",
        }
    }
}

impl Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

/// Every rule the submitted form broke, in field order.
#[derive(Debug, Clone, Default, Error, PartialEq, Eq)]
#[error("{} invalid field(s)", .0.len())]
pub struct FormErrors(pub Vec<FieldError>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: FormField) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    fn push(&mut self, field: FormField, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }
}

/// Text inputs of the order dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderForm {
    pub company_name: String,
    pub product_name: String,
    pub total_products: String,
    pub shipped_products: String,
    pub created_at: String,
    pub estimated_delivery_date: String,
    pub status: String,
}

impl OrderForm {
    /// Blank form for a new order created on `today`.
    pub fn new_order(today: NaiveDate) -> Self {
        let delivery = today
            .checked_add_days(Days::new(DEFAULT_DELIVERY_DAYS))
            .unwrap_or(today);
        Self {
            company_name: String::new(),
            product_name: String::new(),
            total_products: "1".to_string(),
            shipped_products: "0".to_string(),
            created_at: today.to_string(),
            estimated_delivery_date: delivery.to_string(),
            status: OrderStatus::Pending.to_string(),
        }
    }

    /// Form prefilled from a stored order.
    pub fn from_order(order: &Order) -> Self {
        Self {
            company_name: order.company_name.clone(),
            product_name: order.product_name.clone(),
            total_products: order.total_products.to_string(),
            shipped_products: order.shipped_products.to_string(),
            created_at: order.created_at.to_string(),
            estimated_delivery_date: order.estimated_delivery_date.to_string(),
            status: order.status.to_string(),
        }
    }

    /// Checks every input and builds the payload, or reports all broken rules at once.
    pub fn validate(&self) -> Result<OrderCreate, FormErrors> {
        let mut errors = FormErrors::default();

        let company_name = self.company_name.trim();
        if company_name.is_empty() {
            errors.push(FormField::CompanyName, "company name is required");
        }
        let product_name = self.product_name.trim();
        if product_name.is_empty() {
            errors.push(FormField::ProductName, "product name is required");
        }

        let total_products = count(
            &mut errors,
            FormField::TotalProducts,
            &self.total_products,
            1,
            "total must be at least 1",
        );
        let shipped_products = count(
            &mut errors,
            FormField::ShippedProducts,
            &self.shipped_products,
            0,
            "shipped count cannot be negative",
        );

        let created_at = date(&mut errors, FormField::CreatedAt, &self.created_at);
        let estimated_delivery_date = date(
            &mut errors,
            FormField::EstimatedDeliveryDate,
            &self.estimated_delivery_date,
        );

        let status = match self.status.trim().parse::<OrderStatus>() {
            Ok(status) => Some(status),
            Err(e) => {
                errors.push(FormField::Status, e.to_string());
                None
            }
        };

        match (
            total_products,
            shipped_products,
            created_at,
            estimated_delivery_date,
            status,
        ) {
            (Some(total), Some(shipped), Some(created), Some(delivery), Some(status))
                if errors.is_empty() =>
            {
                Ok(OrderCreate {
                    company_name: company_name.to_string(),
                    product_name: product_name.to_string(),
                    total_products: total,
                    shipped_products: shipped,
                    created_at: created,
                    estimated_delivery_date: delivery,
                    status,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Numeric input holding a whole count. `"2.0"` is accepted as 2.
fn count(
    errors: &mut FormErrors,
    field: FormField,
    input: &str,
    min: u32,
    below_min: &str,
) -> Option<u32> {
    let value = match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            errors.push(field, "must be a number");
            return None;
        }
    };
    if value.fract() != 0.0 {
        errors.push(field, "must be a whole number");
        None
    } else if value < f64::from(min) {
        errors.push(field, below_min);
        None
    } else if value > f64::from(u32::MAX) {
        errors.push(field, format!("must be at most {}", u32::MAX));
        None
    } else {
        // Whole and within u32 range, so the cast is exact.
        Some(value as u32)
    }
}

fn date(errors: &mut FormErrors, field: FormField, input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        errors.push(field, "date is required");
        return None;
    }
    match input.parse::<NaiveDate>() {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(field, format!("{input:?} is not a YYYY-MM-DD date"));
            None
        }
    }
}
