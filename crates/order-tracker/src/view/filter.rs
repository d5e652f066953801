use crate::model::{OrderFilter, OrderStatus, UnknownStatus};
use chrono::NaiveDate;
use thiserror::Error;

/// Raw text of the filter panel. Blank inputs mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterForm {
    pub company_name: String,
    pub status: String,
    pub date_from: String,
    pub date_to: String,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FilterFormError {
    #[error(transparent)]
    Status(#[from] UnknownStatus),
    #[error("{field} is not a YYYY-MM-DD date: {value:?}")]
    Date { field: &'static str, value: String },
}

impl FilterForm {
    pub fn parse(&self) -> Result<OrderFilter, FilterFormError> {
        Ok(OrderFilter {
            // The needle is the text as typed; trimming only decides blankness.
            company_name: non_blank(&self.company_name).map(|_| self.company_name.clone()),
            status: non_blank(&self.status)
                .map(str::parse::<OrderStatus>)
                .transpose()?,
            date_from: parse_date("dateFrom", &self.date_from)?,
            date_to: parse_date("dateTo", &self.date_to)?,
        })
    }
}

fn non_blank(input: &str) -> Option<&str> {
    Some(input.trim()).filter(|s| !s.is_empty())
}

fn parse_date(field: &'static str, input: &str) -> Result<Option<NaiveDate>, FilterFormError> {
    non_blank(input)
        .map(|s| {
            s.parse::<NaiveDate>().map_err(|_| FilterFormError::Date {
                field,
                value: s.to_string(),
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed_orders;

    #[test]
    fn test_blank_form_is_empty_filter() {
        let form = FilterForm {
            company_name: "   ".to_string(),
            ..FilterForm::default()
        };
        assert!(form.parse().unwrap().is_empty());
    }

    #[test]
    fn test_parses_every_field() {
        let form = FilterForm {
            company_name: " Tech ".to_string(),
            status: "partial".to_string(),
            date_from: "2025-04-01".to_string(),
            date_to: "2025-04-30".to_string(),
        };
        assert_eq!(
            form.parse().unwrap(),
            OrderFilter {
                company_name: Some(" Tech ".to_string()),
                status: Some(OrderStatus::Partial),
                date_from: NaiveDate::from_ymd_opt(2025, 4, 1),
                date_to: NaiveDate::from_ymd_opt(2025, 4, 30),
            }
        );
    }

    #[test]
    fn test_company_text_is_matched_as_typed() {
        let form = FilterForm {
            company_name: "Tech ".to_string(),
            ..FilterForm::default()
        };
        let filter = form.parse().unwrap();
        let ids: Vec<String> = seed_orders()
            .iter()
            .filter(|order| filter.matches(order))
            .map(|order| order.id.to_string())
            .collect();
        assert_eq!(ids, ["CMD-001", "CMD-004"]);
    }

    #[test]
    fn test_rejects_malformed_input() {
        let form = FilterForm {
            status: "shipped".to_string(),
            ..FilterForm::default()
        };
        assert_eq!(
            form.parse(),
            Err(FilterFormError::Status(UnknownStatus("shipped".to_string())))
        );

        let form = FilterForm {
            date_to: "30/04/2025".to_string(),
            ..FilterForm::default()
        };
        assert_eq!(
            form.parse().unwrap_err().to_string(),
            "dateTo is not a YYYY-MM-DD date: \"30/04/2025\""
        );
    }
}
