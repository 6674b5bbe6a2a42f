use crate::api::timestamp::FORM_FORMAT;
use crate::api::NewJobCard;
use crate::error::{Error, Result};
use chrono::NaiveDateTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Customer,
    Service,
    Delivery,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Customer, Field::Service, Field::Delivery];

    pub fn label(self) -> &'static str {
        match self {
            Field::Customer => "Customer Name",
            Field::Service => "Service Type",
            Field::Delivery => "Promised Delivery Time (YYYY-MM-DDTHH:MM)",
        }
    }

    fn next(self) -> Self {
        match self {
            Field::Customer => Field::Service,
            Field::Service => Field::Delivery,
            Field::Delivery => Field::Customer,
        }
    }

    fn prev(self) -> Self {
        match self {
            Field::Customer => Field::Delivery,
            Field::Service => Field::Customer,
            Field::Delivery => Field::Service,
        }
    }
}

/// The "new job card" dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobCardForm {
    pub customer_name: String,
    pub service_type: String,
    pub promised_delivery_time: String,
    pub focus: Field,
    pub submitting: bool,
}

impl Default for JobCardForm {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            service_type: String::new(),
            promised_delivery_time: String::new(),
            focus: Field::Customer,
            submitting: false,
        }
    }
}

impl JobCardForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Customer => &self.customer_name,
            Field::Service => &self.service_type,
            Field::Delivery => &self.promised_delivery_time,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Customer => &mut self.customer_name,
            Field::Service => &mut self.service_type,
            Field::Delivery => &mut self.promised_delivery_time,
        }
    }

    pub fn insert(&mut self, ch: char) {
        self.focused_mut().push(ch);
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Validate locally and build the request body.
    pub fn to_request(&self) -> Result<NewJobCard> {
        let customer_name = self.customer_name.trim();
        let service_type = self.service_type.trim();
        let delivery = self.promised_delivery_time.trim();

        if customer_name.is_empty() {
            return Err(Error::Invalid("Customer name is required".to_string()));
        }
        if service_type.is_empty() {
            return Err(Error::Invalid("Service type is required".to_string()));
        }
        if delivery.is_empty() {
            return Err(Error::Invalid("Promised delivery time is required".to_string()));
        }
        let parsed = NaiveDateTime::parse_from_str(delivery, FORM_FORMAT).map_err(|_| {
            Error::Invalid(format!(
                "Promised delivery time '{}' must look like 2024-05-02T17:00",
                delivery
            ))
        })?;

        Ok(NewJobCard {
            customer_name: customer_name.to_string(),
            service_type: service_type.to_string(),
            promised_delivery_time: parsed.format(FORM_FORMAT).to_string(),
        })
    }
}
