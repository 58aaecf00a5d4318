//! Demo-booking form.

use crate::checklist::{Checklist, ChecklistSummary};
use crate::page_object::{PageObject, Selector};
use crate::result::{CotejoError, CotejoResult};
use serde::{Deserialize, Serialize};

/// Path segment the booking page URL must contain
pub const BOOK_A_DEMO_PATH: &str = "book-a-demo";

/// Fields of the booking form, in fill order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    /// First name input
    FirstName,
    /// Last name input
    LastName,
    /// Professional email input
    Email,
    /// Phone number input
    Phone,
    /// Job title input
    JobTitle,
    /// Country or region select
    Country,
    /// Free-text message
    Message,
}

impl FormField {
    /// Every field in fill order
    pub const ALL: [Self; 7] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::JobTitle,
        Self::Country,
        Self::Message,
    ];

    /// Value of the element's `name` attribute
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstname",
            Self::LastName => "lastname",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::JobTitle => "jobtitle",
            Self::Country => "country",
            Self::Message => "message",
        }
    }

    /// Element selector
    #[must_use]
    pub fn selector(self) -> Selector {
        let element = match self {
            Self::Country => "select",
            Self::Message => "textarea",
            _ => "input",
        };
        Selector::css(format!("{element}[name=\"{}\"]", self.name()))
    }
}

/// Values to enter into the booking form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDemoForm {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Professional email
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Job title
    pub job_title: String,
    /// Country option label
    pub country: String,
    /// Message
    pub message: String,
}

impl BookDemoForm {
    /// Value for `field`
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::JobTitle => &self.job_title,
            FormField::Country => &self.country,
            FormField::Message => &self.message,
        }
    }
}

/// A single driver action on the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FieldAction {
    /// Type `value` into the element
    Fill {
        /// Target element
        selector: String,
        /// Text to type
        value: String,
    },
    /// Choose the option whose label is `label`
    SelectOption {
        /// Target element
        selector: String,
        /// Option label
        label: String,
    },
}

/// Visibility and enabled state of a form control as read by the driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    /// The field, or `None` for the submit button
    pub field: Option<FormField>,
    /// Whether the control is visible
    pub visible: bool,
    /// Whether the control is enabled
    pub enabled: bool,
}

/// The booking page object
#[derive(Debug, Clone, Copy, Default)]
pub struct BookDemoPage;

impl PageObject for BookDemoPage {
    fn url_pattern(&self) -> &str {
        "/book-a-demo"
    }

    fn selectors(&self) -> Vec<(&'static str, Selector)> {
        let mut selectors: Vec<(&'static str, Selector)> = FormField::ALL
            .iter()
            .map(|field| (field.name(), field.selector()))
            .collect();
        selectors.push(("submit", Selector::css("input[type=\"submit\"]")));
        selectors
    }

    fn page_name(&self) -> &str {
        "book a demo"
    }
}

impl BookDemoPage {
    /// Ordered actions that enter `data` into the form
    #[must_use]
    pub fn fill_plan(&self, data: &BookDemoForm) -> Vec<FieldAction> {
        FormField::ALL
            .iter()
            .map(|&field| {
                let selector = field.selector().as_str().to_string();
                let value = data.value(field).to_string();
                match field {
                    FormField::Country => FieldAction::SelectOption {
                        selector,
                        label: value,
                    },
                    _ => FieldAction::Fill { selector, value },
                }
            })
            .collect()
    }

    /// Every field and the submit button are visible and enabled
    pub fn verify_form_fields_interactable(
        &self,
        states: &[FieldState],
    ) -> CotejoResult<ChecklistSummary> {
        let mut list = Checklist::new("book a demo form");
        let expected = FormField::ALL.iter().copied().map(Some).chain([None]);
        for field in expected {
            let name = field.map_or("submit", FormField::name);
            let Some(state) = states.iter().find(|s| s.field == field) else {
                list.fail(format!("{name} not found"));
                continue;
            };
            list.check(state.visible, || format!("{name} should be visible"));
            list.check(state.enabled, || format!("{name} should be enabled"));
        }
        list.finish()
    }

    /// The browser landed on the booking page
    pub fn verify_redirect(&self, url: &str) -> CotejoResult<()> {
        if url.contains(BOOK_A_DEMO_PATH) {
            Ok(())
        } else {
            Err(CotejoError::assertion(format!(
                "expected to be redirected to '{BOOK_A_DEMO_PATH}', got '{url}'"
            )))
        }
    }
}
