//! Form validation.
//!
//! Validators are pure: they inspect raw field strings and return a
//! field-keyed error list, never touching display state. Both forms report
//! every failing field in one pass so the UI layer can mark them all at
//! once. Field keys match the form control names in the page markup.

/// Minimum digits-plus-punctuation length for a phone number.
const MIN_PHONE_LENGTH: usize = 10;

/// Minimum length of a contact name.
const MIN_NAME_LENGTH: usize = 2;

/// Minimum length of a contact message.
const MIN_MESSAGE_LENGTH: usize = 10;

/// A single failed field with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Validation outcome: failing fields in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// Whether no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The message for a field, if it failed.
    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }

    /// Iterate the failing fields in form order.
    pub fn iter(&self) -> core::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    fn push(&mut self, field: &'static str, message: &'static str) {
        self.0.push(FieldError { field, message });
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = core::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Checkout Form
// =============================================================================

/// Raw checkout form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    pub customer_name: String,
    pub customer_phone: String,
    pub delivery_address: String,
}

/// Validate the checkout form, reporting all failing fields.
///
/// # Errors
///
/// Returns the failing fields, keyed `customerName`, `customerPhone`, and
/// `deliveryAddress`, when any rule is violated.
pub fn validate_checkout_form(form: &CheckoutForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if form.customer_name.trim().is_empty() {
        errors.push("customerName", "Please enter your full name");
    }
    if form.customer_phone.trim().chars().count() < MIN_PHONE_LENGTH {
        errors.push("customerPhone", "Please enter a valid phone number");
    }
    if form.delivery_address.trim().is_empty() {
        errors.push("deliveryAddress", "Please enter your delivery address");
    }

    errors.into_result()
}

// =============================================================================
// Contact Form
// =============================================================================

/// Raw contact form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// Validate the contact form, reporting all failing fields.
///
/// Phone is optional here: it only fails when present and too short.
///
/// # Errors
///
/// Returns the failing fields, keyed by control name, when any rule is
/// violated.
pub fn validate_contact_form(form: &ContactForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if form.name.trim().chars().count() < MIN_NAME_LENGTH {
        errors.push("name", "Name must be at least 2 characters long");
    }
    if !is_valid_email(form.email.trim()) {
        errors.push("email", "Please enter a valid email address");
    }
    let phone = form.phone.trim();
    if !phone.is_empty() && phone.chars().count() < MIN_PHONE_LENGTH {
        errors.push("phone", "Please enter a valid phone number");
    }
    if form.subject.trim().is_empty() {
        errors.push("subject", "Please select a subject");
    }
    if form.message.trim().chars().count() < MIN_MESSAGE_LENGTH {
        errors.push("message", "Message must be at least 10 characters long");
    }

    errors.into_result()
}

/// Basic email validation.
fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let Some(local) = parts.next() else {
        return false;
    };
    let Some(domain) = parts.next() else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && domain.contains('.')
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_checkout() -> CheckoutForm {
        CheckoutForm {
            customer_name: "Rahim Uddin".to_owned(),
            customer_phone: "01712345678".to_owned(),
            delivery_address: "12 Green Road, Dhaka".to_owned(),
        }
    }

    fn valid_contact() -> ContactForm {
        ContactForm {
            name: "Rahim".to_owned(),
            email: "rahim@example.com".to_owned(),
            phone: String::new(),
            subject: "delivery".to_owned(),
            message: "Do you deliver outside Dhaka on weekends?".to_owned(),
        }
    }

    #[test]
    fn test_valid_checkout_form_passes() {
        assert!(validate_checkout_form(&valid_checkout()).is_ok());
    }

    #[test]
    fn test_checkout_blank_name_fails() {
        let form = CheckoutForm {
            customer_name: "   ".to_owned(),
            ..valid_checkout()
        };
        let errors = validate_checkout_form(&form).unwrap_err();
        assert_eq!(
            errors.message_for("customerName"),
            Some("Please enter your full name")
        );
    }

    #[test]
    fn test_checkout_short_phone_fails() {
        let form = CheckoutForm {
            customer_phone: "12345".to_owned(),
            ..valid_checkout()
        };
        let errors = validate_checkout_form(&form).unwrap_err();
        assert_eq!(
            errors.message_for("customerPhone"),
            Some("Please enter a valid phone number")
        );
    }

    #[test]
    fn test_checkout_blank_address_fails() {
        let form = CheckoutForm {
            delivery_address: String::new(),
            ..valid_checkout()
        };
        let errors = validate_checkout_form(&form).unwrap_err();
        assert!(errors.message_for("deliveryAddress").is_some());
    }

    #[test]
    fn test_checkout_reports_all_failing_fields() {
        let errors = validate_checkout_form(&CheckoutForm::default()).unwrap_err();
        assert_eq!(errors.len(), 3);

        let fields: Vec<&str> = errors.iter().map(|error| error.field).collect();
        assert_eq!(fields, ["customerName", "customerPhone", "deliveryAddress"]);
    }

    #[test]
    fn test_checkout_phone_is_trimmed_before_length_check() {
        let form = CheckoutForm {
            customer_phone: "  123456789  ".to_owned(),
            ..valid_checkout()
        };
        assert!(validate_checkout_form(&form).is_err());
    }

    #[test]
    fn test_valid_contact_form_passes() {
        assert!(validate_contact_form(&valid_contact()).is_ok());
    }

    #[test]
    fn test_contact_phone_is_optional() {
        let form = ContactForm {
            phone: String::new(),
            ..valid_contact()
        };
        assert!(validate_contact_form(&form).is_ok());
    }

    #[test]
    fn test_contact_short_phone_fails_when_present() {
        let form = ContactForm {
            phone: "12345".to_owned(),
            ..valid_contact()
        };
        let errors = validate_contact_form(&form).unwrap_err();
        assert!(errors.message_for("phone").is_some());
    }

    #[test]
    fn test_contact_reports_all_failing_fields() {
        let errors = validate_contact_form(&ContactForm::default()).unwrap_err();
        // Phone is optional, so an all-empty form fails the other four.
        assert_eq!(errors.len(), 4);
        assert!(errors.message_for("phone").is_none());
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user.name+tag@domain.co.uk"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-symbol"));
        assert!(!is_valid_email("@domain.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user name@example.com"));
    }

    #[test]
    fn test_contact_short_message_fails() {
        let form = ContactForm {
            message: "too short".to_owned(),
            ..valid_contact()
        };
        assert!(validate_contact_form(&form).is_err());
    }
}
