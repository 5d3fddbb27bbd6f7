//! Contact form state machine
//!
//! Four required fields, focus cycling, and the submitting/submitted flags.
//! Validation is deliberately shallow (non-empty fields, an email that looks
//! like `local@domain`); the delivery service does the real work.

use folio_core::ContactMessage;

/// The four form fields, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Full Name",
            ContactField::Email => "Email Address",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    pub fn next(&self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Subject,
            ContactField::Subject => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    pub fn prev(&self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Subject => ContactField::Email,
            ContactField::Message => ContactField::Subject,
        }
    }
}

/// Contact form view state.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub focus: ContactField,
    /// True while keystrokes are routed into the form.
    pub editing: bool,
    /// True between submit and the delivery result.
    pub submitting: bool,
    /// True for the 5-second success window after a delivery.
    pub submitted: bool,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn insert(&mut self, c: char) {
        let field = self.focus;
        self.value_mut(field).push(c);
    }

    pub fn backspace(&mut self) {
        let field = self.focus;
        self.value_mut(field).pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Clear field values after a successful delivery. Focus returns to the
    /// first field; the editing flag is untouched.
    pub fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
        self.focus = ContactField::Name;
    }

    /// Validate and assemble the outgoing message.
    pub fn validate(&self) -> Result<ContactMessage, String> {
        for field in ContactField::ALL {
            if self.value(field).trim().is_empty() {
                return Err(format!("{} is required", field.label()));
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err("Email Address does not look valid".to_string());
        }
        Ok(ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

/// The same shallow shape check a browser applies to `<input type="email">`:
/// one `@`, a non-empty local part, a domain with a dot, no whitespace.
fn looks_like_email(value: &str) -> bool {
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.chars().any(char::is_whitespace)
        && !domain.contains('@')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            subject: "Analytical engines".into(),
            message: "Let's collaborate.".into(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn test_focus_cycles_through_all_fields() {
        let mut form = ContactForm::default();
        let mut seen = vec![form.focus];
        for _ in 0..3 {
            form.focus_next();
            seen.push(form.focus);
        }
        assert_eq!(seen, ContactField::ALL.to_vec());
        form.focus_next();
        assert_eq!(form.focus, ContactField::Name); // wraps
        form.focus_prev();
        assert_eq!(form.focus, ContactField::Message);
    }

    #[test]
    fn test_insert_and_backspace_edit_the_focused_field() {
        let mut form = ContactForm::default();
        form.insert('h');
        form.insert('i');
        assert_eq!(form.name, "hi");
        form.focus_next();
        form.insert('x');
        assert_eq!(form.email, "x");
        form.backspace();
        assert_eq!(form.email, "");
        form.backspace(); // empty field: no-op
        assert_eq!(form.email, "");
        assert_eq!(form.name, "hi");
    }

    #[test]
    fn test_validate_requires_every_field() {
        let mut form = filled_form();
        form.subject.clear();
        let err = form.validate().unwrap_err();
        assert!(err.contains("Subject"));
    }

    #[test]
    fn test_validate_rejects_malformed_email() {
        let mut form = filled_form();
        for bad in ["ada", "ada@", "@example.com", "ada@nodot", "a da@example.com"] {
            form.email = bad.to_string();
            assert!(form.validate().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_validate_builds_trimmed_message() {
        let mut form = filled_form();
        form.name = "  Ada Lovelace  ".into();
        let msg = form.validate().unwrap();
        assert_eq!(msg.name, "Ada Lovelace");
        assert_eq!(msg.email, "ada@example.com");
    }

    #[test]
    fn test_clear_fields_resets_values_and_focus() {
        let mut form = filled_form();
        form.focus = ContactField::Message;
        form.clear_fields();
        assert_eq!(form.name, "");
        assert_eq!(form.message, "");
        assert_eq!(form.focus, ContactField::Name);
    }
}
