//! Pure contact-form validation. No DOM dependency, so the rules are unit
//! tested directly.

/// Values of the contact form as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Per-field error messages; `None` means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FormErrors {
    pub fn is_valid(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.message.is_none()
    }
}

pub const REQUIRED: &str = "This field is required";
pub const BAD_EMAIL: &str = "Please enter a valid email address";
pub const BAD_PHONE: &str = "Please enter a valid phone number";

/// Non-empty local part, exactly one `@`, a dot somewhere in the domain,
/// no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.split_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Separators (spaces, dashes, parentheses) are stripped first; what
/// remains must be an optional `+`, a leading digit 1-9, and at most 15
/// further digits.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    let digits = digits.strip_prefix('+').unwrap_or(&digits);
    if digits.is_empty() || digits.len() > 16 {
        return false;
    }
    let mut chars = digits.chars();
    matches!(chars.next(), Some('1'..='9')) && chars.all(|c| c.is_ascii_digit())
}

pub fn validate_name(name: &str) -> Option<&'static str> {
    name.trim().is_empty().then_some(REQUIRED)
}

pub fn validate_email(email: &str) -> Option<&'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Some(REQUIRED);
    }
    (!is_valid_email(email)).then_some(BAD_EMAIL)
}

/// Phone is optional; only a non-empty malformed value is an error.
pub fn validate_phone(phone: &str) -> Option<&'static str> {
    let phone = phone.trim();
    if phone.is_empty() {
        return None;
    }
    (!is_valid_phone(phone)).then_some(BAD_PHONE)
}

pub fn validate_message(message: &str) -> Option<&'static str> {
    message.trim().is_empty().then_some(REQUIRED)
}

pub fn validate(form: &ContactForm) -> FormErrors {
    FormErrors {
        name: validate_name(&form.name),
        email: validate_email(&form.email),
        phone: validate_phone(&form.phone),
        message: validate_message(&form.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("info@raseel.sa"));
        assert!(is_valid_email("first.last@sub.example.com"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
    }

    #[test]
    fn phone_shapes() {
        assert!(is_valid_phone("+966 50 123 4567"));
        assert!(is_valid_phone("(050) 123-4567"));
        assert!(is_valid_phone("501234567"));
        assert!(!is_valid_phone("0501234567")); // leading zero
        assert!(!is_valid_phone("phone"));
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("+12345678901234567")); // too long
    }

    #[test]
    fn required_fields() {
        let errors = validate(&ContactForm::default());
        assert_eq!(errors.name, Some(REQUIRED));
        assert_eq!(errors.email, Some(REQUIRED));
        assert_eq!(errors.phone, None); // optional
        assert_eq!(errors.message, Some(REQUIRED));
        assert!(!errors.is_valid());
    }

    #[test]
    fn valid_form_passes() {
        let form = ContactForm {
            name: "Jamal".into(),
            email: "jamal@example.com".into(),
            phone: "+966 50 123 4567".into(),
            message: "Interested in a quote.".into(),
        };
        assert!(validate(&form).is_valid());
    }
}
