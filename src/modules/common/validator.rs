use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use email_address::EmailAddress;
use poem_openapi::Validator;

pub struct EmailValidator;

impl Display for EmailValidator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Not a valid email address")
    }
}

impl Validator<String> for EmailValidator {
    fn check(&self, value: &String) -> bool {
        match EmailAddress::from_str(value) {
            // Bare hostnames like `user@localhost` parse, but a reply
            // address needs a routable dotted domain.
            Ok(e) => &e.email() == value && e.domain().contains('.'),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_routable_addresses() {
        let validator = EmailValidator;
        assert!(validator.check(&"visitor@example.com".to_string()));
        assert!(validator.check(&"first.last+tag@sub.example.co.uk".to_string()));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        let validator = EmailValidator;
        assert!(!validator.check(&"not-an-email".to_string()));
        assert!(!validator.check(&"missing@domain".to_string()));
        assert!(!validator.check(&"@missing-local.com".to_string()));
        assert!(!validator.check(&"spaces in@email.com".to_string()));
        assert!(!validator.check(&"double@@domain.com".to_string()));
    }
}
