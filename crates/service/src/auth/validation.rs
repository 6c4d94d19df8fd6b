//! Pure input checks run before any backend call.

use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::AuthError;

pub const MIN_PASSWORD_LEN: usize = 8;

// Local part is a dot-atom of atext. Domain is at least two LDH labels,
// none starting or ending with a hyphen.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
        r"@[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)+$",
    ))
    .unwrap()
});

/// Length is counted in characters, not bytes.
pub fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::PasswordTooShort);
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), AuthError> {
    if !EMAIL_REGEX.is_match(email) {
        return Err(AuthError::InvalidEmail);
    }
    Ok(())
}

/// Password first, then email.
pub fn validate_login(email: &str, password: &str) -> Result<(), AuthError> {
    validate_password(password)?;
    validate_email(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_passwords_rejected() {
        for p in ["", "1", "12345", "1234567"] {
            assert_eq!(validate_password(p), Err(AuthError::PasswordTooShort), "{p:?}");
        }
        assert!(validate_password("12345678").is_ok());
    }

    #[test]
    fn password_length_counts_characters() {
        // seven characters, fourteen bytes
        assert_eq!(validate_password("пароль1"), Err(AuthError::PasswordTooShort));
        assert!(validate_password("пароль12").is_ok());
    }

    #[test]
    fn accepts_ordinary_addresses() {
        for e in [
            "valid@test.ru",
            "first.last+tag@mail.example.com",
            "a@b.co",
            "o'brien@my-host.example.org",
            "x_y=z@a1.b2",
        ] {
            assert!(validate_email(e).is_ok(), "{e}");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for e in [
            "not_an_email",
            "",
            "@test.ru",
            "user@",
            "user@localhost",
            "user@@test.ru",
            "us er@test.ru",
            "user@test .ru",
            "user@.test.ru",
            "user@test..ru",
            "user@test.ru.",
            " user@test.ru",
            "<>@test.ru",
            "a,b@test.ru",
            "a<b>@test.ru",
            "Name <user@test.ru>",
            ".user@test.ru",
            "us..er@test.ru",
            "user.@test.ru",
            "\"@test.ru",
            "\"quoted\"@test.ru",
            "a(b)@x.y",
            "user@te,st.ru",
            "user@-test.ru",
            "user@test-.ru",
            "user@test.ru-",
            "user@te_st.ru",
        ] {
            assert_eq!(validate_email(e), Err(AuthError::InvalidEmail), "{e:?}");
        }
    }

    #[test]
    fn password_checked_before_email() {
        assert_eq!(validate_login("not_an_email", "12345"), Err(AuthError::PasswordTooShort));
        assert_eq!(validate_login("not_an_email", "12345678"), Err(AuthError::InvalidEmail));
        assert!(validate_login("valid@test.ru", "password123").is_ok());
    }
}
