use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Shown in the summary for any lead field that has not been filled in.
pub const PLACEHOLDER: &str = "—";

/// Contact details captured before a plan summary is printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub title: String,
}

impl Default for Lead {
    fn default() -> Self {
        Self {
            name: PLACEHOLDER.to_string(),
            email: PLACEHOLDER.to_string(),
            company: PLACEHOLDER.to_string(),
            title: PLACEHOLDER.to_string(),
        }
    }
}

impl Lead {
    /// Trims every field, requires name and a plausible email, and fills
    /// blank optional fields with the placeholder.
    pub fn validated(self) -> Result<Lead, AppError> {
        let name = self.name.trim();
        let email = self.email.trim();

        if name.is_empty() || email.is_empty() || name == PLACEHOLDER || email == PLACEHOLDER {
            return Err(AppError::Validation(
                "Please enter your name and email.".to_string(),
            ));
        }
        if !looks_like_email(email) {
            return Err(AppError::Validation(
                "Please enter a valid email address.".to_string(),
            ));
        }

        Ok(Lead {
            name: name.to_string(),
            email: email.to_string(),
            company: or_placeholder(&self.company),
            title: or_placeholder(&self.title),
        })
    }
}

fn or_placeholder(value: &str) -> String {
    match value.trim() {
        "" => PLACEHOLDER.to_string(),
        v => v.to_string(),
    }
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
