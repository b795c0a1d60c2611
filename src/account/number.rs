use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Account number assigned when the account is opened.
///
/// Numbers are random; collisions are unlikely but never checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub(crate) fn generate() -> Self {
        Self(format!("ACCT-{}", Uuid::new_v4().simple()))
    }

    /// number as text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod test {
    use super::AccountNumber;

    #[test]
    fn format() {
        let n = AccountNumber::generate();
        let hex = n.as_str().strip_prefix("ACCT-").unwrap();
        assert_eq!(hex.len(), 32);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn two_numbers_differ() {
        assert_ne!(AccountNumber::generate(), AccountNumber::generate());
    }
}
