use std::fmt;

/// Purpose a token was issued for.
///
/// Every scope has its own tag so a token issued for one purpose can never
/// resolve when presented for another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenScope {
    /// Session tokens handed out at login.
    Authentication,
}

impl TokenScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenScope::Authentication => "authentication",
        }
    }
}

impl fmt::Display for TokenScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_scope_tag() {
        assert_eq!(TokenScope::Authentication.as_str(), "authentication");
        assert_eq!(TokenScope::Authentication.to_string(), "authentication");
    }
}
