use validator::ValidateEmail;

#[derive(Debug, Clone)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Accepts `local@domain` where the domain contains at least one dot.
    /// No normalization is applied: the address is kept verbatim.
    pub fn parse(s: String) -> Result<Self, String> {
        // `ValidateEmail` follows the HTML5 grammar, which allows dotless
        // domains; submissions like `ursula@localhost` are still rejected.
        let domain_has_dot = s
            .rsplit_once('@')
            .is_some_and(|(_, domain)| domain.contains('.'));

        if !s.validate_email() || !domain_has_dot {
            return Err(format!("{s} is not a valid email address."));
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        EmailAddress::parse(value)
    }
}
