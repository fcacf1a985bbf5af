use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleParseError {
    #[error("Locale {0} is missing a country code")]
    MissingCountry(String),

    #[error("Locale {0} has an empty language or country code")]
    EmptyPart(String),
}

/// Language and country pair selecting localized content, e.g. `en_US`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    pub language: String,
    pub country: String,
}

impl Locale {
    pub fn new(language: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            country: country.into(),
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en", "US")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.language, self.country)
    }
}

impl FromStr for Locale {
    type Err = LocaleParseError;

    /// Accepts both `en_US` and `en-US`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (language, country) = s
            .split_once(['_', '-'])
            .ok_or_else(|| LocaleParseError::MissingCountry(s.to_string()))?;

        if language.is_empty() || country.is_empty() {
            return Err(LocaleParseError::EmptyPart(s.to_string()));
        }

        Ok(Self::new(language, country))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_separators() {
        assert_eq!("en_US".parse::<Locale>(), Ok(Locale::new("en", "US")));
        assert_eq!("de-DE".parse::<Locale>(), Ok(Locale::new("de", "DE")));
    }

    #[test]
    fn rejects_incomplete_locales() {
        assert_eq!(
            "en".parse::<Locale>(),
            Err(LocaleParseError::MissingCountry("en".to_string()))
        );
        assert_eq!(
            "_US".parse::<Locale>(),
            Err(LocaleParseError::EmptyPart("_US".to_string()))
        );
    }

    #[test]
    fn displays_with_underscore() {
        assert_eq!(Locale::new("ja", "JP").to_string(), "ja_JP");
    }
}
