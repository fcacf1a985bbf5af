use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionParseError {
    #[error("Version string is empty")]
    Empty,

    #[error("Failed to parse version number {0}")]
    NumberParseError(String),
}

/// Content release identifier made of ordered numeric components
///
/// Versions compare component by component, so `1.10.0` is newer than `1.9.3`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub numbers: Vec<u32>,
}

impl Version {
    pub fn new(numbers: impl Into<Vec<u32>>) -> Self {
        Self {
            numbers: numbers.into(),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.numbers.iter().map(u32::to_string).collect();

        write!(f, "{}", parts.join("."))
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    /// Accepts `4.9.1` as well as the url form `4_9_1`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(VersionParseError::Empty);
        }

        let numbers = s
            .trim()
            .split(['.', '_'])
            .map(|part| {
                part.parse::<u32>()
                    .map_err(|_| VersionParseError::NumberParseError(part.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { numbers })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dotted_and_underscored() {
        assert_eq!("4.9.1".parse::<Version>(), Ok(Version::new([4, 9, 1])));
        assert_eq!("1_0".parse::<Version>(), Ok(Version::new([1, 0])));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!("".parse::<Version>(), Err(VersionParseError::Empty));
        assert_eq!(
            "4.x.1".parse::<Version>(),
            Err(VersionParseError::NumberParseError("x".to_string()))
        );
    }

    #[test]
    fn orders_numerically() {
        assert!(Version::new([1, 10, 0]) > Version::new([1, 9, 3]));
        assert_eq!(Version::new([4, 9, 1]).to_string(), "4.9.1");
    }
}
