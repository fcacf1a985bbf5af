//! Value types the fetcher reads and the documents it decodes into

pub mod documents;
pub mod locale;
pub mod version;

pub use documents::{Card, CardAsset, Format, Globals, NamedRef, Region, Set, Term};
pub use locale::{Locale, LocaleParseError};
pub use version::{Version, VersionParseError};
