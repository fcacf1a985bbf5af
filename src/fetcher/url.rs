//! Url segments for Data Dragon documents

use crate::dd::{Locale, Set, Version};

/// Host serving Legends of Runeterra Data Dragon documents
pub const DATA_DRAGON_URL: &str = "https://dd.b.pvp.net";

/// `en_US` becomes `en_us`
pub fn locale_for_url(locale: &Locale) -> String {
    format!("{}_{}", locale.language, locale.country.to_lowercase())
}

/// `[4, 9, 1]` becomes `4_9_1`
pub fn version_for_url(version: &Version) -> String {
    version
        .numbers
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join("_")
}

/// Lowercased set directory name, if the set has one
pub fn set_name_for_url(set: &Set) -> Option<String> {
    set.name_ref.as_deref().map(str::to_lowercase)
}

pub fn globals_url(base_url: &str, locale: &Locale, version: &Version) -> String {
    let l = locale_for_url(locale);
    let v = version_for_url(version);

    format!("{base_url}/{v}/core/{l}/data/globals-{l}.json")
}

pub fn set_cards_url(
    base_url: &str,
    locale: &Locale,
    version: &Version,
    set: &Set,
) -> Option<String> {
    let s = set_name_for_url(set)?;
    let l = locale_for_url(locale);
    let v = version_for_url(version);

    Some(format!("{base_url}/{v}/{s}/{l}/data/{s}-{l}.json"))
}
