//! Document shapes served by Data Dragon
//!
//! Incoming object keys are folded to lowercase before decoding (see
//! [`crate::utils::json`]), so every multi-word field declares its lowercase
//! name for deserialization. Serialization keeps the camelCase names the
//! remote host uses.

use crate::utils::json::null_as_default;
use serde::{Deserialize, Serialize};

/// Game-wide metadata for one version and locale
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Globals {
    #[serde(default, deserialize_with = "null_as_default", rename(deserialize = "vocabterms"))]
    pub vocab_terms: Vec<Term>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub keywords: Vec<Term>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub regions: Vec<Region>,

    #[serde(default, deserialize_with = "null_as_default", rename(deserialize = "spellspeeds"))]
    pub spell_speeds: Vec<NamedRef>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub rarities: Vec<NamedRef>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub sets: Vec<Set>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub formats: Vec<Format>,
}

/// Vocabulary term or keyword with its rules text
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Term {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default", rename(deserialize = "nameref"))]
    pub name_ref: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct NamedRef {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default", rename(deserialize = "nameref"))]
    pub name_ref: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Region {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default", rename(deserialize = "nameref"))]
    pub name_ref: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub abbreviation: String,

    #[serde(default, rename(deserialize = "iconabsolutepath"))]
    pub icon_absolute_path: Option<String>,
}

/// Card set listed in the globals document
///
/// `name_ref` names the set's directory on the remote host. Sets without one
/// have no card document to fetch.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Set {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, rename(deserialize = "nameref"))]
    pub name_ref: Option<String>,

    #[serde(default, rename(deserialize = "iconabsolutepath"))]
    pub icon_absolute_path: Option<String>,
}

impl Set {
    pub fn new(name: impl Into<String>, name_ref: Option<&str>) -> Self {
        Self {
            name: name.into(),
            name_ref: name_ref.map(str::to_string),
            icon_absolute_path: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Format {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default", rename(deserialize = "nameref"))]
    pub name_ref: String,

    #[serde(default, rename(deserialize = "iconabsolutepath"))]
    pub icon_absolute_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CardAsset {
    #[serde(
        default,
        deserialize_with = "null_as_default",
        rename(deserialize = "gameabsolutepath")
    )]
    pub game_absolute_path: String,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        rename(deserialize = "fullabsolutepath")
    )]
    pub full_absolute_path: String,
}

/// Single card entry of a set document
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Card {
    #[serde(deserialize_with = "null_as_default", rename(deserialize = "cardcode"))]
    pub card_code: String,

    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        rename(deserialize = "associatedcardrefs")
    )]
    pub associated_card_refs: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub assets: Vec<CardAsset>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub regions: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default", rename(deserialize = "regionrefs"))]
    pub region_refs: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub attack: i32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub cost: i32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub health: i32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default", rename(deserialize = "descriptionraw"))]
    pub description_raw: String,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        rename(deserialize = "levelupdescription")
    )]
    pub levelup_description: String,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        rename(deserialize = "levelupdescriptionraw")
    )]
    pub levelup_description_raw: String,

    #[serde(default, deserialize_with = "null_as_default", rename(deserialize = "flavortext"))]
    pub flavor_text: String,

    #[serde(default, deserialize_with = "null_as_default", rename(deserialize = "artistname"))]
    pub artist_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default", rename(deserialize = "keywordrefs"))]
    pub keyword_refs: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default", rename(deserialize = "spellspeed"))]
    pub spell_speed: String,

    #[serde(default, deserialize_with = "null_as_default", rename(deserialize = "spellspeedref"))]
    pub spell_speed_ref: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub rarity: String,

    #[serde(default, deserialize_with = "null_as_default", rename(deserialize = "rarityref"))]
    pub rarity_ref: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub subtypes: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub supertype: String,

    #[serde(default, deserialize_with = "null_as_default", rename = "type")]
    pub card_type: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub collectible: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub set: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub formats: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default", rename(deserialize = "formatrefs"))]
    pub format_refs: Vec<String>,
}
