//! Name resolution from OSM name tags.

use crate::domain::StationName;
use crate::overpass::RawElement;

use super::romanize::romanize;

/// Tags holding a Chinese name, most specific first.
const CHINESE_NAME_TAGS: [&str; 3] = ["name:zh-CN", "name:zh", "name"];

const ENGLISH_NAME_TAG: &str = "name:en";
const LOCAL_NAME_TAG: &str = "name:local";

/// Pick the station's names from its tags.
///
/// The Chinese name is the first non-empty of `name:zh-CN`, `name:zh` and
/// `name`. When there is a Chinese name but no `name:en`, the English name
/// is its pinyin romanization (left empty if that yields nothing).
pub fn resolve_names(element: &RawElement) -> StationName {
    let chinese = CHINESE_NAME_TAGS
        .iter()
        .find_map(|tag| element.tag(tag))
        .unwrap_or_default()
        .to_string();

    let english = match element.tag(ENGLISH_NAME_TAG) {
        Some(english) => english.to_string(),
        None if !chinese.is_empty() => romanize(&chinese).unwrap_or_default(),
        None => String::new(),
    };

    let local = element.tag(LOCAL_NAME_TAG).unwrap_or_default().to_string();

    StationName {
        chinese,
        english,
        local,
    }
}
