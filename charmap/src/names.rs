use crate::data::UNICODE_NAMES;
use crate::hangul::hangul_syllable_name;
use crate::ideograph::ideograph_name;

/// название для кодпоинтов, которых нет ни в таблице, ни в вычисляемых диапазонах
pub const NOT_ASSIGNED: &str = "<not assigned>";

/// название кодпоинта: сначала вычисляемые диапазоны, затем таблица названий
pub fn name_for(code: u32) -> String
{
    if let Some(name) = ideograph_name(code).or_else(|| hangul_syllable_name(code)) {
        return name;
    }

    let label = match code {
        0xD800 ..= 0xDB7F => "<Non Private Use High Surrogate>",
        0xDB80 ..= 0xDBFF => "<Private Use High Surrogate>",
        0xDC00 ..= 0xDFFF => "<Low Surrogate>",
        0xE000 ..= 0xF8FF => "<Private Use>",
        0xF0000 ..= 0xFFFFD => "<Plane 15 Private Use>",
        0x100000 ..= 0x10FFFD => "<Plane 16 Private Use>",
        _ => data_name(code).unwrap_or(NOT_ASSIGNED),
    };

    label.to_owned()
}

/// название из таблицы, без вычисляемых диапазонов
pub fn data_name(code: u32) -> Option<&'static str>
{
    UNICODE_NAMES
        .binary_search_by_key(&code, |&(entry, _)| entry)
        .ok()
        .map(|index| UNICODE_NAMES[index].1)
}

/// количество названий в таблице
pub fn name_count() -> usize
{
    UNICODE_NAMES.len()
}
