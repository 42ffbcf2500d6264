//! диапазоны, названия кодпоинтов в которых вычисляются, а не хранятся в таблице

/// Иероглифы унификации Хань
/// https://en.wikipedia.org/wiki/CJK_Unified_Ideographs
///
/// ```text
/// U+3400 ..= U+4DBF   (расширение A)
/// U+4E00 ..= U+9FFF   (базовый блок)
/// U+20000 ..= U+2A6DF (расширение B)
/// U+2A700 ..= U+2B738 (расширение C)
/// U+2B740 ..= U+2B81D (расширение D)
/// U+2B820 ..= U+2CEA1 (расширение E)
/// U+2CEB0 ..= U+2EBE0 (расширение F)
/// U+30000 ..= U+3134A (расширение G)
/// ```
pub fn is_cjk_unified(code: u32) -> bool
{
    [
        (0x3400 ..= 0x4DBF),
        (0x4E00 ..= 0x9FFF),
        (0x20000 ..= 0x2A6DF),
        (0x2A700 ..= 0x2B738),
        (0x2B740 ..= 0x2B81D),
        (0x2B820 ..= 0x2CEA1),
        (0x2CEB0 ..= 0x2EBE0),
        (0x30000 ..= 0x3134A),
    ]
    .iter()
    .any(|range| range.contains(&code))
}

/// Иероглифы совместимости
///
/// ```text
/// U+F900 ..= U+FA6D
/// U+FA70 ..= U+FAD9
/// U+2F800 ..= U+2FA1D
/// ```
pub fn is_cjk_compatibility(code: u32) -> bool
{
    [
        (0xF900 ..= 0xFA6D),
        (0xFA70 ..= 0xFAD9),
        (0x2F800 ..= 0x2FA1D),
    ]
    .iter()
    .any(|range| range.contains(&code))
}

/// Тангутское письмо
///
/// Tangut:
///     назначенные: U+17000 ..= U+187F7
/// Tangut Supplement:
///     назначенные: U+18D00 ..= U+18D08
pub fn is_tangut_ideograph(code: u32) -> bool
{
    (0x17000 ..= 0x187F7).contains(&code) || (0x18D00 ..= 0x18D08).contains(&code)
}

/// Tangut Components, названия нумеруются с 001
///     U+18800 ..= U+18AFF
pub fn is_tangut_component(code: u32) -> bool
{
    (0x18800 ..= 0x18AFF).contains(&code)
}

/// Киданьская письменность
///
/// Khitan Small Script:
///     назначенные: U+18B00 ..= U+18CD5
pub fn is_khitan(code: u32) -> bool
{
    (0x18B00 ..= 0x18CD5).contains(&code)
}

/// Нюй-шу
///
/// ```text
/// назначенные: U+1B170 ..= U+1B2FB
/// ```
pub fn is_nushu(code: u32) -> bool
{
    (0x1B170 ..= 0x1B2FB).contains(&code)
}

/// вычисляемое название иероглифа, если кодпоинт попадает в один из диапазонов
pub fn ideograph_name(code: u32) -> Option<String>
{
    if is_cjk_unified(code) {
        return Some(format!("CJK UNIFIED IDEOGRAPH-{:04X}", code));
    }

    if is_cjk_compatibility(code) {
        return Some(format!("CJK COMPATIBILITY IDEOGRAPH-{:04X}", code));
    }

    if is_tangut_ideograph(code) {
        return Some(format!("TANGUT IDEOGRAPH-{:04X}", code));
    }

    if is_tangut_component(code) {
        return Some(format!("TANGUT COMPONENT-{:03}", code - 0x18800 + 1));
    }

    if is_khitan(code) {
        return Some(format!("KHITAN SMALL SCRIPT CHARACTER-{:04X}", code));
    }

    if is_nushu(code) {
        return Some(format!("NUSHU CHARACTER-{:04X}", code));
    }

    None
}
