//! явно заданный кодпоинт в строке поиска: &#65; #65 &#x41; U+0041 0x41 или просто 0041

use crate::codepoint_list::CodepointList;

/// число в начале строки: значение и количество цифр. переполнение - u32::MAX
fn leading_number(input: &str, radix: u32) -> Option<(u32, usize)>
{
    let mut value: u64 = 0;
    let mut digits = 0;

    for c in input.chars() {
        let Some(digit) = c.to_digit(radix) else {
            break;
        };

        value = (value * radix as u64 + digit as u64).min(u32::MAX as u64);
        digits += 1;
    }

    match digits {
        0 => None,
        _ => Some((value as u32, digits)),
    }
}

/// остаток строки после префикса (без учёта регистра)
fn strip_prefix_ignore_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str>
{
    match input.get(.. prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => Some(&input[prefix.len() ..]),
        _ => None,
    }
}

/// индекс кодпоинта, явно указанного в строке поиска (строка без ведущих пробелов)
pub fn explicit_codepoint_index<L>(list: &L, input: &str) -> Option<usize>
where
    L: CodepointList + ?Sized,
{
    // десятичный
    let decimal = strip_prefix_ignore_case(input, "&#").or_else(|| input.strip_prefix('#'));

    if let Some((code, _)) = decimal.and_then(|rest| leading_number(rest, 10)) {
        if let Some(index) = list.get_index(code) {
            return Some(index);
        }
    }

    // шестнадцатеричный
    let hex = strip_prefix_ignore_case(input, "&#x")
        .or_else(|| strip_prefix_ignore_case(input, "U+"))
        .or_else(|| strip_prefix_ignore_case(input, "0x"));

    if let Some((code, _)) = hex.and_then(|rest| leading_number(rest, 16)) {
        if let Some(index) = list.get_index(code) {
            return Some(index);
        }
    }

    // шестнадцатеричный без префикса - не меньше трёх цифр, иначе слишком похоже на слово
    match leading_number(input, 16) {
        Some((code, digits)) if digits >= 3 => list.get_index(code),
        _ => None,
    }
}
