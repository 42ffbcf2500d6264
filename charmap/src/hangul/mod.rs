/// начало блока слогов хангыль
pub const HANGUL_S_BASE: u32 = 0xAC00;
/// количество ведущих согласных
const HANGUL_L_COUNT: u32 = 19;
/// количество гласных
const HANGUL_V_COUNT: u32 = 21;
/// количество завершающих согласных (включая отсутствующую)
const HANGUL_T_COUNT: u32 = 28;
/// количество гласных * количество завершающих согласных
const HANGUL_N_COUNT: u32 = HANGUL_V_COUNT * HANGUL_T_COUNT;
/// количество слогов хангыль в Unicode
pub const HANGUL_S_COUNT: u32 = HANGUL_L_COUNT * HANGUL_N_COUNT;

/// короткие названия ведущих согласных чамо
const JAMO_L_TABLE: [&str; HANGUL_L_COUNT as usize] = [
    "G", "GG", "N", "D", "DD", "R", "M", "B", "BB", "S", "SS", "", "J", "JJ", "C", "K", "T", "P",
    "H",
];

/// короткие названия гласных чамо
const JAMO_V_TABLE: [&str; HANGUL_V_COUNT as usize] = [
    "A", "AE", "YA", "YAE", "EO", "E", "YEO", "YE", "O", "WA", "WAE", "OE", "YO", "U", "WEO", "WE",
    "WI", "YU", "EU", "YI", "I",
];

/// короткие названия завершающих согласных чамо, первая - отсутствует
const JAMO_T_TABLE: [&str; HANGUL_T_COUNT as usize] = [
    "", "G", "GG", "GS", "N", "NJ", "NH", "D", "L", "LG", "LM", "LB", "LS", "LT", "LP", "LH", "M",
    "B", "BS", "S", "SS", "NG", "J", "C", "K", "T", "P", "H",
];

/// кодпоинт - слог хангыль?
#[inline]
pub fn is_hangul_syllable(code: u32) -> bool
{
    code.wrapping_sub(HANGUL_S_BASE) < HANGUL_S_COUNT
}

/// название слога хангыль, собранное из названий чамо L, V, T
pub fn hangul_syllable_name(code: u32) -> Option<String>
{
    if !is_hangul_syllable(code) {
        return None;
    }

    let lvt = code - HANGUL_S_BASE;

    let l = lvt / HANGUL_N_COUNT;
    let v = (lvt % HANGUL_N_COUNT) / HANGUL_T_COUNT;
    let t = lvt % HANGUL_T_COUNT;

    Some(format!(
        "HANGUL SYLLABLE {}{}{}",
        JAMO_L_TABLE[l as usize], JAMO_V_TABLE[v as usize], JAMO_T_TABLE[t as usize]
    ))
}
