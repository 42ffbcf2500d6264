//! данные Unihan для иероглифов ККЯ. без feature "unihan" любой запрос возвращает заглушку

/// ответ на любой запрос, если данные Unihan не включены в сборку
pub const NOT_COMPILED_IN: &str = "This feature was not compiled in.";

/// запись Unihan. пустая строка - значения нет
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnihanEntry
{
    pub code: u32,
    /// kDefinition
    pub definition: &'static str,
    /// kMandarin
    pub mandarin: &'static str,
    /// kCantonese
    pub cantonese: &'static str,
    /// kJapaneseOn
    pub japanese_on: &'static str,
    /// kJapaneseKun
    pub japanese_kun: &'static str,
    /// kTang
    pub tang: &'static str,
    /// kKorean
    pub korean: &'static str,
}

#[cfg(feature = "unihan")]
#[inline]
fn find_entry(code: u32) -> Option<&'static UnihanEntry>
{
    use crate::data::UNIHAN;

    UNIHAN
        .binary_search_by_key(&code, |entry| entry.code)
        .ok()
        .map(|index| &UNIHAN[index])
}

macro_rules! unihan_fields {
    ($($(#[$meta: meta])* $field: ident),+) => {
        $(
            $(#[$meta])*
            pub fn $field(code: u32) -> Option<&'static str>
            {
                #[cfg(feature = "unihan")]
                {
                    find_entry(code)
                        .map(|entry| entry.$field)
                        .filter(|value| !value.is_empty())
                }

                #[cfg(not(feature = "unihan"))]
                {
                    let _ = code;
                    Some(NOT_COMPILED_IN)
                }
            }
        )+
    };
}

unihan_fields!(
    /// определение на английском (kDefinition)
    definition,
    /// произношение на путунхуа (kMandarin)
    mandarin,
    /// произношение на кантонском (kCantonese)
    cantonese,
    /// японское онное чтение (kJapaneseOn)
    japanese_on,
    /// японское кунное чтение (kJapaneseKun)
    japanese_kun,
    /// произношение эпохи Тан (kTang)
    tang,
    /// корейское чтение (kKorean)
    korean
);

/// количество записей Unihan
pub fn unihan_count() -> usize
{
    #[cfg(feature = "unihan")]
    {
        crate::data::UNIHAN.len()
    }

    #[cfg(not(feature = "unihan"))]
    {
        0
    }
}
