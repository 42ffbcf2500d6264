//! аннотации NamesList: альтернативные названия, примечания, ссылки, эквиваленты
//!
//! записи аннотаций одного кодпоинта идут в таблицах подряд, запись NamesList хранит позицию первой

use std::cell::Cell;

use crate::data::{
    NAMES_LIST, NAMES_LIST_COLONS, NAMES_LIST_EQUALS, NAMES_LIST_EXES, NAMES_LIST_POUNDS,
    NAMES_LIST_STARS,
};

/// запись NamesList: позиции начала аннотаций каждого вида, None - аннотаций этого вида нет
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamesListEntry
{
    pub code: u32,
    /// "= ..."
    pub equals: Option<u16>,
    /// "* ..."
    pub stars: Option<u16>,
    /// "x ..."
    pub exes: Option<u16>,
    /// "# ..."
    pub pounds: Option<u16>,
    /// ": ..."
    pub colons: Option<u16>,
}

/// есть ли у кодпоинта запись NamesList
pub fn has_nameslist_entry(code: u32) -> bool
{
    find_entry(code).is_some()
}

#[inline]
fn find_entry(code: u32) -> Option<&'static NamesListEntry>
{
    NAMES_LIST
        .binary_search_by_key(&code, |entry| entry.code)
        .ok()
        .map(|index| &NAMES_LIST[index])
}

/// последний запрошенный кодпоинт и найденная для него запись
#[derive(Debug, Default)]
struct LastLookup(Cell<Option<(u32, Option<&'static NamesListEntry>)>>);

impl LastLookup
{
    #[inline]
    fn entry(&self, code: u32) -> Option<&'static NamesListEntry>
    {
        if let Some((cached, entry)) = self.0.get() {
            if cached == code {
                return entry;
            }
        }

        let entry = find_entry(code);
        self.0.set(Some((code, entry)));

        entry
    }

    #[cfg(test)]
    fn cached(&self) -> Option<u32>
    {
        self.0.get().map(|(code, _)| code)
    }
}

/// аннотации кодпоинта, начиная с позиции start
#[inline]
fn annotations<T: Copy>(table: &'static [(u32, T)], start: Option<u16>, code: u32) -> Vec<T>
{
    let Some(start) = start else {
        return vec![];
    };

    table[start as usize ..]
        .iter()
        .take_while(|&&(entry, _)| entry == code)
        .map(|&(_, value)| value)
        .collect()
}

/// поиск аннотаций NamesList.
///
/// для каждого вида аннотаций запоминается последний запрошенный кодпоинт, так что серия запросов
/// к одному символу не повторяет бинарный поиск. кэш не синхронизирован: каждому потоку - свой
/// экземпляр
#[derive(Debug, Default)]
pub struct NamesList
{
    equals: LastLookup,
    stars: LastLookup,
    exes: LastLookup,
    pounds: LastLookup,
    colons: LastLookup,
}

impl NamesList
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// альтернативные названия ("=")
    pub fn aliases(&self, code: u32) -> Vec<&'static str>
    {
        let start = self.equals.entry(code).and_then(|entry| entry.equals);

        annotations(NAMES_LIST_EQUALS, start, code)
    }

    /// примечания ("*")
    pub fn notes(&self, code: u32) -> Vec<&'static str>
    {
        let start = self.stars.entry(code).and_then(|entry| entry.stars);

        annotations(NAMES_LIST_STARS, start, code)
    }

    /// перекрёстные ссылки ("x") - кодпоинты
    pub fn cross_refs(&self, code: u32) -> Vec<u32>
    {
        let start = self.exes.entry(code).and_then(|entry| entry.exes);

        annotations(NAMES_LIST_EXES, start, code)
    }

    /// приблизительные эквиваленты ("#")
    pub fn approx_equivalents(&self, code: u32) -> Vec<&'static str>
    {
        let start = self.pounds.entry(code).and_then(|entry| entry.pounds);

        annotations(NAMES_LIST_POUNDS, start, code)
    }

    /// эквиваленты (":")
    pub fn equivalents(&self, code: u32) -> Vec<&'static str>
    {
        let start = self.colons.entry(code).and_then(|entry| entry.colons);

        annotations(NAMES_LIST_COLONS, start, code)
    }
}
