//! поиск символа в списке кодпоинтов по названию, аннотациям или явно заданному кодпоинту

mod explicit;
mod matcher;

pub use explicit::explicit_codepoint_index;

use matcher::Needle;

use crate::category::{is_defined, validate};
use crate::codepoint_list::CodepointList;
use crate::names::data_name;
use crate::nameslist::NamesList;
use crate::options::{Direction, SearchOptions};

/// найденный символ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch
{
    /// индекс в списке
    pub index: usize,
    /// кодпоинт
    pub code: u32,
}

/// поиск по списку кодпоинтов. строка поиска обрезается по краям,
/// пустая строка ничего не находит
pub struct Search<'a, L: CodepointList + ?Sized>
{
    list: &'a L,
    query: String,
    needle: Needle,
    options: SearchOptions,
    /// индекс явно указанного кодпоинта (U+0041, &#65; ...)
    explicit_index: Option<usize>,
    names_list: NamesList,
    /// сколько строк сравнено за время поиска
    strings_checked: usize,
}

impl<'a, L: CodepointList + ?Sized> Search<'a, L>
{
    pub fn new(list: &'a L, query: &str, options: SearchOptions) -> Self
    {
        let query = query.trim().to_owned();

        Self {
            list,
            needle: Needle::new(&query, options.whole_word),
            explicit_index: explicit_codepoint_index(list, &query),
            query,
            options,
            names_list: NamesList::new(),
            strings_checked: 0,
        }
    }

    /// сколько строк было сравнено
    pub fn strings_checked(&self) -> usize
    {
        self.strings_checked
    }

    /// следующее совпадение после start_index (с переходом через конец списка)
    pub fn find_from(&mut self, start_index: usize) -> Option<SearchMatch>
    {
        let len = self.list.len();

        if self.query.is_empty() || len == 0 {
            return None;
        }

        let found = match self.quick_check_before() {
            Some(found) => Some(found),
            None => self
                .scan(start_index % len, len)
                .or_else(|| self.quick_check_after()),
        };

        tracing::debug!(
            query = %self.query,
            strings_checked = self.strings_checked,
            found = ?found.map(|found| found.index),
            "search finished"
        );

        found
    }

    /// поиск одного символа - сразу переходим к нему
    fn quick_check_before(&self) -> Option<SearchMatch>
    {
        if self.options.whole_word {
            return None;
        }

        let mut chars = self.query.chars();

        match (chars.next(), chars.next()) {
            (Some(c), None) => self.match_at(self.list.get_index(c as u32)?),
            _ => None,
        }
    }

    /// ничего не нашли: если строка начинается не с печатного ASCII - переходим к первому символу
    fn quick_check_after(&self) -> Option<SearchMatch>
    {
        if self.options.whole_word {
            return None;
        }

        let first = self.query.chars().next()? as u32;

        match (0x20 ..= 0x7E).contains(&first) {
            true => None,
            false => self.match_at(self.list.get_index(first)?),
        }
    }

    /// обход списка по кругу до возврата к start
    fn scan(&mut self, start: usize, len: usize) -> Option<SearchMatch>
    {
        let mut index = start;

        loop {
            index = match self.options.direction {
                Direction::Forward => (index + 1) % len,
                Direction::Backward => (index + len - 1) % len,
            };

            if let Some(code) = self.list.get_char(index) {
                let searchable = validate(code) && is_defined(code);

                if searchable && (self.explicit_index == Some(index) || self.matches(code)) {
                    return Some(SearchMatch { index, code });
                }
            }

            if index == start {
                return None;
            }
        }
    }

    fn match_at(&self, index: usize) -> Option<SearchMatch>
    {
        let code = self.list.get_char(index)?;

        Some(SearchMatch { index, code })
    }

    /// совпадение с названием, а при поиске в аннотациях - с Unihan и NamesList
    fn matches(&mut self, code: u32) -> bool
    {
        if let Some(name) = data_name(code) {
            if self.check(name) {
                return true;
            }
        }

        if !self.options.annotations {
            return false;
        }

        #[cfg(feature = "unihan")]
        {
            if let Some(definition) = crate::unihan::definition(code) {
                if self.check(definition) {
                    return true;
                }
            }
        }

        let annotations = [
            self.names_list.aliases(code),
            self.names_list.notes(code),
            self.names_list.equivalents(code),
            self.names_list.approx_equivalents(code),
        ];

        annotations
            .iter()
            .flatten()
            .any(|haystack| self.check(haystack))
    }

    #[inline]
    fn check(&mut self, haystack: &str) -> bool
    {
        self.strings_checked += 1;
        self.needle.found_in(haystack)
    }
}

/// найти следующее совпадение после start_index
pub fn search<L>(
    list: &L,
    query: &str,
    start_index: usize,
    options: SearchOptions,
) -> Option<SearchMatch>
where
    L: CodepointList + ?Sized,
{
    Search::new(list, query, options).find_from(start_index)
}
