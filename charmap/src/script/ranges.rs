use crate::data::{find_range, UNICODE_SCRIPTS, UNICODE_SCRIPT_NAMES};
use crate::UNICHAR_MAX;

/// письменность, в которую попадают все кодпоинты, не назначенные другим письменностям
pub const COMMON_SCRIPT: &str = "Common";

/// диапазон кодпоинтов письменности и его место в общем пространстве индексов списка
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnicodeRange
{
    /// первый кодпоинт
    pub start: u32,
    /// последний кодпоинт (включительно)
    pub end: u32,
    /// индекс первого кодпоинта в списке
    pub index_offset: usize,
}

impl UnicodeRange
{
    /// количество кодпоинтов в диапазоне
    #[inline]
    pub fn len(&self) -> usize
    {
        match self.is_empty() {
            true => 0,
            false => (self.end - self.start) as usize + 1,
        }
    }

    /// диапазоны из таблиц не бывают пустыми, пустой получится только при end < start
    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.end < self.start
    }

    /// индекс последнего кодпоинта диапазона в списке
    #[inline]
    pub fn last_index(&self) -> usize
    {
        self.index_offset + (self.end - self.start) as usize
    }

    #[inline]
    pub fn contains(&self, code: u32) -> bool
    {
        (self.start ..= self.end).contains(&code)
    }
}

/// индекс письменности в таблице названий
#[inline]
fn script_index(name: &str) -> Option<u8>
{
    UNICODE_SCRIPT_NAMES
        .binary_search(&name)
        .ok()
        .map(|index| index as u8)
}

/// диапазоны письменности. индексы продолжаются с first_index
pub fn resolve_script_ranges(name: &str, first_index: usize) -> Option<Vec<UnicodeRange>>
{
    let script = script_index(name)?;

    let mut ranges = vec![];
    let mut index_offset = first_index;

    let mut push = |start: u32, end: u32| {
        let range = UnicodeRange {
            start,
            end,
            index_offset,
        };

        index_offset += range.len();
        ranges.push(range);
    };

    match UNICODE_SCRIPT_NAMES[script as usize] == COMMON_SCRIPT {
        // Common - промежутки между диапазонами таблицы и хвост до U+10FFFF
        true => {
            let mut next = 0;

            for &(start, end, _) in UNICODE_SCRIPTS {
                if start > next {
                    push(next, start - 1);
                }
                next = end + 1;
            }

            if next <= UNICHAR_MAX {
                push(next, UNICHAR_MAX);
            }
        }
        false => {
            UNICODE_SCRIPTS
                .iter()
                .filter(|&&(_, _, index)| index == script)
                .for_each(|&(start, end, _)| push(start, end));
        }
    }

    Some(ranges)
}

/// письменность, к которой относится кодпоинт
pub fn script_for(code: u32) -> &'static str
{
    match find_range(UNICODE_SCRIPTS, code) {
        Some(&(_, _, index)) => UNICODE_SCRIPT_NAMES[index as usize],
        None => COMMON_SCRIPT,
    }
}

/// названия всех письменностей (включая Common), в алфавитном порядке
pub fn list_scripts() -> &'static [&'static str]
{
    UNICODE_SCRIPT_NAMES
}
