//! статические таблицы Unicode 14.0.0
//!
//! все таблицы отсортированы по первому кодпоинту (названия письменностей - по строке),
//! диапазоны не пересекаются

use crate::category::GeneralCategory::{self, *};
use crate::nameslist::NamesListEntry;
#[cfg(feature = "unihan")]
use crate::unihan::UnihanEntry;
use crate::version::UnicodeVersion::{self, *};

/// блок: первый кодпоинт, последний кодпоинт, название
pub static UNICODE_BLOCKS: &[(u32, u32, &str)] = &include!("./../data/blocks.txt");

/// названия письменностей, отсортированы для бинарного поиска
pub static UNICODE_SCRIPT_NAMES: &[&str] = &include!("./../data/script_names.txt");

/// диапазоны письменностей: первый кодпоинт, последний кодпоинт, индекс в UNICODE_SCRIPT_NAMES.
/// для Common записей нет - это всё, что не попало в таблицу
pub static UNICODE_SCRIPTS: &[(u32, u32, u8)] = &include!("./../data/scripts.txt");

/// общие категории, неназначенные кодпоинты пропущены
pub static UNICODE_CATEGORIES: &[(u32, u32, GeneralCategory)] =
    &include!("./../data/categories.txt");

/// версия Unicode, в которой появился кодпоинт
pub static UNICODE_VERSIONS: &[(u32, u32, UnicodeVersion)] = &include!("./../data/versions.txt");

/// названия кодпоинтов. вычисляемые названия (хангыль, иероглифы) здесь не хранятся
pub static UNICODE_NAMES: &[(u32, &str)] = &include!("./../data/names.txt");

/// записи NamesList: индексы начала аннотаций каждого вида
pub static NAMES_LIST: &[NamesListEntry] = &include!("./../data/nameslist.txt");

/// "= ..." - альтернативные названия
pub static NAMES_LIST_EQUALS: &[(u32, &str)] = &include!("./../data/nameslist_equals.txt");
/// "* ..." - примечания
pub static NAMES_LIST_STARS: &[(u32, &str)] = &include!("./../data/nameslist_stars.txt");
/// "x ..." - перекрёстные ссылки
pub static NAMES_LIST_EXES: &[(u32, u32)] = &include!("./../data/nameslist_exes.txt");
/// "# ..." - приблизительные эквиваленты
pub static NAMES_LIST_POUNDS: &[(u32, &str)] = &include!("./../data/nameslist_pounds.txt");
/// ": ..." - эквиваленты
pub static NAMES_LIST_COLONS: &[(u32, &str)] = &include!("./../data/nameslist_colons.txt");

/// данные Unihan
#[cfg(feature = "unihan")]
pub static UNIHAN: &[UnihanEntry] = &include!("./../data/unihan.txt");

/// бинарный поиск по таблице диапазонов
#[inline]
pub fn find_range<T>(table: &[(u32, u32, T)], code: u32) -> Option<&(u32, u32, T)>
{
    let pos = table.partition_point(|&(_, end, _)| end < code);

    match table.get(pos) {
        Some(entry) if entry.0 <= code => Some(entry),
        _ => None,
    }
}
