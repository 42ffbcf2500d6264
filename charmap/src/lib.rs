//! каталог кодпоинтов Unicode: списки кодпоинтов по блокам и письменностям,
//! названия, категории, версии, аннотации NamesList и Unihan

pub use block::BlockCodepointList;
pub use blocks::{block_by_name, block_for, blocks, UnicodeBlock};
pub use catalog::{chapter_names, Catalog, ChaptersMode, ALL_CHAPTER};
pub use category::{
    category_for, category_name, is_defined, is_graphic, printable, validate, GeneralCategory,
};
pub use codepoint_list::{CodepointList, CodepointsIter};
pub use details::{status_line, Representations};
pub use error::CharmapError;
pub use names::{data_name, name_count, name_for, NOT_ASSIGNED};
pub use nameslist::{has_nameslist_entry, NamesList};
pub use options::{Direction, SearchOptions};
pub use script::{
    list_scripts, resolve_script_ranges, script_for, ScriptCodepointList, UnicodeRange,
    COMMON_SCRIPT, DEFAULT_SCRIPT,
};
pub use search::{search, Search, SearchMatch};
pub use version::{version_introduced, UnicodeVersion};

mod block;
mod blocks;
mod catalog;
mod category;
mod codepoint_list;
mod data;
mod details;
mod error;
mod hangul;
mod ideograph;
mod names;
pub mod nameslist;
pub mod options;
mod script;
pub mod search;
pub mod unihan;
mod version;

/// последний кодпоинт Unicode
pub const UNICHAR_MAX: u32 = 0x10FFFF;
