mod ranges;

use std::sync::OnceLock;

pub use ranges::{list_scripts, resolve_script_ranges, script_for, UnicodeRange, COMMON_SCRIPT};

use crate::codepoint_list::CodepointList;
use crate::error::CharmapError;

/// письменность, которую получает список, если до первого запроса ни одна не была задана
pub const DEFAULT_SCRIPT: &str = "Latin";

/// объединение одной или нескольких письменностей в виде единого пространства индексов.
///
/// диапазоны хранятся в порядке добавления письменностей, внутри письменности - по возрастанию
/// кодпоинтов; индексы идут без пропусков
#[derive(Debug, Clone, Default)]
pub struct ScriptCodepointList
{
    ranges: OnceLock<Vec<UnicodeRange>>,
}

impl ScriptCodepointList
{
    /// пустой список. при первом запросе без заданной письменности станет списком Latin
    pub fn new() -> Self
    {
        Self::default()
    }

    /// список для одной письменности
    pub fn with_script(name: &str) -> Result<Self, CharmapError>
    {
        let mut list = Self::new();
        list.set_script(name)?;

        Ok(list)
    }

    /// список для нескольких письменностей, в заданном порядке
    pub fn with_scripts<S: AsRef<str>>(names: &[S]) -> Result<Self, CharmapError>
    {
        let mut list = Self::new();
        list.set_scripts(names)?;

        Ok(list)
    }

    /// заменить содержимое списка на диапазоны письменности.
    /// при ошибке список не меняется
    pub fn set_script(&mut self, name: &str) -> Result<(), CharmapError>
    {
        self.set_scripts(&[name])
    }

    /// заменить содержимое списка на диапазоны нескольких письменностей.
    /// если хотя бы одна письменность неизвестна - список не меняется
    pub fn set_scripts<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), CharmapError>
    {
        let mut ranges = vec![];

        for name in names {
            append_ranges(&mut ranges, name.as_ref())?;
        }

        tracing::debug!(scripts = names.len(), ranges = ranges.len(), "script list assembled");

        self.ranges = OnceLock::from(ranges);

        Ok(())
    }

    /// добавить письменность после текущего содержимого, индексы продолжаются с последнего.
    /// при ошибке список не меняется
    pub fn append_script(&mut self, name: &str) -> Result<(), CharmapError>
    {
        // незаданный список не получает Latin: письменность добавляется к пустому
        let mut ranges = self.ranges.get().cloned().unwrap_or_default();
        append_ranges(&mut ranges, name)?;

        self.ranges = OnceLock::from(ranges);

        Ok(())
    }

    /// диапазоны списка
    pub fn ranges(&self) -> &[UnicodeRange]
    {
        self.ranges.get_or_init(|| {
            tracing::debug!("no script set, falling back to {DEFAULT_SCRIPT}");

            resolve_script_ranges(DEFAULT_SCRIPT, 0).unwrap_or_else(|| {
                tracing::error!("default script {DEFAULT_SCRIPT} is missing from the script table");
                vec![]
            })
        })
    }
}

/// дописать диапазоны письменности в конец, продолжая индексы
fn append_ranges(ranges: &mut Vec<UnicodeRange>, name: &str) -> Result<(), CharmapError>
{
    let first_index = ranges.last().map_or(0, |range| range.last_index() + 1);

    match resolve_script_ranges(name, first_index) {
        Some(mut script_ranges) => {
            ranges.append(&mut script_ranges);
            Ok(())
        }
        None => {
            tracing::warn!(script = name, "unknown script");
            Err(CharmapError::UnknownScript(name.to_owned()))
        }
    }
}

impl CodepointList for ScriptCodepointList
{
    /// бинарный поиск диапазона по индексу
    fn get_char(&self, index: usize) -> Option<u32>
    {
        let ranges = self.ranges();
        let pos = ranges.partition_point(|range| range.last_index() < index);

        match ranges.get(pos) {
            Some(range) if range.index_offset <= index => {
                Some(range.start + (index - range.index_offset) as u32)
            }
            _ => None,
        }
    }

    /// линейный поиск: диапазоны разных письменностей не упорядочены между собой,
    /// а самих диапазонов - не больше нескольких сотен
    fn get_index(&self, code: u32) -> Option<usize>
    {
        self.ranges()
            .iter()
            .find(|range| range.contains(code))
            .map(|range| range.index_offset + (code - range.start) as usize)
    }

    fn last_index(&self) -> Option<usize>
    {
        self.ranges().last().map(UnicodeRange::last_index)
    }
}
