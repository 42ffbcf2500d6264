use crate::block::BlockCodepointList;
use crate::blocks::{block_by_name, blocks};
use crate::codepoint_list::CodepointList;
use crate::error::CharmapError;
use crate::script::{list_scripts, ScriptCodepointList};

/// название раздела со всеми кодпоинтами в режиме блоков
pub const ALL_CHAPTER: &str = "All";

/// как делится каталог на разделы
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ChaptersMode
{
    /// по письменностям
    #[default]
    Script,
    /// по блокам, первым идёт раздел "All"
    Block,
}

/// названия разделов каталога
pub fn chapter_names(mode: ChaptersMode) -> Vec<&'static str>
{
    match mode {
        ChaptersMode::Script => list_scripts().to_vec(),
        ChaptersMode::Block => core::iter::once(ALL_CHAPTER)
            .chain(blocks().map(|block| block.name))
            .collect(),
    }
}

/// выбранный раздел каталога: диапазон кодпоинтов или набор письменностей
#[derive(Debug, Clone)]
pub enum Catalog
{
    Block(BlockCodepointList),
    Script(ScriptCodepointList),
}

impl Catalog
{
    /// все кодпоинты
    pub fn all() -> Self
    {
        Self::Block(BlockCodepointList::all())
    }

    /// блок Unicode по названию
    pub fn block(name: &str) -> Result<Self, CharmapError>
    {
        let block = block_by_name(name).ok_or_else(|| {
            tracing::warn!(block = name, "unknown block");
            CharmapError::UnknownBlock(name.to_owned())
        })?;

        tracing::debug!(
            block = name,
            start = block.start,
            end = block.end,
            "block chapter selected"
        );

        Ok(Self::Block(block.codepoint_list()))
    }

    /// одна письменность
    pub fn script(name: &str) -> Result<Self, CharmapError>
    {
        Ok(Self::Script(ScriptCodepointList::with_script(name)?))
    }

    /// несколько письменностей, в заданном порядке
    pub fn scripts<S: AsRef<str>>(names: &[S]) -> Result<Self, CharmapError>
    {
        Ok(Self::Script(ScriptCodepointList::with_scripts(names)?))
    }

    /// раздел по названию в заданном режиме
    pub fn chapter(mode: ChaptersMode, name: &str) -> Result<Self, CharmapError>
    {
        match mode {
            ChaptersMode::Script => Self::script(name),
            ChaptersMode::Block if name == ALL_CHAPTER => Ok(Self::all()),
            ChaptersMode::Block => Self::block(name),
        }
    }
}

impl From<BlockCodepointList> for Catalog
{
    fn from(list: BlockCodepointList) -> Self
    {
        Self::Block(list)
    }
}

impl From<ScriptCodepointList> for Catalog
{
    fn from(list: ScriptCodepointList) -> Self
    {
        Self::Script(list)
    }
}

impl CodepointList for Catalog
{
    #[inline]
    fn get_char(&self, index: usize) -> Option<u32>
    {
        match self {
            Self::Block(list) => list.get_char(index),
            Self::Script(list) => list.get_char(index),
        }
    }

    #[inline]
    fn get_index(&self, code: u32) -> Option<usize>
    {
        match self {
            Self::Block(list) => list.get_index(code),
            Self::Script(list) => list.get_index(code),
        }
    }

    #[inline]
    fn last_index(&self) -> Option<usize>
    {
        match self {
            Self::Block(list) => list.last_index(),
            Self::Script(list) => list.last_index(),
        }
    }
}
