use crate::block::BlockCodepointList;
use crate::data::{find_range, UNICODE_BLOCKS};

/// блок Unicode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnicodeBlock
{
    pub start: u32,
    pub end: u32,
    pub name: &'static str,
}

impl UnicodeBlock
{
    /// список кодпоинтов блока
    pub fn codepoint_list(&self) -> BlockCodepointList
    {
        BlockCodepointList::from_table(self.start, self.end)
    }
}

impl From<&(u32, u32, &'static str)> for UnicodeBlock
{
    fn from(&(start, end, name): &(u32, u32, &'static str)) -> Self
    {
        Self { start, end, name }
    }
}

/// все блоки, по возрастанию кодпоинтов
pub fn blocks() -> impl Iterator<Item = UnicodeBlock>
{
    UNICODE_BLOCKS.iter().map(UnicodeBlock::from)
}

/// блок, в который входит кодпоинт
pub fn block_for(code: u32) -> Option<UnicodeBlock>
{
    find_range(UNICODE_BLOCKS, code).map(UnicodeBlock::from)
}

/// блок по названию
pub fn block_by_name(name: &str) -> Option<UnicodeBlock>
{
    UNICODE_BLOCKS
        .iter()
        .find(|&&(_, _, block)| block == name)
        .map(UnicodeBlock::from)
}
