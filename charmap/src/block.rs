use crate::codepoint_list::CodepointList;
use crate::error::CharmapError;
use crate::UNICHAR_MAX;

/// непрерывный диапазон кодпоинтов (включительно) - блок Unicode или всё пространство кодпоинтов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockCodepointList
{
    start: u32,
    end: u32,
}

impl BlockCodepointList
{
    /// диапазон start ..= end
    pub fn new(start: u32, end: u32) -> Result<Self, CharmapError>
    {
        if start > end || end > UNICHAR_MAX {
            return Err(CharmapError::InvalidRange { start, end });
        }

        Ok(Self { start, end })
    }

    /// границы из таблицы блоков, проверять нечего
    pub(crate) const fn from_table(start: u32, end: u32) -> Self
    {
        Self { start, end }
    }

    /// все кодпоинты, U+0000 ..= U+10FFFF
    pub fn all() -> Self
    {
        Self {
            start: 0,
            end: UNICHAR_MAX,
        }
    }

    /// первый кодпоинт
    #[inline]
    pub fn start(&self) -> u32
    {
        self.start
    }

    /// последний кодпоинт
    #[inline]
    pub fn end(&self) -> u32
    {
        self.end
    }
}

impl CodepointList for BlockCodepointList
{
    #[inline]
    fn get_char(&self, index: usize) -> Option<u32>
    {
        match index > (self.end - self.start) as usize {
            true => None,
            false => Some(self.start + index as u32),
        }
    }

    #[inline]
    fn get_index(&self, code: u32) -> Option<usize>
    {
        match (self.start ..= self.end).contains(&code) {
            true => Some((code - self.start) as usize),
            false => None,
        }
    }

    #[inline]
    fn last_index(&self) -> Option<usize>
    {
        Some((self.end - self.start) as usize)
    }
}
