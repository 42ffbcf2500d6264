use thiserror::Error;

/// ошибки построения списков кодпоинтов
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CharmapError
{
    /// письменности нет в таблице
    #[error("unknown script: {0}")]
    UnknownScript(String),
    /// блока нет в таблице
    #[error("unknown block: {0}")]
    UnknownBlock(String),
    /// начало диапазона больше конца, или диапазон выходит за U+10FFFF
    #[error("invalid codepoint range U+{start:04X} .. U+{end:04X}")]
    InvalidRange { start: u32, end: u32 },
}
