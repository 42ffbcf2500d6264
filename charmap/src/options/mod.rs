/// направление поиска
#[repr(i8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction
{
    Backward = -1, // к началу списка
    Forward = 1,   // к концу списка
}

/// параметры поиска
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SearchOptions
{
    /// направление
    pub direction: Direction,
    /// искать только целые слова (разделённые пробелами)
    pub whole_word: bool,
    /// искать также в аннотациях NamesList и Unihan
    pub annotations: bool,
}

impl Default for Direction
{
    fn default() -> Self
    {
        Self::Forward
    }
}

impl Default for SearchOptions
{
    fn default() -> Self
    {
        Self {
            direction: Default::default(),
            whole_word: false,
            annotations: false,
        }
    }
}
