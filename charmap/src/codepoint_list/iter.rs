use super::CodepointList;

/// итератор по кодпоинтам списка
pub struct CodepointsIter<'a, L: CodepointList + ?Sized>
{
    list: &'a L,
    /// следующий индекс с начала
    front: usize,
    /// количество ещё не выданных кодпоинтов
    remaining: usize,
}

impl<'a, L: CodepointList + ?Sized> CodepointsIter<'a, L>
{
    pub fn new(list: &'a L) -> Self
    {
        Self {
            list,
            front: 0,
            remaining: list.len(),
        }
    }
}

impl<'a, L: CodepointList + ?Sized> Iterator for CodepointsIter<'a, L>
{
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<Self::Item>
    {
        if self.remaining == 0 {
            return None;
        }

        let code = self.list.get_char(self.front)?;

        self.front += 1;
        self.remaining -= 1;

        Some(code)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>)
    {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, L: CodepointList + ?Sized> DoubleEndedIterator for CodepointsIter<'a, L>
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item>
    {
        if self.remaining == 0 {
            return None;
        }

        let code = self.list.get_char(self.front + self.remaining - 1)?;
        self.remaining -= 1;

        Some(code)
    }
}

impl<'a, L: CodepointList + ?Sized> ExactSizeIterator for CodepointsIter<'a, L> {}
