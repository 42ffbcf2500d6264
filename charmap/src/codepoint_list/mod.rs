mod iter;

pub use iter::CodepointsIter;

/// последовательность кодпоинтов с доступом по индексу.
///
/// порядок кодпоинтов не обязан быть возрастающим, но повторные запросы всегда дают один и тот же
/// результат: `get_index(get_char(i)) == Some(i)` для любого `i` от 0 до `last_index()`
pub trait CodepointList
{
    /// кодпоинт по индексу, `None` - если индекс за пределами списка
    fn get_char(&self, index: usize) -> Option<u32>;

    /// индекс кодпоинта, `None` - если кодпоинт не входит в список
    fn get_index(&self, code: u32) -> Option<usize>;

    /// последний допустимый индекс, `None` для пустого списка
    fn last_index(&self) -> Option<usize>;

    /// количество кодпоинтов
    #[inline]
    fn len(&self) -> usize
    {
        self.last_index().map_or(0, |last| last + 1)
    }

    #[inline]
    fn is_empty(&self) -> bool
    {
        self.last_index().is_none()
    }

    /// итератор по кодпоинтам в порядке индексов
    fn iter(&self) -> CodepointsIter<'_, Self>
    where
        Self: Sized,
    {
        CodepointsIter::new(self)
    }
}

impl<T: CodepointList + ?Sized> CodepointList for &T
{
    #[inline]
    fn get_char(&self, index: usize) -> Option<u32>
    {
        (**self).get_char(index)
    }

    #[inline]
    fn get_index(&self, code: u32) -> Option<usize>
    {
        (**self).get_index(code)
    }

    #[inline]
    fn last_index(&self) -> Option<usize>
    {
        (**self).last_index()
    }
}
