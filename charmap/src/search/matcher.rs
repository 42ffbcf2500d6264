/// приведение к нижнему регистру посимвольно
#[inline]
fn fold(c: char) -> char
{
    c.to_lowercase().next().unwrap_or(c)
}

/// строка поиска, подготовленная для сравнения без учёта регистра
#[derive(Debug, Clone)]
pub struct Needle
{
    chars: Vec<char>,
    whole_word: bool,
}

impl Needle
{
    pub fn new(needle: &str, whole_word: bool) -> Self
    {
        Self {
            chars: needle.chars().map(fold).collect(),
            whole_word,
        }
    }

    /// совпадение начиная с позиции start
    #[inline]
    fn matches_at(&self, haystack: &[char], start: usize) -> bool
    {
        let end = start + self.chars.len();

        if end > haystack.len() {
            return false;
        }

        if self.whole_word {
            let before = start == 0 || haystack[start - 1].is_whitespace();
            let after = end == haystack.len() || haystack[end].is_whitespace();

            if !before || !after {
                return false;
            }
        }

        haystack[start .. end]
            .iter()
            .zip(self.chars.iter())
            .all(|(&h, &n)| fold(h) == n)
    }

    /// есть ли строка поиска в haystack
    pub fn found_in(&self, haystack: &str) -> bool
    {
        if self.chars.is_empty() {
            return false;
        }

        let haystack: Vec<char> = haystack.chars().collect();

        (0 .. haystack.len()).any(|start| self.matches_at(&haystack, start))
    }
}
