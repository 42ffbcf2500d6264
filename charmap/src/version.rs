use core::fmt;

use crate::data::{find_range, UNICODE_VERSIONS};

/// версия Unicode, в которой кодпоинт был назначен
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UnicodeVersion
{
    Unassigned,
    V1_1,
    V2_0,
    V2_1,
    V3_0,
    V3_1,
    V3_2,
    V4_0,
    V4_1,
    V5_0,
    V5_1,
    V5_2,
    V6_0,
    V6_1,
    V6_2,
    V6_3,
    V7_0,
    V8_0,
    V9_0,
    V10_0,
    V11_0,
    V12_0,
    V12_1,
    V13_0,
    V14_0,
}

impl UnicodeVersion
{
    /// в виде "major.minor", для неназначенных - пустая строка
    pub fn as_str(&self) -> &'static str
    {
        match self {
            Self::Unassigned => "",
            Self::V1_1 => "1.1",
            Self::V2_0 => "2.0",
            Self::V2_1 => "2.1",
            Self::V3_0 => "3.0",
            Self::V3_1 => "3.1",
            Self::V3_2 => "3.2",
            Self::V4_0 => "4.0",
            Self::V4_1 => "4.1",
            Self::V5_0 => "5.0",
            Self::V5_1 => "5.1",
            Self::V5_2 => "5.2",
            Self::V6_0 => "6.0",
            Self::V6_1 => "6.1",
            Self::V6_2 => "6.2",
            Self::V6_3 => "6.3",
            Self::V7_0 => "7.0",
            Self::V8_0 => "8.0",
            Self::V9_0 => "9.0",
            Self::V10_0 => "10.0",
            Self::V11_0 => "11.0",
            Self::V12_0 => "12.0",
            Self::V12_1 => "12.1",
            Self::V13_0 => "13.0",
            Self::V14_0 => "14.0",
        }
    }
}

impl fmt::Display for UnicodeVersion
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.as_str())
    }
}

/// версия, в которой появился кодпоинт
pub fn version_introduced(code: u32) -> UnicodeVersion
{
    match find_range(UNICODE_VERSIONS, code) {
        Some(&(_, _, version)) => version,
        None => UnicodeVersion::Unassigned,
    }
}
