use core::fmt::Write;

use crate::names::name_for;
use crate::nameslist::NamesList;

/// представления символа в разных кодировках
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Representations
{
    /// байты UTF-8: "0xE2 0x82 0xAC"
    pub utf8: String,
    /// единицы UTF-16: "0xD83D 0xDE00"
    pub utf16: String,
    /// UTF-8 для строк C: "\342\202\254"
    pub c_octal: String,
    /// десятичная сущность XML: "&#8364;", только для допустимых в XML кодпоинтов
    pub xml_entity: Option<String>,
}

impl Representations
{
    /// None для суррогатов и кодпоинтов за пределами U+10FFFF
    pub fn new(code: u32) -> Option<Self>
    {
        let c = char::from_u32(code)?;

        let mut utf8 = [0; 4];
        let utf8 = c.encode_utf8(&mut utf8).as_bytes();

        let mut utf16 = [0; 2];
        let utf16 = c.encode_utf16(&mut utf16);

        let join = |parts: Vec<String>| parts.join(" ");

        let mut c_octal = String::new();
        for byte in utf8 {
            let _ = write!(c_octal, "\\{:03o}", byte);
        }

        let xml_entity = match code {
            0x0001 ..= 0xD7FF | 0xE000 ..= 0xFFFD | 0x10000 ..= 0x10FFFF => {
                Some(format!("&#{};", code))
            }
            _ => None,
        };

        Some(Self {
            utf8: join(utf8.iter().map(|byte| format!("0x{:02X}", byte)).collect()),
            utf16: join(utf16.iter().map(|unit| format!("0x{:04X}", unit)).collect()),
            c_octal,
            xml_entity,
        })
    }
}

/// строка состояния для символа: код, название, определение Unihan,
/// альтернативные названия и примечания
pub fn status_line(code: u32, names_list: &NamesList) -> String
{
    let mut line = format!("U+{:04X} {}", code, name_for(code));

    #[cfg(feature = "unihan")]
    {
        if let Some(definition) = crate::unihan::definition(code) {
            let _ = write!(line, "   {}", definition);
        }
    }

    let aliases = names_list.aliases(code);
    if !aliases.is_empty() {
        let _ = write!(line, "   = {}", aliases.join("; "));
    }

    let notes = names_list.notes(code);
    if !notes.is_empty() {
        let _ = write!(line, "   \u{2022} {}", notes.join("; "));
    }

    line
}
