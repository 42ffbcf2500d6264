use crate::data::{find_range, UNICODE_CATEGORIES};
use crate::UNICHAR_MAX;

/// общая категория Unicode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneralCategory
{
    Control,            // Cc
    Format,             // Cf
    Unassigned,         // Cn
    PrivateUse,         // Co
    Surrogate,          // Cs
    LowercaseLetter,    // Ll
    ModifierLetter,     // Lm
    OtherLetter,        // Lo
    TitlecaseLetter,    // Lt
    UppercaseLetter,    // Lu
    SpacingMark,        // Mc
    EnclosingMark,      // Me
    NonSpacingMark,     // Mn
    DecimalNumber,      // Nd
    LetterNumber,       // Nl
    OtherNumber,        // No
    ConnectPunctuation, // Pc
    DashPunctuation,    // Pd
    ClosePunctuation,   // Pe
    FinalPunctuation,   // Pf
    InitialPunctuation, // Pi
    OtherPunctuation,   // Po
    OpenPunctuation,    // Ps
    CurrencySymbol,     // Sc
    ModifierSymbol,     // Sk
    MathSymbol,         // Sm
    OtherSymbol,        // So
    LineSeparator,      // Zl
    ParagraphSeparator, // Zp
    SpaceSeparator,     // Zs
}

impl GeneralCategory
{
    /// название категории для отображения
    pub fn name(&self) -> &'static str
    {
        match self {
            Self::Control => "Other, Control",
            Self::Format => "Other, Format",
            Self::Unassigned => "Other, Not Assigned",
            Self::PrivateUse => "Other, Private Use",
            Self::Surrogate => "Other, Surrogate",
            Self::LowercaseLetter => "Letter, Lowercase",
            Self::ModifierLetter => "Letter, Modifier",
            Self::OtherLetter => "Letter, Other",
            Self::TitlecaseLetter => "Letter, Titlecase",
            Self::UppercaseLetter => "Letter, Uppercase",
            Self::SpacingMark => "Mark, Spacing Combining",
            Self::EnclosingMark => "Mark, Enclosing",
            Self::NonSpacingMark => "Mark, Non-Spacing",
            Self::DecimalNumber => "Number, Decimal Digit",
            Self::LetterNumber => "Number, Letter",
            Self::OtherNumber => "Number, Other",
            Self::ConnectPunctuation => "Punctuation, Connector",
            Self::DashPunctuation => "Punctuation, Dash",
            Self::ClosePunctuation => "Punctuation, Close",
            Self::FinalPunctuation => "Punctuation, Final Quote",
            Self::InitialPunctuation => "Punctuation, Initial Quote",
            Self::OtherPunctuation => "Punctuation, Other",
            Self::OpenPunctuation => "Punctuation, Open",
            Self::CurrencySymbol => "Symbol, Currency",
            Self::ModifierSymbol => "Symbol, Modifier",
            Self::MathSymbol => "Symbol, Math",
            Self::OtherSymbol => "Symbol, Other",
            Self::LineSeparator => "Separator, Line",
            Self::ParagraphSeparator => "Separator, Paragraph",
            Self::SpaceSeparator => "Separator, Space",
        }
    }

    /// комбинируемый знак?
    #[inline]
    pub fn is_mark(&self) -> bool
    {
        matches!(
            self,
            Self::SpacingMark | Self::EnclosingMark | Self::NonSpacingMark
        )
    }
}

/// категория кодпоинта, для пропусков в таблице - Unassigned
pub fn category_for(code: u32) -> GeneralCategory
{
    match find_range(UNICODE_CATEGORIES, code) {
        Some(&(_, _, category)) => category,
        None => GeneralCategory::Unassigned,
    }
}

/// название категории кодпоинта
pub fn category_name(code: u32) -> &'static str
{
    category_for(code).name()
}

/// кодпоинт в пределах U+10FFFF и не суррогат
#[inline]
pub fn validate(code: u32) -> bool
{
    code <= UNICHAR_MAX && (code & 0xFFFF_F800) != 0xD800
}

/// кодпоинт назначен
#[inline]
pub fn is_defined(code: u32) -> bool
{
    category_for(code) != GeneralCategory::Unassigned
}

/// кодпоинт имеет видимое начертание
pub fn is_graphic(code: u32) -> bool
{
    match category_for(code) {
        // знаки, предшествующие числам (Prepended_Concatenation_Mark), отображаются,
        // хотя и относятся к Format
        GeneralCategory::Format => matches!(
            code,
            0x0600 ..= 0x0605 | 0x06DD | 0x070F | 0x0890 ..= 0x0891 | 0x08E2 | 0x110BD | 0x110CD
        ),
        GeneralCategory::Control
        | GeneralCategory::Unassigned
        | GeneralCategory::PrivateUse
        | GeneralCategory::Surrogate
        | GeneralCategory::SpaceSeparator => false,
        _ => true,
    }
}

/// пунктирный круг - основа для отображения комбинируемых знаков
const DOTTED_CIRCLE: char = '\u{25CC}';

/// строка для отображения кодпоинта. None - если отображать нечего
pub fn printable(code: u32) -> Option<String>
{
    let c = char::from_u32(code)?;
    let category = category_for(code);

    if !is_graphic(code) && category != GeneralCategory::PrivateUse {
        return None;
    }

    match category.is_mark() {
        true => Some([DOTTED_CIRCLE, c].iter().collect()),
        false => Some(c.to_string()),
    }
}
