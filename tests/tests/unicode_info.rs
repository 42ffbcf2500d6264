use unicode_charmap::{
    category_for, category_name, data_name, is_defined, is_graphic, name_count, name_for,
    printable, validate, version_introduced, GeneralCategory, Representations, UnicodeVersion,
    NOT_ASSIGNED, UNICHAR_MAX,
};

#[test]
fn table_names()
{
    assert_eq!(name_for(0x0041), "LATIN CAPITAL LETTER A");
    assert_eq!(name_for(0x00E9), "LATIN SMALL LETTER E WITH ACUTE");
    assert_eq!(name_for(0x20AC), "EURO SIGN");
    assert_eq!(name_for(0x1F600), "GRINNING FACE");
    assert_eq!(name_for(0x0000), "<control>");

    assert_eq!(data_name(0x0041), Some("LATIN CAPITAL LETTER A"));
    assert!(name_count() > 30_000);
}

#[test]
fn names_outside_of_latin()
{
    assert_eq!(name_for(0x0627), "ARABIC LETTER ALEF");
    assert_eq!(name_for(0x0905), "DEVANAGARI LETTER A");
    assert_eq!(name_for(0x0E01), "THAI CHARACTER KO KAI");
    assert_eq!(name_for(0x10D0), "GEORGIAN LETTER AN");
    assert_eq!(name_for(0x13A0), "CHEROKEE LETTER A");
    assert_eq!(name_for(0x1F980), "CRAB");
}

#[test]
fn every_assigned_codepoint_has_a_name()
{
    for code in 0 ..= UNICHAR_MAX {
        match category_for(code) {
            GeneralCategory::Unassigned
            | GeneralCategory::Control
            | GeneralCategory::PrivateUse
            | GeneralCategory::Surrogate => continue,
            _ => (),
        }

        let name = name_for(code);

        assert!(name != NOT_ASSIGNED && !name.starts_with('<'), "U+{:04X} {}", code, name);
    }
}

#[test]
fn algorithmic_names()
{
    assert_eq!(name_for(0xAC00), "HANGUL SYLLABLE GA");
    assert_eq!(name_for(0xD7A3), "HANGUL SYLLABLE HIH");
    assert_eq!(name_for(0x4E00), "CJK UNIFIED IDEOGRAPH-4E00");
    assert_eq!(name_for(0x20000), "CJK UNIFIED IDEOGRAPH-20000");
    assert_eq!(name_for(0xF900), "CJK COMPATIBILITY IDEOGRAPH-F900");
    assert_eq!(name_for(0x17000), "TANGUT IDEOGRAPH-17000");
    assert_eq!(name_for(0x18800), "TANGUT COMPONENT-001");
    assert_eq!(name_for(0x18AFF), "TANGUT COMPONENT-768");
    assert_eq!(name_for(0x18B00), "KHITAN SMALL SCRIPT CHARACTER-18B00");
    assert_eq!(name_for(0x1B170), "NUSHU CHARACTER-1B170");

    // вычисляемых названий в таблице нет
    assert_eq!(data_name(0xAC00), None);
    assert_eq!(data_name(0x4E00), None);
}

#[test]
fn range_labels()
{
    assert_eq!(name_for(0xD800), "<Non Private Use High Surrogate>");
    assert_eq!(name_for(0xDB80), "<Private Use High Surrogate>");
    assert_eq!(name_for(0xDC00), "<Low Surrogate>");
    assert_eq!(name_for(0xE000), "<Private Use>");
    assert_eq!(name_for(0xF0000), "<Plane 15 Private Use>");
    assert_eq!(name_for(0x10FFFD), "<Plane 16 Private Use>");
    assert_eq!(name_for(0x0378), NOT_ASSIGNED);
    assert_eq!(name_for(0x10FFFF), NOT_ASSIGNED);
}

#[test]
fn categories()
{
    assert_eq!(category_for(0x0041), GeneralCategory::UppercaseLetter);
    assert_eq!(category_for(0x0061), GeneralCategory::LowercaseLetter);
    assert_eq!(category_for(0x0020), GeneralCategory::SpaceSeparator);
    assert_eq!(category_for(0x0301), GeneralCategory::NonSpacingMark);
    assert_eq!(category_for(0x20AC), GeneralCategory::CurrencySymbol);
    assert_eq!(category_for(0x4E00), GeneralCategory::OtherLetter);
    assert_eq!(category_for(0xD800), GeneralCategory::Surrogate);
    assert_eq!(category_for(0xE000), GeneralCategory::PrivateUse);
    assert_eq!(category_for(0x0378), GeneralCategory::Unassigned);

    assert_eq!(category_name(0x0041), "Letter, Uppercase");
    assert_eq!(category_name(0x0378), "Other, Not Assigned");
}

#[test]
fn graphic_and_defined()
{
    assert!(is_graphic(0x0041));
    assert!(is_graphic(0x0301));
    assert!(!is_graphic(0x0020));
    assert!(!is_graphic(0x0007));
    assert!(!is_graphic(0xE000));
    // Format, но отображается
    assert!(is_graphic(0x0600));
    assert!(!is_graphic(0x200B));

    assert!(is_defined(0x0041));
    assert!(is_defined(0xE000));
    assert!(!is_defined(0x0378));
}

#[test]
fn validation()
{
    assert!(validate(0x0000));
    assert!(validate(0xD7FF));
    assert!(!validate(0xD800));
    assert!(!validate(0xDFFF));
    assert!(validate(0xE000));
    assert!(validate(0x10FFFF));
    assert!(!validate(0x110000));
}

#[test]
fn printable_strings()
{
    assert_eq!(printable(0x0041).as_deref(), Some("A"));
    assert_eq!(printable(0x0301).as_deref(), Some("\u{25CC}\u{0301}"));
    assert_eq!(printable(0xF0000).as_deref(), Some("\u{F0000}"));
    assert_eq!(printable(0x0020), None);
    assert_eq!(printable(0x0378), None);
    assert_eq!(printable(0x110000), None);
}

#[test]
fn versions()
{
    assert_eq!(version_introduced(0x0041), UnicodeVersion::V1_1);
    assert_eq!(version_introduced(0x20AC), UnicodeVersion::V2_1);
    assert_eq!(version_introduced(0x1F600), UnicodeVersion::V6_1);
    assert_eq!(version_introduced(0x0890), UnicodeVersion::V14_0);
    assert_eq!(version_introduced(0x0378), UnicodeVersion::Unassigned);

    assert_eq!(UnicodeVersion::V2_1.as_str(), "2.1");
    assert_eq!(UnicodeVersion::V14_0.to_string(), "14.0");
    assert!(UnicodeVersion::V1_1 < UnicodeVersion::V14_0);
}

#[test]
fn representations()
{
    let euro = Representations::new(0x20AC).unwrap();

    assert_eq!(euro.utf8, "0xE2 0x82 0xAC");
    assert_eq!(euro.utf16, "0x20AC");
    assert_eq!(euro.c_octal, "\\342\\202\\254");
    assert_eq!(euro.xml_entity.as_deref(), Some("&#8364;"));

    let grinning = Representations::new(0x1F600).unwrap();

    assert_eq!(grinning.utf8, "0xF0 0x9F 0x98 0x80");
    assert_eq!(grinning.utf16, "0xD83D 0xDE00");

    assert_eq!(Representations::new(0x0000).unwrap().xml_entity, None);
    assert_eq!(Representations::new(0xFFFE).unwrap().xml_entity, None);
    assert!(Representations::new(0xD800).is_none());
}
