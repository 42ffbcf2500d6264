use unicode_charmap::unihan;
use unicode_charmap::{has_nameslist_entry, status_line, NamesList};

#[test]
fn aliases()
{
    let names_list = NamesList::new();

    assert_eq!(names_list.aliases(0x0021), ["factorial", "bang"]);
    assert_eq!(
        names_list.aliases(0x00B7),
        ["midpoint (in typography)", "Georgian comma", "Greek middle dot (ano teleia)"]
    );
    assert!(names_list.aliases(0x0041).is_empty());
}

#[test]
fn formal_aliases()
{
    let names_list = NamesList::new();

    assert_eq!(names_list.aliases(0x0000), ["NULL", "NUL"]);
    assert_eq!(names_list.aliases(0x0020), ["SP"]);
    assert_eq!(names_list.aliases(0x00A0), ["NBSP"]);
    assert_eq!(names_list.aliases(0x01A2), ["LATIN CAPITAL LETTER GHA"]);
}

#[test]
fn notes_and_cross_refs()
{
    let names_list = NamesList::new();

    assert_eq!(
        names_list.notes(0x0020),
        ["sometimes considered a control code", "other space characters: 2000-200A"]
    );
    assert_eq!(
        names_list.cross_refs(0x0020),
        [0x00A0, 0x200B, 0x2060, 0x3000, 0xFEFF]
    );
    assert_eq!(names_list.cross_refs(0x03A9), [0x2126]);
    assert!(names_list.cross_refs(0x00E9).is_empty());
}

#[test]
fn equivalents()
{
    let names_list = NamesList::new();

    assert_eq!(names_list.equivalents(0x00C5), ["0041 030A"]);
    assert_eq!(names_list.equivalents(0x212B), ["00C5"]);
    assert_eq!(names_list.approx_equivalents(0x00A0), ["<noBreak> 0020"]);
    assert_eq!(names_list.approx_equivalents(0x2122), ["<super> 0054 004D"]);
    assert!(names_list.equivalents(0x0041).is_empty());
}

#[test]
fn decompositions_for_every_block()
{
    let names_list = NamesList::new();

    assert_eq!(names_list.equivalents(0x00C0), ["0041 0300"]);
    assert_eq!(names_list.equivalents(0x0622), ["0627 0653"]);
    assert_eq!(names_list.equivalents(0x1E9B), ["017F 0307"]);
    assert_eq!(names_list.approx_equivalents(0xFB01), ["<compat> 0066 0069"]);
    assert_eq!(names_list.approx_equivalents(0x2460), ["<circle> 0031"]);
    assert_eq!(names_list.approx_equivalents(0xFF21), ["<wide> 0041"]);

    // слоги хангыль раскладываются алгоритмически
    assert!(names_list.equivalents(0xAC00).is_empty());
    assert!(!has_nameslist_entry(0xAC00));
}

#[test]
fn singleton_equivalents_refer_to_each_other()
{
    let names_list = NamesList::new();

    assert_eq!(names_list.cross_refs(0x212B), [0x00C5]);
    assert_eq!(names_list.cross_refs(0x00C5), [0x212B]);
    assert_eq!(names_list.cross_refs(0x2126), [0x2127, 0x03A9]);
    assert_eq!(names_list.cross_refs(0x212A), [0x004B]);
}

#[test]
fn repeated_and_interleaved_queries()
{
    let names_list = NamesList::new();

    for _ in 0 .. 3 {
        assert_eq!(names_list.aliases(0xFEFF), ["BYTE ORDER MARK (BOM), ZWNBSP"]);
        assert_eq!(names_list.notes(0x2603), ["weather"]);
        assert_eq!(names_list.aliases(0x00DF), ["Eszett"]);
        assert_eq!(names_list.cross_refs(0x2603), [0x26C4, 0x26C7]);
    }
}

#[test]
fn entries()
{
    assert!(has_nameslist_entry(0x0020));
    assert!(has_nameslist_entry(0x2122));
    assert!(!has_nameslist_entry(0x0041));
    assert!(!has_nameslist_entry(0x10FFFF));
}

#[test]
fn status_lines()
{
    let names_list = NamesList::new();

    assert_eq!(
        status_line(0x0021, &names_list),
        "U+0021 EXCLAMATION MARK   = factorial; bang"
    );
    assert_eq!(
        status_line(0x20AC, &names_list),
        "U+20AC EURO SIGN   \u{2022} currency sign for the European Monetary Union; euro, not ecu"
    );
    assert_eq!(status_line(0x0041, &names_list), "U+0041 LATIN CAPITAL LETTER A");
}

#[cfg(feature = "unihan")]
#[test]
fn status_line_with_definition()
{
    assert_eq!(
        status_line(0x4E00, &NamesList::new()),
        "U+4E00 CJK UNIFIED IDEOGRAPH-4E00   one; a, an; alone"
    );
}

#[cfg(feature = "unihan")]
#[test]
fn unihan_fields()
{
    assert_eq!(unihan::definition(0x4E00), Some("one; a, an; alone"));
    assert_eq!(unihan::mandarin(0x4E2D), Some("zhōng"));
    assert_eq!(unihan::cantonese(0x5927), Some("daai6 taai3"));
    assert_eq!(unihan::japanese_on(0x65E5), Some("NICHI JITSU"));
    assert_eq!(unihan::japanese_kun(0x6C34), Some("MIZU"));
    assert_eq!(unihan::korean(0x99AC), Some("MA"));
    assert_eq!(unihan::tang(0x4E09), Some("*sɑm"));

    // пустое значение - нет значения
    assert_eq!(unihan::tang(0x5927), None);
    assert_eq!(unihan::definition(0x0041), None);
    assert_eq!(unihan::definition(0x4E01), None);

    assert_eq!(unihan::unihan_count(), 12);
}

#[cfg(not(feature = "unihan"))]
#[test]
fn unihan_not_compiled_in()
{
    assert_eq!(unihan::definition(0x4E00), Some(unihan::NOT_COMPILED_IN));
    assert_eq!(unihan::korean(0x0041), Some(unihan::NOT_COMPILED_IN));
    assert_eq!(unihan::unihan_count(), 0);
}
