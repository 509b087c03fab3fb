//! Character normalization for the dataset's name field.
//!
//! The dataset is Latin-1 text. Characters outside Latin-1 are written as
//! bracketed codes such as `<c^>` (č) or `<SCH>` (Š). Names are normalized by
//! replacing every such code with the Unicode character it stands for.

/// Escape sequences and the characters they encode.
///
/// No key is a substring of another key, so table order does not affect the
/// result.
pub static TRANSLATIONS: &[(&str, char)] = &[
    ("<A/>", '\u{0100}'),
    ("<a/>", '\u{0101}'),
    ("<Â>", '\u{0102}'),
    ("<â>", '\u{0103}'),
    ("<A,>", '\u{0104}'),
    ("<a,>", '\u{0105}'),
    ("<C´>", '\u{0106}'),
    ("<c´>", '\u{0107}'),
    ("<C^>", '\u{010c}'),
    ("<CH>", '\u{010c}'),
    ("<c^>", '\u{010d}'),
    ("<ch>", '\u{010d}'),
    ("<d´>", '\u{010f}'),
    ("<Ð>", '\u{0110}'),
    ("<DJ>", '\u{0110}'),
    ("<ð>", '\u{0111}'),
    ("<dj>", '\u{0111}'),
    ("<E/>", '\u{0112}'),
    ("<e/>", '\u{0113}'),
    ("<E°>", '\u{0116}'),
    ("<e°>", '\u{0117}'),
    ("<E,>", '\u{0118}'),
    ("<e,>", '\u{0119}'),
    ("<Ê>", '\u{011a}'),
    ("<ê>", '\u{011b}'),
    ("<G^>", '\u{011e}'),
    ("<g^>", '\u{011f}'),
    ("<G,>", '\u{0122}'),
    ("<g´>", '\u{0123}'),
    ("<I/>", '\u{012a}'),
    ("<i/>", '\u{012b}'),
    ("<I°>", '\u{0130}'),
    ("<i>", '\u{0131}'),
    ("<IJ>", '\u{0132}'),
    ("<ij>", '\u{0133}'),
    ("<K,>", '\u{0136}'),
    ("<k,>", '\u{0137}'),
    ("<L,>", '\u{013b}'),
    ("<l,>", '\u{013c}'),
    ("<L´>", '\u{013d}'),
    ("<l´>", '\u{013e}'),
    ("<L/>", '\u{0141}'),
    ("<l/>", '\u{0142}'),
    ("<N,>", '\u{0145}'),
    ("<n,>", '\u{0146}'),
    ("<N^>", '\u{0147}'),
    ("<n^>", '\u{0148}'),
    ("<Ö>", '\u{0150}'),
    ("<ö>", '\u{0151}'),
    ("<OE>", '\u{0152}'),
    ("<oe>", '\u{0153}'),
    ("<R^>", '\u{0158}'),
    ("<r^>", '\u{0159}'),
    ("<S,>", '\u{015e}'),
    ("<s,>", '\u{015f}'),
    ("<S^>", '\u{0160}'),
    ("<SCH>", '\u{0160}'),
    ("<SH>", '\u{0160}'),
    ("<s^>", '\u{0161}'),
    ("<sch>", '\u{0161}'),
    ("<sh>", '\u{0161}'),
    ("<T,>", '\u{0162}'),
    ("<t,>", '\u{0163}'),
    ("<t´>", '\u{0165}'),
    ("<U/>", '\u{016a}'),
    ("<u/>", '\u{016b}'),
    ("<U°>", '\u{016e}'),
    ("<u°>", '\u{016f}'),
    ("<U,>", '\u{0172}'),
    ("<u,>", '\u{0173}'),
    ("<Z°>", '\u{017b}'),
    ("<z°>", '\u{017c}'),
    ("<Z^>", '\u{017d}'),
    ("<z^>", '\u{017e}'),
];

/// Some entries store š as Windows-1252 byte 0x9A, which Latin-1 decodes to
/// the C1 control U+009A.
const MISENCODED_S_CARON: char = '\u{009a}';
const S_CARON: char = '\u{0161}';

/// Decode Latin-1 bytes. Every byte maps to the code point of the same value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Replace every escape sequence in `raw` and repair mis-encoded š.
///
/// Unknown sequences are left as they are.
pub fn normalize_name(raw: &str) -> String {
    let mut name = raw.to_string();

    for &(key, target) in TRANSLATIONS {
        if name.contains(key) {
            name = name.replace(key, target.encode_utf8(&mut [0; 4]));
        }
    }

    if name.contains(MISENCODED_S_CARON) {
        name = name.replace(MISENCODED_S_CARON, S_CARON.encode_utf8(&mut [0; 4]));
    }

    name
}
