//! Text decoding for XML files that are not necessarily UTF-8.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};

/// Decode an XML file using its byte order mark, or else the `encoding`
/// named in its XML declaration, or else UTF-8.
///
/// Returns `None` when the declared label is unknown or the bytes are not
/// valid in the chosen encoding.
pub(crate) fn decode_xml(bytes: &[u8]) -> Option<Cow<'_, str>> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return encoding.decode_without_bom_handling_and_without_replacement(&bytes[bom_len..]);
    }

    let encoding = match declared_encoding(bytes) {
        Some(label) => Encoding::for_label(label)?,
        None => UTF_8,
    };
    encoding.decode_without_bom_handling_and_without_replacement(bytes)
}

/// The raw `encoding="..."` value of a leading `<?xml ... ?>` declaration.
fn declared_encoding(bytes: &[u8]) -> Option<&[u8]> {
    let rest = bytes.strip_prefix(b"<?xml")?;
    let end = rest.windows(2).position(|w| w == b"?>")?;
    let declaration = &rest[..end];

    let start = declaration.windows(8).position(|w| w == b"encoding")? + 8;
    let value = declaration[start..]
        .trim_ascii_start()
        .strip_prefix(b"=")?
        .trim_ascii_start();

    let quote = *value.first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let value = &value[1..];
    let close = value.iter().position(|&b| b == quote)?;
    Some(&value[..close])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_utf8_without_declaration() {
        assert_eq!(decode_xml("<a>é</a>".as_bytes()).as_deref(), Some("<a>é</a>"));
    }

    #[test]
    fn honours_declared_latin1() {
        let bytes = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?><a>caf\xe9</a>";
        let text = decode_xml(bytes).unwrap();
        assert!(text.ends_with("<a>café</a>"), "{text}");
    }

    #[test]
    fn single_quoted_label() {
        assert_eq!(
            declared_encoding(b"<?xml version='1.0' encoding = 'windows-1252' ?><a/>"),
            Some(&b"windows-1252"[..])
        );
    }

    #[test]
    fn strips_utf8_bom() {
        assert_eq!(decode_xml(b"\xef\xbb\xbf<a/>").as_deref(), Some("<a/>"));
    }

    #[test]
    fn invalid_utf8_is_undecodable() {
        assert_eq!(decode_xml(b"<a>caf\xe9</a>"), None);
    }

    #[test]
    fn unknown_label_is_undecodable() {
        assert_eq!(decode_xml(b"<?xml version=\"1.0\" encoding=\"x-made-up\"?><a/>"), None);
    }
}
