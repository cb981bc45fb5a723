use anyhow::Result;
use quick_xml::{
    Reader, Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io::Cursor;

pub type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Reader tolerant of HTML: unclosed and mismatched tags are not errors.
#[inline]
pub fn create_xml_reader(content: &[u8]) -> Reader<&[u8]> {
    let mut reader = Reader::from_reader(content);
    reader.config_mut().trim_text(false);
    reader.config_mut().enable_all_checks(false);
    reader
}

/// Writer indenting nested elements by `indent` spaces.
#[inline]
pub fn create_xml_writer(capacity: usize, indent: usize) -> XmlWriter {
    Writer::new_with_indent(Cursor::new(Vec::with_capacity(capacity)), b' ', indent)
}

/// Write a text element: `<tag>text</tag>`.
#[inline]
pub fn write_text_element(writer: &mut XmlWriter, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finish(writer: XmlWriter) -> String {
        String::from_utf8(writer.into_inner().into_inner()).unwrap()
    }

    #[test]
    fn test_write_text_element() {
        let mut writer = create_xml_writer(64, 2);
        write_text_element(&mut writer, "loc", "https://example.com/").unwrap();
        assert_eq!(finish(writer), "<loc>https://example.com/</loc>");
    }

    #[test]
    fn test_write_text_element_escapes() {
        let mut writer = create_xml_writer(64, 2);
        write_text_element(&mut writer, "loc", "https://example.com/?a=1&b=<2>").unwrap();
        assert_eq!(
            finish(writer),
            "<loc>https://example.com/?a=1&amp;b=&lt;2&gt;</loc>"
        );
    }

    #[test]
    fn test_reader_tolerates_unclosed_tags() {
        let mut reader = create_xml_reader(b"<p><br><img src=\"a.png\"></div>");
        let mut starts = 0;
        loop {
            match reader.read_event() {
                Ok(Event::Start(_)) => starts += 1,
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => panic!("unexpected error: {e:?}"),
            }
        }
        assert_eq!(starts, 3);
    }
}
