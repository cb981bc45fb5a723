//! Preview image extraction from raw HTML blocks.

use super::common::create_xml_reader;
use quick_xml::{
    escape::unescape,
    events::{BytesStart, Event},
};

/// Return the `src` of the first `<img>` in `markup`.
///
/// Markup without an image, an image without `src`, and markup the reader
/// cannot get through all yield `None`.
pub fn first_img_src(markup: &str) -> Option<String> {
    let mut reader = create_xml_reader(markup.as_bytes());

    loop {
        match reader.read_event() {
            Ok(Event::Start(elem) | Event::Empty(elem)) if is_img(&elem) => {
                return img_src(&elem);
            }
            Ok(Event::Eof) | Err(_) => return None,
            Ok(_) => {}
        }
    }
}

#[inline]
fn is_img(elem: &BytesStart<'_>) -> bool {
    elem.name().as_ref().eq_ignore_ascii_case(b"img")
}

fn img_src(elem: &BytesStart<'_>) -> Option<String> {
    elem.html_attributes()
        .flatten()
        .find(|attr| attr.key.as_ref().eq_ignore_ascii_case(b"src"))
        .map(|attr| {
            let raw = String::from_utf8_lossy(&attr.value).into_owned();
            match unescape(&raw) {
                Ok(value) => value.into_owned(),
                Err(_) => raw,
            }
        })
}
