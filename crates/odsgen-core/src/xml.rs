//! XML escaping and small writing helpers
//!
//! Escaping is memoized per [`XmlEscaper`]; the cache is owned by the
//! caller and bounded, so nothing outlives the document being written.

use std::fmt;

use ahash::AHashMap;
use quick_xml::escape::{escape, partial_escape};

/// Replacement for chars that XML 1.0 forbids
const REPLACEMENT_CHAR: char = '\u{FFFD}';

/// Cache sizing for [`XmlEscaper`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscaperOptions {
    /// Maximum number of cached strings per kind (attribute, content)
    pub capacity: usize,
    /// Longer strings are escaped without being cached
    pub max_cached_len: usize,
}

impl Default for EscaperOptions {
    fn default() -> Self {
        Self {
            capacity: 4096,
            max_cached_len: 64,
        }
    }
}

/// Escapes attribute values and text content.
///
/// In attributes, `& < > ' "` become entities and tab/newline/carriage
/// return become char references. In content only `& < >` are escaped.
/// Other control chars are replaced by U+FFFD in both.
#[derive(Debug, Clone, Default)]
pub struct XmlEscaper {
    options: EscaperOptions,
    attributes: AHashMap<String, String>,
    contents: AHashMap<String, String>,
}

impl XmlEscaper {
    pub fn new(options: EscaperOptions) -> Self {
        Self {
            options,
            attributes: AHashMap::new(),
            contents: AHashMap::new(),
        }
    }

    /// Escape an attribute value
    pub fn escape_attribute(&mut self, s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        // a String sink never fails
        let _ = self.write_attribute(s, &mut out);
        out
    }

    /// Escape text content
    pub fn escape_content(&mut self, s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let _ = self.write_content(s, &mut out);
        out
    }

    /// Write an escaped attribute value to a sink
    pub fn write_attribute<W: fmt::Write + ?Sized>(&mut self, s: &str, out: &mut W) -> fmt::Result {
        if !s.chars().any(is_attribute_special) {
            return out.write_str(s);
        }
        Self::write_cached(&mut self.attributes, self.options, s, out, escape_attribute_raw)
    }

    /// Write escaped text content to a sink
    pub fn write_content<W: fmt::Write + ?Sized>(&mut self, s: &str, out: &mut W) -> fmt::Result {
        if !s.chars().any(is_content_special) {
            return out.write_str(s);
        }
        Self::write_cached(&mut self.contents, self.options, s, out, escape_content_raw)
    }

    /// Number of cached strings
    pub fn cached(&self) -> usize {
        self.attributes.len() + self.contents.len()
    }

    pub fn clear(&mut self) {
        self.attributes.clear();
        self.contents.clear();
    }

    fn write_cached<W: fmt::Write + ?Sized>(
        cache: &mut AHashMap<String, String>,
        options: EscaperOptions,
        s: &str,
        out: &mut W,
        escape_raw: fn(&str) -> String,
    ) -> fmt::Result {
        if s.len() > options.max_cached_len || options.capacity == 0 {
            return out.write_str(&escape_raw(s));
        }
        if let Some(escaped) = cache.get(s) {
            return out.write_str(escaped);
        }
        if cache.len() >= options.capacity {
            log::trace!("XML escaper cache full ({} entries), clearing", cache.len());
            cache.clear();
        }
        let escaped = escape_raw(s);
        out.write_str(&escaped)?;
        cache.insert(s.to_string(), escaped);
        Ok(())
    }
}

fn is_forbidden_control(c: char) -> bool {
    (c as u32) < 0x20 && !matches!(c, '\t' | '\n' | '\r')
}

fn is_attribute_special(c: char) -> bool {
    matches!(c, '&' | '<' | '>' | '\'' | '"') || (c as u32) < 0x20
}

fn is_content_special(c: char) -> bool {
    matches!(c, '&' | '<' | '>') || is_forbidden_control(c)
}

fn escape_attribute_raw(s: &str) -> String {
    let escaped = escape(s);
    let mut out = String::with_capacity(escaped.len() + 8);
    for c in escaped.chars() {
        match c {
            '\t' => out.push_str("&#x9;"),
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            c if is_forbidden_control(c) => out.push(REPLACEMENT_CHAR),
            c => out.push(c),
        }
    }
    out
}

fn escape_content_raw(s: &str) -> String {
    partial_escape(s)
        .chars()
        .map(|c| if is_forbidden_control(c) { REPLACEMENT_CHAR } else { c })
        .collect()
}

/// Helpers to write XML fragments through an [`XmlEscaper`]
#[derive(Debug, Clone, Default)]
pub struct XmlUtil {
    escaper: XmlEscaper,
}

impl XmlUtil {
    pub fn new(escaper: XmlEscaper) -> Self {
        Self { escaper }
    }

    /// Create a util with a fresh escaper
    pub fn with_options(options: EscaperOptions) -> Self {
        Self::new(XmlEscaper::new(options))
    }

    pub fn escaper(&self) -> &XmlEscaper {
        &self.escaper
    }

    pub fn escape_attribute(&mut self, s: &str) -> String {
        self.escaper.escape_attribute(s)
    }

    pub fn escape_content(&mut self, s: &str) -> String {
        self.escaper.escape_content(s)
    }

    /// Write ` name="value"`; `value` must already be escaped
    pub fn append_attribute<W: fmt::Write + ?Sized>(
        &self,
        out: &mut W,
        name: &str,
        value: impl fmt::Display,
    ) -> fmt::Result {
        write!(out, " {name}=\"{value}\"")
    }

    /// Write ` name="value"`, escaping the value
    pub fn append_e_attribute<W: fmt::Write + ?Sized>(
        &mut self,
        out: &mut W,
        name: &str,
        value: &str,
    ) -> fmt::Result {
        write!(out, " {name}=\"")?;
        self.escaper.write_attribute(value, out)?;
        out.write_char('"')
    }

    /// Write escaped text content
    pub fn append_content<W: fmt::Write + ?Sized>(&mut self, out: &mut W, content: &str) -> fmt::Result {
        self.escaper.write_content(content, out)
    }

    /// Write `<name>content</name>`, escaping the content
    pub fn append_tag<W: fmt::Write + ?Sized>(
        &mut self,
        out: &mut W,
        name: &str,
        content: &str,
    ) -> fmt::Result {
        write!(out, "<{name}>")?;
        self.escaper.write_content(content, out)?;
        write!(out, "</{name}>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_attribute() {
        let mut escaper = XmlEscaper::default();
        assert_eq!(escaper.escape_attribute("plain"), "plain");
        assert_eq!(
            escaper.escape_attribute("<a href=\"x\">'b' & c</a>"),
            "&lt;a href=&quot;x&quot;&gt;&apos;b&apos; &amp; c&lt;/a&gt;"
        );
        assert_eq!(escaper.escape_attribute("a\tb\nc\rd"), "a&#x9;b&#xA;c&#xD;d");
        assert_eq!(escaper.escape_attribute("a\u{1}b"), "a\u{FFFD}b");
    }

    #[test]
    fn test_escape_content() {
        let mut escaper = XmlEscaper::default();
        assert_eq!(escaper.escape_content("a 'quoted' \"text\""), "a 'quoted' \"text\"");
        assert_eq!(escaper.escape_content("1 < 2 & 3 > 2"), "1 &lt; 2 &amp; 3 &gt; 2");
        assert_eq!(escaper.escape_content("line\nbreak\ttab"), "line\nbreak\ttab");
        assert_eq!(escaper.escape_content("bell\u{7}"), "bell\u{FFFD}");
    }

    #[test]
    fn test_cache_is_bounded() {
        let mut escaper = XmlEscaper::new(EscaperOptions {
            capacity: 2,
            max_cached_len: 8,
        });
        escaper.escape_content("a&");
        escaper.escape_content("b&");
        assert_eq!(escaper.cached(), 2);
        assert_eq!(escaper.escape_content("c&"), "c&amp;");
        assert_eq!(escaper.cached(), 1);
        // too long to be cached
        escaper.escape_content("a long string & more");
        assert_eq!(escaper.cached(), 1);
        // no special char, no cache
        escaper.escape_content("plain");
        assert_eq!(escaper.cached(), 1);
        escaper.clear();
        assert_eq!(escaper.cached(), 0);
    }

    #[test]
    fn test_cached_result_is_stable() {
        let mut escaper = XmlEscaper::default();
        let first = escaper.escape_attribute("a&b");
        let second = escaper.escape_attribute("a&b");
        assert_eq!(first, second);
        assert_eq!(escaper.cached(), 1);
    }

    #[test]
    fn test_util_helpers() {
        let mut util = XmlUtil::default();
        let mut out = String::new();
        out.push_str("<e");
        util.append_attribute(&mut out, "a", "1").unwrap();
        util.append_e_attribute(&mut out, "b", "x\"y").unwrap();
        out.push('>');
        util.append_tag(&mut out, "t", "<&>").unwrap();
        util.append_content(&mut out, " & ").unwrap();
        out.push_str("</e>");
        assert_eq!(out, "<e a=\"1\" b=\"x&quot;y\"><t>&lt;&amp;&gt;</t> &amp; </e>");
        assert_eq!(util.escape_attribute("'"), "&apos;");
        assert_eq!(util.escape_content("'"), "'");
    }
}
