//! Escaping for the pieces of a locator that end up in a request URL.
//!
//! Commas, colons and parentheses carry the locator grammar, so they pass
//! through untouched. Everything that would end a query value or path
//! segment early is percent-encoded.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'?');

const PATH_SEGMENT: &AsciiSet = &QUERY_VALUE.add(b'/');

pub(crate) fn query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

pub(crate) fn path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grammar_punctuation_is_kept() {
        assert_eq!(
            query_value("status:SUCCESS,count:5,build(id,status)"),
            "status:SUCCESS,count:5,build(id,status)"
        );
    }

    #[test]
    fn query_delimiters_are_escaped() {
        assert_eq!(query_value("branch:fix#12"), "branch:fix%2312");
        assert_eq!(query_value("project:R&D"), "project:R%26D");
        assert_eq!(query_value("a b?c"), "a%20b%3Fc");
        assert_eq!(query_value("100%"), "100%25");
    }

    #[test]
    fn offset_plus_is_escaped() {
        assert_eq!(
            query_value("sinceDate:20151022T101010+0300"),
            "sinceDate:20151022T101010%2B0300"
        );
    }

    #[test]
    fn path_segment_escapes_slash() {
        assert_eq!(path_segment("name:Web/API"), "name:Web%2FAPI");
        assert_eq!(query_value("name:Web/API"), "name:Web/API");
    }
}
