// src/specs/grid.rs
//! Locate the grid payload inside a fetched document.
//!
//! The page embeds the holdings table as
//! `mygrid.parse("&lt;rows&gt;&lt;row&gt;…");` somewhere in an inline script.
//! The literal may span lines; it ends at the first `"` followed by `);`.

use regex::Regex;

use crate::core::html::unescape_entities;
use crate::error::CaptureError;

use super::GridSpec;

/// Return the entity-decoded payload of the single `<function>.parse("…");` call.
/// Does not check that the payload is XML; `rows::parse_rows` does.
pub fn extract_payload(doc: &str, spec: &GridSpec) -> Result<String, CaptureError> {
    let not_found = || CaptureError::GridNotFound { function: spec.function.clone() };

    let pattern = format!(
        r#"(?s){}\.parse\("(?P<payload>.*?)"\s*\);"#,
        regex::escape(&spec.function)
    );
    // An escaped name always compiles unless it blows the size limit,
    // and no page carries a call with such a name.
    let re = Regex::new(&pattern).map_err(|_| not_found())?;

    let mut found = re.captures_iter(doc);
    let first = found.next().ok_or_else(not_found)?;

    let extra = found.count();
    if extra > 0 {
        return Err(CaptureError::GridAmbiguous {
            function: spec.function.clone(),
            count: extra + 1,
        });
    }

    Ok(unescape_entities(&first["payload"]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(script: &str) -> String {
        format!(
            "<html><body><div id=\"gridbox\"></div>\n<script>\n{script}\n</script></body></html>"
        )
    }

    #[test]
    fn finds_and_unescapes_payload() {
        let doc = page(r#"mygrid = new dhtmlXGridObject('gridbox'); mygrid.parse("&lt;rows&gt;&lt;row&gt;&lt;cell&gt;A&amp;amp;B&lt;/cell&gt;&lt;/row&gt;&lt;/rows&gt;");"#);
        let payload = extract_payload(&doc, &GridSpec::default()).unwrap();
        assert_eq!(payload, "<rows><row><cell>A&amp;B</cell></row></rows>");
    }

    #[test]
    fn payload_may_span_lines_and_hold_quotes() {
        let doc = page("mygrid.parse(\"&lt;rows&gt;\n&lt;row id=&quot;1&quot;&gt;\\\"x\\\"&lt;/row&gt;\n&lt;/rows&gt;\" );\nfoo();");
        let payload = extract_payload(&doc, &GridSpec::default()).unwrap();
        assert_eq!(payload, "<rows>\n<row id=\"1\">\\\"x\\\"</row>\n</rows>");
    }

    #[test]
    fn stops_at_first_closing_call() {
        let doc = page(r#"mygrid.parse("&lt;rows/&gt;"); other.parse("nope");"#);
        assert_eq!(extract_payload(&doc, &GridSpec::default()).unwrap(), "<rows/>");
    }

    #[test]
    fn missing_call_is_not_found() {
        let err = extract_payload(&page("var x = 1;"), &GridSpec::default()).unwrap_err();
        assert_eq!(err, CaptureError::GridNotFound { function: s!("mygrid") });

        // other object names do not count
        let err = extract_payload(&page(r#"grid2.parse("&lt;rows/&gt;");"#), &GridSpec::default())
            .unwrap_err();
        assert!(matches!(err, CaptureError::GridNotFound { .. }));
    }

    #[test]
    fn two_calls_are_ambiguous() {
        let doc = page(r#"mygrid.parse("&lt;rows/&gt;"); mygrid.parse("&lt;rows/&gt;");"#);
        let err = extract_payload(&doc, &GridSpec::default()).unwrap_err();
        assert_eq!(err, CaptureError::GridAmbiguous { function: s!("mygrid"), count: 2 });
    }

    #[test]
    fn custom_function_name() {
        let doc = page(r#"holdings.parse("&lt;rows/&gt;");"#);
        let spec = GridSpec::with_function("holdings");
        assert_eq!(extract_payload(&doc, &spec).unwrap(), "<rows/>");
    }

    #[test]
    fn extraction_is_repeatable() {
        let doc = page(r#"mygrid.parse("&lt;rows&gt;&lt;/rows&gt;");"#);
        let a = extract_payload(&doc, &GridSpec::default()).unwrap();
        let b = extract_payload(&doc, &GridSpec::default()).unwrap();
        assert_eq!(a, b);
    }
}
