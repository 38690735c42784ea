// tests/common/mod.rs
//
// Synthetic broker pages: a grid payload escaped into an inline script call.
#![allow(dead_code)]

pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn row_xml(cells: &[&str]) -> String {
    let mut out = String::from("<row>");
    for c in cells {
        out.push_str(&format!("<cell><![CDATA[{c}]]></cell>"));
    }
    out.push_str("</row>");
    out
}

/// Full page around a `<rows>` payload made of the given rows.
pub fn page(rows: &[Vec<&str>]) -> String {
    let xml: String = rows.iter().map(|r| row_xml(r)).collect();
    page_with_payload(&format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<rows>\n{xml}\n</rows>"))
}

pub fn page_with_payload(xml: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html><head><title>Portfel</title></head><body>\n\
         <div id=\"gridbox\" style=\"width:100%\"></div>\n\
         <script type=\"text/javascript\">\n\
         mygrid = new dhtmlXGridObject('gridbox');\n\
         mygrid.setHeader(\"Walor,Zmiana,Liczba\");\n\
         mygrid.init();\n\
         mygrid.parse(\"{}\");\n\
         </script>\n</body></html>",
        escape(xml)
    )
}

pub fn holding<'a>(name_cell: &'a str, units: &'a str, price: &'a str) -> Vec<&'a str> {
    vec!["", name_cell, "0,0", units, "100,0", price, "1000,0", "10,0", "1,0", "5,0", "30"]
}
