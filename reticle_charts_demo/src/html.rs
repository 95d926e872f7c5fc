// Copyright 2026 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tiny HTML report shell around the demo SVGs.

#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) svg: String,
}

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{title}</title>\n"));
    out.push_str(concat!(
        "<style>\n",
        "body { font-family: system-ui, sans-serif; margin: 2em auto; max-width: 60em; }\n",
        "section { margin-bottom: 2.5em; }\n",
        "h2 { margin-bottom: 0.2em; }\n",
        "p { color: #444; margin-top: 0; }\n",
        "svg { background: #fff; border: 1px solid #ddd; }\n",
        "</style>\n</head>\n<body>\n",
    ));
    out.push_str(&format!("<h1>{title}</h1>\n"));
    for section in sections {
        out.push_str("<section>\n");
        out.push_str(&format!("<h2>{}</h2>\n", section.title));
        out.push_str(&format!("<p>{}</p>\n", section.description));
        out.push_str(&section.svg);
        out.push_str("\n</section>\n");
    }
    out.push_str("</body>\n</html>\n");
    out
}
