//! HTML adapter over highlighter segments.

use crate::signals::highlight::Segment;

/// Renders segments as escaped HTML, wrapping marked runs in
/// `<mark class="kudos-{tier}">`.
pub fn to_html(segments: &[Segment]) -> String {
    let mut html = String::new();
    for segment in segments {
        match segment {
            Segment::Plain { .. } => push_escaped(&mut html, segment.text()),
            Segment::Marked { tier, .. } => {
                html.push_str("<mark class=\"kudos-");
                html.push_str(tier.as_str());
                html.push_str("\">");
                push_escaped(&mut html, segment.text());
                html.push_str("</mark>");
            }
        }
    }
    html
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
