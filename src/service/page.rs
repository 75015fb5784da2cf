//! HTML rendering for the form service

use crate::distribution::DistributionKind;
use crate::output::text::format_statistic;
use crate::stats::StatisticsRecord;
use std::fmt::Write;

/// One rendered distribution on the result page
#[derive(Debug, Clone)]
pub struct SlotResult {
    pub slot: u8,
    pub title: String,
    /// Path under `/static/`
    pub image_url: String,
    pub stats: Option<StatisticsRecord>,
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Full page: the form, followed by any results
pub fn render_page(results: &[SlotResult], compare: bool) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Randomness Simulator</title>\n</head>\n<body>\n");
    html.push_str("<h1>Randomness Simulator</h1>\n");
    render_form(&mut html, compare);

    for result in results {
        render_result(&mut html, result);
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_form(html: &mut String, compare: bool) {
    html.push_str("<form method=\"post\" action=\"/\">\n");
    let _ = writeln!(
        html,
        "<label>Mode <select name=\"mode\"><option value=\"single\"{}>single</option>\
         <option value=\"compare\"{}>compare</option></select></label>",
        if compare { "" } else { " selected" },
        if compare { " selected" } else { "" },
    );
    render_slot_fields(html, 1, DistributionKind::Normal);
    render_slot_fields(html, 2, DistributionKind::Uniform);
    html.push_str("<button type=\"submit\">Generate</button>\n</form>\n");
}

fn render_slot_fields(html: &mut String, slot: u8, selected: DistributionKind) {
    let _ = writeln!(html, "<fieldset><legend>Distribution {}</legend>", slot);
    let _ = write!(html, "<select name=\"dist{}\">", slot);
    for kind in DistributionKind::ALL {
        let _ = write!(
            html,
            "<option value=\"{}\"{}>{}</option>",
            kind.tag(),
            if kind == selected { " selected" } else { "" },
            kind.title()
        );
    }
    html.push_str("</select>\n");

    let inputs = [
        ("size", "500"),
        ("low", "0"),
        ("high", "1"),
        ("mean", "0"),
        ("std", "1"),
        ("n", "10"),
        ("p", "0.5"),
        ("lam", "4"),
    ];
    for (name, default) in inputs {
        let _ = writeln!(
            html,
            "<label>{name} <input name=\"{name}{slot}\" value=\"{default}\"></label>"
        );
    }
    html.push_str("</fieldset>\n");
}

fn render_result(html: &mut String, result: &SlotResult) {
    let _ = writeln!(html, "<section id=\"result{}\">", result.slot);
    let _ = writeln!(html, "<h2>{}</h2>", escape_html(&result.title));
    let _ = writeln!(
        html,
        "<img src=\"/static/{}\" alt=\"{}\">",
        escape_html(&result.image_url),
        escape_html(&result.title)
    );

    html.push_str("<table>\n");
    match result.stats {
        Some(ref record) => {
            for (name, value) in record.entries() {
                let _ = writeln!(
                    html,
                    "<tr><th>{}</th><td>{}</td></tr>",
                    name,
                    format_statistic(name, value)
                );
            }
        }
        None => html.push_str("<tr><td>empty sample: no statistics</td></tr>\n"),
    }
    html.push_str("</table>\n</section>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::compute_statistics;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn test_form_only_page() {
        let html = render_page(&[], false);
        assert!(html.contains("<form method=\"post\""));
        assert!(html.contains("name=\"lam2\" value=\"4\""));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_result_table_four_decimals() {
        let result = SlotResult {
            slot: 1,
            title: "Normal Distribution (n=3)".to_string(),
            image_url: "g1_x.png".to_string(),
            stats: compute_statistics(&[1.0, 2.0, 4.0]),
        };
        let html = render_page(&[result], false);

        assert!(html.contains("<img src=\"/static/g1_x.png\""));
        assert!(html.contains("<tr><th>count</th><td>3</td></tr>"));
        assert!(html.contains("<tr><th>mean</th><td>2.3333</td></tr>"));
        assert!(html.contains("<tr><th>mode</th><td>n/a</td></tr>"));
    }
}
