//! HTML rendering for the lookup form and results.

use grc_common::ToolRecommendation;

pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn steps_html(steps: &str) -> String {
    steps
        .lines()
        .map(escape)
        .collect::<Vec<_>>()
        .join("<br>")
}

/// Render the full page: flash messages, the form, and any results.
pub fn page(messages: &[String], tools: &[ToolRecommendation]) -> String {
    let mut body = String::new();

    for message in messages {
        body.push_str(&format!(
            "<p class=\"flash error\">{}</p>\n",
            escape(message)
        ));
    }

    body.push_str(
        "<form method=\"post\" action=\"/\">\n\
         <label>Compliance Task</label>\n\
         <textarea name=\"task\" rows=\"3\"></textarea>\n\
         <label>Compliance Standard</label>\n\
         <input type=\"text\" name=\"compliance\" placeholder=\"e.g. iso27001\">\n\
         <label>JWT Token</label>\n\
         <input type=\"text\" name=\"jwt_token\">\n\
         <button type=\"submit\">Lookup Tools</button>\n\
         </form>\n",
    );

    if !tools.is_empty() {
        body.push_str("<table>\n<tr><th>Tool</th><th>Steps</th></tr>\n");
        for tool in tools {
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td></tr>\n",
                escape(&tool.tool),
                steps_html(&tool.steps)
            ));
        }
        body.push_str("</table>\n");
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<title>GRC Tool Lookup</title>\n\
         <style>\n\
         body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; }}\n\
         .flash.error {{ color: #b00020; }}\n\
         label {{ display: block; margin-top: 0.75rem; }}\n\
         textarea, input {{ width: 100%; }}\n\
         table {{ border-collapse: collapse; margin-top: 1.5rem; }}\n\
         td, th {{ border: 1px solid #ccc; padding: 0.5rem; vertical-align: top; }}\n\
         </style>\n\
         </head>\n<body>\n<h1>GRC Tool Lookup</h1>\n{}</body>\n</html>\n",
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_user_text() {
        let tools = vec![ToolRecommendation::new("<script>", "1. a & b")];
        let html = page(&[], &tools);
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("1. a &amp; b"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_steps_render_as_line_breaks() {
        let tools = vec![ToolRecommendation::new("Okta", "1. Enroll.\n2. Verify.")];
        let html = page(&[], &tools);
        assert!(html.contains("1. Enroll.<br>2. Verify."));
    }

    #[test]
    fn test_messages_render_as_flashes() {
        let html = page(&["Please fill in all fields including JWT token.".to_string()], &[]);
        assert!(html.contains("class=\"flash error\""));
        assert!(html.contains("Please fill in all fields including JWT token."));
    }

    #[test]
    fn test_no_table_without_results() {
        let html = page(&[], &[]);
        assert!(!html.contains("<table>"));
    }
}
