use crate::GenerationResult;

/// Escapes the five HTML-reserved characters. Applied to every piece of
/// server-supplied free text before it is inserted into markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Renders one result record as a markup block, tagged success/failure.
///
/// Failure blocks carry the article label, a failure marker and the escaped
/// message; success blocks carry both content panels, the optional saved-path
/// line and two copy actions wired to the panels by element id.
pub fn render_result_block(result: &GenerationResult, index: usize) -> String {
    let status_class = if result.success { "success" } else { "error" };
    let status_label = if result.success { "Success" } else { "Failed" };

    let mut block = String::new();
    block.push_str(&format!(
        "<div class=\"result-item {status_class}\">\n\
         <div class=\"result-header\">\n\
         <div class=\"result-title\">Article {}</div>\n\
         <span class=\"result-status {status_class}\">{status_label}</span>\n\
         </div>\n",
        result.article_number,
    ));

    if !result.success {
        let message = escape_html(result.message.as_deref().unwrap_or("generation failed"));
        block.push_str(&format!("<p class=\"result-message\">{message}</p>\n</div>\n"));
        return block;
    }

    let original = escape_html(result.original_content.as_deref().unwrap_or(""));
    let replaced = escape_html(result.replaced_content.as_deref().unwrap_or(""));
    block.push_str(&format!(
        "<div class=\"result-content\">\n\
         <div class=\"content-block\">\n\
         <h4>Original draft</h4>\n\
         <pre id=\"original-{index}\">{original}</pre>\n\
         </div>\n\
         <div class=\"content-block\">\n\
         <h4>Replaced draft</h4>\n\
         <pre id=\"replaced-{index}\">{replaced}</pre>\n\
         </div>\n\
         </div>\n",
    ));

    if let Some(path) = result.saved_file_path.as_deref() {
        block.push_str(&format!(
            "<div class=\"file-path\">Saved: {}</div>\n",
            escape_html(path)
        ));
    }

    block.push_str(&format!(
        "<div class=\"result-actions\">\n\
         <button class=\"btn-copy\" data-copy-target=\"original-{index}\">Copy original</button>\n\
         <button class=\"btn-copy\" data-copy-target=\"replaced-{index}\">Copy replaced</button>\n\
         </div>\n\
         </div>\n",
    ));
    block
}

#[cfg(test)]
mod tests {
    use super::{escape_html, render_result_block};
    use crate::GenerationResult;

    fn record() -> GenerationResult {
        GenerationResult {
            article_number: 1,
            success: true,
            message: Some("ok".to_string()),
            original_content: Some("plain".to_string()),
            replaced_content: Some("plain".to_string()),
            saved_file_path: None,
        }
    }

    #[test]
    fn escape_maps_all_five_reserved_characters() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & \"b\" & 'c'"), "a &amp; &quot;b&quot; &amp; &#039;c&#039;");
    }

    #[test]
    fn escape_leaves_clean_text_unchanged() {
        let clean = "no reserved characters here, 한국어 포함";
        assert_eq!(escape_html(clean), clean);
    }

    #[test]
    fn failure_block_has_message_and_no_panels() {
        let result = GenerationResult {
            success: false,
            message: Some("오류".to_string()),
            original_content: None,
            replaced_content: None,
            ..record()
        };
        let block = render_result_block(&result, 0);

        assert!(block.contains("result-item error"));
        assert!(block.contains("Article 1"));
        assert!(block.contains("오류"));
        assert!(!block.contains("<pre"));
        assert!(!block.contains("btn-copy"));
    }

    #[test]
    fn success_block_escapes_both_panels() {
        let result = GenerationResult {
            original_content: Some("A&B".to_string()),
            replaced_content: Some("C<D".to_string()),
            ..record()
        };
        let block = render_result_block(&result, 2);

        assert!(block.contains("result-item success"));
        assert!(block.contains("<pre id=\"original-2\">A&amp;B</pre>"));
        assert!(block.contains("<pre id=\"replaced-2\">C&lt;D</pre>"));
        assert!(block.contains("data-copy-target=\"original-2\""));
        assert!(block.contains("data-copy-target=\"replaced-2\""));
        assert!(!block.contains("file-path"));
    }

    #[test]
    fn saved_path_line_appears_when_present() {
        let result = GenerationResult {
            saved_file_path: Some("/out/article_1.txt".to_string()),
            ..record()
        };
        let block = render_result_block(&result, 0);
        assert!(block.contains("Saved: /out/article_1.txt"));
    }

    #[test]
    fn injected_markup_in_message_stays_inert() {
        let result = GenerationResult {
            success: false,
            message: Some("<img src=x onerror=alert(1)>".to_string()),
            ..record()
        };
        let block = render_result_block(&result, 0);
        assert!(!block.contains("<img"));
        assert!(block.contains("&lt;img src=x onerror=alert(1)&gt;"));
    }
}
