use std::path::{Path, PathBuf};

use crate::filename::report_filename;
use crate::persist::{AtomicFileWriter, PersistError};
use crate::render::{escape_html, render_result_block};
use crate::GenerationResult;

const REPORT_STYLE: &str = r#"
    body { font-family: -apple-system, "Segoe UI", Roboto, sans-serif; margin: 0; background: #f4f5f7; color: #212529; }
    .wrap { max-width: 960px; margin: 0 auto; padding: 24px 16px; }
    h1 { font-size: 22px; margin-bottom: 4px; }
    .meta { color: #6c757d; font-size: 13px; margin-bottom: 20px; }
    .result-item { background: #fff; border: 1px solid #dee2e6; border-left: 4px solid #dee2e6; border-radius: 6px; padding: 14px 16px; margin-bottom: 16px; }
    .result-item.success { border-left-color: #28a745; }
    .result-item.error { border-left-color: #dc3545; }
    .result-header { display: flex; justify-content: space-between; align-items: center; }
    .result-title { font-weight: 600; }
    .result-status.success { color: #28a745; }
    .result-status.error { color: #dc3545; }
    .result-message { color: #dc3545; margin-top: 10px; }
    .result-content { display: grid; grid-template-columns: 1fr 1fr; gap: 12px; margin-top: 12px; }
    .content-block h4 { margin: 0 0 6px; font-size: 13px; color: #495057; }
    .content-block pre { background: #f8f9fa; border: 1px solid #e9ecef; border-radius: 4px; padding: 10px; white-space: pre-wrap; word-break: break-word; max-height: 320px; overflow: auto; font-size: 13px; }
    .file-path { margin-top: 10px; font-size: 12px; color: #6c757d; }
    .result-actions { margin-top: 10px; }
    .btn-copy { font-size: 12px; padding: 4px 10px; margin-right: 6px; cursor: pointer; }
"#;

const COPY_SCRIPT: &str = r#"
    document.querySelectorAll('.btn-copy').forEach(function (button) {
        button.addEventListener('click', function () {
            var target = document.getElementById(button.dataset.copyTarget);
            if (!target) return;
            navigator.clipboard.writeText(target.textContent).then(function () {
                alert('Copied to clipboard.');
            }).catch(function () {
                alert('Copy failed.');
            });
        });
    });
"#;

/// Outcome of a written session report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub output_path: PathBuf,
    pub article_count: usize,
    pub success_count: usize,
}

/// Renders the full session report: a self-contained HTML document wrapping
/// the result blocks in wire order.
pub fn render_report(prompt: &str, generated_utc: &str, results: &[GenerationResult]) -> String {
    let mut body = String::new();
    for (index, result) in results.iter().enumerate() {
        body.push_str(&render_result_block(result, index));
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Generation report</title>\n<style>{style}</style>\n</head>\n<body>\n\
         <div class=\"wrap\">\n<h1>Generation report</h1>\n\
         <div class=\"meta\">Prompt: {prompt}<br>Generated: {generated}</div>\n\
         <div id=\"results\">\n{body}</div>\n</div>\n\
         <script>{script}</script>\n</body>\n</html>\n",
        style = REPORT_STYLE,
        prompt = escape_html(prompt),
        generated = escape_html(generated_utc),
        body = body,
        script = COPY_SCRIPT,
    )
}

/// Renders and atomically writes the report under `output_dir`.
pub fn write_report(
    output_dir: &Path,
    prompt: &str,
    generated_utc: &str,
    results: &[GenerationResult],
) -> Result<ReportSummary, PersistError> {
    let document = render_report(prompt, generated_utc, results);
    let filename = report_filename(prompt);
    let writer = AtomicFileWriter::new(output_dir.to_path_buf());
    let output_path = writer.write(&filename, &document)?;

    Ok(ReportSummary {
        output_path,
        article_count: results.len(),
        success_count: results.iter().filter(|result| result.success).count(),
    })
}
