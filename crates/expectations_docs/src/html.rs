//! HTML rendering for Data Docs.
//!
//! Generates standalone pages with embedded CSS so the site can be opened
//! straight from disk: an index listing all runs plus one page per run
//! with the outcome of every expectation.

use crate::store::StoredRun;

/// Renders the index page listing all stored runs, most recent first.
pub fn render_index(runs: &[StoredRun]) -> String {
    let mut html = page_header("Data Docs");

    html.push_str("<h1>Data Docs</h1>\n");

    if runs.is_empty() {
        html.push_str("<p class=\"empty\">No validation runs stored yet.</p>\n");
    } else {
        html.push_str("<table>\n<thead><tr>");
        html.push_str("<th>Run</th><th>Suite</th><th>Data asset</th><th>Time</th><th>Status</th><th>Expectations</th>");
        html.push_str("</tr></thead>\n<tbody>\n");

        for run in runs {
            let report = &run.report;
            html.push_str(&format!(
                "<tr><td><a href=\"runs/{id}.html\">{name}</a></td><td>{suite}</td><td>{asset}</td><td>{time}</td><td>{badge}</td><td>{ok} / {total}</td></tr>\n",
                id = run.id,
                name = escape_html(report.run_name.as_deref().unwrap_or(&run.id)),
                suite = escape_html(&report.suite_name),
                asset = escape_html(&report.data_asset),
                time = escape_html(&report.run_time),
                badge = status_badge(report.passed),
                ok = report.success_count(),
                total = report.results.len(),
            ));
        }

        html.push_str("</tbody>\n</table>\n");
    }

    html.push_str(PAGE_FOOTER);
    html
}

/// Renders the detail page for one run.
pub fn render_run(run: &StoredRun) -> String {
    let report = &run.report;
    let title = format!(
        "{} — {}",
        report.run_name.as_deref().unwrap_or(&run.id),
        report.suite_name
    );
    let mut html = page_header(&title);

    html.push_str("<p><a href=\"../index.html\">← All runs</a></p>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(&title)));

    // Run summary
    html.push_str("<div class=\"summary\">\n<table>\n<tbody>\n");
    html.push_str(&format!(
        "<tr><th>Status</th><td>{}</td></tr>\n",
        status_badge(report.passed)
    ));
    html.push_str(&format!(
        "<tr><th>Data asset</th><td>{}</td></tr>\n",
        escape_html(&report.data_asset)
    ));
    html.push_str(&format!(
        "<tr><th>Run time</th><td>{}</td></tr>\n",
        escape_html(&report.run_time)
    ));
    html.push_str(&format!(
        "<tr><th>Rows validated</th><td>{}</td></tr>\n",
        report.stats.rows_validated
    ));
    html.push_str(&format!(
        "<tr><th>Expectations</th><td>{} evaluated, {} failed</td></tr>\n",
        report.stats.expectations_evaluated,
        report.failure_count()
    ));
    html.push_str(&format!(
        "<tr><th>Duration</th><td>{} ms</td></tr>\n",
        report.stats.duration_ms
    ));
    html.push_str("</tbody>\n</table>\n</div>\n");

    // Per-expectation outcomes
    html.push_str("<h2>Expectations</h2>\n");
    for outcome in &report.results {
        let class = if outcome.success { "pass" } else { "fail" };
        html.push_str(&format!("<div class=\"outcome {class}\">\n"));
        html.push_str(&format!(
            "<h3>{} {}</h3>\n",
            status_badge(outcome.success),
            escape_html(&outcome.description)
        ));

        if outcome.element_count > 0 {
            html.push_str(&format!(
                "<p class=\"meta\">{} evaluated, {} unexpected ({:.1}%)</p>\n",
                outcome.element_count, outcome.unexpected_count, outcome.unexpected_percent
            ));
        }

        if let Some(detail) = &outcome.detail {
            if !detail.is_empty() {
                html.push_str(&format!("<p class=\"detail\">{}</p>\n", escape_html(detail)));
            }
        }

        if !outcome.unexpected_samples.is_empty() {
            html.push_str("<p class=\"samples\">Unexpected values: ");
            let samples: Vec<String> = outcome
                .unexpected_samples
                .iter()
                .map(|sample| format!("<code>{}</code>", escape_html(sample)))
                .collect();
            html.push_str(&samples.join(", "));
            html.push_str("</p>\n");
        }

        html.push_str("</div>\n");
    }

    html.push_str(PAGE_FOOTER);
    html
}

fn page_header(title: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    html.push_str("<style>\n");
    html.push_str(CSS_STYLES);
    html.push_str("</style>\n</head>\n<body>\n");
    html
}

fn status_badge(passed: bool) -> &'static str {
    if passed {
        "<span class=\"badge pass\">PASSED</span>"
    } else {
        "<span class=\"badge fail\">FAILED</span>"
    }
}

/// Escapes text for safe embedding in HTML.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const PAGE_FOOTER: &str = "</body>\n</html>\n";

const CSS_STYLES: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    max-width: 960px;
    margin: 2rem auto;
    padding: 0 1rem;
    color: #1f2328;
}
h1 { border-bottom: 2px solid #d0d7de; padding-bottom: 0.4rem; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid #d0d7de; padding: 0.45rem 0.7rem; text-align: left; }
thead th { background: #f6f8fa; }
.summary table { width: auto; }
.summary th { background: #f6f8fa; width: 11rem; }
.badge {
    display: inline-block;
    padding: 0.1rem 0.55rem;
    border-radius: 1rem;
    font-size: 0.8rem;
    font-weight: 600;
}
.badge.pass { background: #dafbe1; color: #116329; }
.badge.fail { background: #ffebe9; color: #a40e26; }
.outcome {
    border: 1px solid #d0d7de;
    border-left-width: 4px;
    border-radius: 6px;
    padding: 0.2rem 1rem 0.6rem;
    margin: 0.8rem 0;
}
.outcome.pass { border-left-color: #1a7f37; }
.outcome.fail { border-left-color: #cf222e; }
.outcome h3 { margin: 0.6rem 0 0.2rem; font-size: 1rem; }
.meta, .detail, .samples { margin: 0.3rem 0; font-size: 0.9rem; color: #57606a; }
.detail { color: #a40e26; }
code {
    background: #f6f8fa;
    padding: 0.1rem 0.35rem;
    border-radius: 4px;
    font-size: 0.85rem;
}
.empty { color: #57606a; }
"#;
