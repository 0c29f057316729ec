use crate::reporter::highlight::{highlight, html_escape};
use crate::reporter::{ReportInput, Reporter};
use crate::types::{Keyword, Match};

const STYLE: &str = r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #1f2937;
            background: #f3f4f6;
            padding: 2rem;
        }

        .container {
            max-width: 1200px;
            margin: 0 auto;
        }

        .header, .keyword-section {
            background: white;
            border-radius: 12px;
            padding: 1.5rem 2rem;
            margin-bottom: 1.5rem;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
        }

        .header h1 {
            font-size: 1.75rem;
            margin-bottom: 0.5rem;
        }

        .header-meta {
            color: #6b7280;
            font-size: 0.9rem;
        }

        .summary {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
            gap: 1rem;
            margin-top: 1rem;
        }

        .summary-card h3 {
            font-size: 0.8rem;
            color: #6b7280;
            text-transform: uppercase;
        }

        .summary-value {
            font-size: 1.75rem;
            font-weight: 700;
        }

        .filter-bar {
            display: flex;
            flex-wrap: wrap;
            gap: 0.5rem;
            margin-bottom: 1.5rem;
        }

        .filter-bar input {
            flex: 1 1 280px;
            padding: 0.5rem 0.75rem;
            border: 1px solid #d1d5db;
            border-radius: 8px;
            font-size: 1rem;
        }

        .keyword-button {
            padding: 0.5rem 0.9rem;
            border: none;
            border-radius: 9999px;
            background: #e5e7eb;
            cursor: pointer;
            font-weight: 600;
        }

        .keyword-button:hover {
            background: #d1d5db;
        }

        .keyword-section h2 {
            font-size: 1.25rem;
            margin-bottom: 0.75rem;
        }

        .match-count {
            color: #6b7280;
            font-weight: 400;
            font-size: 0.9rem;
        }

        details.match {
            border-top: 1px solid #e5e7eb;
            padding: 0.5rem 0;
        }

        details.match summary {
            cursor: pointer;
        }

        .context {
            font-family: 'SF Mono', Monaco, 'Courier New', monospace;
            font-size: 0.85rem;
            background: #1f2937;
            color: #e5e7eb;
            padding: 0.75rem 1rem;
            border-radius: 8px;
            margin-top: 0.5rem;
            overflow-x: auto;
            white-space: pre;
        }

        .line-no {
            display: inline-block;
            min-width: 3.5rem;
            color: #9ca3af;
            user-select: none;
        }

        .line.match-line {
            background: #374151;
        }

        mark.highlight {
            background: #dc2626;
            color: white;
            border-radius: 2px;
        }

        .no-matches {
            color: #6b7280;
        }

        .footer {
            text-align: center;
            color: #6b7280;
            font-size: 0.875rem;
            margin-top: 2rem;
        }
"#;

const SCRIPT: &str = r#"
        function filterSections(query) {
            var needle = query.toLowerCase();
            var sections = document.querySelectorAll('.keyword-section');
            sections.forEach(function (section) {
                var text = section.textContent.toLowerCase();
                section.style.display = needle === '' || text.includes(needle) ? '' : 'none';
            });
        }

        document.addEventListener('DOMContentLoaded', function () {
            var input = document.getElementById('filter-input');
            input.addEventListener('input', function () {
                filterSections(input.value);
            });
            document.querySelectorAll('.keyword-button').forEach(function (button) {
                button.addEventListener('click', function () {
                    input.value = button.dataset.keyword;
                    filterSections(input.value);
                });
            });
        });
"#;

pub struct HtmlReporter;

impl HtmlReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for HtmlReporter {
    fn report(&self, input: &ReportInput<'_>) -> String {
        let summary = &input.outcome.summary;
        let result = &input.outcome.result;

        let buttons: String = input
            .keywords
            .iter()
            .map(|keyword| {
                let escaped = html_escape(keyword.as_str());
                format!(
                    r#"
            <button type="button" class="keyword-button" data-keyword="{escaped}">{escaped}</button>"#
                )
            })
            .collect();

        let sections: String = input
            .keywords
            .iter()
            .map(|keyword| render_section(keyword, result.for_keyword(keyword.as_str())))
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{STYLE}    </style>
    <script>{SCRIPT}    </script>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>{title}</h1>
            <div class="header-meta">Generated {generated}</div>
            <div class="summary">
                <div class="summary-card"><h3>Files scanned</h3><div class="summary-value">{files}</div></div>
                <div class="summary-card"><h3>Matches</h3><div class="summary-value">{matches}</div></div>
                <div class="summary-card"><h3>Files with matches</h3><div class="summary-value">{files_with_matches}</div></div>
                <div class="summary-card"><h3>Unreadable</h3><div class="summary-value">{failed}</div></div>
            </div>
        </div>

        <div class="filter-bar">
            <input type="text" id="filter-input" placeholder="Filter by keyword..." autocomplete="off">{buttons}
        </div>

        <div id="results">{sections}
        </div>

        <div class="footer">
            Generated by git-scraper v{version}
        </div>
    </div>
</body>
</html>
"#,
            title = html_escape(input.title),
            generated = input.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            files = summary.files_scanned,
            matches = summary.total_matches,
            files_with_matches = summary.files_with_matches,
            failed = summary.failed_tasks,
            version = env!("CARGO_PKG_VERSION"),
        )
    }
}

/// One section per keyword, one collapsible entry per match.
fn render_section<'a>(keyword: &Keyword, matches: impl Iterator<Item = &'a Match>) -> String {
    let escaped = html_escape(keyword.as_str());
    let mut count = 0;
    let entries: String = matches
        .inspect(|_| count += 1)
        .map(|m| render_match(m, keyword))
        .collect();

    let body = if count == 0 {
        r#"
                <p class="no-matches">No matches.</p>"#
            .to_string()
    } else {
        entries
    };
    let noun = if count == 1 { "match" } else { "matches" };

    format!(
        r#"
            <section class="keyword-section" data-keyword="{escaped}">
                <h2>{escaped} <span class="match-count">({count} {noun})</span></h2>{body}
            </section>"#
    )
}

fn render_match(m: &Match, keyword: &Keyword) -> String {
    let lines: String = m
        .numbered_context()
        .map(|(number, text)| {
            let class = if number == m.line { "line match-line" } else { "line" };
            format!(
                r#"<div class="{class}"><span class="line-no">{number}</span>{}</div>"#,
                highlight(text, keyword)
            )
        })
        .collect();

    format!(
        r#"
                <details class="match">
                    <summary><code>{}</code> (Line: {})</summary>
                    <div class="context">{lines}</div>
                </details>"#,
        html_escape(&m.path),
        m.line,
    )
}
