use crate::domain::ports::MarkdownSanitizer;
use regex::Regex;

/// Small markdown subset rendered from escaped input, so raw HTML never reaches the page.
/// Supports paragraphs, `#` headings, `-`/`*` lists, bold, italics, inline code and http(s) links.
pub struct SafeMarkdown {
    bold: Regex,
    italic: Regex,
    code: Regex,
    link: Regex,
}

impl Default for SafeMarkdown {
    fn default() -> Self {
        Self::new()
    }
}

impl SafeMarkdown {
    pub fn new() -> Self {
        Self {
            bold: Regex::new(r"\*\*([^*]+)\*\*").expect("valid bold pattern"),
            italic: Regex::new(r"\*([^*]+)\*").expect("valid italic pattern"),
            code: Regex::new(r"`([^`]+)`").expect("valid code pattern"),
            link: Regex::new(r#"\[([^\]]+)\]\((https?://[^)\s"<>*`]+)\)"#).expect("valid link pattern"),
        }
    }

    /// Links are matched on the raw text; label, URL and the text between links are escaped separately.
    fn inline(&self, text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        let mut last = 0;
        for caps in self.link.captures_iter(text) {
            let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2)) else {
                continue;
            };
            escaped.push_str(&html_escape::encode_text(&text[last..whole.start()]));
            escaped.push_str(&format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                html_escape::encode_double_quoted_attribute(url.as_str()),
                html_escape::encode_text(label.as_str())
            ));
            last = whole.end();
        }
        escaped.push_str(&html_escape::encode_text(&text[last..]));

        let with_code = self.code.replace_all(&escaped, "<code>$1</code>");
        let with_bold = self.bold.replace_all(&with_code, "<strong>$1</strong>");
        self.italic.replace_all(&with_bold, "<em>$1</em>").into_owned()
    }

    fn block(&self, block: &str) -> String {
        let lines: Vec<&str> = block.lines().map(str::trim_end).collect();

        if lines.iter().all(|l| l.starts_with("- ") || l.starts_with("* ")) {
            let items: String = lines
                .iter()
                .map(|l| format!("<li>{}</li>", self.inline(&l[2..])))
                .collect();
            return format!("<ul>{}</ul>", items);
        }

        if lines.len() == 1 {
            let line = lines[0];
            let level = line.chars().take_while(|c| *c == '#').count();
            if (1..=6).contains(&level) && line[level..].starts_with(' ') {
                return format!("<h{level}>{}</h{level}>", self.inline(line[level..].trim()));
            }
        }

        let body: Vec<String> = lines.iter().map(|l| self.inline(l.trim_start())).collect();
        format!("<p>{}</p>", body.join("<br>"))
    }
}

impl MarkdownSanitizer for SafeMarkdown {
    fn to_safe_html(&self, markdown: &str) -> String {
        let normalized = markdown.replace("\r\n", "\n");
        normalized
            .split("\n\n")
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(|b| self.block(b))
            .collect()
    }
}
