//! Syntax highlighting seam.
//!
//! The analyzer never looks at markup. Hosts that want a styled view of the
//! input or the narration go through [`Highlighter`], which must accept any
//! text, valid source or not, and always return renderable markup.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::config::HighlightConfig;

/// Language identifier the analyzer targets.
pub const DEFAULT_LANGUAGE: &str = "c";

/// Renders text as HTML markup for a given language.
pub trait Highlighter: Send + Sync {
    /// Return markup for `text`. Must not fail on arbitrary input.
    fn highlight(&self, text: &str, language: &str) -> String;
}

/// Escape `&`, `<` and `>` for embedding raw text in HTML.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Build the highlighter selected by configuration.
pub fn for_config(config: &HighlightConfig) -> Box<dyn Highlighter> {
    if config.enabled {
        Box::new(TokenHighlighter)
    } else {
        Box::new(PlainHighlighter)
    }
}

/// Escapes text and adds no styling.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, text: &str, _language: &str) -> String {
        escape_html(text)
    }
}

/// Regex tokenizer emitting Prism-compatible `token` spans for C.
///
/// Languages other than C are escaped without styling.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenHighlighter;

const KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef", "union",
    "unsigned", "void", "volatile", "while",
];

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let pattern = format!(
            concat!(
                r"(?P<comment>//[^\n]*|/\*(?s:.*?)\*/)",
                r#"|(?P<string>"(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*')"#,
                r"|(?P<directive>#\s*[A-Za-z]+)",
                r"|(?P<keyword>\b(?:{})\b)",
                r"|(?P<number>\b(?:0[xX][0-9A-Fa-f]+|[0-9]+(?:\.[0-9]+)?)\b)",
                r"|(?P<ident>[A-Za-z_][0-9A-Za-z_]*)",
                r"|(?P<operator>[-+*/%=<>!&|^~?:]+)",
                r"|(?P<punctuation>[{{}}\[\]();,.])",
            ),
            KEYWORDS.join("|")
        );
        Regex::new(&pattern).expect("valid regex")
    })
}

/// Prism class for a token, `None` for plain identifiers.
fn token_class(caps: &Captures<'_>, rest: &str) -> Option<&'static str> {
    const CLASSES: &[(&str, &str)] = &[
        ("comment", "comment"),
        ("string", "string"),
        ("directive", "macro"),
        ("keyword", "keyword"),
        ("number", "number"),
        ("operator", "operator"),
        ("punctuation", "punctuation"),
    ];

    if caps.name("ident").is_some() {
        return rest.trim_start().starts_with('(').then_some("function");
    }
    CLASSES
        .iter()
        .find(|(group, _)| caps.name(group).is_some())
        .map(|(_, class)| *class)
}

impl TokenHighlighter {
    fn supports(language: &str) -> bool {
        language.eq_ignore_ascii_case(DEFAULT_LANGUAGE)
    }
}

impl Highlighter for TokenHighlighter {
    fn highlight(&self, text: &str, language: &str) -> String {
        if !Self::supports(language) {
            tracing::debug!("No grammar for {language}, escaping only");
            return escape_html(text);
        }

        let mut out = String::with_capacity(text.len() * 2);
        let mut last = 0;

        for caps in token_pattern().captures_iter(text) {
            let Some(m) = caps.get(0) else { continue };
            out.push_str(&escape_html(&text[last..m.start()]));

            let token = escape_html(m.as_str());
            match token_class(&caps, &text[m.end()..]) {
                Some(class) => {
                    out.push_str(&format!(r#"<span class="token {class}">{token}</span>"#));
                }
                None => out.push_str(&token),
            }
            last = m.end();
        }

        out.push_str(&escape_html(&text[last..]));
        out
    }
}
