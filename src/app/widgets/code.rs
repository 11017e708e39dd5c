use std::collections::HashSet;

use leptos::{either::EitherOf4, prelude::*};

use crate::content::{CodeSnippet, SnippetLanguage};

const DART_KEYWORDS: &[&str] = &[
    "import", "void", "class", "extends", "final", "const", "async", "await", "return", "if",
    "else", "for", "in", "true", "false", "null", "static", "super", "this", "get", "set", "part",
    "of", "with", "abstract", "implements", "typedef",
];

const TS_KEYWORDS: &[&str] = &[
    "import",
    "export",
    "from",
    "const",
    "let",
    "var",
    "function",
    "return",
    "async",
    "await",
    "type",
    "interface",
    "class",
    "extends",
    "implements",
    "if",
    "else",
    "for",
    "of",
    "in",
    "true",
    "false",
    "null",
    "undefined",
    "void",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Keyword(String),
    Str(String),
    Comment(String),
    Plain(String),
}

fn keywords(language: SnippetLanguage) -> &'static [&'static str] {
    match language {
        SnippetLanguage::Dart => DART_KEYWORDS,
        SnippetLanguage::TypeScript => TS_KEYWORDS,
        SnippetLanguage::Text => &[],
    }
}

/// Length in bytes of the string literal starting at the opening quote,
/// including both quotes; `None` when unterminated on this line.
fn string_len(rest: &str, quote: char) -> Option<usize> {
    let mut escaped = false;
    for (idx, ch) in rest.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == quote {
            return Some(idx + ch.len_utf8());
        }
    }
    None
}

/// Split one source line into paintable tokens: line comments, string
/// literals, keywords, and plain text. `Text` passes the line through.
pub fn tokenize_line(line: &str, language: SnippetLanguage) -> Vec<Token> {
    let keywords = keywords(language);
    if keywords.is_empty() {
        return vec![Token::Plain(line.to_string())];
    }

    fn flush(plain: &mut String, tokens: &mut Vec<Token>) {
        if !plain.is_empty() {
            tokens.push(Token::Plain(std::mem::take(plain)));
        }
    }

    let mut tokens = Vec::new();
    let mut plain = String::new();
    let mut i = 0;

    while i < line.len() {
        let rest = &line[i..];

        if rest.starts_with("//") {
            flush(&mut plain, &mut tokens);
            tokens.push(Token::Comment(rest.to_string()));
            return tokens;
        }

        let c = rest.chars().next().expect("rest is non-empty");

        if c == '"' || c == '\'' {
            if let Some(len) = string_len(rest, c) {
                flush(&mut plain, &mut tokens);
                tokens.push(Token::Str(rest[..len].to_string()));
                i += len;
                continue;
            }
        }

        if c.is_ascii_alphabetic() || c == '_' {
            let end = rest
                .find(|ch: char| !ch.is_ascii_alphanumeric() && ch != '_')
                .unwrap_or(rest.len());
            let word = &rest[..end];
            if keywords.contains(&word) {
                flush(&mut plain, &mut tokens);
                tokens.push(Token::Keyword(word.to_string()));
            } else {
                plain.push_str(word);
            }
            i += end;
            continue;
        }

        plain.push(c);
        i += c.len_utf8();
    }

    flush(&mut plain, &mut tokens);
    tokens
}

fn render_tokens(line: &str, language: SnippetLanguage) -> impl IntoView {
    tokenize_line(line, language)
        .into_iter()
        .map(|token| match token {
            Token::Keyword(s) => EitherOf4::A(view! { <span class="text-cyan-400">{s}</span> }),
            Token::Str(s) => EitherOf4::B(view! { <span class="text-amber-300">{s}</span> }),
            Token::Comment(s) => EitherOf4::C(view! { <span class="text-gray-500">{s}</span> }),
            Token::Plain(s) => EitherOf4::D(s),
        })
        .collect_view()
}

/// A titled, numbered code block with token coloring and line highlights.
#[component]
pub fn CodeShowcase(snippet: &'static CodeSnippet) -> impl IntoView {
    let highlights: HashSet<usize> = snippet.highlight_lines.iter().copied().collect();

    view! {
        <div class="font-mono text-sm">
            <div class="mb-2 font-heading font-semibold text-white">{snippet.title}</div>
            <p class="mb-3 text-gray-400 font-body text-sm">{snippet.caption}</p>
            <pre class="overflow-x-auto rounded-xl border border-white/10 bg-black/30 px-4 py-4 backdrop-blur-sm">
                <code class="block text-gray-300">
                    {snippet
                        .code
                        .trim_end()
                        .lines()
                        .enumerate()
                        .map(|(i, line)| {
                            let line_num = i + 1;
                            let row_class = if highlights.contains(&line_num) {
                                "flex gap-4 py-0.5 border-l-2 border-violet-500 bg-white/10 pl-3 -ml-1"
                            } else {
                                "flex gap-4 py-0.5"
                            };
                            view! {
                                <div class=row_class>
                                    <span class="select-none text-gray-600 w-6 shrink-0 text-right">
                                        {line_num}
                                    </span>
                                    <span>{render_tokens(line, snippet.language)}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </code>
            </pre>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_tokenized() {
        let tokens = tokenize_line("final const count = 3;", SnippetLanguage::Dart);
        assert!(tokens.contains(&Token::Keyword("final".to_string())));
        assert!(tokens.contains(&Token::Keyword("const".to_string())));
        assert!(tokens.contains(&Token::Plain(" ".to_string())));
    }

    #[test]
    fn test_keyword_inside_identifier_is_plain() {
        let tokens = tokenize_line("classroom = 1", SnippetLanguage::TypeScript);
        assert!(!tokens.iter().any(|t| matches!(t, Token::Keyword(_))));
    }

    #[test]
    fn test_string_literals() {
        let tokens = tokenize_line("state = 'loading';", SnippetLanguage::TypeScript);
        assert!(tokens.contains(&Token::Str("'loading'".to_string())));

        let tokens = tokenize_line(r#"label = "a \" b""#, SnippetLanguage::TypeScript);
        assert!(tokens.contains(&Token::Str(r#""a \" b""#.to_string())));
    }

    #[test]
    fn test_unterminated_string_falls_back_to_plain() {
        let tokens = tokenize_line("oops = 'never closed", SnippetLanguage::TypeScript);
        assert!(!tokens.iter().any(|t| matches!(t, Token::Str(_))));
    }

    #[test]
    fn test_line_comment_consumes_rest_of_line() {
        let tokens = tokenize_line("await send() // later", SnippetLanguage::Dart);
        assert_eq!(
            tokens.last(),
            Some(&Token::Comment("// later".to_string()))
        );
        assert!(tokens.contains(&Token::Keyword("await".to_string())));

        let tokens = tokenize_line("// whole line", SnippetLanguage::TypeScript);
        assert_eq!(tokens, vec![Token::Comment("// whole line".to_string())]);
    }

    #[test]
    fn test_text_language_passes_through() {
        let line = "const x = 'not highlighted' // nor this";
        let tokens = tokenize_line(line, SnippetLanguage::Text);
        assert_eq!(tokens, vec![Token::Plain(line.to_string())]);
    }
}
