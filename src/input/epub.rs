use super::{LoadError, LoadedDocument};
use std::path::Path;
use tracing::debug;

/// Elements whose content never reaches the reader.
const HIDDEN: &[&str] = &["head", "title", "style", "script"];

/// Elements that end a line of text.
const BLOCKS: &[&str] = &[
    "p", "div", "br", "h1", "h2", "h3", "h4", "h5", "h6", "li", "tr", "blockquote", "section",
];

/// Load text from an EPUB file using the epub crate.
///
/// A book without chapters or without any readable text is an empty
/// document; only a failure to open the archive is an error.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let mut book =
        epub::doc::EpubDoc::new(path).map_err(|e| LoadError::EpubParse(e.to_string()))?;

    let chapters: Vec<String> = (0..book.get_num_chapters())
        .filter_map(|idx| {
            if !book.set_current_chapter(idx) {
                return None;
            }
            book.get_current_str().map(|(markup, _mime)| markup)
        })
        .collect();
    debug!(path = %path.display(), chapters = chapters.len(), "read epub");

    Ok(document_from_chapters(
        chapters,
        format!("epub:{}", path.display()),
    ))
}

/// Reduce chapter markup to text, join chapters with a blank line and
/// tokenize the result.
fn document_from_chapters<I>(chapters: I, source: String) -> LoadedDocument
where
    I: IntoIterator<Item = String>,
{
    let text = chapters
        .into_iter()
        .map(|markup| chapter_text(&markup))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");

    LoadedDocument::from_text(&text, source)
}

/// Text content of an XHTML chapter: tags removed, hidden elements dropped,
/// entities decoded, one non-blank line per block.
fn chapter_text(markup: &str) -> String {
    let mut text = String::new();
    let mut hidden: Option<String> = None;
    let mut rest = markup;

    while let Some(pos) = rest.find(|c: char| c == '<' || c == '&') {
        if hidden.is_none() {
            text.push_str(&rest[..pos]);
        }
        rest = &rest[pos..];

        if let Some(after) = rest.strip_prefix('<') {
            let end = after.find('>').unwrap_or(after.len());
            let tag = &after[..end];
            rest = after.get(end + 1..).unwrap_or("");

            let closing = tag.starts_with('/');
            let name = tag_name(tag);
            match &hidden {
                Some(open) => {
                    if closing && name == *open {
                        hidden = None;
                    }
                }
                None if !closing && !tag.ends_with('/') && HIDDEN.contains(&name.as_str()) => {
                    hidden = Some(name);
                }
                None if BLOCKS.contains(&name.as_str()) => text.push('\n'),
                None => {}
            }
        } else {
            let after = &rest[1..];
            let entity = after
                .find(';')
                .filter(|&end| end <= 8)
                .and_then(|end| decode_entity(&after[..end]).map(|c| (c, end)));

            match entity {
                Some((c, end)) => {
                    if hidden.is_none() {
                        text.push(c);
                    }
                    rest = &after[end + 1..];
                }
                None => {
                    if hidden.is_none() {
                        text.push('&');
                    }
                    rest = after;
                }
            }
        }
    }
    if hidden.is_none() {
        text.push_str(rest);
    }

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn tag_name(tag: &str) -> String {
    tag.trim_start_matches('/')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let number = entity.strip_prefix('#')?;
            let code = match number.strip_prefix('x').or_else(|| number.strip_prefix('X')) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epub_load_nonexistent_file() {
        let result = load("/nonexistent/path/book.epub");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_epub_parse_error() {
        let err = LoadError::EpubParse("Invalid EPUB structure".to_string());
        assert!(matches!(err, LoadError::EpubParse(msg) if msg.contains("Invalid")));
    }

    #[test]
    fn test_no_chapters_is_empty_document() {
        let doc = document_from_chapters(Vec::new(), "epub:empty.epub".to_string());
        assert!(doc.tokens.is_empty());
        assert_eq!(doc.source, "epub:empty.epub");
    }

    #[test]
    fn test_markup_only_chapters_are_empty_document() {
        let chapters = vec![
            "<html><head><title>Cover</title></head><body><img src=\"c.png\"/></body></html>"
                .to_string(),
            "   ".to_string(),
        ];
        let doc = document_from_chapters(chapters, "epub:cover.epub".to_string());
        assert!(doc.tokens.is_empty());
    }

    #[test]
    fn test_chapters_are_tokenized_together() {
        let chapters = vec![
            "<p>Chapter One.</p>".to_string(),
            "<p>Dr.Who arrived.</p>".to_string(),
        ];
        let doc = document_from_chapters(chapters, "epub:b.epub".to_string());
        assert_eq!(
            doc.tokens,
            vec!["chapter", "one", ".", "dr.who", "arrived", "."]
        );
    }

    #[test]
    fn test_chapter_text_drops_head_and_style() {
        let html = "<html><head><title>Book Title</title>\
                    <style>p { color: red; }</style></head>\
                    <body><p>Hello World</p><script>var x = 1;</script></body></html>";
        assert_eq!(chapter_text(html), "Hello World");
    }

    #[test]
    fn test_chapter_text_block_tags_break_lines() {
        let html = "<h1>Chapter One.</h1><p>It began.</p>line<br/>break";
        assert_eq!(chapter_text(html), "Chapter One.\nIt began.\nline\nbreak");
    }

    #[test]
    fn test_chapter_text_inline_tags_keep_words_whole() {
        assert_eq!(chapter_text("<p><em>Dr</em>.Smith's</p>"), "Dr.Smith's");
    }

    #[test]
    fn test_chapter_text_decodes_entities() {
        let html = "<p>Tom &amp; Jerry&nbsp;ran &lt;fast&gt;&#33; &#x41;&quot;</p>";
        assert_eq!(chapter_text(html), "Tom & Jerry\u{a0}ran <fast>! A\"");
    }

    #[test]
    fn test_chapter_text_keeps_unknown_entity() {
        assert_eq!(chapter_text("<p>R&D &bogus; done</p>"), "R&D &bogus; done");
    }

    #[test]
    fn test_nbsp_entity_separates_tokens() {
        let doc = document_from_chapters(
            vec!["<p>Tom &amp; Jerry&nbsp;ran.</p>".to_string()],
            "epub:t.epub".to_string(),
        );
        assert_eq!(doc.tokens, vec!["tom", "&", "jerry", "ran", "."]);
    }
}
