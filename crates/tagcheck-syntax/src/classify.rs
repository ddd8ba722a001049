use crate::{TagKind, TagToken};

/// Classifies one raw tag occurrence by its shape.
///
/// ## Rules
///
/// The text is trimmed first. It must open with `<`, close with `>` and hold no
/// other angle brackets; anything else is [`TagKind::Invalid`].
///
/// | Shape | Kind |
/// |-------|------|
/// | `<?…?>`, `<!…>` | [`TagKind::Declaration`] |
/// | `</name>` | [`TagKind::End`] |
/// | `<name attrs/>` | [`TagKind::SelfClosing`] |
/// | `<name attrs>` | [`TagKind::Start`] |
///
/// Attribute text is discarded, never interpreted. When the identifier is
/// empty or malformed the token degrades to [`TagKind::Invalid`] and carries the
/// raw text as its name.
///
/// ## Examples
///
/// ```
/// use tagcheck_syntax::{classify, TagKind};
///
/// let token = classify(r#"<item id="7">"#, 3);
/// assert_eq!(token.kind, TagKind::Start);
/// assert_eq!(token.name, "item");
///
/// let token = classify("<item>>", 4);
/// assert_eq!(token.kind, TagKind::Invalid);
/// assert_eq!(token.name, "<item>>");
/// ```
pub fn classify(raw: &str, line: usize) -> TagToken {
    let text = raw.trim();
    match shape(text) {
        Some((kind, name)) => TagToken::new(kind, name, line),
        None => TagToken::new(TagKind::Invalid, text, line),
    }
}

fn shape(text: &str) -> Option<(TagKind, &str)> {
    let inner = text.strip_prefix('<')?.strip_suffix('>')?;
    if inner.contains(['<', '>']) {
        return None;
    }

    if let Some(rest) = inner.strip_prefix('?') {
        // Processing instruction: `<?target …?>`
        return (rest.len() > 1 && rest.ends_with('?')).then_some((TagKind::Declaration, text));
    }
    if let Some(rest) = inner.strip_prefix('!') {
        return (!rest.is_empty()).then_some((TagKind::Declaration, text));
    }

    if let Some(rest) = inner.strip_prefix('/') {
        let name = rest.trim_end();
        return is_identifier(name).then_some((TagKind::End, name));
    }

    let (body, kind) = match inner.strip_suffix('/') {
        Some(body) => (body, TagKind::SelfClosing),
        None => (inner, TagKind::Start),
    };
    let name_end = body.find(char::is_whitespace).unwrap_or(body.len());
    let name = &body[..name_end];
    is_identifier(name).then_some((kind, name))
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.'))
}
