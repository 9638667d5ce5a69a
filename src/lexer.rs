/// Split an expression into flat string tokens.
///
/// Two states: normal and inside a double-quoted string. In normal state
/// whitespace separates tokens and `(` `)` `,` are always single-character
/// tokens, even glued to other text. A quoted token keeps its surrounding
/// quote characters; the evaluator strips them when it materializes a Str.
pub(crate) fn tokenize(src: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut buf = String::new();
    let mut in_str = false;

    for c in src.chars() {
        if c == '"' && !in_str {
            in_str = true;
            buf.push(c);
        } else if c == '"' && in_str {
            buf.push(c);
            out.push(std::mem::take(&mut buf));
            in_str = false;
        } else if in_str {
            buf.push(c);
        } else if c.is_whitespace() {
            if !buf.is_empty() {
                out.push(std::mem::take(&mut buf));
            }
        } else if c == '(' || c == ')' || c == ',' {
            if !buf.is_empty() {
                out.push(std::mem::take(&mut buf));
            }
            out.push(c.to_string());
        } else {
            buf.push(c);
        }
    }
    if !buf.is_empty() {
        out.push(buf);
    }
    out
}
