use crate::frame::Frame;
use crate::lexer::tokenize;
use crate::trace::trace_log;
use crate::value::Value;

/// Parse the leading digit run of a token, the way the evaluator's single
/// integer-literal form is defined: `42` is 42 and `42abc` is still 42.
fn int_literal(token: &str) -> i64 {
    let digits: String = token.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

fn is_quoted(token: &str) -> bool {
    token.len() >= 2 && token.starts_with('"') && token.ends_with('"')
}

/// Evaluate a single expression against `frame`.
///
/// The accepted grammar is deliberately narrow: an integer literal, a bare
/// identifier, or one single-level call `name(arg, arg, ...)`. Anything
/// else degrades to `Value::None` rather than failing loudly; the only
/// in-band error this function produces itself is `NameError` when the
/// call position does not resolve to a function.
pub fn eval(expr: &str, frame: &mut Frame) -> Value {
    let toks = tokenize(expr);
    trace_log!("eval", "{:?} -> {} tokens", expr, toks.len());

    // Single token: integer literal or identifier lookup.
    if toks.len() == 1 {
        let t = &toks[0];
        if t.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            return Value::Int(int_literal(t));
        }
        if let Some(value) = frame.lookup(t) {
            return value;
        }
        // Unresolved identifiers fall through to None below.
    }

    // Call shape: name ( arg , arg , ... ) — at least `f ( x )`.
    // A zero-argument call is three tokens and is not recognized.
    if toks.len() >= 4 && toks[1] == "(" {
        let fname = &toks[0];
        let func = match frame.lookup(fname) {
            Some(Value::Func(f)) => f,
            _ => return Value::exc("NameError", "function not found"),
        };

        let mut call_args = Vec::new();
        for tok in &toks[2..] {
            if tok == ")" {
                break;
            }
            if tok == "," {
                continue;
            }
            if tok.chars().next().is_some_and(|c| c.is_ascii_digit()) {
                call_args.push(Value::Int(int_literal(tok)));
            } else if is_quoted(tok) {
                call_args.push(Value::str(&tok[1..tok.len() - 1]));
            } else if let Some(value) = frame.lookup(tok) {
                call_args.push(value);
            }
            // Unresolved identifier arguments are silently omitted.
        }
        return func.call(&call_args, frame);
    }

    Value::None
}

/// Run a multi-line source text against `frame`.
///
/// A line containing `=` is an assignment: the text left of the first `=`
/// (all whitespace removed) names the binding, the rest is evaluated via
/// [`eval`]. Other lines are evaluated whole. Returns the last computed
/// value, `None` for empty input.
///
/// The `=` split has no awareness of quoting, so a bare call line whose
/// string argument contains `=` is mis-split into an assignment.
pub fn exec(source: &str, frame: &mut Frame) -> Value {
    let mut last = Value::None;

    for line in source.lines() {
        if let Some(p) = line.find('=') {
            let name: String = line[..p].chars().filter(|c| !c.is_whitespace()).collect();
            let rhs = &line[p + 1..];
            last = eval(rhs, frame);
            trace_log!("exec", "bind {} = {}", name, last.type_name());
            frame.bind(name, last.clone());
        } else {
            last = eval(line, frame);
        }
    }
    last
}
