use std::process::Command;

use unicode_segmentation::UnicodeSegmentation;

use super::type_error;
use crate::frame::Frame;
use crate::value::Value;

fn color_code(name: &str) -> Option<&'static str> {
    match name {
        "black" => Some("30"),
        "red" => Some("31"),
        "green" => Some("32"),
        "yellow" => Some("33"),
        "blue" => Some("34"),
        "magenta" => Some("35"),
        "cyan" => Some("36"),
        "white" => Some("37"),
        _ => None,
    }
}

// ── ansi(text, color, bold = False, bg) ──────────────────────────────
/// Wrap `text` in ANSI escape codes. The palette is the fixed 8 colors;
/// an unknown color contributes no code, and with no codes at all the
/// text comes back unchanged. The optional fourth argument selects a
/// background color (foreground code + 10).
pub(crate) fn builtin_ansi(args: &[Value], _frame: &mut Frame) -> Value {
    let text = match args.first() {
        Some(Value::Str(s)) => s.as_ref().clone(),
        _ => String::new(),
    };
    let bold = matches!(args.get(2), Some(Value::Bool(true)));

    let mut codes: Vec<String> = Vec::new();
    if bold {
        codes.push("1".to_string());
    }
    if let Some(Value::Str(color)) = args.get(1) {
        if let Some(code) = color_code(color) {
            codes.push(code.to_string());
        }
    }
    if let Some(Value::Str(bg)) = args.get(3) {
        if let Some(code) = color_code(bg) {
            if let Ok(n) = code.parse::<i32>() {
                codes.push((n + 10).to_string());
            }
        }
    }

    if codes.is_empty() {
        return Value::str(text);
    }
    Value::str(format!("\x1b[{}m{}\x1b[0m", codes.join(";"), text))
}

// ── terminal_width() ─────────────────────────────────────────────────
fn detect_terminal_width() -> i64 {
    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(n) = cols.parse::<i64>() {
            return n;
        }
    }
    if let Ok(out) = Command::new("sh")
        .arg("-c")
        .arg("stty size 2>/dev/null | awk '{print $2}'")
        .output()
    {
        if let Ok(s) = String::from_utf8(out.stdout) {
            if let Ok(n) = s.trim().parse::<i64>() {
                return n;
            }
        }
    }
    80
}

/// Best-effort terminal width: `COLUMNS`, then `stty size`, then 80.
pub(crate) fn builtin_terminal_width(_args: &[Value], _frame: &mut Frame) -> Value {
    Value::Int(detect_terminal_width())
}

// ── wrap_text(text, width = terminal_width()) ────────────────────────

fn display_width(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Greedy word wrap into a List of Str lines. Width is measured in
/// grapheme clusters. A single word longer than the width gets a line
/// of its own.
pub(crate) fn builtin_wrap_text(args: &[Value], _frame: &mut Frame) -> Value {
    let text = match args.first() {
        Some(Value::Str(s)) => s.as_ref().clone(),
        _ => String::new(),
    };
    let width = match args.get(1) {
        Some(Value::Int(n)) if *n > 0 => *n as usize,
        _ => detect_terminal_width().max(1) as usize,
    };

    let mut out = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && display_width(&line) + 1 + display_width(word) > width {
            out.push(Value::str(std::mem::take(&mut line)));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        out.push(Value::str(line));
    }
    Value::list(out)
}

// ── shell(command) ───────────────────────────────────────────────────
/// Run `command` through `sh -c` and return its exit code, `-1` if the
/// shell could not be spawned. Blocks the calling thread for the whole
/// run; this is the documented side-effecting escape hatch, not a
/// sandbox.
pub(crate) fn builtin_shell(args: &[Value], _frame: &mut Frame) -> Value {
    let cmd = match args.first() {
        Some(Value::Str(s)) => s.as_ref().clone(),
        _ => return type_error("shell: command must be a string"),
    };
    match Command::new("sh").arg("-c").arg(&cmd).status() {
        Ok(status) => Value::Int(i64::from(status.code().unwrap_or(0))),
        Err(_) => Value::Int(-1),
    }
}
