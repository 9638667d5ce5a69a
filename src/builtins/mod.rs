mod lexicon;
mod meta;
mod tables;
mod text;

use crate::frame::Frame;
use crate::value::Value;

pub(crate) fn type_error(message: impl Into<String>) -> Value {
    Value::exc("TypeError", message)
}

fn bind_native(
    frame: &mut Frame,
    name: &str,
    f: impl Fn(&[Value], &mut Frame) -> Value + 'static,
) {
    frame.bind(name, Value::func(name, f));
}

/// Table/CSV query helpers: `where`, `select`, `join`, `read_csv`.
pub fn register_tables(frame: &mut Frame) {
    bind_native(frame, "where", tables::builtin_where);
    bind_native(frame, "select", tables::builtin_select);
    bind_native(frame, "join", tables::builtin_join);
    bind_native(frame, "read_csv", tables::builtin_read_csv);
}

/// Terminal text helpers: `ansi`, `terminal_width`, `wrap_text`, and the
/// side-effecting `shell` escape hatch.
pub fn register_text(frame: &mut Frame) {
    bind_native(frame, "ansi", text::builtin_ansi);
    bind_native(frame, "terminal_width", text::builtin_terminal_width);
    bind_native(frame, "wrap_text", text::builtin_wrap_text);
    bind_native(frame, "shell", text::builtin_shell);
}

/// Localization helpers over the frame's lexicon: `set_lang`, `get_lang`,
/// `add_words`, `get`.
pub fn register_lexicon(frame: &mut Frame) {
    bind_native(frame, "set_lang", lexicon::builtin_set_lang);
    bind_native(frame, "get_lang", lexicon::builtin_get_lang);
    bind_native(frame, "add_words", lexicon::builtin_add_words);
    bind_native(frame, "get", lexicon::builtin_get);
}

/// Meta-object helpers and the evaluator itself as callable values:
/// `getattr`, `setattr`, `eval`, `exec`.
pub fn register_meta(frame: &mut Frame) {
    bind_native(frame, "getattr", meta::builtin_getattr);
    bind_native(frame, "setattr", meta::builtin_setattr);
    bind_native(frame, "eval", meta::builtin_eval);
    bind_native(frame, "exec", meta::builtin_exec);
}

/// Populate a frame with every builtin registrar.
pub fn register_all(frame: &mut Frame) {
    register_tables(frame);
    register_text(frame);
    register_lexicon(frame);
    register_meta(frame);
}
