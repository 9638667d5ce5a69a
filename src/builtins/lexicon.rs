use crate::frame::Frame;
use crate::value::Value;

/// Select the frame's current language. A non-string argument is a no-op.
pub(crate) fn builtin_set_lang(args: &[Value], frame: &mut Frame) -> Value {
    if let Some(Value::Str(code)) = args.first() {
        frame.lexicon_mut().set_lang(code.as_str());
    }
    Value::None
}

pub(crate) fn builtin_get_lang(_args: &[Value], frame: &mut Frame) -> Value {
    Value::str(frame.lexicon().lang())
}

/// Merge a Dict of translations into one language's word table. Only Str
/// values are copied; anything else in the mapping is ignored.
pub(crate) fn builtin_add_words(args: &[Value], frame: &mut Frame) -> Value {
    let lang = match args.first() {
        Some(Value::Str(l)) => l.as_ref().clone(),
        _ => return Value::None,
    };
    let dict = match args.get(1) {
        Some(Value::Dict(d)) => d.clone(),
        _ => return Value::None,
    };

    let words: Vec<(String, String)> = dict
        .borrow()
        .iter()
        .filter_map(|(k, v)| match v {
            Value::Str(s) => Some((k.clone(), s.as_ref().clone())),
            _ => None,
        })
        .collect();
    frame.lexicon_mut().add_words(&lang, words);
    Value::None
}

/// Look up a word in the current language; falls back to the key itself,
/// so `get` never raises.
pub(crate) fn builtin_get(args: &[Value], frame: &mut Frame) -> Value {
    let key = match args.first() {
        Some(Value::Str(k)) => k.as_ref().clone(),
        _ => return Value::None,
    };
    Value::str(frame.lexicon().get(&key))
}
