use std::collections::HashMap;

use crate::value::Value;

/// Per-frame localization context: the current language code plus one word
/// table per language. Owned by the frame so that two frames never share
/// localization state behind the embedder's back.
#[derive(Debug, Clone)]
pub struct Lexicon {
    current: String,
    tables: HashMap<String, HashMap<String, String>>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    pub fn new() -> Self {
        Self {
            current: "en".to_string(),
            tables: HashMap::new(),
        }
    }

    pub fn set_lang(&mut self, code: impl Into<String>) {
        self.current = code.into();
    }

    pub fn lang(&self) -> &str {
        &self.current
    }

    /// Merge `words` into the table for `lang`. Existing keys are
    /// overwritten; other languages are untouched.
    pub fn add_words(&mut self, lang: &str, words: impl IntoIterator<Item = (String, String)>) {
        let table = self.tables.entry(lang.to_string()).or_default();
        for (k, v) in words {
            table.insert(k, v);
        }
    }

    /// Look up `key` in the current language's table. Falls back to the key
    /// itself, so a missing translation never breaks output.
    pub fn get(&self, key: &str) -> String {
        if let Some(table) = self.tables.get(&self.current) {
            if let Some(word) = table.get(key) {
                return word.clone();
            }
        }
        key.to_string()
    }
}

/// The flat symbol table for one embedding run.
///
/// One namespace, no lexical scoping: `exec` assignments and registrar
/// calls both land here, and the last write wins. Multiple frames may
/// coexist but share nothing automatically.
#[derive(Debug, Default)]
pub struct Frame {
    globals: HashMap<String, Value>,
    lexicon: Lexicon,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absence is a distinct outcome from a binding that holds `Value::None`.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.globals.get(name).cloned()
    }

    pub fn bind(&mut self, name: impl Into<String>, value: Value) {
        self.globals.insert(name.into(), value);
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn lexicon_mut(&mut self) -> &mut Lexicon {
        &mut self.lexicon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_distinguishes_absence_from_bound_none() {
        let mut frame = Frame::new();
        assert!(frame.lookup("x").is_none());

        frame.bind("x", Value::None);
        assert_eq!(frame.lookup("x"), Some(Value::None));
    }

    #[test]
    fn bind_overwrites_without_protection() {
        let mut frame = Frame::new();
        frame.bind("n", Value::Int(1));
        frame.bind("n", Value::str("two"));
        assert_eq!(frame.lookup("n"), Some(Value::str("two")));
    }

    #[test]
    fn frames_share_no_bindings() {
        let mut a = Frame::new();
        let b = Frame::new();
        a.bind("x", Value::Int(1));
        assert!(b.lookup("x").is_none());
    }

    #[test]
    fn lexicon_falls_back_to_key() {
        let lex = Lexicon::new();
        assert_eq!(lex.lang(), "en");
        assert_eq!(lex.get("missing_key"), "missing_key");
    }

    #[test]
    fn lexicon_add_words_merges_per_language() {
        let mut lex = Lexicon::new();
        lex.add_words("de", vec![("hello".to_string(), "hallo".to_string())]);
        lex.add_words("de", vec![("bye".to_string(), "tschau".to_string())]);

        assert_eq!(lex.get("hello"), "hello");
        lex.set_lang("de");
        assert_eq!(lex.get("hello"), "hallo");
        assert_eq!(lex.get("bye"), "tschau");
    }

    #[test]
    fn frames_have_independent_lexicons() {
        let mut a = Frame::new();
        let b = Frame::new();
        a.lexicon_mut().set_lang("fr");
        assert_eq!(a.lexicon().lang(), "fr");
        assert_eq!(b.lexicon().lang(), "en");
    }
}
