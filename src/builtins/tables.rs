use std::collections::HashMap;
use std::fs;

use super::type_error;
use crate::frame::Frame;
use crate::value::Value;

// ── where(table, predicate) ──────────────────────────────────────────
/// Keep the rows for which `predicate([row], frame)` returns `Bool(true)`.
/// Any other predicate result excludes the row. Input order is preserved.
pub(crate) fn builtin_where(args: &[Value], frame: &mut Frame) -> Value {
    let table = match args.first() {
        Some(Value::List(items)) => items.clone(),
        _ => return Value::empty_list(),
    };
    let pred = match args.get(1) {
        Some(Value::Func(f)) => f.clone(),
        _ => return type_error("where: predicate must be a function"),
    };

    // Snapshot the rows: the predicate may hold an aliased handle to the
    // table and mutate it mid-iteration.
    let rows: Vec<Value> = table.borrow().clone();
    let mut out = Vec::new();
    for row in rows {
        let res = pred.call(std::slice::from_ref(&row), frame);
        if matches!(res, Value::Bool(true)) {
            out.push(row);
        }
    }
    Value::list(out)
}

// ── select(table, keys) ──────────────────────────────────────────────
/// Project each Dict row down to the requested keys. Keys absent from a
/// row are silently omitted; non-Dict rows are skipped.
pub(crate) fn builtin_select(args: &[Value], _frame: &mut Frame) -> Value {
    let table = match args.first() {
        Some(Value::List(items)) => items.clone(),
        _ => return type_error("select: table must be a list"),
    };
    let keys = match args.get(1) {
        Some(Value::List(keys)) => keys.clone(),
        _ => return type_error("select: keys must be a list"),
    };

    let mut out = Vec::new();
    for row in table.borrow().iter() {
        let dict = match row {
            Value::Dict(d) => d,
            _ => continue,
        };
        let mut picked = HashMap::new();
        for key in keys.borrow().iter() {
            if let Value::Str(k) = key {
                if let Some(v) = dict.borrow().get(k.as_str()) {
                    picked.insert(k.as_ref().clone(), v.clone());
                }
            }
        }
        out.push(Value::dict(picked));
    }
    Value::list(out)
}

// ── join(left, right, key) ───────────────────────────────────────────
/// Nested-loop equi-join: rows match when both carry `key` with
/// string-equal values. The merged row is left overlaid by right, and
/// every matching pair produces a row (Cartesian, not 1:1).
pub(crate) fn builtin_join(args: &[Value], _frame: &mut Frame) -> Value {
    let left = match args.first() {
        Some(Value::List(items)) => items.clone(),
        _ => return type_error("join: left must be a list"),
    };
    let right = match args.get(1) {
        Some(Value::List(items)) => items.clone(),
        _ => return type_error("join: right must be a list"),
    };
    let key = match args.get(2) {
        Some(Value::Str(k)) => k.as_ref().clone(),
        _ => return type_error("join: key must be a string"),
    };

    let mut out = Vec::new();
    for lrow in left.borrow().iter() {
        let ld = match lrow {
            Value::Dict(d) => d,
            _ => continue,
        };
        let lval = match ld.borrow().get(&key) {
            Some(Value::Str(s)) => s.clone(),
            _ => continue,
        };
        for rrow in right.borrow().iter() {
            let rd = match rrow {
                Value::Dict(d) => d,
                _ => continue,
            };
            let matched = matches!(rd.borrow().get(&key), Some(Value::Str(s)) if *s == lval);
            if !matched {
                continue;
            }
            let mut merged: HashMap<String, Value> = HashMap::new();
            for (k, v) in ld.borrow().iter() {
                merged.insert(k.clone(), v.clone());
            }
            for (k, v) in rd.borrow().iter() {
                merged.insert(k.clone(), v.clone());
            }
            out.push(Value::dict(merged));
        }
    }
    Value::list(out)
}

// ── read_csv(path, separator = ",") ──────────────────────────────────

/// Split one delimited line. A `"` always toggles quoting state and is
/// dropped; there is no doubled-quote escape.
fn parse_csv_line(line: &str, sep: char) -> Vec<String> {
    let mut out = Vec::new();
    let mut buf = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == sep && !in_quotes {
            out.push(std::mem::take(&mut buf));
        } else {
            buf.push(c);
        }
    }
    out.push(buf);
    out
}

/// Read a header-first delimited file into a List of Dict rows. Short rows
/// are padded with empty strings. An unreadable file yields an `IOError`
/// Exception value, never a host error.
pub(crate) fn builtin_read_csv(args: &[Value], _frame: &mut Frame) -> Value {
    let path = match args.first() {
        Some(Value::Str(p)) => p.as_ref().clone(),
        _ => return type_error("read_csv: path must be a string"),
    };
    let sep = match args.get(1) {
        Some(Value::Str(s)) => s.chars().next().unwrap_or(','),
        _ => ',',
    };

    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(err) => return Value::exc("IOError", format!("cannot open {}: {}", path, err)),
    };

    let mut lines = content.lines();
    let headers = match lines.next() {
        Some(line) => parse_csv_line(line, sep),
        None => return Value::empty_list(),
    };

    let mut table = Vec::new();
    for line in lines {
        let cols = parse_csv_line(line, sep);
        let mut row = HashMap::new();
        for (i, header) in headers.iter().enumerate() {
            let field = cols.get(i).cloned().unwrap_or_default();
            row.insert(header.clone(), Value::str(field));
        }
        table.push(Value::dict(row));
    }
    Value::list(table)
}
