use super::type_error;
use crate::frame::Frame;
use crate::interpreter;
use crate::value::Value;

/// `getattr(obj, key, default = None)` — read a field of a Dict-as-object.
pub(crate) fn builtin_getattr(args: &[Value], _frame: &mut Frame) -> Value {
    let dict = match args.first() {
        Some(Value::Dict(d)) => d.clone(),
        _ => return type_error("getattr: object must be a dict"),
    };
    let key = match args.get(1) {
        Some(Value::Str(k)) => k.clone(),
        _ => return type_error("getattr: key must be a string"),
    };

    if let Some(value) = dict.borrow().get(key.as_str()) {
        return value.clone();
    }
    args.get(2).cloned().unwrap_or(Value::None)
}

/// `setattr(obj, key, value)` — write a field through the shared Dict
/// payload, visible to every holder of the object.
pub(crate) fn builtin_setattr(args: &[Value], _frame: &mut Frame) -> Value {
    if args.len() < 3 {
        return type_error("setattr: expected object, key and value");
    }
    let dict = match &args[0] {
        Value::Dict(d) => d.clone(),
        _ => return type_error("setattr: object must be a dict"),
    };
    let key = match &args[1] {
        Value::Str(k) => k.as_ref().clone(),
        _ => return type_error("setattr: key must be a string"),
    };

    dict.borrow_mut().insert(key, args[2].clone());
    Value::None
}

/// The evaluator exposed as a callable value; a non-string argument
/// degrades to `None` like any other malformed eval input.
pub(crate) fn builtin_eval(args: &[Value], frame: &mut Frame) -> Value {
    match args.first() {
        Some(Value::Str(src)) => {
            let src = src.as_ref().clone();
            interpreter::eval(&src, frame)
        }
        _ => Value::None,
    }
}

pub(crate) fn builtin_exec(args: &[Value], frame: &mut Frame) -> Value {
    match args.first() {
        Some(Value::Str(src)) => {
            let src = src.as_ref().clone();
            interpreter::exec(&src, frame)
        }
        _ => Value::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn getattr_reads_existing_fields() {
        let mut frame = Frame::new();
        let mut map = HashMap::new();
        map.insert("name".to_string(), Value::str("ada"));
        let obj = Value::dict(map);

        assert_eq!(
            builtin_getattr(&[obj, Value::str("name")], &mut frame),
            Value::str("ada")
        );
    }

    #[test]
    fn getattr_returns_the_default_when_absent() {
        let mut frame = Frame::new();
        let obj = Value::empty_dict();
        assert_eq!(
            builtin_getattr(&[obj.clone(), Value::str("age")], &mut frame),
            Value::None
        );
        assert_eq!(
            builtin_getattr(&[obj, Value::str("age"), Value::Int(0)], &mut frame),
            Value::Int(0)
        );
    }

    #[test]
    fn getattr_on_non_dict_is_a_type_error() {
        let mut frame = Frame::new();
        let out = builtin_getattr(&[Value::Int(1), Value::str("x")], &mut frame);
        assert!(matches!(out, Value::Exc(e) if e.kind == "TypeError"));
    }

    #[test]
    fn setattr_mutation_is_visible_through_every_handle() {
        let mut frame = Frame::new();
        let obj = Value::empty_dict();
        let alias = obj.clone();

        builtin_setattr(&[obj, Value::str("hp"), Value::Int(10)], &mut frame);
        assert_eq!(
            builtin_getattr(&[alias, Value::str("hp")], &mut frame),
            Value::Int(10)
        );
    }

    #[test]
    fn setattr_with_too_few_arguments_is_a_type_error() {
        let mut frame = Frame::new();
        let out = builtin_setattr(&[Value::empty_dict(), Value::str("x")], &mut frame);
        assert!(matches!(out, Value::Exc(e) if e.kind == "TypeError"));
    }

    #[test]
    fn eval_value_evaluates_against_the_same_frame() {
        let mut frame = Frame::new();
        frame.bind("n", Value::Int(8));
        assert_eq!(builtin_eval(&[Value::str("n")], &mut frame), Value::Int(8));
    }

    #[test]
    fn exec_value_binds_into_the_same_frame() {
        let mut frame = Frame::new();
        builtin_exec(&[Value::str("x = 5")], &mut frame);
        assert_eq!(frame.lookup("x"), Some(Value::Int(5)));
    }

    #[test]
    fn eval_of_non_string_degrades_to_none() {
        let mut frame = Frame::new();
        assert_eq!(builtin_eval(&[Value::Int(1)], &mut frame), Value::None);
        assert_eq!(builtin_eval(&[], &mut frame), Value::None);
    }
}
