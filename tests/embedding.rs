//! End-to-end embedding scenarios: a host builds a frame, registers
//! natives, runs script text, and reads values back.

use std::collections::HashMap;
use std::fs;
use std::io::Write;

use tabscript::{builtins, eval, exec, Frame, Value};

fn dict_get(value: &Value, key: &str) -> Option<Value> {
    match value {
        Value::Dict(d) => d.borrow().get(key).cloned(),
        _ => None,
    }
}

fn list_items(value: &Value) -> Vec<Value> {
    match value {
        Value::List(items) => items.borrow().clone(),
        other => panic!("expected a list, got {}", other.type_name()),
    }
}

#[test]
fn csv_pipeline_through_script_text() {
    let path = std::env::temp_dir().join(format!("tabscript-pipeline-{}.csv", std::process::id()));
    let mut f = fs::File::create(&path).expect("create temp csv");
    writeln!(f, "id,name,role").expect("write header");
    writeln!(f, "1,ada,admin").expect("write row");
    writeln!(f, "2,bob,user").expect("write row");
    drop(f);

    let mut frame = Frame::new();
    builtins::register_all(&mut frame);
    frame.bind(
        "is_admin",
        Value::func("is_admin", |args, _| {
            let role = args.first().and_then(|r| dict_get(r, "role"));
            Value::Bool(matches!(role, Some(Value::Str(s)) if s.as_str() == "admin"))
        }),
    );
    frame.bind("cols", Value::list(vec![Value::str("name")]));

    let script = format!(
        "rows = read_csv(\"{}\")\nadmins = where(rows, is_admin)\nnames = select(admins, cols)\n",
        path.display()
    );
    let last = exec(&script, &mut frame);

    let names = list_items(&last);
    assert_eq!(names.len(), 1);
    assert_eq!(dict_get(&names[0], "name"), Some(Value::str("ada")));
    assert_eq!(dict_get(&names[0], "role"), None);

    // The intermediate bindings landed in the frame as well.
    assert_eq!(list_items(&frame.lookup("rows").expect("rows bound")).len(), 2);
    assert_eq!(frame.lookup("names"), Some(last));

    let _ = fs::remove_file(&path);
}

#[test]
fn join_through_script_text() {
    let mut frame = Frame::new();
    builtins::register_all(&mut frame);

    let mut l = HashMap::new();
    l.insert("id".to_string(), Value::str("1"));
    l.insert("n".to_string(), Value::str("x"));
    let mut r = HashMap::new();
    r.insert("id".to_string(), Value::str("1"));
    r.insert("m".to_string(), Value::str("y"));
    frame.bind("left", Value::list(vec![Value::dict(l)]));
    frame.bind("right", Value::list(vec![Value::dict(r)]));

    let joined = eval("join(left, right, \"id\")", &mut frame);
    let rows = list_items(&joined);
    assert_eq!(rows.len(), 1);
    assert_eq!(dict_get(&rows[0], "n"), Some(Value::str("x")));
    assert_eq!(dict_get(&rows[0], "m"), Some(Value::str("y")));
}

#[test]
fn native_can_look_up_and_invoke_another_registered_function() {
    let mut frame = Frame::new();
    frame.bind(
        "classify",
        Value::func("classify", |args, _| match args.first() {
            Some(Value::Int(n)) if n % 2 == 0 => Value::str("even"),
            Some(Value::Int(_)) => Value::str("odd"),
            _ => Value::exc("TypeError", "classify: expected an int"),
        }),
    );
    // The helper resolves its collaborator through the frame at call time,
    // so a later rebinding of "classify" changes its behavior.
    frame.bind(
        "classify_all",
        Value::func("classify_all", |args, frame| {
            let items = match args.first() {
                Some(Value::List(items)) => items.clone(),
                _ => return Value::exc("TypeError", "classify_all: expected a list"),
            };
            let classify = match frame.lookup("classify") {
                Some(Value::Func(f)) => f,
                _ => return Value::exc("NameError", "function not found"),
            };
            let snapshot: Vec<Value> = items.borrow().clone();
            let mut out = Vec::new();
            for item in snapshot {
                out.push(classify.call(std::slice::from_ref(&item), frame));
            }
            Value::list(out)
        }),
    );
    frame.bind("nums", Value::list(vec![Value::Int(2), Value::Int(3)]));

    let out = eval("classify_all(nums)", &mut frame);
    assert_eq!(
        list_items(&out),
        vec![Value::str("even"), Value::str("odd")]
    );
}

#[test]
fn localization_is_per_frame_and_script_driven() {
    let mut frame = Frame::new();
    builtins::register_all(&mut frame);

    let mut de = HashMap::new();
    de.insert("hello".to_string(), Value::str("hallo"));
    frame.bind("de_words", Value::dict(de));

    exec(
        "add_words(\"de\", de_words)\nset_lang(\"de\")\nmsg = get(\"hello\")",
        &mut frame,
    );
    assert_eq!(frame.lookup("msg"), Some(Value::str("hallo")));
    assert_eq!(eval("get_lang(\"\")", &mut frame), Value::str("de"));

    // A second frame is untouched.
    let mut other = Frame::new();
    builtins::register_all(&mut other);
    assert_eq!(eval("get(\"hello\")", &mut other), Value::str("hello"));
}

#[test]
fn failures_come_back_as_exception_values_not_panics() {
    let mut frame = Frame::new();
    builtins::register_all(&mut frame);

    let last = exec(
        "table = read_csv(\"/nonexistent/tabscript.csv\")",
        &mut frame,
    );
    assert!(matches!(&last, Value::Exc(e) if e.kind == "IOError"));
    // The exception value is an ordinary binding; the caller decides what
    // to do with it.
    assert_eq!(frame.lookup("table"), Some(last));
}

#[test]
fn dict_as_object_mutation_via_script() {
    let mut frame = Frame::new();
    builtins::register_all(&mut frame);

    let obj = Value::empty_dict();
    frame.bind("obj", obj.clone());

    exec("setattr(obj, \"hp\", 10)", &mut frame);
    assert_eq!(eval("getattr(obj, \"hp\")", &mut frame), Value::Int(10));
    // Visible through the host's own handle too.
    assert_eq!(dict_get(&obj, "hp"), Some(Value::Int(10)));
}

#[test]
fn eval_value_round_trip_through_the_registry() {
    let mut frame = Frame::new();
    builtins::register_all(&mut frame);

    // `eval` is itself a Func-typed binding, callable from script text.
    assert_eq!(eval("eval(\"42\")", &mut frame), Value::Int(42));
}
