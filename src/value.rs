use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::frame::Frame;

/// A host-implemented function exposed to the interpreted layer.
///
/// Every native shares one calling convention: it receives the evaluated
/// argument list and a mutable reference to the frame it was invoked
/// against, and always hands back a `Value` (an `Exc` value on failure,
/// never a panic).
pub struct NativeFn {
    pub name: String,
    func: Box<dyn Fn(&[Value], &mut Frame) -> Value>,
}

impl NativeFn {
    pub fn new(
        name: impl Into<String>,
        func: impl Fn(&[Value], &mut Frame) -> Value + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            func: Box::new(func),
        }
    }

    pub fn call(&self, args: &[Value], frame: &mut Frame) -> Value {
        (self.func)(args, frame)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeFn({})", self.name)
    }
}

/// The in-band error payload: a (kind, message) pair such as
/// `("IOError", "cannot open file")`. Exceptions are ordinary values,
/// not an unwind mechanism.
#[derive(Debug, Clone, PartialEq)]
pub struct ExceptionData {
    pub kind: String,
    pub message: String,
}

/// The universal datum of the runtime.
///
/// `Int`/`Bool`/`None` are held inline; every other payload is shared and
/// reference-counted, so copying a Value copies a handle. Mutating a List
/// or Dict through one handle is visible through all others — that aliasing
/// is the runtime's object semantics, not an accident.
#[derive(Debug, Clone)]
pub enum Value {
    None,
    Int(i64),
    Bool(bool),
    Str(Rc<String>),
    List(Rc<RefCell<Vec<Value>>>),
    Dict(Rc<RefCell<HashMap<String, Value>>>),
    Func(Rc<NativeFn>),
    Exc(Rc<ExceptionData>),
}

impl Value {
    pub fn str(s: impl Into<String>) -> Value {
        Value::Str(Rc::new(s.into()))
    }

    pub fn list(items: Vec<Value>) -> Value {
        Value::List(Rc::new(RefCell::new(items)))
    }

    pub fn empty_list() -> Value {
        Value::list(Vec::new())
    }

    pub fn dict(map: HashMap<String, Value>) -> Value {
        Value::Dict(Rc::new(RefCell::new(map)))
    }

    pub fn empty_dict() -> Value {
        Value::dict(HashMap::new())
    }

    pub fn func(
        name: impl Into<String>,
        f: impl Fn(&[Value], &mut Frame) -> Value + 'static,
    ) -> Value {
        Value::Func(Rc::new(NativeFn::new(name, f)))
    }

    pub fn exc(kind: impl Into<String>, message: impl Into<String>) -> Value {
        Value::Exc(Rc::new(ExceptionData {
            kind: kind.into(),
            message: message.into(),
        }))
    }

    pub fn is_exc(&self) -> bool {
        matches!(self, Value::Exc(_))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "None",
            Value::Int(_) => "Int",
            Value::Bool(_) => "Bool",
            Value::Str(_) => "Str",
            Value::List(_) => "List",
            Value::Dict(_) => "Dict",
            Value::Func(_) => "Func",
            Value::Exc(_) => "Exc",
        }
    }

    /// Display form used by the REPL and the CLI driver.
    pub fn to_string_value(&self) -> String {
        match self {
            Value::None => "None".to_string(),
            Value::Int(i) => i.to_string(),
            Value::Bool(true) => "True".to_string(),
            Value::Bool(false) => "False".to_string(),
            Value::Str(s) => s.as_ref().clone(),
            Value::List(items) => items
                .borrow()
                .iter()
                .map(|v| v.to_string_value())
                .collect::<Vec<_>>()
                .join(" "),
            Value::Dict(items) => items
                .borrow()
                .iter()
                .map(|(k, v)| format!("{}\t{}", k, v.to_string_value()))
                .collect::<Vec<_>>()
                .join("\n"),
            Value::Func(f) => f.name.clone(),
            Value::Exc(e) => format!("{}: {}", e.kind, e.message),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => {
                Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow()
            }
            (Value::Dict(a), Value::Dict(b)) => {
                Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow()
            }
            (Value::Func(a), Value::Func(b)) => Rc::ptr_eq(a, b),
            (Value::Exc(a), Value::Exc(b)) => a == b,
            _ => false,
        }
    }
}
