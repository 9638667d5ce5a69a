//! A minimal embeddable dynamically-typed value runtime.
//!
//! The pieces: a closed tagged-union [`Value`], a flat symbol table
//! [`Frame`], a uniform native-function calling convention
//! (`Fn(&[Value], &mut Frame) -> Value`), a builtin operation library
//! (table queries, ANSI text, localization, meta-object access), and a
//! deliberately narrow [`eval`]/[`exec`] layer that interprets text
//! against a frame. Failures travel in band as `Exc` values; the host
//! inspects the discriminant of whatever comes back.
//!
//! ```
//! use tabscript::{builtins, eval, exec, Frame, Value};
//!
//! let mut frame = Frame::new();
//! builtins::register_all(&mut frame);
//! frame.bind("double", Value::func("double", |args, _| {
//!     match args.first() {
//!         Some(Value::Int(n)) => Value::Int(n * 2),
//!         _ => Value::exc("TypeError", "double: expected an int"),
//!     }
//! }));
//!
//! assert_eq!(eval("double(21)", &mut frame), Value::Int(42));
//! exec("answer = double(21)", &mut frame);
//! assert_eq!(frame.lookup("answer"), Some(Value::Int(42)));
//! ```

pub mod builtins;
mod frame;
mod interpreter;
mod lexer;
pub mod repl;
mod trace;
mod value;

pub use frame::{Frame, Lexicon};
pub use interpreter::{eval, exec};
pub use value::{ExceptionData, NativeFn, Value};
