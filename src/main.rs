use std::env;
use std::fs;
use std::io::{self, IsTerminal, Read};

use tabscript::{builtins, exec, Frame, Value};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut repl_flag = false;
    let mut filtered_args: Vec<String> = Vec::new();
    for arg in &args[1..] {
        if arg == "--repl" {
            repl_flag = true;
        } else {
            filtered_args.push(arg.clone());
        }
    }

    if repl_flag || (filtered_args.is_empty() && io::stdin().is_terminal()) {
        tabscript::repl::run_repl();
        return;
    }

    let input = if !filtered_args.is_empty() && filtered_args[0] == "-e" {
        if filtered_args.len() < 2 {
            eprintln!("Usage: {} -e <code>", args[0]);
            std::process::exit(1);
        }
        filtered_args[1].clone()
    } else if !filtered_args.is_empty() {
        fs::read_to_string(&filtered_args[0]).unwrap_or_else(|err| {
            eprintln!("Failed to read {}: {}", filtered_args[0], err);
            std::process::exit(1);
        })
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).unwrap_or_else(|err| {
            eprintln!("Failed to read stdin: {}", err);
            std::process::exit(1);
        });
        buf
    };

    let mut frame = Frame::new();
    builtins::register_all(&mut frame);

    match exec(&input, &mut frame) {
        Value::Exc(e) => {
            eprintln!("{}: {}", e.kind, e.message);
            std::process::exit(1);
        }
        Value::None => {}
        value => println!("{}", value.to_string_value()),
    }
}
