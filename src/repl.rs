use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::builtins::register_all;
use crate::frame::Frame;
use crate::interpreter::exec;
use crate::value::Value;

/// Process one line of REPL input. Returns the display string, if any.
///
/// This is the testable core of the REPL loop — no I/O dependencies
/// beyond the frame.
fn process_line(frame: &mut Frame, line: &str) -> Option<String> {
    if line.trim().is_empty() {
        return None;
    }
    match exec(line, frame) {
        Value::None => None,
        value => Some(format!("{}\n", value.to_string_value())),
    }
}

pub fn run_repl() {
    let mut rl = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("Failed to initialize line editor: {}", err);
            std::process::exit(1);
        }
    };

    let history_path = history_path();
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    let mut frame = Frame::new();
    register_all(&mut frame);

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                if let Some(text) = process_line(&mut frame, &line) {
                    print!("{}", text);
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C: drop the line, keep the session
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D: exit
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }
}

fn history_path() -> Option<std::path::PathBuf> {
    let home = std::env::var("HOME").ok()?;
    let dir = std::path::PathBuf::from(home).join(".tabscript");
    let _ = std::fs::create_dir_all(&dir);
    Some(dir.join("history"))
}
