use std::io::{self, Write};
use std::{env, fs, process};

use kite::vm::{InterpretResult, VM};

fn main() {
  // structure: kite <filename?>
  let args = env::args().collect::<Vec<String>>();

  match args.as_slice() {
    [_] => repl(),
    [_, file] => run_file(file),
    _ => {
      eprintln!("Usage: kite [script]");
      process::exit(64);
    }
  }
}

/// Reads source lines from stdin and feeds each one to a persistent VM, so
/// interned strings carry over between lines.
fn repl() {
  let mut vm = VM::new();

  println!("Kite {} interactive interpreter.", kite::VERSION);

  loop {
    print!("> ");
    io::stdout().flush().expect("Could not flush stdout.");

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
      // EOF (Ctrl+D): exit gracefully.
      Ok(0) => {
        println!();
        break;
      }
      Ok(_) => {
        vm.interpret(&line);
      }
      Err(error) => {
        eprintln!("Could not read input: {}", error);
        process::exit(74);
      }
    }
  }
}

/// Interprets a script file, mapping the result to the process exit code.
fn run_file(filename: &str) {
  let source = match fs::read_to_string(filename) {
    Ok(contents) => contents,
    Err(_) => {
      eprintln!("Could not read file '{}'.", filename);
      process::exit(74);
    }
  };

  let mut vm = VM::new();

  match vm.interpret(&source) {
    InterpretResult::Ok => process::exit(0),
    InterpretResult::CompileError => process::exit(65),
    InterpretResult::RuntimeError => process::exit(70),
  }
}
