use crate::bytecode::OpCode;
use crate::chunk::Chunk;
use crate::values::Value;
use crate::vm::{InterpretResult, VM};

/// Assembles a chunk that computes a value and halts, leaving the result on
/// the stack for inspection.
fn chunk_of(build: impl FnOnce(&mut Chunk)) -> Chunk {
  let mut chunk = Chunk::default();
  build(&mut chunk);
  chunk.write_op_code(OpCode::Return, 1);
  chunk
}

/// Runs a hand-assembled chunk and returns the single value it computed.
fn run_expr(vm: &mut VM, chunk: Chunk) -> Value {
  assert_eq!(vm.execute(chunk), InterpretResult::Ok);
  assert_eq!(vm.stack().len(), 1, "expected exactly one result value");
  vm.stack()[0]
}

#[test]
fn arithmetic_matches_host_evaluation() {
  let cases: Vec<(f64, f64, OpCode, f64)> = vec![
    (1.0, 2.0, OpCode::Add, 1.0 + 2.0),
    (5.5, 2.25, OpCode::Subtract, 5.5 - 2.25),
    (3.0, 7.0, OpCode::Multiply, 3.0 * 7.0),
    (1.0, 3.0, OpCode::Divide, 1.0 / 3.0),
  ];

  for (left, right, op, expected) in cases {
    let mut vm = VM::new();
    let chunk = chunk_of(|c| {
      c.write_constant(Value::Number(left), 1);
      c.write_constant(Value::Number(right), 1);
      c.write_op_code(op, 1);
    });

    assert_eq!(run_expr(&mut vm, chunk), Value::Number(expected));
  }
}

#[test]
fn nested_arithmetic_follows_the_stack() {
  // (1 + 2) * 3
  let mut vm = VM::new();
  let chunk = chunk_of(|c| {
    c.write_constant(Value::Number(1.0), 1);
    c.write_constant(Value::Number(2.0), 1);
    c.write_op_code(OpCode::Add, 1);
    c.write_constant(Value::Number(3.0), 1);
    c.write_op_code(OpCode::Multiply, 1);
  });

  assert_eq!(run_expr(&mut vm, chunk), Value::Number(9.0));
}

#[test]
fn division_by_zero_is_not_an_error() {
  let mut vm = VM::new();
  let chunk = chunk_of(|c| {
    c.write_constant(Value::Number(1.0), 1);
    c.write_constant(Value::Number(0.0), 1);
    c.write_op_code(OpCode::Divide, 1);
  });

  assert_eq!(run_expr(&mut vm, chunk), Value::Number(f64::INFINITY));
}

#[test]
fn nan_is_not_equal_to_itself() {
  let mut vm = VM::new();
  let chunk = chunk_of(|c| {
    for _ in 0..2 {
      c.write_constant(Value::Number(0.0), 1);
      c.write_constant(Value::Number(0.0), 1);
      c.write_op_code(OpCode::Divide, 1);
    }
    c.write_op_code(OpCode::Equals, 1);
  });

  assert_eq!(run_expr(&mut vm, chunk), Value::Bool(false));
}

#[test]
fn long_constants_load_correctly() {
  let mut vm = VM::new();
  let mut chunk = Chunk::default();

  // Fill the pool past the one-byte range, then load a long-encoded value.
  for i in 0..300 {
    chunk.add_constant(Value::Number(i as f64));
  }
  chunk.write_constant(Value::Number(123.5), 1);
  chunk.write_op_code(OpCode::Return, 1);

  assert_eq!(run_expr(&mut vm, chunk), Value::Number(123.5));
}

#[test]
fn comparison_and_logic_not() {
  let mut vm = VM::new();

  // 2 > 1
  let chunk = chunk_of(|c| {
    c.write_constant(Value::Number(2.0), 1);
    c.write_constant(Value::Number(1.0), 1);
    c.write_op_code(OpCode::GreaterThan, 1);
  });
  assert_eq!(run_expr(&mut vm, chunk), Value::Bool(true));

  // !0 is false: zero is truthy.
  let chunk = chunk_of(|c| {
    c.write_constant(Value::Number(0.0), 1);
    c.write_op_code(OpCode::LogicNot, 1);
  });
  assert_eq!(run_expr(&mut vm, chunk), Value::Bool(false));

  // !nil is true.
  let chunk = chunk_of(|c| {
    c.write_op_code(OpCode::LoadImmNil, 1);
    c.write_op_code(OpCode::LogicNot, 1);
  });
  assert_eq!(run_expr(&mut vm, chunk), Value::Bool(true));
}

#[test]
fn equality_across_types_is_false() {
  let mut vm = VM::new();
  let one_str = vm.heap_mut().intern("1");

  let chunk = chunk_of(|c| {
    c.write_constant(Value::Number(1.0), 1);
    c.write_constant(Value::Str(one_str), 1);
    c.write_op_code(OpCode::Equals, 1);
  });

  assert_eq!(run_expr(&mut vm, chunk), Value::Bool(false));
}

#[test]
fn string_concatenation_joins_left_then_right() {
  let mut vm = VM::new();
  let foo = vm.heap_mut().intern("foo");
  let bar = vm.heap_mut().intern("bar");

  let chunk = chunk_of(|c| {
    c.write_constant(Value::Str(foo), 1);
    c.write_constant(Value::Str(bar), 1);
    c.write_op_code(OpCode::Add, 1);
  });

  let result = run_expr(&mut vm, chunk);
  match result {
    Value::Str(id) => assert_eq!(&*vm.heap().get_str(id).text, "foobar"),
    other => panic!("Expected a string result, got {:?}", other),
  }

  // The concatenation result was interned like every other string.
  let interned = vm.heap_mut().intern("foobar");
  assert_eq!(Value::Str(interned), result);
}

#[test]
fn negating_a_non_number_is_a_runtime_error() {
  let mut vm = VM::new();
  let chunk = chunk_of(|c| {
    c.write_op_code(OpCode::LoadImmTrue, 1);
    c.write_op_code(OpCode::Negate, 1);
  });

  assert_eq!(vm.execute(chunk), InterpretResult::RuntimeError);
  // Runtime errors reset the stack.
  assert!(vm.stack().is_empty());
}

#[test]
fn adding_a_string_and_a_number_is_a_runtime_error() {
  let mut vm = VM::new();
  let a = vm.heap_mut().intern("a");

  let chunk = chunk_of(|c| {
    c.write_constant(Value::Str(a), 1);
    c.write_constant(Value::Number(1.0), 1);
    c.write_op_code(OpCode::Add, 1);
  });

  assert_eq!(vm.execute(chunk), InterpretResult::RuntimeError);
}

#[test]
fn comparing_non_numbers_is_a_runtime_error() {
  let mut vm = VM::new();
  let chunk = chunk_of(|c| {
    c.write_op_code(OpCode::LoadImmTrue, 1);
    c.write_op_code(OpCode::LoadImmNil, 1);
    c.write_op_code(OpCode::LessThan, 1);
  });

  assert_eq!(vm.execute(chunk), InterpretResult::RuntimeError);
}

#[test]
fn interpret_runs_whole_programs() {
  let mut vm = VM::new();

  assert_eq!(vm.interpret("print 1 + 2 * 3;"), InterpretResult::Ok);
  assert_eq!(vm.interpret("print \"foo\" + \"bar\";"), InterpretResult::Ok);
  assert_eq!(vm.interpret("print !nil; print !0;"), InterpretResult::Ok);
  assert_eq!(vm.interpret("print 1 == 1; print 1 == \"1\";"), InterpretResult::Ok);
  assert_eq!(vm.interpret("1 + 2;"), InterpretResult::Ok);

  // Statements balance their stack effect.
  assert!(vm.stack().is_empty());
}

#[test]
fn interpret_reports_compile_errors() {
  let mut vm = VM::new();
  assert_eq!(vm.interpret("print 1"), InterpretResult::CompileError);
}

#[test]
fn interpret_reports_runtime_errors() {
  let mut vm = VM::new();

  assert_eq!(vm.interpret("print -true;"), InterpretResult::RuntimeError);
  assert_eq!(vm.interpret("print \"a\" + 1;"), InterpretResult::RuntimeError);

  // The VM stays usable after an error.
  assert_eq!(vm.interpret("print 1;"), InterpretResult::Ok);
}
