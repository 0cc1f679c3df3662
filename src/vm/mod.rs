use crate::bytecode::OpCode;
use crate::chunk::Chunk;
use crate::compiler::Compiler;
use crate::objects::Heap;
use crate::values::Value;
use crate::STACK_MAX;
use num_traits::FromPrimitive;

// Submodules
mod arithmetic;
mod run;

/// The types of results the interpreter can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpretResult {
  CompileError,
  Ok,
  RuntimeError,
}

/// The result of executing a single instruction: keep going, halt cleanly,
/// or halt with a runtime error.
pub(crate) enum RuntimeResult {
  Continue,
  EndOk,
  Error { message: String },
}

/// Represents a virtual machine: the value stack, the instruction pointer
/// into the active chunk, and the heap holding every allocated object and
/// the string intern table.
///
/// A VM instance is owned by a single executor; callers running multiple
/// programs through one VM must serialize their `interpret` calls.
pub struct VM {
  chunk: Chunk,
  ip: usize,
  stack: Vec<Value>,
  heap: Heap,
}

impl VM {
  /// Creates a new virtual machine with an empty stack and an empty heap.
  pub fn new() -> VM {
    VM {
      chunk: Chunk::default(),
      ip: 0,
      stack: Vec::with_capacity(STACK_MAX),
      heap: Heap::default(),
    }
  }

  /// Compiles and runs a source string.
  ///
  /// ## Returns
  /// * `InterpretResult` – The result of the source interpretation.
  pub fn interpret(&mut self, source: &str) -> InterpretResult {
    let chunk = match Compiler::compile(source, &mut self.heap) {
      Ok(chunk) => chunk,
      Err(result) => return result,
    };

    self.execute(chunk)
  }

  /// Runs a pre-assembled chunk. Each call installs the chunk as the active
  /// one and resets the instruction pointer; the previous chunk is dropped.
  pub fn execute(&mut self, chunk: Chunk) -> InterpretResult {
    self.chunk = chunk;
    self.ip = 0;

    match self.run() {
      RuntimeResult::EndOk => InterpretResult::Ok,
      RuntimeResult::Error { message } => {
        self.report_runtime_error(&message);
        InterpretResult::RuntimeError
      }
      RuntimeResult::Continue => unreachable!("The run loop only stops on 'EndOk' or 'Error'."),
    }
  }

  /// A view of the current value stack.
  pub fn stack(&self) -> &[Value] {
    &self.stack
  }

  /// The heap owned by this virtual machine.
  pub fn heap(&self) -> &Heap {
    &self.heap
  }

  /// Mutable access to the heap, for embedders that allocate values before
  /// handing a chunk to [`VM::execute`].
  pub fn heap_mut(&mut self) -> &mut Heap {
    &mut self.heap
  }

  /// Reports a runtime error to the console, recovering the offending source
  /// line from the chunk's line table, and resets the stack.
  fn report_runtime_error(&mut self, message: &str) {
    eprintln!("{}", message);
    eprintln!("[line {}] in script", self.chunk.get_line(self.ip - 1));

    self.stack.clear();
  }

  /// Fetches the next instruction and advances the instruction pointer. The
  /// compiler only emits valid opcodes, so a byte that does not decode is an
  /// interpreter bug, not a user error.
  fn next_op_code(&mut self) -> OpCode {
    let byte = self.chunk.get_byte(self.ip);
    self.ip += 1;

    match FromPrimitive::from_u8(byte) {
      Some(instr) => instr,
      None => panic!("Unknown opcode '{}' at offset {}.", byte, self.ip - 1),
    }
  }

  /// Fetches the next byte operand and advances the instruction pointer.
  fn next_byte(&mut self) -> u8 {
    let byte = self.chunk.get_byte(self.ip);
    self.ip += 1;
    byte
  }

  /// Fetches the next three bytes as a little-endian 24-bit operand and
  /// advances the instruction pointer.
  fn next_long_operand(&mut self) -> usize {
    let b0 = self.next_byte() as usize;
    let b1 = self.next_byte() as usize;
    let b2 = self.next_byte() as usize;

    b0 | (b1 << 8) | (b2 << 16)
  }

  /// Reads a constant from the active chunk's pool.
  fn read_constant(&self, idx: usize) -> Value {
    *self.chunk.get_constant(idx)
  }

  /// Pushes a value onto the stack.
  fn push_stack(&mut self, new_val: Value) {
    self.stack.push(new_val)
  }

  /// Pops a value off the stack. The stack effect of every instruction is
  /// statically known, so an empty stack here is an interpreter bug.
  fn pop_stack(&mut self) -> Value {
    match self.stack.pop() {
      Some(val) => val,
      None => panic!("Stack is empty!"),
    }
  }

  /// Prints the execution trace for the program. Useful for debugging the VM.
  #[cfg(feature = "trace_execution")]
  fn print_execution(&self) {
    print!("          ");
    for value in &self.stack {
      print!("[ {} ]", value.display_plain(&self.heap));
    }
    println!();

    crate::disassembler::disassemble_instruction(&self.chunk, &self.heap, self.ip);
  }
}

impl Default for VM {
  fn default() -> Self {
    Self::new()
  }
}
