use crate::bytecode::OpCode;
use crate::chunk::Chunk;
use crate::objects::Heap;

/// Disassembles the chunk, printing each instruction and
/// its related information.
///
/// ## Arguments
/// * `name` – the name to print for the current chunk.
pub fn disassemble_chunk(chunk: &Chunk, heap: &Heap, name: &str) {
  println!("== {} ==", name);

  let mut offset = 0;
  while offset < chunk.len() {
    offset = disassemble_instruction(chunk, heap, offset);
  }
}

/// Disassembles the single instruction at the given offset: the 4-digit
/// offset, the source line (or a bar when it matches the previous
/// instruction's line), the instruction name, and any operands.
///
/// ## Returns
/// `usize` – the offset of the next instruction.
pub fn disassemble_instruction(chunk: &Chunk, heap: &Heap, offset: usize) -> usize {
  print!("{:04} ", offset);

  let line = chunk.get_line(offset);
  if offset > 0 && line == chunk.get_line(offset - 1) {
    print!("   | ");
  } else {
    print!("{:>4} ", line);
  }

  let instruction = match chunk.get_op_code(offset) {
    Some(instr) => instr,
    None => {
      println!("Unknown opcode {}", chunk.get_byte(offset));
      return offset + 1;
    }
  };

  match instruction {
    OpCode::Add => simple_instruction("ADD", offset),
    OpCode::Divide => simple_instruction("DIVIDE", offset),
    OpCode::Equals => simple_instruction("EQUALS", offset),
    OpCode::GreaterThan => simple_instruction("GREATER_THAN", offset),
    OpCode::LessThan => simple_instruction("LESS_THAN", offset),
    OpCode::LoadImmFalse => simple_instruction("LOAD_IMM_FALSE", offset),
    OpCode::LoadImmNil => simple_instruction("LOAD_IMM_NIL", offset),
    OpCode::LoadImmTrue => simple_instruction("LOAD_IMM_TRUE", offset),
    OpCode::LogicNot => simple_instruction("LOGIC_NOT", offset),
    OpCode::Multiply => simple_instruction("MULTIPLY", offset),
    OpCode::Negate => simple_instruction("NEGATE", offset),
    OpCode::PopStackTop => simple_instruction("POP_STACK_TOP", offset),
    OpCode::Print => simple_instruction("PRINT", offset),
    OpCode::Return => simple_instruction("RETURN", offset),
    OpCode::Subtract => simple_instruction("SUBTRACT", offset),
    OpCode::LoadConstant => constant_instruction("LOAD_CONSTANT", chunk, heap, offset),
    OpCode::LoadConstantLong => long_constant_instruction("LOAD_CONSTANT_LONG", chunk, heap, offset),
  }
}

/// Prints an instruction with no chunk operands.
fn simple_instruction(name: &str, offset: usize) -> usize {
  println!("{}", name);
  offset + 1
}

/// Prints an instruction with a one-byte constant-pool operand, annotated
/// with the constant's value.
fn constant_instruction(name: &str, chunk: &Chunk, heap: &Heap, offset: usize) -> usize {
  let index = chunk.get_byte(offset + 1) as usize;
  let value = chunk.get_constant(index);

  println!("{:<18} {:>4} '{}'", name, index, value.display_plain(heap));
  offset + 2
}

/// Prints an instruction with a little-endian 24-bit constant-pool operand,
/// annotated with the constant's value.
fn long_constant_instruction(name: &str, chunk: &Chunk, heap: &Heap, offset: usize) -> usize {
  let b0 = chunk.get_byte(offset + 1) as usize;
  let b1 = chunk.get_byte(offset + 2) as usize;
  let b2 = chunk.get_byte(offset + 3) as usize;
  let index = b0 | (b1 << 8) | (b2 << 16);
  let value = chunk.get_constant(index);

  println!("{:<18} {:>4} '{}'", name, index, value.display_plain(heap));
  offset + 4
}
