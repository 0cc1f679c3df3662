use crate::bytecode::OpCode;
use crate::values::Value;
use num_traits::FromPrimitive;

/// Contains all the necessary information about
/// the instructions to be executed.
#[derive(PartialEq, Default, Debug)]
pub struct Chunk {
  /// The instructions to execute in this chunk.
  instructions: Vec<u8>,
  /// The constants pool addressed by the load-constant instructions.
  constants: Vec<Value>,
  /// The source line associated with each instruction. An entry is only
  /// appended when the line changes relative to the previous byte, so the
  /// table stays small and can be searched by offset.
  lines: Vec<(usize, usize)>,
}

impl Chunk {
  /// Gets the size of the instructions list.
  pub fn len(&self) -> usize {
    self.instructions.len()
  }

  /// Checks whether or not the instructions list is empty.
  pub fn is_empty(&self) -> bool {
    self.instructions.is_empty()
  }

  /// Appends a raw byte to the instructions list, recording the source line
  /// it was generated from.
  pub fn write(&mut self, byte: u8, line: usize) {
    self.instructions.push(byte);

    match self.lines.last() {
      Some(&(_, prev_line)) if prev_line == line => {}
      _ => self.lines.push((self.instructions.len() - 1, line)),
    }
  }

  /// Appends an instruction from a given OpCode to the instructions list.
  pub fn write_op_code(&mut self, instr: OpCode, line: usize) {
    self.write(instr as u8, line);
  }

  /// Retrieves a raw byte from the instructions list.
  pub fn get_byte(&self, idx: usize) -> u8 {
    self.instructions[idx]
  }

  /// Returns the OpCode associated with a byte instruction in the
  /// instructions list.
  ///
  /// ## Returns
  /// `Option<OpCode>` – The OpCode instruction at the given index, or `None`
  /// if the byte does not encode an instruction.
  pub fn get_op_code(&self, idx: usize) -> Option<OpCode> {
    FromPrimitive::from_u8(self.instructions[idx])
  }

  /// A view of the raw instruction bytes.
  pub fn code(&self) -> &[u8] {
    &self.instructions
  }

  /// Adds a constant to this chunk's constants pool.
  ///
  /// ## Returns
  /// `usize` – the zero-based position of the value in the pool.
  pub fn add_constant(&mut self, value: Value) -> usize {
    self.constants.push(value);
    self.constants.len() - 1
  }

  /// Retrieves a constant from this chunk's constants pool.
  pub fn get_constant(&self, idx: usize) -> &Value {
    &self.constants[idx]
  }

  /// Gets the number of constants in this chunk's constants pool.
  pub fn get_pool_size(&self) -> usize {
    self.constants.len()
  }

  /// Adds a value to the constants pool and emits the instruction that loads
  /// it. Pool positions below 256 use the one-byte `LoadConstant` form;
  /// larger positions use `LoadConstantLong` with a little-endian 24-bit
  /// operand (low byte first).
  pub fn write_constant(&mut self, value: Value, line: usize) {
    let index = self.add_constant(value);

    if index < 256 {
      self.write_op_code(OpCode::LoadConstant, line);
      self.write(index as u8, line);
    } else {
      self.write_op_code(OpCode::LoadConstantLong, line);
      self.write((index & 0xFF) as u8, line);
      self.write(((index >> 8) & 0xFF) as u8, line);
      self.write(((index >> 16) & 0xFF) as u8, line);
    }
  }

  /// Gets the source line for the instruction byte at the given offset.
  /// Binary-searches the lines table for the greatest entry whose offset
  /// does not exceed the query.
  pub fn get_line(&self, offset: usize) -> usize {
    let idx = self.lines.partition_point(|&(start, _)| start <= offset);
    self.lines[idx - 1].1
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn line_table_only_records_changes() {
    let mut chunk = Chunk::default();
    chunk.write_op_code(OpCode::LoadImmNil, 1);
    chunk.write_op_code(OpCode::PopStackTop, 1);
    chunk.write_op_code(OpCode::LoadImmTrue, 2);
    chunk.write_op_code(OpCode::PopStackTop, 2);
    chunk.write_op_code(OpCode::Return, 4);

    assert_eq!(chunk.lines, vec![(0, 1), (2, 2), (4, 4)]);
  }

  #[test]
  fn get_line_recovers_each_offset() {
    let mut chunk = Chunk::default();
    chunk.write_op_code(OpCode::LoadImmNil, 1);
    chunk.write_op_code(OpCode::PopStackTop, 1);
    chunk.write_op_code(OpCode::LoadImmTrue, 3);
    chunk.write_op_code(OpCode::Return, 7);

    assert_eq!(chunk.get_line(0), 1);
    assert_eq!(chunk.get_line(1), 1);
    assert_eq!(chunk.get_line(2), 3);
    assert_eq!(chunk.get_line(3), 7);
  }

  #[test]
  fn short_constants_use_a_single_operand_byte() {
    let mut chunk = Chunk::default();
    chunk.write_constant(Value::Number(1.5), 1);

    assert_eq!(chunk.code(), &[OpCode::LoadConstant as u8, 0]);
    assert_eq!(chunk.get_constant(0), &Value::Number(1.5));
  }

  #[test]
  fn long_constants_encode_little_endian() {
    let mut chunk = Chunk::default();
    for i in 0..257 {
      chunk.add_constant(Value::Number(i as f64));
    }
    chunk.write_constant(Value::Number(600.0), 1);

    // Index 257 = 0x101: low byte first.
    let code = chunk.code();
    assert_eq!(code[0], OpCode::LoadConstantLong as u8);
    assert_eq!(&code[1..4], &[0x01, 0x01, 0x00]);
    assert_eq!(chunk.get_constant(257), &Value::Number(600.0));
  }

  #[test]
  fn op_code_round_trips_through_bytes() {
    let mut chunk = Chunk::default();
    chunk.write_op_code(OpCode::Multiply, 1);
    chunk.write(0xFF, 1);

    assert_eq!(chunk.get_op_code(0), Some(OpCode::Multiply));
    assert_eq!(chunk.get_op_code(1), None);
  }
}
