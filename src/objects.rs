use hashbrown::hash_map::RawEntryMut;
use hashbrown::HashMap;
use std::hash::{BuildHasherDefault, Hash, Hasher};
use std::rc::Rc;

/// The FNV-1a offset basis for 32-bit hashes.
const FNV_OFFSET_BASIS: u32 = 2166136261;
/// The FNV-1a prime for 32-bit hashes.
const FNV_PRIME: u32 = 16777619;

/// Computes the 32-bit FNV-1a hash of a byte sequence: starting from the
/// offset basis, each byte is xor-ed in and the total multiplied by the
/// FNV prime.
pub fn fnv1a(bytes: &[u8]) -> u32 {
  let mut hash = FNV_OFFSET_BASIS;

  for &byte in bytes {
    hash ^= byte as u32;
    hash = hash.wrapping_mul(FNV_PRIME);
  }

  hash
}

/// The hasher used by the string intern table. It runs the same FNV-1a
/// computation as [`fnv1a`], so hashes precomputed on string objects can be
/// handed straight to the table.
#[derive(Clone)]
pub struct FnvHasher(u32);

impl Default for FnvHasher {
  fn default() -> Self {
    FnvHasher(FNV_OFFSET_BASIS)
  }
}

impl Hasher for FnvHasher {
  fn finish(&self) -> u64 {
    self.0 as u64
  }

  fn write(&mut self, bytes: &[u8]) {
    for &byte in bytes {
      self.0 ^= byte as u32;
      self.0 = self.0.wrapping_mul(FNV_PRIME);
    }
  }
}

/// A Kite string object: the contents plus their precomputed FNV-1a hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrObj {
  pub text: Rc<str>,
  pub hash: u32,
}

/// Heap-allocated objects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Obj {
  Str(StrObj),
}

/// The identifier of an object in the heap.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ObjId(pub usize);

/// The key of an interned string. Hashes exactly the content bytes, so the
/// intern table's hashes match the hash stored on the string object.
#[derive(PartialEq, Eq)]
struct InternKey(Rc<str>);

impl Hash for InternKey {
  fn hash<H: Hasher>(&self, state: &mut H) {
    state.write(self.0.as_bytes());
  }
}

/// The heap. Stores every memory-allocated object for the lifetime of the
/// VM, plus the intern table that guarantees strings with equal contents
/// share a single object.
///
/// Objects are registered here the moment they are created and released in
/// bulk when the owning VM is dropped.
#[derive(Default)]
pub struct Heap {
  objects: Vec<Obj>,
  strings: HashMap<InternKey, ObjId, BuildHasherDefault<FnvHasher>>,
}

impl Heap {
  /// Gets an immutable reference to the object associated with the given id.
  pub fn get(&self, id: ObjId) -> &Obj {
    &self.objects[id.0]
  }

  /// Gets the string object associated with the given id.
  pub fn get_str(&self, id: ObjId) -> &StrObj {
    match self.get(id) {
      Obj::Str(obj) => obj,
    }
  }

  /// The number of objects currently registered on the heap.
  pub fn object_count(&self) -> usize {
    self.objects.len()
  }

  /// Interns a string: if an object with these contents already exists, its
  /// handle is returned and nothing is allocated. Otherwise a new string
  /// object is created, registered on the heap, added to the intern table,
  /// and its handle returned.
  ///
  /// # Parameters
  /// - `text`: The contents to intern.
  pub fn intern(&mut self, text: &str) -> ObjId {
    let hash = fnv1a(text.as_bytes());

    match self
      .strings
      .raw_entry_mut()
      .from_hash(hash as u64, |key| &*key.0 == text)
    {
      RawEntryMut::Occupied(entry) => *entry.get(),
      RawEntryMut::Vacant(entry) => {
        let text: Rc<str> = Rc::from(text);
        let id = ObjId(self.objects.len());

        self.objects.push(Obj::Str(StrObj {
          text: Rc::clone(&text),
          hash,
        }));
        entry.insert_hashed_nocheck(hash as u64, InternKey(text), id);

        id
      }
    }
  }

  /// Concatenates two interned strings, left operand first, and interns the
  /// result. If the combined contents already exist, the freshly built
  /// buffer is discarded in favor of the existing handle.
  pub fn concat(&mut self, left: ObjId, right: ObjId) -> ObjId {
    let left = &self.get_str(left).text;
    let right = &self.get_str(right).text;

    let mut text = String::with_capacity(left.len() + right.len());
    text.push_str(left);
    text.push_str(right);

    self.intern(&text)
  }
}
