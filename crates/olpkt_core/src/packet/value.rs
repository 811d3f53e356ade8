use std::fmt::{self, Write as _};

use crate::packet::{PacketError, Result};

/// Largest unsigned value representable as a large integer (61 bits).
const LARGE_INTEGER_MAX: u64 = (1 << 61) - 1;

/// Runtime value emitted by packet decoding.
///
/// Scalars are stored inline; containers own their children exclusively, so a tree can only
/// grow by insertion and never aliases another tree or the source block.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
	/// Insertion-ordered keyed container.
	Object(Object),
	/// Ordered sequence.
	Array(Array),
	/// Text scalar.
	String(String),
	/// Signed 32-bit integer scalar.
	Integer(i32),
	/// Signed 64-bit integer scalar.
	LargeInteger(i64),
	/// 32-bit float scalar.
	Float(f32),
	/// Boolean scalar.
	Bool(bool),
	/// No payload; also the state left behind by [`Value::destroy`].
	#[default]
	Undefined,
}

impl Value {
	/// Empty object value.
	pub fn object() -> Self {
		Self::Object(Object::new())
	}

	/// Empty array value.
	pub fn array() -> Self {
		Self::Array(Array::new())
	}

	/// String value.
	pub fn string(value: impl Into<String>) -> Self {
		Self::String(value.into())
	}

	/// 32-bit integer value.
	pub fn int(value: i32) -> Self {
		Self::Integer(value)
	}

	/// 64-bit integer value.
	pub fn large_int(value: i64) -> Self {
		Self::LargeInteger(value)
	}

	/// Float value.
	pub fn float(value: f32) -> Self {
		Self::Float(value)
	}

	/// Boolean value.
	pub fn bool(value: bool) -> Self {
		Self::Bool(value)
	}

	/// Convert an unsigned 64-bit integer, rejecting values that use any of the top 3 bits.
	pub fn from_u64(value: u64) -> Result<Self> {
		if value > LARGE_INTEGER_MAX {
			return Err(PacketError::ValueOverflow { value });
		}
		Ok(Self::LargeInteger(value as i64))
	}

	/// Stable lowercase label of the live variant.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Object(_) => "object",
			Self::Array(_) => "array",
			Self::String(_) => "string",
			Self::Integer(_) => "integer",
			Self::LargeInteger(_) => "large_integer",
			Self::Float(_) => "float",
			Self::Bool(_) => "bool",
			Self::Undefined => "undefined",
		}
	}

	/// Return `true` for the undefined variant.
	pub fn is_undefined(&self) -> bool {
		matches!(self, Self::Undefined)
	}

	/// Borrow the object payload.
	pub fn as_object(&self) -> Result<&Object> {
		match self {
			Self::Object(item) => Ok(item),
			other => Err(PacketError::NotAContainer {
				expected: "object",
				got: other.kind(),
			}),
		}
	}

	/// Mutably borrow the object payload.
	pub fn as_object_mut(&mut self) -> Result<&mut Object> {
		match self {
			Self::Object(item) => Ok(item),
			other => Err(PacketError::NotAContainer {
				expected: "object",
				got: other.kind(),
			}),
		}
	}

	/// Borrow the array payload.
	pub fn as_array(&self) -> Result<&Array> {
		match self {
			Self::Array(items) => Ok(items),
			other => Err(PacketError::NotAContainer {
				expected: "array",
				got: other.kind(),
			}),
		}
	}

	/// Look up `key` on an object value.
	pub fn get(&self, key: &str) -> Result<&Value> {
		self.as_object()?.get(key)
	}

	/// Look up element `index` on an array value.
	pub fn at(&self, index: usize) -> Result<&Value> {
		self.as_array()?.at(index)
	}

	/// Render the canonical text form.
	pub fn to_text(&self) -> String {
		let mut out = String::new();
		self.write_text(&mut out, 0);
		out
	}

	/// Release the whole subtree and leave this value undefined.
	///
	/// Returns the number of values released, root included. Destroying an undefined value
	/// is an error rather than a no-op so double releases surface.
	pub fn destroy(&mut self) -> Result<usize> {
		if self.is_undefined() {
			return Err(PacketError::AlreadyDestroyed);
		}
		Ok(release(std::mem::take(self)))
	}

	fn write_text(&self, out: &mut String, indent: usize) {
		match self {
			Self::Object(item) => {
				out.push('{');
				if !item.is_empty() {
					out.push('\n');
				}
				let last = item.len().saturating_sub(1);
				for (idx, (key, value)) in item.iter().enumerate() {
					push_tabs(out, indent + 1);
					out.push('"');
					out.push_str(key);
					out.push_str("\": ");
					value.write_text(out, indent + 1);
					if idx < last {
						out.push(',');
					}
					out.push('\n');
				}
				if !item.is_empty() {
					push_tabs(out, indent);
				}
				out.push('}');
			}
			Self::Array(items) => {
				out.push('[');
				for (idx, value) in items.iter().enumerate() {
					if idx > 0 {
						out.push(',');
					}
					value.write_text(out, indent);
				}
				out.push(']');
			}
			Self::String(v) => {
				out.push('"');
				out.push_str(v);
				out.push('"');
			}
			Self::Integer(v) => {
				let _ = write!(out, "{v}");
			}
			Self::LargeInteger(v) => {
				let _ = write!(out, "{v}");
			}
			Self::Float(v) => {
				let _ = write!(out, "{v}");
			}
			Self::Bool(v) => out.push_str(if *v { "true" } else { "false" }),
			Self::Undefined => {}
		}
	}
}

fn push_tabs(out: &mut String, count: usize) {
	for _ in 0..count {
		out.push('\t');
	}
}

fn release(value: Value) -> usize {
	match value {
		Value::Object(item) => 1 + item.entries.into_iter().map(|entry| release(entry.value)).sum::<usize>(),
		Value::Array(items) => 1 + items.items.into_iter().map(release).sum::<usize>(),
		_ => 1,
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_text())
	}
}

/// One keyed object entry.
#[derive(Debug, Clone, PartialEq)]
struct Entry {
	key: Box<str>,
	value: Value,
}

/// Insertion-ordered mapping from unique string keys to owned values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
	entries: Vec<Entry>,
}

impl Object {
	/// Create an empty object.
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert or overwrite `key`.
	///
	/// Overwriting keeps the key at its first-insertion position and returns the previous
	/// value.
	pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Option<Value> {
		let value = value.into();
		if let Some(entry) = self.entries.iter_mut().find(|entry| &*entry.key == key) {
			return Some(std::mem::replace(&mut entry.value, value));
		}
		self.entries.push(Entry { key: key.into(), value });
		None
	}

	/// Borrow the value stored under `key`.
	pub fn get(&self, key: &str) -> Result<&Value> {
		self.entries
			.iter()
			.find(|entry| &*entry.key == key)
			.map(|entry| &entry.value)
			.ok_or_else(|| PacketError::KeyNotFound { key: key.to_owned() })
	}

	/// Mutably borrow the value stored under `key`.
	pub fn get_mut(&mut self, key: &str) -> Result<&mut Value> {
		self.entries
			.iter_mut()
			.find(|entry| &*entry.key == key)
			.map(|entry| &mut entry.value)
			.ok_or_else(|| PacketError::KeyNotFound { key: key.to_owned() })
	}

	/// Return `true` when `key` is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.iter().any(|entry| &*entry.key == key)
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Return `true` when the object has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterate entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.entries.iter().map(|entry| (&*entry.key, &entry.value))
	}

	/// Iterate keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|entry| &*entry.key)
	}
}

/// Ordered, index-addressable sequence of owned values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Array {
	items: Vec<Value>,
}

impl Array {
	/// Create an empty array.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a value.
	pub fn push(&mut self, value: impl Into<Value>) {
		self.items.push(value.into());
	}

	/// Borrow element `index`.
	pub fn at(&self, index: usize) -> Result<&Value> {
		self.items.get(index).ok_or(PacketError::IndexOutOfRange { index, len: self.items.len() })
	}

	/// Number of elements.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Return `true` when the array has no elements.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Iterate elements in order.
	pub fn iter(&self) -> std::slice::Iter<'_, Value> {
		self.items.iter()
	}
}

impl<V: Into<Value>> FromIterator<V> for Array {
	fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
		Self {
			items: iter.into_iter().map(Into::into).collect(),
		}
	}
}

impl From<Object> for Value {
	fn from(value: Object) -> Self {
		Self::Object(value)
	}
}

impl From<Array> for Value {
	fn from(value: Array) -> Self {
		Self::Array(value)
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<f32> for Value {
	fn from(value: f32) -> Self {
		Self::Float(value)
	}
}

macro_rules! widen_to_integer {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Value {
				fn from(value: $ty) -> Self {
					Self::Integer(i32::from(value))
				}
			}
		)*
	};
}

widen_to_integer!(u8, u16, i8, i16, i32);

impl From<u32> for Value {
	fn from(value: u32) -> Self {
		match i32::try_from(value) {
			Ok(small) => Self::Integer(small),
			Err(_) => Self::LargeInteger(i64::from(value)),
		}
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::LargeInteger(value)
	}
}

impl TryFrom<u64> for Value {
	type Error = PacketError;

	fn try_from(value: u64) -> Result<Self> {
		Self::from_u64(value)
	}
}

#[cfg(test)]
mod tests;
