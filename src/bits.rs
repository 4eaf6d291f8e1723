use serde::de;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use std::fmt;
use std::ops::Range;

/// An ordered run of binary digits with a fixed width.
///
/// Position 0 is the most significant bit. Leading and trailing zeros are
/// part of the value; nothing is ever trimmed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitField {
    bits: Vec<bool>,
}

impl BitField {
    pub fn zeros(width: usize) -> Self {
        Self {
            bits: vec![false; width],
        }
    }

    pub fn ones(width: usize) -> Self {
        Self {
            bits: vec![true; width],
        }
    }

    /// The low `width` bits of `value`, zero-padded on the left.
    pub fn from_uint(value: u64, width: usize) -> Self {
        let bits = (0..width)
            .rev()
            .map(|i| i < 64 && (value >> i) & 1 == 1)
            .collect();
        Self { bits }
    }

    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Join fields in order: `concat(&[a, b])` is `a ++ b`.
    pub fn concat(parts: &[&BitField]) -> Self {
        let bits = parts.iter().flat_map(|p| p.bits.iter().copied()).collect();
        Self { bits }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    pub fn is_all_zeros(&self) -> bool {
        self.bits.iter().all(|&b| !b)
    }

    pub fn is_all_ones(&self) -> bool {
        self.bits.iter().all(|&b| b)
    }

    /// Unsigned value of the field. Only the last 64 positions contribute.
    pub fn to_uint(&self) -> u64 {
        self.bits
            .iter()
            .fold(0u64, |acc, &b| (acc << 1) | (b as u64))
    }

    pub fn slice(&self, range: Range<usize>) -> Self {
        Self {
            bits: self.bits[range].to_vec(),
        }
    }

    pub fn invert(&self) -> Self {
        Self {
            bits: self.bits.iter().map(|&b| !b).collect(),
        }
    }

    /// Add one at the least significant position. A carry out of the most
    /// significant position is dropped, so the width never changes.
    pub fn increment(&self) -> Self {
        let mut bits = self.bits.clone();
        for b in bits.iter_mut().rev() {
            *b = !*b;
            if *b {
                break;
            }
        }
        Self { bits }
    }

    /// Subtract one at the least significant position, wrapping on zero.
    pub fn decrement(&self) -> Self {
        let mut bits = self.bits.clone();
        for b in bits.iter_mut().rev() {
            *b = !*b;
            if !*b {
                break;
            }
        }
        Self { bits }
    }

    /// Invert, then add one.
    pub fn twos_complement(&self) -> Self {
        self.invert().increment()
    }

    /// Render in groups of `size` digits separated by single spaces. The last
    /// group may be shorter.
    pub fn grouped(&self, size: usize) -> String {
        let size = size.max(1);
        let digits = self.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / size);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && i % size == 0 {
                out.push(' ');
            }
            out.push(c);
        }
        out
    }
}

impl fmt::Display for BitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.bits.iter() {
            f.write_str(if b { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl Serialize for BitField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BitField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let bits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(de::Error::invalid_value(
                    de::Unexpected::Str(&s),
                    &"a string of '0' and '1'",
                )),
            })
            .collect::<Result<Vec<bool>, D::Error>>()?;
        Ok(Self { bits })
    }
}
