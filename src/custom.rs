//! Floating-point encoding with a configurable layout.
//!
//! The value is normalized to `0.1xxx × 2^e`, the fraction is extracted by
//! truncation, negative values carry a two's-complement fraction, and the
//! exponent is stored either with an excess bias or in two's complement.

use crate::bits::BitField;
use crate::Error;
use crate::Result;
use serde::ser::SerializeStruct;
use serde::Deserialize;
use serde::Serialize;
use serde::Serializer;
use tracing::debug;
use tracing::trace;

/// Smallest accepted exponent or mantissa width.
pub const MIN_WIDTH: u32 = 1;

/// Largest accepted exponent or mantissa width.
pub const MAX_WIDTH: u32 = 10;

/// How the exponent field stores a signed exponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExponentType {
    /// Biased by `2^(k-1)`.
    Excess,
    /// Two's complement, saturating at `±(2^(k-1) - 1)`.
    Complement,
}

impl ExponentType {
    pub fn label(self) -> &'static str {
        match self {
            ExponentType::Excess => "移码",
            ExponentType::Complement => "补码",
        }
    }
}

impl Default for ExponentType {
    fn default() -> Self {
        ExponentType::Excess
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConversionConfig {
    pub exponent_type: ExponentType,
    pub exponent_bits: u32,
    pub mantissa_bits: u32,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            exponent_type: ExponentType::Excess,
            exponent_bits: 5,
            mantissa_bits: 6,
        }
    }
}

impl ConversionConfig {
    pub fn new(exponent_type: ExponentType, exponent_bits: u32, mantissa_bits: u32) -> Self {
        Self {
            exponent_type,
            exponent_bits,
            mantissa_bits,
        }
    }

    pub fn exponent_type(mut self, value: ExponentType) -> Self {
        self.exponent_type = value;
        self
    }

    pub fn exponent_bits(mut self, value: u32) -> Self {
        self.exponent_bits = value;
        self
    }

    pub fn mantissa_bits(mut self, value: u32) -> Self {
        self.mantissa_bits = value;
        self
    }

    /// Check both widths, exponent first.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&self.exponent_bits) {
            return Err(Error::InvalidExponentWidth(self.exponent_bits));
        }
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&self.mantissa_bits) {
            return Err(Error::InvalidMantissaWidth(self.mantissa_bits));
        }
        Ok(())
    }

    /// Width of the whole pattern: sign, exponent and mantissa.
    pub fn total_bits(&self) -> usize {
        1 + self.exponent_bits as usize + self.mantissa_bits as usize
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fields {
    pub sign: BitField,
    pub exponent: BitField,
    pub mantissa: BitField,
}

impl Fields {
    fn zero(exponent_bits: usize, mantissa_bits: usize) -> Self {
        Self {
            sign: BitField::zeros(1),
            exponent: BitField::zeros(exponent_bits),
            mantissa: BitField::zeros(mantissa_bits),
        }
    }

    fn infinity(negative: bool, exponent_bits: usize, mantissa_bits: usize) -> Self {
        Self {
            sign: sign_bit(negative),
            exponent: BitField::ones(exponent_bits),
            mantissa: BitField::zeros(mantissa_bits),
        }
    }

    pub fn binary(&self) -> BitField {
        BitField::concat(&[&self.sign, &self.exponent, &self.mantissa])
    }
}

fn sign_bit(negative: bool) -> BitField {
    BitField::from_uint(negative as u64, 1)
}

/// Result of [`encode`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CustomFloat {
    /// Every bit zero, sign included.
    Zero(Fields),
    /// Exponent all ones, mantissa all zeros. Produced on exponent overflow.
    Infinity(Fields),
    /// `exponent` is the true exponent before biasing or complementing.
    Normal { fields: Fields, exponent: i32 },
}

impl CustomFloat {
    pub fn fields(&self) -> &Fields {
        match self {
            CustomFloat::Zero(fields) => fields,
            CustomFloat::Infinity(fields) => fields,
            CustomFloat::Normal { fields, .. } => fields,
        }
    }

    pub fn sign(&self) -> &BitField {
        &self.fields().sign
    }

    pub fn exponent(&self) -> &BitField {
        &self.fields().exponent
    }

    pub fn mantissa(&self) -> &BitField {
        &self.fields().mantissa
    }

    pub fn binary(&self) -> BitField {
        self.fields().binary()
    }

    pub fn is_negative(&self) -> bool {
        self.sign().get(0) == Some(true)
    }

    /// The true exponent. `None` for zero and infinity.
    pub fn actual_exponent(&self) -> Option<i32> {
        match self {
            CustomFloat::Normal { exponent, .. } => Some(*exponent),
            _ => None,
        }
    }

    pub fn scientific(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        match self {
            CustomFloat::Zero(_) => "0".to_string(),
            CustomFloat::Infinity(_) => format!("{}∞", sign),
            CustomFloat::Normal { fields, exponent } => {
                format!("{}0.{}×2^{}", sign, fields.mantissa, exponent)
            }
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            CustomFloat::Zero(_) => "zero",
            CustomFloat::Infinity(_) => "infinity",
            CustomFloat::Normal { .. } => "normal",
        }
    }
}

impl Serialize for CustomFloat {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("CustomFloat", 7)?;
        s.serialize_field("kind", self.kind())?;
        s.serialize_field("sign", self.sign())?;
        s.serialize_field("exponent", self.exponent())?;
        s.serialize_field("mantissa", self.mantissa())?;
        s.serialize_field("binary", &self.binary())?;
        s.serialize_field("scientific", &self.scientific())?;
        match self.actual_exponent() {
            Some(e) => s.serialize_field("actualExponent", &e)?,
            None => s.skip_field("actualExponent")?,
        }
        s.end()
    }
}

/// Encode `decimal` in the layout described by `config`.
///
/// Validation happens before any encoding: `NaN` is rejected first, then the
/// exponent width, then the mantissa width.
pub fn encode(decimal: f64, config: &ConversionConfig) -> Result<CustomFloat> {
    if decimal.is_nan() {
        return Err(Error::InvalidInput);
    }
    config.validate()?;
    debug!(decimal, ?config, "encode");

    let exponent_bits = config.exponent_bits as usize;
    let mantissa_bits = config.mantissa_bits as usize;

    // Both zeros encode as all zeros.
    if decimal == 0.0 {
        return Ok(CustomFloat::Zero(Fields::zero(exponent_bits, mantissa_bits)));
    }

    let negative = decimal.is_sign_negative();
    if decimal.is_infinite() {
        debug!("infinite input");
        return Ok(CustomFloat::Infinity(Fields::infinity(
            negative,
            exponent_bits,
            mantissa_bits,
        )));
    }

    let (fraction, exponent) = normalize(decimal.abs());
    let magnitude = extract_mantissa(fraction, mantissa_bits);
    trace!(exponent, %magnitude, "normalized");
    let mantissa = if negative {
        magnitude.twos_complement()
    } else {
        magnitude
    };

    let capacity = 1i64 << exponent_bits;
    let (exponent, encoded) = match config.exponent_type {
        ExponentType::Excess => (exponent, exponent as i64 + (capacity >> 1)),
        ExponentType::Complement => {
            let limit = (capacity >> 1) - 1;
            let clamped = (exponent as i64).clamp(-limit, limit);
            if clamped != exponent as i64 {
                debug!(exponent, clamped, "exponent saturated");
            }
            let encoded = if clamped < 0 {
                capacity + clamped
            } else {
                clamped
            };
            (clamped as i32, encoded)
        }
    };

    if encoded >= capacity {
        debug!(exponent, encoded, "exponent overflow");
        return Ok(CustomFloat::Infinity(Fields::infinity(
            negative,
            exponent_bits,
            mantissa_bits,
        )));
    }
    // Too small for the exponent field: flush to the all-zero pattern.
    if encoded < 0 {
        debug!(exponent, encoded, "exponent underflow");
        return Ok(CustomFloat::Zero(Fields::zero(exponent_bits, mantissa_bits)));
    }

    Ok(CustomFloat::Normal {
        fields: Fields {
            sign: sign_bit(negative),
            exponent: BitField::from_uint(encoded as u64, exponent_bits),
            mantissa,
        },
        exponent,
    })
}

/// Scale a positive finite `m` into `[0.5, 1)`, returning it with the
/// power of two removed.
fn normalize(mut m: f64) -> (f64, i32) {
    let mut exponent = 0;
    while m >= 1.0 {
        m /= 2.0;
        exponent += 1;
    }
    while m < 0.5 {
        m *= 2.0;
        exponent -= 1;
    }
    (m, exponent)
}

/// Leading `width` binary fraction digits of `m`, truncated.
fn extract_mantissa(mut m: f64, width: usize) -> BitField {
    let mut bits = Vec::with_capacity(width);
    for _ in 0..width {
        m *= 2.0;
        if m >= 1.0 {
            bits.push(true);
            m -= 1.0;
        } else {
            bits.push(false);
        }
    }
    BitField::from_bits(bits)
}
