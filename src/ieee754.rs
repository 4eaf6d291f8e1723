use crate::bits::BitField;
use serde::Serialize;

/// Sign, exponent and mantissa fields of a native binary float, sliced out
/// of its bit pattern at the fixed IEEE 754 boundaries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FloatDecomposition {
    pub(crate) sign: BitField,
    pub(crate) exponent: BitField,
    pub(crate) mantissa: BitField,
}

impl FloatDecomposition {
    pub fn sign(&self) -> &BitField {
        &self.sign
    }

    pub fn exponent(&self) -> &BitField {
        &self.exponent
    }

    pub fn mantissa(&self) -> &BitField {
        &self.mantissa
    }

    /// The whole pattern: `sign ++ exponent ++ mantissa`.
    pub fn bits(&self) -> BitField {
        BitField::concat(&[&self.sign, &self.exponent, &self.mantissa])
    }

    pub fn is_negative(&self) -> bool {
        self.sign.get(0) == Some(true)
    }

    /// Stored exponent minus the bias. Not adjusted for zeros, subnormals or
    /// the all-ones special exponent.
    pub fn unbiased_exponent(&self) -> i32 {
        let bias = (1i32 << (self.exponent.len() - 1)) - 1;
        self.exponent.to_uint() as i32 - bias
    }
}

pub(crate) trait IeeeFloat<const E: u16, const F: u16> {
    /// Format the value the way a JavaScript number prints: shortest
    /// round-trip digits, plain notation for decimal exponents in
    /// `[-7, 21)`, otherwise `d.ddde±n`. Both zeros print as `0`.
    fn to_human_string(&self) -> String
    where
        Self: std::fmt::LowerExp,
    {
        let bits = self.to_u64_bits();
        let negative = (bits >> (E + F)) & 1 == 1;
        let magnitude = bits & !(1 << (E + F));
        let sign = if negative { "-" } else { "" };
        if magnitude == 0 {
            return "0".to_string();
        }
        if magnitude >> F == (1 << E) - 1 {
            return if magnitude & ((1 << F) - 1) != 0 {
                "NaN".to_string()
            } else {
                format!("{}Infinity", sign)
            };
        }

        // `{:e}` gives the shortest digits as `d.ddd` and a power of ten.
        let formatted = format!("{:e}", self);
        let formatted = formatted.trim_start_matches('-');
        let (head, power) = formatted.split_at(formatted.find('e').unwrap_or(formatted.len()));
        let power: i32 = power.trim_start_matches('e').parse().unwrap_or(0);
        let digits: String = head.chars().filter(|c| *c != '.').collect();
        let k = digits.len() as i32;
        // value = 0.digits × 10^n
        let n = power + 1;

        let body = if k <= n && n <= 21 {
            format!("{}{}", digits, "0".repeat((n - k) as usize))
        } else if 0 < n && n <= 21 {
            format!("{}.{}", &digits[..n as usize], &digits[n as usize..])
        } else if -6 < n && n <= 0 {
            format!("0.{}{}", "0".repeat(-n as usize), digits)
        } else {
            let exp_sign = if n - 1 < 0 { '-' } else { '+' };
            let mantissa = if k == 1 {
                digits
            } else {
                format!("{}.{}", &digits[..1], &digits[1..])
            };
            format!("{}e{}{}", mantissa, exp_sign, (n - 1).abs())
        };
        format!("{}{}", sign, body)
    }

    /// Split the native bit pattern into its three fields.
    fn decompose(&self) -> FloatDecomposition {
        let (e, f) = (E as usize, F as usize);
        let bits = BitField::from_uint(self.to_u64_bits(), 1 + e + f);
        FloatDecomposition {
            sign: bits.slice(0..1),
            exponent: bits.slice(1..1 + e),
            mantissa: bits.slice(1 + e..1 + e + f),
        }
    }

    fn to_u64_bits(&self) -> u64;
}

impl IeeeFloat<8, 23> for f32 {
    fn to_u64_bits(&self) -> u64 {
        self.to_bits() as u64
    }
}

impl IeeeFloat<11, 52> for f64 {
    fn to_u64_bits(&self) -> u64 {
        self.to_bits()
    }
}
