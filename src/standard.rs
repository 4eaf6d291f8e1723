//! IEEE 754 single and double precision views of a native `f64`.
//!
//! Field extraction reinterprets the platform bit pattern directly. The
//! scientific rendering is computed separately by scaling the magnitude into
//! `[1, 2)`.

use crate::ieee754::FloatDecomposition;
use crate::ieee754::IeeeFloat;

/// Narrow to `f32` (round to nearest) and split into 1 + 8 + 23 bits.
pub fn decompose32(x: f64) -> FloatDecomposition {
    (x as f32).decompose()
}

/// Split into 1 + 11 + 52 bits.
pub fn decompose64(x: f64) -> FloatDecomposition {
    x.decompose()
}

/// `x` as `±m×2^e` with `m` in `[1, 2)`, printed with 10 fractional digits.
///
/// Zero prints with exponent 0. Non-finite values are printed unscaled.
pub fn scientific(x: f64) -> String {
    let (mantissa, exponent) = normalize(x.abs());
    let sign = if x < 0.0 { "-" } else { "" };
    let digits = if mantissa.is_finite() {
        fixed_10(mantissa)
    } else {
        mantissa.to_human_string()
    };
    format!("{}{}×2^{}", sign, digits, exponent)
}

/// `m` in `[0, 2)` with 10 fractional digits, exact ties rounded up.
///
/// `m` has at most 52 fractional bits, so `m × 10^10` is computed exactly as
/// a fraction over `2^52`.
fn fixed_10(m: f64) -> String {
    const SCALE: u128 = 10_000_000_000;
    let units = (m * (1u64 << 52) as f64) as u128;
    let scaled = units * SCALE;
    let mut rounded = scaled >> 52;
    if (scaled & ((1 << 52) - 1)) >= (1 << 51) {
        rounded += 1;
    }
    format!("{}.{:010}", rounded / SCALE, rounded % SCALE)
}

fn normalize(mut m: f64) -> (f64, i32) {
    let mut exponent = 0;
    if m == 0.0 || !m.is_finite() {
        return (m, exponent);
    }
    while m >= 2.0 {
        m /= 2.0;
        exponent += 1;
    }
    while m < 1.0 {
        m *= 2.0;
        exponent -= 1;
    }
    (m, exponent)
}

/// Textual summary of `x`: the input, its scientific form, then the fields of
/// both native widths with the unbiased exponent of each.
pub fn render(x: f64) -> String {
    let mut out = String::new();
    out.push_str("输入值: ");
    out.push_str(&input_label(x));
    out.push_str("\n\n");
    out.push_str("科学计数法表示: ");
    out.push_str(&scientific(x));
    out.push_str("\n\n32位单精度浮点数:\n");
    write_fields(&mut out, &decompose32(x));
    out.push_str("\n\n64位双精度浮点数:\n");
    write_fields(&mut out, &decompose64(x));
    out
}

fn write_fields(out: &mut String, d: &FloatDecomposition) {
    out.push_str(&format!(
        "符号位(s): {} ({})\n阶码(e): {} ({})\n尾数(f): {}",
        d.sign(),
        polarity(d.is_negative()),
        d.exponent(),
        d.unbiased_exponent(),
        d.mantissa(),
    ));
}

pub(crate) fn polarity(negative: bool) -> &'static str {
    if negative {
        "负数"
    } else {
        "正数"
    }
}

/// The input as the user would read it, flagging negative zero.
pub(crate) fn input_label(x: f64) -> String {
    let mut s = x.to_human_string();
    if is_negative_zero(x) {
        s.push_str(" (负零)");
    }
    s
}

pub(crate) fn is_negative_zero(x: f64) -> bool {
    x == 0.0 && x.is_sign_negative()
}
