//! Text layout for custom-format results.

use crate::custom::ConversionConfig;
use crate::custom::CustomFloat;
use crate::custom::Fields;
use crate::standard::input_label;
use crate::standard::polarity;

/// Width of the groups the full binary pattern is split into.
pub const GROUP_BITS: usize = 8;

/// Render `value`, the encoding of `input` under `config`.
pub fn custom(input: f64, config: &ConversionConfig, value: &CustomFloat) -> String {
    match value {
        CustomFloat::Zero(fields) => zero(input, config, fields),
        CustomFloat::Infinity(fields) => infinity(input, config, value, fields),
        CustomFloat::Normal { fields, exponent } => normal(input, config, value, fields, *exponent),
    }
}

fn zero(input: f64, config: &ConversionConfig, fields: &Fields) -> String {
    layout(&input_label(input), "0", fields, config.exponent_type.label())
}

fn infinity(
    input: f64,
    config: &ConversionConfig,
    value: &CustomFloat,
    fields: &Fields,
) -> String {
    layout(
        &input_label(input),
        &value.scientific(),
        fields,
        config.exponent_type.label(),
    )
}

fn normal(
    input: f64,
    config: &ConversionConfig,
    value: &CustomFloat,
    fields: &Fields,
    exponent: i32,
) -> String {
    let scheme = format!("{}, 实际指数: {}", config.exponent_type.label(), exponent);
    layout(&input_label(input), &value.scientific(), fields, &scheme)
}

fn layout(input: &str, scientific: &str, fields: &Fields, scheme: &str) -> String {
    format!(
        "自定义转换结果:\n\
         输入值: {}\n\
         科学计数法表示: {}\n\
         \n\
         浮点数表示:\n\
         符号位(s): {} ({})\n\
         阶码(e): {} ({})\n\
         尾数(f): {}\n\
         \n\
         完整二进制表示:\n\
         {}",
        input,
        scientific,
        fields.sign,
        polarity(fields.sign.get(0) == Some(true)),
        fields.exponent,
        scheme,
        fields.mantissa,
        fields.binary().grouped(GROUP_BITS),
    )
}
