use crate::custom;
use crate::custom::ConversionConfig;
use crate::custom::CustomFloat;
use crate::history::ConversionKind;
use crate::history::History;
use crate::render;
use crate::standard;
use crate::Error;
use crate::Result;
use tracing::debug;

/// Parse user text as a decimal number. Surrounding whitespace is ignored.
/// `NaN` is not a number here.
pub fn parse_decimal(text: &str) -> Result<f64> {
    let value = text.trim().parse::<f64>().map_err(|_| Error::InvalidInput)?;
    if value.is_nan() {
        return Err(Error::InvalidInput);
    }
    Ok(value)
}

/// Runs conversions on text input and reports each successful one to a
/// [`History`].
pub struct Converter<H> {
    history: H,
}

impl<H: History> Converter<H> {
    pub fn new(history: H) -> Self {
        Self { history }
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    pub fn into_history(self) -> H {
        self.history
    }

    /// Standard single and double precision summary of `input`.
    pub fn standard(&mut self, input: &str) -> Result<String> {
        let value = parse_decimal(input)?;
        let rendered = standard::render(value);
        self.record(value, &rendered, ConversionKind::Standard);
        Ok(rendered)
    }

    /// Encode `input` under `config`. The rendering is what gets recorded.
    pub fn custom(&mut self, input: &str, config: &ConversionConfig) -> Result<CustomFloat> {
        let value = parse_decimal(input)?;
        let encoded = custom::encode(value, config)?;
        let rendered = render::custom(value, config, &encoded);
        self.record(value, &rendered, ConversionKind::Custom);
        Ok(encoded)
    }

    fn record(&mut self, input: f64, result: &str, kind: ConversionKind) {
        debug!(input, ?kind, "history add");
        self.history.add(input, result, kind);
    }
}
