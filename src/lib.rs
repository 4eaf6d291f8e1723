pub mod bits;
pub mod convert;
pub mod custom;
pub mod error;
pub mod history;
pub mod ieee754;
pub mod render;
pub mod standard;


pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

pub use bits::BitField;
pub use convert::parse_decimal;
pub use convert::Converter;
pub use custom::encode;
pub use custom::ConversionConfig;
pub use custom::CustomFloat;
pub use custom::ExponentType;
pub use history::ConversionKind;
pub use history::History;
pub use history::MemoryHistory;
pub use ieee754::FloatDecomposition;
pub use standard::decompose32;
pub use standard::decompose64;
