use floatbits::ConversionConfig;
use floatbits::Converter;
use floatbits::ExponentType;
use floatbits::MemoryHistory;

fn main() -> floatbits::Result<()> {
    let mut converter = Converter::new(MemoryHistory::new());

    println!("{}\n", converter.standard("3.14159")?);

    let config = ConversionConfig::default().exponent_type(ExponentType::Complement);
    let value = converter.custom("-5.25", &config)?;
    println!("{}\n", floatbits::render::custom(-5.25, &config, &value));

    for entry in converter.history().entries() {
        println!("{}: {} => {}", entry.kind.label(), entry.input, entry.summary());
    }
    Ok(())
}
