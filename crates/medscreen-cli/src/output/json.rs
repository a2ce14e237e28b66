use medscreen_core::error::MedscreenError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), MedscreenError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
