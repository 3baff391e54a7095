use thiserror::Error;

const MIB: u64 = 1024 * 1024;

#[derive(Debug, Error)]
pub enum MemoryFormatError {
    #[error("unknown memory format: {0}")]
    UnknownFormat(String),
    #[error("invalid memory value: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),
}

/// Returns a memory value in MiB. Accepts "MiB" and "GiB" suffixes only,
/// case-sensitive; 1 GiB counts as 1024 MiB.
pub fn parse_memory(text: &str) -> Result<i64, MemoryFormatError> {
    let text = text.trim();

    if let Some(number) = text.strip_suffix("MiB") {
        return Ok(number.trim().parse()?);
    }

    if let Some(number) = text.strip_suffix("GiB") {
        let gib: i64 = number.trim().parse()?;
        return Ok(gib * 1024);
    }

    Err(MemoryFormatError::UnknownFormat(text.to_string()))
}

/// Formats a byte count the way the inventory stores memory figures.
pub fn format_mib(bytes: u64) -> String {
    format!("{}MiB", bytes / MIB)
}
