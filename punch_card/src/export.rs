//! Structured export of a card.
//!
//! The JSON form is a `rows`-length array of `cols`-length arrays of 0/1
//! integers, row-major.

use std::fs;
use std::path::Path;

use log::info;

use crate::PunchCard;
use crate::error::ExportError;

pub fn to_json(card: &PunchCard) -> Result<String, ExportError> {
    Ok(serde_json::to_string(card)?)
}

/// Writes the JSON form to `path`, creating parent directories as needed.
pub fn save_json(card: &PunchCard, path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, to_json(card)?)?;
    info!("Saved {}x{} card to {}", card.rows(), card.cols(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_is_row_major_bits() {
        let mut card = PunchCard::new(8, 2).unwrap();
        card.encode_text("A");
        assert_eq!(
            to_json(&card).unwrap(),
            "[[0,0],[1,0],[0,0],[0,0],[0,0],[0,0],[0,0],[1,0]]"
        );
    }
}
