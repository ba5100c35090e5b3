use crate::PunchCard;

pub struct Preset {
    pub name: &'static str,
    pub text: &'static str,
}

pub const PRESETS: &[Preset] = &[
    Preset { name: "Ada", text: "ADA" },
    Preset { name: "Apollo Guidance Computer", text: "AGC" },
];

pub fn apply_preset(card: &mut PunchCard, preset: &Preset) {
    log::debug!("applying preset {}", preset.name);
    card.encode_text(preset.text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_encode_their_text() {
        for preset in PRESETS {
            let mut from_preset = PunchCard::default();
            from_preset.toggle(15, 31);
            apply_preset(&mut from_preset, preset);

            let mut from_text = PunchCard::default();
            from_text.encode_text(preset.text);
            assert_eq!(from_preset, from_text, "preset {}", preset.name);
        }
    }
}
