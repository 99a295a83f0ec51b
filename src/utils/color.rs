use crate::upload::Tone;
use eframe::egui::Color32;

pub const INDIGO_500: Color32 = Color32::from_rgb(99, 102, 241);
pub const INDIGO_600: Color32 = Color32::from_rgb(79, 70, 229);
pub const EMERALD_500: Color32 = Color32::from_rgb(16, 185, 129);
pub const RED_500: Color32 = Color32::from_rgb(239, 68, 68);
pub const GRAY_400: Color32 = Color32::from_rgb(156, 163, 175);
pub const GRAY_900: Color32 = Color32::from_rgb(17, 24, 39);

pub trait ToneExt {
    fn color(self) -> Color32;
}

impl ToneExt for Tone {
    fn color(self) -> Color32 {
        match self {
            Tone::Indigo => INDIGO_500,
            Tone::Emerald => EMERALD_500,
            Tone::Red => RED_500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_tone_has_its_own_color() {
        assert_eq!(Tone::Indigo.color(), INDIGO_500);
        assert_eq!(Tone::Emerald.color(), EMERALD_500);
        assert_eq!(Tone::Red.color(), RED_500);
    }
}
