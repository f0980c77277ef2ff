use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use eframe::egui;

const HANGUL_FONT: &str = "hangul";

/// Where stock installs keep a font with Hangul glyphs, most likely first.
const SYSTEM_HANGUL_FONTS: &[&str] = &[
    // Windows
    "C:\\Windows\\Fonts\\malgun.ttf",
    "C:\\Windows\\Fonts\\gulim.ttc",
    // macOS
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/System/Library/Fonts/Supplemental/AppleGothic.ttf",
    "/Library/Fonts/AppleGothic.ttf",
    // Linux
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/noto/NotoSansKR-Regular.ttf",
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/nanum/NanumGothic.ttf",
    "/usr/share/fonts/truetype/unfonts-core/UnDotum.ttf",
];

fn first_existing<P: AsRef<Path>>(candidates: &[P]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(AsRef::<Path>::as_ref)
        .find(|path| path.is_file())
        .map(Path::to_path_buf)
}

pub fn find_system_hangul_font() -> Option<PathBuf> {
    first_existing(SYSTEM_HANGUL_FONTS)
}

/// egui's defaults with `bytes` put in front of every family, so Hangul is
/// looked up there first and everything else falls through to the bundled fonts.
pub fn hangul_font_definitions(bytes: Vec<u8>) -> egui::FontDefinitions {
    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        HANGUL_FONT.to_owned(),
        Arc::new(egui::FontData::from_owned(bytes)),
    );
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        if let Some(names) = fonts.families.get_mut(&family) {
            names.insert(0, HANGUL_FONT.to_owned());
        }
    }
    fonts
}

/// Hangul is missing from egui's bundled fonts. Uses the configured font when
/// given, otherwise the first well-known system font that exists.
pub fn install_hangul_font(ctx: &egui::Context, configured: Option<&str>) {
    let path = match configured {
        Some(path) => PathBuf::from(path),
        None => match find_system_hangul_font() {
            Some(path) => path,
            None => {
                log::warn!(
                    "No Hangul font configured or found on this system; Korean text may not render"
                );
                return;
            }
        },
    };

    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::warn!(
                "Could not read font {}: {err}; Korean text may not render",
                path.display()
            );
            return;
        }
    };

    ctx.set_fonts(hangul_font_definitions(bytes));
    log::info!("Loaded Hangul font from {}", path.display());
}
