//! End-to-end flows across the utility library: palette derivation to CSS
//! files, codec chains, gradient stylesheets.

use color_harmony::{HarmonyRule, Hsl, Palette, Rgb};
use devbench::export;
use devbench::tools::{self, Direction, Gradient, GradientKind, Preset};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn test_palette_css_export_to_file() {
    let dir = TempDir::new().expect("temp dir");
    let base: Rgb = "#3B82F6".parse().unwrap();
    let palette = Palette::derive(HarmonyRule::Analogous, base);

    let written = export::save(
        Some(dir.path().to_path_buf()),
        &export::names::palette_css(palette.rule()),
        palette.to_css().as_bytes(),
    )
    .unwrap();

    assert_eq!(written, dir.path().join("analogous-palette.css"));
    let css = std::fs::read_to_string(&written).unwrap();
    assert!(css.starts_with(":root {"));
    assert!(css.contains("--color-analogous-3: #3b82f6;"));
}

#[test]
fn test_spec_example_palette_positions() {
    // The documented worked example for base #3B82F6
    let base: Rgb = "#3B82F6".parse().unwrap();

    let mono = Palette::derive(HarmonyRule::Monochromatic, base);
    assert_eq!(mono.colors()[2], base);

    let triadic = Palette::derive(HarmonyRule::Triadic, base);
    let base_h = Hsl::from(base).h;
    let h1 = Hsl::from(triadic.colors()[1]).h;
    let diff = (h1 - base_h).rem_euclid(360.0);
    assert!(
        (diff - 120.0).abs() < 1.5,
        "triadic position 2 should sit 120 degrees from the base, got {diff}"
    );
}

#[test]
fn test_all_palettes_have_five_colors_each() {
    let palettes = Palette::derive_all(tools::random_rgb());
    assert_eq!(palettes.len(), 4);
    for palette in &palettes {
        assert_eq!(palette.colors().len(), 5);
    }
}

#[test]
fn test_base64_json_chain() {
    // Encode a JSON document, decode it back, then format it
    let raw = r#"{"tool":"devbench","tags":["json","base64"]}"#;
    let encoded = tools::base64::encode(raw);
    let decoded = tools::base64::decode(&encoded).unwrap();
    assert_eq!(decoded, raw);

    let formatted = tools::json::format(&decoded).unwrap();
    assert!(formatted.contains("\n  \"tool\": \"devbench\""));

    // And the chain is stable through minify
    let reformatted = tools::json::format(&tools::json::minify(&formatted).unwrap()).unwrap();
    assert_eq!(formatted, reformatted);
}

#[test]
fn test_multibyte_base64_round_trip() {
    let input = "héllo 🎉 — grüße";
    assert_eq!(
        tools::base64::decode(&tools::base64::encode(input)).unwrap(),
        input
    );
}

#[test]
fn test_gradient_stylesheet_to_file() {
    let dir = TempDir::new().expect("temp dir");
    let gradient = Preset::find("Ocean Blue").unwrap();

    let written = export::save(
        Some(dir.path().to_path_buf()),
        export::names::GRADIENT_CSS,
        gradient.stylesheet().as_bytes(),
    )
    .unwrap();

    assert_eq!(written, dir.path().join("gradient.css"));
    let css = std::fs::read_to_string(&written).unwrap();
    assert!(css.contains("background: linear-gradient(45deg, #667eea, #764ba2);"));
    assert!(css.contains("width: 100%;"));
}

#[test]
fn test_random_gradient_is_well_formed() {
    let gradient = Gradient::default().randomize();
    let css = gradient.css();
    assert!(css.starts_with("background: linear-gradient("));
    assert!(css.ends_with(");"));
    assert!(Direction::ALL.contains(&gradient.direction));
}

#[test]
fn test_radial_gradient_css() {
    let gradient = Gradient {
        kind: GradientKind::Radial,
        color1: "#11998e".parse().unwrap(),
        color2: "#38ef7d".parse().unwrap(),
        direction: Direction::Right,
    };
    assert_eq!(
        gradient.css(),
        "background: radial-gradient(circle, #11998e, #38ef7d);"
    );
}

#[test]
fn test_code_format_output_is_save_ready() {
    let dir = TempDir::new().expect("temp dir");
    let formatted = tools::code::format(
        "const users = [\"Alice\",\"Bob\"];users.forEach(u => log(u));",
        tools::code::Language::JavaScript,
    );

    let written = export::save(
        Some(dir.path().to_path_buf()),
        &export::names::formatted_code(tools::code::Language::JavaScript),
        formatted.as_bytes(),
    )
    .unwrap();

    assert_eq!(written, dir.path().join("formatted-code.js"));
    let on_disk = std::fs::read_to_string(&written).unwrap();
    assert_eq!(on_disk, formatted);
    assert!(on_disk.lines().all(|l| !l.is_empty()));
}
