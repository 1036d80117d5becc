//! Tests running the iconfont-consts binary.

use std::{
    fs,
    path::PathBuf,
    process::{Command, Output},
};

use font_types::{GlyphId, NameId};
use tempfile::tempdir;
use write_fonts::{
    FontBuilder,
    tables::{
        cmap::Cmap,
        maxp::Maxp,
        name::{Name, NameRecord},
        post::Post,
    },
};

/// Font whose glyph `i + 1` is named `names[i]` and mapped from `0xE000 + i`.
fn make_icon_font(family: &str, names: &[&str]) -> Vec<u8> {
    let glyph_names: Vec<&str> = [".notdef"].into_iter().chain(names.iter().copied()).collect();

    let mappings = (0..names.len() as u32)
        .map(|i| (char::from_u32(0xE000 + i).unwrap(), GlyphId::new(i + 1)));
    let cmap = Cmap::from_mappings(mappings).expect("cmap");

    let maxp = Maxp {
        num_glyphs: glyph_names.len() as u16,
        max_points: Some(0),
        max_contours: Some(0),
        max_composite_points: Some(0),
        max_composite_contours: Some(0),
        max_zones: Some(1),
        max_twilight_points: Some(0),
        max_storage: Some(0),
        max_function_defs: Some(0),
        max_instruction_defs: Some(0),
        max_stack_elements: Some(0),
        max_size_of_instructions: Some(0),
        max_component_elements: Some(0),
        max_component_depth: Some(0),
    };

    let name = Name::new(vec![NameRecord::new(
        3,
        1,
        0x409,
        NameId::new(1),
        family.to_string().into(),
    )]);

    let mut builder = FontBuilder::new();
    builder.add_table(&maxp).unwrap();
    builder.add_table(&cmap).unwrap();
    builder.add_table(&Post::new_v2(glyph_names)).unwrap();
    builder.add_table(&name).unwrap();
    builder.build()
}

fn run(args: &[&PathBuf]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_iconfont-consts")).args(args).output().expect("run binary")
}

#[test]
fn test_generates_each_pair() {
    let dir = tempdir().unwrap();
    let solid = dir.path().join("Solid.otf");
    let brands = dir.path().join("Brands.otf");
    let solid_out = dir.path().join("uSolid.pas");
    let brands_out = dir.path().join("uBrands.pas");
    fs::write(&solid, make_icon_font("Solid", &["house", "magnifyingGlass"])).unwrap();
    fs::write(&brands, make_icon_font("Brands", &["github"])).unwrap();

    let output = run(&[&solid, &brands, &solid_out, &brands_out]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generated 2 icons in"));
    assert!(stdout.contains("as class TSolidIcons"));
    assert!(stdout.contains("as class TBrandsIcons"));

    let solid_text = fs::read_to_string(&solid_out).unwrap();
    assert!(solid_text.contains("const FONT_FAMILY = 'Solid';"));
    assert!(solid_text.contains("const HOUSE: WideChar = #$E000;"));
    assert!(solid_text.contains("const MAGNIFYING_GLASS: WideChar = #$E001;"));

    let brands_text = fs::read_to_string(&brands_out).unwrap();
    assert!(brands_text.starts_with("unit uBrands;"));
    assert!(brands_text.contains("const GITHUB: WideChar = #$E000;"));
}

#[test]
fn test_odd_argument_count_fails_without_output() {
    let dir = tempdir().unwrap();
    let font = dir.path().join("Solid.otf");
    let first = dir.path().join("uFirst.pas");
    let second = dir.path().join("uSecond.pas");
    fs::write(&font, make_icon_font("Solid", &["house"])).unwrap();

    let output = run(&[&font, &first, &second]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));
    assert!(!first.exists());
    assert!(!second.exists());
}

#[test]
fn test_too_few_arguments_fails() {
    let dir = tempdir().unwrap();
    let font = dir.path().join("Solid.otf");

    assert_eq!(run(&[]).status.code(), Some(1));
    assert_eq!(run(&[&font]).status.code(), Some(1));
}

#[test]
fn test_bad_font_halts_batch() {
    let dir = tempdir().unwrap();
    let bad = dir.path().join("Bad.otf");
    let good = dir.path().join("Good.otf");
    let bad_out = dir.path().join("uBad.pas");
    let good_out = dir.path().join("uGood.pas");
    fs::write(&bad, b"not a font").unwrap();
    fs::write(&good, make_icon_font("Good", &["house"])).unwrap();

    let output = run(&[&bad, &good, &bad_out, &good_out]);
    assert!(!output.status.success());
    assert!(!bad_out.exists());
    assert!(!good_out.exists());
}

#[test]
fn test_parallel_reports_failure_but_writes_good_units() {
    let dir = tempdir().unwrap();
    let bad = dir.path().join("Bad.otf");
    let good = dir.path().join("Good.otf");
    let bad_out = dir.path().join("uBad.pas");
    let good_out = dir.path().join("uGood.pas");
    fs::write(&bad, b"not a font").unwrap();
    fs::write(&good, make_icon_font("Good", &["house"])).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_iconfont-consts"))
        .arg("--parallel")
        .args([&bad, &good, &bad_out, &good_out])
        .output()
        .expect("run binary");
    assert!(!output.status.success());
    assert!(!bad_out.exists());
    assert!(fs::read_to_string(&good_out).unwrap().contains("const HOUSE: WideChar = #$E000;"));
}
