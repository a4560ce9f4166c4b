use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use sprite_sheet_rs::image_pipeline::{
    FramesToSheetPipeline, LayoutMetadata, SheetConfig, SheetError, SheetLayout,
};

const TILE: u32 = 87;

/// Color that identifies frame `n` (1-based) after any resize.
fn frame_color(n: u32) -> Rgba<u8> {
    Rgba([n as u8 * 20, 255 - n as u8 * 20, 40, 255])
}

fn write_frames(dir: &Path, count: u32) {
    for n in 1..=count {
        // Varying source sizes; the sheet must not care.
        let size = 20 + n * 13;
        let frame = RgbaImage::from_pixel(size, size + 5, frame_color(n));
        frame
            .save_with_format(dir.join(format!("{:04}.png", n)), ImageFormat::Png)
            .unwrap();
    }
}

fn run(input: &Path, output: &Path) -> (Result<LayoutMetadata, SheetError>, String) {
    let config = SheetConfig::builder()
        .source_dir(input)
        .output_dir(output)
        .file_name("enemy_born_sheet.png")
        .tile_size(TILE, TILE)
        .columns(4)
        .build();
    let pipeline = FramesToSheetPipeline::new(config);
    let mut console = Cursor::new(Vec::new());
    let result = pipeline.run(&mut console);
    (result, String::from_utf8(console.into_inner()).unwrap())
}

fn load_sheet(output: &Path) -> RgbaImage {
    image::open(output.join("enemy_born_sheet.png")).unwrap().into_rgba8()
}

fn center(x: u32, y: u32) -> (u32, u32) {
    (x + TILE / 2, y + TILE / 2)
}

fn assert_transparent_cell(sheet: &RgbaImage, x: u32, y: u32) {
    for dy in 0..TILE {
        for dx in 0..TILE {
            assert_eq!(sheet.get_pixel(x + dx, y + dy)[3], 0, "pixel ({}, {})", x + dx, y + dy);
        }
    }
}

#[test]
fn ten_frames_fill_three_rows() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_frames(input.path(), 10);

    let (result, console) = run(input.path(), output.path());
    let metadata = result.unwrap();

    assert_eq!(metadata.frame_count, 10);
    assert_eq!(metadata.rows, 3);
    assert_eq!((metadata.sheet_width, metadata.sheet_height), (348, 261));

    let sheet = load_sheet(output.path());
    assert_eq!(sheet.dimensions(), (348, 261));

    for (n, (x, y)) in [(1, (0, 0)), (5, (0, 87)), (9, (0, 174)), (10, (87, 174))] {
        let (cx, cy) = center(x, y);
        assert_eq!(sheet.get_pixel(cx, cy), &frame_color(n), "frame {n}");
    }
    assert_transparent_cell(&sheet, 174, 174);
    assert_transparent_cell(&sheet, 261, 174);

    assert!(console.starts_with("Found 10 frames\nProcessing 1/10: 0001.png\n"));
    assert!(console.contains("Processing 10/10: 0010.png\n"));
    assert!(console.contains("Sheet size: 348 x 261\n"));
    assert!(console.contains("  Rows: 3\n"));
}

#[test]
fn frame_order_follows_file_names() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_frames(input.path(), 6);

    let (result, _) = run(input.path(), output.path());
    let layout = SheetLayout::new(result.unwrap().frame_count as usize, 4, TILE, TILE).unwrap();

    let sheet = load_sheet(output.path());
    for cell in layout.cells() {
        let (cx, cy) = center(cell.x, cell.y);
        assert_eq!(sheet.get_pixel(cx, cy), &frame_color(cell.index + 1));
    }
}

#[test]
fn four_frames_make_one_full_row() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_frames(input.path(), 4);

    let (result, _) = run(input.path(), output.path());
    let metadata = result.unwrap();

    assert_eq!(metadata.rows, 1);
    let sheet = load_sheet(output.path());
    assert_eq!(sheet.dimensions(), (4 * TILE, TILE));
    for n in 1..=4 {
        let (cx, cy) = center((n - 1) * TILE, 0);
        assert_eq!(sheet.get_pixel(cx, cy), &frame_color(n));
    }
}

#[test]
fn single_frame_leaves_three_empty_cells() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_frames(input.path(), 1);

    let (result, _) = run(input.path(), output.path());
    result.unwrap();

    let sheet = load_sheet(output.path());
    assert_eq!(sheet.dimensions(), (4 * TILE, TILE));
    let (cx, cy) = center(0, 0);
    assert_eq!(sheet.get_pixel(cx, cy), &frame_color(1));
    for column in 1..4 {
        assert_transparent_cell(&sheet, column * TILE, 0);
    }
}

#[test]
fn empty_directory_writes_nothing() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    std::fs::create_dir(input.path().join("0001.png")).unwrap();

    let (result, console) = run(input.path(), output.path());

    assert!(matches!(result.unwrap_err(), SheetError::EmptyInput(_)));
    assert!(console.starts_with("No PNG files found in"));
    assert!(!output.path().join("enemy_born_sheet.png").exists());
}

#[test]
fn corrupt_frame_aborts_without_output() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_frames(input.path(), 3);
    std::fs::write(input.path().join("0002.png"), b"truncated").unwrap();

    let (result, _) = run(input.path(), output.path());

    assert!(matches!(result.unwrap_err(), SheetError::DecodeError(_)));
    assert!(!output.path().join("enemy_born_sheet.png").exists());
}
