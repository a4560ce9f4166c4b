use anyhow::Context;
use sprite_sheet_rs::image_pipeline::{FramesToSheetPipeline, SheetConfig};
use sprite_sheet_rs::logger;

use tracing::info;

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting sprite sheet build...");

    let config = SheetConfig::default();
    let pipeline = FramesToSheetPipeline::new(config);

    info!("Frames to sheet pipeline initialized");
    info!("Source: {}", pipeline.config().source_dir.display());
    info!(
        "Tile size: {}x{}, {} columns",
        pipeline.config().tile_width,
        pipeline.config().tile_height,
        pipeline.config().columns
    );

    let stdout = std::io::stdout();
    let mut console = stdout.lock();

    let metadata = pipeline
        .run(&mut console)
        .context("sprite sheet build failed")?;

    info!("Sprite sheet built: {} frames", metadata.frame_count);
    Ok(())
}
