use tracing::{debug, info, instrument, warn};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    common::error::{SheetError, Result},
    frames::{Frame, FrameReader, PngFrameReader, list_frame_files},
    report::{LayoutMetadata, write_sheet_report},
    resize::{FrameResizer, LanczosResizer},
    sheet::{PngSheetWriter, SheetConfig, SheetLayout, SheetWriter, pack_frames},
};

pub struct FramesToSheetPipeline<R: FrameReader, Z: FrameResizer, W: SheetWriter> {
    reader: R,
    resizer: Z,
    writer: W,
    config: SheetConfig,
}

impl FramesToSheetPipeline<PngFrameReader, LanczosResizer, PngSheetWriter> {
    pub fn new(config: SheetConfig) -> Self {
        Self {
            reader: PngFrameReader,
            resizer: LanczosResizer,
            writer: PngSheetWriter,
            config,
        }
    }
}

impl<R: FrameReader, Z: FrameResizer, W: SheetWriter> FramesToSheetPipeline<R, Z, W> {
    pub fn with_custom(reader: R, resizer: Z, writer: W, config: SheetConfig) -> Self {
        Self {
            reader,
            resizer,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if self.config.tile_width == 0 || self.config.tile_height == 0 {
            return Err(SheetError::InvalidDimensions(
                self.config.tile_width,
                self.config.tile_height,
            ));
        }

        if self.config.columns == 0 {
            return Err(SheetError::InvalidLayout("column count must be non-zero".to_string()));
        }

        Ok(())
    }

    /// Decodes one frame and scales it to the tile size.
    pub fn process_frame(&self, name: &str, data: &[u8]) -> Result<Frame> {
        let decoded = {
            let _span = tracing::debug_span!("decode_frame", frame = name).entered();
            self.reader.read_frame(data)?
        };

        let resized = {
            let _span = tracing::debug_span!("resize_frame",
                frame = name,
                width = decoded.width(),
                height = decoded.height()
            ).entered();
            self.resizer
                .resize(&decoded, self.config.tile_width, self.config.tile_height)?
        };

        Ok(Frame::new(name, resized))
    }

    /// Packs already decoded sources into a sheet and encodes it to `output`.
    ///
    /// Each source is a file name and its encoded bytes, in animation order.
    /// A source's bytes are dropped as soon as its frame is decoded. Progress
    /// lines go to `console`.
    #[instrument(skip_all, fields(frames = sources.len()))]
    pub fn convert(
        &self,
        sources: Vec<(String, Vec<u8>)>,
        output: &mut dyn Write,
        console: &mut dyn Write,
    ) -> Result<LayoutMetadata> {
        self.validate_dimensions()?;

        let layout = SheetLayout::new(
            sources.len(),
            self.config.columns,
            self.config.tile_width,
            self.config.tile_height,
        )?;

        let total = sources.len();
        let mut frames = Vec::with_capacity(total);
        {
            let _span = tracing::info_span!("process_frames").entered();
            for (i, (name, data)) in sources.into_iter().enumerate() {
                let frame = self.process_frame(&name, &data)?;
                drop(data);
                frames.push(frame);
                writeln!(console, "Processing {}/{}: {}", i + 1, total, name)?;
            }
        }

        self.encode(frames, &layout, output)
    }

    fn encode(&self, frames: Vec<Frame>, layout: &SheetLayout, output: &mut dyn Write) -> Result<LayoutMetadata> {
        let sheet = {
            let (width, height) = layout.canvas_size();
            let _span = tracing::info_span!("pack_sheet", width, height).entered();
            pack_frames(frames, layout)?
        };

        {
            let _span = tracing::info_span!("encode_sheet").entered();
            self.writer.write_sheet(&sheet, output)?;
        }

        let metadata = LayoutMetadata::from(layout);
        info!(
            width = metadata.sheet_width,
            height = metadata.sheet_height,
            rows = metadata.rows,
            columns = metadata.columns,
            "Sheet packed"
        );
        Ok(metadata)
    }

    /// Builds the sheet from the configured source directory and writes it to
    /// the configured output path.
    ///
    /// Nothing is written unless every frame decodes and the sheet encodes.
    #[instrument(skip(self, console))]
    pub fn run(&self, console: &mut dyn Write) -> Result<LayoutMetadata> {
        self.validate_dimensions()?;

        let source_dir = self.config.source_dir.as_path();
        let output_path = self.config.output_path();

        info!(
            input = %source_dir.display(),
            output = %output_path.display(),
            "Building sprite sheet"
        );

        let files = {
            let _span = tracing::info_span!("list_frames").entered();
            list_frame_files(source_dir, &self.config.frame_extension)?
        };

        if files.is_empty() {
            writeln!(console, "No PNG files found in {}", source_dir.display())?;
            return Err(SheetError::EmptyInput(source_dir.to_path_buf()));
        }

        writeln!(console, "Found {} frames", files.len())?;

        let sources = {
            let _span = tracing::info_span!("read_input_files").entered();
            files
                .iter()
                .map(|path| read_source(path))
                .collect::<Result<Vec<_>>>()?
        };

        let mut encoded = Vec::new();
        let metadata = self.convert(sources, &mut encoded, console)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            write_output(&output_path, &encoded)?;
        }

        write_sheet_report(&metadata, &output_path, console)?;
        Ok(metadata)
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }
}

fn read_source(path: &Path) -> Result<(String, Vec<u8>)> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let data = std::fs::read(path).map_err(|e| {
        SheetError::InputReadError(format!("{}: {}", path.display(), e))
    })?;
    debug!("Read {} ({} bytes)", name, data.len());
    Ok((name, data))
}

fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    if let Err(e) = std::fs::write(path, data) {
        if path.exists() {
            warn!("Removing partially written {}", path.display());
            if let Err(remove_err) = std::fs::remove_file(path) {
                warn!("Failed to remove {}: {}", path.display(), remove_err);
            }
        }
        return Err(SheetError::OutputWriteError(format!("{}: {}", path.display(), e)));
    }
    Ok(())
}
