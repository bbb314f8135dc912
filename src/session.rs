//! The choose → convert workflow

use crate::config::SnapConfig;
use crate::output::write_png;
use crate::platform::{FileDialogAdapter, FileFilter, Notice, Notifier};
use crate::rendering::encode_png;
use crate::rendering::font::{GlyphSource, MonospaceFont};
use crate::rendering::raster::TextRasterizer;
use crate::source::SourceText;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// One user session: configuration, rasterizer and the last chosen input.
pub struct Session<F: GlyphSource = MonospaceFont> {
    config: SnapConfig,
    rasterizer: TextRasterizer<F>,
    input: Option<PathBuf>,
}

impl Session<MonospaceFont> {
    pub fn with_system_font(config: SnapConfig) -> Result<Self> {
        config.validate()?;
        let rasterizer = TextRasterizer::with_system_font(&config)?;
        Ok(Self::from_parts(config, rasterizer))
    }
}

impl<F: GlyphSource> Session<F> {
    pub fn new(font: F, config: SnapConfig) -> Self {
        let rasterizer = TextRasterizer::new(font, &config);
        Self::from_parts(config, rasterizer)
    }

    fn from_parts(config: SnapConfig, rasterizer: TextRasterizer<F>) -> Self {
        Self {
            config,
            rasterizer,
            input: None,
        }
    }

    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    pub fn selected_input(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    /// Ask for a text file. A dismissed dialog keeps the previous choice.
    pub fn choose_input(&mut self, dialogs: &mut dyn FileDialogAdapter) -> Option<&Path> {
        if let Some(path) = dialogs.pick_open_path(&FileFilter::text_files()) {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            log::info!("selected input {}", name);
            self.input = Some(path);
        }
        self.selected_input()
    }

    /// Render the chosen file and save it where the user asks.
    ///
    /// The save dialog is only shown once rendering succeeded, and the file is
    /// only written once encoding succeeded.
    pub fn convert(&self, transparent: bool, dialogs: &mut dyn FileDialogAdapter) -> Result<PathBuf> {
        let input = self.input.as_deref().ok_or(Error::NoInputSelected)?;
        let source = SourceText::read(input)?;
        let canvas = self.rasterizer.rasterize_source(&source, transparent)?;

        let dest = dialogs
            .pick_save_path(&self.config.default_output_name)
            .ok_or(Error::SaveCanceled)?;
        let encoded = encode_png(&canvas)?;
        write_png(&dest, &encoded)?;
        Ok(dest)
    }

    /// `convert`, reported to the user as a notice.
    pub fn convert_and_notify(
        &self,
        transparent: bool,
        dialogs: &mut dyn FileDialogAdapter,
        notifier: &mut dyn Notifier,
    ) -> Notice {
        let res = self.convert(transparent, dialogs);
        if let Err(e) = &res {
            log::warn!("conversion failed: {}", e);
        }
        let notice = Notice::from_result(&res);
        notifier.notify(&notice);
        notice
    }
}
