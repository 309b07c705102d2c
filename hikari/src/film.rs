use serde::{Deserialize, Serialize};

use std::path::{Path, PathBuf};

use crate::{
    error::{Error, Result},
    hikari_info,
    math::Color,
};

/// The settings for an [`ImageWriter`].
#[derive(Debug, Copy, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FilmSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for FilmSettings {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
        }
    }
}

/// Pixel buffer that is written out as a PNG.
#[derive(Debug, Clone)]
pub struct ImageWriter {
    name: String,
    width: u32,
    height: u32,
    // Row-major
    pixels: Vec<Color>,
    output_dir: PathBuf,
}

impl ImageWriter {
    /// Creates a new black `ImageWriter` that writes `images/<name>.png`.
    pub fn new(name: &str, width: u32, height: u32) -> Result<Self> {
        // The buffer has to be addressable
        let pixel_count = (width as usize)
            .checked_mul(height as usize)
            .filter(|&count| {
                count != 0
                    && count
                        .checked_mul(std::mem::size_of::<Color>())
                        .map_or(false, |bytes| bytes <= isize::MAX as usize)
            })
            .ok_or(Error::InvalidResolution { width, height })?;
        Ok(Self {
            name: name.to_string(),
            width,
            height,
            pixels: vec![Color::BLACK; pixel_count],
            output_dir: PathBuf::from("images"),
        })
    }

    pub fn from_settings(name: &str, settings: FilmSettings) -> Result<Self> {
        Self::new(name, settings.width, settings.height)
    }

    /// Sets the directory the image is written into.
    pub fn with_output_dir(mut self, output_dir: &Path) -> Self {
        self.output_dir = output_dir.to_path_buf();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the path the image will be written to.
    pub fn path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.png", self.name))
    }

    fn index(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn write_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        let i = self.index(x, y)?;
        self.pixels[i] = color;
        Ok(())
    }

    pub fn pixel(&self, x: u32, y: u32) -> Result<Color> {
        Ok(self.pixels[self.index(x, y)?])
    }

    pub fn fill_background(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Colors every row and column that is a multiple of `interval`.
    pub fn print_grid(&mut self, interval: u32, color: Color) -> Result<()> {
        if interval == 0 {
            return Err(Error::ZeroGridInterval);
        }
        for y in 0..self.height {
            for x in 0..self.width {
                if x % interval == 0 || y % interval == 0 {
                    self.write_pixel(x, y, color)?;
                }
            }
        }
        Ok(())
    }

    /// Writes the pixels to disk, clamping them to the displayable range.
    pub fn write_to_image(&self) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;

        let width = self.width as usize;
        let img = image::RgbImage::from_fn(self.width, self.height, |x, y| {
            image::Rgb(self.pixels[(y as usize) * width + (x as usize)].to_rgb8())
        });

        let path = self.path();
        img.save(&path)?;
        hikari_info!("Wrote {}", path.display());

        Ok(path)
    }
}
