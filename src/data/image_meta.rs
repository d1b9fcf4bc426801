//! Natural pixel dimensions of the background image.

use crate::core::geo::Size;
use crate::Result;
use std::path::Path;

/// Reads the image header at `path` and returns its pixel size
pub fn natural_size(path: impl AsRef<Path>) -> Result<Size> {
    let path = path.as_ref();
    let (width, height) = image::image_dimensions(path)?;
    log::debug!("{} is {}x{}", path.display(), width, height);
    Ok(Size::new(f64::from(width), f64::from(height)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_png_dimensions() {
        let path = std::env::temp_dir().join("floodmap_natural_size_test.png");
        image::RgbImage::new(64, 48).save(&path).unwrap();

        let size = natural_size(&path).unwrap();
        assert_eq!(size, Size::new(64.0, 48.0));

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(natural_size("/definitely/not/here.png").is_err());
    }
}
