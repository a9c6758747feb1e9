use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use gloam_renderer::ImageBuffer;

/// Write the image as plain-text PPM (P3), top row first.
pub fn write_ppm<W: Write>(image: &ImageBuffer, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for rgb in image.to_rgb8().chunks_exact(3) {
        writeln!(writer, "{} {} {}", rgb[0], rgb[1], rgb[2])?;
    }

    Ok(())
}

/// Save the image, choosing the format from the file extension.
pub fn save_image(image: &ImageBuffer, path: &Path) -> anyhow::Result<()> {
    let is_ppm = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        let file =
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        write_ppm(image, &mut writer)?;
        writer.flush()?;
    } else {
        image
            .to_rgb_image()
            .save(path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
    }

    log::info!("Saved {}", path.display());
    Ok(())
}
