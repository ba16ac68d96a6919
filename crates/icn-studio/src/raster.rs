//! SVG → RGBA rasterization via resvg.

use anyhow::{Context, Result, anyhow};
use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

/// Rasterizes an SVG document at its intrinsic size.
pub fn rasterize(svg: &str) -> Result<RgbaImage> {
    let tree = Tree::from_str(svg, &Options::default()).context("parsing generated SVG")?;

    let size = tree.size().to_int_size();
    let mut pixmap = Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow!("cannot allocate {}x{} pixmap", size.width(), size.height()))?;
    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

    Ok(pixmap_to_rgba_image(&pixmap))
}

/// Converts tiny_skia's premultiplied pixels to straight-alpha RGBA.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in img.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_rect_lands_on_pixels() {
        let svg = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"8\" height=\"8\">\
                   <rect x=\"0\" y=\"0\" width=\"4\" height=\"8\" fill=\"#ff0000\"/></svg>";
        let img = rasterize(svg).unwrap();
        assert_eq!(img.dimensions(), (8, 8));
        assert_eq!(*img.get_pixel(1, 4), Rgba([255, 0, 0, 255]));
        assert_eq!(img.get_pixel(6, 4)[3], 0);
    }

    #[test]
    fn invalid_svg_is_an_error() {
        assert!(rasterize("not svg").is_err());
    }
}
