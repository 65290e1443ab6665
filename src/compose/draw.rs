use image::{Rgba, RgbaImage};

/// Draw a rounded-rectangle outline with the given stroke width.
///
/// The stroke is built from `width` concentric one-pixel rings, each
/// inset one pixel further with a correspondingly smaller corner
/// radius. Coordinates are inclusive corner points of the outermost
/// ring; pixels falling outside the image are skipped.
pub fn draw_rounded_rect_outline(
    img: &mut RgbaImage,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    radius: i32,
    width: i32,
    color: Rgba<u8>,
) {
    for inset in 0..width {
        let r = (radius - inset).max(0);
        draw_rounded_ring(img, x0 + inset, y0 + inset, x1 - inset, y1 - inset, r, color);
    }
}

fn draw_rounded_ring(img: &mut RgbaImage, x0: i32, y0: i32, x1: i32, y1: i32, r: i32, color: Rgba<u8>) {
    if x1 <= x0 || y1 <= y0 {
        return;
    }
    let r = r.min((x1 - x0) / 2).min((y1 - y0) / 2);

    // Straight edges between the corner arcs
    for x in (x0 + r)..=(x1 - r) {
        put(img, x, y0, color);
        put(img, x, y1, color);
    }
    for y in (y0 + r)..=(y1 - r) {
        put(img, x0, y, color);
        put(img, x1, y, color);
    }

    if r == 0 {
        return;
    }

    // Midpoint circle, one quadrant mirrored into each corner
    let (left, top) = (x0 + r, y0 + r);
    let (right, bottom) = (x1 - r, y1 - r);
    let mut dx = r;
    let mut dy = 0;
    let mut err = 1 - r;

    while dx >= dy {
        for &(ax, ay) in &[(dx, dy), (dy, dx)] {
            put(img, left - ax, top - ay, color);
            put(img, right + ax, top - ay, color);
            put(img, left - ax, bottom + ay, color);
            put(img, right + ax, bottom + ay, color);
        }

        dy += 1;
        if err < 0 {
            err += 2 * dy + 1;
        } else {
            dx -= 1;
            err += 2 * (dy - dx) + 1;
        }
    }
}

fn put(img: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}
