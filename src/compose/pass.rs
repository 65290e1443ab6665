use crate::compose::draw::draw_rounded_rect_outline;
use crate::compose::fit::{fit_caption_size, MeasureText};
use crate::compose::font::PassFont;
use ab_glyph::PxScale;
use image::{imageops, DynamicImage, Rgba, RgbImage, RgbaImage};
use imageproc::drawing::draw_text_mut;

/// Margin around the code, also the horizontal caption fit margin
pub const PASS_MARGIN: u32 = 10;

/// Vertical padding added to the caption band
pub const CAPTION_PAD: u32 = 20;

/// Starting point for the caption fit search
pub const NOMINAL_CAPTION_SIZE: u32 = 24;

/// Brand background and outer border color
pub const BRAND_COLOR: Rgba<u8> = Rgba([0, 128, 0, 255]);

const BORDER_DARK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const CAPTION_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

const BORDER_RADIUS: i32 = 10;
const OUTER_BORDER_WIDTH: i32 = 7;
const INNER_BORDER_WIDTH: i32 = 3;

/// Compose the final pass image.
///
/// The code is pasted at (margin, margin) on a brand-colored canvas,
/// an optional logo is alpha-composited over the exact code center
/// (level-H error correction keeps the code scannable underneath),
/// two concentric rounded borders frame the code region, and the
/// caption is auto-fitted and centered in the band below. The output
/// is flattened RGB with no alpha channel.
pub fn compose_pass(
    code_image: &RgbaImage,
    logo: Option<&RgbaImage>,
    caption: &str,
    font: &PassFont,
) -> RgbImage {
    let mut code = code_image.clone();

    if let Some(logo) = logo {
        let x = (i64::from(code.width()) - i64::from(logo.width())) / 2;
        let y = (i64::from(code.height()) - i64::from(logo.height())) / 2;
        imageops::overlay(&mut code, logo, x, y);
    }

    let canvas_width = code.width() + 2 * PASS_MARGIN;
    let fit_bound = canvas_width - 2 * PASS_MARGIN;
    let caption_size = fit_caption_size(font, caption, fit_bound, NOMINAL_CAPTION_SIZE);
    let canvas_height = PASS_MARGIN + code.height() + caption_size + CAPTION_PAD;

    let mut canvas = RgbaImage::from_pixel(canvas_width, canvas_height, BRAND_COLOR);
    imageops::replace(&mut canvas, &code, i64::from(PASS_MARGIN), i64::from(PASS_MARGIN));

    let code_bottom = (PASS_MARGIN + code.height()) as i32;
    draw_rounded_rect_outline(
        &mut canvas,
        4,
        4,
        canvas_width as i32 - 5,
        code_bottom + 3,
        BORDER_RADIUS,
        OUTER_BORDER_WIDTH,
        BRAND_COLOR,
    );
    draw_rounded_rect_outline(
        &mut canvas,
        9,
        9,
        canvas_width as i32 - 10,
        code_bottom - 1,
        BORDER_RADIUS,
        INNER_BORDER_WIDTH,
        BORDER_DARK,
    );

    let caption_width = font.text_width(caption_size, caption);
    let text_x = (canvas_width.saturating_sub(caption_width) / 2) as i32;
    let band_top = PASS_MARGIN + code.height();
    let band_height = canvas_height - band_top;
    let text_y = (band_top + band_height.saturating_sub(caption_size) / 2) as i32;
    draw_text_mut(
        &mut canvas,
        CAPTION_COLOR,
        text_x,
        text_y,
        PxScale::from(caption_size as f32),
        font.inner(),
        caption,
    );

    DynamicImage::ImageRgba8(canvas).to_rgb8()
}
