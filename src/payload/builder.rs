use crate::core::error::IssueError;
use image::{DynamicImage, Luma, RgbaImage};
use qrcode::{EcLevel, QrCode};

/// Pixel size of one QR module in the rendered code image
pub const QR_MODULE_SIZE: u32 = 5;

/// Derived, ephemeral credential data for one pass.
///
/// Owned exclusively by one pipeline run; never persisted apart from
/// the rendered image.
pub struct CredentialPayload {
    pub identifier: String,
    pub verification_url: String,
    /// Rendered code including the quiet zone, ready for composition
    pub code_image: RgbaImage,
}

/// Build the verification URL and its scannable code image.
///
/// The identifier is a restricted hex alphabet, so it is embedded
/// without URL encoding. Error correction level H is mandatory: the
/// compositor overlays a logo over the code center and the remaining
/// modules must still scan.
pub fn build_payload(identifier: &str, base_url: &str) -> Result<CredentialPayload, IssueError> {
    let verification_url = format!("{}?hash={}", base_url, identifier);

    let code = QrCode::with_error_correction_level(verification_url.as_bytes(), EcLevel::H)?;

    let rendered = code
        .render::<Luma<u8>>()
        .module_dimensions(QR_MODULE_SIZE, QR_MODULE_SIZE)
        .build();

    Ok(CredentialPayload {
        identifier: identifier.to_string(),
        verification_url,
        code_image: DynamicImage::ImageLuma8(rendered).to_rgba8(),
    })
}
