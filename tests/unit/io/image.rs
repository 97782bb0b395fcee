//! Tests for image decoding and PNG export including error handling

#[cfg(test)]
mod tests {
    use image::{ImageFormat, ImageReader, Rgb, RgbImage};
    use std::io::Cursor;
    use tilemosaic::MosaicError;
    use tilemosaic::io::image::{decode_image, write_png};

    fn encode(image: &RgbImage, format: ImageFormat) -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, format).unwrap();
        bytes.into_inner()
    }

    // Tests PNG, JPEG and GIF sources decode with their dimensions intact
    // Verified by restricting accepted formats to PNG
    #[test]
    fn test_decode_supported_formats() {
        let source = RgbImage::from_pixel(6, 4, Rgb([200, 100, 50]));

        for format in [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::Gif] {
            let decoded = decode_image(&encode(&source, format), "source").unwrap();
            assert_eq!((decoded.width(), decoded.height()), (6, 4), "{format:?}");
        }
    }

    // Tests bytes that are not an image fail as decode errors
    // Verified by returning an empty image on failure
    #[test]
    fn test_decode_malformed_bytes() {
        let result = decode_image(b"definitely not an image", "notes.txt");
        match result {
            Err(MosaicError::Decode { locator, .. }) => assert_eq!(locator, "notes.txt"),
            other => unreachable!("Expected Decode error, got {other:?}"),
        }
    }

    // Tests a truncated PNG fails as a decode error
    // Verified by ignoring decoder errors
    #[test]
    fn test_decode_truncated_png() {
        let bytes = encode(&RgbImage::new(16, 16), ImageFormat::Png);
        let truncated = bytes.get(..bytes.len() / 2).unwrap();

        assert!(matches!(
            decode_image(truncated, "half.png"),
            Err(MosaicError::Decode { .. })
        ));
    }

    // Tests formats outside PNG, JPEG and GIF are refused
    // Verified by accepting any guessed format
    #[test]
    fn test_decode_rejects_unsupported_format() {
        let bytes = encode(&RgbImage::new(2, 2), ImageFormat::Bmp);

        assert!(matches!(
            decode_image(&bytes, "image.bmp"),
            Err(MosaicError::Decode { .. })
        ));
    }

    // Tests export creates missing directories and writes PNG regardless of extension
    // Verified by saving with the format implied by the extension
    #[test]
    fn test_write_png_forces_png() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nested/deeper/mosaic.jpg");
        let canvas = RgbImage::from_pixel(3, 5, Rgb([1, 2, 3]));

        write_png(&canvas, &output).unwrap();

        let reader = ImageReader::open(&output)
            .unwrap()
            .with_guessed_format()
            .unwrap();
        assert_eq!(reader.format(), Some(ImageFormat::Png));
        assert_eq!(reader.decode().unwrap().to_rgb8(), canvas);
    }

    // Tests an unwritable destination fails as an encode/write error
    // Verified by discarding the save result
    #[test]
    fn test_write_png_to_directory_fails() {
        let dir = tempfile::tempdir().unwrap();

        match write_png(&RgbImage::new(2, 2), dir.path()) {
            Err(MosaicError::EncodeWrite { path, .. }) => assert_eq!(path, dir.path()),
            other => unreachable!("Expected EncodeWrite error, got {other:?}"),
        }
    }
}
