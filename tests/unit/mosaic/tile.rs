//! Tests for tile size validation and source scaling

#[cfg(test)]
mod tests {
    use image::imageops::FilterType;
    use image::{Rgb, RgbImage};
    use tilemosaic::MosaicError;
    use tilemosaic::mosaic::tile::{ResizeFilter, ScaledTile, TileSize};

    // Tests that sizes below two are rejected without clamping
    // Verified by lowering the minimum to one
    #[test]
    fn test_tile_size_rejects_small_values() {
        for value in [1, 0, -5] {
            match TileSize::new(value) {
                Err(MosaicError::InvalidTileSize { value: reported }) => {
                    assert_eq!(reported, value);
                }
                other => unreachable!("Expected InvalidTileSize for {value}, got {other:?}"),
            }
        }
    }

    // Tests the smallest valid size and the conversion trait
    // Verified by making the lower bound exclusive
    #[test]
    fn test_tile_size_accepts_two() {
        let tile_size = TileSize::new(2).unwrap();
        assert_eq!(tile_size.get(), 2);
        assert_eq!(tile_size.to_string(), "2");

        let converted = TileSize::try_from(20_i64).unwrap();
        assert_eq!(converted.get(), 20);
    }

    // Tests that values beyond u32 fail instead of wrapping
    // Verified by truncating with a cast
    #[test]
    fn test_tile_size_rejects_values_beyond_u32() {
        let value = i64::from(u32::MAX) + 1;
        assert!(matches!(
            TileSize::new(value),
            Err(MosaicError::InvalidTileSize { .. })
        ));
        assert!(TileSize::new(i64::from(u32::MAX)).is_ok());
    }

    // Tests that the whole source is scaled rather than cropped
    // Verified by cropping the top-left corner instead of resizing
    #[test]
    fn test_scaled_tile_covers_whole_source() {
        // Left half red, right half blue
        let source = RgbImage::from_fn(8, 8, |x, _| {
            if x < 4 { Rgb([255, 0, 0]) } else { Rgb([0, 0, 255]) }
        });
        let tile = ScaledTile::from_source(&source, TileSize::new(2).unwrap(), ResizeFilter::Nearest);

        assert_eq!(tile.side(), 2);
        assert_eq!(tile.pixels().dimensions(), (2, 2));
        assert_eq!(*tile.pixels().get_pixel(0, 0), Rgb([255, 0, 0]));
        assert_eq!(*tile.pixels().get_pixel(1, 1), Rgb([0, 0, 255]));
    }

    // Tests that a uniform source stays uniform under every filter
    // Verified by mapping a filter to the wrong kernel
    #[test]
    fn test_scaled_tile_uniform_source_all_filters() {
        let source = RgbImage::from_pixel(5, 3, Rgb([40, 120, 200]));
        let tile_size = TileSize::new(4).unwrap();

        for filter in [
            ResizeFilter::Nearest,
            ResizeFilter::Triangle,
            ResizeFilter::CatmullRom,
            ResizeFilter::Gaussian,
            ResizeFilter::Lanczos3,
        ] {
            let tile = ScaledTile::from_source(&source, tile_size, filter);
            assert_eq!(tile.pixels().dimensions(), (4, 4));
            assert!(
                tile.pixels().pixels().all(|p| *p == Rgb([40, 120, 200])),
                "{filter:?} altered a uniform source"
            );
        }
    }

    // Tests the mapping onto the imaging library's kernels
    // Verified by swapping two arms of the conversion
    #[test]
    fn test_filter_conversion() {
        assert_eq!(ResizeFilter::default(), ResizeFilter::Nearest);
        assert_eq!(FilterType::from(ResizeFilter::Nearest), FilterType::Nearest);
        assert_eq!(FilterType::from(ResizeFilter::Lanczos3), FilterType::Lanczos3);
        assert_eq!(
            FilterType::from(ResizeFilter::CatmullRom),
            FilterType::CatmullRom
        );
    }
}
