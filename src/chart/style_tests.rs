//! Tests for chart styling primitives.

use super::*;

mod chart_color_tests {
    use super::*;

    #[test]
    fn parses_long_hex() {
        assert_eq!(ChartColor::parse("#eaeaf2").unwrap(), ChartColor::rgb(0xea, 0xea, 0xf2));
    }

    #[test]
    fn parses_short_hex() {
        assert_eq!(ChartColor::parse("#f00").unwrap(), ChartColor::rgb(0xff, 0, 0));
    }

    #[test]
    fn accepts_uppercase_and_surrounding_space() {
        assert_eq!(ChartColor::parse(" #0000FF ").unwrap(), ChartColor::rgb(0, 0, 0xff));
    }

    #[test]
    fn rejects_missing_hash() {
        let err = ChartColor::parse("0000ff").unwrap_err();
        assert!(err.contains("hex color"));
    }

    #[test]
    fn rejects_named_colors() {
        assert!(ChartColor::parse("blue").is_err());
    }

    #[test]
    fn rejects_bad_digits() {
        assert!(ChartColor::parse("#00gg00").is_err());
    }

    #[test]
    fn rejects_wrong_length() {
        let err = ChartColor::parse("#12345").unwrap_err();
        assert!(err.contains("got 5"));
    }

    #[test]
    fn display_is_lowercase_long_hex() {
        assert_eq!(ChartColor::parse("#ABC").unwrap().to_string(), "#aabbcc");
    }

    #[test]
    fn from_str_matches_parse() {
        let color: ChartColor = "#112233".parse().unwrap();
        assert_eq!(color.to_rgb(), RGBColor(0x11, 0x22, 0x33));
    }
}

mod label_rotation_tests {
    use super::*;

    #[test]
    fn quarter_turns_only() {
        for degrees in [0, 90, 180, 270] {
            let rotation = LabelRotation::from_degrees(degrees).unwrap();
            assert_eq!(rotation.degrees(), degrees);
        }
        assert_eq!(LabelRotation::from_degrees(30), None);
        assert_eq!(LabelRotation::from_degrees(360), None);
    }

    #[test]
    fn default_reads_upward() {
        assert_eq!(LabelRotation::default(), LabelRotation::Up);
        assert!(LabelRotation::default().is_vertical());
    }

    #[test]
    fn counterclockwise_maps_to_plotters_clockwise() {
        assert!(matches!(LabelRotation::Up.font_transform(), FontTransform::Rotate270));
        assert!(matches!(LabelRotation::Down.font_transform(), FontTransform::Rotate90));
        assert!(matches!(LabelRotation::Horizontal.font_transform(), FontTransform::None));
    }

    #[test]
    fn horizontal_labels_hang_below_tick() {
        let anchor = LabelRotation::Horizontal.anchor();
        assert!(matches!(anchor.h_pos, HPos::Center));
        assert!(matches!(anchor.v_pos, VPos::Top));
        assert!(!LabelRotation::Horizontal.is_vertical());
    }
}

#[test]
fn legend_positions_map_to_corners() {
    assert!(matches!(
        legend_anchor(LegendPosition::UpperRight),
        SeriesLabelPosition::UpperRight
    ));
    assert!(matches!(
        legend_anchor(LegendPosition::LowerLeft),
        SeriesLabelPosition::LowerLeft
    ));
}
