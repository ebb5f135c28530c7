use super::*;

#[test]
fn defaults_match_the_chronos_layout() {
    let config = Config::default();
    assert_eq!(config.input.path, PathBuf::from("profiler/ChronosProfile.csv"));
    assert_eq!(config.output.path, PathBuf::from("program_timemap.png"));
    assert_eq!(config.input.function_column, "Calling Function");
    assert_eq!(config.input.total_column, "Total Time");
    assert_eq!(config.input.mean_column, "Mean Time");
}

#[test]
fn chart_config_has_expected_defaults() {
    let chart = ChartConfig::default();
    assert_eq!(chart.title, "Function Heatmap");
    assert_eq!(chart.x_label, "Function Names");
    assert_eq!(chart.y_label, "Time (s)");
    assert_eq!(chart.font_family, "Liberation Mono");
    assert_eq!(chart.font_size, 15);
    assert_eq!(chart.x_label_rotation, 90);
    assert_eq!(chart.legend_position, LegendPosition::UpperRight);
    assert_eq!(chart.total_color, "#0000ff");
    assert_eq!(chart.mean_color, "#ff0000");
}

#[test]
fn empty_document_deserializes_to_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_sections_keep_remaining_defaults() {
    let toml_str = r#"
        [output]
        path = "charts/timemap.svg"

        [chart]
        title = "Render loop"
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.output.path, PathBuf::from("charts/timemap.svg"));
    assert_eq!(config.output.width, 1024);
    assert_eq!(config.chart.title, "Render loop");
    assert_eq!(config.chart.y_label, "Time (s)");
    assert_eq!(config.input, InputConfig::default());
}

#[test]
fn custom_column_names_deserialize() {
    let toml_str = r#"
        [input]
        path = "data/profile.csv"
        function_column = "function"
        total_column = "total_s"
        mean_column = "mean_s"
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.input.function_column, "function");
    assert_eq!(config.input.total_column, "total_s");
    assert_eq!(config.input.mean_column, "mean_s");
}

#[test]
fn legend_position_uses_kebab_case() {
    let config: Config = toml::from_str(
        r#"
        [chart]
        legend_position = "lower-left"
    "#,
    )
    .unwrap();
    assert_eq!(config.chart.legend_position, LegendPosition::LowerLeft);
}

#[test]
fn unknown_legend_position_is_rejected() {
    let result: std::result::Result<Config, _> = toml::from_str(
        r#"
        [chart]
        legend_position = "center"
    "#,
    );
    assert!(result.is_err());
}

#[test]
fn version_is_omitted_when_unset() {
    let serialized = toml::to_string(&Config::default()).unwrap();
    assert!(!serialized.contains("version"));
    assert!(serialized.contains("[chart]"));
}
