use chart_gallery::api::{ChartGallery, GalleryConfig};
use chart_gallery::core::{ScriptedSource, Viewport};
use chart_gallery::error::ChartError;
use chart_gallery::gallery::{BumpChartSettings, DemoChart};
use chart_gallery::lifecycle::HeadlessChart;

#[test]
fn gallery_smoke_flow() {
    let config = GalleryConfig::new(Viewport::new(1400, 900)).with_seed(42);
    let mut gallery = ChartGallery::new(config).expect("gallery init");

    let (bar_chart, bar_calls) = HeadlessChart::with_recorder();
    let (bump_chart, bump_calls) = HeadlessChart::with_recorder();
    let mut bar = gallery
        .mount(DemoChart::BasicBar, bar_chart)
        .expect("mount basic bar");
    let bump = gallery
        .mount(DemoChart::BumpChart, bump_chart)
        .expect("mount bump chart");

    assert_eq!(bar_calls.last_viewport(), Some(Viewport::new(800, 500)));
    assert_eq!(bump_calls.last_viewport(), Some(Viewport::new(1400, 600)));

    let notified = gallery
        .resize_window(Viewport::new(1000, 700))
        .expect("resize");
    assert_eq!(notified, 2);
    assert_eq!(bump_calls.last_viewport(), Some(Viewport::new(1000, 600)));

    bar.unmount();
    assert_eq!(gallery.events().listener_count(), 1);
    drop(bump);
    assert_eq!(gallery.events().listener_count(), 0);
    assert_eq!(bar_calls.releases(), 1);
    assert_eq!(bump_calls.releases(), 1);
}

#[test]
fn same_seed_gives_same_bump_chart() {
    let mut first = ChartGallery::new(GalleryConfig::default().with_seed(9)).expect("first");
    let mut second = ChartGallery::new(GalleryConfig::default().with_seed(9)).expect("second");

    assert_eq!(
        first.option_for(DemoChart::BumpChart).expect("first option"),
        second.option_for(DemoChart::BumpChart).expect("second option")
    );
}

#[test]
fn disabled_demo_is_rejected_and_its_chart_released() {
    let config = GalleryConfig::default().with_enabled_demos([DemoChart::BasicBar]);
    let mut gallery = ChartGallery::new(config).expect("gallery init");
    let (chart, recorder) = HeadlessChart::with_recorder();

    let result = gallery.mount(DemoChart::StackedLine, chart);

    assert!(matches!(result, Err(ChartError::InvalidArgument(_))));
    assert_eq!(recorder.releases(), 1);
}

#[test]
fn options_follow_enabled_order() {
    let config = GalleryConfig::default()
        .with_enabled_demos([DemoChart::TemperatureChange, DemoChart::BasicBar]);
    let mut gallery = ChartGallery::new(config).expect("gallery init");

    let options = gallery.options().expect("options");

    assert_eq!(
        options.keys().copied().collect::<Vec<_>>(),
        [DemoChart::TemperatureChange, DemoChart::BasicBar]
    );
}

#[test]
fn scripted_source_drives_bump_chart_through_gallery() {
    let settings = BumpChartSettings {
        names: vec!["x".to_owned(), "y".to_owned()],
        years: vec!["2001".to_owned()],
    };
    let config = GalleryConfig::default().with_bump_chart(settings);
    let mut gallery =
        ChartGallery::with_source(config, ScriptedSource::new([0.2])).expect("gallery init");

    let option = gallery.option_for(DemoChart::BumpChart).expect("bump chart");
    let ranks: Vec<f64> = option.series.iter().map(|s| s.values()[0]).collect();
    assert_eq!(ranks, [2.0, 1.0]);

    let err = gallery
        .option_for(DemoChart::BumpChart)
        .expect_err("script exhausted");
    assert!(matches!(
        err,
        ChartError::RandomSourceExhausted { drawn: 1 }
    ));
}

#[test]
fn invalid_resize_is_rejected_without_notifying() {
    let mut gallery = ChartGallery::new(GalleryConfig::default().with_seed(1)).expect("gallery");
    let _mount = gallery
        .mount(DemoChart::StackedArea, HeadlessChart::new())
        .expect("mount");

    assert!(gallery.resize_window(Viewport::new(0, 0)).is_err());
    assert_eq!(gallery.events().window(), Viewport::new(1280, 800));
}

#[test]
fn config_json_round_trips_and_fills_defaults() {
    let config = GalleryConfig::new(Viewport::new(1024, 768))
        .with_seed(77)
        .with_enabled_demos([DemoChart::BumpChart, DemoChart::AreaPieces]);

    let contract = config.to_json_contract_v1_pretty().expect("contract json");
    assert_eq!(
        GalleryConfig::from_json_compat_str(&contract).expect("parse contract"),
        config
    );

    let bare = config.to_json_pretty().expect("bare json");
    assert!(bare.contains("\"bump-chart\""));
    assert_eq!(
        GalleryConfig::from_json_compat_str(&bare).expect("parse bare"),
        config
    );

    let minimal = GalleryConfig::from_json_compat_str(r#"{"seed": 5}"#).expect("minimal");
    assert_eq!(minimal.window, Viewport::new(1280, 800));
    assert_eq!(minimal.enabled_demos, DemoChart::ALL);
    assert_eq!(minimal.bump_chart, BumpChartSettings::default());
}

#[test]
fn invalid_configs_are_rejected() {
    for input in [
        r#"{"window": {"width": 0, "height": 10}}"#,
        r#"{"enabled_demos": ["basic-bar", "basic-bar"]}"#,
        r#"{"bump_chart": {"names": []}}"#,
        r#"{"schema_version": 2, "config": {}}"#,
    ] {
        let parsed = GalleryConfig::from_json_compat_str(input);
        assert!(parsed.is_err(), "{input}");
    }
    assert!(ChartGallery::new(GalleryConfig::new(Viewport::new(0, 0))).is_err());
}
