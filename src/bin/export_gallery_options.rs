use chart_gallery::api::{ChartGallery, GalleryConfig};
use chart_gallery::gallery::DemoChart;
use chart_gallery::telemetry::init_default_tracing;
use std::fs;
use std::path::PathBuf;

const USAGE: &str = "usage: export_gallery_options <demo-id|all> \
    [--seed <u64>] [--config <path>] [--output <path>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    All,
    One(DemoChart),
}

#[derive(Debug)]
struct CliArgs {
    selection: Selection,
    seed: Option<u64>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args(std::env::args().skip(1))?;
    let config = load_config(&args)?;
    let json = render_options(config, args.selection)?;

    match &args.output {
        Some(path) => fs::write(path, format!("{json}\n"))
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

/// Reads `--config` when given; `--seed` takes precedence over its seed.
fn load_config(args: &CliArgs) -> Result<GalleryConfig, String> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            GalleryConfig::from_json_compat_str(&raw)
                .map_err(|err| err.to_string())?
        }
        None => GalleryConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    Ok(config)
}

fn render_options(config: GalleryConfig, selection: Selection) -> Result<String, String> {
    let mut gallery = ChartGallery::new(config).map_err(|err| err.to_string())?;
    match selection {
        Selection::One(demo) => gallery
            .option_for(demo)
            .and_then(|option| option.to_json_pretty())
            .map_err(|err| err.to_string()),
        Selection::All => {
            let options = gallery.options().map_err(|err| err.to_string())?;
            serde_json::to_string_pretty(&options)
                .map_err(|err| format!("failed to serialize options: {err}"))
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliArgs, String> {
    let selection = match args.next().as_deref() {
        Some("all") => Selection::All,
        Some("--help" | "-h") | None => return Err(USAGE.to_owned()),
        Some(id) => Selection::One(
            id.parse::<DemoChart>()
                .map_err(|err| format!("{err}\n{USAGE}"))?,
        ),
    };

    let mut seed = None::<u64>;
    let mut config = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--seed" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --seed".to_owned())?;
                seed = Some(
                    value
                        .parse()
                        .map_err(|err| format!("invalid --seed `{value}`: {err}"))?,
                );
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        selection,
        seed,
        config,
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(items: &[&str]) -> Result<CliArgs, String> {
        parse_args(items.iter().map(|item| (*item).to_owned()))
    }

    #[test]
    fn demo_id_and_flags_are_parsed() {
        let args = parse(&["bump-chart", "--seed", "7", "--output", "bump.json"])
            .expect("valid arguments");

        assert_eq!(args.selection, Selection::One(DemoChart::BumpChart));
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.config, None);
        assert_eq!(args.output, Some(PathBuf::from("bump.json")));
    }

    #[test]
    fn all_selects_every_demo() {
        let args = parse(&["all"]).expect("valid arguments");
        assert_eq!(args.selection, Selection::All);

        let json = render_options(GalleryConfig::default().with_seed(3), args.selection)
            .expect("render all options");
        let options: serde_json::Value = serde_json::from_str(&json).expect("json map");
        let ids: Vec<&str> = options
            .as_object()
            .expect("object")
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(ids.len(), DemoChart::ALL.len());
        assert!(ids.contains(&"bump-chart"));
    }

    #[test]
    fn unknown_demo_id_is_rejected() {
        let err = parse(&["pie-chart"]).expect_err("unknown id");
        assert!(err.contains("unknown demo chart `pie-chart`"), "{err}");
        assert!(err.contains(USAGE));
    }

    #[test]
    fn missing_arguments_report_usage() {
        assert_eq!(parse(&[]).expect_err("no arguments"), USAGE);
        assert_eq!(parse(&["all", "--help"]).expect_err("help"), USAGE);

        let err = parse(&["all", "--verbose"]).expect_err("unknown flag");
        assert!(err.starts_with("unknown argument `--verbose`"), "{err}");
    }

    #[test]
    fn missing_flag_value_is_rejected() {
        for flag in ["--seed", "--config", "--output"] {
            let err = parse(&["basic-bar", flag]).expect_err("missing value");
            assert_eq!(err, format!("missing value for {flag}"));
        }
    }

    #[test]
    fn bad_seed_is_rejected() {
        let err = parse(&["all", "--seed", "abc"]).expect_err("bad seed");
        assert!(err.starts_with("invalid --seed `abc`"), "{err}");
        assert!(parse(&["all", "--seed", "-1"]).is_err());
    }

    #[test]
    fn seed_flag_overrides_config_file_seed() {
        let file_name = format!("export-gallery-options-{}.json", std::process::id());
        let path = std::env::temp_dir().join(file_name);
        let file_config = GalleryConfig::default()
            .with_seed(1)
            .with_enabled_demos([DemoChart::BumpChart]);
        let contract = file_config
            .to_json_contract_v1_pretty()
            .expect("contract json");
        fs::write(&path, contract).expect("write config");

        let args = CliArgs {
            selection: Selection::One(DemoChart::BumpChart),
            seed: Some(9),
            config: Some(path.clone()),
            output: None,
        };
        let config = load_config(&args);
        fs::remove_file(&path).expect("remove config");

        let config = config.expect("load config");
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.enabled_demos, [DemoChart::BumpChart]);

        let without_flag = parse(&["bump-chart"]).expect("valid arguments");
        assert_eq!(load_config(&without_flag).expect("defaults").seed, None);
    }

    #[test]
    fn unreadable_config_is_reported() {
        let args = parse(&["all", "--config", "/nonexistent/gallery.json"])
            .expect("valid arguments");
        let err = load_config(&args).expect_err("missing file");
        assert!(
            err.starts_with("failed to read `/nonexistent/gallery.json`"),
            "{err}"
        );
    }
}
