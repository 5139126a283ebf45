#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, path::PathBuf, process};

use iced::{Settings, Size};
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;

use cepex_ui::{component::text, font, theme};

use cepex_gui::{
    app::App,
    config::Config,
    dir::CepexDirectory,
    logger::{parse_log_level, setup_logger},
    sink, VERSION,
};

#[derive(Debug, PartialEq)]
enum Arg {
    DatadirPath(CepexDirectory),
    ConfigPath(PathBuf),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(1);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: cepex-gui [OPTIONS]

Options:
    --datadir <PATH>    Path of the cepex data directory
    --config <PATH>     Path of the configuration file (default: <datadir>/cepex.toml)
    -v, --version       Display cepex-gui version
    -h, --help          Print help
        "#
        );
        process::exit(1);
    }

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--datadir" => {
                let path = iter.next().ok_or("missing arg to --datadir")?;
                res.push(Arg::DatadirPath(CepexDirectory::new(PathBuf::from(path))));
            }
            "--config" => {
                let path = iter.next().ok_or("missing arg to --config")?;
                res.push(Arg::ConfigPath(PathBuf::from(path)));
            }
            other => return Err(format!("Unknown argument '{}'", other).into()),
        }
    }

    Ok(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;

    let mut datadir = None;
    let mut config_path = None;
    for arg in args {
        match arg {
            Arg::DatadirPath(d) => datadir = Some(d),
            Arg::ConfigPath(p) => config_path = Some(p),
        }
    }
    let datadir = match datadir {
        Some(d) => d,
        None => CepexDirectory::new_default()?,
    };
    datadir.init()?;

    let config_path = config_path.unwrap_or_else(|| Config::default_path(&datadir));
    let config = Config::from_file(&config_path)?;

    let log_level = parse_log_level()?
        .or(config.log_level)
        .unwrap_or(LevelFilter::INFO);
    setup_logger(log_level, &datadir)?;
    setup_panic_hook();

    info!(
        "cepex-gui {} using data directory {}",
        VERSION,
        datadir.path().display()
    );
    let registration_sink = sink::from_config(&config.sink, &datadir);

    let settings = Settings {
        id: Some("Cepex".to_string()),
        antialiasing: false,
        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        ..Default::default()
    };

    let window_settings = iced::window::Settings {
        size: Size::new(900.0, 900.0),
        min_size: Some(Size {
            width: 640.0,
            height: 720.0,
        }),
        ..Default::default()
    };

    if let Err(e) = iced::application(App::title, App::update, App::view)
        .theme(|_| theme::Theme::default())
        .settings(settings)
        .window(window_settings)
        .run_with(move || App::new(registration_sink))
    {
        log::error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        std::io::stdout().flush().expect("Flushing stdout");
        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        assert!(parse_args(vec!["cepex-gui".into(), "--meth".into()]).is_err());
        assert!(parse_args(vec!["cepex-gui".into(), "--datadir".into()]).is_err());
        assert!(parse_args(vec!["cepex-gui".into(), "--config".into()]).is_err());
        assert_eq!(
            Some(vec![]),
            parse_args(vec!["cepex-gui".into()]).ok()
        );
        assert_eq!(
            Some(vec![Arg::DatadirPath(CepexDirectory::new(PathBuf::from(
                "hello"
            )))]),
            parse_args(vec!["cepex-gui".into(), "--datadir".into(), "hello".into()]).ok()
        );
        assert_eq!(
            Some(vec![
                Arg::ConfigPath(PathBuf::from("cepex.toml")),
                Arg::DatadirPath(CepexDirectory::new(PathBuf::from("hello"))),
            ]),
            parse_args(vec![
                "cepex-gui".into(),
                "--config".into(),
                "cepex.toml".into(),
                "--datadir".into(),
                "hello".into(),
            ])
            .ok()
        );
    }
}
