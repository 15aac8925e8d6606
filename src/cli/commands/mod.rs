use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("sesamo")
        .about("Mock login service issuing opaque bearer tokens")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("12000")
                .env("SESAMO_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("web-root")
                .short('w')
                .long("web-root")
                .help("Directory with the static frontend assets")
                .default_value("web")
                .env("SESAMO_WEB_ROOT"),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("SESAMO_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "sesamo");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Mock login service issuing opaque bearer tokens".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_defaults() {
        temp_env::with_vars(
            [
                ("SESAMO_PORT", None::<&str>),
                ("SESAMO_WEB_ROOT", None::<&str>),
            ],
            || {
                let command = new();
                let matches = command.get_matches_from(vec!["sesamo"]);

                assert_eq!(matches.get_one::<u16>("port").copied(), Some(12000));
                assert_eq!(
                    matches.get_one::<String>("web-root").map(String::as_str),
                    Some("web")
                );
            },
        );
    }

    #[test]
    fn test_port_from_args() {
        let command = new();
        let matches = command.get_matches_from(vec!["sesamo", "--port", "8080"]);
        assert_eq!(matches.get_one::<u16>("port").copied(), Some(8080));
    }

    #[test]
    fn test_port_from_env() {
        temp_env::with_var("SESAMO_PORT", Some("9999"), || {
            let command = new();
            let matches = command.get_matches_from(vec!["sesamo"]);
            assert_eq!(matches.get_one::<u16>("port").copied(), Some(9999));
        });
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let command = new();
        let result = command.try_get_matches_from(vec!["sesamo", "--port", "not-a-port"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_level_names() {
        temp_env::with_var("SESAMO_LOG_LEVEL", Some("debug"), || {
            let command = new();
            let matches = command.get_matches_from(vec!["sesamo"]);
            assert_eq!(matches.get_one::<u8>("verbosity").copied(), Some(3));
        });
    }

    #[test]
    fn test_invalid_log_level() {
        temp_env::with_var("SESAMO_LOG_LEVEL", Some("noisy"), || {
            let command = new();
            let result = command.try_get_matches_from(vec!["sesamo"]);
            assert!(result.is_err());
        });
    }
}
