use std::str::FromStr;

use clap::{
    ArgMatches, Command, arg,
    builder::ValueParser,
    crate_description, crate_version,
    error::{ContextKind, ContextValue, ErrorKind},
};
use qualys_inputs_common::SystemType;
use strum::IntoEnumIterator;

fn parse_system(system: &str) -> Result<SystemType, clap::Error> {
    SystemType::from_str(system).map_err(|_| {
        let systems = SystemType::iter()
            .map(|system| system.to_string().to_lowercase())
            .collect::<Vec<String>>();

        let mut err = clap::Error::new(ErrorKind::ValueValidation);
        err.insert(ContextKind::ValidValue, ContextValue::Strings(systems));
        err
    })
}

pub fn cli() -> Command {
    Command::new("qualys-inputs")
        .about(crate_description!())
        .version(crate_version!())
        .arg(
            arg!(--system <system>)
                .short('s')
                .help("System type selected at startup: linux, dc, ascott or sql")
                .required(false)
                .default_value("linux")
                .value_parser(ValueParser::new(parse_system)),
        )
}

pub fn selected_system(matches: &ArgMatches) -> SystemType {
    matches
        .get_one::<SystemType>("system")
        .copied()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_linux() {
        let matches = cli().try_get_matches_from(["qualys-inputs"]).unwrap();
        assert_eq!(selected_system(&matches), SystemType::Linux);
    }

    #[test]
    fn test_system_is_case_insensitive() {
        let matches = cli()
            .try_get_matches_from(["qualys-inputs", "--system", "SQL"])
            .unwrap();
        assert_eq!(selected_system(&matches), SystemType::Sql);

        let matches = cli()
            .try_get_matches_from(["qualys-inputs", "-s", "ascott"])
            .unwrap();
        assert_eq!(selected_system(&matches), SystemType::Ascott);
    }

    #[test]
    fn test_unknown_system_is_rejected() {
        let err = cli()
            .try_get_matches_from(["qualys-inputs", "--system", "windows"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_cli_is_consistent() {
        cli().debug_assert();
    }
}
