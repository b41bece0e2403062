use std::str::FromStr;

use serde::Serialize;
use strum::{Display, EnumIter};
use thiserror::Error;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
pub enum SystemType {
    #[default]
    #[strum(to_string = "Linux")]
    #[serde(rename = "Linux")]
    Linux,
    #[strum(to_string = "DC")]
    #[serde(rename = "DC")]
    Dc,
    #[strum(to_string = "ascott")]
    #[serde(rename = "ascott")]
    Ascott,
    #[strum(to_string = "SQL")]
    #[serde(rename = "SQL")]
    Sql,
}

/// System types whose entries are bare IP addresses.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum IpSystem {
    #[strum(to_string = "DC")]
    Dc,
    #[strum(to_string = "ascott")]
    Ascott,
    #[strum(to_string = "SQL")]
    Sql,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Branch {
    Linux,
    Ip(IpSystem),
}

impl SystemType {
    pub fn branch(self) -> Branch {
        match self {
            SystemType::Linux => Branch::Linux,
            SystemType::Dc => Branch::Ip(IpSystem::Dc),
            SystemType::Ascott => Branch::Ip(IpSystem::Ascott),
            SystemType::Sql => Branch::Ip(IpSystem::Sql),
        }
    }
}

impl From<IpSystem> for SystemType {
    fn from(system: IpSystem) -> Self {
        match system {
            IpSystem::Dc => SystemType::Dc,
            IpSystem::Ascott => SystemType::Ascott,
            IpSystem::Sql => SystemType::Sql,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown system type: {0}")]
pub struct ParseSystemTypeError(String);

impl FromStr for SystemType {
    type Err = ParseSystemTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linux" => Ok(Self::Linux),
            "dc" => Ok(Self::Dc),
            "ascott" => Ok(Self::Ascott),
            "sql" => Ok(Self::Sql),
            _ => Err(ParseSystemTypeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_display_order() {
        let names: Vec<String> = SystemType::iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["Linux", "DC", "ascott", "SQL"]);
    }

    #[test]
    fn test_default_is_linux() {
        assert_eq!(SystemType::default(), SystemType::Linux);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("SQL".parse::<SystemType>(), Ok(SystemType::Sql));
        assert_eq!("ascott".parse::<SystemType>(), Ok(SystemType::Ascott));
        assert_eq!("Dc".parse::<SystemType>(), Ok(SystemType::Dc));
        assert!("windows".parse::<SystemType>().is_err());
    }

    #[test]
    fn test_branch_round_trip() {
        for system in IpSystem::iter() {
            assert_eq!(SystemType::from(system).branch(), Branch::Ip(system));
        }
        assert_eq!(SystemType::Linux.branch(), Branch::Linux);
    }
}
