use std::fmt;
use std::str::FromStr;

/// Device family identifier used by the openVuln `OSType` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsType {
    Asa,
    Fxos,
    Ftd,
    Ios,
    Iosxe,
    Nxos,
    Aci,
    Fmc,
}

impl OsType {
    /// Priority order in which device families are queried for a version.
    ///
    /// The first family whose response contains a High or Critical
    /// advisory wins; later families are never queried.
    pub const DEFAULT_ORDER: [OsType; 8] = [
        OsType::Asa,
        OsType::Fxos,
        OsType::Ftd,
        OsType::Ios,
        OsType::Iosxe,
        OsType::Nxos,
        OsType::Aci,
        OsType::Fmc,
    ];

    /// Path segment used in the advisory endpoint URL
    pub fn as_str(&self) -> &'static str {
        match self {
            OsType::Asa => "asa",
            OsType::Fxos => "fxos",
            OsType::Ftd => "ftd",
            OsType::Ios => "ios",
            OsType::Iosxe => "iosxe",
            OsType::Nxos => "nxos",
            OsType::Aci => "aci",
            OsType::Fmc => "fmc",
        }
    }

    /// Parses a comma-separated list such as `"ios,iosxe"`.
    ///
    /// Duplicates are dropped while keeping first-seen order.
    pub fn parse_list(list: &str) -> Result<Vec<OsType>, String> {
        let mut os_types = Vec::new();
        for part in list.split(',').filter(|p| !p.trim().is_empty()) {
            let os_type = part.parse::<OsType>()?;
            if !os_types.contains(&os_type) {
                os_types.push(os_type);
            }
        }
        if os_types.is_empty() {
            return Err("OS type list must not be empty".to_string());
        }
        Ok(os_types)
    }
}

impl fmt::Display for OsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OsType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asa" => Ok(OsType::Asa),
            "fxos" => Ok(OsType::Fxos),
            "ftd" => Ok(OsType::Ftd),
            "ios" => Ok(OsType::Ios),
            "iosxe" => Ok(OsType::Iosxe),
            "nxos" => Ok(OsType::Nxos),
            "aci" => Ok(OsType::Aci),
            "fmc" => Ok(OsType::Fmc),
            _ => Err(format!(
                "Invalid OS type: {}. Expected one of: asa, fxos, ftd, ios, iosxe, nxos, aci, fmc",
                s
            )),
        }
    }
}
