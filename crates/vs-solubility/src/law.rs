//! Per-species solubility law selectors.
//!
//! Each enum parses from the published law name used in run files
//! (`"burguisser2015"`, `"eguchi2018"`, ...). `"None"` selects `Insoluble`
//! where a species may be left out of the melt.

use crate::error::SolubilityError;
use serde::{Deserialize, Serialize};

macro_rules! law_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Published name of the law.
            pub fn key(&self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.key())
            }
        }

        impl std::str::FromStr for $name {
            type Err = SolubilityError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($key => Ok($name::$variant),)+
                    other => Err(SolubilityError::Configuration {
                        what: format!("unknown {} law '{}'", $label, other),
                    }),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = SolubilityError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<$name> for &'static str {
            fn from(law: $name) -> Self {
                law.key()
            }
        }
    };
}

law_enum! {
    /// H2 solubility law.
    H2Law, "H2" {
        Burguisser2015 => "burguisser2015",
        /// Gaillard et al. (2003), density-scaled.
        #[default]
        Gaillard2003 => "gaillard2003",
    }
}

law_enum! {
    /// H2O solubility law.
    H2OLaw, "H2O" {
        #[default]
        Burguisser2015 => "burguisser2015",
    }
}

law_enum! {
    /// CO2 solubility law.
    CO2Law, "CO2" {
        #[default]
        Burguisser2015 => "burguisser2015",
        /// Eguchi & Dasgupta (2018) speciation with graphite saturation.
        Eguchi2018 => "eguchi2018",
    }
}

law_enum! {
    /// CO solubility law.
    COLaw, "CO" {
        #[default]
        Armstrong2015 => "armstrong2015",
        /// CO does not dissolve.
        Insoluble => "None",
    }
}

law_enum! {
    /// CH4 solubility law.
    CH4Law, "CH4" {
        #[default]
        Ardia2013 => "ardia2013",
        /// CH4 does not dissolve.
        Insoluble => "None",
    }
}

law_enum! {
    /// N2 solubility law.
    N2Law, "N2" {
        #[default]
        Libourel2003 => "libourel2003",
    }
}

law_enum! {
    /// Sulfide capacity law.
    SulfideCapacityLaw, "sulfide capacity" {
        ONeill2002 => "oneill2002",
        #[default]
        ONeill2020 => "oneill2020",
    }
}

law_enum! {
    /// Sulfate/sulfide speciation law.
    SulfateLaw, "sulfate" {
        #[default]
        Nash2019 => "nash2019",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_names_roundtrip() {
        for law in CO2Law::ALL {
            assert_eq!(law.key().parse::<CO2Law>().unwrap(), *law);
        }
        for law in SulfideCapacityLaw::ALL {
            assert_eq!(law.to_string().parse::<SulfideCapacityLaw>().unwrap(), *law);
        }
    }

    #[test]
    fn none_selects_insoluble() {
        assert_eq!("None".parse::<COLaw>().unwrap(), COLaw::Insoluble);
        assert_eq!("None".parse::<CH4Law>().unwrap(), CH4Law::Insoluble);
        // Only CO and CH4 may be switched off
        assert!("None".parse::<CO2Law>().is_err());
    }

    #[test]
    fn unknown_name_is_configuration_error() {
        let err = "righter2009".parse::<CO2Law>().unwrap_err();
        assert!(matches!(err, SolubilityError::Configuration { .. }));
        assert!(err.to_string().contains("righter2009"));
        assert!(err.to_string().contains("CO2"));
    }

    #[test]
    fn serde_uses_published_names() {
        let law: H2Law = serde_json::from_str("\"burguisser2015\"").unwrap();
        assert_eq!(law, H2Law::Burguisser2015);
        assert_eq!(serde_json::to_string(&CH4Law::Insoluble).unwrap(), "\"None\"");
        assert!(serde_json::from_str::<N2Law>("\"bernadou2021\"").is_err());
    }

    #[test]
    fn defaults_follow_run_file_defaults() {
        assert_eq!(H2Law::default(), H2Law::Gaillard2003);
        assert_eq!(CO2Law::default(), CO2Law::Burguisser2015);
        assert_eq!(SulfideCapacityLaw::default(), SulfideCapacityLaw::ONeill2020);
    }
}
