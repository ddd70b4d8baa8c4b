use super::catalog::Catalog;
use serde::Deserialize;
use serde::Serialize;

/// which edition's suggestion mechanics are in play.
///
/// classic: responders are queried in seating order and only the last
/// player in the list showed a card. master: every responder in the
/// list showed some suggested card, in no particular order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Classic,
    Master,
}

impl TryFrom<&str> for Variant {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "classic" => Ok(Variant::Classic),
            "master" => Ok(Variant::Master),
            _ => Err(anyhow::anyhow!("unknown rules variant '{}'", s)),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Variant::Classic => write!(f, "classic"),
            Variant::Master => write!(f, "master"),
        }
    }
}

/// the static configuration the engine is constructed with.
/// immutable for the engine's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    pub variant: Variant,
    pub catalog: Catalog,
}

impl Rules {
    pub fn classic() -> Self {
        Self {
            variant: Variant::Classic,
            catalog: Catalog::standard(),
        }
    }
    pub fn master() -> Self {
        Self {
            variant: Variant::Master,
            catalog: Catalog::standard(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_from_str() {
        assert!(Variant::try_from("classic").unwrap() == Variant::Classic);
        assert!(Variant::try_from("master").unwrap() == Variant::Master);
        assert!(Variant::try_from("grandmaster").is_err());
    }

    #[test]
    fn variant_display() {
        assert!(Variant::Classic.to_string() == "classic");
        assert!(Variant::Master.to_string() == "master");
    }
}
