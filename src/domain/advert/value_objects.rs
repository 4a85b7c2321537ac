use crate::domain::errors::DomainError;
use std::{fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AdvertId(Uuid);

impl AdvertId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for AdvertId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<AdvertId> for Uuid {
    fn from(value: AdvertId) -> Self {
        value.0
    }
}

impl FromStr for AdvertId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| DomainError::Validation(format!("invalid advert id '{s}'")))
    }
}

impl fmt::Display for AdvertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdvertType {
    Transport,
    Lawyer,
    PlaceToStay,
    Job,
}

impl AdvertType {
    pub const ALL: [Self; 4] = [Self::Transport, Self::Lawyer, Self::PlaceToStay, Self::Job];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Lawyer => "lawyer",
            Self::PlaceToStay => "place_to_stay",
            Self::Job => "job",
        }
    }
}

impl FromStr for AdvertType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("unknown advert type '{s}'")))
    }
}

impl fmt::Display for AdvertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advert_type_round_trips_through_its_name() {
        for kind in AdvertType::ALL {
            assert_eq!(kind.as_str().parse::<AdvertType>().unwrap(), kind);
        }
        assert_eq!(AdvertType::PlaceToStay.to_string(), "place_to_stay");
    }

    #[test]
    fn unknown_advert_type_is_a_validation_error() {
        assert!(matches!(
            "spaceship".parse::<AdvertType>(),
            Err(DomainError::Validation(_))
        ));
    }
}
