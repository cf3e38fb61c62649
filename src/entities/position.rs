use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fantasy football roster category a player is drafted into.
///
/// Persisted as its code string (`"QB"`, `"DEF"`, ...). Variant order is the
/// canonical display order used when listing positions.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(3))")]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    /// Quarterback
    #[sea_orm(string_value = "QB")]
    Qb,
    /// Running back
    #[sea_orm(string_value = "RB")]
    Rb,
    /// Wide receiver
    #[sea_orm(string_value = "WR")]
    Wr,
    /// Tight end
    #[sea_orm(string_value = "TE")]
    Te,
    /// Team defense
    #[sea_orm(string_value = "DEF")]
    Def,
    /// Kicker
    #[sea_orm(string_value = "K")]
    K,
}

impl Position {
    /// Every position in canonical order.
    pub const ALL: [Self; 6] = [Self::Qb, Self::Rb, Self::Wr, Self::Te, Self::Def, Self::K];

    /// Parse a position code. Matching is exact: `"qb"` is not a position.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == code)
    }

    /// Code stored in the database and sent over the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Qb => "QB",
            Self::Rb => "RB",
            Self::Wr => "WR",
            Self::Te => "TE",
            Self::Def => "DEF",
            Self::K => "K",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Position::from_code("QB"), Some(Position::Qb));
        assert_eq!(Position::from_code("DEF"), Some(Position::Def));
        assert_eq!(Position::from_code("K"), Some(Position::K));
        assert_eq!(Position::from_code("qb"), None);
        assert_eq!(Position::from_code("LB"), None);
        assert_eq!(Position::from_code(""), None);
    }

    #[test]
    fn test_codes_match_active_enum_values() {
        for position in Position::ALL {
            assert_eq!(position.to_value(), position.as_str());
            assert_eq!(Position::from_code(&position.to_string()), Some(position));
        }
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Position::Def).unwrap_or_default();
        assert_eq!(json, "\"DEF\"");

        let parsed: Option<Position> = serde_json::from_str("\"WR\"").ok();
        assert_eq!(parsed, Some(Position::Wr));
    }

    #[test]
    fn test_canonical_order() {
        let mut shuffled = vec![Position::K, Position::Te, Position::Qb, Position::Def];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Position::Qb, Position::Te, Position::Def, Position::K]
        );
    }
}
