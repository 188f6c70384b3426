use crate::table::{Player, MAX_SEATS};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("number of players must be between 1 and 6, got {0}")]
    PlayerCount(usize),
    #[error("{0} must be greater than zero")]
    ZeroAmount(&'static str),
}

/// Table setup for a simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub num_players: usize,
    pub starting_money: u64,
    pub ante: u64,
    pub blind: u64,
    /// Play bet before the street multiplier (4x / 2x / 1x).
    pub base_bet: u64,
    /// Shuffle seed; drawn at random when `None`.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            num_players: MAX_SEATS,
            starting_money: Player::DEFAULT_MONEY,
            ante: 1,
            blind: 1,
            base_bet: 1,
            seed: None,
        }
    }
}

impl TableConfig {
    pub fn with_players(mut self, num_players: usize) -> Self {
        self.num_players = num_players;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_SEATS).contains(&self.num_players) {
            return Err(ConfigError::PlayerCount(self.num_players));
        }
        for (name, amount) in [("ante", self.ante), ("blind", self.blind), ("base bet", self.base_bet)]
        {
            if amount == 0 {
                return Err(ConfigError::ZeroAmount(name));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid_six_seat_table() {
        let cfg = TableConfig::default();
        assert_eq!(cfg.num_players, 6);
        assert_eq!(cfg.starting_money, 1_000_000);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_bad_player_counts() {
        assert_eq!(
            TableConfig::default().with_players(0).validate(),
            Err(ConfigError::PlayerCount(0))
        );
        assert_eq!(
            TableConfig::default().with_players(7).validate(),
            Err(ConfigError::PlayerCount(7))
        );
        assert!(TableConfig::default().with_players(1).validate().is_ok());
    }

    #[test]
    fn rejects_zero_stakes() {
        let cfg = TableConfig { blind: 0, ..TableConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroAmount("blind")));
    }
}
