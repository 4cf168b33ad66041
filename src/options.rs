//! Game configuration options.

/// Configuration options for a cribbage match.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cribrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_target_score(61)
///     .with_his_heels(true)
///     .with_extended_pegging(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Score that wins the match.
    ///
    /// Defaults to the traditional 121. Shorter matches are played to 61,
    /// and house games often to 100.
    pub target_score: u16,
    /// Whether the dealer scores 2 when the cut is a Jack.
    pub his_heels: bool,
    /// Whether pegging scores pair royals and runs.
    pub extended_pegging: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            target_score: 121,
            his_heels: false,
            extended_pegging: false,
        }
    }
}

impl GameOptions {
    /// Sets the score that wins the match.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// assert_eq!(GameOptions::default().target_score, 121);
    ///
    /// let options = GameOptions::default().with_target_score(100);
    /// assert_eq!(options.target_score, 100);
    /// ```
    #[must_use]
    pub const fn with_target_score(mut self, target: u16) -> Self {
        self.target_score = target;
        self
    }

    /// Sets whether the dealer scores 2 when the cut is a Jack.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_his_heels(true);
    /// assert!(options.his_heels);
    /// ```
    #[must_use]
    pub const fn with_his_heels(mut self, enabled: bool) -> Self {
        self.his_heels = enabled;
        self
    }

    /// Sets whether pegging scores pair royals (6), double pair royals (12)
    /// and runs.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_extended_pegging(true);
    /// assert!(options.extended_pegging);
    /// ```
    #[must_use]
    pub const fn with_extended_pegging(mut self, enabled: bool) -> Self {
        self.extended_pegging = enabled;
        self
    }
}
