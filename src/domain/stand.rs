//! Food stand catalog entities.

/// An item category still available at a stand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandOffer {
    icon: &'static str,
    available: u32,
}

impl StandOffer {
    /// Creates an offer with a pictogram and remaining count.
    #[must_use]
    pub const fn new(icon: &'static str, available: u32) -> Self {
        Self { icon, available }
    }

    /// Returns the pictogram shown in the overview.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        self.icon
    }

    /// Returns how many portions are left.
    #[must_use]
    pub const fn available(&self) -> u32 {
        self.available
    }
}

/// A food stand listed in the overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodStand {
    name: String,
    emblem: &'static str,
    wait_time: String,
    offers: Vec<StandOffer>,
}

impl FoodStand {
    /// Creates a stand entry.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        emblem: &'static str,
        wait_time: impl Into<String>,
        offers: Vec<StandOffer>,
    ) -> Self {
        Self {
            name: name.into(),
            emblem,
            wait_time: wait_time.into(),
            offers,
        }
    }

    /// Returns the stand name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the stand emblem.
    #[must_use]
    pub const fn emblem(&self) -> &'static str {
        self.emblem
    }

    /// Returns the displayed wait time, e.g. "30 Min".
    #[must_use]
    pub fn wait_time(&self) -> &str {
        &self.wait_time
    }

    /// Returns what is still available.
    #[must_use]
    pub fn offers(&self) -> &[StandOffer] {
        &self.offers
    }
}
