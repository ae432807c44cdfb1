use crate::modules::pricing::models::{CustomerTier, TierTerms};
use crate::modules::pricing::PricingError;

/// A tier together with the terms it resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTier<'a> {
    pub tier: CustomerTier,
    pub terms: &'a TierTerms,
}

/// Discount multiplier and price ceiling for every customer tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierCatalog {
    standard: TierTerms,
    premium: TierTerms,
    platinum: TierTerms,
}

impl TierCatalog {
    pub fn new(standard: TierTerms, premium: TierTerms, platinum: TierTerms) -> Self {
        Self {
            standard,
            premium,
            platinum,
        }
    }

    /// Replace the terms of a single tier
    pub fn with_terms(mut self, tier: CustomerTier, terms: TierTerms) -> Self {
        *self.terms_mut(tier) = terms;
        self
    }

    pub fn terms(&self, tier: CustomerTier) -> &TierTerms {
        match tier {
            CustomerTier::Standard => &self.standard,
            CustomerTier::Premium => &self.premium,
            CustomerTier::Platinum => &self.platinum,
        }
    }

    fn terms_mut(&mut self, tier: CustomerTier) -> &mut TierTerms {
        match tier {
            CustomerTier::Standard => &mut self.standard,
            CustomerTier::Premium => &mut self.premium,
            CustomerTier::Platinum => &mut self.platinum,
        }
    }

    /// Look a tier up by its wire identifier.
    ///
    /// There is no fallback tier: anything outside the known set is
    /// `PricingError::UnknownTier`.
    pub fn resolve(&self, identifier: &str) -> Result<ResolvedTier<'_>, PricingError> {
        let tier = identifier.parse::<CustomerTier>()?;
        Ok(ResolvedTier {
            tier,
            terms: self.terms(tier),
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        CustomerTier::ALL
            .into_iter()
            .try_for_each(|tier| self.terms(tier).validate())
    }
}

impl Default for TierCatalog {
    fn default() -> Self {
        Self::new(
            CustomerTier::Standard.default_terms(),
            CustomerTier::Premium.default_terms(),
            CustomerTier::Platinum.default_terms(),
        )
    }
}
