use crate::modules::pricing::models::{ProductTerms, ProductType};
use crate::modules::pricing::PricingError;

/// Unit prices and seasonal multipliers for every product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCatalog {
    tshirt: ProductTerms,
    dress: ProductTerms,
    jacket: ProductTerms,
}

impl ProductCatalog {
    pub fn new(tshirt: ProductTerms, dress: ProductTerms, jacket: ProductTerms) -> Self {
        Self {
            tshirt,
            dress,
            jacket,
        }
    }

    pub fn terms(&self, product: ProductType) -> &ProductTerms {
        match product {
            ProductType::TShirt => &self.tshirt,
            ProductType::Dress => &self.dress,
            ProductType::Jacket => &self.jacket,
        }
    }

    /// Look a product up by its wire identifier
    pub fn lookup(&self, identifier: &str) -> Result<&ProductTerms, PricingError> {
        let product = identifier.parse::<ProductType>()?;
        Ok(self.terms(product))
    }

    pub fn validate(&self) -> Result<(), String> {
        ProductType::ALL.into_iter().try_for_each(|product| {
            self.terms(product)
                .validate()
                .map_err(|e| format!("{}: {}", product, e))
        })
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::new(
            ProductType::TShirt.default_terms(),
            ProductType::Dress.default_terms(),
            ProductType::Jacket.default_terms(),
        )
    }
}
