//! Budget bands - reasonable spend per product category.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PriceRange, ProductType};

/// Preferred leading digits for rounded tier boundaries.
const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Number of tiers offered as budget suggestions.
const TIER_COUNT: i32 = 3;

/// The `[min_budget, max_budget]` range considered reasonable for a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetBand {
    pub product: ProductType,
    pub min_budget: f64,
    pub max_budget: f64,
}

impl BudgetBand {
    const fn new(product: ProductType, min_budget: f64, max_budget: f64) -> Self {
        Self {
            product,
            min_budget,
            max_budget,
        }
    }

    /// The band for a product category.
    pub fn for_product(product: ProductType) -> Self {
        match product {
            ProductType::Headphones => Self::new(product, 500.0, 50_000.0),
            ProductType::Earbuds => Self::new(product, 1_000.0, 30_000.0),
            ProductType::Speakers => Self::new(product, 1_500.0, 100_000.0),
            ProductType::Microphone => Self::new(product, 2_000.0, 50_000.0),
            ProductType::Camera => Self::new(product, 15_000.0, 500_000.0),
            ProductType::Laptop => Self::new(product, 30_000.0, 500_000.0),
            ProductType::Phone => Self::new(product, 10_000.0, 150_000.0),
            ProductType::Tablet => Self::new(product, 10_000.0, 100_000.0),
            ProductType::Watch => Self::new(product, 5_000.0, 50_000.0),
        }
    }

    /// All bands in product order.
    pub fn all() -> Vec<BudgetBand> {
        ProductType::all().iter().map(|p| Self::for_product(*p)).collect()
    }

    pub fn contains(&self, range: &PriceRange) -> bool {
        range.is_within(self.min_budget, self.max_budget)
    }

    /// Splits the band into three tiers with rounded boundaries.
    ///
    /// Boundaries are spaced geometrically, since bands span an order of
    /// magnitude or more, then snapped to 1, 2, 2.5 or 5 times a power of ten.
    pub fn tiers(&self) -> Vec<(f64, f64)> {
        let ratio = self.max_budget / self.min_budget;
        let mut boundaries = vec![self.min_budget];
        for step in 1..TIER_COUNT {
            let raw = self.min_budget * ratio.powf(f64::from(step) / f64::from(TIER_COUNT));
            boundaries.push(nice_round(raw));
        }
        boundaries.push(self.max_budget);
        boundaries.dedup_by(|later, earlier| *later <= *earlier);

        boundaries.windows(2).map(|w| (w[0], w[1])).collect()
    }

    /// Tier labels in the "A to B" form accepted as a budget answer.
    pub fn tier_labels(&self) -> Vec<String> {
        self.tiers()
            .into_iter()
            .map(|(low, high)| format!("{} to {}", format_amount(low), format_amount(high)))
            .collect()
    }
}

/// Snaps a positive amount to the closest 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_round(amount: f64) -> f64 {
    if !(amount.is_finite() && amount > 0.0) {
        return amount;
    }
    let magnitude = 10f64.powi(amount.log10().floor() as i32);
    let scaled = amount / magnitude;
    let step = NICE_STEPS
        .iter()
        .copied()
        .min_by(|a, b| (scaled - a).abs().total_cmp(&(scaled - b).abs()))
        .unwrap_or(1.0);
    step * magnitude
}

/// Whole amounts print without decimals; others with two.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_product_has_an_ordered_band() {
        for band in BudgetBand::all() {
            assert!(band.min_budget > 0.0);
            assert!(band.max_budget > band.min_budget, "{:?}", band.product);
        }
        assert_eq!(BudgetBand::all().len(), 9);
    }

    #[test]
    fn laptop_band() {
        let band = BudgetBand::for_product(ProductType::Laptop);
        assert_eq!((band.min_budget, band.max_budget), (30_000.0, 500_000.0));
    }

    #[test]
    fn contains_checks_both_bounds() {
        let band = BudgetBand::for_product(ProductType::Headphones);
        assert!(band.contains(&PriceRange::new(2800.0, 4000.0).unwrap()));
        assert!(!band.contains(&PriceRange::new(100.0, 4000.0).unwrap()));
        assert!(!band.contains(&PriceRange::new(40_000.0, 60_000.0).unwrap()));
    }

    mod tiers {
        use super::*;

        #[test]
        fn headphone_tiers_are_rounded() {
            let band = BudgetBand::for_product(ProductType::Headphones);
            assert_eq!(
                band.tier_labels(),
                vec!["500 to 2500", "2500 to 10000", "10000 to 50000"]
            );
        }

        #[test]
        fn every_band_yields_three_contiguous_tiers() {
            for band in BudgetBand::all() {
                let tiers = band.tiers();
                assert_eq!(tiers.len(), 3, "{:?}", band.product);
                assert_eq!(tiers[0].0, band.min_budget);
                assert_eq!(tiers[2].1, band.max_budget);
                for pair in tiers.windows(2) {
                    assert_eq!(pair[0].1, pair[1].0);
                }
                for (low, high) in tiers {
                    assert!(low < high);
                }
            }
        }
    }

    mod rounding {
        use super::*;

        #[test]
        fn nice_round_snaps_to_preferred_steps() {
            assert_eq!(nice_round(2321.0), 2500.0);
            assert_eq!(nice_round(10772.0), 10000.0);
            assert_eq!(nice_round(46416.0), 50000.0);
            assert_eq!(nice_round(1.7), 2.0);
        }

        #[test]
        fn nice_round_leaves_non_positive_alone() {
            assert_eq!(nice_round(0.0), 0.0);
            assert_eq!(nice_round(-5.0), -5.0);
        }

        #[test]
        fn format_amount_drops_zero_decimals() {
            assert_eq!(format_amount(2500.0), "2500");
            assert_eq!(format_amount(349.5), "349.50");
        }
    }
}
