//! Synthetic SuperStore-shaped records for demo mode and tests.
//!
//! The generator is deterministic for a given `(count, seed)` pair so demo
//! sessions and test assertions are reproducible.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::{LogNormal, Normal};

use crate::dates::UNIX_EPOCH_SERIAL;
use crate::domain::SalesRecord;
use crate::error::AppError;

const CATEGORIES: [&str; 3] = ["Technology", "Furniture", "Office Supplies"];
const SEGMENTS: [&str; 3] = ["Consumer", "Corporate", "Home Office"];
const REGIONS: [&str; 4] = ["East", "West", "Central", "South"];
const SHIP_MODES: [&str; 4] = ["Standard Class", "Second Class", "First Class", "Same Day"];

/// Discount steps mirroring the real dataset's promo ladder.
const DISCOUNT_STEPS: [f64; 6] = [0.0, 0.1, 0.2, 0.3, 0.5, 0.8];

/// Order dates span 2015-01-01 .. 2018-12-31 in serial form.
const SERIAL_START: f64 = UNIX_EPOCH_SERIAL + 16436.0;
const SERIAL_SPAN: f64 = 4.0 * 365.25;

/// Generate `count` plausible sales records.
pub fn generate_records(count: usize, seed: u64) -> Result<Vec<SalesRecord>, AppError> {
    let mut rng = StdRng::seed_from_u64(seed);

    // Order values cluster low with a long tail, like real basket sizes.
    let sales_dist = LogNormal::<f64>::new(4.0, 1.1)
        .map_err(|e| AppError::runtime(format!("Sales distribution error: {e}")))?;
    let margin_noise = Normal::<f64>::new(0.0, 0.12)
        .map_err(|e| AppError::runtime(format!("Margin distribution error: {e}")))?;

    let mut records = Vec::with_capacity(count);
    for _ in 0..count {
        let sales = sales_dist.sample(&mut rng).min(20_000.0);
        let discount = *DISCOUNT_STEPS.choose(&mut rng).unwrap_or(&0.0);

        // Margin erodes roughly linearly with discount; deep discounts go
        // negative, which the discount-band chart is designed to show.
        let margin = 0.25 - 0.6 * discount + margin_noise.sample(&mut rng);
        let profit = sales * margin;

        records.push(SalesRecord {
            order_date: SERIAL_START + rng.gen_range(0.0..SERIAL_SPAN),
            category: pick(&mut rng, &CATEGORIES),
            segment: pick(&mut rng, &SEGMENTS),
            region: pick(&mut rng, &REGIONS),
            ship_mode: pick(&mut rng, &SHIP_MODES),
            sales,
            profit,
            discount,
        });
    }

    Ok(records)
}

fn pick(rng: &mut StdRng, options: &[&str]) -> String {
    options.choose(rng).unwrap_or(&options[0]).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::serial_year;

    #[test]
    fn generation_is_deterministic_per_seed() {
        let a = generate_records(25, 42).unwrap();
        let b = generate_records(25, 42).unwrap();
        assert_eq!(a, b);

        let c = generate_records(25, 43).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn records_stay_within_domain_bounds() {
        for record in generate_records(200, 1).unwrap() {
            assert!(record.sales >= 0.0);
            assert!((0.0..=1.0).contains(&record.discount));
            let year = serial_year(record.order_date);
            assert!((2015..=2018).contains(&year), "unexpected year {year}");
            assert!(CATEGORIES.contains(&record.category.as_str()));
            assert!(REGIONS.contains(&record.region.as_str()));
        }
    }
}
