//! Black-box scenarios against the public engine surface.

use proptest::prelude::*;
use sellerkit_fees::units::{cm_to_inches, inches_to_cm, kg_to_lb, lb_to_kg};
use sellerkit_fees::{
    Category, CommercialContext, PhysicalSpec, PlacementMode, SizeTier, StorageSeason,
    aged_inventory_surcharge, calculate_all_fees, calculate_shipping_fee, classify_tier,
    disposal_fee, removal_fee, to_imperial_length, to_imperial_mass,
};

#[test]
fn apparel_tee_ships_from_the_large_standard_apparel_table() {
    let spec = PhysicalSpec::new(35.0, 25.0, 2.0, 0.25).unwrap();
    assert_eq!(classify_tier(&spec), SizeTier::LargeStandard);
    assert!((spec.billable_weight_lb() - 0.55).abs() < 0.01);
    assert_eq!(calculate_shipping_fee(&spec, Category::Apparel, 29.99), 4.56);
}

#[test]
fn cheap_small_item_uses_the_lowest_low_price_bracket() {
    let spec = PhysicalSpec::new(15.0, 8.0, 1.5, 0.05).unwrap();
    assert_eq!(classify_tier(&spec), SizeTier::SmallStandard);
    assert!((spec.billable_weight_lb() - 0.11).abs() < 0.01);
    assert_eq!(calculate_shipping_fee(&spec, Category::Standard, 8.99), 2.29);
    // Same item at the regular price band.
    assert_eq!(calculate_shipping_fee(&spec, Category::Standard, 10.00), 3.06);
}

#[test]
fn unit_helpers_convert_to_imperial() {
    assert!((to_imperial_length(2.54) - 1.0).abs() < 1e-12);
    assert!((to_imperial_mass(0.453_592_37) - 1.0).abs() < 1e-12);
}

#[test]
fn apparel_aged_surcharge_is_waived_until_day_271() {
    let spec = PhysicalSpec::new(30.0, 20.0, 10.0, 0.8).unwrap();
    let tier = classify_tier(&spec);
    for age in 181..=270 {
        assert_eq!(aged_inventory_surcharge(tier, &spec, age, Category::Apparel), 0.0);
        assert!(aged_inventory_surcharge(tier, &spec, age, Category::Standard) > 0.0);
    }
    for age in 271..=800 {
        assert!(aged_inventory_surcharge(tier, &spec, age, Category::Apparel) > 0.0);
    }
}

#[test]
fn bulky_patio_chair_full_breakdown() {
    // 30 × 24 × 20 in, 25 lb: too heavy for large standard, within bulky limits.
    let spec = PhysicalSpec::from_imperial(30.0, 24.0, 20.0, 25.0).unwrap();
    let ctx = CommercialContext::default()
        .with_price(129.0)
        .with_placement(PlacementMode::Minimal)
        .with_season(StorageSeason::Peak)
        .with_inventory_age_days(200);

    let b = calculate_all_fees(&spec, &ctx);
    assert_eq!(b.size_tier, SizeTier::LargeBulky);
    // 14400 in³ / 194 ≈ 74.2 lb dimensional weight
    assert!((b.billable_weight_lb - 14_400.0 / 194.0).abs() < 1e-6);
    // 9.61 + 74 × 0.38, no premium surcharge for oversize
    assert_eq!(b.shipping, 37.73);
    assert_eq!(b.inbound_placement, 4.28);
    // 8.333 ft³ × 1.40
    assert_eq!(b.monthly_storage, 11.67);
    // 8.333 ft³ × 0.50
    assert_eq!(b.aged_inventory_surcharge, 4.17);
    assert_eq!(b.total_monthly_recurring, 15.84);
    assert_eq!(b.returns_processing, 0.0);
    assert_eq!(b.removal, b.disposal);
}

#[test]
fn engine_can_be_shared_across_threads() {
    let spec = PhysicalSpec::new(35.0, 25.0, 2.0, 0.25).unwrap();
    let ctx = CommercialContext::default().with_category(Category::Apparel).with_price(29.99);
    let expected = calculate_all_fees(&spec, &ctx);

    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(move || calculate_all_fees(&spec, &ctx)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        ..ProptestConfig::default()
    })]

    /// Property: converting a unit to imperial and back keeps its tier,
    /// billable weight and shipping fee.
    #[test]
    fn imperial_round_trip_is_stable(
        l in 1.0f64..150.0,
        w in 1.0f64..80.0,
        h in 0.5f64..80.0,
        kg in 0.01f64..40.0,
        apparel in any::<bool>(),
        price in 1.0f64..100.0,
    ) {
        let category = if apparel { Category::Apparel } else { Category::Standard };
        let original = PhysicalSpec::new(l, w, h, kg).unwrap();
        let round_trip = PhysicalSpec::new(
            inches_to_cm(cm_to_inches(l)),
            inches_to_cm(cm_to_inches(w)),
            inches_to_cm(cm_to_inches(h)),
            lb_to_kg(kg_to_lb(kg)),
        )
        .unwrap();

        prop_assert_eq!(classify_tier(&original), classify_tier(&round_trip));
        prop_assert!((original.billable_weight_lb() - round_trip.billable_weight_lb()).abs() < 1e-9);
        prop_assert!(
            (calculate_shipping_fee(&original, category, price)
                - calculate_shipping_fee(&round_trip, category, price))
            .abs()
                < 0.005
        );
    }

    /// Property: disposal and removal always agree.
    #[test]
    fn removal_equals_disposal_for_every_weight(weight in 0.0f64..500.0) {
        for tier in [SizeTier::SmallStandard, SizeTier::LargeStandard, SizeTier::LargeBulky, SizeTier::ExtraLarge] {
            prop_assert_eq!(disposal_fee(tier, weight), removal_fee(tier, weight));
        }
    }
}
