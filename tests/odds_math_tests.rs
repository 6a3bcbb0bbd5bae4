//! Odds conversion and Kelly sizing laws.

use rust_decimal_macros::dec;
use sharpline::domain::{
    american_to_probability, kelly_fraction, kelly_stake, probability_to_american, AmericanOdds,
    DomainError, Probability,
};
use sharpline::testkit::domain::{odds, prob};

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn american_round_trips_through_probability() {
    for price in [-1000.0, -400.0, -250.0, -150.0, -110.0, 105.0, 110.0, 150.0, 250.0, 400.0, 1000.0]
    {
        let implied = american_to_probability(Some(odds(price)))
            .unwrap()
            .expect("price present");
        let back = probability_to_american(implied).unwrap();
        assert_close(back.value(), price, 1e-6);
    }
}

#[test]
fn even_money_maps_to_plus_one_hundred() {
    // -100 and +100 both imply 0.5; the reverse direction picks the plus form.
    let fair = probability_to_american(prob(0.5)).unwrap();
    assert_eq!(fair.value(), 100.0);
    let implied = american_to_probability(Some(odds(-100.0))).unwrap().unwrap();
    assert_close(implied.value(), 0.5, 1e-12);
}

#[test]
fn implied_probability_matches_known_prices() {
    assert_close(odds(150.0).implied_probability().unwrap().value(), 0.4, 1e-12);
    assert_close(odds(-150.0).implied_probability().unwrap().value(), 0.6, 1e-12);
    assert_close(odds(120.0).implied_probability().unwrap().value(), 100.0 / 220.0, 1e-12);
}

#[test]
fn fair_prices_for_favourite_and_underdog() {
    assert_close(probability_to_american(prob(0.6)).unwrap().value(), -150.0, 1e-9);
    assert_close(probability_to_american(prob(0.4)).unwrap().value(), 150.0, 1e-9);
}

#[test]
fn decimal_odds_include_the_stake() {
    assert_close(odds(120.0).to_decimal(), 2.2, 1e-12);
    assert_close(odds(-200.0).to_decimal(), 1.5, 1e-12);
}

#[test]
fn missing_price_is_not_zero_probability() {
    assert_eq!(american_to_probability(None).unwrap(), None);
    assert_eq!(kelly_fraction(prob(0.9), None), 0.0);
}

#[test]
fn invalid_inputs_are_errors_not_clamped() {
    assert_eq!(
        AmericanOdds::try_new(50.0),
        Err(DomainError::InvalidAmericanOdds { value: 50.0 })
    );
    assert!(AmericanOdds::try_new(-99.99).is_err());
    assert!(AmericanOdds::try_new(f64::INFINITY).is_err());
    assert!(AmericanOdds::try_new(-1e19).is_err());
    assert_eq!(
        Probability::try_new(1.0),
        Err(DomainError::ProbabilityOutOfRange { value: 1.0 })
    );
    assert!(Probability::try_new(0.0).is_err());
}

#[test]
fn kelly_is_monotone_in_probability_and_bounded() {
    for price in [-300.0, -110.0, 100.0, 120.0, 400.0] {
        let mut previous = 0.0;
        for step in 1..100 {
            let p = prob(f64::from(step) / 100.0);
            let fraction = kelly_fraction(p, Some(odds(price)));
            assert!((0.0..=1.0).contains(&fraction), "{fraction} out of range");
            assert!(
                fraction >= previous,
                "kelly decreased at p={} for {price}",
                p.value()
            );
            previous = fraction;
        }
    }
}

#[test]
fn kelly_matches_closed_form() {
    // b = 1.2, p = 0.6: (1.2 * 0.6 - 0.4) / 1.2
    assert_close(kelly_fraction(prob(0.6), Some(odds(120.0))), 0.32 / 1.2, 1e-12);
    // Negative edge at -110 is sized as zero.
    assert_eq!(kelly_fraction(prob(0.5), Some(odds(-110.0))), 0.0);
}

#[test]
fn kelly_stake_rounds_to_cents() {
    assert_eq!(kelly_stake(0.32 / 1.2, dec!(100)), dec!(26.67));
    assert_eq!(kelly_stake(0.0, dec!(100)), dec!(0));
}
