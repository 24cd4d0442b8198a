//! Points formulas.

/// Minimum daily balance that earns any points.
pub const MIN_POINTS_BALANCE: f64 = 100.0;

/// Minimum daily transaction total that earns any points.
pub const MIN_POINTS_TRANSACTION: f64 = 2.0;

const BALANCE_TIERS: [f64; 4] = [100.0, 1_000.0, 10_000.0, 100_000.0];

/// Balance points tier: one point per power-of-ten threshold reached, from 100.
pub fn balance_points(balance: f64) -> i64 {
    BALANCE_TIERS
        .iter()
        .take_while(|&&threshold| balance >= threshold)
        .count() as i64
}

/// Transaction points: `floor(log2(amount))`, or 0 below 2.
pub fn transaction_points(amount: f64) -> i64 {
    if !amount.is_finite() || amount < MIN_POINTS_TRANSACTION {
        return 0;
    }

    // log2 may land a hair off an integer; settle on the exponent `e` with
    // 2^e <= amount < 2^(e+1).
    let mut exponent = amount.log2().floor() as i32;
    while exponent > 1 && 2f64.powi(exponent) > amount {
        exponent -= 1;
    }
    while 2f64.powi(exponent + 1) <= amount {
        exponent += 1;
    }
    i64::from(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_points_boundaries() {
        assert_eq!(balance_points(-5.0), 0);
        assert_eq!(balance_points(0.0), 0);
        assert_eq!(balance_points(99.99), 0);
        assert_eq!(balance_points(100.0), 1);
        assert_eq!(balance_points(999.99), 1);
        assert_eq!(balance_points(1_000.0), 2);
        assert_eq!(balance_points(9_999.0), 2);
        assert_eq!(balance_points(10_000.0), 3);
        assert_eq!(balance_points(99_999.99), 3);
        assert_eq!(balance_points(100_000.0), 4);
        assert_eq!(balance_points(100_000.01), 4);
        assert_eq!(balance_points(1e12), 4);
    }

    #[test]
    fn test_balance_points_monotonic() {
        let mut last = 0;
        let mut b = 0.0;
        while b < 250_000.0 {
            let pts = balance_points(b);
            assert!(pts >= last, "not monotonic at {}", b);
            last = pts;
            b += 37.5;
        }
    }

    #[test]
    fn test_transaction_points_small_amounts() {
        assert_eq!(transaction_points(-10.0), 0);
        assert_eq!(transaction_points(0.0), 0);
        assert_eq!(transaction_points(1.0), 0);
        assert_eq!(transaction_points(1.999), 0);
        assert_eq!(transaction_points(2.0), 1);
        assert_eq!(transaction_points(f64::NAN), 0);
        assert_eq!(transaction_points(f64::INFINITY), 0);
    }

    #[test]
    fn test_transaction_points_exact_powers_of_two() {
        for e in 1..60 {
            let amount = 2f64.powi(e);
            assert_eq!(transaction_points(amount), i64::from(e), "2^{}", e);
            assert_eq!(transaction_points(amount * 0.999_999), i64::from(e - 1), "below 2^{}", e);
        }
        assert_eq!(transaction_points(8.0), 3);
        assert_eq!(transaction_points(300.0), 8);
        assert_eq!(transaction_points(1024.0), 10);
        assert_eq!(transaction_points(1023.99), 9);
    }
}
