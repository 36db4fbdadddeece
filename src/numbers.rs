// Integer arithmetic the demo walks through first: floored division,
// remainder, rebuilding the dividend, and a power.

pub(crate) fn main() {
    let a: i64 = 17;
    let b: i64 = 3;
    let d = a / b; // floored quotient
    println!("{}", d);
    let e = a % b; // remainder of the division
    println!("{}", e);
    // floored quotient * divisor + remainder
    println!("{}", d * b + e);

    let a = 8i64.pow(2);
    println!("{}", a);
}

#[cfg(test)]
mod tests {
    #[test]
    fn quotient_and_remainder_rebuild_the_dividend() {
        let (a, b) = (17i64, 3i64);
        assert_eq!(a / b, 5);
        assert_eq!(a % b, 2);
        assert_eq!((a / b) * b + a % b, a);
    }

    #[test]
    fn power_matches_repeated_multiplication() {
        assert_eq!(8i64.pow(2), 64);
        assert_eq!(8i64.pow(2), 8 * 8);
    }
}
