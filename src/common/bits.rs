//! # Bit Math
//!
//! Power-of-two helpers used by the quadtrees and map sizing.

/// Returns the smallest power of two greater than or equal to `value`.
///
/// # Examples
///
/// ```
/// use loam::common::next_power_of_two;
///
/// assert_eq!(next_power_of_two(0), 1);
/// assert_eq!(next_power_of_two(17), 32);
/// ```
pub fn next_power_of_two(value: u32) -> u32 {
    if value == 0 {
        return 1;
    }
    let mut v = value - 1;
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    v + 1
}

/// Floor of the base-2 logarithm. `log2(0)` is defined as 0.
pub fn log2(value: u32) -> u32 {
    if value == 0 {
        0
    } else {
        31 - value.leading_zeros()
    }
}

/// True if `value` is a power of two.
pub fn is_power_of_two(value: u32) -> bool {
    value != 0 && (value & (value - 1)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_power_of_two_rounds_up() {
        assert_eq!(next_power_of_two(0), 1);
        assert_eq!(next_power_of_two(1), 1);
        assert_eq!(next_power_of_two(2), 2);
        assert_eq!(next_power_of_two(3), 4);
        assert_eq!(next_power_of_two(64), 64);
        assert_eq!(next_power_of_two(65), 128);
        assert_eq!(next_power_of_two(1023), 1024);
    }

    #[test]
    fn log2_is_floor() {
        assert_eq!(log2(1), 0);
        assert_eq!(log2(2), 1);
        assert_eq!(log2(3), 1);
        assert_eq!(log2(32), 5);
        assert_eq!(log2(33), 5);
        assert_eq!(log2(2048), 11);
    }

    #[test]
    fn power_of_two_predicate() {
        assert!(is_power_of_two(1));
        assert!(is_power_of_two(256));
        assert!(!is_power_of_two(0));
        assert!(!is_power_of_two(36));
    }
}
