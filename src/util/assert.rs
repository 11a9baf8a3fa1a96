pub fn assert_partial_ord<T: PartialOrd>(_: &T) {}
pub fn assert_same_type<T, U>(_: &T, _: &U) {}

#[allow(unused_macros)]
#[macro_export]
macro_rules! current_location {
    () => {
        format!("{}:{}", file!(), line!())
    };
}
#[allow(unused_imports)]
pub use current_location;

#[allow(unused_macros)]
#[macro_export]
macro_rules! check_lt {
    ($lhs:expr, $rhs:expr) => {{
        let lhs = $lhs;
        let rhs = $rhs;
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        $crate::util::assert::assert_partial_ord(&lhs);
        if lhs >= rhs {
            panic!(
                "check failed: {}: {} < {}: {:?} vs. {:?}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs
            );
        }
    }};
}
#[allow(unused_imports)]
pub use check_lt;

#[cfg(test)]
mod tests {
    #[test]
    fn passing_check_does_not_panic() {
        check_lt!(1, 2);
        check_lt!(-1.5, 0.);
    }

    #[test]
    #[should_panic(expected = "check failed")]
    fn failing_check_lt_panics() {
        check_lt!(2, 1);
    }

    #[test]
    #[should_panic(expected = "x < y")]
    fn failing_check_lt_names_expressions() {
        let x = 3;
        let y = 2;
        check_lt!(x, y);
    }
}
