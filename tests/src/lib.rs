//! This crate defines most tests for the `advice` crate.
//!
//! These are defined in a different crate, because otherwise `proc-macro-crate` does not work
//! properly.

#[cfg(test)]
mod tests {
    use advice::before;

    #[test]
    fn ui() {
        let t = trybuild::TestCases::new();
        t.pass("pass/*.rs");
    }

    #[before("greeting")]
    fn greet() -> i32 {
        42
    }

    #[test]
    fn returns_the_original_result() {
        assert_eq!(greet(), 42);
    }

    #[before("risky")]
    fn explode() -> i32 {
        panic!("boom")
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn propagates_panics() {
        let _ = explode();
    }

    #[before("fallible")]
    fn parse_digit(input: &str) -> Result<u32, std::num::ParseIntError> {
        input.parse()
    }

    #[test]
    fn passes_results_through() {
        assert_eq!(parse_digit("7"), Ok(7));
        assert!(parse_digit("x").is_err());
    }

    struct Counter {
        count: u32,
    }

    impl Counter {
        #[before("counter")]
        fn bump(&mut self) -> u32 {
            self.count += 1;
            self.count
        }
    }

    #[test]
    fn works_on_methods() {
        let mut counter = Counter { count: 0 };

        assert_eq!(counter.bump(), 1);
        assert_eq!(counter.bump(), 2);
    }

    #[before("generic")]
    fn first<T: Copy>(slice: &[T]) -> Option<T> {
        slice.first().copied()
    }

    #[test]
    fn works_on_generic_functions() {
        assert_eq!(first(&[1, 2, 3]), Some(1));
        assert_eq!(first::<i32>(&[]), None);
    }

    #[before("arguments")]
    fn add(a: i32, b: i32) -> i32 {
        a + b
    }

    #[test]
    fn arguments_pass_through_unchanged() {
        assert_eq!(add(40, 2), 42);
    }

    fn unadvised() -> i32 {
        7
    }

    #[test]
    fn unmarked_functions_are_untouched() {
        // No `before` attribute, so no interception takes place.
        assert_eq!(unadvised(), 7);
    }
}
