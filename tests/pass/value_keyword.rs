use advice::before;

#[before(value = "named")]
fn named_form() -> &'static str {
    "result"
}

fn main() {
    assert_eq!(named_form(), "result");
}
