use advice::before;

#[before("greeting")]
fn greet() -> i32 {
    42
}

fn main() {
    assert_eq!(greet(), 42);
}
