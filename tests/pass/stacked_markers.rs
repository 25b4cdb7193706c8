use advice::before;

#[before("outer")]
#[before("inner")]
fn stacked() -> u8 {
    2
}

#[before("outer")]
#[advice::before("qualified")]
fn stacked_qualified() -> u8 {
    2
}

fn main() {
    assert_eq!(stacked(), 2);
    assert_eq!(stacked_qualified(), 2);
}
