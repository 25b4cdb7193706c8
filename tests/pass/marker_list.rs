use advice::before;

#[before("first", value = "second")]
fn twice_advised() -> u8 {
    2
}

fn main() {
    assert_eq!(twice_advised(), 2);
}
