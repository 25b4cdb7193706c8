use advice::before;

#[before("quiet", no_doc)]
fn undocumented() -> i32 {
    1
}

fn main() {
    assert_eq!(undocumented(), 1);
}
