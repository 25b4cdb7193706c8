//! The advice applies to any function shape: any visibility, any parameter list.

use advice::before;

mod shapes {
    use advice::before;

    #[before("public")]
    pub fn public() -> i32 {
        1
    }

    #[before("private")]
    fn private() -> i32 {
        2
    }

    pub fn call_private() -> i32 {
        private()
    }
}

#[before("unsafe")]
unsafe fn dangerous(ptr: *const i32) -> i32 {
    *ptr
}

#[before("where clause")]
fn describe<T>(value: T) -> String
where
    T: std::fmt::Debug,
{
    format!("{:?}", value)
}

fn main() {
    assert_eq!(shapes::public(), 1);
    assert_eq!(shapes::call_private(), 2);

    let value = 3;
    assert_eq!(unsafe { dangerous(&value) }, 3);

    assert_eq!(describe(4), "4");
}
