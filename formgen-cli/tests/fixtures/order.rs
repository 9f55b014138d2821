//! Fixture: nested models across files.

use formgen::Surface;

mod shipping {
    use formgen::Surface;

    #[derive(Surface)]
    #[surface(kinds(form, view))]
    pub struct Address {
        #[surface(visible, modifiable)]
        pub street: String,

        #[surface(visible, modifiable)]
        pub zip: u32,
    }
}

#[derive(Surface)]
#[surface(kinds(form, view), style = "labeled")]
pub struct Order {
    #[surface(visible)]
    pub placed: NaiveDate,

    #[surface(visible, modifiable)]
    pub shipping: shipping::Address,
}
