//! Fixture: a form and view with a secret member.

use formgen::Surface;

/// Sign-in details.
#[derive(Debug, Surface)]
#[surface(kinds(form, view))]
pub struct Login {
    #[surface(visible, modifiable)]
    pub user: String,

    #[surface(visible, modifiable, secure)]
    pub password: String,

    pub token: String,
}
