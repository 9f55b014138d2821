//! Fixture: persisted settings with sections and a nested model.

use formgen::Surface;

#[derive(Surface)]
#[surface(kinds(settings), rename_all = "camelCase")]
pub struct Prefs {
    #[surface(visible, modifiable, section = "Audio", default = "0.5")]
    pub master_volume: f64,

    #[surface(visible, modifiable)]
    pub muted: bool,

    #[surface(visible, section = "Appearance")]
    pub theme: Theme,
}

#[derive(Surface)]
#[surface(kinds(settings))]
pub struct Theme {
    #[surface(visible, modifiable)]
    pub dark: bool,
}
