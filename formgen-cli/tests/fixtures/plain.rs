//! Fixture: no surfaces.

#[derive(Debug, Clone)]
pub struct Plain {
    pub value: i32,
}

pub enum Mode {
    Light,
    Dark,
}
