pub mod langmuir;
pub mod species;
pub mod surface;
