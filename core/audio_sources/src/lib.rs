pub mod bus;
pub mod constants;
pub mod params;
pub mod source;
pub mod video;
pub mod wav;
