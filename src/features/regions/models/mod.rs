mod province;
mod unit;
mod ward;

pub use province::Province;
pub use unit::AdministrativeUnit;
pub use ward::Ward;
