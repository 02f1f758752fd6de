pub mod button;
pub mod icons;
pub mod navbar;
pub mod sponsors;
