pub mod carousel;
pub mod images;
