pub mod carousel_view;
pub mod layer_style;
pub mod viewer;
