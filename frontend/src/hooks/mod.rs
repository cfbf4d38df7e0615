pub mod use_element_width;
