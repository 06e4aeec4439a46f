pub mod jpeg_preprocessor;
