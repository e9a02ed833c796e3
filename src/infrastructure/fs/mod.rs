//! File system helpers

mod home;

pub use home::{layer_maker_home_dir, LAYER_MAKER_TEST_HOME_VAR};
