//! Tests for layered settings loading
//!
//! Environment overrides live in this file alone: each integration test file is
//! its own process, so setting `TREEVIS_*` here cannot leak into other tests.

use std::env;
use std::io::Write;

use treevis::config::Settings;
use treevis::util::testing;

#[test]
fn given_env_overrides_when_loading_then_env_wins_over_config_file() {
    // Arrange
    testing::init_test_setup();
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(b"product_modulus = 97\nparallel = false\n")
        .unwrap();
    env::set_var("TREEVIS_PRODUCT_MODULUS", "13");
    env::set_var("TREEVIS_PARALLEL", "true");

    // Act
    let settings = Settings::load_layers(None, Some(file.path())).unwrap();

    // Assert
    assert_eq!(settings.product_modulus, Some(13));
    assert!(settings.parallel);
    assert!(!settings.show_tree);
}
