use lat_detect::data::ExpConfig;

#[test]
fn default_config_validates() {
    let config = ExpConfig::default();

    config.validate().unwrap();
    assert_eq!(config.depth, 0.67);
    assert_eq!(config.width, 0.75);
    assert_eq!(config.num_classes, 10);
    assert_eq!(config.max_epoch, 15);
    assert_eq!(config.input_size, (800, 800));
    assert_eq!(config.test_size, (800, 800));
}

#[test]
fn rejects_zero_classes() {
    let config = ExpConfig::new().with_num_classes(0);

    assert!(config.validate().is_err());
}

#[test]
fn rejects_non_positive_multipliers() {
    assert!(ExpConfig::new().with_depth(0.0).validate().is_err());
    assert!(ExpConfig::new().with_width(-0.5).validate().is_err());
}

#[test]
fn rejects_zero_sizes_and_epochs() {
    assert!(ExpConfig::new().with_input_size(0, 800).validate().is_err());
    assert!(ExpConfig::new().with_test_size(800, 0).validate().is_err());
    assert!(ExpConfig::new().with_max_epoch(0).validate().is_err());
}
