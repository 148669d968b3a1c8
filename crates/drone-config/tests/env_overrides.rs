use drone_config::DroneConfig;
use figment::Jail;

#[test]
fn env_sets_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("LAIRDRONE_GENERAL__PROJECT_ID", "from-env");
        jail.set_env("LAIRDRONE_EXTRACT__DEFAULT_HTTP_PORT", "8000");

        let config = DroneConfig::load().expect("config loads");
        assert_eq!(config.general.project_id, "from-env");
        assert_eq!(config.extract.default_http_port, 8000);
        assert_eq!(config.extract.os_weight, 50);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".lairdrone")?;
        jail.create_file(".lairdrone/config.toml", "[extract]\nos_weight = 20\n")?;
        jail.set_env("LAIRDRONE_EXTRACT__OS_WEIGHT", "30");

        let config = DroneConfig::load().expect("config loads");
        assert_eq!(config.extract.os_weight, 30);
        Ok(())
    });
}
