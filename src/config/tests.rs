//! Tests for the config module

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use crate::config::{calculate_tf_base_dir, BackendType, Config, Value};
    use crate::constants::{DEFAULT_TF_STATE_FILE_NAME, DEFAULT_TF_WORKSPACE_DIR_NAME};
    use crate::error::Error;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
    }

    #[test]
    #[allow(clippy::approx_constant)]
    fn load_config_should_pass() {
        let config = Config::load_config(fixture("simple-config.yaml")).unwrap();
        let backend = &config.terraform.backend;
        assert_eq!(backend.kind(), BackendType::Local);

        let base_dir = calculate_tf_base_dir().unwrap();
        let local = backend.local().unwrap();
        assert_eq!(local.path, base_dir.join(DEFAULT_TF_STATE_FILE_NAME));
        assert_eq!(local.workspace, base_dir.join(DEFAULT_TF_WORKSPACE_DIR_NAME));

        let ansible = config.ansible.as_ref().unwrap();
        assert_eq!(ansible.inventory_file, "my-inventory");
        assert_eq!(ansible.playbook_file, "myplaybook.yaml");

        let variables = config.variables.as_ref().unwrap();
        assert_eq!(variables["textvar"], Value::String("some text".to_string()));
        assert_eq!(variables["intvar"], Value::Int(123));
        assert_eq!(variables["boolvar"], Value::Bool(true));
        let complexvar = variables["complexvar"].as_map().unwrap();
        assert_eq!(complexvar["stringprop"].as_str(), Some("string property"));
        assert_eq!(complexvar["floatprop"].as_f64(), Some(3.14));
    }

    #[test]
    fn should_error_for_invalid_backend_type() {
        let err = Config::load_config(fixture("invalid-backend-config.yaml")).unwrap_err();
        assert_eq!(err.to_string(), "invalid backend type: foo");
    }

    #[test]
    fn resolving_defaults_twice_is_idempotent() {
        let mut config = Config::load_config(fixture("simple-config.yaml")).unwrap();
        let first = config.terraform.backend.clone();
        config.resolve_backend_defaults().unwrap();
        assert_eq!(config.terraform.backend, first);
    }

    #[test]
    fn partial_local_backend_only_fills_missing_field() {
        let config = Config::load_config(fixture("partial-local-config.yaml")).unwrap();
        let local = config.terraform.backend.local().unwrap();
        assert_eq!(local.path, PathBuf::from("/var/lib/liftoff/prod.tfstate"));
        assert_eq!(
            local.workspace,
            calculate_tf_base_dir().unwrap().join(DEFAULT_TF_WORKSPACE_DIR_NAME)
        );
        assert!(config.ansible.is_none());
        assert!(config.variables.is_none());
    }

    #[test]
    fn explicit_local_paths_are_kept() {
        let config = Config::load_config(fixture("sample-config.yaml")).unwrap();
        let local = config.terraform.backend.local().unwrap();
        assert_eq!(local.path, PathBuf::from("/tmp/liftoff/terraform.tfstate"));
        assert_eq!(local.workspace, PathBuf::from("/tmp/liftoff/workspace"));
    }

    #[test]
    fn remote_backend_is_loaded() {
        let config = Config::load_config(fixture("remote-config.yaml")).unwrap();
        assert_eq!(config.terraform.backend.kind(), BackendType::Remote);
        let remote = config.terraform.backend.remote().unwrap();
        assert_eq!(remote.settings["organization"].as_str(), Some("bitshift"));
    }

    #[test]
    fn missing_backend_is_reported() {
        let err = Config::load_config(fixture("missing-backend-config.yaml")).unwrap_err();
        assert!(matches!(err, Error::MissingField("terraform.backend")));
    }

    #[test]
    fn missing_terraform_section_is_reported() {
        let err = Config::from_yaml_str("variables:\n  a: 1\n").unwrap_err();
        assert!(matches!(err, Error::MissingField("terraform")));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Config::load_config(fixture("does-not-exist.yaml")).unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = Config::from_yaml_str("terraform: [unclosed").unwrap_err();
        assert!(matches!(err, Error::ParseError(_)));
    }

    #[test]
    fn non_mapping_variables_are_empty() {
        let config = Config::from_yaml_str(
            "terraform:\n  backend:\n    type: remote\nvariables: [a, b]\n",
        )
        .unwrap();
        assert_eq!(config.variables.map(|v| v.len()), Some(0));
    }
}
