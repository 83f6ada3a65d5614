//! Constants used throughout liftoff

/// Configuration file looked up when `--config` is not given
pub const DEFAULT_CONFIG_FILENAME: &str = "liftoff.yaml";

/// Directory under the current working directory holding local Terraform state
pub const DEFAULT_WORK_DIR_NAME: &str = ".liftoff";

/// File name of the local backend state file inside the work directory
pub const DEFAULT_TF_STATE_FILE_NAME: &str = "terraform.tfstate";

/// Directory name of the local backend workspaces inside the work directory
pub const DEFAULT_TF_WORKSPACE_DIR_NAME: &str = "workspace";

/// Subdirectory holding Terraform templates (input) and rendered files (output)
pub const DEFAULT_TERRAFORM_DIR: &str = "terraform";

/// Subdirectory holding Ansible templates (input) and rendered files (output)
pub const DEFAULT_ANSIBLE_DIR: &str = "ansible";

/// Template file suffix, stripped from rendered output file names
pub const DEFAULT_TEMPLATE_SUFFIX: &str = ".j2";

/// Backend type tags
pub mod backend {
    pub const LOCAL: &str = "local";
    pub const REMOTE: &str = "remote";
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
