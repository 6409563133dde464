//! Core module - role classification and wizard navigation logic

pub mod config;
pub mod nav;
pub mod roles;
pub mod wizard;

pub use config::Config;
pub use roles::{is_admin_tier, is_team_member_tier, Privilege};
pub use wizard::{
    active_sequence, FlowError, ShellConfig, StepDef, Theme, WizardEvent, WizardMachine,
};
