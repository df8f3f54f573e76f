// Adapters layer: concrete implementations of the backend ports.

pub mod dry_run;

pub use dry_run::DryRunBackends;
