mod probe_config;

pub use probe_config::ProbeConfig;
