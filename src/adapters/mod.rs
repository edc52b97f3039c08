mod system_process;

pub use system_process::SystemProcessRunner;
