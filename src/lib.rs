// Thin root shell: re-export the workspace crates the binary wires together.
pub use client_core as client;
pub use client_runtime as runtime;
pub use platform_winit;
