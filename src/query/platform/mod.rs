//! Platform-specific query source implementations.
//!
//! # Platform Support
//!
//! - **Windows**: Uses the `GetAdaptersAddresses` API via the `windows`
//!   crate.
//! - **Other platforms**: A stub source whose queries fail with
//!   [`QueryError::Unsupported`](crate::query::QueryError::Unsupported).

#[cfg(not(windows))]
mod unsupported;
#[cfg(windows)]
mod windows;

#[cfg(not(windows))]
pub use unsupported::UnsupportedSource;
#[cfg(windows)]
pub use windows::WindowsSource;

// Re-export the platform-specific source as PlatformSource for convenience
#[cfg(not(windows))]
pub use unsupported::UnsupportedSource as PlatformSource;
#[cfg(windows)]
pub use windows::WindowsSource as PlatformSource;
