//! Board-support glue for the FPGA-hosted core.
//!
//! Nothing in here touches the numeric kernels. The loader is generic over
//! [`embedded_hal`] traits so its protocol logic unit tests on the host.

pub mod interrupt;
pub mod loader;

pub use interrupt::InterruptTable;
pub use loader::{LoaderError, SpiLoader};
