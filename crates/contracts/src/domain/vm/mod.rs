pub mod aggregate;

pub use aggregate::{VirtualMachine, VmPoolResponse, VmResponse};
