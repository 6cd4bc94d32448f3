// One module per SOLID principle, each pairing a `violation` submodule with
// the preferred shape at the module root. Open/Closed is built on `crate::core`.

pub mod dip;
pub mod isp;
pub mod lsp;
pub mod ocp;
pub mod srp;
