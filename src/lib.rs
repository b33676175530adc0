// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checksum;
mod error;
mod taxpayer_id;

// This is the public API of the library
pub use checksum::{
    validate_cnpj, validate_cpf, CnpjChecksum, CpfChecksum, TaxpayerIdType, Validator,
};
pub use error::InvalidTaxpayerId;
pub use taxpayer_id::{Cnpj, Cpf};
