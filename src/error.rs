use thiserror::Error;

/// Why a candidate was rejected by [`Cpf::parse`](crate::Cpf::parse) or
/// [`Cnpj::parse`](crate::Cnpj::parse). The boolean validators collapse all
/// of these into `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTaxpayerId {
    #[error("expected {expected} digits, found {found}")]
    WrongDigitCount { expected: usize, found: usize },

    #[error("all digits are identical")]
    RepeatedDigitSequence,

    #[error("check digits do not match")]
    ChecksumMismatch,
}
