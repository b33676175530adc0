pub(crate) mod cnpj;
pub(crate) mod cpf;

pub use crate::checksum::cnpj::{validate_cnpj, CnpjChecksum};
pub use crate::checksum::cpf::{validate_cpf, CpfChecksum};

use serde::{Deserialize, Serialize};

pub trait Validator: Send + Sync {
    fn is_valid(&self, candidate: &str) -> bool;
}

/// Selects a checksum algorithm by name, for callers that configure
/// validation from serialized rule definitions rather than calling a
/// concrete validator directly.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum TaxpayerIdType {
    Cpf,
    Cnpj,
}

impl Validator for TaxpayerIdType {
    fn is_valid(&self, candidate: &str) -> bool {
        match self {
            TaxpayerIdType::Cpf => CpfChecksum.is_valid(candidate),
            TaxpayerIdType::Cnpj => CnpjChecksum.is_valid(candidate),
        }
    }
}

/// Collects exactly `expected` ASCII decimal digits from `input`, ignoring
/// every other character. Returns `None` when the input holds fewer or more
/// digits than that; scanning stops at the first surplus digit.
pub(crate) fn collect_digits(input: &str, expected: usize) -> Option<Vec<u32>> {
    let mut digits = Vec::with_capacity(expected);
    for c in input.chars() {
        if let Some(digit) = c.to_digit(10) {
            if digits.len() == expected {
                return None;
            }
            digits.push(digit);
        }
    }
    (digits.len() == expected).then_some(digits)
}

/// True when the sequence is a single digit repeated ("00000000000",
/// "11111111111", ...). Some of these satisfy the raw checksum math but are
/// registry placeholders that are never issued.
pub(crate) fn is_repeated_digit_sequence(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

pub(crate) fn weighted_sum(digits: &[u32], weights: &[u32]) -> u32 {
    digits
        .iter()
        .zip(weights)
        .map(|(digit, weight)| digit * weight)
        .sum()
}

/// Mod-11 check digit as defined by the Receita Federal: 11 minus the
/// remainder of the weighted sum, folded to 0 when the remainder is below 2.
pub(crate) fn mod11_check_digit(sum: u32) -> u32 {
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}
