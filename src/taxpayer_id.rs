use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checksum::{cnpj, cpf, is_repeated_digit_sequence};
use crate::error::InvalidTaxpayerId;

/// A validated CPF, stored as its 11 bare digits.
///
/// Construction goes through [`Cpf::parse`] (or `FromStr`/serde, which
/// delegate to it), so a value of this type always carries matching check
/// digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    /// Strips formatting punctuation from `input` and validates the result.
    pub fn parse(input: &str) -> Result<Self, InvalidTaxpayerId> {
        let digits = normalized_digits(input, cpf::CPF_DIGIT_COUNT)?;
        if !cpf::check_digits_match(&digits) {
            return Err(InvalidTaxpayerId::ChecksumMismatch);
        }
        Ok(Self(digit_string(&digits)))
    }

    /// The bare digits, without formatting punctuation.
    pub fn as_digits(&self) -> &str {
        &self.0
    }
}

/// A validated CNPJ, stored as its 14 bare digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj(String);

impl Cnpj {
    /// Strips formatting punctuation from `input` and validates the result.
    pub fn parse(input: &str) -> Result<Self, InvalidTaxpayerId> {
        let digits = normalized_digits(input, cnpj::CNPJ_DIGIT_COUNT)?;
        if !cnpj::check_digits_match(&digits) {
            return Err(InvalidTaxpayerId::ChecksumMismatch);
        }
        Ok(Self(digit_string(&digits)))
    }

    /// The bare digits, without formatting punctuation.
    pub fn as_digits(&self) -> &str {
        &self.0
    }
}

fn normalized_digits(input: &str, expected: usize) -> Result<Vec<u32>, InvalidTaxpayerId> {
    let digits: Vec<u32> = input.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != expected {
        return Err(InvalidTaxpayerId::WrongDigitCount {
            expected,
            found: digits.len(),
        });
    }
    if is_repeated_digit_sequence(&digits) {
        return Err(InvalidTaxpayerId::RepeatedDigitSequence);
    }
    Ok(digits)
}

fn digit_string(digits: &[u32]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d as u8)).collect()
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Cpf {
    type Err = InvalidTaxpayerId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromStr for Cnpj {
    type Err = InvalidTaxpayerId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cpf {
    type Error = InvalidTaxpayerId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<String> for Cnpj {
    type Error = InvalidTaxpayerId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cpf> for String {
    fn from(id: Cpf) -> Self {
        id.0
    }
}

impl From<Cnpj> for String {
    fn from(id: Cnpj) -> Self {
        id.0
    }
}
