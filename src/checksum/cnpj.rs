use crate::checksum::{
    collect_digits, is_repeated_digit_sequence, mod11_check_digit, weighted_sum, Validator,
};

pub struct CnpjChecksum;

pub(crate) const CNPJ_DIGIT_COUNT: usize = 14;

// The official weighting is cyclical: descending from 5 (respectively 6 for
// the second check digit) to 2, wrapping back to 9.
const FIRST_CHECK_WEIGHTS: &[u32] = &[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_CHECK_WEIGHTS: &[u32] = &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

impl Validator for CnpjChecksum {
    // https://pt.wikipedia.org/wiki/Cadastro_Nacional_da_Pessoa_Jur%C3%ADdica
    fn is_valid(&self, candidate: &str) -> bool {
        let digits = match collect_digits(candidate, CNPJ_DIGIT_COUNT) {
            Some(digits) => digits,
            None => return false,
        };
        !is_repeated_digit_sequence(&digits) && check_digits_match(&digits)
    }
}

/// Verifies both check digits of a 14-digit CNPJ.
pub(crate) fn check_digits_match(digits: &[u32]) -> bool {
    let first = mod11_check_digit(weighted_sum(&digits[..12], FIRST_CHECK_WEIGHTS));
    if first != digits[12] {
        return false;
    }
    let second = mod11_check_digit(weighted_sum(&digits[..13], SECOND_CHECK_WEIGHTS));
    second == digits[13]
}

/// Validates a CNPJ candidate. Formatting punctuation is ignored; any input
/// that does not strip down to exactly 14 digits with matching check digits
/// yields `false`. Never panics.
pub fn validate_cnpj(input: &str) -> bool {
    CnpjChecksum.is_valid(input)
}
