use crate::checksum::{
    collect_digits, is_repeated_digit_sequence, mod11_check_digit, weighted_sum, Validator,
};

pub struct CpfChecksum;

pub(crate) const CPF_DIGIT_COUNT: usize = 11;

const FIRST_CHECK_WEIGHTS: &[u32] = &[10, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_CHECK_WEIGHTS: &[u32] = &[11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

impl Validator for CpfChecksum {
    // https://pt.wikipedia.org/wiki/Cadastro_de_Pessoas_F%C3%ADsicas#C%C3%A1lculo_do_d%C3%ADgito_verificador
    fn is_valid(&self, candidate: &str) -> bool {
        let digits = match collect_digits(candidate, CPF_DIGIT_COUNT) {
            Some(digits) => digits,
            None => return false,
        };
        !is_repeated_digit_sequence(&digits) && check_digits_match(&digits)
    }
}

/// Verifies both check digits of an 11-digit CPF.
pub(crate) fn check_digits_match(digits: &[u32]) -> bool {
    let first = mod11_check_digit(weighted_sum(&digits[..9], FIRST_CHECK_WEIGHTS));
    if first != digits[9] {
        return false;
    }
    // The second check digit also covers the first one
    let second = mod11_check_digit(weighted_sum(&digits[..10], SECOND_CHECK_WEIGHTS));
    second == digits[10]
}

/// Validates a CPF candidate. Formatting punctuation is ignored; any input
/// that does not strip down to exactly 11 digits with matching check digits
/// yields `false`. Never panics.
pub fn validate_cpf(input: &str) -> bool {
    CpfChecksum.is_valid(input)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_valid_cpfs() {
        let valid_ids = vec![
            "11144477735",
            "111.444.777-35",
            "012.345.678-90",
            "083.358.948-25",
            "52998224725",
            // second check digit produced by the fold-to-zero branch
            "01234567890",
            // first check digit produced by the fold-to-zero branch
            "390.000.000-09",
        ];
        for id in valid_ids {
            assert!(CpfChecksum.is_valid(id), "{id} should be valid");
        }
    }

    #[test]
    fn test_invalid_cpfs() {
        let invalid_ids = vec![
            // wrong checksum
            "11144477736",
            "345.675.677-78",
            "123.567.234-67",
            "678.534.123-98",
            "567.456.234-90",
            // non-digit unicode is stripped, checksum still wrong
            "567.456.234-90ñô",
            // wrong length
            "",
            "abc-def",
            "111444777",
            "111.444.777-3",
            "111444777350",
            "345.678.3428723-76",
        ];
        for id in invalid_ids {
            assert!(!CpfChecksum.is_valid(id), "{id:?} should be invalid");
        }
    }

    #[test]
    fn test_repeated_digit_sequences_rejected() {
        for digit in 0..=9 {
            let id = digit.to_string().repeat(11);
            assert!(!CpfChecksum.is_valid(&id), "{id} should be invalid");
        }
    }

    #[test]
    fn test_non_ascii_digits_are_not_significant() {
        // U+0665 ARABIC-INDIC DIGIT FIVE in place of the final '5'
        assert!(!CpfChecksum.is_valid("111.444.777-3٥"));
    }
}
