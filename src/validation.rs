use regex::Regex;

/// Strips every character that is not an ASCII digit.
///
/// The gateway expects documents, phones and postal codes as bare digit
/// strings, so all loosely formatted input ("12.345.678/0001-95",
/// "(11) 98765-4321") goes through here first.
pub fn only_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validates email format.
pub fn is_valid_email(email: &str) -> bool {
    // RFC 5322 simplified email regex
    // Matches: local@domain.tld
    let email_regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap();

    email_regex.is_match(email)
}

/// Validates URL format.
///
/// The gateway rejects notification URLs without an http/https scheme
/// (responds with a 500 when the scheme is missing), so the scheme check
/// is part of the syntactic validation here.
pub fn is_valid_url(raw: &str) -> bool {
    match url::Url::parse(raw) {
        Ok(parsed) => {
            (parsed.scheme() == "http" || parsed.scheme() == "https") && parsed.has_host()
        }
        Err(_) => false,
    }
}

/// Validates a CPF (Brazilian individual taxpayer number).
///
/// Expects an already digit-stripped string. Rules:
/// - exactly 11 digits;
/// - sequences of one repeated digit are invalid even though their check
///   digits match (e.g. "11111111111");
/// - the two check digits must match the mod-11 weighted sums over the
///   first 9 and 10 digits respectively.
pub fn is_valid_cpf(digits: &str) -> bool {
    if digits.len() != 11 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    let d: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();

    if d.iter().all(|&x| x == d[0]) {
        return false;
    }

    cpf_check_digit(&d[..9]) == d[9] && cpf_check_digit(&d[..10]) == d[10]
}

/// Computes one CPF check digit over a digit prefix.
///
/// Weights run from `prefix.len() + 1` down to 2; a remainder of 0 or 1
/// maps to check digit 0, otherwise the check digit is `11 - remainder`.
fn cpf_check_digit(prefix: &[u32]) -> u32 {
    let top = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .zip((2..=top).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();

    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_digits_strips_formatting() {
        assert_eq!(only_digits("12.345.678/0001-95"), "12345678000195");
        assert_eq!(only_digits("(11) 98765-4321"), "11987654321");
        assert_eq!(only_digits("abc"), "");
        assert_eq!(only_digits(""), "");
    }

    #[test]
    fn test_valid_cpf_accepted() {
        assert!(is_valid_cpf("52998224725"));
        assert!(is_valid_cpf("11144477735"));
    }

    #[test]
    fn test_repeated_digit_cpf_rejected() {
        for digit in 0..=9 {
            let cpf = digit.to_string().repeat(11);
            assert!(!is_valid_cpf(&cpf), "CPF {} should be invalid", cpf);
        }
    }

    #[test]
    fn test_wrong_check_digits_rejected() {
        assert!(!is_valid_cpf("52998224726"));
        assert!(!is_valid_cpf("52998224715"));
    }

    #[test]
    fn test_wrong_length_cpf_rejected() {
        assert!(!is_valid_cpf("5299822472"));
        assert!(!is_valid_cpf("529982247250"));
        assert!(!is_valid_cpf(""));
    }

    #[test]
    fn test_non_digit_cpf_rejected() {
        assert!(!is_valid_cpf("5299822472a"));
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.com.br"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld@double.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_url_validation() {
        assert!(is_valid_url("https://example.com/notify"));
        assert!(is_valid_url("http://example.com"));
        assert!(!is_valid_url("example.com/notify"));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url(""));
    }
}
