// libs/shared/utils/src/rut.rs
//
// Chilean RUT checksum validation and display formatting.

/// Checks the mod-11 verification digit of a RUT.
///
/// Dots and the dash are stripped first; the cleaned value must be 8 or 9
/// characters (7-8 body digits plus the check character). The check
/// character is compared case-insensitively, so `12345670-K` and
/// `12345670-k` are both accepted. Malformed input yields `false`, never an
/// error.
pub fn validate(rut: &str) -> bool {
    // Dots are separators anywhere, but only the one expected dash is
    // stripped; a second dash stays in the body and fails digit parsing,
    // so "1-2345678-5" is rejected.
    let mut clean: Vec<char> = rut.chars().filter(|c| *c != '.').collect();
    if let Some(pos) = clean.iter().position(|c| *c == '-') {
        clean.remove(pos);
    }
    if clean.len() < 8 || clean.len() > 9 {
        return false;
    }

    let (body, check) = clean.split_at(clean.len() - 1);
    let check = check[0].to_ascii_lowercase();

    // Weighted sum from the least-significant digit, multipliers cycling
    // 2..=7.
    let mut sum: u32 = 0;
    let mut mult: u32 = 2;
    for c in body.iter().rev() {
        let Some(digit) = c.to_digit(10) else {
            return false;
        };
        sum += digit * mult;
        mult = if mult == 7 { 2 } else { mult + 1 };
    }

    let expected = match sum % 11 {
        0 => '0',
        1 => 'k',
        r => char::from_digit(11 - r, 10).unwrap_or('?'),
    };
    check == expected
}

/// Formats a RUT for display: thousands-dotted body, dash, check character.
///
/// Everything but digits and `k`/`K` is dropped, so re-formatting already
/// formatted output is a no-op. Used for live input formatting while the
/// user types, which is why a single leading character is returned as-is.
pub fn format(rut: &str) -> String {
    let clean: Vec<char> = rut
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == 'k' || *c == 'K')
        .collect();
    if clean.len() <= 1 {
        return clean.into_iter().collect();
    }

    let (body, check) = clean.split_at(clean.len() - 1);
    let mut out = String::with_capacity(clean.len() + body.len() / 3 + 1);
    for (i, c) in body.iter().enumerate() {
        // A dot lands where the rest of the digit run splits into exact
        // groups of three; a stray k in the body never counts toward a
        // group.
        let run = body[i..].iter().take_while(|c| c.is_ascii_digit()).count();
        if i > 0 && run > 0 && run % 3 == 0 {
            out.push('.');
        }
        out.push(*c);
    }
    out.push('-');
    out.push(check[0]);
    out
}
