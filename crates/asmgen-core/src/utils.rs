/// Turn arbitrary pattern text into an identifier.
///
/// Every run of characters that are not ASCII alphanumeric becomes a single
/// `_`; leading and trailing underscores are dropped. An identifier that would
/// start with a digit gets a leading `_`. Empty results become `_`.
///
/// # Examples
/// ```
/// use asmgen_core::utils::to_identifier;
/// assert_eq!(to_identifier("ld.b"), "ld_b");
/// assert_eq!(to_identifier("[a-z]+"), "a_z");
/// assert_eq!(to_identifier("0x"), "_0x");
/// ```
pub fn to_identifier(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut pending_separator = false;
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !result.is_empty() {
                result.push('_');
            }
            pending_separator = false;
            result.push(c);
        } else {
            pending_separator = true;
        }
    }

    if result.is_empty() {
        return "_".to_string();
    }
    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }
    result
}

/// Identifier in SCREAMING_SNAKE_CASE, as used for token names.
///
/// # Examples
/// ```
/// use asmgen_core::utils::to_screaming_snake_case;
/// assert_eq!(to_screaming_snake_case("mov.w"), "MOV_W");
/// ```
pub fn to_screaming_snake_case(s: &str) -> String {
    to_identifier(s).to_ascii_uppercase()
}

/// Render a literal character the way a pattern would spell it.
///
/// Characters that carry meaning in patterns are escaped, non-printable ones
/// use `\xNN`.
///
/// # Examples
/// ```
/// use asmgen_core::utils::escape_pattern_char;
/// assert_eq!(escape_pattern_char(','), ",");
/// assert_eq!(escape_pattern_char('+'), "\\+");
/// assert_eq!(escape_pattern_char('\t'), "\\t");
/// ```
pub fn escape_pattern_char(c: char) -> String {
    match c {
        '\n' => "\\n".to_string(),
        '\t' => "\\t".to_string(),
        '\r' => "\\r".to_string(),
        '+' | '*' | '?' | '[' | ']' | '-' | '^' | '(' | ')' | '|' | '\\' => {
            format!("\\{c}")
        }
        ' '..='~' => c.to_string(),
        _ => format!("\\x{:02x}", c as u32 & 0xff),
    }
}

/// Escape every character of `s` with [`escape_pattern_char`].
pub fn escape_pattern(s: &str) -> String {
    s.chars().map(escape_pattern_char).collect()
}
