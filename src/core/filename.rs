use unicode_normalization::UnicodeNormalization;

/// Reduces an arbitrary title to a name safe as a path component on common
/// filesystems. NFKD decomposition runs first so accented characters keep
/// their base letter when the non-ASCII remnants are stripped; readability
/// is preferred over strict transliteration.
///
/// With `allow_path_separators` the input is treated as a full path and `/`
/// survives the filter. Spaces are kept through filtering and turned into
/// hyphens at the end, so titles never produce raw spaces on disk.
pub fn sanitize(raw: &str, allow_path_separators: bool) -> String {
    raw.nfkd()
        .filter(|c| c.is_ascii())
        .filter(|c| {
            c.is_ascii_alphanumeric()
                || matches!(c, '-' | '_' | '.' | ' ')
                || (allow_path_separators && *c == '/')
        })
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}
