/// Return the identifier without surrounding double quotes.
pub fn unquote_identifier(ident: &str) -> &str {
    ident
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(ident)
}

/// True when the identifier is written as a quoted identifier (`"Name"`).
pub fn is_quoted_identifier(ident: &str) -> bool {
    ident.len() >= 2 && ident.starts_with('"') && ident.ends_with('"')
}

/// Resolve a single identifier the way `PostgreSQL` does.
///
/// Quoted identifiers keep their exact spelling (with `""` unescaped),
/// unquoted identifiers fold to lower case.
pub fn resolve_identifier(ident: &str) -> String {
    let ident = ident.trim();
    if is_quoted_identifier(ident) {
        unquote_identifier(ident).replace("\"\"", "\"")
    } else {
        ident.to_ascii_lowercase()
    }
}

/// Split a potentially schema-qualified name into its dot-separated parts.
///
/// Handles dots inside quoted identifiers, e.g. `"my.schema"."table.name"`.
/// Quotes are kept on each part so callers can still tell quoted from bare.
pub fn split_qualified_name(name: &str) -> Vec<&str> {
    let mut in_quotes = false;
    let mut start = 0usize;
    let mut parts: Vec<&str> = Vec::new();

    for (idx, ch) in name.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            '.' if !in_quotes => {
                parts.push(name[start..idx].trim());
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(name[start..].trim());
    parts
}

/// Split a potentially schema-qualified name into `(schema, relation)`.
///
/// Returns `None` for bare names.
pub fn split_schema_and_relation(name: &str) -> Option<(String, String)> {
    let parts = split_qualified_name(name);
    if parts.len() < 2 {
        return None;
    }

    let schema = resolve_identifier(parts[parts.len() - 2]);
    let relation = resolve_identifier(parts[parts.len() - 1]);
    Some((schema, relation))
}

/// Reduce an object name to its bare relation identifier.
///
/// Examples:
/// - `"public.accounts"` -> `"accounts"`
/// - `"\"App\".\"User Accounts\""` -> `"User Accounts"`
/// - `"Accounts"` -> `"accounts"`
pub fn bare_relation_name(name: &str) -> String {
    if let Some((_, relation)) = split_schema_and_relation(name.trim()) {
        return relation;
    }
    resolve_identifier(name)
}
