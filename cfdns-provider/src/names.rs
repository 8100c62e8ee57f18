//! 域名名称处理

/// 去掉域名末尾的点：`"example.com."` -> `"example.com"`
pub fn normalize_domain_name(name: &str) -> String {
    name.trim_end_matches('.').to_string()
}

/// 将用户输入的名称转换为完整域名
///
/// A name already inside `domain` (on a label boundary, ignoring ASCII case) is
/// kept as typed minus any trailing dot. Anything else gets `.domain` appended.
/// `@` has no special meaning.
///
/// ```
/// use cfdns_provider::qualify_name;
///
/// assert_eq!(qualify_name("www", "example.com"), "www.example.com");
/// assert_eq!(qualify_name("www.example.com.", "example.com"), "www.example.com");
/// assert_eq!(qualify_name("example.com", "example.com"), "example.com");
/// ```
pub fn qualify_name(name: &str, domain: &str) -> String {
    let name = name.trim_end_matches('.');
    let domain = domain.trim_end_matches('.');

    if is_within(name, domain) {
        name.to_string()
    } else {
        format!("{name}.{domain}")
    }
}

fn is_within(name: &str, domain: &str) -> bool {
    let Some(cut) = name.len().checked_sub(domain.len()) else {
        return false;
    };
    if !name.is_char_boundary(cut) {
        return false;
    }
    let (head, tail) = name.split_at(cut);
    tail.eq_ignore_ascii_case(domain) && (head.is_empty() || head.ends_with('.'))
}
